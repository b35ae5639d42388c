//! Types shared by every resource family.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Free-form tags: simple key/value pairs with no predefined name or namespace.
pub type FreeformTags = HashMap<String, String>;

/// Defined tags, keyed by namespace then tag name.
pub type DefinedTags = HashMap<String, HashMap<String, serde_json::Value>>;

/// An enumerated value that travels on the wire as a fixed string.
pub trait WireEnum: Copy + fmt::Debug {
    /// Name reported in [`Error::InvalidEnumValue`](crate::Error::InvalidEnumValue).
    const FIELD: &'static str;

    /// Every value the service accepts.
    const ALLOWED: &'static [&'static str];

    /// Wire representation.
    fn as_str(&self) -> &'static str;

    /// `false` only for the forward-compatibility fallback of response enums.
    fn is_known(&self) -> bool {
        true
    }
}

/// Closed enumeration accepted in requests.
///
/// Generates serde renames, [`WireEnum`], `Display` and a `FromStr` that
/// reports the allowed values on mismatch.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $( $(#[$vmeta])* #[serde(rename = $wire)] $variant, )+
        }

        impl $crate::types::WireEnum for $name {
            const FIELD: &'static str = stringify!($name);
            const ALLOWED: &'static [&'static str] = &[$($wire),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $wire, )+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::types::WireEnum::as_str(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s {
                    $( $wire => Ok(Self::$variant), )+
                    other => Err($crate::types::common::invalid_enum_value::<Self>(other)),
                }
            }
        }
    };
}

/// Enumeration returned by the service.
///
/// Same as `wire_enum!` plus an `UnknownValue` variant that absorbs values
/// added to the service after this client was built. `UnknownValue` is never
/// accepted as a request parameter.
macro_rules! open_wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $( $(#[$vmeta])* #[serde(rename = $wire)] $variant, )+
            /// A value this client does not know about.
            #[serde(other, rename = "UNKNOWN_ENUM_VALUE")]
            UnknownValue,
        }

        impl $crate::types::WireEnum for $name {
            const FIELD: &'static str = stringify!($name);
            const ALLOWED: &'static [&'static str] = &[$($wire),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $wire, )+
                    Self::UnknownValue => "UNKNOWN_ENUM_VALUE",
                }
            }

            fn is_known(&self) -> bool {
                !matches!(self, Self::UnknownValue)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::types::WireEnum::as_str(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s {
                    $( $wire => Ok(Self::$variant), )+
                    other => Err($crate::types::common::invalid_enum_value::<Self>(other)),
                }
            }
        }
    };
}

pub(crate) use open_wire_enum;
pub(crate) use wire_enum;

pub(crate) fn invalid_enum_value<E: WireEnum>(value: &str) -> crate::Error {
    crate::Error::InvalidEnumValue {
        field: E::FIELD,
        value: value.to_string(),
        allowed: E::ALLOWED.join(", "),
    }
}

wire_enum! {
    /// Sort direction for list operations.
    pub enum SortOrder {
        /// Ascending
        Asc => "ASC",
        /// Descending
        Desc => "DESC",
    }
}

wire_enum! {
    /// Sort field shared by most list operations.
    pub enum SortBy {
        /// Creation time, descending by default
        TimeCreated => "TIMECREATED",
        /// Display name, ascending by default (case sensitive)
        DisplayName => "DISPLAYNAME",
    }
}

/// A database password.
///
/// Serialized as a plain string in request bodies; redacted in `Debug` output.
#[derive(Clone)]
pub struct Password(SecretString);

impl Password {
    /// Wrap a password.
    pub fn new(password: impl Into<String>) -> Self {
        Self(SecretString::from(password.into()))
    }

    /// Read the password.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password([REDACTED])")
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.expose() == other.expose()
    }
}

impl From<&str> for Password {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Password {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl Serialize for Password {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.expose())
    }
}

impl<'de> Deserialize<'de> for Password {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}

/// Move a resource to another compartment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeCompartmentDetails {
    /// Target compartment OCID
    pub compartment_id: String,
}

impl ChangeCompartmentDetails {
    /// Target the given compartment.
    pub fn new(compartment_id: impl Into<String>) -> Self {
        Self {
            compartment_id: compartment_id.into(),
        }
    }
}
