//! Parameter checks performed before a request leaves the client.

use crate::error::{Error, Result};
use std::borrow::Cow;

/// Fail with [`Error::MissingParameter`] when `value` is empty or whitespace.
pub(crate) fn require_non_blank(name: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        crate::observability::log_validation_error(name, "blank");
        return Err(Error::MissingParameter(name));
    }
    Ok(())
}

/// Validate a path parameter and escape it for use as a single path segment.
pub(crate) fn path_param<'a>(name: &'static str, value: &'a str) -> Result<Cow<'a, str>> {
    require_non_blank(name, value)?;
    Ok(urlencoding::encode(value))
}

/// Reject a page size the service would refuse.
pub(crate) fn check_limit(limit: Option<u32>) -> Result<()> {
    match limit {
        Some(0) => Err(Error::InvalidParameter {
            name: "limit",
            reason: "must be at least 1".to_string(),
        }),
        _ => Ok(()),
    }
}
