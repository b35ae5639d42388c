//! Data Guard associations between a primary and a standby database.

use super::common::{Password, open_wire_enum};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

open_wire_enum! {
    /// Role of a database in a Data Guard association.
    pub enum DataGuardRole {
        /// Primary
        Primary => "PRIMARY",
        /// Standby
        Standby => "STANDBY",
        /// Standby that must be reinstated
        DisabledStandby => "DISABLED_STANDBY",
    }
}

open_wire_enum! {
    /// Data Guard protection mode.
    pub enum ProtectionMode {
        /// Maximum availability
        MaximumAvailability => "MAXIMUM_AVAILABILITY",
        /// Maximum performance
        MaximumPerformance => "MAXIMUM_PERFORMANCE",
        /// Maximum protection
        MaximumProtection => "MAXIMUM_PROTECTION",
    }
}

open_wire_enum! {
    /// Redo transport type.
    pub enum TransportType {
        /// Synchronous
        Sync => "SYNC",
        /// Asynchronous
        Async => "ASYNC",
        /// Fast synchronous
        FastSync => "FASTSYNC",
    }
}

open_wire_enum! {
    /// Lifecycle of a Data Guard association.
    pub enum DataGuardAssociationLifecycleState {
        /// Being created
        Provisioning => "PROVISIONING",
        /// Ready
        Available => "AVAILABLE",
        /// Being updated
        Updating => "UPDATING",
        /// Being terminated
        Terminating => "TERMINATING",
        /// Terminated
        Terminated => "TERMINATED",
        /// Failed
        Failed => "FAILED",
    }
}

/// Replication relationship between two databases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataGuardAssociation {
    /// OCID
    pub id: String,
    /// Reporting database OCID
    pub database_id: String,
    /// Role of the reporting database
    pub role: DataGuardRole,
    /// Lifecycle state
    pub lifecycle_state: DataGuardAssociationLifecycleState,
    /// Additional lifecycle information
    #[serde(default)]
    pub lifecycle_details: Option<String>,
    /// Peer DB system OCID
    pub peer_db_system_id: String,
    /// Peer DB home OCID
    #[serde(default)]
    pub peer_db_home_id: Option<String>,
    /// Peer database OCID
    #[serde(default)]
    pub peer_database_id: Option<String>,
    /// Peer's association OCID
    #[serde(default)]
    pub peer_data_guard_association_id: Option<String>,
    /// Role of the peer database
    pub peer_role: DataGuardRole,
    /// Redo apply lag, e.g. `9 seconds`
    #[serde(default)]
    pub apply_lag: Option<String>,
    /// Redo apply rate, e.g. `180 Mb per second`
    #[serde(default)]
    pub apply_rate: Option<String>,
    /// Protection mode
    pub protection_mode: ProtectionMode,
    /// Redo transport type
    #[serde(default)]
    pub transport_type: Option<TransportType>,
    /// Creation time
    #[serde(default)]
    pub time_created: Option<DateTime<Utc>>,
}

/// Item of `ListDataGuardAssociations`.
pub type DataGuardAssociationSummary = DataGuardAssociation;

/// Where the standby database is placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "creationType", rename_all_fields = "camelCase")]
pub enum DataGuardCreationType {
    /// On an existing DB system
    #[serde(rename = "ExistingDbSystem")]
    ExistingDbSystem {
        /// Peer DB system OCID
        peer_db_system_id: String,
    },
    /// On a DB system launched for the standby
    #[serde(rename = "NewDbSystem")]
    NewDbSystem {
        /// Display name of the new DB system
        #[serde(default, skip_serializing_if = "Option::is_none")]
        display_name: Option<String>,
        /// Availability domain
        #[serde(default, skip_serializing_if = "Option::is_none")]
        availability_domain: Option<String>,
        /// Shape
        #[serde(default, skip_serializing_if = "Option::is_none")]
        shape: Option<String>,
        /// Subnet OCID
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subnet_id: Option<String>,
        /// Network security group OCIDs
        #[serde(default, skip_serializing_if = "Option::is_none")]
        nsg_ids: Option<Vec<String>>,
        /// Backup network security group OCIDs
        #[serde(default, skip_serializing_if = "Option::is_none")]
        backup_network_nsg_ids: Option<Vec<String>>,
        /// Host name
        #[serde(default, skip_serializing_if = "Option::is_none")]
        hostname: Option<String>,
    },
}

/// Body of `CreateDataGuardAssociation`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDataGuardAssociationDetails {
    /// SYS password of the primary database
    pub database_admin_password: Password,
    /// Protection mode
    pub protection_mode: ProtectionMode,
    /// Redo transport type
    pub transport_type: TransportType,
    /// Standby placement
    #[serde(flatten)]
    pub creation: DataGuardCreationType,
}

/// Body of `FailoverDataGuardAssociation`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailoverDataGuardAssociationDetails {
    /// SYS password of the primary database
    pub database_admin_password: Password,
}

impl FailoverDataGuardAssociationDetails {
    /// Body carrying the SYS password.
    pub fn new(database_admin_password: impl Into<Password>) -> Self {
        Self {
            database_admin_password: database_admin_password.into(),
        }
    }
}

/// Body of `SwitchoverDataGuardAssociation`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchoverDataGuardAssociationDetails {
    /// SYS password of the primary database
    pub database_admin_password: Password,
}

impl SwitchoverDataGuardAssociationDetails {
    /// Body carrying the SYS password.
    pub fn new(database_admin_password: impl Into<Password>) -> Self {
        Self {
            database_admin_password: database_admin_password.into(),
        }
    }
}

/// Body of `ReinstateDataGuardAssociation`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReinstateDataGuardAssociationDetails {
    /// SYS password of the primary database
    pub database_admin_password: Password,
}

impl ReinstateDataGuardAssociationDetails {
    /// Body carrying the SYS password.
    pub fn new(database_admin_password: impl Into<Password>) -> Self {
        Self {
            database_admin_password: database_admin_password.into(),
        }
    }
}
