//! Database backups, backup destinations and external backup jobs.

use super::common::{DefinedTags, FreeformTags, Password, open_wire_enum, wire_enum};
use super::db_system::DatabaseEdition;
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

open_wire_enum! {
    /// Kind of database backup.
    pub enum BackupType {
        /// Incremental
        Incremental => "INCREMENTAL",
        /// Full
        Full => "FULL",
        /// Virtual full (Recovery Appliance)
        VirtualFull => "VIRTUAL_FULL",
    }
}

open_wire_enum! {
    /// Lifecycle of a database backup.
    pub enum BackupLifecycleState {
        /// Being created
        Creating => "CREATING",
        /// Ready
        Active => "ACTIVE",
        /// Being deleted
        Deleting => "DELETING",
        /// Deleted
        Deleted => "DELETED",
        /// Failed
        Failed => "FAILED",
        /// Restore running
        Restoring => "RESTORING",
    }
}

/// A backup of a database on a DB system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Backup {
    /// OCID
    pub id: String,
    /// Compartment OCID
    #[serde(default)]
    pub compartment_id: Option<String>,
    /// Backed up database OCID
    #[serde(default)]
    pub database_id: Option<String>,
    /// Display name
    #[serde(default)]
    pub display_name: Option<String>,
    /// Backup kind
    #[serde(default, rename = "type")]
    pub backup_type: Option<BackupType>,
    /// Start time
    #[serde(default)]
    pub time_started: Option<DateTime<Utc>>,
    /// End time
    #[serde(default)]
    pub time_ended: Option<DateTime<Utc>>,
    /// Additional lifecycle information
    #[serde(default)]
    pub lifecycle_details: Option<String>,
    /// Availability domain
    #[serde(default)]
    pub availability_domain: Option<String>,
    /// Lifecycle state
    #[serde(default)]
    pub lifecycle_state: Option<BackupLifecycleState>,
    /// Edition of the backed up database
    #[serde(default)]
    pub database_edition: Option<DatabaseEdition>,
    /// Size in gigabytes
    #[serde(default, rename = "databaseSizeInGBs")]
    pub database_size_in_gbs: Option<f64>,
    /// DB system shape the backup was taken on
    #[serde(default)]
    pub shape: Option<String>,
    /// Database version
    #[serde(default)]
    pub version: Option<String>,
}

/// Item of `ListBackups`.
pub type BackupSummary = Backup;

/// Body of `CreateBackup`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBackupDetails {
    /// Database to back up
    pub database_id: String,
    /// Display name
    pub display_name: String,
}

impl CreateBackupDetails {
    /// Back up `database_id` under `display_name`.
    pub fn new(database_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            database_id: database_id.into(),
            display_name: display_name.into(),
        }
    }
}

wire_enum! {
    /// Kind of backup destination, also a `ListBackupDestinations` filter.
    pub enum BackupDestinationType {
        /// NFS mount
        Nfs => "NFS",
        /// Zero Data Loss Recovery Appliance
        RecoveryAppliance => "RECOVERY_APPLIANCE",
    }
}

open_wire_enum! {
    /// Lifecycle of a backup destination.
    pub enum BackupDestinationLifecycleState {
        /// Ready
        Active => "ACTIVE",
        /// Failed
        Failed => "FAILED",
        /// Deleted
        Deleted => "DELETED",
    }
}

/// Database using a backup destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociatedDatabaseDetails {
    /// Database OCID
    pub id: String,
    /// Database name
    #[serde(default)]
    pub db_name: Option<String>,
}

/// Backup destination for Exadata Cloud@Customer databases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupDestination {
    /// OCID
    pub id: String,
    /// Display name
    pub display_name: String,
    /// Compartment OCID
    pub compartment_id: String,
    /// Destination kind
    #[serde(rename = "type")]
    pub destination_type: BackupDestinationType,
    /// Databases using this destination
    #[serde(default)]
    pub associated_databases: Vec<AssociatedDatabaseDetails>,
    /// Recovery Appliance connection string
    #[serde(default)]
    pub connection_string: Option<String>,
    /// Recovery Appliance virtual private catalog users
    #[serde(default)]
    pub vpc_users: Vec<String>,
    /// NFS mount point on the host
    #[serde(default)]
    pub local_mount_point_path: Option<String>,
    /// Lifecycle state
    pub lifecycle_state: BackupDestinationLifecycleState,
    /// Creation time
    #[serde(default)]
    pub time_created: Option<DateTime<Utc>>,
    /// Additional lifecycle information
    #[serde(default)]
    pub lifecycle_details: Option<String>,
    /// Free-form tags
    #[serde(default)]
    pub freeform_tags: FreeformTags,
    /// Defined tags
    #[serde(default)]
    pub defined_tags: DefinedTags,
}

/// Item of `ListBackupDestinations`.
pub type BackupDestinationSummary = BackupDestination;

/// Type-specific part of `CreateBackupDestinationDetails`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum BackupDestinationTarget {
    /// NFS mount
    #[serde(rename = "NFS")]
    Nfs {
        /// Mount point on the host
        local_mount_point_path: String,
    },
    /// Zero Data Loss Recovery Appliance
    #[serde(rename = "RECOVERY_APPLIANCE")]
    RecoveryAppliance {
        /// Connection string
        connection_string: String,
        /// Virtual private catalog users
        vpc_users: Vec<String>,
    },
}

/// Body of `CreateBackupDestination`.
#[derive(Debug, Clone, Serialize, Deserialize, Builder)]
#[builder(setter(into, strip_option))]
#[serde(rename_all = "camelCase")]
pub struct CreateBackupDestinationDetails {
    /// Display name
    pub display_name: String,
    /// Compartment OCID
    pub compartment_id: String,
    /// Destination kind and its settings
    #[serde(flatten)]
    pub target: BackupDestinationTarget,
    /// Free-form tags
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub freeform_tags: Option<FreeformTags>,
    /// Defined tags
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub defined_tags: Option<DefinedTags>,
}

impl CreateBackupDestinationDetails {
    /// Create a new builder.
    pub fn builder() -> CreateBackupDestinationDetailsBuilder {
        CreateBackupDestinationDetailsBuilder::default()
    }
}

/// Body of `UpdateBackupDestination`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBackupDestinationDetails {
    /// Recovery Appliance virtual private catalog users
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_users: Option<Vec<String>>,
    /// Recovery Appliance connection string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_string: Option<String>,
    /// NFS mount point on the host
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_mount_point_path: Option<String>,
    /// Free-form tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    /// Defined tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

wire_enum! {
    /// Deployment of the on-premises database being backed up.
    pub enum ExternalDatabaseMode {
        /// Single instance
        Si => "SI",
        /// Real Application Clusters
        Rac => "RAC",
    }
}

/// Backup of an on-premises database into the cloud.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalBackupJob {
    /// Backup OCID
    pub backup_id: String,
    /// Still provisioning the target
    pub provisioning: bool,
    /// Swift path for RMAN
    pub swift_path: String,
    /// Object Storage bucket
    pub bucket_name: String,
    /// RMAN backup tag
    pub tag: String,
    /// Swift user
    pub user_name: String,
    /// Swift password, only returned on creation
    #[serde(default)]
    pub swift_password: Option<Password>,
}

/// Body of `CreateExternalBackupJob`.
#[derive(Debug, Clone, Serialize, Deserialize, Builder)]
#[builder(setter(into, strip_option))]
#[serde(rename_all = "camelCase")]
pub struct CreateExternalBackupJobDetails {
    /// Availability domain
    pub availability_domain: String,
    /// Compartment OCID
    pub compartment_id: String,
    /// Display name
    pub display_name: String,
    /// Database version
    pub db_version: String,
    /// Database name
    pub db_name: String,
    /// `DBID` of the on-premises database
    pub external_database_identifier: u64,
    /// Character set
    pub character_set: String,
    /// National character set
    pub ncharacter_set: String,
    /// Deployment mode
    pub database_mode: ExternalDatabaseMode,
    /// Edition
    pub database_edition: DatabaseEdition,
    /// `DB_UNIQUE_NAME`
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub db_unique_name: Option<String>,
    /// Pluggable database name
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub pdb_name: Option<String>,
}

impl CreateExternalBackupJobDetails {
    /// Create a new builder.
    pub fn builder() -> CreateExternalBackupJobDetailsBuilder {
        CreateExternalBackupJobDetailsBuilder::default()
    }
}

/// Body of `CompleteExternalBackupJob`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteExternalBackupJobDetails {
    /// TDE wallet path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tde_wallet_path: Option<String>,
    /// Control file backup handle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cf_backup_handle: Option<String>,
    /// Server parameter file backup handle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spf_backup_handle: Option<String>,
    /// SQL patches applied to the database
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sql_patches: Option<Vec<String>>,
    /// Size of the data in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_size: Option<u64>,
    /// Size of the redo in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redo_size: Option<u64>,
}
