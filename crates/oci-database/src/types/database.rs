//! Databases, DB homes, patches and DB nodes.

use super::backup::BackupDestinationType;
use super::common::{DefinedTags, FreeformTags, Password, open_wire_enum, wire_enum};
use super::db_system::PatchDetails;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

open_wire_enum! {
    /// Lifecycle of a database.
    pub enum DatabaseLifecycleState {
        /// Being created
        Provisioning => "PROVISIONING",
        /// Ready
        Available => "AVAILABLE",
        /// Being updated
        Updating => "UPDATING",
        /// Backup running
        BackupInProgress => "BACKUP_IN_PROGRESS",
        /// Being terminated
        Terminating => "TERMINATING",
        /// Terminated
        Terminated => "TERMINATED",
        /// Restore failed
        RestoreFailed => "RESTORE_FAILED",
        /// Failed
        Failed => "FAILED",
    }
}

open_wire_enum! {
    /// Workload of a database on a DB system.
    pub enum DatabaseWorkload {
        /// Transaction processing
        Oltp => "OLTP",
        /// Decision support
        Dss => "DSS",
    }
}

open_wire_enum! {
    /// Two hour window automatic backups start in.
    pub enum AutoBackupWindow {
        /// 00:00 to 02:00
        Slot1 => "SLOT_ONE",
        /// 02:00 to 04:00
        Slot2 => "SLOT_TWO",
        /// 04:00 to 06:00
        Slot3 => "SLOT_THREE",
        /// 06:00 to 08:00
        Slot4 => "SLOT_FOUR",
        /// 08:00 to 10:00
        Slot5 => "SLOT_FIVE",
        /// 10:00 to 12:00
        Slot6 => "SLOT_SIX",
        /// 12:00 to 14:00
        Slot7 => "SLOT_SEVEN",
        /// 14:00 to 16:00
        Slot8 => "SLOT_EIGHT",
        /// 16:00 to 18:00
        Slot9 => "SLOT_NINE",
        /// 18:00 to 20:00
        Slot10 => "SLOT_TEN",
        /// 20:00 to 22:00
        Slot11 => "SLOT_ELEVEN",
        /// 22:00 to 00:00
        Slot12 => "SLOT_TWELVE",
    }
}

wire_enum! {
    /// Sort fields of `ListDatabases`.
    pub enum DatabaseSortBy {
        /// Database name
        DbName => "DBNAME",
        /// Creation time
        TimeCreated => "TIMECREATED",
    }
}

/// Where automatic backups go.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupDestinationDetails {
    /// Destination kind
    #[serde(rename = "type")]
    pub destination_type: BackupDestinationType,
    /// Backup destination OCID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Recovery Appliance catalog user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpc_user: Option<String>,
    /// Recovery Appliance catalog password
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpc_password: Option<Password>,
}

/// Automatic backup settings of a database.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbBackupConfig {
    /// Automatic backups enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_backup_enabled: Option<bool>,
    /// Days backups are kept (7, 15, 30, 45 or 60)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recovery_window_in_days: Option<u32>,
    /// Start window
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_backup_window: Option<AutoBackupWindow>,
    /// Destinations (Exadata Cloud@Customer)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_destination_details: Option<Vec<BackupDestinationDetails>>,
}

/// Connection strings of a database.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseConnectionStrings {
    /// Host name based CDB connection string
    #[serde(default)]
    pub cdb_default: Option<String>,
    /// IP based CDB connection string
    #[serde(default)]
    pub cdb_ip_default: Option<String>,
    /// Every connection string by name
    #[serde(default)]
    pub all_connection_strings: HashMap<String, String>,
}

/// A database in a DB home.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Database {
    /// OCID
    pub id: String,
    /// Compartment OCID
    pub compartment_id: String,
    /// Database name
    pub db_name: String,
    /// `DB_UNIQUE_NAME`
    pub db_unique_name: String,
    /// Lifecycle state
    pub lifecycle_state: DatabaseLifecycleState,
    /// Additional lifecycle information
    #[serde(default)]
    pub lifecycle_details: Option<String>,
    /// Character set
    #[serde(default)]
    pub character_set: Option<String>,
    /// National character set
    #[serde(default)]
    pub ncharacter_set: Option<String>,
    /// DB home OCID
    #[serde(default)]
    pub db_home_id: Option<String>,
    /// DB system OCID
    #[serde(default)]
    pub db_system_id: Option<String>,
    /// VM cluster OCID
    #[serde(default)]
    pub vm_cluster_id: Option<String>,
    /// Pluggable database name
    #[serde(default)]
    pub pdb_name: Option<String>,
    /// Workload
    #[serde(default)]
    pub db_workload: Option<DatabaseWorkload>,
    /// Creation time
    #[serde(default)]
    pub time_created: Option<DateTime<Utc>>,
    /// Last successful backup
    #[serde(default)]
    pub last_backup_timestamp: Option<DateTime<Utc>>,
    /// Automatic backup settings
    #[serde(default)]
    pub db_backup_config: Option<DbBackupConfig>,
    /// Connection strings
    #[serde(default)]
    pub connection_strings: Option<DatabaseConnectionStrings>,
    /// Free-form tags
    #[serde(default)]
    pub freeform_tags: FreeformTags,
    /// Defined tags
    #[serde(default)]
    pub defined_tags: DefinedTags,
}

/// Item of `ListDatabases`.
pub type DatabaseSummary = Database;

/// A new database created inside a DB home.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDatabaseDetails {
    /// Database name
    pub db_name: String,
    /// SYS password
    pub admin_password: Password,
    /// Pluggable database name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdb_name: Option<String>,
    /// Character set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_set: Option<String>,
    /// National character set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ncharacter_set: Option<String>,
    /// Workload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_workload: Option<DatabaseWorkload>,
    /// Automatic backup settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_backup_config: Option<DbBackupConfig>,
    /// Free-form tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    /// Defined tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

impl CreateDatabaseDetails {
    /// Minimal database: name and SYS password.
    pub fn new(db_name: impl Into<String>, admin_password: impl Into<Password>) -> Self {
        Self {
            db_name: db_name.into(),
            admin_password: admin_password.into(),
            pdb_name: None,
            character_set: None,
            ncharacter_set: None,
            db_workload: None,
            db_backup_config: None,
            freeform_tags: None,
            defined_tags: None,
        }
    }
}

/// A database restored from a backup into a new DB home.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDatabaseFromBackupDetails {
    /// Backup OCID
    pub backup_id: String,
    /// TDE wallet password of the backup
    #[serde(rename = "backupTDEPassword")]
    pub backup_tde_password: Password,
    /// New SYS password
    pub admin_password: Password,
    /// Database name, defaults to the backup's
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_name: Option<String>,
}

/// Body of `UpdateDatabase`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDatabaseDetails {
    /// Automatic backup settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_backup_config: Option<DbBackupConfig>,
    /// Free-form tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    /// Defined tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

/// Body of `RestoreDatabase`.
///
/// Set exactly one of the three targets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreDatabaseDetails {
    /// System change number to restore to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_scn: Option<String>,
    /// Point in time to restore to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    /// Restore to the latest backup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest: Option<bool>,
}

open_wire_enum! {
    /// Lifecycle of a DB home.
    pub enum DbHomeLifecycleState {
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

/// An Oracle home with one or more databases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbHome {
    /// OCID
    pub id: String,
    /// Compartment OCID
    pub compartment_id: String,
    /// Display name
    pub display_name: String,
    /// Lifecycle state
    pub lifecycle_state: DbHomeLifecycleState,
    /// Database version
    pub db_version: String,
    /// DB system OCID
    #[serde(default)]
    pub db_system_id: Option<String>,
    /// VM cluster OCID
    #[serde(default)]
    pub vm_cluster_id: Option<String>,
    /// Last patch history entry OCID
    #[serde(default)]
    pub last_patch_history_entry_id: Option<String>,
    /// Oracle home path
    #[serde(default)]
    pub db_home_location: Option<String>,
    /// Additional lifecycle information
    #[serde(default)]
    pub lifecycle_details: Option<String>,
    /// Creation time
    #[serde(default)]
    pub time_created: Option<DateTime<Utc>>,
    /// Free-form tags
    #[serde(default)]
    pub freeform_tags: FreeformTags,
    /// Defined tags
    #[serde(default)]
    pub defined_tags: DefinedTags,
}

/// Item of `ListDbHomes`.
pub type DbHomeSummary = DbHome;

/// Where a new DB home lives and how its database is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all_fields = "camelCase")]
pub enum DbHomeSource {
    /// New database on a DB system
    #[serde(rename = "NONE")]
    NewDatabase {
        /// DB system OCID
        db_system_id: String,
        /// Database version
        db_version: String,
        /// Database to create
        database: CreateDatabaseDetails,
    },
    /// Database restored from a backup on a DB system
    #[serde(rename = "DB_BACKUP")]
    DbBackup {
        /// DB system OCID
        db_system_id: String,
        /// Database to restore
        database: CreateDatabaseFromBackupDetails,
    },
    /// New database on an Exadata Cloud@Customer VM cluster
    #[serde(rename = "VM_CLUSTER_NEW")]
    VmClusterNew {
        /// VM cluster OCID
        vm_cluster_id: String,
        /// Database version
        db_version: String,
        /// Database to create
        database: CreateDatabaseDetails,
    },
}

/// Body of `CreateDbHome`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDbHomeBase {
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Placement and database source
    #[serde(flatten)]
    pub source: DbHomeSource,
}

impl CreateDbHomeBase {
    /// Home with the given source and no display name.
    pub fn new(source: DbHomeSource) -> Self {
        Self {
            display_name: None,
            source,
        }
    }
}

/// Body of `UpdateDbHome`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDbHomeDetails {
    /// Patch to apply
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_version: Option<PatchDetails>,
    /// Free-form tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    /// Defined tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

wire_enum! {
    /// Patch operation.
    pub enum PatchAction {
        /// Apply the patch
        Apply => "APPLY",
        /// Check the patch can be applied
        Precheck => "PRECHECK",
    }
}

open_wire_enum! {
    /// State of a patch with respect to its target.
    pub enum PatchLifecycleState {
        /// Can be applied
        Available => "AVAILABLE",
        /// Last action succeeded
        Success => "SUCCESS",
        /// Action running
        InProgress => "IN_PROGRESS",
        /// Last action failed
        Failed => "FAILED",
    }
}

/// A patch applicable to a DB system or DB home.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patch {
    /// OCID
    pub id: String,
    /// Description
    pub description: String,
    /// Release time
    pub time_released: DateTime<Utc>,
    /// Version
    pub version: String,
    /// Actions currently possible
    #[serde(default)]
    pub available_actions: Vec<PatchAction>,
    /// Last action performed
    #[serde(default)]
    pub last_action: Option<PatchAction>,
    /// State
    #[serde(default)]
    pub lifecycle_state: Option<PatchLifecycleState>,
    /// Additional lifecycle information
    #[serde(default)]
    pub lifecycle_details: Option<String>,
}

/// Item of `ListDbHomePatches` and `ListDbSystemPatches`.
pub type PatchSummary = Patch;

open_wire_enum! {
    /// Outcome of a patch action.
    pub enum PatchHistoryEntryLifecycleState {
        /// Running
        InProgress => "IN_PROGRESS",
        /// Succeeded
        Succeeded => "SUCCEEDED",
        /// Failed
        Failed => "FAILED",
    }
}

/// Record of a patch action on a DB home or DB system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchHistoryEntrySummary {
    /// OCID
    pub id: String,
    /// Patch OCID
    pub patch_id: String,
    /// Action performed
    #[serde(default)]
    pub action: Option<PatchAction>,
    /// Outcome
    pub lifecycle_state: PatchHistoryEntryLifecycleState,
    /// Additional lifecycle information
    #[serde(default)]
    pub lifecycle_details: Option<String>,
    /// Start time
    pub time_started: DateTime<Utc>,
    /// End time
    #[serde(default)]
    pub time_ended: Option<DateTime<Utc>>,
}

open_wire_enum! {
    /// Lifecycle of a DB node.
    pub enum DbNodeLifecycleState {
        /// Being created
        Provisioning => "PROVISIONING",
        /// Ready
        Available => "AVAILABLE",
        /// Being updated
        Updating => "UPDATING",
        /// Stopping
        Stopping => "STOPPING",
        /// Stopped
        Stopped => "STOPPED",
        /// Starting
        Starting => "STARTING",
        /// Being terminated
        Terminating => "TERMINATING",
        /// Terminated
        Terminated => "TERMINATED",
        /// Failed
        Failed => "FAILED",
    }
}

wire_enum! {
    /// Power action of `DbNodeAction`.
    pub enum DbNodeActionType {
        /// Power off
        Stop => "STOP",
        /// Power on
        Start => "START",
        /// ACPI shutdown and power on
        SoftReset => "SOFTRESET",
        /// Power off and power on
        Reset => "RESET",
    }
}

wire_enum! {
    /// Sort fields of `ListDbNodes`.
    pub enum DbNodeSortBy {
        /// Creation time
        TimeCreated => "TIMECREATED",
    }
}

/// A compute node of a DB system or VM cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbNode {
    /// OCID
    pub id: String,
    /// DB system OCID
    pub db_system_id: String,
    /// Primary VNIC OCID
    pub vnic_id: String,
    /// Lifecycle state
    pub lifecycle_state: DbNodeLifecycleState,
    /// Creation time
    pub time_created: DateTime<Utc>,
    /// Backup VNIC OCID
    #[serde(default)]
    pub backup_vnic_id: Option<String>,
    /// Host name
    #[serde(default)]
    pub hostname: Option<String>,
    /// Fault domain
    #[serde(default)]
    pub fault_domain: Option<String>,
    /// Local software storage in gigabytes
    #[serde(default, rename = "softwareStorageSizeInGB")]
    pub software_storage_size_in_gb: Option<u32>,
    /// Scheduled maintenance start
    #[serde(default)]
    pub time_maintenance_window_start: Option<DateTime<Utc>>,
    /// Scheduled maintenance end
    #[serde(default)]
    pub time_maintenance_window_end: Option<DateTime<Utc>>,
}

/// Item of `ListDbNodes`.
pub type DbNodeSummary = DbNode;
