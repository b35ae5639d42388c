//! Autonomous databases, their containers, backups and dedicated infrastructure.

use super::common::{DefinedTags, FreeformTags, Password, open_wire_enum};
use super::maintenance::MaintenanceWindow;
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

open_wire_enum! {
    /// Workload an autonomous database is tuned for.
    pub enum DbWorkload {
        /// Transaction processing
        Oltp => "OLTP",
        /// Data warehouse
        Dw => "DW",
        /// Autonomous JSON database
        Ajd => "AJD",
    }
}

open_wire_enum! {
    /// Oracle license model.
    pub enum LicenseModel {
        /// License included in the price
        LicenseIncluded => "LICENSE_INCLUDED",
        /// Customer brings an existing license
        BringYourOwnLicense => "BRING_YOUR_OWN_LICENSE",
    }
}

open_wire_enum! {
    /// Patch model of an autonomous container database.
    pub enum PatchModel {
        /// Release updates
        ReleaseUpdates => "RELEASE_UPDATES",
        /// Release update revisions
        ReleaseUpdateRevisions => "RELEASE_UPDATE_REVISIONS",
    }
}

open_wire_enum! {
    /// Service level agreement of an autonomous container database.
    pub enum ServiceLevelAgreementType {
        /// Standard availability
        Standard => "STANDARD",
        /// Mission critical availability
        MissionCritical => "MISSION_CRITICAL",
    }
}

open_wire_enum! {
    /// Lifecycle of an autonomous container database.
    pub enum AutonomousContainerDatabaseLifecycleState {
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
        /// Backup running
        BackupInProgress => "BACKUP_IN_PROGRESS",
        /// Restore running
        Restoring => "RESTORING",
        /// Restore failed
        RestoreFailed => "RESTORE_FAILED",
        /// Restarting
        Restarting => "RESTARTING",
        /// Maintenance running
        MaintenanceInProgress => "MAINTENANCE_IN_PROGRESS",
    }
}

open_wire_enum! {
    /// Lifecycle of an autonomous database.
    pub enum AutonomousDatabaseLifecycleState {
        /// Being created
        Provisioning => "PROVISIONING",
        /// Ready
        Available => "AVAILABLE",
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
        /// Unavailable
        Unavailable => "UNAVAILABLE",
        /// Restore running
        RestoreInProgress => "RESTORE_IN_PROGRESS",
        /// Restore failed
        RestoreFailed => "RESTORE_FAILED",
        /// Backup running
        BackupInProgress => "BACKUP_IN_PROGRESS",
        /// Scaling
        ScaleInProgress => "SCALE_IN_PROGRESS",
        /// Available but needs attention
        AvailableNeedsAttention => "AVAILABLE_NEEDS_ATTENTION",
        /// Being updated
        Updating => "UPDATING",
        /// Maintenance running
        MaintenanceInProgress => "MAINTENANCE_IN_PROGRESS",
    }
}

open_wire_enum! {
    /// Lifecycle of an autonomous database backup.
    pub enum AutonomousDatabaseBackupLifecycleState {
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
    }
}

open_wire_enum! {
    /// Kind of autonomous database backup.
    pub enum AutonomousDatabaseBackupType {
        /// Incremental
        Incremental => "INCREMENTAL",
        /// Full
        Full => "FULL",
    }
}

open_wire_enum! {
    /// Lifecycle of autonomous Exadata infrastructure.
    pub enum AutonomousExadataInfrastructureLifecycleState {
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
        /// Maintenance running
        MaintenanceInProgress => "MAINTENANCE_IN_PROGRESS",
    }
}

open_wire_enum! {
    /// Which wallet `GenerateAutonomousDatabaseWallet` produces.
    pub enum WalletGenerateType {
        /// Wallet for this database only
        Single => "SINGLE",
        /// Regional wallet for every database
        All => "ALL",
    }
}

open_wire_enum! {
    /// Clone depth when creating from another database or a backup.
    pub enum CloneType {
        /// Data and metadata
        Full => "FULL",
        /// Metadata only
        Metadata => "METADATA",
    }
}

/// Backup settings of an autonomous container database.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutonomousContainerDatabaseBackupConfig {
    /// Days backups are kept
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recovery_window_in_days: Option<u32>,
}

/// A container for dedicated autonomous databases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutonomousContainerDatabase {
    /// OCID
    pub id: String,
    /// Compartment OCID
    pub compartment_id: String,
    /// Display name
    pub display_name: String,
    /// Service level agreement
    pub service_level_agreement_type: ServiceLevelAgreementType,
    /// Hosting infrastructure OCID
    pub autonomous_exadata_infrastructure_id: String,
    /// Lifecycle state
    pub lifecycle_state: AutonomousContainerDatabaseLifecycleState,
    /// Additional lifecycle information
    #[serde(default)]
    pub lifecycle_details: Option<String>,
    /// Creation time
    #[serde(default)]
    pub time_created: Option<DateTime<Utc>>,
    /// Patch model
    pub patch_model: PatchModel,
    /// Maintenance window
    #[serde(default)]
    pub maintenance_window: Option<MaintenanceWindow>,
    /// Last maintenance run OCID
    #[serde(default)]
    pub last_maintenance_run_id: Option<String>,
    /// Next maintenance run OCID
    #[serde(default)]
    pub next_maintenance_run_id: Option<String>,
    /// Availability domain
    #[serde(default)]
    pub availability_domain: Option<String>,
    /// Backup settings
    #[serde(default)]
    pub backup_config: Option<AutonomousContainerDatabaseBackupConfig>,
    /// Free-form tags
    #[serde(default)]
    pub freeform_tags: FreeformTags,
    /// Defined tags
    #[serde(default)]
    pub defined_tags: DefinedTags,
}

/// Item of `ListAutonomousContainerDatabases`.
pub type AutonomousContainerDatabaseSummary = AutonomousContainerDatabase;

/// Body of `CreateAutonomousContainerDatabase`.
#[derive(Debug, Clone, Serialize, Deserialize, Builder)]
#[builder(setter(into, strip_option))]
#[serde(rename_all = "camelCase")]
pub struct CreateAutonomousContainerDatabaseDetails {
    /// Display name
    pub display_name: String,
    /// Hosting infrastructure OCID
    pub autonomous_exadata_infrastructure_id: String,
    /// Patch model
    pub patch_model: PatchModel,
    /// Service level agreement
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub service_level_agreement_type: Option<ServiceLevelAgreementType>,
    /// Maintenance window
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub maintenance_window_details: Option<MaintenanceWindow>,
    /// Backup settings
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub backup_config: Option<AutonomousContainerDatabaseBackupConfig>,
    /// Free-form tags
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub freeform_tags: Option<FreeformTags>,
    /// Defined tags
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub defined_tags: Option<DefinedTags>,
}

impl CreateAutonomousContainerDatabaseDetails {
    /// Create a new builder.
    pub fn builder() -> CreateAutonomousContainerDatabaseDetailsBuilder {
        CreateAutonomousContainerDatabaseDetailsBuilder::default()
    }
}

/// Body of `UpdateAutonomousContainerDatabase`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAutonomousContainerDatabaseDetails {
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Patch model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch_model: Option<PatchModel>,
    /// Maintenance window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_window_details: Option<MaintenanceWindow>,
    /// Backup settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_config: Option<AutonomousContainerDatabaseBackupConfig>,
    /// Free-form tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    /// Defined tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

/// Connection strings of an autonomous database.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutonomousDatabaseConnectionStrings {
    /// High priority service
    #[serde(default)]
    pub high: Option<String>,
    /// Medium priority service
    #[serde(default)]
    pub medium: Option<String>,
    /// Low priority service
    #[serde(default)]
    pub low: Option<String>,
    /// Dedicated deployment connection string
    #[serde(default)]
    pub dedicated: Option<String>,
    /// Every connection string by service name
    #[serde(default)]
    pub all_connection_strings: HashMap<String, String>,
}

/// An autonomous database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutonomousDatabase {
    /// OCID
    pub id: String,
    /// Compartment OCID
    pub compartment_id: String,
    /// Lifecycle state
    pub lifecycle_state: AutonomousDatabaseLifecycleState,
    /// Additional lifecycle information
    #[serde(default)]
    pub lifecycle_details: Option<String>,
    /// Database name
    pub db_name: String,
    /// Display name
    #[serde(default)]
    pub display_name: Option<String>,
    /// Always Free tier
    #[serde(default)]
    pub is_free_tier: Option<bool>,
    /// When an idle Always Free database is reclaimed
    #[serde(default)]
    pub time_reclamation_of_free_autonomous_database: Option<DateTime<Utc>>,
    /// OCPU count
    pub cpu_core_count: u32,
    /// Storage in terabytes
    #[serde(rename = "dataStorageSizeInTBs")]
    pub data_storage_size_in_tbs: u32,
    /// Runs on dedicated infrastructure
    #[serde(default)]
    pub is_dedicated: Option<bool>,
    /// Container OCID for dedicated databases
    #[serde(default)]
    pub autonomous_container_database_id: Option<String>,
    /// Creation time
    #[serde(default)]
    pub time_created: Option<DateTime<Utc>>,
    /// Service console URL
    #[serde(default)]
    pub service_console_url: Option<String>,
    /// Connection strings
    #[serde(default)]
    pub connection_strings: Option<AutonomousDatabaseConnectionStrings>,
    /// License model
    #[serde(default)]
    pub license_model: Option<LicenseModel>,
    /// Database version
    #[serde(default)]
    pub db_version: Option<String>,
    /// Workload type
    #[serde(default)]
    pub db_workload: Option<DbWorkload>,
    /// IP addresses or CIDR blocks allowed to connect
    #[serde(default)]
    pub whitelisted_ips: Vec<String>,
    /// OCPU auto scaling
    #[serde(default)]
    pub is_auto_scaling_enabled: Option<bool>,
    /// Free-form tags
    #[serde(default)]
    pub freeform_tags: FreeformTags,
    /// Defined tags
    #[serde(default)]
    pub defined_tags: DefinedTags,
}

/// Item of `ListAutonomousDatabases`.
pub type AutonomousDatabaseSummary = AutonomousDatabase;

/// Where a new autonomous database takes its data from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all_fields = "camelCase")]
pub enum AutonomousDatabaseSource {
    /// Empty database
    #[serde(rename = "NONE")]
    Empty,
    /// Clone of a running database
    #[serde(rename = "DATABASE")]
    Database {
        /// Source database OCID
        source_id: String,
        /// Clone depth
        clone_type: CloneType,
    },
    /// Clone of a backup
    #[serde(rename = "BACKUP_FROM_ID")]
    BackupFromId {
        /// Backup OCID
        autonomous_database_backup_id: String,
        /// Clone depth
        clone_type: CloneType,
    },
    /// Point in time clone
    #[serde(rename = "BACKUP_FROM_TIMESTAMP")]
    BackupFromTimestamp {
        /// Source database OCID
        autonomous_database_id: String,
        /// Point in time
        timestamp: DateTime<Utc>,
        /// Clone depth
        clone_type: CloneType,
    },
}

/// Body of `CreateAutonomousDatabase`.
#[derive(Debug, Clone, Serialize, Deserialize, Builder)]
#[builder(setter(into, strip_option))]
#[serde(rename_all = "camelCase")]
pub struct CreateAutonomousDatabaseDetails {
    /// Compartment OCID
    pub compartment_id: String,
    /// Database name, letters and numbers only
    pub db_name: String,
    /// OCPU count
    pub cpu_core_count: u32,
    /// Storage in terabytes
    #[serde(rename = "dataStorageSizeInTBs")]
    pub data_storage_size_in_tbs: u32,
    /// ADMIN user password
    pub admin_password: Password,
    /// Data source; an empty database when unset
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub source: Option<AutonomousDatabaseSource>,
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub display_name: Option<String>,
    /// Workload type
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub db_workload: Option<DbWorkload>,
    /// License model
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub license_model: Option<LicenseModel>,
    /// Always Free tier
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub is_free_tier: Option<bool>,
    /// OCPU auto scaling
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub is_auto_scaling_enabled: Option<bool>,
    /// Dedicated deployment
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub is_dedicated: Option<bool>,
    /// Container OCID for dedicated databases
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub autonomous_container_database_id: Option<String>,
    /// IP addresses or CIDR blocks allowed to connect
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub whitelisted_ips: Option<Vec<String>>,
    /// Database version
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub db_version: Option<String>,
    /// Free-form tags
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub freeform_tags: Option<FreeformTags>,
    /// Defined tags
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub defined_tags: Option<DefinedTags>,
}

impl CreateAutonomousDatabaseDetails {
    /// Create a new builder.
    pub fn builder() -> CreateAutonomousDatabaseDetailsBuilder {
        CreateAutonomousDatabaseDetailsBuilder::default()
    }
}

/// Body of `UpdateAutonomousDatabase`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAutonomousDatabaseDetails {
    /// OCPU count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_core_count: Option<u32>,
    /// Storage in terabytes
    #[serde(rename = "dataStorageSizeInTBs", skip_serializing_if = "Option::is_none")]
    pub data_storage_size_in_tbs: Option<u32>,
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// New ADMIN password
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_password: Option<Password>,
    /// New database name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_name: Option<String>,
    /// License model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_model: Option<LicenseModel>,
    /// OCPU auto scaling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_auto_scaling_enabled: Option<bool>,
    /// IP addresses or CIDR blocks allowed to connect
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whitelisted_ips: Option<Vec<String>>,
    /// Free-form tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    /// Defined tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

/// Body of `RestoreAutonomousDatabase`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreAutonomousDatabaseDetails {
    /// Point in time to restore to
    pub timestamp: DateTime<Utc>,
}

/// Body of `GenerateAutonomousDatabaseWallet`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateAutonomousDatabaseWalletDetails {
    /// Password protecting the wallet's keystore
    pub password: Password,
    /// Single database or regional wallet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generate_type: Option<WalletGenerateType>,
}

impl GenerateAutonomousDatabaseWalletDetails {
    /// Wallet for a single database.
    pub fn new(password: impl Into<Password>) -> Self {
        Self {
            password: password.into(),
            generate_type: None,
        }
    }
}

/// A backup of an autonomous database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutonomousDatabaseBackup {
    /// OCID
    pub id: String,
    /// Compartment OCID
    pub compartment_id: String,
    /// Backed up database OCID
    pub autonomous_database_id: String,
    /// Display name
    pub display_name: String,
    /// Full or incremental
    #[serde(rename = "type")]
    pub backup_type: AutonomousDatabaseBackupType,
    /// Taken automatically by the service
    pub is_automatic: bool,
    /// Start time
    #[serde(default)]
    pub time_started: Option<DateTime<Utc>>,
    /// End time
    #[serde(default)]
    pub time_ended: Option<DateTime<Utc>>,
    /// Additional lifecycle information
    #[serde(default)]
    pub lifecycle_details: Option<String>,
    /// Size in terabytes
    #[serde(default, rename = "databaseSizeInTBs")]
    pub database_size_in_tbs: Option<f64>,
    /// Lifecycle state
    pub lifecycle_state: AutonomousDatabaseBackupLifecycleState,
}

/// Item of `ListAutonomousDatabaseBackups`.
pub type AutonomousDatabaseBackupSummary = AutonomousDatabaseBackup;

/// Body of `CreateAutonomousDatabaseBackup`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAutonomousDatabaseBackupDetails {
    /// Database to back up
    pub autonomous_database_id: String,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Dedicated Exadata infrastructure for autonomous databases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutonomousExadataInfrastructure {
    /// OCID
    pub id: String,
    /// Compartment OCID
    pub compartment_id: String,
    /// Display name
    pub display_name: String,
    /// Availability domain
    pub availability_domain: String,
    /// Subnet OCID
    pub subnet_id: String,
    /// Network security group OCIDs
    #[serde(default)]
    pub nsg_ids: Vec<String>,
    /// Shape
    pub shape: String,
    /// Host name
    pub hostname: String,
    /// Domain name
    pub domain: String,
    /// Lifecycle state
    pub lifecycle_state: AutonomousExadataInfrastructureLifecycleState,
    /// Additional lifecycle information
    #[serde(default)]
    pub lifecycle_details: Option<String>,
    /// License model
    #[serde(default)]
    pub license_model: Option<LicenseModel>,
    /// Creation time
    #[serde(default)]
    pub time_created: Option<DateTime<Utc>>,
    /// Maintenance window
    #[serde(default)]
    pub maintenance_window: Option<MaintenanceWindow>,
    /// Last maintenance run OCID
    #[serde(default)]
    pub last_maintenance_run_id: Option<String>,
    /// Next maintenance run OCID
    #[serde(default)]
    pub next_maintenance_run_id: Option<String>,
    /// SCAN DNS name
    #[serde(default)]
    pub scan_dns_name: Option<String>,
    /// DNS zone OCID
    #[serde(default)]
    pub zone_id: Option<String>,
    /// Free-form tags
    #[serde(default)]
    pub freeform_tags: FreeformTags,
    /// Defined tags
    #[serde(default)]
    pub defined_tags: DefinedTags,
}

/// Item of `ListAutonomousExadataInfrastructures`.
pub type AutonomousExadataInfrastructureSummary = AutonomousExadataInfrastructure;

/// Body of `LaunchAutonomousExadataInfrastructure`.
#[derive(Debug, Clone, Serialize, Deserialize, Builder)]
#[builder(setter(into, strip_option))]
#[serde(rename_all = "camelCase")]
pub struct LaunchAutonomousExadataInfrastructureDetails {
    /// Compartment OCID
    pub compartment_id: String,
    /// Availability domain
    pub availability_domain: String,
    /// Subnet OCID
    pub subnet_id: String,
    /// Shape
    pub shape: String,
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub display_name: Option<String>,
    /// Domain name
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub domain: Option<String>,
    /// License model
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub license_model: Option<LicenseModel>,
    /// Maintenance window
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub maintenance_window_details: Option<MaintenanceWindow>,
    /// Network security group OCIDs
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub nsg_ids: Option<Vec<String>>,
    /// Free-form tags
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub freeform_tags: Option<FreeformTags>,
    /// Defined tags
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub defined_tags: Option<DefinedTags>,
}

impl LaunchAutonomousExadataInfrastructureDetails {
    /// Create a new builder.
    pub fn builder() -> LaunchAutonomousExadataInfrastructureDetailsBuilder {
        LaunchAutonomousExadataInfrastructureDetailsBuilder::default()
    }
}

/// Body of `UpdateAutonomousExadataInfrastructure`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAutonomousExadataInfrastructureDetails {
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Maintenance window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_window_details: Option<MaintenanceWindow>,
    /// Network security group OCIDs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nsg_ids: Option<Vec<String>>,
    /// Free-form tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    /// Defined tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

/// Shape available for autonomous Exadata infrastructure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutonomousExadataInfrastructureShapeSummary {
    /// Shape name
    pub name: String,
    /// Cores available
    pub available_core_count: u32,
    /// Minimum cores
    #[serde(default)]
    pub minimum_core_count: Option<u32>,
    /// Core count step
    #[serde(default)]
    pub core_count_increment: Option<u32>,
    /// Minimum nodes
    #[serde(default)]
    pub minimum_node_count: Option<u32>,
    /// Maximum nodes
    #[serde(default)]
    pub maximum_node_count: Option<u32>,
}

/// A database version available to autonomous databases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutonomousDbVersionSummary {
    /// Version string
    pub version: String,
    /// Workload the version applies to
    #[serde(default)]
    pub db_workload: Option<DbWorkload>,
    /// Available for dedicated deployments
    #[serde(default)]
    pub is_dedicated: Option<bool>,
    /// Release notes
    #[serde(default)]
    pub details: Option<String>,
    /// Available in the Always Free tier
    #[serde(default)]
    pub is_free_tier_enabled: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_autonomous_database_serialization() {
        let details = CreateAutonomousDatabaseDetails::builder()
            .compartment_id("ocid1.compartment.oc1..c")
            .db_name("SALES")
            .cpu_core_count(1u32)
            .data_storage_size_in_tbs(1u32)
            .admin_password("Welcome#12345")
            .db_workload(DbWorkload::Dw)
            .build()
            .unwrap();

        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["compartmentId"], "ocid1.compartment.oc1..c");
        assert_eq!(json["dbName"], "SALES");
        assert_eq!(json["cpuCoreCount"], 1);
        assert_eq!(json["adminPassword"], "Welcome#12345");
        assert_eq!(json["dbWorkload"], "DW");
        assert!(json.get("source").is_none());
        assert!(json.get("displayName").is_none());
    }

    #[test]
    fn test_clone_source_is_flattened() {
        let details = CreateAutonomousDatabaseDetails::builder()
            .compartment_id("c")
            .db_name("CLONE")
            .cpu_core_count(2u32)
            .data_storage_size_in_tbs(1u32)
            .admin_password("pw")
            .source(AutonomousDatabaseSource::Database {
                source_id: "ocid1.autonomousdatabase.oc1..src".into(),
                clone_type: CloneType::Metadata,
            })
            .build()
            .unwrap();

        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["source"], "DATABASE");
        assert_eq!(json["sourceId"], "ocid1.autonomousdatabase.oc1..src");
        assert_eq!(json["cloneType"], "METADATA");
    }

    #[test]
    fn test_builder_requires_password() {
        let result = CreateAutonomousDatabaseDetails::builder()
            .compartment_id("c")
            .db_name("X")
            .cpu_core_count(1u32)
            .data_storage_size_in_tbs(1u32)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_autonomous_database_deserialization() {
        let db: AutonomousDatabase = serde_json::from_value(json!({
            "id": "ocid1.autonomousdatabase.oc1..a",
            "compartmentId": "ocid1.compartment.oc1..c",
            "lifecycleState": "AVAILABLE",
            "dbName": "SALES",
            "cpuCoreCount": 2,
            "dataStorageSizeInTBs": 1,
            "dbWorkload": "OLTP",
            "connectionStrings": {
                "high": "adb.example:1522/sales_high",
                "allConnectionStrings": {"HIGH": "adb.example:1522/sales_high"}
            },
            "timeCreated": "2026-01-02T03:04:05.678Z"
        }))
        .unwrap();

        assert_eq!(db.lifecycle_state, AutonomousDatabaseLifecycleState::Available);
        assert_eq!(db.db_workload, Some(DbWorkload::Oltp));
        let strings = db.connection_strings.unwrap();
        assert_eq!(strings.all_connection_strings.len(), 1);
        assert!(db.whitelisted_ips.is_empty());
    }

    #[test]
    fn test_backup_type_field_name() {
        let backup: AutonomousDatabaseBackup = serde_json::from_value(json!({
            "id": "b",
            "compartmentId": "c",
            "autonomousDatabaseId": "a",
            "displayName": "nightly",
            "type": "INCREMENTAL",
            "isAutomatic": true,
            "lifecycleState": "ACTIVE"
        }))
        .unwrap();
        assert_eq!(backup.backup_type, AutonomousDatabaseBackupType::Incremental);
    }

    #[test]
    fn test_wallet_password_is_redacted_in_debug() {
        let details = GenerateAutonomousDatabaseWalletDetails::new("s3cret!Pass");
        assert!(!format!("{details:?}").contains("s3cret"));
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json, json!({"password": "s3cret!Pass"}));
    }
}
