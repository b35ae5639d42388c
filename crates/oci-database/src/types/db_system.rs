//! DB systems, their shapes and available database versions.

use super::autonomous::LicenseModel;
use super::common::{DefinedTags, FreeformTags, open_wire_enum, wire_enum};
use super::database::{CreateDatabaseDetails, CreateDatabaseFromBackupDetails, PatchAction};
use super::maintenance::MaintenanceWindow;
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

open_wire_enum! {
    /// Oracle Database edition.
    pub enum DatabaseEdition {
        /// Standard Edition
        StandardEdition => "STANDARD_EDITION",
        /// Enterprise Edition
        EnterpriseEdition => "ENTERPRISE_EDITION",
        /// Enterprise Edition High Performance
        EnterpriseEditionHighPerformance => "ENTERPRISE_EDITION_HIGH_PERFORMANCE",
        /// Enterprise Edition Extreme Performance
        EnterpriseEditionExtremePerformance => "ENTERPRISE_EDITION_EXTREME_PERFORMANCE",
    }
}

open_wire_enum! {
    /// Lifecycle of a DB system.
    pub enum DbSystemLifecycleState {
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
        /// Migrated to another shape
        Migrated => "MIGRATED",
        /// Maintenance running
        MaintenanceInProgress => "MAINTENANCE_IN_PROGRESS",
        /// Needs attention
        NeedsAttention => "NEEDS_ATTENTION",
    }
}

open_wire_enum! {
    /// Disk redundancy of a bare metal or Exadata DB system.
    pub enum DiskRedundancy {
        /// Three-way mirroring
        High => "HIGH",
        /// Two-way mirroring
        Normal => "NORMAL",
    }
}

wire_enum! {
    /// Storage management of a virtual machine DB system.
    pub enum StorageManagement {
        /// Automatic Storage Management
        Asm => "ASM",
        /// Logical Volume Manager
        Lvm => "LVM",
    }
}

/// Storage settings of a virtual machine DB system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbSystemOptions {
    /// Storage management
    pub storage_management: StorageManagement,
}

/// A bare metal, virtual machine or Exadata DB system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbSystem {
    /// OCID
    pub id: String,
    /// Compartment OCID
    pub compartment_id: String,
    /// Display name
    pub display_name: String,
    /// Availability domain
    pub availability_domain: String,
    /// Client subnet OCID
    pub subnet_id: String,
    /// Backup subnet OCID (Exadata)
    #[serde(default)]
    pub backup_subnet_id: Option<String>,
    /// Network security group OCIDs
    #[serde(default)]
    pub nsg_ids: Vec<String>,
    /// Backup network security group OCIDs
    #[serde(default)]
    pub backup_network_nsg_ids: Vec<String>,
    /// Shape
    pub shape: String,
    /// Public SSH keys
    #[serde(default)]
    pub ssh_public_keys: Vec<String>,
    /// Host name prefix
    pub hostname: String,
    /// Domain name
    pub domain: String,
    /// Enabled CPU cores
    pub cpu_core_count: u32,
    /// Cluster name (Exadata and RAC)
    #[serde(default)]
    pub cluster_name: Option<String>,
    /// Data storage percentage
    #[serde(default)]
    pub data_storage_percentage: Option<u32>,
    /// Edition
    pub database_edition: DatabaseEdition,
    /// Lifecycle state
    pub lifecycle_state: DbSystemLifecycleState,
    /// Additional lifecycle information
    #[serde(default)]
    pub lifecycle_details: Option<String>,
    /// Creation time
    #[serde(default)]
    pub time_created: Option<DateTime<Utc>>,
    /// Database version
    #[serde(default)]
    pub version: Option<String>,
    /// Disk redundancy
    #[serde(default)]
    pub disk_redundancy: Option<DiskRedundancy>,
    /// Available data storage in gigabytes
    #[serde(default, rename = "dataStorageSizeInGBs")]
    pub data_storage_size_in_gbs: Option<u32>,
    /// Reco storage in gigabytes
    #[serde(default, rename = "recoStorageSizeInGB")]
    pub reco_storage_size_in_gb: Option<u32>,
    /// Number of nodes
    #[serde(default)]
    pub node_count: Option<u32>,
    /// License model
    #[serde(default)]
    pub license_model: Option<LicenseModel>,
    /// Maintenance window
    #[serde(default)]
    pub maintenance_window: Option<MaintenanceWindow>,
    /// Last patch history entry OCID
    #[serde(default)]
    pub last_patch_history_entry_id: Option<String>,
    /// SCAN DNS record OCID
    #[serde(default)]
    pub scan_dns_record_id: Option<String>,
    /// SCAN IP OCIDs
    #[serde(default)]
    pub scan_ip_ids: Vec<String>,
    /// Virtual IP OCIDs
    #[serde(default)]
    pub vip_ids: Vec<String>,
    /// Storage settings
    #[serde(default)]
    pub db_system_options: Option<DbSystemOptions>,
    /// Sparse disk group configured
    #[serde(default)]
    pub sparse_diskgroup: Option<bool>,
    /// Listener port
    #[serde(default)]
    pub listener_port: Option<u32>,
    /// Free-form tags
    #[serde(default)]
    pub freeform_tags: FreeformTags,
    /// Defined tags
    #[serde(default)]
    pub defined_tags: DefinedTags,
}

/// Item of `ListDbSystems`.
pub type DbSystemSummary = DbSystem;

/// Initial DB home of a DB system launched with a new database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDbHomeDetails {
    /// Database version
    pub db_version: String,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Database to create in the home
    pub database: CreateDatabaseDetails,
}

/// Initial DB home of a DB system launched from a backup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDbHomeFromBackupDetails {
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Database to restore into the home
    pub database: CreateDatabaseFromBackupDetails,
}

/// How a DB system's first database is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all_fields = "camelCase")]
pub enum DbSystemSource {
    /// New empty database
    #[serde(rename = "NONE")]
    NewDatabase {
        /// Initial DB home
        db_home: CreateDbHomeDetails,
        /// Edition
        database_edition: DatabaseEdition,
        /// Disk redundancy
        #[serde(default, skip_serializing_if = "Option::is_none")]
        disk_redundancy: Option<DiskRedundancy>,
        /// License model
        #[serde(default, skip_serializing_if = "Option::is_none")]
        license_model: Option<LicenseModel>,
        /// Maintenance window
        #[serde(default, skip_serializing_if = "Option::is_none")]
        maintenance_window_details: Option<MaintenanceWindow>,
    },
    /// Restore of a database backup
    #[serde(rename = "DB_BACKUP")]
    DbBackup {
        /// Initial DB home
        db_home: CreateDbHomeFromBackupDetails,
        /// Edition
        database_edition: DatabaseEdition,
        /// Disk redundancy
        #[serde(default, skip_serializing_if = "Option::is_none")]
        disk_redundancy: Option<DiskRedundancy>,
        /// License model
        #[serde(default, skip_serializing_if = "Option::is_none")]
        license_model: Option<LicenseModel>,
    },
}

/// Body of `LaunchDbSystem`.
#[derive(Debug, Clone, Serialize, Deserialize, Builder)]
#[builder(setter(into, strip_option))]
#[serde(rename_all = "camelCase")]
pub struct LaunchDbSystemDetails {
    /// Compartment OCID
    pub compartment_id: String,
    /// Availability domain
    pub availability_domain: String,
    /// Client subnet OCID
    pub subnet_id: String,
    /// Shape
    pub shape: String,
    /// Public SSH keys
    pub ssh_public_keys: Vec<String>,
    /// Host name prefix
    pub hostname: String,
    /// Enabled CPU cores
    pub cpu_core_count: u32,
    /// Source of the first database
    #[serde(flatten)]
    pub source: DbSystemSource,
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub display_name: Option<String>,
    /// Domain name
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub domain: Option<String>,
    /// Backup subnet OCID (Exadata)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub backup_subnet_id: Option<String>,
    /// Network security group OCIDs
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub nsg_ids: Option<Vec<String>>,
    /// Cluster name
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub cluster_name: Option<String>,
    /// Data storage percentage (Exadata)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub data_storage_percentage: Option<u32>,
    /// Initial data storage in gigabytes (virtual machine)
    #[serde(rename = "initialDataStorageSizeInGB", skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub initial_data_storage_size_in_gb: Option<u32>,
    /// Number of nodes
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub node_count: Option<u32>,
    /// Storage settings
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub db_system_options: Option<DbSystemOptions>,
    /// Configure a sparse disk group
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub sparse_diskgroup: Option<bool>,
    /// Time zone
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub time_zone: Option<String>,
    /// Free-form tags
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub freeform_tags: Option<FreeformTags>,
    /// Defined tags
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub defined_tags: Option<DefinedTags>,
}

impl LaunchDbSystemDetails {
    /// Create a new builder.
    pub fn builder() -> LaunchDbSystemDetailsBuilder {
        LaunchDbSystemDetailsBuilder::default()
    }
}

/// Patch selection in `UpdateDbSystem` or `UpdateDbHome`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchDetails {
    /// Patch OCID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch_id: Option<String>,
    /// Apply or precheck
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<PatchAction>,
}

/// Body of `UpdateDbSystem`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDbSystemDetails {
    /// Enabled CPU cores
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_core_count: Option<u32>,
    /// New data storage size in gigabytes (virtual machine)
    #[serde(rename = "dataStorageSizeInGBs", skip_serializing_if = "Option::is_none")]
    pub data_storage_size_in_gbs: Option<u32>,
    /// Replacement public SSH keys
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssh_public_keys: Option<Vec<String>>,
    /// Shape to migrate to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
    /// Patch to apply
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<PatchDetails>,
    /// License model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_model: Option<LicenseModel>,
    /// Network security group OCIDs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nsg_ids: Option<Vec<String>>,
    /// Backup network security group OCIDs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_network_nsg_ids: Option<Vec<String>>,
    /// Maintenance window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_window_details: Option<MaintenanceWindow>,
    /// Free-form tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    /// Defined tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

/// A shape DB systems can be launched with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbSystemShapeSummary {
    /// Shape name
    pub name: String,
    /// Shape family
    #[serde(default)]
    pub shape_family: Option<String>,
    /// Deprecated alias of `name`
    #[serde(default)]
    pub shape: Option<String>,
    /// Maximum CPU cores
    pub available_core_count: u32,
    /// Minimum CPU cores
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

/// A database version available for DB systems.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbVersionSummary {
    /// Version string
    pub version: String,
    /// Latest release of its major version
    #[serde(default)]
    pub is_latest_for_major_version: Option<bool>,
    /// Supports pluggable databases
    #[serde(default)]
    pub supports_pdb: Option<bool>,
}
