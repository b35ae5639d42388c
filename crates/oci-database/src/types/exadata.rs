//! Exadata Cloud@Customer: infrastructure, VM cluster networks and VM clusters.

use super::autonomous::LicenseModel;
use super::common::{DefinedTags, FreeformTags, open_wire_enum};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

open_wire_enum! {
    /// Lifecycle of Exadata Cloud@Customer infrastructure.
    pub enum ExadataInfrastructureLifecycleState {
        /// Being created
        Creating => "CREATING",
        /// Waiting for the activation file
        RequiresActivation => "REQUIRES_ACTIVATION",
        /// Activating
        Activating => "ACTIVATING",
        /// Ready
        Active => "ACTIVE",
        /// Activation failed
        ActivationFailed => "ACTIVATION_FAILED",
        /// Failed
        Failed => "FAILED",
        /// Being updated
        Updating => "UPDATING",
        /// Being deleted
        Deleting => "DELETING",
        /// Deleted
        Deleted => "DELETED",
        /// Control plane lost contact
        Disconnected => "DISCONNECTED",
    }
}

/// Customer contact for an Exadata infrastructure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExadataInfrastructureContact {
    /// Name
    pub name: String,
    /// Email address
    pub email: String,
    /// Primary contact
    pub is_primary: bool,
    /// Phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// Exadata hardware installed in a customer data center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExadataInfrastructure {
    /// OCID
    pub id: String,
    /// Compartment OCID
    pub compartment_id: String,
    /// Display name
    pub display_name: String,
    /// Lifecycle state
    pub lifecycle_state: ExadataInfrastructureLifecycleState,
    /// Shape
    pub shape: String,
    /// Time zone
    #[serde(default)]
    pub time_zone: Option<String>,
    /// Enabled CPU cores
    #[serde(default)]
    pub cpus_enabled: Option<u32>,
    /// Total CPU cores
    #[serde(default)]
    pub max_cpu_count: Option<u32>,
    /// Allocated memory in gigabytes
    #[serde(default, rename = "memorySizeInGBs")]
    pub memory_size_in_gbs: Option<u32>,
    /// Total memory in gigabytes
    #[serde(default, rename = "maxMemoryInGBs")]
    pub max_memory_in_gbs: Option<u32>,
    /// Allocated local node storage in gigabytes
    #[serde(default, rename = "dbNodeStorageSizeInGBs")]
    pub db_node_storage_size_in_gbs: Option<u32>,
    /// Total local node storage in gigabytes
    #[serde(default, rename = "maxDbNodeStorageInGBs")]
    pub max_db_node_storage_in_gbs: Option<u32>,
    /// Allocated data storage in terabytes
    #[serde(default, rename = "dataStorageSizeInTBs")]
    pub data_storage_size_in_tbs: Option<f64>,
    /// Total data storage in terabytes
    #[serde(default, rename = "maxDataStorageInTBs")]
    pub max_data_storage_in_tbs: Option<f64>,
    /// First control plane server IP
    #[serde(default)]
    pub cloud_control_plane_server1: Option<String>,
    /// Second control plane server IP
    #[serde(default)]
    pub cloud_control_plane_server2: Option<String>,
    /// Control plane netmask
    #[serde(default)]
    pub netmask: Option<String>,
    /// Control plane gateway
    #[serde(default)]
    pub gateway: Option<String>,
    /// Administration network CIDR
    #[serde(default, rename = "adminNetworkCIDR")]
    pub admin_network_cidr: Option<String>,
    /// InfiniBand network CIDR
    #[serde(default, rename = "infiniBandNetworkCIDR")]
    pub infini_band_network_cidr: Option<String>,
    /// Corporate HTTP proxy
    #[serde(default)]
    pub corporate_proxy: Option<String>,
    /// DNS servers
    #[serde(default)]
    pub dns_server: Vec<String>,
    /// NTP servers
    #[serde(default)]
    pub ntp_server: Vec<String>,
    /// Customer support identifier
    #[serde(default)]
    pub csi_number: Option<String>,
    /// Customer contacts
    #[serde(default)]
    pub contacts: Vec<ExadataInfrastructureContact>,
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

/// Item of `ListExadataInfrastructures`.
pub type ExadataInfrastructureSummary = ExadataInfrastructure;

/// Body of `CreateExadataInfrastructure`.
#[derive(Debug, Clone, Serialize, Deserialize, Builder)]
#[builder(setter(into, strip_option))]
#[serde(rename_all = "camelCase")]
pub struct CreateExadataInfrastructureDetails {
    /// Compartment OCID
    pub compartment_id: String,
    /// Display name
    pub display_name: String,
    /// Shape
    pub shape: String,
    /// Time zone
    pub time_zone: String,
    /// First control plane server IP
    pub cloud_control_plane_server1: String,
    /// Second control plane server IP
    pub cloud_control_plane_server2: String,
    /// Control plane netmask
    pub netmask: String,
    /// Control plane gateway
    pub gateway: String,
    /// Administration network CIDR
    #[serde(rename = "adminNetworkCIDR")]
    pub admin_network_cidr: String,
    /// InfiniBand network CIDR
    #[serde(rename = "infiniBandNetworkCIDR")]
    pub infini_band_network_cidr: String,
    /// DNS servers
    pub dns_server: Vec<String>,
    /// NTP servers
    pub ntp_server: Vec<String>,
    /// Corporate HTTP proxy
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub corporate_proxy: Option<String>,
    /// Customer contacts
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub contacts: Option<Vec<ExadataInfrastructureContact>>,
    /// Free-form tags
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub freeform_tags: Option<FreeformTags>,
    /// Defined tags
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub defined_tags: Option<DefinedTags>,
}

impl CreateExadataInfrastructureDetails {
    /// Create a new builder.
    pub fn builder() -> CreateExadataInfrastructureDetailsBuilder {
        CreateExadataInfrastructureDetailsBuilder::default()
    }
}

/// Body of `UpdateExadataInfrastructure`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExadataInfrastructureDetails {
    /// First control plane server IP
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_control_plane_server1: Option<String>,
    /// Second control plane server IP
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_control_plane_server2: Option<String>,
    /// Control plane netmask
    #[serde(skip_serializing_if = "Option::is_none")]
    pub netmask: Option<String>,
    /// Control plane gateway
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,
    /// Administration network CIDR
    #[serde(rename = "adminNetworkCIDR", skip_serializing_if = "Option::is_none")]
    pub admin_network_cidr: Option<String>,
    /// InfiniBand network CIDR
    #[serde(rename = "infiniBandNetworkCIDR", skip_serializing_if = "Option::is_none")]
    pub infini_band_network_cidr: Option<String>,
    /// Corporate HTTP proxy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corporate_proxy: Option<String>,
    /// DNS servers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_server: Option<Vec<String>>,
    /// NTP servers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ntp_server: Option<Vec<String>>,
    /// Time zone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    /// Customer contacts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacts: Option<Vec<ExadataInfrastructureContact>>,
    /// Free-form tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    /// Defined tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

/// Body of `ActivateExadataInfrastructure`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivateExadataInfrastructureDetails {
    /// Activation file, base64 encoded
    pub activation_file: String,
}

impl ActivateExadataInfrastructureDetails {
    /// Encode the raw activation file downloaded from the console.
    pub fn from_file_contents(contents: &[u8]) -> Self {
        Self {
            activation_file: STANDARD.encode(contents),
        }
    }
}

open_wire_enum! {
    /// Lifecycle of a VM cluster network.
    pub enum VmClusterNetworkLifecycleState {
        /// Being created
        Creating => "CREATING",
        /// Waiting for validation
        RequiresValidation => "REQUIRES_VALIDATION",
        /// Validating
        Validating => "VALIDATING",
        /// Validated
        Validated => "VALIDATED",
        /// Validation failed
        ValidationFailed => "VALIDATION_FAILED",
        /// Being updated
        Updating => "UPDATING",
        /// In use by a VM cluster
        Allocated => "ALLOCATED",
        /// Being terminated
        Terminating => "TERMINATING",
        /// Terminated
        Terminated => "TERMINATED",
        /// Failed
        Failed => "FAILED",
    }
}

open_wire_enum! {
    /// Purpose of a VM network.
    pub enum VmNetworkType {
        /// Client traffic
        Client => "CLIENT",
        /// Backup traffic
        Backup => "BACKUP",
    }
}

/// Single Client Access Name listener.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanDetails {
    /// SCAN host name
    pub hostname: String,
    /// Listener port
    pub port: u16,
    /// SCAN IP addresses
    pub ips: Vec<String>,
}

/// Addresses of one DB node on a VM network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDetails {
    /// Host name
    pub hostname: String,
    /// IP address
    pub ip: String,
    /// Virtual IP host name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vip_hostname: Option<String>,
    /// Virtual IP address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vip: Option<String>,
}

/// Client or backup network of a VM cluster network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VmNetworkDetails {
    /// Purpose
    pub network_type: VmNetworkType,
    /// Node addresses
    pub nodes: Vec<NodeDetails>,
    /// VLAN id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vlan_id: Option<String>,
    /// Netmask
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub netmask: Option<String>,
    /// Gateway
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,
    /// Domain name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
}

/// A VM cluster network on Exadata Cloud@Customer infrastructure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VmClusterNetwork {
    /// OCID
    pub id: String,
    /// Infrastructure OCID
    pub exadata_infrastructure_id: String,
    /// Compartment OCID
    pub compartment_id: String,
    /// Display name
    pub display_name: String,
    /// Lifecycle state
    pub lifecycle_state: VmClusterNetworkLifecycleState,
    /// SCAN listeners
    #[serde(default)]
    pub scans: Vec<ScanDetails>,
    /// DNS servers
    #[serde(default)]
    pub dns: Vec<String>,
    /// NTP servers
    #[serde(default)]
    pub ntp: Vec<String>,
    /// Client and backup networks
    #[serde(default)]
    pub vm_networks: Vec<VmNetworkDetails>,
    /// VM cluster using the network
    #[serde(default)]
    pub vm_cluster_id: Option<String>,
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

/// Item of `ListVmClusterNetworks`.
pub type VmClusterNetworkSummary = VmClusterNetwork;

/// Body of `CreateVmClusterNetwork`, also returned by
/// `GenerateRecommendedVmClusterNetwork`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VmClusterNetworkDetails {
    /// Compartment OCID
    pub compartment_id: String,
    /// Display name
    pub display_name: String,
    /// SCAN listeners
    pub scans: Vec<ScanDetails>,
    /// Client and backup networks
    pub vm_networks: Vec<VmNetworkDetails>,
    /// DNS servers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns: Option<Vec<String>>,
    /// NTP servers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ntp: Option<Vec<String>>,
    /// Free-form tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    /// Defined tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

/// Body of `UpdateVmClusterNetwork`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVmClusterNetworkDetails {
    /// SCAN listeners
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scans: Option<Vec<ScanDetails>>,
    /// DNS servers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns: Option<Vec<String>>,
    /// NTP servers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ntp: Option<Vec<String>>,
    /// Client and backup networks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vm_networks: Option<Vec<VmNetworkDetails>>,
    /// Free-form tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    /// Defined tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

/// Address plan for one network in `GenerateRecommendedVmClusterNetwork`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoForNetworkGenDetails {
    /// Purpose
    pub network_type: VmNetworkType,
    /// VLAN id
    pub vlan_id: String,
    /// CIDR block
    pub cidr: String,
    /// Gateway
    pub gateway: String,
    /// Netmask
    pub netmask: String,
    /// Domain name
    pub domain: String,
    /// Host name prefix
    pub prefix: String,
}

/// Body of `GenerateRecommendedVmClusterNetwork`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRecommendedNetworkDetails {
    /// Compartment OCID
    pub compartment_id: String,
    /// Display name
    pub display_name: String,
    /// Networks to plan
    pub networks: Vec<InfoForNetworkGenDetails>,
    /// DNS servers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns: Option<Vec<String>>,
    /// NTP servers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ntp: Option<Vec<String>>,
    /// Free-form tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    /// Defined tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

open_wire_enum! {
    /// Lifecycle of a VM cluster.
    pub enum VmClusterLifecycleState {
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

/// A VM cluster on Exadata Cloud@Customer infrastructure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VmCluster {
    /// OCID
    pub id: String,
    /// Compartment OCID
    pub compartment_id: String,
    /// Display name
    pub display_name: String,
    /// Infrastructure OCID
    #[serde(default)]
    pub exadata_infrastructure_id: Option<String>,
    /// VM cluster network OCID
    #[serde(default)]
    pub vm_cluster_network_id: Option<String>,
    /// Lifecycle state
    pub lifecycle_state: VmClusterLifecycleState,
    /// Additional lifecycle information
    #[serde(default)]
    pub lifecycle_details: Option<String>,
    /// Creation time
    #[serde(default)]
    pub time_created: Option<DateTime<Utc>>,
    /// Time zone
    #[serde(default)]
    pub time_zone: Option<String>,
    /// Local backups enabled
    #[serde(default)]
    pub is_local_backup_enabled: Option<bool>,
    /// Sparse disk group enabled
    #[serde(default)]
    pub is_sparse_diskgroup_enabled: Option<bool>,
    /// Grid Infrastructure version
    #[serde(default)]
    pub gi_version: Option<String>,
    /// Public SSH keys
    #[serde(default)]
    pub ssh_public_keys: Vec<String>,
    /// License model
    #[serde(default)]
    pub license_model: Option<LicenseModel>,
    /// Enabled CPU cores
    #[serde(default)]
    pub cpus_enabled: Option<u32>,
    /// Memory in gigabytes
    #[serde(default, rename = "memorySizeInGBs")]
    pub memory_size_in_gbs: Option<u32>,
    /// Local node storage in gigabytes
    #[serde(default, rename = "dbNodeStorageSizeInGBs")]
    pub db_node_storage_size_in_gbs: Option<u32>,
    /// Data storage in terabytes
    #[serde(default, rename = "dataStorageSizeInTBs")]
    pub data_storage_size_in_tbs: Option<f64>,
    /// Shape
    #[serde(default)]
    pub shape: Option<String>,
    /// Last patch history entry OCID
    #[serde(default)]
    pub last_patch_history_entry_id: Option<String>,
    /// Free-form tags
    #[serde(default)]
    pub freeform_tags: FreeformTags,
    /// Defined tags
    #[serde(default)]
    pub defined_tags: DefinedTags,
}

/// Item of `ListVmClusters`.
pub type VmClusterSummary = VmCluster;

/// Body of `CreateVmCluster`.
#[derive(Debug, Clone, Serialize, Deserialize, Builder)]
#[builder(setter(into, strip_option))]
#[serde(rename_all = "camelCase")]
pub struct CreateVmClusterDetails {
    /// Compartment OCID
    pub compartment_id: String,
    /// Display name
    pub display_name: String,
    /// Infrastructure OCID
    pub exadata_infrastructure_id: String,
    /// Enabled CPU cores
    pub cpu_core_count: u32,
    /// Public SSH keys
    pub ssh_public_keys: Vec<String>,
    /// Validated VM cluster network OCID
    pub vm_cluster_network_id: String,
    /// Grid Infrastructure version
    pub gi_version: String,
    /// Memory in gigabytes
    #[serde(rename = "memorySizeInGBs", skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub memory_size_in_gbs: Option<u32>,
    /// Local node storage in gigabytes
    #[serde(rename = "dbNodeStorageSizeInGBs", skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub db_node_storage_size_in_gbs: Option<u32>,
    /// Data storage in terabytes
    #[serde(rename = "dataStorageSizeInTBs", skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub data_storage_size_in_tbs: Option<f64>,
    /// License model
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub license_model: Option<LicenseModel>,
    /// Sparse disk group
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub is_sparse_diskgroup_enabled: Option<bool>,
    /// Local backups
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub is_local_backup_enabled: Option<bool>,
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

impl CreateVmClusterDetails {
    /// Create a new builder.
    pub fn builder() -> CreateVmClusterDetailsBuilder {
        CreateVmClusterDetailsBuilder::default()
    }
}

/// Body of `UpdateVmCluster`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVmClusterDetails {
    /// Enabled CPU cores
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_core_count: Option<u32>,
    /// Memory in gigabytes
    #[serde(rename = "memorySizeInGBs", skip_serializing_if = "Option::is_none")]
    pub memory_size_in_gbs: Option<u32>,
    /// Local node storage in gigabytes
    #[serde(rename = "dbNodeStorageSizeInGBs", skip_serializing_if = "Option::is_none")]
    pub db_node_storage_size_in_gbs: Option<u32>,
    /// Data storage in terabytes
    #[serde(rename = "dataStorageSizeInTBs", skip_serializing_if = "Option::is_none")]
    pub data_storage_size_in_tbs: Option<f64>,
    /// License model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_model: Option<LicenseModel>,
    /// Replacement public SSH keys
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssh_public_keys: Option<Vec<String>>,
    /// Free-form tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    /// Defined tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}
