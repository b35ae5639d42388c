//! VM cluster network operations
//!
//! Networks belong to an Exadata infrastructure and are addressed through it.

use super::{OCTET_STREAM, Resource};
use crate::{
    client::DatabaseClient,
    download::DownloadSink,
    error::Result,
    http::{ApiRequest, ApiResponse},
    options::{
        ConditionalOptions, CreateOptions, PageOptions, ReadOptions, RetrySetting, apply_list,
        paginated,
    },
    types::{
        GenerateRecommendedNetworkDetails, SortBy, SortOrder, UpdateVmClusterNetworkDetails,
        VmClusterNetwork, VmClusterNetworkDetails, VmClusterNetworkLifecycleState,
        VmClusterNetworkSummary,
    },
    validation::path_param,
};
use bytes::Bytes;
use http::Method;

/// Client and backup networks for VM clusters on Exadata Cloud@Customer.
#[derive(Clone)]
pub struct VmClusterNetworks {
    client: DatabaseClient,
}

/// Optional parameters of `ListVmClusterNetworks`.
#[derive(Debug, Clone, Default)]
pub struct ListVmClusterNetworksOptions {
    /// Only networks in this state
    pub lifecycle_state: Option<VmClusterNetworkLifecycleState>,
    /// Exact display name
    pub display_name: Option<String>,
    /// Sort field
    pub sort_by: Option<SortBy>,
    /// Sort direction
    pub sort_order: Option<SortOrder>,
    /// Paging
    pub paging: PageOptions,
    /// Caller's request identifier
    pub opc_request_id: Option<String>,
    /// Retry policy for this call
    pub retry: RetrySetting,
}

impl ListVmClusterNetworksOptions {
    fn apply(&self, request: ApiRequest) -> Result<ApiRequest> {
        let request = request
            .query_enum("lifecycleState", self.lifecycle_state)?
            .query_opt("displayName", self.display_name.as_deref())
            .query_enum("sortBy", self.sort_by)?
            .query_enum("sortOrder", self.sort_order)?;
        apply_list(request, &self.paging, self.opc_request_id.as_deref())
    }
}

paginated!(ListVmClusterNetworksOptions);

impl VmClusterNetworks {
    pub(crate) fn new(client: DatabaseClient) -> Self {
        Self { client }
    }

    /// Create a network on an Exadata infrastructure.
    pub async fn create(
        &self,
        exadata_infrastructure_id: &str,
        details: &VmClusterNetworkDetails,
        options: CreateOptions,
    ) -> Result<ApiResponse<VmClusterNetwork>> {
        let path = collection_path(exadata_infrastructure_id)?;
        let request =
            ApiRequest::new("CreateVmClusterNetwork", Method::POST, path).json_body(details)?;
        let request = options.apply(request)?;
        self.client.call(request, &options.retry).await
    }

    /// Get a network.
    pub async fn get(
        &self,
        exadata_infrastructure_id: &str,
        vm_cluster_network_id: &str,
        options: ReadOptions,
    ) -> Result<ApiResponse<VmClusterNetwork>> {
        let path = item_path(exadata_infrastructure_id, vm_cluster_network_id)?;
        let request = options.apply(ApiRequest::new("GetVmClusterNetwork", Method::GET, path))?;
        self.client.call(request, &options.retry).await
    }

    /// List the networks of an infrastructure within a compartment.
    pub async fn list(
        &self,
        exadata_infrastructure_id: &str,
        compartment_id: &str,
        options: ListVmClusterNetworksOptions,
    ) -> Result<ApiResponse<Vec<VmClusterNetworkSummary>>> {
        let path = collection_path(exadata_infrastructure_id)?;
        let request = ApiRequest::new("ListVmClusterNetworks", Method::GET, path)
            .required_query("compartmentId", compartment_id)?;
        let request = options.apply(request)?;
        self.client.call(request, &options.retry).await
    }

    /// Update a network that is not yet in use.
    pub async fn update(
        &self,
        exadata_infrastructure_id: &str,
        vm_cluster_network_id: &str,
        details: &UpdateVmClusterNetworkDetails,
        options: ConditionalOptions,
    ) -> Result<ApiResponse<VmClusterNetwork>> {
        let path = item_path(exadata_infrastructure_id, vm_cluster_network_id)?;
        let request =
            ApiRequest::new("UpdateVmClusterNetwork", Method::PUT, path).json_body(details)?;
        let request = options.apply(request)?;
        self.client.call(request, &options.retry).await
    }

    /// Delete a network.
    pub async fn delete(
        &self,
        exadata_infrastructure_id: &str,
        vm_cluster_network_id: &str,
        options: ConditionalOptions,
    ) -> Result<ApiResponse<()>> {
        let path = item_path(exadata_infrastructure_id, vm_cluster_network_id)?;
        let request =
            options.apply(ApiRequest::new("DeleteVmClusterNetwork", Method::DELETE, path))?;
        self.client.call_empty(request, &options.retry).await
    }

    /// Validate a network against the infrastructure.
    pub async fn validate(
        &self,
        exadata_infrastructure_id: &str,
        vm_cluster_network_id: &str,
        options: ConditionalOptions,
    ) -> Result<ApiResponse<VmClusterNetwork>> {
        let path = format!(
            "{}/actions/validate",
            item_path(exadata_infrastructure_id, vm_cluster_network_id)?
        );
        let request =
            options.apply(ApiRequest::new("ValidateVmClusterNetwork", Method::POST, path))?;
        self.client.call(request, &options.retry).await
    }

    /// Download the network configuration bundle, buffered in memory.
    pub async fn download_config_file(
        &self,
        exadata_infrastructure_id: &str,
        vm_cluster_network_id: &str,
        options: CreateOptions,
    ) -> Result<ApiResponse<Bytes>> {
        let request =
            config_file_request(exadata_infrastructure_id, vm_cluster_network_id, &options)?;
        self.client.download(request, &options.retry).await
    }

    /// Download the network configuration bundle into `sink`.
    pub async fn download_config_file_to<S>(
        &self,
        exadata_infrastructure_id: &str,
        vm_cluster_network_id: &str,
        sink: &mut S,
        options: CreateOptions,
    ) -> Result<ApiResponse<u64>>
    where
        S: DownloadSink + ?Sized,
    {
        let request =
            config_file_request(exadata_infrastructure_id, vm_cluster_network_id, &options)?;
        self.client.download_to(request, &options.retry, sink).await
    }

    /// Ask the service for a network plan from address ranges.
    ///
    /// The result can be reviewed and passed to [`create`](Self::create).
    pub async fn generate_recommended(
        &self,
        exadata_infrastructure_id: &str,
        details: &GenerateRecommendedNetworkDetails,
        options: CreateOptions,
    ) -> Result<ApiResponse<VmClusterNetworkDetails>> {
        let path = format!(
            "{}/actions/generateRecommendedNetwork",
            collection_path(exadata_infrastructure_id)?
        );
        let request = ApiRequest::new("GenerateRecommendedVmClusterNetwork", Method::POST, path)
            .json_body(details)?;
        let request = options.apply(request)?;
        self.client.call(request, &options.retry).await
    }
}

impl Resource for VmClusterNetworks {
    fn client(&self) -> &DatabaseClient {
        &self.client
    }
}

fn collection_path(exadata_infrastructure_id: &str) -> Result<String> {
    Ok(format!(
        "/exadataInfrastructures/{}/vmClusterNetworks",
        path_param("exadataInfrastructureId", exadata_infrastructure_id)?
    ))
}

fn item_path(exadata_infrastructure_id: &str, vm_cluster_network_id: &str) -> Result<String> {
    let collection = collection_path(exadata_infrastructure_id)?;
    Ok(format!(
        "{collection}/{}",
        path_param("vmClusterNetworkId", vm_cluster_network_id)?
    ))
}

fn config_file_request(
    exadata_infrastructure_id: &str,
    vm_cluster_network_id: &str,
    options: &CreateOptions,
) -> Result<ApiRequest> {
    let path = format!(
        "{}/actions/downloadConfigFile",
        item_path(exadata_infrastructure_id, vm_cluster_network_id)?
    );
    options.apply(
        ApiRequest::new("DownloadVmClusterNetworkConfigFile", Method::POST, path)
            .accept(OCTET_STREAM),
    )
}
