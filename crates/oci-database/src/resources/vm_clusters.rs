//! VM cluster operations

use super::Resource;
use crate::{
    client::DatabaseClient,
    error::Result,
    http::{ApiRequest, ApiResponse},
    options::{
        ConditionalOptions, CreateOptions, PageOptions, ReadOptions, RetrySetting, apply_list,
        paginated,
    },
    types::{
        CreateVmClusterDetails, SortBy, SortOrder, UpdateVmClusterDetails, VmCluster,
        VmClusterLifecycleState, VmClusterSummary,
    },
    validation::path_param,
};
use http::Method;

const COLLECTION: &str = "/vmClusters";

/// VM clusters on Exadata Cloud@Customer infrastructure.
#[derive(Clone)]
pub struct VmClusters {
    client: DatabaseClient,
}

/// Optional parameters of `ListVmClusters`.
#[derive(Debug, Clone, Default)]
pub struct ListVmClustersOptions {
    /// Only clusters on this infrastructure
    pub exadata_infrastructure_id: Option<String>,
    /// Only clusters in this state
    pub lifecycle_state: Option<VmClusterLifecycleState>,
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

impl ListVmClustersOptions {
    fn apply(&self, request: ApiRequest) -> Result<ApiRequest> {
        let request = request
            .query_opt(
                "exadataInfrastructureId",
                self.exadata_infrastructure_id.as_deref(),
            )
            .query_enum("lifecycleState", self.lifecycle_state)?
            .query_opt("displayName", self.display_name.as_deref())
            .query_enum("sortBy", self.sort_by)?
            .query_enum("sortOrder", self.sort_order)?;
        apply_list(request, &self.paging, self.opc_request_id.as_deref())
    }
}

paginated!(ListVmClustersOptions);

impl VmClusters {
    pub(crate) fn new(client: DatabaseClient) -> Self {
        Self { client }
    }

    /// Create a VM cluster on a validated network.
    pub async fn create(
        &self,
        details: &CreateVmClusterDetails,
        options: CreateOptions,
    ) -> Result<ApiResponse<VmCluster>> {
        let request =
            ApiRequest::new("CreateVmCluster", Method::POST, COLLECTION).json_body(details)?;
        let request = options.apply(request)?;
        self.client.call(request, &options.retry).await
    }

    /// Get a VM cluster.
    pub async fn get(&self, vm_cluster_id: &str, options: ReadOptions) -> Result<ApiResponse<VmCluster>> {
        let path = item_path(vm_cluster_id)?;
        let request = options.apply(ApiRequest::new("GetVmCluster", Method::GET, path))?;
        self.client.call(request, &options.retry).await
    }

    /// List the VM clusters of a compartment.
    pub async fn list(
        &self,
        compartment_id: &str,
        options: ListVmClustersOptions,
    ) -> Result<ApiResponse<Vec<VmClusterSummary>>> {
        let request = ApiRequest::new("ListVmClusters", Method::GET, COLLECTION)
            .required_query("compartmentId", compartment_id)?;
        let request = options.apply(request)?;
        self.client.call(request, &options.retry).await
    }

    /// Scale or retag a VM cluster.
    pub async fn update(
        &self,
        vm_cluster_id: &str,
        details: &UpdateVmClusterDetails,
        options: ConditionalOptions,
    ) -> Result<ApiResponse<VmCluster>> {
        let path = item_path(vm_cluster_id)?;
        let request = ApiRequest::new("UpdateVmCluster", Method::PUT, path).json_body(details)?;
        let request = options.apply(request)?;
        self.client.call(request, &options.retry).await
    }

    /// Delete a VM cluster.
    pub async fn delete(
        &self,
        vm_cluster_id: &str,
        options: ConditionalOptions,
    ) -> Result<ApiResponse<()>> {
        let path = item_path(vm_cluster_id)?;
        let request = options.apply(ApiRequest::new("DeleteVmCluster", Method::DELETE, path))?;
        self.client.call_empty(request, &options.retry).await
    }
}

impl Resource for VmClusters {
    fn client(&self) -> &DatabaseClient {
        &self.client
    }
}

fn item_path(vm_cluster_id: &str) -> Result<String> {
    Ok(format!("{COLLECTION}/{}", path_param("vmClusterId", vm_cluster_id)?))
}
