//! Maintenance run operations

use super::Resource;
use crate::{
    client::DatabaseClient,
    error::Result,
    http::{ApiRequest, ApiResponse},
    options::{ConditionalOptions, PageOptions, ReadOptions, RetrySetting, apply_list, paginated},
    types::{
        MaintenanceRun, MaintenanceRunLifecycleState, MaintenanceRunSortBy, MaintenanceRunSummary,
        MaintenanceTargetResourceType, MaintenanceType, SortOrder, UpdateMaintenanceRunDetails,
    },
    validation::path_param,
};
use http::Method;

const COLLECTION: &str = "/maintenanceRuns";

/// Scheduled maintenance of autonomous and Exadata resources.
#[derive(Clone)]
pub struct MaintenanceRuns {
    client: DatabaseClient,
}

/// Optional parameters of `ListMaintenanceRuns`.
#[derive(Debug, Clone, Default)]
pub struct ListMaintenanceRunsOptions {
    /// Only runs on this resource
    pub target_resource_id: Option<String>,
    /// Only runs on this kind of resource
    pub target_resource_type: Option<MaintenanceTargetResourceType>,
    /// Planned or unplanned
    pub maintenance_type: Option<MaintenanceType>,
    /// Only runs in this availability domain
    pub availability_domain: Option<String>,
    /// Only runs in this state
    pub lifecycle_state: Option<MaintenanceRunLifecycleState>,
    /// Sort field
    pub sort_by: Option<MaintenanceRunSortBy>,
    /// Sort direction
    pub sort_order: Option<SortOrder>,
    /// Paging
    pub paging: PageOptions,
    /// Caller's request identifier
    pub opc_request_id: Option<String>,
    /// Retry policy for this call
    pub retry: RetrySetting,
}

impl ListMaintenanceRunsOptions {
    fn apply(&self, request: ApiRequest) -> Result<ApiRequest> {
        let request = request
            .query_opt("targetResourceId", self.target_resource_id.as_deref())
            .query_enum("targetResourceType", self.target_resource_type)?
            .query_enum("maintenanceType", self.maintenance_type)?
            .query_opt("availabilityDomain", self.availability_domain.as_deref())
            .query_enum("lifecycleState", self.lifecycle_state)?
            .query_enum("sortBy", self.sort_by)?
            .query_enum("sortOrder", self.sort_order)?;
        apply_list(request, &self.paging, self.opc_request_id.as_deref())
    }
}

paginated!(ListMaintenanceRunsOptions);

impl MaintenanceRuns {
    pub(crate) fn new(client: DatabaseClient) -> Self {
        Self { client }
    }

    /// Get a maintenance run.
    pub async fn get(
        &self,
        maintenance_run_id: &str,
        options: ReadOptions,
    ) -> Result<ApiResponse<MaintenanceRun>> {
        let path = item_path(maintenance_run_id)?;
        let request = options.apply(ApiRequest::new("GetMaintenanceRun", Method::GET, path))?;
        self.client.call(request, &options.retry).await
    }

    /// List the maintenance runs of a compartment.
    pub async fn list(
        &self,
        compartment_id: &str,
        options: ListMaintenanceRunsOptions,
    ) -> Result<ApiResponse<Vec<MaintenanceRunSummary>>> {
        let request = ApiRequest::new("ListMaintenanceRuns", Method::GET, COLLECTION)
            .required_query("compartmentId", compartment_id)?;
        let request = options.apply(request)?;
        self.client.call(request, &options.retry).await
    }

    /// Skip, reschedule or retag a maintenance run.
    pub async fn update(
        &self,
        maintenance_run_id: &str,
        details: &UpdateMaintenanceRunDetails,
        options: ConditionalOptions,
    ) -> Result<ApiResponse<MaintenanceRun>> {
        let path = item_path(maintenance_run_id)?;
        let request =
            ApiRequest::new("UpdateMaintenanceRun", Method::PUT, path).json_body(details)?;
        let request = options.apply(request)?;
        self.client.call(request, &options.retry).await
    }
}

impl Resource for MaintenanceRuns {
    fn client(&self) -> &DatabaseClient {
        &self.client
    }
}

fn item_path(maintenance_run_id: &str) -> Result<String> {
    Ok(format!(
        "{COLLECTION}/{}",
        path_param("maintenanceRunId", maintenance_run_id)?
    ))
}
