//! Autonomous container database operations

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
        AutonomousContainerDatabase, AutonomousContainerDatabaseLifecycleState,
        AutonomousContainerDatabaseSummary, ChangeCompartmentDetails,
        CreateAutonomousContainerDatabaseDetails, SortBy, SortOrder,
        UpdateAutonomousContainerDatabaseDetails,
    },
    validation::path_param,
};
use http::Method;

const COLLECTION: &str = "/autonomousContainerDatabases";

/// Autonomous container databases.
///
/// Containers host dedicated autonomous databases on autonomous Exadata
/// infrastructure.
#[derive(Clone)]
pub struct AutonomousContainerDatabases {
    client: DatabaseClient,
}

/// Optional parameters of `ListAutonomousContainerDatabases`.
#[derive(Debug, Clone, Default)]
pub struct ListAutonomousContainerDatabasesOptions {
    /// Only containers on this infrastructure
    pub autonomous_exadata_infrastructure_id: Option<String>,
    /// Only containers in this availability domain
    pub availability_domain: Option<String>,
    /// Only containers in this state
    pub lifecycle_state: Option<AutonomousContainerDatabaseLifecycleState>,
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

impl ListAutonomousContainerDatabasesOptions {
    fn apply(&self, request: ApiRequest) -> Result<ApiRequest> {
        let request = request
            .query_opt(
                "autonomousExadataInfrastructureId",
                self.autonomous_exadata_infrastructure_id.as_deref(),
            )
            .query_opt("availabilityDomain", self.availability_domain.as_deref())
            .query_enum("lifecycleState", self.lifecycle_state)?
            .query_opt("displayName", self.display_name.as_deref())
            .query_enum("sortBy", self.sort_by)?
            .query_enum("sortOrder", self.sort_order)?;
        apply_list(request, &self.paging, self.opc_request_id.as_deref())
    }
}

paginated!(ListAutonomousContainerDatabasesOptions);

impl AutonomousContainerDatabases {
    pub(crate) fn new(client: DatabaseClient) -> Self {
        Self { client }
    }

    /// Create an autonomous container database.
    pub async fn create(
        &self,
        details: &CreateAutonomousContainerDatabaseDetails,
        options: CreateOptions,
    ) -> Result<ApiResponse<AutonomousContainerDatabase>> {
        let request = ApiRequest::new("CreateAutonomousContainerDatabase", Method::POST, COLLECTION)
            .json_body(details)?;
        let request = options.apply(request)?;
        self.client.call(request, &options.retry).await
    }

    /// Get an autonomous container database.
    pub async fn get(
        &self,
        autonomous_container_database_id: &str,
        options: ReadOptions,
    ) -> Result<ApiResponse<AutonomousContainerDatabase>> {
        let path = item_path(autonomous_container_database_id)?;
        let request = options.apply(ApiRequest::new(
            "GetAutonomousContainerDatabase",
            Method::GET,
            path,
        ))?;
        self.client.call(request, &options.retry).await
    }

    /// List the autonomous container databases of a compartment.
    pub async fn list(
        &self,
        compartment_id: &str,
        options: ListAutonomousContainerDatabasesOptions,
    ) -> Result<ApiResponse<Vec<AutonomousContainerDatabaseSummary>>> {
        let request = ApiRequest::new("ListAutonomousContainerDatabases", Method::GET, COLLECTION)
            .required_query("compartmentId", compartment_id)?;
        let request = options.apply(request)?;
        self.client.call(request, &options.retry).await
    }

    /// Update the properties of an autonomous container database.
    pub async fn update(
        &self,
        autonomous_container_database_id: &str,
        details: &UpdateAutonomousContainerDatabaseDetails,
        options: ConditionalOptions,
    ) -> Result<ApiResponse<AutonomousContainerDatabase>> {
        let path = item_path(autonomous_container_database_id)?;
        let request = ApiRequest::new("UpdateAutonomousContainerDatabase", Method::PUT, path)
            .json_body(details)?;
        let request = options.apply(request)?;
        self.client.call(request, &options.retry).await
    }

    /// Roll restart the container database.
    pub async fn restart(
        &self,
        autonomous_container_database_id: &str,
        options: ConditionalOptions,
    ) -> Result<ApiResponse<AutonomousContainerDatabase>> {
        let path = format!("{}/actions/restart", item_path(autonomous_container_database_id)?);
        let request = options.apply(ApiRequest::new(
            "RestartAutonomousContainerDatabase",
            Method::POST,
            path,
        ))?;
        self.client.call(request, &options.retry).await
    }

    /// Terminate an autonomous container database.
    pub async fn terminate(
        &self,
        autonomous_container_database_id: &str,
        options: ConditionalOptions,
    ) -> Result<ApiResponse<()>> {
        let path = item_path(autonomous_container_database_id)?;
        let request = options.apply(ApiRequest::new(
            "TerminateAutonomousContainerDatabase",
            Method::DELETE,
            path,
        ))?;
        self.client.call_empty(request, &options.retry).await
    }

    /// Move an autonomous container database to another compartment.
    pub async fn change_compartment(
        &self,
        autonomous_container_database_id: &str,
        details: &ChangeCompartmentDetails,
        options: ConditionalOptions,
    ) -> Result<ApiResponse<()>> {
        let path = format!(
            "{}/actions/changeCompartment",
            item_path(autonomous_container_database_id)?
        );
        let request = ApiRequest::new(
            "ChangeAutonomousContainerDatabaseCompartment",
            Method::POST,
            path,
        )
        .json_body(details)?;
        let request = options.apply(request)?;
        self.client.call_empty(request, &options.retry).await
    }
}

impl Resource for AutonomousContainerDatabases {
    fn client(&self) -> &DatabaseClient {
        &self.client
    }
}

fn item_path(autonomous_container_database_id: &str) -> Result<String> {
    Ok(format!(
        "{COLLECTION}/{}",
        path_param("autonomousContainerDatabaseId", autonomous_container_database_id)?
    ))
}
