//! DB system operations
//!
//! Besides the DB systems themselves this handle lists the shapes and
//! database versions a DB system can be launched with, and the patches
//! applicable to an existing one.

use super::Resource;
use crate::{
    client::DatabaseClient,
    error::Result,
    http::{ApiRequest, ApiResponse},
    options::{
        ConditionalOptions, CreateOptions, ListOptions, PageOptions, ReadOptions, RetrySetting,
        apply_list, paginated,
    },
    types::{
        ChangeCompartmentDetails, DbSystem, DbSystemLifecycleState, DbSystemShapeSummary,
        DbSystemSummary, DbVersionSummary, LaunchDbSystemDetails, PatchSummary, SortBy, SortOrder,
        UpdateDbSystemDetails,
    },
    validation::path_param,
};
use http::Method;

const COLLECTION: &str = "/dbSystems";

/// Bare metal, virtual machine and Exadata DB systems.
#[derive(Clone)]
pub struct DbSystems {
    client: DatabaseClient,
}

/// Optional parameters of `ListDbSystems`.
#[derive(Debug, Clone, Default)]
pub struct ListDbSystemsOptions {
    /// Only DB systems launched from this backup
    pub backup_id: Option<String>,
    /// Only DB systems in this availability domain
    pub availability_domain: Option<String>,
    /// Only DB systems in this state
    pub lifecycle_state: Option<DbSystemLifecycleState>,
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

impl ListDbSystemsOptions {
    fn apply(&self, request: ApiRequest) -> Result<ApiRequest> {
        let request = request
            .query_opt("backupId", self.backup_id.as_deref())
            .query_opt("availabilityDomain", self.availability_domain.as_deref())
            .query_enum("lifecycleState", self.lifecycle_state)?
            .query_opt("displayName", self.display_name.as_deref())
            .query_enum("sortBy", self.sort_by)?
            .query_enum("sortOrder", self.sort_order)?;
        apply_list(request, &self.paging, self.opc_request_id.as_deref())
    }
}

/// Optional parameters of `ListDbSystemShapes`.
#[derive(Debug, Clone, Default)]
pub struct ListDbSystemShapesOptions {
    /// Only shapes offered in this availability domain
    pub availability_domain: Option<String>,
    /// Paging
    pub paging: PageOptions,
    /// Caller's request identifier
    pub opc_request_id: Option<String>,
    /// Retry policy for this call
    pub retry: RetrySetting,
}

/// Optional parameters of `ListDbVersions`.
#[derive(Debug, Clone, Default)]
pub struct ListDbVersionsOptions {
    /// Only versions supported by this shape
    pub db_system_shape: Option<String>,
    /// Only versions supported by this DB system
    pub db_system_id: Option<String>,
    /// Paging
    pub paging: PageOptions,
    /// Caller's request identifier
    pub opc_request_id: Option<String>,
    /// Retry policy for this call
    pub retry: RetrySetting,
}

paginated!(
    ListDbSystemsOptions,
    ListDbSystemShapesOptions,
    ListDbVersionsOptions
);

impl DbSystems {
    pub(crate) fn new(client: DatabaseClient) -> Self {
        Self { client }
    }

    /// Launch a DB system with its first DB home and database.
    pub async fn launch(
        &self,
        details: &LaunchDbSystemDetails,
        options: CreateOptions,
    ) -> Result<ApiResponse<DbSystem>> {
        let request =
            ApiRequest::new("LaunchDbSystem", Method::POST, COLLECTION).json_body(details)?;
        let request = options.apply(request)?;
        self.client.call(request, &options.retry).await
    }

    /// Get a DB system.
    pub async fn get(&self, db_system_id: &str, options: ReadOptions) -> Result<ApiResponse<DbSystem>> {
        let path = item_path(db_system_id)?;
        let request = options.apply(ApiRequest::new("GetDbSystem", Method::GET, path))?;
        self.client.call(request, &options.retry).await
    }

    /// List the DB systems of a compartment.
    pub async fn list(
        &self,
        compartment_id: &str,
        options: ListDbSystemsOptions,
    ) -> Result<ApiResponse<Vec<DbSystemSummary>>> {
        let request = ApiRequest::new("ListDbSystems", Method::GET, COLLECTION)
            .required_query("compartmentId", compartment_id)?;
        let request = options.apply(request)?;
        self.client.call(request, &options.retry).await
    }

    /// Scale, patch or retag a DB system.
    pub async fn update(
        &self,
        db_system_id: &str,
        details: &UpdateDbSystemDetails,
        options: ConditionalOptions,
    ) -> Result<ApiResponse<DbSystem>> {
        let path = item_path(db_system_id)?;
        let request = ApiRequest::new("UpdateDbSystem", Method::PUT, path).json_body(details)?;
        let request = options.apply(request)?;
        self.client.call(request, &options.retry).await
    }

    /// Terminate a DB system and its databases.
    pub async fn terminate(
        &self,
        db_system_id: &str,
        options: ConditionalOptions,
    ) -> Result<ApiResponse<()>> {
        let path = item_path(db_system_id)?;
        let request = options.apply(ApiRequest::new("TerminateDbSystem", Method::DELETE, path))?;
        self.client.call_empty(request, &options.retry).await
    }

    /// Move a DB system to another compartment.
    pub async fn change_compartment(
        &self,
        db_system_id: &str,
        details: &ChangeCompartmentDetails,
        options: ConditionalOptions,
    ) -> Result<ApiResponse<()>> {
        let path = format!("{}/actions/changeCompartment", item_path(db_system_id)?);
        let request = ApiRequest::new("ChangeDbSystemCompartment", Method::POST, path)
            .json_body(details)?;
        let request = options.apply(request)?;
        self.client.call_empty(request, &options.retry).await
    }

    /// List the shapes DB systems can be launched with.
    pub async fn list_shapes(
        &self,
        compartment_id: &str,
        options: ListDbSystemShapesOptions,
    ) -> Result<ApiResponse<Vec<DbSystemShapeSummary>>> {
        let request = ApiRequest::new("ListDbSystemShapes", Method::GET, "/dbSystemShapes")
            .required_query("compartmentId", compartment_id)?
            .query_opt("availabilityDomain", options.availability_domain.as_deref());
        let request = apply_list(request, &options.paging, options.opc_request_id.as_deref())?;
        self.client.call(request, &options.retry).await
    }

    /// List the database versions available for new DB homes.
    pub async fn list_db_versions(
        &self,
        compartment_id: &str,
        options: ListDbVersionsOptions,
    ) -> Result<ApiResponse<Vec<DbVersionSummary>>> {
        let request = ApiRequest::new("ListDbVersions", Method::GET, "/dbVersions")
            .required_query("compartmentId", compartment_id)?
            .query_opt("dbSystemShape", options.db_system_shape.as_deref())
            .query_opt("dbSystemId", options.db_system_id.as_deref());
        let request = apply_list(request, &options.paging, options.opc_request_id.as_deref())?;
        self.client.call(request, &options.retry).await
    }

    /// List the patches applicable to a DB system.
    pub async fn list_patches(
        &self,
        db_system_id: &str,
        options: ListOptions,
    ) -> Result<ApiResponse<Vec<PatchSummary>>> {
        let path = format!("{}/patches", item_path(db_system_id)?);
        let request = options.apply(ApiRequest::new("ListDbSystemPatches", Method::GET, path))?;
        self.client.call(request, &options.retry).await
    }
}

impl Resource for DbSystems {
    fn client(&self) -> &DatabaseClient {
        &self.client
    }
}

fn item_path(db_system_id: &str) -> Result<String> {
    Ok(format!("{COLLECTION}/{}", path_param("dbSystemId", db_system_id)?))
}
