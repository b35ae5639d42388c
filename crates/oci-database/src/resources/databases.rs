//! Database operations

use super::Resource;
use crate::{
    client::DatabaseClient,
    error::Result,
    http::{ApiRequest, ApiResponse},
    options::{ConditionalOptions, PageOptions, ReadOptions, RetrySetting, apply_list, paginated},
    types::{
        Database, DatabaseLifecycleState, DatabaseSortBy, DatabaseSummary, RestoreDatabaseDetails,
        SortOrder, UpdateDatabaseDetails,
    },
    validation::path_param,
};
use http::Method;

const COLLECTION: &str = "/databases";

/// Databases in DB homes. Databases are created with their DB home.
#[derive(Clone)]
pub struct Databases {
    client: DatabaseClient,
}

/// Optional parameters of `ListDatabases`.
#[derive(Debug, Clone, Default)]
pub struct ListDatabasesOptions {
    /// Only databases in this DB home
    pub db_home_id: Option<String>,
    /// Only databases on this DB system or VM cluster
    pub system_id: Option<String>,
    /// Only databases in this state
    pub lifecycle_state: Option<DatabaseLifecycleState>,
    /// Exact database name
    pub db_name: Option<String>,
    /// Sort field
    pub sort_by: Option<DatabaseSortBy>,
    /// Sort direction
    pub sort_order: Option<SortOrder>,
    /// Paging
    pub paging: PageOptions,
    /// Caller's request identifier
    pub opc_request_id: Option<String>,
    /// Retry policy for this call
    pub retry: RetrySetting,
}

impl ListDatabasesOptions {
    fn apply(&self, request: ApiRequest) -> Result<ApiRequest> {
        let request = request
            .query_opt("dbHomeId", self.db_home_id.as_deref())
            .query_opt("systemId", self.system_id.as_deref())
            .query_enum("lifecycleState", self.lifecycle_state)?
            .query_opt("dbName", self.db_name.as_deref())
            .query_enum("sortBy", self.sort_by)?
            .query_enum("sortOrder", self.sort_order)?;
        apply_list(request, &self.paging, self.opc_request_id.as_deref())
    }
}

paginated!(ListDatabasesOptions);

impl Databases {
    pub(crate) fn new(client: DatabaseClient) -> Self {
        Self { client }
    }

    /// Get a database.
    pub async fn get(&self, database_id: &str, options: ReadOptions) -> Result<ApiResponse<Database>> {
        let path = item_path(database_id)?;
        let request = options.apply(ApiRequest::new("GetDatabase", Method::GET, path))?;
        self.client.call(request, &options.retry).await
    }

    /// List the databases of a compartment.
    pub async fn list(
        &self,
        compartment_id: &str,
        options: ListDatabasesOptions,
    ) -> Result<ApiResponse<Vec<DatabaseSummary>>> {
        let request = ApiRequest::new("ListDatabases", Method::GET, COLLECTION)
            .required_query("compartmentId", compartment_id)?;
        let request = options.apply(request)?;
        self.client.call(request, &options.retry).await
    }

    /// Update backup settings and tags.
    pub async fn update(
        &self,
        database_id: &str,
        details: &UpdateDatabaseDetails,
        options: ConditionalOptions,
    ) -> Result<ApiResponse<Database>> {
        let path = item_path(database_id)?;
        let request = ApiRequest::new("UpdateDatabase", Method::PUT, path).json_body(details)?;
        let request = options.apply(request)?;
        self.client.call(request, &options.retry).await
    }

    /// Restore a database from its automatic backups.
    pub async fn restore(
        &self,
        database_id: &str,
        details: &RestoreDatabaseDetails,
        options: ConditionalOptions,
    ) -> Result<ApiResponse<Database>> {
        let path = format!("{}/actions/restore", item_path(database_id)?);
        let request = ApiRequest::new("RestoreDatabase", Method::POST, path).json_body(details)?;
        let request = options.apply(request)?;
        self.client.call(request, &options.retry).await
    }
}

impl Resource for Databases {
    fn client(&self) -> &DatabaseClient {
        &self.client
    }
}

fn item_path(database_id: &str) -> Result<String> {
    Ok(format!("{COLLECTION}/{}", path_param("databaseId", database_id)?))
}
