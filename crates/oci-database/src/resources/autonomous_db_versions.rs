//! Autonomous database versions

use super::Resource;
use crate::{
    client::DatabaseClient,
    error::Result,
    http::{ApiRequest, ApiResponse},
    options::{PageOptions, RetrySetting, apply_list, paginated},
    types::{AutonomousDbVersionSummary, DbWorkload, SortOrder},
};
use http::Method;

/// Database versions offered to autonomous databases.
#[derive(Clone)]
pub struct AutonomousDbVersions {
    client: DatabaseClient,
}

/// Optional parameters of `ListAutonomousDbVersions`.
#[derive(Debug, Clone, Default)]
pub struct ListAutonomousDbVersionsOptions {
    /// Only versions for this workload
    pub db_workload: Option<DbWorkload>,
    /// Sort direction
    pub sort_order: Option<SortOrder>,
    /// Paging
    pub paging: PageOptions,
    /// Caller's request identifier
    pub opc_request_id: Option<String>,
    /// Retry policy for this call
    pub retry: RetrySetting,
}

paginated!(ListAutonomousDbVersionsOptions);

impl AutonomousDbVersions {
    pub(crate) fn new(client: DatabaseClient) -> Self {
        Self { client }
    }

    /// List the versions available in a compartment.
    pub async fn list(
        &self,
        compartment_id: &str,
        options: ListAutonomousDbVersionsOptions,
    ) -> Result<ApiResponse<Vec<AutonomousDbVersionSummary>>> {
        let request = ApiRequest::new("ListAutonomousDbVersions", Method::GET, "/autonomousDbVersions")
            .required_query("compartmentId", compartment_id)?
            .query_enum("dbWorkload", options.db_workload)?
            .query_enum("sortOrder", options.sort_order)?;
        let request = apply_list(request, &options.paging, options.opc_request_id.as_deref())?;
        self.client.call(request, &options.retry).await
    }
}

impl Resource for AutonomousDbVersions {
    fn client(&self) -> &DatabaseClient {
        &self.client
    }
}
