//! DB node operations

use super::Resource;
use crate::{
    client::DatabaseClient,
    error::Result,
    http::{ApiRequest, ApiResponse},
    options::{ConditionalOptions, PageOptions, ReadOptions, RetrySetting, apply_list, paginated},
    types::{DbNode, DbNodeActionType, DbNodeLifecycleState, DbNodeSortBy, DbNodeSummary, SortOrder},
    validation::path_param,
};
use http::Method;

const COLLECTION: &str = "/dbNodes";

/// Compute nodes of DB systems and VM clusters.
#[derive(Clone)]
pub struct DbNodes {
    client: DatabaseClient,
}

/// Optional parameters of `ListDbNodes`.
#[derive(Debug, Clone, Default)]
pub struct ListDbNodesOptions {
    /// Only nodes of this DB system
    pub db_system_id: Option<String>,
    /// Only nodes of this VM cluster
    pub vm_cluster_id: Option<String>,
    /// Only nodes in this state
    pub lifecycle_state: Option<DbNodeLifecycleState>,
    /// Sort field
    pub sort_by: Option<DbNodeSortBy>,
    /// Sort direction
    pub sort_order: Option<SortOrder>,
    /// Paging
    pub paging: PageOptions,
    /// Caller's request identifier
    pub opc_request_id: Option<String>,
    /// Retry policy for this call
    pub retry: RetrySetting,
}

impl ListDbNodesOptions {
    fn apply(&self, request: ApiRequest) -> Result<ApiRequest> {
        let request = request
            .query_opt("dbSystemId", self.db_system_id.as_deref())
            .query_opt("vmClusterId", self.vm_cluster_id.as_deref())
            .query_enum("lifecycleState", self.lifecycle_state)?
            .query_enum("sortBy", self.sort_by)?
            .query_enum("sortOrder", self.sort_order)?;
        apply_list(request, &self.paging, self.opc_request_id.as_deref())
    }
}

paginated!(ListDbNodesOptions);

impl DbNodes {
    pub(crate) fn new(client: DatabaseClient) -> Self {
        Self { client }
    }

    /// Get a DB node.
    pub async fn get(&self, db_node_id: &str, options: ReadOptions) -> Result<ApiResponse<DbNode>> {
        let path = item_path(db_node_id)?;
        let request = options.apply(ApiRequest::new("GetDbNode", Method::GET, path))?;
        self.client.call(request, &options.retry).await
    }

    /// List the DB nodes of a compartment.
    pub async fn list(
        &self,
        compartment_id: &str,
        options: ListDbNodesOptions,
    ) -> Result<ApiResponse<Vec<DbNodeSummary>>> {
        let request = ApiRequest::new("ListDbNodes", Method::GET, COLLECTION)
            .required_query("compartmentId", compartment_id)?;
        let request = options.apply(request)?;
        self.client.call(request, &options.retry).await
    }

    /// Power-cycle a DB node.
    pub async fn action(
        &self,
        db_node_id: &str,
        action: DbNodeActionType,
        options: ConditionalOptions,
    ) -> Result<ApiResponse<DbNode>> {
        let path = item_path(db_node_id)?;
        let request = ApiRequest::new("DbNodeAction", Method::POST, path)
            .query_enum("action", Some(action))?;
        let request = options.apply(request)?;
        self.client.call(request, &options.retry).await
    }
}

impl Resource for DbNodes {
    fn client(&self) -> &DatabaseClient {
        &self.client
    }
}

fn item_path(db_node_id: &str) -> Result<String> {
    Ok(format!("{COLLECTION}/{}", path_param("dbNodeId", db_node_id)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::testing::{MockProvider, client};

    const NODE: &str = r#"{
        "id": "ocid1.dbnode.oc1..n",
        "dbSystemId": "ocid1.dbsystem.oc1..s",
        "vnicId": "ocid1.vnic.oc1..v",
        "lifecycleState": "STOPPING",
        "timeCreated": "2024-01-02T03:04:05Z",
        "softwareStorageSizeInGB": 200
    }"#;

    #[tokio::test]
    async fn test_action_as_query() {
        let provider = MockProvider::new();
        provider.respond(200, NODE);

        let node = client(&provider)
            .db_nodes()
            .action("ocid1.dbnode.oc1..n", DbNodeActionType::SoftReset, ConditionalOptions::default())
            .await
            .unwrap()
            .into_data();

        assert_eq!(node.software_storage_size_in_gb, Some(200));
        let request = provider.last_request();
        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.path(), "/dbNodes/ocid1.dbnode.oc1..n");
        assert_eq!(request.query_value("action"), Some("SOFTRESET"));
        assert!(request.body().is_none());
        assert!(request.retry_token().is_some());
    }

    #[tokio::test]
    async fn test_list_filters() {
        let provider = MockProvider::new();
        provider.respond(200, &format!("[{NODE}]"));

        let nodes = client(&provider)
            .db_nodes()
            .list(
                "ocid1.compartment.oc1..c",
                ListDbNodesOptions {
                    db_system_id: Some("ocid1.dbsystem.oc1..s".into()),
                    lifecycle_state: Some(DbNodeLifecycleState::Available),
                    sort_by: Some(DbNodeSortBy::TimeCreated),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(nodes.data()[0].lifecycle_state, DbNodeLifecycleState::Stopping);
        let request = provider.last_request();
        assert_eq!(request.query_value("dbSystemId"), Some("ocid1.dbsystem.oc1..s"));
        assert_eq!(request.query_value("lifecycleState"), Some("AVAILABLE"));
        assert_eq!(request.query_value("sortBy"), Some("TIMECREATED"));
    }
}
