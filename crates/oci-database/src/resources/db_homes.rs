//! DB home operations, including patches

use super::Resource;
use crate::{
    client::DatabaseClient,
    error::Result,
    http::{ApiRequest, ApiResponse, IF_MATCH, OPC_REQUEST_ID, OPC_RETRY_TOKEN},
    options::{
        ConditionalOptions, CreateOptions, ListOptions, PageOptions, ReadOptions, RetrySetting,
        apply_list, paginated,
    },
    types::{
        CreateDbHomeBase, DbHome, DbHomeLifecycleState, DbHomeSummary, Patch,
        PatchHistoryEntrySummary, PatchSummary, SortBy, SortOrder, UpdateDbHomeDetails,
    },
    validation::path_param,
};
use http::Method;

const COLLECTION: &str = "/dbHomes";

/// Oracle homes on DB systems and VM clusters.
#[derive(Clone)]
pub struct DbHomes {
    client: DatabaseClient,
}

/// Optional parameters of `ListDbHomes`.
#[derive(Debug, Clone, Default)]
pub struct ListDbHomesOptions {
    /// Only homes on this DB system
    pub db_system_id: Option<String>,
    /// Only homes on this VM cluster
    pub vm_cluster_id: Option<String>,
    /// Only homes in this state
    pub lifecycle_state: Option<DbHomeLifecycleState>,
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

impl ListDbHomesOptions {
    fn apply(&self, request: ApiRequest) -> Result<ApiRequest> {
        let request = request
            .query_opt("dbSystemId", self.db_system_id.as_deref())
            .query_opt("vmClusterId", self.vm_cluster_id.as_deref())
            .query_enum("lifecycleState", self.lifecycle_state)?
            .query_opt("displayName", self.display_name.as_deref())
            .query_enum("sortBy", self.sort_by)?
            .query_enum("sortOrder", self.sort_order)?;
        apply_list(request, &self.paging, self.opc_request_id.as_deref())
    }
}

paginated!(ListDbHomesOptions);

/// Options of `DeleteDbHome`.
#[derive(Debug, Clone, Default)]
pub struct DeleteDbHomeOptions {
    /// Back up the databases before deleting the home
    pub perform_final_backup: Option<bool>,
    /// Delete only if the ETag still matches
    pub if_match: Option<String>,
    /// Caller's request identifier
    pub opc_request_id: Option<String>,
    /// Idempotency token; generated when absent
    pub opc_retry_token: Option<String>,
    /// Retry policy for this call
    pub retry: RetrySetting,
}

impl DeleteDbHomeOptions {
    fn apply(&self, request: ApiRequest) -> Result<ApiRequest> {
        request
            .query_opt("performFinalBackup", self.perform_final_backup)
            .header_opt(IF_MATCH, self.if_match.as_deref())?
            .header_opt(OPC_REQUEST_ID, self.opc_request_id.as_deref())?
            .header_opt(OPC_RETRY_TOKEN, self.opc_retry_token.as_deref())
    }
}

impl DbHomes {
    pub(crate) fn new(client: DatabaseClient) -> Self {
        Self { client }
    }

    /// Create a DB home and its first database.
    pub async fn create(
        &self,
        details: &CreateDbHomeBase,
        options: CreateOptions,
    ) -> Result<ApiResponse<DbHome>> {
        let request =
            ApiRequest::new("CreateDbHome", Method::POST, COLLECTION).json_body(details)?;
        let request = options.apply(request)?;
        self.client.call(request, &options.retry).await
    }

    /// Get a DB home.
    pub async fn get(&self, db_home_id: &str, options: ReadOptions) -> Result<ApiResponse<DbHome>> {
        let path = item_path(db_home_id)?;
        let request = options.apply(ApiRequest::new("GetDbHome", Method::GET, path))?;
        self.client.call(request, &options.retry).await
    }

    /// List the DB homes of a compartment.
    pub async fn list(
        &self,
        compartment_id: &str,
        options: ListDbHomesOptions,
    ) -> Result<ApiResponse<Vec<DbHomeSummary>>> {
        let request = ApiRequest::new("ListDbHomes", Method::GET, COLLECTION)
            .required_query("compartmentId", compartment_id)?;
        let request = options.apply(request)?;
        self.client.call(request, &options.retry).await
    }

    /// Patch a DB home or update its tags.
    pub async fn update(
        &self,
        db_home_id: &str,
        details: &UpdateDbHomeDetails,
        options: ConditionalOptions,
    ) -> Result<ApiResponse<DbHome>> {
        let path = item_path(db_home_id)?;
        let request = ApiRequest::new("UpdateDbHome", Method::PUT, path).json_body(details)?;
        let request = options.apply(request)?;
        self.client.call(request, &options.retry).await
    }

    /// Delete a DB home with its databases.
    pub async fn delete(
        &self,
        db_home_id: &str,
        options: DeleteDbHomeOptions,
    ) -> Result<ApiResponse<()>> {
        let path = item_path(db_home_id)?;
        let request = options.apply(ApiRequest::new("DeleteDbHome", Method::DELETE, path))?;
        self.client.call_empty(request, &options.retry).await
    }

    /// List the patches applicable to a DB home.
    pub async fn list_patches(
        &self,
        db_home_id: &str,
        options: ListOptions,
    ) -> Result<ApiResponse<Vec<PatchSummary>>> {
        let path = format!("{}/patches", item_path(db_home_id)?);
        let request = options.apply(ApiRequest::new("ListDbHomePatches", Method::GET, path))?;
        self.client.call(request, &options.retry).await
    }

    /// Get a patch applicable to a DB home.
    pub async fn get_patch(
        &self,
        db_home_id: &str,
        patch_id: &str,
        options: ReadOptions,
    ) -> Result<ApiResponse<Patch>> {
        let path = format!(
            "{}/patches/{}",
            item_path(db_home_id)?,
            path_param("patchId", patch_id)?
        );
        let request = options.apply(ApiRequest::new("GetDbHomePatch", Method::GET, path))?;
        self.client.call(request, &options.retry).await
    }

    /// List the patch actions performed on a DB home.
    pub async fn list_patch_history_entries(
        &self,
        db_home_id: &str,
        options: ListOptions,
    ) -> Result<ApiResponse<Vec<PatchHistoryEntrySummary>>> {
        let path = format!("{}/patchHistoryEntries", item_path(db_home_id)?);
        let request = options.apply(ApiRequest::new(
            "ListDbHomePatchHistoryEntries",
            Method::GET,
            path,
        ))?;
        self.client.call(request, &options.retry).await
    }
}

impl Resource for DbHomes {
    fn client(&self) -> &DatabaseClient {
        &self.client
    }
}

fn item_path(db_home_id: &str) -> Result<String> {
    Ok(format!("{COLLECTION}/{}", path_param("dbHomeId", db_home_id)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::resources::testing::{MockProvider, body_json, client};
    use crate::types::{CreateDatabaseDetails, DbHomeSource, PatchAction, PatchDetails};

    const HOME: &str = r#"{
        "id": "ocid1.dbhome.oc1..h",
        "compartmentId": "ocid1.compartment.oc1..c",
        "displayName": "home-19c",
        "lifecycleState": "PROVISIONING",
        "dbVersion": "19.0.0.0",
        "vmClusterId": "ocid1.vmcluster.oc1..v"
    }"#;

    #[tokio::test]
    async fn test_create_on_vm_cluster() {
        let provider = MockProvider::new();
        provider.respond(200, HOME);
        let mut details = CreateDbHomeBase::new(DbHomeSource::VmClusterNew {
            vm_cluster_id: "ocid1.vmcluster.oc1..v".into(),
            db_version: "19.0.0.0".into(),
            database: CreateDatabaseDetails::new("ORCL", "Welcome#123"),
        });
        details.display_name = Some("home-19c".into());

        let home = client(&provider)
            .db_homes()
            .create(&details, CreateOptions::default())
            .await
            .unwrap()
            .into_data();

        assert_eq!(home.lifecycle_state, DbHomeLifecycleState::Provisioning);
        let body = body_json(&provider.last_request());
        assert_eq!(body["source"], "VM_CLUSTER_NEW");
        assert_eq!(body["vmClusterId"], "ocid1.vmcluster.oc1..v");
        assert_eq!(body["database"]["dbName"], "ORCL");
        assert_eq!(body["displayName"], "home-19c");
    }

    #[tokio::test]
    async fn test_update_applies_patch() {
        let provider = MockProvider::new();
        provider.respond(200, HOME);
        let details = UpdateDbHomeDetails {
            db_version: Some(PatchDetails {
                patch_id: Some("ocid1.dbpatch.oc1..p".into()),
                action: Some(PatchAction::Apply),
            }),
            ..Default::default()
        };

        client(&provider)
            .db_homes()
            .update("ocid1.dbhome.oc1..h", &details, ConditionalOptions::default())
            .await
            .unwrap();

        let body = body_json(&provider.last_request());
        assert_eq!(body["dbVersion"]["patchId"], "ocid1.dbpatch.oc1..p");
        assert_eq!(body["dbVersion"]["action"], "APPLY");
    }

    #[tokio::test]
    async fn test_delete_with_final_backup() {
        let provider = MockProvider::new();
        let options = DeleteDbHomeOptions {
            perform_final_backup: Some(true),
            if_match: Some("etag-2".into()),
            ..Default::default()
        };

        client(&provider)
            .db_homes()
            .delete("ocid1.dbhome.oc1..h", options)
            .await
            .unwrap();

        let request = provider.last_request();
        assert_eq!(request.method(), Method::DELETE);
        assert_eq!(request.query_value("performFinalBackup"), Some("true"));
        assert_eq!(request.header_value("if-match"), Some("etag-2"));
        assert!(request.retry_token().is_some());
    }

    #[tokio::test]
    async fn test_patch_paths() {
        let provider = MockProvider::new();
        provider.respond(200, "[]");
        provider.respond(
            200,
            r#"{"id": "p", "description": "July RU", "timeReleased": "2024-07-16T00:00:00Z", "version": "19.24.0.0", "availableActions": ["APPLY", "PRECHECK"]}"#,
        );
        provider.respond(200, "[]");
        let handle = client(&provider).db_homes();

        handle.list_patches("h", ListOptions::default()).await.unwrap();
        let patch = handle
            .get_patch("h", "p", ReadOptions::default())
            .await
            .unwrap()
            .into_data();
        handle
            .list_patch_history_entries("h", ListOptions::default())
            .await
            .unwrap();

        assert_eq!(patch.available_actions, vec![PatchAction::Apply, PatchAction::Precheck]);
        let paths: Vec<String> = provider
            .requests()
            .iter()
            .map(|r| r.path().to_string())
            .collect();
        assert_eq!(
            paths,
            vec!["/dbHomes/h/patches", "/dbHomes/h/patches/p", "/dbHomes/h/patchHistoryEntries"]
        );
    }

    #[tokio::test]
    async fn test_blank_patch_id() {
        let provider = MockProvider::new();
        let err = client(&provider)
            .db_homes()
            .get_patch("h", "", ReadOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::MissingParameter("patchId")));
    }
}
