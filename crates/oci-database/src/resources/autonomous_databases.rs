//! Autonomous database operations

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
        AutonomousDatabase, AutonomousDatabaseLifecycleState, AutonomousDatabaseSummary,
        ChangeCompartmentDetails, CreateAutonomousDatabaseDetails, DbWorkload,
        GenerateAutonomousDatabaseWalletDetails, RestoreAutonomousDatabaseDetails, SortBy,
        SortOrder, UpdateAutonomousDatabaseDetails,
    },
    validation::path_param,
};
use bytes::Bytes;
use http::Method;

const COLLECTION: &str = "/autonomousDatabases";

/// Autonomous databases, shared or dedicated.
#[derive(Clone)]
pub struct AutonomousDatabases {
    client: DatabaseClient,
}

/// Optional parameters of `ListAutonomousDatabases`.
#[derive(Debug, Clone, Default)]
pub struct ListAutonomousDatabasesOptions {
    /// Only databases in this container
    pub autonomous_container_database_id: Option<String>,
    /// Only databases with this workload
    pub db_workload: Option<DbWorkload>,
    /// Only databases of this version
    pub db_version: Option<String>,
    /// Only Always Free (or only paid) databases
    pub is_free_tier: Option<bool>,
    /// Only databases in this state
    pub lifecycle_state: Option<AutonomousDatabaseLifecycleState>,
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

impl ListAutonomousDatabasesOptions {
    fn apply(&self, request: ApiRequest) -> Result<ApiRequest> {
        let request = request
            .query_opt(
                "autonomousContainerDatabaseId",
                self.autonomous_container_database_id.as_deref(),
            )
            .query_enum("dbWorkload", self.db_workload)?
            .query_opt("dbVersion", self.db_version.as_deref())
            .query_opt("isFreeTier", self.is_free_tier)
            .query_enum("lifecycleState", self.lifecycle_state)?
            .query_opt("displayName", self.display_name.as_deref())
            .query_enum("sortBy", self.sort_by)?
            .query_enum("sortOrder", self.sort_order)?;
        apply_list(request, &self.paging, self.opc_request_id.as_deref())
    }
}

paginated!(ListAutonomousDatabasesOptions);

impl AutonomousDatabases {
    pub(crate) fn new(client: DatabaseClient) -> Self {
        Self { client }
    }

    /// Create an autonomous database, empty or cloned from a source.
    pub async fn create(
        &self,
        details: &CreateAutonomousDatabaseDetails,
        options: CreateOptions,
    ) -> Result<ApiResponse<AutonomousDatabase>> {
        let request =
            ApiRequest::new("CreateAutonomousDatabase", Method::POST, COLLECTION).json_body(details)?;
        let request = options.apply(request)?;
        self.client.call(request, &options.retry).await
    }

    /// Get an autonomous database.
    pub async fn get(
        &self,
        autonomous_database_id: &str,
        options: ReadOptions,
    ) -> Result<ApiResponse<AutonomousDatabase>> {
        let path = item_path(autonomous_database_id)?;
        let request = options.apply(ApiRequest::new("GetAutonomousDatabase", Method::GET, path))?;
        self.client.call(request, &options.retry).await
    }

    /// List the autonomous databases of a compartment.
    pub async fn list(
        &self,
        compartment_id: &str,
        options: ListAutonomousDatabasesOptions,
    ) -> Result<ApiResponse<Vec<AutonomousDatabaseSummary>>> {
        let request = ApiRequest::new("ListAutonomousDatabases", Method::GET, COLLECTION)
            .required_query("compartmentId", compartment_id)?;
        let request = options.apply(request)?;
        self.client.call(request, &options.retry).await
    }

    /// Scale or reconfigure an autonomous database.
    pub async fn update(
        &self,
        autonomous_database_id: &str,
        details: &UpdateAutonomousDatabaseDetails,
        options: ConditionalOptions,
    ) -> Result<ApiResponse<AutonomousDatabase>> {
        let path = item_path(autonomous_database_id)?;
        let request =
            ApiRequest::new("UpdateAutonomousDatabase", Method::PUT, path).json_body(details)?;
        let request = options.apply(request)?;
        self.client.call(request, &options.retry).await
    }

    /// Delete an autonomous database.
    pub async fn delete(
        &self,
        autonomous_database_id: &str,
        options: ConditionalOptions,
    ) -> Result<ApiResponse<()>> {
        let path = item_path(autonomous_database_id)?;
        let request =
            options.apply(ApiRequest::new("DeleteAutonomousDatabase", Method::DELETE, path))?;
        self.client.call_empty(request, &options.retry).await
    }

    /// Start a stopped autonomous database.
    pub async fn start(
        &self,
        autonomous_database_id: &str,
        options: ConditionalOptions,
    ) -> Result<ApiResponse<AutonomousDatabase>> {
        self.action("StartAutonomousDatabase", autonomous_database_id, "start", options)
            .await
    }

    /// Stop an autonomous database; OCPU billing stops with it.
    pub async fn stop(
        &self,
        autonomous_database_id: &str,
        options: ConditionalOptions,
    ) -> Result<ApiResponse<AutonomousDatabase>> {
        self.action("StopAutonomousDatabase", autonomous_database_id, "stop", options)
            .await
    }

    /// Restore an autonomous database to a point in time.
    pub async fn restore(
        &self,
        autonomous_database_id: &str,
        details: &RestoreAutonomousDatabaseDetails,
        options: ConditionalOptions,
    ) -> Result<ApiResponse<AutonomousDatabase>> {
        let path = format!("{}/actions/restore", item_path(autonomous_database_id)?);
        let request =
            ApiRequest::new("RestoreAutonomousDatabase", Method::POST, path).json_body(details)?;
        let request = options.apply(request)?;
        self.client.call(request, &options.retry).await
    }

    /// Generate the client credentials wallet, buffered in memory.
    pub async fn generate_wallet(
        &self,
        autonomous_database_id: &str,
        details: &GenerateAutonomousDatabaseWalletDetails,
        options: CreateOptions,
    ) -> Result<ApiResponse<Bytes>> {
        let request = wallet_request(autonomous_database_id, details, &options)?;
        self.client.download(request, &options.retry).await
    }

    /// Generate the client credentials wallet, streaming it into `sink`.
    ///
    /// Returns the number of bytes written.
    pub async fn generate_wallet_to<S>(
        &self,
        autonomous_database_id: &str,
        details: &GenerateAutonomousDatabaseWalletDetails,
        sink: &mut S,
        options: CreateOptions,
    ) -> Result<ApiResponse<u64>>
    where
        S: DownloadSink + ?Sized,
    {
        let request = wallet_request(autonomous_database_id, details, &options)?;
        self.client.download_to(request, &options.retry, sink).await
    }

    /// Move an autonomous database to another compartment.
    pub async fn change_compartment(
        &self,
        autonomous_database_id: &str,
        details: &ChangeCompartmentDetails,
        options: ConditionalOptions,
    ) -> Result<ApiResponse<()>> {
        let path = format!("{}/actions/changeCompartment", item_path(autonomous_database_id)?);
        let request = ApiRequest::new("ChangeAutonomousDatabaseCompartment", Method::POST, path)
            .json_body(details)?;
        let request = options.apply(request)?;
        self.client.call_empty(request, &options.retry).await
    }

    async fn action(
        &self,
        operation: &'static str,
        autonomous_database_id: &str,
        action: &str,
        options: ConditionalOptions,
    ) -> Result<ApiResponse<AutonomousDatabase>> {
        let path = format!("{}/actions/{action}", item_path(autonomous_database_id)?);
        let request = options.apply(ApiRequest::new(operation, Method::POST, path))?;
        self.client.call(request, &options.retry).await
    }
}

impl Resource for AutonomousDatabases {
    fn client(&self) -> &DatabaseClient {
        &self.client
    }
}

fn item_path(autonomous_database_id: &str) -> Result<String> {
    Ok(format!(
        "{COLLECTION}/{}",
        path_param("autonomousDatabaseId", autonomous_database_id)?
    ))
}

fn wallet_request(
    autonomous_database_id: &str,
    details: &GenerateAutonomousDatabaseWalletDetails,
    options: &CreateOptions,
) -> Result<ApiRequest> {
    let path = format!("{}/actions/generateWallet", item_path(autonomous_database_id)?);
    let request = ApiRequest::new("GenerateAutonomousDatabaseWallet", Method::POST, path)
        .accept(OCTET_STREAM)
        .json_body(details)?;
    options.apply(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::download;
    use crate::resources::testing::{MockProvider, body_json, client};
    use crate::types::WalletGenerateType;

    const DATABASE: &str = r#"{
        "id": "ocid1.autonomousdatabase.oc1..adb",
        "compartmentId": "ocid1.compartment.oc1..c",
        "lifecycleState": "STOPPING",
        "dbName": "SALES",
        "cpuCoreCount": 1,
        "dataStorageSizeInTBs": 1
    }"#;

    #[tokio::test]
    async fn test_stop_posts_action() {
        let provider = MockProvider::new();
        provider.respond(200, DATABASE);

        let response = client(&provider)
            .autonomous_databases()
            .stop("ocid1.autonomousdatabase.oc1..adb", ConditionalOptions::default())
            .await
            .unwrap();

        assert_eq!(
            response.data().lifecycle_state,
            AutonomousDatabaseLifecycleState::Stopping
        );
        let request = provider.last_request();
        assert_eq!(request.operation(), "StopAutonomousDatabase");
        assert_eq!(
            request.path(),
            "/autonomousDatabases/ocid1.autonomousdatabase.oc1..adb/actions/stop"
        );
        assert!(request.retry_token().is_some());
    }

    #[tokio::test]
    async fn test_list_query() {
        let provider = MockProvider::new();
        provider.respond(200, &format!("[{DATABASE}]"));

        let options = ListAutonomousDatabasesOptions {
            db_workload: Some(DbWorkload::Dw),
            is_free_tier: Some(true),
            paging: PageOptions {
                limit: Some(10),
                page: None,
            },
            ..Default::default()
        };
        client(&provider)
            .autonomous_databases()
            .list("ocid1.compartment.oc1..c", options)
            .await
            .unwrap();

        let request = provider.last_request();
        assert_eq!(request.query_value("dbWorkload"), Some("DW"));
        assert_eq!(request.query_value("isFreeTier"), Some("true"));
        assert_eq!(request.query_value("limit"), Some("10"));
        assert!(request.query_value("page").is_none());
    }

    #[tokio::test]
    async fn test_generate_wallet_buffered() {
        let provider = MockProvider::new();
        provider.respond(200, "PK-wallet-bytes");
        let details = GenerateAutonomousDatabaseWalletDetails {
            password: "Wallet#Pass1".into(),
            generate_type: Some(WalletGenerateType::Single),
        };

        let wallet = client(&provider)
            .autonomous_databases()
            .generate_wallet("adb", &details, CreateOptions::default())
            .await
            .unwrap();

        assert_eq!(wallet.data().as_ref(), b"PK-wallet-bytes");
        let request = provider.last_request();
        assert_eq!(request.header_value("accept"), Some("application/octet-stream"));
        assert_eq!(body_json(&request)["generateType"], "SINGLE");
    }

    #[tokio::test]
    async fn test_generate_wallet_into_callback() {
        let provider = MockProvider::new();
        provider.respond(200, "0123456789");
        let mut chunks = Vec::new();

        let written = {
            let mut sink = download::from_fn(|chunk: &[u8]| {
                chunks.push(chunk.to_vec());
                Ok(())
            });
            client(&provider)
                .autonomous_databases()
                .generate_wallet_to(
                    "adb",
                    &GenerateAutonomousDatabaseWalletDetails::new("pw"),
                    &mut sink,
                    CreateOptions::default(),
                )
                .await
                .unwrap()
        };

        assert_eq!(*written.data(), 10);
        assert_eq!(chunks.concat(), b"0123456789");
        assert!(chunks.len() >= 2);
    }

    #[tokio::test]
    async fn test_service_error_mapped() {
        let provider = MockProvider::new();
        provider.respond(
            404,
            r#"{"code": "NotAuthorizedOrNotFound", "message": "not found"}"#,
        );
        let err = client(&provider)
            .autonomous_databases()
            .get("missing", ReadOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotAuthorizedOrNotFound { .. }));
    }

    #[tokio::test]
    async fn test_blank_id() {
        let provider = MockProvider::new();
        let err = client(&provider)
            .autonomous_databases()
            .start("", ConditionalOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::MissingParameter("autonomousDatabaseId")));
        assert!(provider.requests().is_empty());
    }
}
