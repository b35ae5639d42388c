//! Autonomous database backup operations

use super::Resource;
use crate::{
    client::DatabaseClient,
    error::Result,
    http::{ApiRequest, ApiResponse},
    options::{CreateOptions, PageOptions, ReadOptions, RetrySetting, apply_list, paginated},
    types::{
        AutonomousDatabaseBackup, AutonomousDatabaseBackupLifecycleState,
        AutonomousDatabaseBackupSummary, CreateAutonomousDatabaseBackupDetails, SortBy, SortOrder,
    },
    validation::path_param,
};
use http::Method;

const COLLECTION: &str = "/autonomousDatabaseBackups";

/// Manual and automatic backups of autonomous databases.
#[derive(Clone)]
pub struct AutonomousDatabaseBackups {
    client: DatabaseClient,
}

/// Parameters of `ListAutonomousDatabaseBackups`.
///
/// Either `autonomous_database_id` or `compartment_id` is expected; the
/// service rejects a request carrying neither.
#[derive(Debug, Clone, Default)]
pub struct ListAutonomousDatabaseBackupsOptions {
    /// Backups of this database
    pub autonomous_database_id: Option<String>,
    /// Backups in this compartment
    pub compartment_id: Option<String>,
    /// Only backups in this state
    pub lifecycle_state: Option<AutonomousDatabaseBackupLifecycleState>,
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

impl ListAutonomousDatabaseBackupsOptions {
    fn apply(&self, request: ApiRequest) -> Result<ApiRequest> {
        let request = request
            .query_opt("autonomousDatabaseId", self.autonomous_database_id.as_deref())
            .query_opt("compartmentId", self.compartment_id.as_deref())
            .query_enum("lifecycleState", self.lifecycle_state)?
            .query_opt("displayName", self.display_name.as_deref())
            .query_enum("sortBy", self.sort_by)?
            .query_enum("sortOrder", self.sort_order)?;
        apply_list(request, &self.paging, self.opc_request_id.as_deref())
    }
}

paginated!(ListAutonomousDatabaseBackupsOptions);

impl AutonomousDatabaseBackups {
    pub(crate) fn new(client: DatabaseClient) -> Self {
        Self { client }
    }

    /// Take a manual backup.
    pub async fn create(
        &self,
        details: &CreateAutonomousDatabaseBackupDetails,
        options: CreateOptions,
    ) -> Result<ApiResponse<AutonomousDatabaseBackup>> {
        let request = ApiRequest::new("CreateAutonomousDatabaseBackup", Method::POST, COLLECTION)
            .json_body(details)?;
        let request = options.apply(request)?;
        self.client.call(request, &options.retry).await
    }

    /// Get a backup.
    pub async fn get(
        &self,
        autonomous_database_backup_id: &str,
        options: ReadOptions,
    ) -> Result<ApiResponse<AutonomousDatabaseBackup>> {
        let path = format!(
            "{COLLECTION}/{}",
            path_param("autonomousDatabaseBackupId", autonomous_database_backup_id)?
        );
        let request =
            options.apply(ApiRequest::new("GetAutonomousDatabaseBackup", Method::GET, path))?;
        self.client.call(request, &options.retry).await
    }

    /// List backups by database or by compartment.
    pub async fn list(
        &self,
        options: ListAutonomousDatabaseBackupsOptions,
    ) -> Result<ApiResponse<Vec<AutonomousDatabaseBackupSummary>>> {
        let request = options.apply(ApiRequest::new(
            "ListAutonomousDatabaseBackups",
            Method::GET,
            COLLECTION,
        ))?;
        self.client.call(request, &options.retry).await
    }
}

impl Resource for AutonomousDatabaseBackups {
    fn client(&self) -> &DatabaseClient {
        &self.client
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::testing::{MockProvider, body_json, client};
    use crate::types::AutonomousDatabaseBackupType;

    const BACKUP: &str = r#"{
        "id": "ocid1.autonomousdatabasebackup.oc1..b",
        "compartmentId": "ocid1.compartment.oc1..c",
        "autonomousDatabaseId": "ocid1.autonomousdatabase.oc1..adb",
        "displayName": "before-upgrade",
        "type": "FULL",
        "isAutomatic": false,
        "databaseSizeInTBs": 0.5,
        "lifecycleState": "CREATING"
    }"#;

    #[tokio::test]
    async fn test_create_manual_backup() {
        let provider = MockProvider::new();
        provider.respond(200, BACKUP);
        let details = CreateAutonomousDatabaseBackupDetails {
            autonomous_database_id: "ocid1.autonomousdatabase.oc1..adb".into(),
            display_name: Some("before-upgrade".into()),
        };

        let backup = client(&provider)
            .autonomous_database_backups()
            .create(&details, CreateOptions::default())
            .await
            .unwrap()
            .into_data();

        assert_eq!(backup.backup_type, AutonomousDatabaseBackupType::Full);
        assert_eq!(backup.database_size_in_tbs, Some(0.5));
        let request = provider.last_request();
        assert_eq!(
            body_json(&request)["autonomousDatabaseId"],
            "ocid1.autonomousdatabase.oc1..adb"
        );
    }

    #[tokio::test]
    async fn test_list_without_required_parameter() {
        let provider = MockProvider::new();
        provider.respond(200, &format!("[{BACKUP}]"));

        let options = ListAutonomousDatabaseBackupsOptions {
            autonomous_database_id: Some("ocid1.autonomousdatabase.oc1..adb".into()),
            ..Default::default()
        };
        let backups = client(&provider)
            .autonomous_database_backups()
            .list(options)
            .await
            .unwrap();

        assert_eq!(backups.data().len(), 1);
        let request = provider.last_request();
        assert_eq!(request.path(), "/autonomousDatabaseBackups");
        assert!(request.query_value("compartmentId").is_none());
        assert_eq!(
            request.query_value("autonomousDatabaseId"),
            Some("ocid1.autonomousdatabase.oc1..adb")
        );
    }

    #[tokio::test]
    async fn test_get_path() {
        let provider = MockProvider::new();
        provider.respond(200, BACKUP);
        client(&provider)
            .autonomous_database_backups()
            .get("ocid1.autonomousdatabasebackup.oc1..b", ReadOptions::default())
            .await
            .unwrap();
        assert_eq!(
            provider.last_request().path(),
            "/autonomousDatabaseBackups/ocid1.autonomousdatabasebackup.oc1..b"
        );
    }
}
