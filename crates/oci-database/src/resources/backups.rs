//! Database backup operations

use super::Resource;
use crate::{
    client::DatabaseClient,
    error::Result,
    http::{ApiRequest, ApiResponse},
    options::{
        ConditionalOptions, CreateOptions, PageOptions, ReadOptions, RetrySetting, apply_list,
        paginated,
    },
    types::{Backup, BackupSummary, CreateBackupDetails},
    validation::path_param,
};
use http::Method;

const COLLECTION: &str = "/backups";

/// Backups of databases on bare metal and virtual machine DB systems.
#[derive(Clone)]
pub struct Backups {
    client: DatabaseClient,
}

/// Parameters of `ListBackups`.
///
/// Filter by database or by compartment.
#[derive(Debug, Clone, Default)]
pub struct ListBackupsOptions {
    /// Backups of this database
    pub database_id: Option<String>,
    /// Backups in this compartment
    pub compartment_id: Option<String>,
    /// Paging
    pub paging: PageOptions,
    /// Caller's request identifier
    pub opc_request_id: Option<String>,
    /// Retry policy for this call
    pub retry: RetrySetting,
}

paginated!(ListBackupsOptions);

impl Backups {
    pub(crate) fn new(client: DatabaseClient) -> Self {
        Self { client }
    }

    /// Take a full backup of a database.
    pub async fn create(
        &self,
        details: &CreateBackupDetails,
        options: CreateOptions,
    ) -> Result<ApiResponse<Backup>> {
        let request =
            ApiRequest::new("CreateBackup", Method::POST, COLLECTION).json_body(details)?;
        let request = options.apply(request)?;
        self.client.call(request, &options.retry).await
    }

    /// Get a backup.
    pub async fn get(&self, backup_id: &str, options: ReadOptions) -> Result<ApiResponse<Backup>> {
        let path = item_path(backup_id)?;
        let request = options.apply(ApiRequest::new("GetBackup", Method::GET, path))?;
        self.client.call(request, &options.retry).await
    }

    /// List backups.
    pub async fn list(&self, options: ListBackupsOptions) -> Result<ApiResponse<Vec<BackupSummary>>> {
        let request = ApiRequest::new("ListBackups", Method::GET, COLLECTION)
            .query_opt("databaseId", options.database_id.as_deref())
            .query_opt("compartmentId", options.compartment_id.as_deref());
        let request = apply_list(request, &options.paging, options.opc_request_id.as_deref())?;
        self.client.call(request, &options.retry).await
    }

    /// Delete a backup.
    pub async fn delete(
        &self,
        backup_id: &str,
        options: ConditionalOptions,
    ) -> Result<ApiResponse<()>> {
        let path = item_path(backup_id)?;
        let request = options.apply(ApiRequest::new("DeleteBackup", Method::DELETE, path))?;
        self.client.call_empty(request, &options.retry).await
    }
}

impl Resource for Backups {
    fn client(&self) -> &DatabaseClient {
        &self.client
    }
}

fn item_path(backup_id: &str) -> Result<String> {
    Ok(format!("{COLLECTION}/{}", path_param("backupId", backup_id)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::resources::testing::{MockProvider, body_json, client};
    use crate::types::BackupLifecycleState;

    #[tokio::test]
    async fn test_create_backup() {
        let provider = MockProvider::new();
        provider.respond(
            200,
            r#"{"id": "ocid1.backup.oc1..b", "databaseId": "ocid1.database.oc1..d", "lifecycleState": "CREATING"}"#,
        );

        let backup = client(&provider)
            .backups()
            .create(
                &CreateBackupDetails::new("ocid1.database.oc1..d", "nightly"),
                CreateOptions::default(),
            )
            .await
            .unwrap()
            .into_data();

        assert_eq!(backup.lifecycle_state, Some(BackupLifecycleState::Creating));
        let body = body_json(&provider.last_request());
        assert_eq!(body["databaseId"], "ocid1.database.oc1..d");
        assert_eq!(body["displayName"], "nightly");
    }

    #[tokio::test]
    async fn test_list_and_delete() {
        let provider = MockProvider::new();
        provider.respond(200, "[]");
        let handle = client(&provider).backups();

        let backups = handle
            .list(ListBackupsOptions {
                database_id: Some("ocid1.database.oc1..d".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(backups.data().is_empty());

        handle
            .delete("ocid1.backup.oc1..b", ConditionalOptions::if_match("e"))
            .await
            .unwrap();

        let requests = provider.requests();
        assert_eq!(requests[0].query_value("databaseId"), Some("ocid1.database.oc1..d"));
        assert_eq!(requests[1].method(), Method::DELETE);
        assert_eq!(requests[1].path(), "/backups/ocid1.backup.oc1..b");
        assert_eq!(requests[1].header_value("if-match"), Some("e"));
    }

    #[tokio::test]
    async fn test_path_segment_escaped() {
        let provider = MockProvider::new();
        provider.respond(200, r#"{"id": "a/b"}"#);
        client(&provider)
            .backups()
            .get("a/b", ReadOptions::default())
            .await
            .unwrap();
        assert_eq!(provider.last_request().path(), "/backups/a%2Fb");
    }

    #[tokio::test]
    async fn test_blank_backup_id() {
        let provider = MockProvider::new();
        let err = client(&provider)
            .backups()
            .delete("", ConditionalOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::MissingParameter("backupId")));
    }
}
