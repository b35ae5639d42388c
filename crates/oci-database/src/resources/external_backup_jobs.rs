//! External backup job operations
//!
//! Jobs back up an on-premises database into a cloud backup. Create the job,
//! run RMAN against the returned Swift location, then complete the job.

use super::Resource;
use crate::{
    client::DatabaseClient,
    error::Result,
    http::{ApiRequest, ApiResponse},
    options::{ConditionalOptions, CreateOptions, ReadOptions},
    types::{CompleteExternalBackupJobDetails, CreateExternalBackupJobDetails, ExternalBackupJob},
    validation::path_param,
};
use http::Method;

const COLLECTION: &str = "/externalBackupJobs";

/// Backups of on-premises databases.
#[derive(Clone)]
pub struct ExternalBackupJobs {
    client: DatabaseClient,
}

impl ExternalBackupJobs {
    pub(crate) fn new(client: DatabaseClient) -> Self {
        Self { client }
    }

    /// Start a backup job.
    ///
    /// The response carries the Swift password; it is not returned again.
    pub async fn create(
        &self,
        details: &CreateExternalBackupJobDetails,
        options: CreateOptions,
    ) -> Result<ApiResponse<ExternalBackupJob>> {
        let request = ApiRequest::new("CreateExternalBackupJob", Method::POST, COLLECTION)
            .json_body(details)?;
        let request = options.apply(request)?;
        self.client.call(request, &options.retry).await
    }

    /// Get a backup job.
    pub async fn get(
        &self,
        backup_id: &str,
        options: ReadOptions,
    ) -> Result<ApiResponse<ExternalBackupJob>> {
        let path = item_path(backup_id)?;
        let request = options.apply(ApiRequest::new("GetExternalBackupJob", Method::GET, path))?;
        self.client.call(request, &options.retry).await
    }

    /// Mark the RMAN upload finished.
    pub async fn complete(
        &self,
        backup_id: &str,
        details: &CompleteExternalBackupJobDetails,
        options: ConditionalOptions,
    ) -> Result<ApiResponse<ExternalBackupJob>> {
        let path = format!("{}/actions/complete", item_path(backup_id)?);
        let request =
            ApiRequest::new("CompleteExternalBackupJob", Method::POST, path).json_body(details)?;
        let request = options.apply(request)?;
        self.client.call(request, &options.retry).await
    }
}

impl Resource for ExternalBackupJobs {
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
    use crate::resources::testing::{MockProvider, body_json, client};
    use crate::types::{DatabaseEdition, ExternalDatabaseMode};

    const JOB: &str = r#"{
        "backupId": "ocid1.backup.oc1..b",
        "provisioning": true,
        "swiftPath": "https://swift.example.com/v1/ns/bucket",
        "bucketName": "bucket",
        "tag": "external-1",
        "userName": "backup-user",
        "swiftPassword": "Sw1ft#secret"
    }"#;

    #[tokio::test]
    async fn test_create_returns_swift_credentials() {
        let provider = MockProvider::new();
        provider.respond(200, JOB);
        let details = CreateExternalBackupJobDetails::builder()
            .availability_domain("Uocm:PHX-AD-1")
            .compartment_id("ocid1.compartment.oc1..c")
            .display_name("on-prem")
            .db_version("19.0.0.0")
            .db_name("ORCL")
            .external_database_identifier(1_234_567_890u64)
            .character_set("AL32UTF8")
            .ncharacter_set("AL16UTF16")
            .database_mode(ExternalDatabaseMode::Si)
            .database_edition(DatabaseEdition::EnterpriseEdition)
            .build()
            .unwrap();

        let job = client(&provider)
            .external_backup_jobs()
            .create(&details, CreateOptions::default())
            .await
            .unwrap()
            .into_data();

        assert!(job.provisioning);
        assert_eq!(job.swift_password.as_ref().map(|p| p.expose()), Some("Sw1ft#secret"));
        assert!(!format!("{job:?}").contains("Sw1ft#secret"));
        let body = body_json(&provider.last_request());
        assert_eq!(body["databaseMode"], "SI");
        assert_eq!(body["externalDatabaseIdentifier"], 1_234_567_890u64);
    }

    #[tokio::test]
    async fn test_complete_action() {
        let provider = MockProvider::new();
        provider.respond(200, JOB);
        let details = CompleteExternalBackupJobDetails {
            data_size: Some(1024),
            ..Default::default()
        };

        client(&provider)
            .external_backup_jobs()
            .complete("ocid1.backup.oc1..b", &details, ConditionalOptions::default())
            .await
            .unwrap();

        let request = provider.last_request();
        assert_eq!(request.path(), "/externalBackupJobs/ocid1.backup.oc1..b/actions/complete");
        assert_eq!(body_json(&request), serde_json::json!({"dataSize": 1024}));
    }
}
