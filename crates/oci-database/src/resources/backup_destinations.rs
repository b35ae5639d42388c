//! Backup destination operations

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
        BackupDestination, BackupDestinationSummary, BackupDestinationType,
        CreateBackupDestinationDetails, UpdateBackupDestinationDetails,
    },
    validation::path_param,
};
use http::Method;

const COLLECTION: &str = "/backupDestinations";

/// NFS and Recovery Appliance backup destinations (Exadata Cloud@Customer).
#[derive(Clone)]
pub struct BackupDestinations {
    client: DatabaseClient,
}

/// Optional parameters of `ListBackupDestinations`.
#[derive(Debug, Clone, Default)]
pub struct ListBackupDestinationsOptions {
    /// Only destinations of this kind
    pub destination_type: Option<BackupDestinationType>,
    /// Paging
    pub paging: PageOptions,
    /// Caller's request identifier
    pub opc_request_id: Option<String>,
    /// Retry policy for this call
    pub retry: RetrySetting,
}

paginated!(ListBackupDestinationsOptions);

impl BackupDestinations {
    pub(crate) fn new(client: DatabaseClient) -> Self {
        Self { client }
    }

    /// Create a backup destination.
    pub async fn create(
        &self,
        details: &CreateBackupDestinationDetails,
        options: CreateOptions,
    ) -> Result<ApiResponse<BackupDestination>> {
        let request = ApiRequest::new("CreateBackupDestination", Method::POST, COLLECTION)
            .json_body(details)?;
        let request = options.apply(request)?;
        self.client.call(request, &options.retry).await
    }

    /// Get a backup destination.
    pub async fn get(
        &self,
        backup_destination_id: &str,
        options: ReadOptions,
    ) -> Result<ApiResponse<BackupDestination>> {
        let path = item_path(backup_destination_id)?;
        let request = options.apply(ApiRequest::new("GetBackupDestination", Method::GET, path))?;
        self.client.call(request, &options.retry).await
    }

    /// List the backup destinations of a compartment.
    pub async fn list(
        &self,
        compartment_id: &str,
        options: ListBackupDestinationsOptions,
    ) -> Result<ApiResponse<Vec<BackupDestinationSummary>>> {
        let request = ApiRequest::new("ListBackupDestinations", Method::GET, COLLECTION)
            .required_query("compartmentId", compartment_id)?
            .query_enum("type", options.destination_type)?;
        let request = apply_list(request, &options.paging, options.opc_request_id.as_deref())?;
        self.client.call(request, &options.retry).await
    }

    /// Update a backup destination.
    pub async fn update(
        &self,
        backup_destination_id: &str,
        details: &UpdateBackupDestinationDetails,
        options: ConditionalOptions,
    ) -> Result<ApiResponse<BackupDestination>> {
        let path = item_path(backup_destination_id)?;
        let request =
            ApiRequest::new("UpdateBackupDestination", Method::PUT, path).json_body(details)?;
        let request = options.apply(request)?;
        self.client.call(request, &options.retry).await
    }

    /// Delete a backup destination no database uses.
    pub async fn delete(
        &self,
        backup_destination_id: &str,
        options: ConditionalOptions,
    ) -> Result<ApiResponse<()>> {
        let path = item_path(backup_destination_id)?;
        let request =
            options.apply(ApiRequest::new("DeleteBackupDestination", Method::DELETE, path))?;
        self.client.call_empty(request, &options.retry).await
    }
}

impl Resource for BackupDestinations {
    fn client(&self) -> &DatabaseClient {
        &self.client
    }
}

fn item_path(backup_destination_id: &str) -> Result<String> {
    Ok(format!(
        "{COLLECTION}/{}",
        path_param("backupDestinationId", backup_destination_id)?
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::resources::testing::{MockProvider, body_json, client};
    use crate::types::BackupDestinationTarget;

    const DESTINATION: &str = r#"{
        "id": "ocid1.backupdestination.oc1..d",
        "displayName": "nfs-1",
        "compartmentId": "ocid1.compartment.oc1..c",
        "type": "NFS",
        "localMountPointPath": "/mnt/backup",
        "lifecycleState": "ACTIVE"
    }"#;

    #[tokio::test]
    async fn test_create_nfs_destination() {
        let provider = MockProvider::new();
        provider.respond(200, DESTINATION);
        let details = CreateBackupDestinationDetails::builder()
            .display_name("nfs-1")
            .compartment_id("ocid1.compartment.oc1..c")
            .target(BackupDestinationTarget::Nfs {
                local_mount_point_path: "/mnt/backup".into(),
            })
            .build()
            .unwrap();

        let destination = client(&provider)
            .backup_destinations()
            .create(&details, CreateOptions::default())
            .await
            .unwrap()
            .into_data();

        assert_eq!(destination.destination_type, BackupDestinationType::Nfs);
        let body = body_json(&provider.last_request());
        assert_eq!(body["type"], "NFS");
        assert_eq!(body["localMountPointPath"], "/mnt/backup");
    }

    #[tokio::test]
    async fn test_list_type_filter() {
        let provider = MockProvider::new();
        provider.respond(200, &format!("[{DESTINATION}]"));

        client(&provider)
            .backup_destinations()
            .list(
                "ocid1.compartment.oc1..c",
                ListBackupDestinationsOptions {
                    destination_type: Some(BackupDestinationType::RecoveryAppliance),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let request = provider.last_request();
        assert_eq!(request.query_value("type"), Some("RECOVERY_APPLIANCE"));
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let provider = MockProvider::new();
        provider.respond(200, DESTINATION);
        let handle = client(&provider).backup_destinations();

        let details = UpdateBackupDestinationDetails {
            local_mount_point_path: Some("/mnt/other".into()),
            ..Default::default()
        };
        handle
            .update("d", &details, ConditionalOptions::default())
            .await
            .unwrap();
        handle.delete("d", ConditionalOptions::default()).await.unwrap();

        let requests = provider.requests();
        assert_eq!(requests[0].method(), Method::PUT);
        assert_eq!(body_json(&requests[0]), serde_json::json!({"localMountPointPath": "/mnt/other"}));
        assert_eq!(requests[1].method(), Method::DELETE);
        assert_eq!(requests[1].path(), "/backupDestinations/d");
    }

    #[tokio::test]
    async fn test_blank_compartment() {
        let provider = MockProvider::new();
        let err = client(&provider)
            .backup_destinations()
            .list(" ", ListBackupDestinationsOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::MissingParameter("compartmentId")));
    }
}
