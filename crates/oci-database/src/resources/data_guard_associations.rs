//! Data Guard association operations
//!
//! Associations are addressed through the database they report on, so every
//! operation takes the database OCID first.

use super::Resource;
use crate::{
    client::DatabaseClient,
    error::Result,
    http::{ApiRequest, ApiResponse},
    options::{ConditionalOptions, CreateOptions, ListOptions, ReadOptions},
    types::{
        CreateDataGuardAssociationDetails, DataGuardAssociation, DataGuardAssociationSummary,
        FailoverDataGuardAssociationDetails, ReinstateDataGuardAssociationDetails,
        SwitchoverDataGuardAssociationDetails,
    },
    validation::path_param,
};
use http::Method;
use serde::Serialize;

/// Data Guard associations between a primary and a standby database.
#[derive(Clone)]
pub struct DataGuardAssociations {
    client: DatabaseClient,
}

impl DataGuardAssociations {
    pub(crate) fn new(client: DatabaseClient) -> Self {
        Self { client }
    }

    /// Create a standby for `database_id`.
    pub async fn create(
        &self,
        database_id: &str,
        details: &CreateDataGuardAssociationDetails,
        options: CreateOptions,
    ) -> Result<ApiResponse<DataGuardAssociation>> {
        let path = collection_path(database_id)?;
        let request = ApiRequest::new("CreateDataGuardAssociation", Method::POST, path)
            .json_body(details)?;
        let request = options.apply(request)?;
        self.client.call(request, &options.retry).await
    }

    /// Get an association.
    pub async fn get(
        &self,
        database_id: &str,
        data_guard_association_id: &str,
        options: ReadOptions,
    ) -> Result<ApiResponse<DataGuardAssociation>> {
        let path = item_path(database_id, data_guard_association_id)?;
        let request =
            options.apply(ApiRequest::new("GetDataGuardAssociation", Method::GET, path))?;
        self.client.call(request, &options.retry).await
    }

    /// List the associations of a database.
    pub async fn list(
        &self,
        database_id: &str,
        options: ListOptions,
    ) -> Result<ApiResponse<Vec<DataGuardAssociationSummary>>> {
        let path = collection_path(database_id)?;
        let request =
            options.apply(ApiRequest::new("ListDataGuardAssociations", Method::GET, path))?;
        self.client.call(request, &options.retry).await
    }

    /// Fail over to the standby. The primary is then unusable until reinstated.
    pub async fn failover(
        &self,
        database_id: &str,
        data_guard_association_id: &str,
        details: &FailoverDataGuardAssociationDetails,
        options: ConditionalOptions,
    ) -> Result<ApiResponse<DataGuardAssociation>> {
        self.action(
            "FailoverDataGuardAssociation",
            database_id,
            data_guard_association_id,
            "failover",
            details,
            options,
        )
        .await
    }

    /// Swap the primary and standby roles.
    pub async fn switchover(
        &self,
        database_id: &str,
        data_guard_association_id: &str,
        details: &SwitchoverDataGuardAssociationDetails,
        options: ConditionalOptions,
    ) -> Result<ApiResponse<DataGuardAssociation>> {
        self.action(
            "SwitchoverDataGuardAssociation",
            database_id,
            data_guard_association_id,
            "switchover",
            details,
            options,
        )
        .await
    }

    /// Reinstate a failed-over primary as standby.
    pub async fn reinstate(
        &self,
        database_id: &str,
        data_guard_association_id: &str,
        details: &ReinstateDataGuardAssociationDetails,
        options: ConditionalOptions,
    ) -> Result<ApiResponse<DataGuardAssociation>> {
        self.action(
            "ReinstateDataGuardAssociation",
            database_id,
            data_guard_association_id,
            "reinstate",
            details,
            options,
        )
        .await
    }

    async fn action<B: Serialize>(
        &self,
        operation: &'static str,
        database_id: &str,
        data_guard_association_id: &str,
        action: &str,
        details: &B,
        options: ConditionalOptions,
    ) -> Result<ApiResponse<DataGuardAssociation>> {
        let path = format!(
            "{}/actions/{action}",
            item_path(database_id, data_guard_association_id)?
        );
        let request = ApiRequest::new(operation, Method::POST, path).json_body(details)?;
        let request = options.apply(request)?;
        self.client.call(request, &options.retry).await
    }
}

impl Resource for DataGuardAssociations {
    fn client(&self) -> &DatabaseClient {
        &self.client
    }
}

fn collection_path(database_id: &str) -> Result<String> {
    Ok(format!(
        "/databases/{}/dataGuardAssociations",
        path_param("databaseId", database_id)?
    ))
}

fn item_path(database_id: &str, data_guard_association_id: &str) -> Result<String> {
    let collection = collection_path(database_id)?;
    Ok(format!(
        "{collection}/{}",
        path_param("dataGuardAssociationId", data_guard_association_id)?
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::resources::testing::{MockProvider, body_json, client};
    use crate::types::{DataGuardCreationType, DataGuardRole, ProtectionMode, TransportType};

    const ASSOCIATION: &str = r#"{
        "id": "ocid1.dgassociation.oc1..a",
        "databaseId": "ocid1.database.oc1..primary",
        "role": "STANDBY",
        "lifecycleState": "AVAILABLE",
        "peerDbSystemId": "ocid1.dbsystem.oc1..peer",
        "peerRole": "PRIMARY",
        "protectionMode": "MAXIMUM_PERFORMANCE",
        "transportType": "ASYNC"
    }"#;

    #[tokio::test]
    async fn test_create_on_existing_db_system() {
        let provider = MockProvider::new();
        provider.respond(200, ASSOCIATION);
        let details = CreateDataGuardAssociationDetails {
            database_admin_password: "Sys#Pass123".into(),
            protection_mode: ProtectionMode::MaximumPerformance,
            transport_type: TransportType::Async,
            creation: DataGuardCreationType::ExistingDbSystem {
                peer_db_system_id: "ocid1.dbsystem.oc1..peer".into(),
            },
        };

        client(&provider)
            .data_guard_associations()
            .create("ocid1.database.oc1..primary", &details, CreateOptions::default())
            .await
            .unwrap();

        let request = provider.last_request();
        assert_eq!(
            request.path(),
            "/databases/ocid1.database.oc1..primary/dataGuardAssociations"
        );
        let body = body_json(&request);
        assert_eq!(body["creationType"], "ExistingDbSystem");
        assert_eq!(body["peerDbSystemId"], "ocid1.dbsystem.oc1..peer");
        assert_eq!(body["databaseAdminPassword"], "Sys#Pass123");
    }

    #[tokio::test]
    async fn test_switchover() {
        let provider = MockProvider::new();
        provider.respond(200, ASSOCIATION);

        let association = client(&provider)
            .data_guard_associations()
            .switchover(
                "db",
                "dg",
                &SwitchoverDataGuardAssociationDetails::new("pw"),
                ConditionalOptions::if_match("etag-7"),
            )
            .await
            .unwrap()
            .into_data();

        assert_eq!(association.role, DataGuardRole::Standby);
        let request = provider.last_request();
        assert_eq!(request.operation(), "SwitchoverDataGuardAssociation");
        assert_eq!(
            request.path(),
            "/databases/db/dataGuardAssociations/dg/actions/switchover"
        );
        assert_eq!(request.header_value("if-match"), Some("etag-7"));
    }

    #[tokio::test]
    async fn test_each_id_validated() {
        let provider = MockProvider::new();
        let handle = client(&provider).data_guard_associations();

        let err = handle
            .get("", "dg", ReadOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::MissingParameter("databaseId")));

        let err = handle
            .reinstate(
                "db",
                " ",
                &ReinstateDataGuardAssociationDetails::new("pw"),
                ConditionalOptions::default(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, Error::MissingParameter("dataGuardAssociationId")));
        assert!(provider.requests().is_empty());
    }
}
