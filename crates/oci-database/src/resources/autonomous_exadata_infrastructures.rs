//! Autonomous Exadata infrastructure operations

use super::Resource;
use crate::{
    client::DatabaseClient,
    error::Result,
    http::{ApiRequest, ApiResponse},
    options::{
        ConditionalOptions, CreateOptions, ListOptions, PageOptions, ReadOptions, RetrySetting,
        apply_list, paginated,
    },
    types::{
        AutonomousExadataInfrastructure, AutonomousExadataInfrastructureLifecycleState,
        AutonomousExadataInfrastructureShapeSummary, AutonomousExadataInfrastructureSummary,
        ChangeCompartmentDetails, LaunchAutonomousExadataInfrastructureDetails, SortBy, SortOrder,
        UpdateAutonomousExadataInfrastructureDetails,
    },
    validation::path_param,
};
use http::Method;

const COLLECTION: &str = "/autonomousExadataInfrastructures";

/// Dedicated Exadata infrastructure for autonomous databases.
#[derive(Clone)]
pub struct AutonomousExadataInfrastructures {
    client: DatabaseClient,
}

/// Optional parameters of `ListAutonomousExadataInfrastructures`.
#[derive(Debug, Clone, Default)]
pub struct ListAutonomousExadataInfrastructuresOptions {
    /// Only infrastructure in this availability domain
    pub availability_domain: Option<String>,
    /// Only infrastructure in this state
    pub lifecycle_state: Option<AutonomousExadataInfrastructureLifecycleState>,
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

impl ListAutonomousExadataInfrastructuresOptions {
    fn apply(&self, request: ApiRequest) -> Result<ApiRequest> {
        let request = request
            .query_opt("availabilityDomain", self.availability_domain.as_deref())
            .query_enum("lifecycleState", self.lifecycle_state)?
            .query_opt("displayName", self.display_name.as_deref())
            .query_enum("sortBy", self.sort_by)?
            .query_enum("sortOrder", self.sort_order)?;
        apply_list(request, &self.paging, self.opc_request_id.as_deref())
    }
}

paginated!(ListAutonomousExadataInfrastructuresOptions);

impl AutonomousExadataInfrastructures {
    pub(crate) fn new(client: DatabaseClient) -> Self {
        Self { client }
    }

    /// Launch new autonomous Exadata infrastructure.
    pub async fn launch(
        &self,
        details: &LaunchAutonomousExadataInfrastructureDetails,
        options: CreateOptions,
    ) -> Result<ApiResponse<AutonomousExadataInfrastructure>> {
        let request =
            ApiRequest::new("LaunchAutonomousExadataInfrastructure", Method::POST, COLLECTION)
                .json_body(details)?;
        let request = options.apply(request)?;
        self.client.call(request, &options.retry).await
    }

    /// Get autonomous Exadata infrastructure.
    pub async fn get(
        &self,
        autonomous_exadata_infrastructure_id: &str,
        options: ReadOptions,
    ) -> Result<ApiResponse<AutonomousExadataInfrastructure>> {
        let path = item_path(autonomous_exadata_infrastructure_id)?;
        let request = options.apply(ApiRequest::new(
            "GetAutonomousExadataInfrastructure",
            Method::GET,
            path,
        ))?;
        self.client.call(request, &options.retry).await
    }

    /// List the autonomous Exadata infrastructure of a compartment.
    pub async fn list(
        &self,
        compartment_id: &str,
        options: ListAutonomousExadataInfrastructuresOptions,
    ) -> Result<ApiResponse<Vec<AutonomousExadataInfrastructureSummary>>> {
        let request =
            ApiRequest::new("ListAutonomousExadataInfrastructures", Method::GET, COLLECTION)
                .required_query("compartmentId", compartment_id)?;
        let request = options.apply(request)?;
        self.client.call(request, &options.retry).await
    }

    /// Update the properties of autonomous Exadata infrastructure.
    pub async fn update(
        &self,
        autonomous_exadata_infrastructure_id: &str,
        details: &UpdateAutonomousExadataInfrastructureDetails,
        options: ConditionalOptions,
    ) -> Result<ApiResponse<AutonomousExadataInfrastructure>> {
        let path = item_path(autonomous_exadata_infrastructure_id)?;
        let request = ApiRequest::new("UpdateAutonomousExadataInfrastructure", Method::PUT, path)
            .json_body(details)?;
        let request = options.apply(request)?;
        self.client.call(request, &options.retry).await
    }

    /// Terminate autonomous Exadata infrastructure.
    pub async fn terminate(
        &self,
        autonomous_exadata_infrastructure_id: &str,
        options: ConditionalOptions,
    ) -> Result<ApiResponse<()>> {
        let path = item_path(autonomous_exadata_infrastructure_id)?;
        let request = options.apply(ApiRequest::new(
            "TerminateAutonomousExadataInfrastructure",
            Method::DELETE,
            path,
        ))?;
        self.client.call_empty(request, &options.retry).await
    }

    /// Move autonomous Exadata infrastructure to another compartment.
    pub async fn change_compartment(
        &self,
        autonomous_exadata_infrastructure_id: &str,
        details: &ChangeCompartmentDetails,
        options: ConditionalOptions,
    ) -> Result<ApiResponse<()>> {
        let path = format!(
            "{}/actions/changeCompartment",
            item_path(autonomous_exadata_infrastructure_id)?
        );
        let request = ApiRequest::new(
            "ChangeAutonomousExadataInfrastructureCompartment",
            Method::POST,
            path,
        )
        .json_body(details)?;
        let request = options.apply(request)?;
        self.client.call_empty(request, &options.retry).await
    }

    /// List the shapes available in an availability domain.
    pub async fn list_shapes(
        &self,
        availability_domain: &str,
        compartment_id: &str,
        options: ListOptions,
    ) -> Result<ApiResponse<Vec<AutonomousExadataInfrastructureShapeSummary>>> {
        let request = ApiRequest::new(
            "ListAutonomousExadataInfrastructureShapes",
            Method::GET,
            "/autonomousExadataInfrastructureShapes",
        )
        .required_query("availabilityDomain", availability_domain)?
        .required_query("compartmentId", compartment_id)?;
        let request = options.apply(request)?;
        self.client.call(request, &options.retry).await
    }
}

impl Resource for AutonomousExadataInfrastructures {
    fn client(&self) -> &DatabaseClient {
        &self.client
    }
}

fn item_path(autonomous_exadata_infrastructure_id: &str) -> Result<String> {
    Ok(format!(
        "{COLLECTION}/{}",
        path_param(
            "autonomousExadataInfrastructureId",
            autonomous_exadata_infrastructure_id
        )?
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::resources::testing::{MockProvider, body_json, client};

    const INFRASTRUCTURE: &str = r#"{
        "id": "ocid1.autonomousexadatainfrastructure.oc1..x",
        "compartmentId": "ocid1.compartment.oc1..c",
        "displayName": "aei-1",
        "availabilityDomain": "Uocm:PHX-AD-1",
        "subnetId": "ocid1.subnet.oc1..s",
        "shape": "Exadata.X8M",
        "hostname": "aei",
        "domain": "example.com",
        "lifecycleState": "PROVISIONING"
    }"#;

    #[tokio::test]
    async fn test_launch() {
        let provider = MockProvider::new();
        provider.respond(200, INFRASTRUCTURE);
        let details = LaunchAutonomousExadataInfrastructureDetails::builder()
            .compartment_id("ocid1.compartment.oc1..c")
            .availability_domain("Uocm:PHX-AD-1")
            .subnet_id("ocid1.subnet.oc1..s")
            .shape("Exadata.X8M")
            .build()
            .unwrap();

        let response = client(&provider)
            .autonomous_exadata_infrastructures()
            .launch(&details, CreateOptions::default())
            .await
            .unwrap();

        assert_eq!(
            response.data().lifecycle_state,
            AutonomousExadataInfrastructureLifecycleState::Provisioning
        );
        let request = provider.last_request();
        assert_eq!(request.operation(), "LaunchAutonomousExadataInfrastructure");
        assert_eq!(body_json(&request)["shape"], "Exadata.X8M");
        assert!(body_json(&request).get("displayName").is_none());
    }

    #[tokio::test]
    async fn test_list_shapes_requires_both_parameters() {
        let provider = MockProvider::new();
        let handle = client(&provider).autonomous_exadata_infrastructures();

        let err = handle
            .list_shapes("Uocm:PHX-AD-1", "", ListOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::MissingParameter("compartmentId")));
        assert!(provider.requests().is_empty());

        provider.respond(200, r#"[{"name": "Exadata.X8M", "availableCoreCount": 100}]"#);
        let shapes = handle
            .list_shapes("Uocm:PHX-AD-1", "ocid1.compartment.oc1..c", ListOptions::default())
            .await
            .unwrap();
        assert_eq!(shapes.data()[0].available_core_count, 100);
        let request = provider.last_request();
        assert_eq!(request.path(), "/autonomousExadataInfrastructureShapes");
        assert_eq!(request.query_value("availabilityDomain"), Some("Uocm:PHX-AD-1"));
    }

    #[tokio::test]
    async fn test_terminate() {
        let provider = MockProvider::new();
        let response = client(&provider)
            .autonomous_exadata_infrastructures()
            .terminate("aei", ConditionalOptions::default())
            .await
            .unwrap();

        assert_eq!(response.status_code(), 200);
        let request = provider.last_request();
        assert_eq!(request.method(), Method::DELETE);
        assert_eq!(request.path(), "/autonomousExadataInfrastructures/aei");
    }
}
