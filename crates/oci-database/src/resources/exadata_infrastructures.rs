//! Exadata Cloud@Customer infrastructure operations

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
        ActivateExadataInfrastructureDetails, ChangeCompartmentDetails,
        CreateExadataInfrastructureDetails, ExadataInfrastructure,
        ExadataInfrastructureLifecycleState, ExadataInfrastructureSummary, SortBy, SortOrder,
        UpdateExadataInfrastructureDetails,
    },
    validation::path_param,
};
use bytes::Bytes;
use http::Method;

const COLLECTION: &str = "/exadataInfrastructures";

/// Exadata hardware in a customer data center.
///
/// New infrastructure starts in `REQUIRES_ACTIVATION`: download the
/// configuration file for the field engineer, then activate it with the
/// activation file they return.
#[derive(Clone)]
pub struct ExadataInfrastructures {
    client: DatabaseClient,
}

/// Optional parameters of `ListExadataInfrastructures`.
#[derive(Debug, Clone, Default)]
pub struct ListExadataInfrastructuresOptions {
    /// Only infrastructure in this state
    pub lifecycle_state: Option<ExadataInfrastructureLifecycleState>,
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

impl ListExadataInfrastructuresOptions {
    fn apply(&self, request: ApiRequest) -> Result<ApiRequest> {
        let request = request
            .query_enum("lifecycleState", self.lifecycle_state)?
            .query_opt("displayName", self.display_name.as_deref())
            .query_enum("sortBy", self.sort_by)?
            .query_enum("sortOrder", self.sort_order)?;
        apply_list(request, &self.paging, self.opc_request_id.as_deref())
    }
}

paginated!(ListExadataInfrastructuresOptions);

impl ExadataInfrastructures {
    pub(crate) fn new(client: DatabaseClient) -> Self {
        Self { client }
    }

    /// Register new infrastructure.
    pub async fn create(
        &self,
        details: &CreateExadataInfrastructureDetails,
        options: CreateOptions,
    ) -> Result<ApiResponse<ExadataInfrastructure>> {
        let request = ApiRequest::new("CreateExadataInfrastructure", Method::POST, COLLECTION)
            .json_body(details)?;
        let request = options.apply(request)?;
        self.client.call(request, &options.retry).await
    }

    /// Get infrastructure.
    pub async fn get(
        &self,
        exadata_infrastructure_id: &str,
        options: ReadOptions,
    ) -> Result<ApiResponse<ExadataInfrastructure>> {
        let path = item_path(exadata_infrastructure_id)?;
        let request =
            options.apply(ApiRequest::new("GetExadataInfrastructure", Method::GET, path))?;
        self.client.call(request, &options.retry).await
    }

    /// List the infrastructure of a compartment.
    pub async fn list(
        &self,
        compartment_id: &str,
        options: ListExadataInfrastructuresOptions,
    ) -> Result<ApiResponse<Vec<ExadataInfrastructureSummary>>> {
        let request = ApiRequest::new("ListExadataInfrastructures", Method::GET, COLLECTION)
            .required_query("compartmentId", compartment_id)?;
        let request = options.apply(request)?;
        self.client.call(request, &options.retry).await
    }

    /// Update network settings, contacts or tags.
    pub async fn update(
        &self,
        exadata_infrastructure_id: &str,
        details: &UpdateExadataInfrastructureDetails,
        options: ConditionalOptions,
    ) -> Result<ApiResponse<ExadataInfrastructure>> {
        let path = item_path(exadata_infrastructure_id)?;
        let request = ApiRequest::new("UpdateExadataInfrastructure", Method::PUT, path)
            .json_body(details)?;
        let request = options.apply(request)?;
        self.client.call(request, &options.retry).await
    }

    /// Delete infrastructure.
    pub async fn delete(
        &self,
        exadata_infrastructure_id: &str,
        options: ConditionalOptions,
    ) -> Result<ApiResponse<()>> {
        let path = item_path(exadata_infrastructure_id)?;
        let request =
            options.apply(ApiRequest::new("DeleteExadataInfrastructure", Method::DELETE, path))?;
        self.client.call_empty(request, &options.retry).await
    }

    /// Activate installed infrastructure.
    pub async fn activate(
        &self,
        exadata_infrastructure_id: &str,
        details: &ActivateExadataInfrastructureDetails,
        options: ConditionalOptions,
    ) -> Result<ApiResponse<ExadataInfrastructure>> {
        let path = format!("{}/actions/activate", item_path(exadata_infrastructure_id)?);
        let request = ApiRequest::new("ActivateExadataInfrastructure", Method::POST, path)
            .json_body(details)?;
        let request = options.apply(request)?;
        self.client.call(request, &options.retry).await
    }

    /// Move infrastructure to another compartment.
    pub async fn change_compartment(
        &self,
        exadata_infrastructure_id: &str,
        details: &ChangeCompartmentDetails,
        options: ConditionalOptions,
    ) -> Result<ApiResponse<()>> {
        let path = format!(
            "{}/actions/changeCompartment",
            item_path(exadata_infrastructure_id)?
        );
        let request = ApiRequest::new("ChangeExadataInfrastructureCompartment", Method::POST, path)
            .json_body(details)?;
        let request = options.apply(request)?;
        self.client.call_empty(request, &options.retry).await
    }

    /// Download the configuration bundle, buffered in memory.
    pub async fn download_config_file(
        &self,
        exadata_infrastructure_id: &str,
        options: CreateOptions,
    ) -> Result<ApiResponse<Bytes>> {
        let request = config_file_request(exadata_infrastructure_id, &options)?;
        self.client.download(request, &options.retry).await
    }

    /// Download the configuration bundle into `sink`.
    ///
    /// Returns the number of bytes written.
    pub async fn download_config_file_to<S>(
        &self,
        exadata_infrastructure_id: &str,
        sink: &mut S,
        options: CreateOptions,
    ) -> Result<ApiResponse<u64>>
    where
        S: DownloadSink + ?Sized,
    {
        let request = config_file_request(exadata_infrastructure_id, &options)?;
        self.client.download_to(request, &options.retry, sink).await
    }
}

impl Resource for ExadataInfrastructures {
    fn client(&self) -> &DatabaseClient {
        &self.client
    }
}

fn item_path(exadata_infrastructure_id: &str) -> Result<String> {
    Ok(format!(
        "{COLLECTION}/{}",
        path_param("exadataInfrastructureId", exadata_infrastructure_id)?
    ))
}

fn config_file_request(exadata_infrastructure_id: &str, options: &CreateOptions) -> Result<ApiRequest> {
    let path = format!(
        "{}/actions/downloadConfigFile",
        item_path(exadata_infrastructure_id)?
    );
    options.apply(
        ApiRequest::new("DownloadExadataInfrastructureConfigFile", Method::POST, path)
            .accept(OCTET_STREAM),
    )
}
