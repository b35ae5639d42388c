//! Main client implementation for the Database service

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use bytes::Bytes;
use oci_database_core::retry::{BackoffStrategy, RetryConfig};
use serde::de::DeserializeOwned;
use tracing::info;
use url::Url;

use crate::{
    API_VERSION,
    config::{ClientConfig, ProxySettings},
    download::{self, DownloadSink},
    error::{Error, Result},
    http::{ApiRequest, ApiResponse, HttpProvider, OciHttpProvider, Response},
    options::RetrySetting,
    regions,
    resources::{
        AutonomousContainerDatabases, AutonomousDatabaseBackups, AutonomousDatabases,
        AutonomousDbVersions, AutonomousExadataInfrastructures, BackupDestinations, Backups,
        DataGuardAssociations, Databases, DbHomes, DbNodes, DbSystems, ExadataInfrastructures,
        ExternalBackupJobs, MaintenanceRuns, VmClusterNetworks, VmClusters,
    },
    signer::Signer,
};

/// Client for the Database service.
///
/// Cloning is cheap; clones share the transport and the resolved endpoint.
/// Operations are grouped by resource family, e.g.
/// [`db_systems()`](Self::db_systems) or
/// [`autonomous_databases()`](Self::autonomous_databases).
///
/// # Example
///
/// ```rust,no_run
/// use oci_database::{DatabaseClient, options::ReadOptions};
/// use oci_database::signer::SessionTokenSigner;
/// use std::sync::Arc;
///
/// # async fn example() -> oci_database::Result<()> {
/// let client = DatabaseClient::builder()
///     .signer(Arc::new(SessionTokenSigner::new("token", "us-ashburn-1")))
///     .build()?;
///
/// let database = client
///     .databases()
///     .get("ocid1.database.oc1..example", ReadOptions::default())
///     .await?;
/// println!("{}", database.data().db_name);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct DatabaseClient {
    inner: Arc<ClientInner>,
}

#[derive(Clone)]
struct ClientInner {
    /// Transport for every call (signing, middleware, connection pool)
    provider: Arc<dyn HttpProvider>,
    /// Versioned endpoint, always ending in `/20160918`
    endpoint: Url,
    /// Region the endpoint was derived from, if any
    region: Option<String>,
    /// Retry policy for operations using `RetrySetting::ClientDefault`
    retry_config: Option<RetryConfig>,
}

impl std::fmt::Debug for DatabaseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseClient")
            .field("endpoint", &self.inner.endpoint.as_str())
            .field("region", &self.inner.region)
            .field("provider", &self.inner.provider.provider_name())
            .finish()
    }
}

impl DatabaseClient {
    /// Create a new client builder.
    pub fn builder() -> DatabaseClientBuilder {
        DatabaseClientBuilder::default()
    }

    /// Create an unsigned client for a region.
    pub fn for_region(region: impl Into<String>) -> Result<Self> {
        Self::builder().region(region).build()
    }

    /// Create a client from a configuration object.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        Self::builder().config(config).build()
    }

    /// Versioned service endpoint, e.g. `https://database.us-phoenix-1.oraclecloud.com/20160918`.
    pub fn endpoint(&self) -> &Url {
        &self.inner.endpoint
    }

    /// Region the endpoint was derived from; `None` for an explicit endpoint.
    pub fn region(&self) -> Option<&str> {
        self.inner.region.as_deref()
    }

    /// Default retry policy.
    pub fn retry_config(&self) -> Option<&RetryConfig> {
        self.inner.retry_config.as_ref()
    }

    /// Point this client at a region.
    ///
    /// Clones made earlier keep their endpoint.
    pub fn set_region(&mut self, region: &str) -> Result<()> {
        crate::validation::require_non_blank("region", region)?;
        let endpoint = endpoint_for_region(region)?;
        let mut inner = (*self.inner).clone();
        inner.region = Some(regions::canonical_name(region));
        inner.endpoint = endpoint;
        info!(endpoint = %inner.endpoint, "Database client endpoint updated");
        self.inner = Arc::new(inner);
        Ok(())
    }

    /// Point this client at an explicit endpoint; `/20160918` is appended.
    ///
    /// The client no longer reports a region afterwards. Clones made earlier
    /// keep their endpoint.
    pub fn set_endpoint(&mut self, endpoint: &str) -> Result<()> {
        let endpoint = versioned_endpoint(endpoint)?;
        let mut inner = (*self.inner).clone();
        inner.endpoint = endpoint;
        inner.region = None;
        info!(endpoint = %inner.endpoint, "Database client endpoint updated");
        self.inner = Arc::new(inner);
        Ok(())
    }

    /// Autonomous container database operations.
    pub fn autonomous_container_databases(&self) -> AutonomousContainerDatabases {
        AutonomousContainerDatabases::new(self.clone())
    }

    /// Autonomous database operations.
    pub fn autonomous_databases(&self) -> AutonomousDatabases {
        AutonomousDatabases::new(self.clone())
    }

    /// Autonomous database backup operations.
    pub fn autonomous_database_backups(&self) -> AutonomousDatabaseBackups {
        AutonomousDatabaseBackups::new(self.clone())
    }

    /// Autonomous Exadata infrastructure operations.
    pub fn autonomous_exadata_infrastructures(&self) -> AutonomousExadataInfrastructures {
        AutonomousExadataInfrastructures::new(self.clone())
    }

    /// Autonomous database version listing.
    pub fn autonomous_db_versions(&self) -> AutonomousDbVersions {
        AutonomousDbVersions::new(self.clone())
    }

    /// Backup operations.
    pub fn backups(&self) -> Backups {
        Backups::new(self.clone())
    }

    /// Backup destination operations.
    pub fn backup_destinations(&self) -> BackupDestinations {
        BackupDestinations::new(self.clone())
    }

    /// Data Guard association operations.
    pub fn data_guard_associations(&self) -> DataGuardAssociations {
        DataGuardAssociations::new(self.clone())
    }

    /// Database operations.
    pub fn databases(&self) -> Databases {
        Databases::new(self.clone())
    }

    /// Database home operations.
    pub fn db_homes(&self) -> DbHomes {
        DbHomes::new(self.clone())
    }

    /// Database node operations.
    pub fn db_nodes(&self) -> DbNodes {
        DbNodes::new(self.clone())
    }

    /// DB system operations.
    pub fn db_systems(&self) -> DbSystems {
        DbSystems::new(self.clone())
    }

    /// Exadata infrastructure operations.
    pub fn exadata_infrastructures(&self) -> ExadataInfrastructures {
        ExadataInfrastructures::new(self.clone())
    }

    /// VM cluster network operations.
    pub fn vm_cluster_networks(&self) -> VmClusterNetworks {
        VmClusterNetworks::new(self.clone())
    }

    /// VM cluster operations.
    pub fn vm_clusters(&self) -> VmClusters {
        VmClusters::new(self.clone())
    }

    /// External backup job operations.
    pub fn external_backup_jobs(&self) -> ExternalBackupJobs {
        ExternalBackupJobs::new(self.clone())
    }

    /// Maintenance run operations.
    pub fn maintenance_runs(&self) -> MaintenanceRuns {
        MaintenanceRuns::new(self.clone())
    }

    /// Send `request`, decoding a JSON body.
    pub(crate) async fn call<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
        retry: &RetrySetting,
    ) -> Result<ApiResponse<T>> {
        self.execute(request, retry).await?.into_api_response()
    }

    /// Send `request`, expecting no body.
    pub(crate) async fn call_empty(
        &self,
        request: ApiRequest,
        retry: &RetrySetting,
    ) -> Result<ApiResponse<()>> {
        self.execute(request, retry).await?.into_empty_response()
    }

    /// Send `request`, buffering the binary body.
    pub(crate) async fn download(
        &self,
        request: ApiRequest,
        retry: &RetrySetting,
    ) -> Result<ApiResponse<Bytes>> {
        self.execute(request, retry).await?.into_bytes_response()
    }

    /// Send `request`, writing the body into `sink` as it arrives.
    ///
    /// Only establishing the response is retried; once chunks have been
    /// handed to the sink a failure is returned as is.
    pub(crate) async fn download_to<S>(
        &self,
        mut request: ApiRequest,
        retry: &RetrySetting,
        sink: &mut S,
    ) -> Result<ApiResponse<u64>>
    where
        S: DownloadSink + ?Sized,
    {
        request.ensure_retry_token();
        let provider = &self.inner.provider;
        let endpoint = &self.inner.endpoint;
        let request = &request;
        let attempts = AtomicU32::new(0);

        let attempt = || {
            let attempts = &attempts;
            async move {
                attempts.fetch_add(1, Ordering::SeqCst);
                provider
                    .call_api_streaming(endpoint, request)
                    .await?
                    .error_for_status()
                    .await
            }
        };

        let streaming = match retry.resolve(self.inner.retry_config.as_ref()) {
            Some(config) => config.execute(attempt).await?,
            None => attempt().await?,
        };
        let retries_taken = attempts.load(Ordering::SeqCst).saturating_sub(1);

        let (status, headers, body) = streaming.into_parts();
        let written = download::drain(request.operation(), body, sink).await?;
        Ok(ApiResponse::new(written, status, headers, retries_taken))
    }

    /// Run one operation: token, attempts, status mapping.
    ///
    /// The retry token is fixed before the first attempt so that every
    /// retry of a mutating call carries the same one.
    async fn execute(&self, mut request: ApiRequest, retry: &RetrySetting) -> Result<Response> {
        request.ensure_retry_token();
        let provider = &self.inner.provider;
        let endpoint = &self.inner.endpoint;
        let request = &request;
        let attempts = AtomicU32::new(0);

        let attempt = || {
            let attempts = &attempts;
            async move {
                attempts.fetch_add(1, Ordering::SeqCst);
                provider.call_api(endpoint, request).await?.error_for_status()
            }
        };

        let mut response = match retry.resolve(self.inner.retry_config.as_ref()) {
            Some(config) => config.execute(attempt).await?,
            None => attempt().await?,
        };
        response.retries_taken = attempts.load(Ordering::SeqCst).saturating_sub(1);
        Ok(response)
    }
}

/// Builder for creating a configured [`DatabaseClient`].
#[derive(Default)]
pub struct DatabaseClientBuilder {
    config: ClientConfig,
    region: Option<String>,
    endpoint: Option<String>,
    signer: Option<Arc<dyn Signer>>,
    provider: Option<Arc<dyn HttpProvider>>,
}

impl DatabaseClientBuilder {
    /// Start from a configuration; later builder calls override it.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = self.config.merge(config);
        self
    }

    /// Region used to derive the endpoint.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Explicit endpoint; `/20160918` is appended and the region is not consulted.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Request signer. A region-aware signer also supplies the fallback region.
    pub fn signer(mut self, signer: Arc<dyn Signer>) -> Self {
        self.signer = Some(signer);
        self
    }

    /// HTTP proxy.
    pub fn proxy(mut self, proxy: ProxySettings) -> Self {
        self.config.proxy = Some(proxy);
        self
    }

    /// Default retry policy for every operation.
    pub fn retry_config(mut self, retry: RetryConfig) -> Self {
        self.config.retry = Some(retry);
        self
    }

    /// Custom transport, replacing the built-in `reqwest` provider.
    ///
    /// Signer, proxy and timeouts are then the provider's concern.
    pub fn provider(mut self, provider: Arc<dyn HttpProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingRegion`] when neither an endpoint nor a region
    /// can be determined, and transport errors when the HTTP client cannot
    /// be created.
    pub fn build(self) -> Result<DatabaseClient> {
        let explicit_endpoint = self.endpoint.or_else(|| self.config.endpoint.clone());

        let (endpoint, region) = match explicit_endpoint {
            Some(endpoint) => (versioned_endpoint(&endpoint)?, None),
            None => {
                let region = self
                    .region
                    .or_else(|| self.config.region.clone())
                    .or_else(|| {
                        self.signer
                            .as_ref()
                            .and_then(|s| s.as_region_aware())
                            .and_then(|r| r.region())
                            .map(str::to_string)
                    })
                    .filter(|r| !r.trim().is_empty())
                    .ok_or(Error::MissingRegion)?;
                (endpoint_for_region(&region)?, Some(regions::canonical_name(&region)))
            }
        };

        let provider: Arc<dyn HttpProvider> = match self.provider {
            Some(provider) => provider,
            None => Arc::new(OciHttpProvider::from_config(&self.config, self.signer)?),
        };

        info!(
            endpoint = %endpoint,
            region = region.as_deref(),
            provider = provider.provider_name(),
            "Database client created"
        );

        Ok(DatabaseClient {
            inner: Arc::new(ClientInner {
                provider,
                endpoint,
                region,
                retry_config: self.config.retry,
            }),
        })
    }
}

fn endpoint_for_region(region: &str) -> Result<Url> {
    versioned_endpoint(&regions::endpoint_for_template(
        region,
        regions::ENDPOINT_TEMPLATE,
    ))
}

fn versioned_endpoint(endpoint: &str) -> Result<Url> {
    let trimmed = endpoint.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(Error::InvalidUrl("endpoint is empty".to_string()));
    }
    let url = Url::parse(&format!("{trimmed}/{API_VERSION}"))
        .map_err(|e| Error::InvalidUrl(format!("invalid endpoint '{endpoint}': {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::InvalidUrl(format!(
            "endpoint '{endpoint}' must use http or https"
        )));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signer::{BearerTokenSigner, SessionTokenSigner};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_explicit_endpoint_wins() {
        let client = DatabaseClient::builder()
            .endpoint("http://localhost:8080/")
            .region("us-phoenix-1")
            .build()
            .unwrap();
        assert_eq!(client.endpoint().as_str(), "http://localhost:8080/20160918");
        assert_eq!(client.region(), None);
    }

    #[test]
    fn test_region_endpoint() {
        let client = DatabaseClient::for_region("eu-frankfurt-1").unwrap();
        assert_eq!(
            client.endpoint().as_str(),
            "https://database.eu-frankfurt-1.oraclecloud.com/20160918"
        );
        assert_eq!(client.region(), Some("eu-frankfurt-1"));
    }

    #[test]
    fn test_config_region_used() {
        let client = DatabaseClient::from_config(ClientConfig::with_region("uk-gov-london-1")).unwrap();
        assert_eq!(
            client.endpoint().as_str(),
            "https://database.uk-gov-london-1.oraclegovcloud.uk/20160918"
        );
    }

    #[test]
    fn test_region_aware_signer_supplies_region() {
        let client = DatabaseClient::builder()
            .signer(Arc::new(SessionTokenSigner::new("tok", "ap-tokyo-1")))
            .build()
            .unwrap();
        assert_eq!(client.region(), Some("ap-tokyo-1"));
    }

    #[test]
    fn test_plain_signer_does_not_supply_region() {
        let result = DatabaseClient::builder()
            .signer(Arc::new(BearerTokenSigner::new("tok")))
            .build();
        assert!(matches!(result, Err(Error::MissingRegion)));
    }

    #[test]
    fn test_missing_region() {
        assert!(matches!(
            DatabaseClient::builder().build(),
            Err(Error::MissingRegion)
        ));
    }

    #[test]
    fn test_set_region_and_endpoint() {
        let mut client = DatabaseClient::for_region("us-ashburn-1").unwrap();
        let before = client.clone();

        client.set_region("phx").unwrap();
        assert_eq!(
            client.endpoint().as_str(),
            "https://database.us-phoenix-1.oraclecloud.com/20160918"
        );
        assert_eq!(client.region(), Some("us-phoenix-1"));

        client.set_endpoint("https://db.internal.example").unwrap();
        assert_eq!(client.endpoint().as_str(), "https://db.internal.example/20160918");
        assert_eq!(client.region(), None);
        assert_eq!(before.region(), Some("us-ashburn-1"));

        assert_eq!(
            before.endpoint().as_str(),
            "https://database.us-ashburn-1.oraclecloud.com/20160918"
        );
        assert!(client.set_region(" ").is_err());
    }

    #[test]
    fn test_invalid_endpoint() {
        assert!(matches!(
            DatabaseClient::builder().endpoint("ftp://files").build(),
            Err(Error::InvalidUrl(_))
        ));
        assert!(matches!(
            DatabaseClient::builder().endpoint("").build(),
            Err(Error::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_retry_config_kept() {
        let client = DatabaseClient::builder()
            .region("us-phoenix-1")
            .retry_config(RetryConfig::builder().max_attempts(4).build())
            .build()
            .unwrap();
        assert_eq!(client.retry_config().map(|r| r.max_attempts()), Some(4));
    }
}
