//! API resource endpoints
//!
//! One handle per resource family, obtained from the matching
//! [`DatabaseClient`] accessor. List operations take their own options
//! struct, defined next to the handle.

pub mod autonomous_container_databases;
pub mod autonomous_database_backups;
pub mod autonomous_databases;
pub mod autonomous_db_versions;
pub mod autonomous_exadata_infrastructures;
pub mod backup_destinations;
pub mod backups;
pub mod data_guard_associations;
pub mod databases;
pub mod db_homes;
pub mod db_nodes;
pub mod db_systems;
pub mod exadata_infrastructures;
pub mod external_backup_jobs;
pub mod maintenance_runs;
pub mod vm_cluster_networks;
pub mod vm_clusters;

pub use autonomous_container_databases::{
    AutonomousContainerDatabases, ListAutonomousContainerDatabasesOptions,
};
pub use autonomous_database_backups::{
    AutonomousDatabaseBackups, ListAutonomousDatabaseBackupsOptions,
};
pub use autonomous_databases::{AutonomousDatabases, ListAutonomousDatabasesOptions};
pub use autonomous_db_versions::{AutonomousDbVersions, ListAutonomousDbVersionsOptions};
pub use autonomous_exadata_infrastructures::{
    AutonomousExadataInfrastructures, ListAutonomousExadataInfrastructuresOptions,
};
pub use backup_destinations::{BackupDestinations, ListBackupDestinationsOptions};
pub use backups::{Backups, ListBackupsOptions};
pub use data_guard_associations::DataGuardAssociations;
pub use databases::{Databases, ListDatabasesOptions};
pub use db_homes::{DbHomes, DeleteDbHomeOptions, ListDbHomesOptions};
pub use db_nodes::{DbNodes, ListDbNodesOptions};
pub use db_systems::{DbSystems, ListDbSystemShapesOptions, ListDbSystemsOptions, ListDbVersionsOptions};
pub use exadata_infrastructures::{ExadataInfrastructures, ListExadataInfrastructuresOptions};
pub use external_backup_jobs::ExternalBackupJobs;
pub use maintenance_runs::{ListMaintenanceRunsOptions, MaintenanceRuns};
pub use vm_cluster_networks::{ListVmClusterNetworksOptions, VmClusterNetworks};
pub use vm_clusters::{ListVmClustersOptions, VmClusters};

use crate::client::DatabaseClient;

/// Base trait for API resources.
pub trait Resource {
    /// Get a reference to the client.
    fn client(&self) -> &DatabaseClient;
}

/// Media type of configuration files and wallets.
pub(crate) const OCTET_STREAM: &str = "application/octet-stream";

/// In-process transport recording every request, for resource unit tests.
#[cfg(test)]
pub(crate) mod testing {
    use crate::client::DatabaseClient;
    use crate::error::Result;
    use crate::http::{ApiRequest, HttpProvider, Response, StreamingResponse};
    use async_trait::async_trait;
    use bytes::Bytes;
    use http::{HeaderMap, StatusCode};
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};
    use url::Url;

    #[derive(Debug, Default)]
    pub(crate) struct MockProvider {
        requests: Mutex<Vec<ApiRequest>>,
        responses: Mutex<VecDeque<(StatusCode, Bytes)>>,
    }

    impl MockProvider {
        pub(crate) fn new() -> Arc<Self> {
            Arc::new(Self::default())
        }

        /// Queue a response; an empty `200` is returned once the queue is empty.
        pub(crate) fn respond(&self, status: u16, body: &str) {
            let status = StatusCode::from_u16(status).unwrap();
            self.responses
                .lock()
                .unwrap()
                .push_back((status, Bytes::from(body.to_string())));
        }

        pub(crate) fn requests(&self) -> Vec<ApiRequest> {
            self.requests.lock().unwrap().clone()
        }

        pub(crate) fn last_request(&self) -> ApiRequest {
            self.requests().pop().expect("no request was sent")
        }

        fn next(&self, request: &ApiRequest) -> (StatusCode, Bytes) {
            self.requests.lock().unwrap().push(request.clone());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or((StatusCode::OK, Bytes::new()))
        }
    }

    #[async_trait]
    impl HttpProvider for MockProvider {
        async fn call_api(&self, _endpoint: &Url, request: &ApiRequest) -> Result<Response> {
            let (status, body) = self.next(request);
            Ok(Response::new(status, HeaderMap::new(), body))
        }

        async fn call_api_streaming(
            &self,
            _endpoint: &Url,
            request: &ApiRequest,
        ) -> Result<StreamingResponse> {
            let (status, body) = self.next(request);
            let mid = body.len() / 2;
            let chunks = vec![Ok(body.slice(..mid)), Ok(body.slice(mid..))];
            Ok(StreamingResponse::new(
                status,
                HeaderMap::new(),
                Box::pin(futures::stream::iter(chunks)),
            ))
        }

        fn provider_name(&self) -> &'static str {
            "mock"
        }
    }

    pub(crate) fn client(provider: &Arc<MockProvider>) -> DatabaseClient {
        DatabaseClient::builder()
            .endpoint("https://database.test")
            .provider(provider.clone())
            .build()
            .unwrap()
    }

    pub(crate) fn body_json(request: &ApiRequest) -> serde_json::Value {
        serde_json::from_slice(request.body().expect("request has no body")).unwrap()
    }
}
