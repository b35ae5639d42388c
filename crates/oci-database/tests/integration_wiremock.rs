//! End-to-end tests against a mock Database service using wiremock

mod common;

use assert_matches::assert_matches;
use oci_database::{
    DatabaseClient, Error, RetrySetting,
    options::{ConditionalOptions, CreateOptions, PageOptions, ReadOptions},
    pagination::list_all,
    resources::ListBackupsOptions,
    types::{BackupLifecycleState, CreateBackupDetails, DatabaseLifecycleState},
};
use pretty_assertions::assert_eq;
use wiremock::matchers::{body_json, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_get_database_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/20160918/databases/ocid1.database.oc1.phx.aaaa"))
        .and(header("accept", "application/json"))
        .and(header("opc-request-id", "trace-123"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("etag", "\"etag-1\"")
                .insert_header("opc-request-id", "trace-123/server")
                .set_body_string(common::load_response_fixture("database")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server);
    let response = client
        .databases()
        .get(
            "ocid1.database.oc1.phx.aaaa",
            ReadOptions {
                opc_request_id: Some("trace-123".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("Request failed");

    assert_eq!(response.etag(), Some("\"etag-1\""));
    assert_eq!(response.opc_request_id(), Some("trace-123/server"));
    assert_eq!(response.retries_taken(), 0);

    let database = response.into_data();
    assert_eq!(database.db_name, "ORCL");
    assert_eq!(database.lifecycle_state, DatabaseLifecycleState::Available);
    assert_eq!(database.freeform_tags.get("team").map(String::as_str), Some("payments"));

    mock_server.verify().await;
}

#[tokio::test]
async fn test_create_sends_body_and_generated_retry_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/20160918/backups"))
        .and(header("content-type", "application/json"))
        .and(header_exists("opc-retry-token"))
        .and(body_json(serde_json::json!({
            "databaseId": "ocid1.database.oc1.phx.aaaa",
            "displayName": "nightly"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(common::load_response_fixture("backup")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server);
    let backup = client
        .backups()
        .create(
            &CreateBackupDetails::new("ocid1.database.oc1.phx.aaaa", "nightly"),
            CreateOptions::default(),
        )
        .await
        .unwrap()
        .into_data();

    assert_eq!(backup.lifecycle_state, Some(BackupLifecycleState::Creating));
    assert_eq!(backup.database_size_in_gbs, Some(256.0));

    let received = mock_server.received_requests().await.unwrap();
    let token = received[0].headers.get("opc-retry-token").unwrap();
    assert_eq!(token.to_str().unwrap().len(), 32);
}

#[tokio::test]
async fn test_retry_reuses_token_until_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/20160918/backups"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_string(common::load_response_fixture("service_error")),
        )
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/20160918/backups"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(common::load_response_fixture("backup")),
        )
        .mount(&mock_server)
        .await;

    let client = DatabaseClient::builder()
        .endpoint(mock_server.uri())
        .retry_config(common::fast_retry(3))
        .build()
        .unwrap();

    let response = client
        .backups()
        .create(
            &CreateBackupDetails::new("ocid1.database.oc1.phx.aaaa", "nightly"),
            CreateOptions::default(),
        )
        .await
        .expect("Retry should recover");

    assert_eq!(response.retries_taken(), 1);

    let received = mock_server.received_requests().await.unwrap();
    assert_eq!(received.len(), 2);
    assert_eq!(
        received[0].headers.get("opc-retry-token"),
        received[1].headers.get("opc-retry-token")
    );
}

#[tokio::test]
async fn test_caller_token_is_sent_verbatim() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/20160918/backups/ocid1.dbbackup.oc1.phx.bbbb"))
        .and(header("opc-retry-token", "my-token"))
        .and(header("if-match", "etag-7"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server);
    let response = client
        .backups()
        .delete(
            "ocid1.dbbackup.oc1.phx.bbbb",
            ConditionalOptions {
                if_match: Some("etag-7".to_string()),
                opc_retry_token: Some("my-token".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(response.status_code(), 204);
    mock_server.verify().await;
}

#[tokio::test]
async fn test_disabled_retry_makes_single_attempt() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/20160918/databases/db1"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_string(common::load_response_fixture("service_error")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = DatabaseClient::builder()
        .endpoint(mock_server.uri())
        .retry_config(common::fast_retry(5))
        .build()
        .unwrap();

    let err = client
        .databases()
        .get(
            "db1",
            ReadOptions {
                retry: RetrySetting::Disabled,
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert_matches!(err, Error::InternalServerError { .. });
    mock_server.verify().await;
}

#[tokio::test]
async fn test_per_call_retry_overrides_missing_default() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/20160918/databases/db1"))
        .respond_with(
            ResponseTemplate::new(503)
                .set_body_string(common::load_response_fixture("service_error")),
        )
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server);
    let err = client
        .databases()
        .get(
            "db1",
            ReadOptions {
                retry: RetrySetting::Custom(common::fast_retry(2)),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert!(err.is_retryable());
    mock_server.verify().await;
}

#[tokio::test]
async fn test_not_found_carries_request_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/20160918/databases/missing"))
        .respond_with(
            ResponseTemplate::new(404)
                .insert_header("opc-request-id", "req-404")
                .set_body_json(serde_json::json!({
                    "code": "NotAuthorizedOrNotFound",
                    "message": "Authorization failed or requested resource not found."
                })),
        )
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server);
    let err = client
        .databases()
        .get("missing", ReadOptions::default())
        .await
        .unwrap_err();

    assert_matches!(
        err,
        Error::NotAuthorizedOrNotFound { code, opc_request_id, .. }
            if code == "NotAuthorizedOrNotFound" && opc_request_id.as_deref() == Some("req-404")
    );
}

#[tokio::test]
async fn test_blank_id_never_reaches_the_service() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server);
    let err = client
        .databases()
        .get("   ", ReadOptions::default())
        .await
        .unwrap_err();

    assert_matches!(err, Error::MissingParameter("databaseId"));
    assert!(err.is_validation());
    mock_server.verify().await;
}

#[tokio::test]
async fn test_list_all_follows_next_page_header() {
    let mock_server = MockServer::start().await;
    let backup = common::load_response_fixture("backup");

    Mock::given(method("GET"))
        .and(path("/20160918/backups"))
        .and(query_param("page", "p2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!("[{backup}]")))
        .with_priority(1)
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/20160918/backups"))
        .and(query_param("databaseId", "ocid1.database.oc1.phx.aaaa"))
        .and(query_param("limit", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("opc-next-page", "p2")
                .set_body_string(format!("[{backup}]")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server);
    let options = ListBackupsOptions {
        database_id: Some("ocid1.database.oc1.phx.aaaa".to_string()),
        paging: PageOptions {
            limit: Some(1),
            page: None,
        },
        ..Default::default()
    };

    let backups = list_all(options, |options| {
        let client = client.clone();
        async move { client.backups().list(options).await }
    })
    .await
    .unwrap();

    assert_eq!(backups.len(), 2);
    mock_server.verify().await;
}
