//! Tests for the Roster HTTP client.
//!
//! These tests use mock servers to verify client behavior without
//! requiring a real server connection.

use roster_client::{ClientConfig, ClientError, HttpApiClient};
use roster_core::{ApiClient, ApiError, Credentials};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpApiClient {
    HttpApiClient::new(ClientConfig::new(server.uri())).unwrap()
}

fn credentials() -> Credentials {
    Credentials::new("eve.holt@reqres.in", "cityslicka")
}

// =============================================================================
// Client Creation Tests
// =============================================================================

mod client_creation {
    use super::*;

    #[test]
    fn test_empty_url_rejected() {
        let result = HttpApiClient::new(ClientConfig::new(""));

        match result {
            Err(ClientError::InvalidUrl(msg)) => assert!(msg.contains("empty")),
            Err(e) => panic!("Expected InvalidUrl error, got: {:?}", e),
            Ok(_) => panic!("Expected InvalidUrl error"),
        }
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let result = HttpApiClient::new(ClientConfig::new("ftp://example.com"));

        match result {
            Err(ClientError::InvalidUrl(msg)) => {
                assert!(msg.contains("http://") || msg.contains("https://"));
            }
            Err(e) => panic!("Expected InvalidUrl error, got: {:?}", e),
            Ok(_) => panic!("Expected InvalidUrl error"),
        }
    }

    #[test]
    fn test_trailing_slashes_removed() {
        let client = HttpApiClient::new(ClientConfig::new("https://reqres.in/api/")).unwrap();
        assert_eq!(client.base_url(), "https://reqres.in/api");
    }
}

// =============================================================================
// Authentication Tests
// =============================================================================

mod authentication {
    use super::*;

    #[tokio::test]
    async fn test_successful_login() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/login"))
            .and(body_json(serde_json::json!({
                "email": "eve.holt@reqres.in",
                "password": "cityslicka"
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "token": "QpwL5tke4Pnpja7X4" })),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        let response = client.login(credentials()).await.unwrap().unwrap();
        assert_eq!(response.token.as_deref(), Some("QpwL5tke4Pnpja7X4"));
    }

    #[tokio::test]
    async fn test_login_sends_delay_and_api_key() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/login"))
            .and(query_param("delay", "5"))
            .and(header("x-api-key", "reqres-free-v1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "token": "t" })),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = ClientConfig::new(mock_server.uri())
            .with_api_key("reqres-free-v1")
            .with_login_delay(5);
        let client = HttpApiClient::new(config).unwrap();

        let response = client.login(credentials()).await.unwrap();
        assert!(response.is_some());
    }

    #[tokio::test]
    async fn test_login_error_keeps_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(serde_json::json!({ "error": "Missing password" })),
            )
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        let err = client.login(credentials()).await.unwrap_err();
        match &err {
            ApiError::Status { status, body } => {
                assert_eq!(*status, 400);
                assert!(body.as_deref().unwrap().contains("Missing password"));
            }
            e => panic!("Expected Status error, got: {:?}", e),
        }
        assert_eq!(err.user_message("generic"), "Missing password");
    }

    #[tokio::test]
    async fn test_login_empty_body_is_none() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        assert_eq!(client.login(credentials()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_login_without_token_field() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        let response = client.login(credentials()).await.unwrap().unwrap();
        assert!(response.token.is_none());
    }
}

// =============================================================================
// Staff Listing Tests
// =============================================================================

mod staff_listing {
    use super::*;

    #[tokio::test]
    async fn test_fetch_page_passes_page_number() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "page": 2,
                "per_page": 6,
                "total": 12,
                "total_pages": 2,
                "data": [
                    {
                        "id": 7,
                        "email": "michael.lawson@reqres.in",
                        "first_name": "Michael",
                        "last_name": "Lawson",
                        "avatar": "https://reqres.in/img/faces/7-image.jpg"
                    },
                    {
                        "id": 8,
                        "email": "lindsay.ferguson@reqres.in",
                        "first_name": "Lindsay",
                        "last_name": "Ferguson",
                        "avatar": "https://reqres.in/img/faces/8-image.jpg"
                    }
                ]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        let page = client.fetch_page(2).await.unwrap().unwrap();
        assert_eq!(page.page, Some(2));
        assert_eq!(page.total_pages, Some(2));
        assert!(!page.has_more());

        let data = page.data.unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0].id, Some(7));
        assert_eq!(data[1].email.as_deref(), Some("lindsay.ferguson@reqres.in"));
    }

    #[tokio::test]
    async fn test_fetch_page_null_body_is_none() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_string("null"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        assert_eq!(client.fetch_page(1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_fetch_page_invalid_json() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not valid json"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        match client.fetch_page(1).await.unwrap_err() {
            ApiError::Decode(msg) => assert!(msg.contains("staff page")),
            e => panic!("Expected Decode error, got: {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_fetch_page_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        let err = client.fetch_page(1).await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 500,
                body: Some("Internal Server Error".to_string())
            }
        );
        assert_eq!(err.user_message("generic"), "generic");
    }
}

// =============================================================================
// Transport Tests
// =============================================================================

mod transport {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_server() {
        let client = HttpApiClient::new(ClientConfig::new("http://127.0.0.1:9")).unwrap();

        match client.fetch_page(1).await.unwrap_err() {
            ApiError::Transport(Some(msg)) => assert!(!msg.is_empty()),
            e => panic!("Expected Transport error, got: {:?}", e),
        }
    }
}
