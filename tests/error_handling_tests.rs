//! Tests for the typed error handling system
//!
//! These tests verify that:
//! - Errors return correct HTTP status codes
//! - Error responses are properly formatted
//! - Store failures surface as 500 through the REST layer

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum_test::TestServer;
use serde_json::Value;
use suppliers::prelude::*;

// =============================================================================
// HTTP Status Code Tests
// =============================================================================

mod status_code_tests {
    use super::*;

    #[test]
    fn test_entity_not_found_returns_404() {
        let err = SupplierError::Entity(EntityError::NotFound { id: 1 });
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_entity_already_exists_returns_409() {
        let err = SupplierError::Entity(EntityError::AlreadyExists { id: 1 });
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_invalid_body_returns_400() {
        let err = SupplierError::Request(RequestError::InvalidBody {
            message: "expected value".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_into_response_uses_status_code() {
        let response = SupplierError::not_found(3).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

// =============================================================================
// Error Matching Tests
// =============================================================================

mod error_matching_tests {
    use super::*;

    #[tokio::test]
    async fn test_client_can_match_conflict() {
        let store = InMemorySupplierStore::with_seed(ServerConfig::default_seed());
        let result = store
            .create(Supplier::new(5, "Again", Address::default()))
            .await;

        match result {
            Err(SupplierError::Entity(EntityError::AlreadyExists { id })) => assert_eq!(id, 5),
            other => panic!("expected AlreadyExists, got {:?}", other),
        }
    }
}

// =============================================================================
// Store Failure Tests
// =============================================================================

mod store_failure_tests {
    use super::*;

    /// Store whose every operation fails as if its lock were poisoned
    struct BrokenStore;

    fn broken() -> SupplierError {
        StorageError::LockPoisoned {
            message: "writer panicked".to_string(),
        }
        .into()
    }

    #[async_trait]
    impl SupplierService for BrokenStore {
        async fn list(&self) -> SupplierResult<Vec<Supplier>> {
            Err(broken())
        }
        async fn get(&self, _id: i64) -> SupplierResult<Option<Supplier>> {
            Err(broken())
        }
        async fn create(&self, _supplier: Supplier) -> SupplierResult<Supplier> {
            Err(broken())
        }
        async fn update(
            &self,
            _id: i64,
            _update: SupplierUpdate,
        ) -> SupplierResult<Option<Supplier>> {
            Err(broken())
        }
        async fn delete(&self, _id: i64) -> SupplierResult<Option<Supplier>> {
            Err(broken())
        }
    }

    fn make_server() -> TestServer {
        let app = ServerBuilder::new().with_store(BrokenStore).build().unwrap();
        TestServer::try_new(app).unwrap()
    }

    #[tokio::test]
    async fn test_list_storage_error_returns_500() {
        let server = make_server();

        let response = server.get("/suppliers").await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = response.json();
        assert_eq!(body["code"], "STORAGE_ERROR");
        assert!(body["message"].as_str().unwrap().contains("writer panicked"));
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn test_mutations_storage_error_returns_500() {
        let server = make_server();

        server
            .delete("/suppliers/1")
            .await
            .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        server
            .put("/suppliers/1")
            .await
            .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        server
            .post("/suppliers")
            .json(&Supplier::default())
            .await
            .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }
}
