//! Router builder utilities for supplier and health routes

use super::handlers::{
    AppState, create_supplier, delete_supplier, get_supplier, list_suppliers, update_supplier,
};
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

/// Build the supplier CRUD routes
///
/// - GET    /suppliers       - List all suppliers
/// - POST   /suppliers       - Create a supplier
/// - GET    /suppliers/{id}  - Get a supplier
/// - PUT    /suppliers/{id}  - Update a supplier
/// - DELETE /suppliers/{id}  - Delete a supplier
pub fn build_supplier_routes(state: AppState) -> Router {
    Router::new()
        .route("/suppliers", get(list_suppliers).post(create_supplier))
        .route(
            "/suppliers/{id}",
            get(get_supplier).put(update_supplier).delete(delete_supplier),
        )
        .with_state(state)
}

/// Build health check routes
pub fn build_health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "suppliers-rs"
    }))
}
