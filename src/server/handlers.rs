//! Supplier HTTP handlers

use crate::core::error::{RequestError, SupplierError, SupplierResult};
use crate::core::model::{Supplier, SupplierUpdate};
use crate::core::service::SupplierService;
use axum::{
    body::Bytes,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;

/// Shared state for the supplier routes
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SupplierService>,
}

fn parse_id(raw: &str) -> SupplierResult<i64> {
    raw.parse::<i64>().map_err(|_| {
        RequestError::InvalidEntityId {
            id: raw.to_string(),
        }
        .into()
    })
}

/// GET /suppliers
pub async fn list_suppliers(State(state): State<AppState>) -> SupplierResult<Json<Vec<Supplier>>> {
    let suppliers = state.store.list().await?;
    tracing::debug!(count = suppliers.len(), "Listed suppliers");
    Ok(Json(suppliers))
}

/// GET /suppliers/{id}
pub async fn get_supplier(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> SupplierResult<Json<Supplier>> {
    let id = parse_id(&id)?;

    match state.store.get(id).await? {
        Some(supplier) => Ok(Json(supplier)),
        None => {
            tracing::debug!(id, "Supplier not found");
            Err(SupplierError::not_found(id))
        }
    }
}

/// POST /suppliers
pub async fn create_supplier(
    State(state): State<AppState>,
    payload: Result<Json<Supplier>, JsonRejection>,
) -> SupplierResult<(StatusCode, Json<Supplier>)> {
    let Json(payload) = payload.map_err(|e| RequestError::InvalidBody {
        message: e.body_text(),
    })?;

    let id = payload.id;
    let created = state.store.create(payload).await.inspect_err(|e| {
        tracing::warn!(id, error = %e, "Failed to create supplier");
    })?;

    tracing::info!(id, "Created supplier");
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /suppliers/{id}
///
/// The body is decoded only once the supplier is known to exist, so an
/// absent ID answers 404 even when the body is empty or malformed.
pub async fn update_supplier(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> SupplierResult<Json<Supplier>> {
    let id = parse_id(&id)?;

    if state.store.get(id).await?.is_none() {
        tracing::debug!(id, "Supplier not found for update");
        return Err(SupplierError::not_found(id));
    }

    let update: SupplierUpdate = serde_json::from_slice(&body)?;

    // Deleted between the lookup and the write
    let updated = state
        .store
        .update(id, update)
        .await?
        .ok_or_else(|| SupplierError::not_found(id))?;

    tracing::info!(id, "Updated supplier");
    Ok(Json(updated))
}

/// DELETE /suppliers/{id}
pub async fn delete_supplier(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> SupplierResult<StatusCode> {
    let id = parse_id(&id)?;

    match state.store.delete(id).await? {
        Some(_) => {
            tracing::info!(id, "Deleted supplier");
            Ok(StatusCode::NO_CONTENT)
        }
        None => {
            tracing::debug!(id, "Supplier not found for delete");
            Err(SupplierError::not_found(id))
        }
    }
}
