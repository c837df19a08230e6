//! Service trait for supplier storage

use crate::core::error::SupplierResult;
use crate::core::model::{Supplier, SupplierUpdate};
use async_trait::async_trait;

/// Service trait for managing suppliers
///
/// Implementations own an ordered collection of suppliers. Absence is
/// reported as `Ok(None)` rather than an error; turning it into a 404 is
/// left to the HTTP layer.
#[async_trait]
pub trait SupplierService: Send + Sync {
    /// List all suppliers in insertion order
    async fn list(&self) -> SupplierResult<Vec<Supplier>>;

    /// Get a supplier by ID
    async fn get(&self, id: i64) -> SupplierResult<Option<Supplier>>;

    /// Append a new supplier
    ///
    /// Fails with `EntityError::AlreadyExists` if the ID is taken.
    async fn create(&self, supplier: Supplier) -> SupplierResult<Supplier>;

    /// Apply a partial update in place, returning the updated supplier
    async fn update(&self, id: i64, update: SupplierUpdate) -> SupplierResult<Option<Supplier>>;

    /// Remove a supplier, returning it if it existed
    async fn delete(&self, id: i64) -> SupplierResult<Option<Supplier>>;
}
