//! In-memory implementation of SupplierService

use crate::core::error::{EntityError, StorageError, SupplierResult};
use crate::core::model::{Supplier, SupplierUpdate};
use crate::core::service::SupplierService;
use async_trait::async_trait;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Position of the first supplier with `id`, by linear scan
pub fn position(suppliers: &[Supplier], id: i64) -> Option<usize> {
    suppliers.iter().position(|s| s.id == id)
}

/// In-memory supplier store
///
/// An ordered `Vec` behind a single `RwLock`. Clones share the same
/// underlying collection, so a store can be handed to the router as state
/// while the caller keeps a handle for seeding or inspection.
#[derive(Clone, Default)]
pub struct InMemorySupplierStore {
    suppliers: Arc<RwLock<Vec<Supplier>>>,
}

impl InMemorySupplierStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `seed` in the given order
    ///
    /// Later duplicates of an ID already present in `seed` are dropped.
    pub fn with_seed(seed: impl IntoIterator<Item = Supplier>) -> Self {
        let mut suppliers: Vec<Supplier> = Vec::new();
        for supplier in seed {
            if position(&suppliers, supplier.id).is_some() {
                tracing::warn!(id = supplier.id, "Skipping duplicate supplier in seed");
                continue;
            }
            suppliers.push(supplier);
        }

        Self {
            suppliers: Arc::new(RwLock::new(suppliers)),
        }
    }

    /// Lookup helper: position and a copy of the supplier with `id`
    pub fn find(&self, id: i64) -> SupplierResult<Option<(usize, Supplier)>> {
        let suppliers = self.read()?;
        Ok(position(&suppliers, id).map(|index| (index, suppliers[index].clone())))
    }

    /// Number of stored suppliers
    pub fn len(&self) -> SupplierResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> SupplierResult<bool> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> SupplierResult<RwLockReadGuard<'_, Vec<Supplier>>> {
        self.suppliers.read().map_err(|e| {
            StorageError::LockPoisoned {
                message: format!("Failed to acquire read lock: {}", e),
            }
            .into()
        })
    }

    fn write(&self) -> SupplierResult<RwLockWriteGuard<'_, Vec<Supplier>>> {
        self.suppliers.write().map_err(|e| {
            StorageError::LockPoisoned {
                message: format!("Failed to acquire write lock: {}", e),
            }
            .into()
        })
    }
}

#[async_trait]
impl SupplierService for InMemorySupplierStore {
    async fn list(&self) -> SupplierResult<Vec<Supplier>> {
        Ok(self.read()?.clone())
    }

    async fn get(&self, id: i64) -> SupplierResult<Option<Supplier>> {
        Ok(self.find(id)?.map(|(_, supplier)| supplier))
    }

    async fn create(&self, supplier: Supplier) -> SupplierResult<Supplier> {
        let mut suppliers = self.write()?;

        if position(&suppliers, supplier.id).is_some() {
            return Err(EntityError::AlreadyExists { id: supplier.id }.into());
        }

        suppliers.push(supplier.clone());
        Ok(supplier)
    }

    async fn update(&self, id: i64, update: SupplierUpdate) -> SupplierResult<Option<Supplier>> {
        let mut suppliers = self.write()?;

        let Some(index) = position(&suppliers, id) else {
            return Ok(None);
        };

        let supplier = &mut suppliers[index];
        supplier.apply(update);
        Ok(Some(supplier.clone()))
    }

    async fn delete(&self, id: i64) -> SupplierResult<Option<Supplier>> {
        let mut suppliers = self.write()?;

        // Vec::remove keeps the order of the remaining suppliers
        Ok(position(&suppliers, id).map(|index| suppliers.remove(index)))
    }
}
