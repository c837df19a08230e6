//! # Suppliers
//!
//! An in-memory CRUD REST resource for suppliers, built on axum.
//!
//! ## Routes
//!
//! | Method | Path              | Success              | Failure            |
//! |--------|-------------------|----------------------|--------------------|
//! | GET    | `/suppliers`      | 200, all suppliers   |                    |
//! | GET    | `/suppliers/{id}` | 200, supplier        | 404                |
//! | POST   | `/suppliers`      | 201, created         | 409 duplicate ID   |
//! | PUT    | `/suppliers/{id}` | 200, updated         | 404                |
//! | DELETE | `/suppliers/{id}` | 204                  | 404                |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use suppliers::prelude::*;
//!
//! let config = ServerConfig::load()?;
//! ServerBuilder::from_config(&config)
//!     .serve(&config.bind_address)
//!     .await?;
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        error::{EntityError, RequestError, StorageError, SupplierError, SupplierResult},
        model::{Address, Supplier, SupplierUpdate},
        service::SupplierService,
    };

    // === Storage ===
    pub use crate::storage::InMemorySupplierStore;

    // === Config ===
    pub use crate::config::ServerConfig;

    // === Server ===
    pub use crate::server::{AppState, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
}
