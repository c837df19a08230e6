//! Core module containing the supplier model, errors and service trait

pub mod error;
pub mod model;
pub mod service;

pub use error::{
    ConfigError, EntityError, ErrorResponse, RequestError, StorageError, SupplierError,
    SupplierResult,
};
pub use model::{Address, Supplier, SupplierUpdate};
pub use service::SupplierService;
