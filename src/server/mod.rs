//! Server module for building the suppliers HTTP server
//!
//! Provides the supplier handlers, the router and a `ServerBuilder` that
//! wires a store into them.

pub mod builder;
pub mod handlers;
pub mod router;

pub use builder::ServerBuilder;
pub use handlers::AppState;
pub use router::{build_health_routes, build_supplier_routes};
