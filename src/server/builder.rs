//! ServerBuilder for fluent API to build the suppliers HTTP server

use super::handlers::AppState;
use super::router::{build_health_routes, build_supplier_routes};
use crate::config::ServerConfig;
use crate::core::service::SupplierService;
use crate::storage::InMemorySupplierStore;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Builder for the suppliers HTTP server
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_store(InMemorySupplierStore::with_seed(ServerConfig::default_seed()))
///     .build()?;
/// ```
pub struct ServerBuilder {
    store: Option<Arc<dyn SupplierService>>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            store: None,
            custom_routes: Vec::new(),
        }
    }

    /// Builder with an in-memory store seeded from `config`
    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new().with_store(InMemorySupplierStore::with_seed(config.seed.clone()))
    }

    /// Set the supplier store (required)
    pub fn with_store(mut self, store: impl SupplierService + 'static) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    /// Set an already shared supplier store
    pub fn with_shared_store(mut self, store: Arc<dyn SupplierService>) -> Self {
        self.store = Some(store);
        self
    }

    /// Add routes outside the supplier resource
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the final router
    ///
    /// Merges health routes, supplier routes and any custom routes, wrapped
    /// in a request tracing layer.
    pub fn build(self) -> Result<Router> {
        let store = self
            .store
            .ok_or_else(|| anyhow::anyhow!("Supplier store is required. Call .with_store()"))?;

        let mut app = build_health_routes().merge(build_supplier_routes(AppState { store }));

        for custom_router in self.custom_routes {
            app = app.merge(custom_router);
        }

        Ok(app.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http())))
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds to `addr` and serves until SIGTERM or Ctrl+C.
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_without_store_fails() {
        let result = ServerBuilder::new().build();
        assert!(result.is_err());
        let err = result.err().unwrap();
        assert!(err.to_string().contains("store is required"));
    }

    #[test]
    fn test_build_with_store() {
        let result = ServerBuilder::new()
            .with_store(InMemorySupplierStore::new())
            .build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_from_config_builds() {
        let result = ServerBuilder::from_config(&ServerConfig::default()).build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_build_with_custom_routes() {
        let custom = Router::new().route("/custom", axum::routing::get(|| async { "ok" }));
        let result = ServerBuilder::new()
            .with_store(InMemorySupplierStore::new())
            .with_custom_routes(custom)
            .build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_build_with_shared_store() {
        let store: Arc<dyn SupplierService> = Arc::new(InMemorySupplierStore::new());
        let result = ServerBuilder::new().with_shared_store(store).build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_default_has_no_store() {
        assert!(ServerBuilder::default().build().is_err());
    }
}
