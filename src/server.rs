// ABOUTME: HTTP server assembly wiring routes, middleware, and shared resources
// ABOUTME: Provides the resource container, router construction, and the serve loop
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP server assembly
//!
//! [`ServerResources`] is the dependency-injection container shared by all
//! handlers. [`HttpServer::router`] builds the full application router,
//! which integration tests drive directly without binding a socket.

use crate::config::environment::ServerConfig;
use crate::config::NutritionConfig;
use crate::database::Database;
use crate::middleware::setup_cors;
use crate::routes::{ApiResponse, CalculationRoutes, HealthRoutes, UserRoutes};
use anyhow::{Context, Result};
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Centralized resource container for dependency injection
///
/// Holds the shared database pool and configuration so handlers never
/// recreate expensive objects.
#[derive(Clone)]
pub struct ServerResources {
    pub database: Database,
    pub config: Arc<ServerConfig>,
    pub nutrition: Arc<NutritionConfig>,
}

impl ServerResources {
    /// Create new server resources with proper Arc sharing
    pub fn new(database: Database, config: ServerConfig) -> Self {
        Self {
            database,
            config: Arc::new(config),
            nutrition: Arc::new(NutritionConfig::default()),
        }
    }
}

/// The Gainstracker HTTP server
pub struct HttpServer {
    resources: Arc<ServerResources>,
}

impl HttpServer {
    /// Create a server from shared resources
    pub fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Build the full application router
    ///
    /// Exposed separately so integration tests can exercise the complete
    /// middleware and routing stack in-process.
    pub fn router(&self) -> Router {
        let resources = &self.resources;

        Router::new()
            .route("/", get(Self::index_handler))
            .merge(HealthRoutes::routes(resources.clone()))
            .merge(CalculationRoutes::routes(resources.clone()))
            .merge(UserRoutes::routes(resources.clone()))
            .layer(TraceLayer::new_for_http())
            .layer(setup_cors(&resources.config))
    }

    /// Bind the configured port and serve until the task is cancelled
    ///
    /// # Errors
    ///
    /// Returns an error when the port cannot be bound or the accept loop fails.
    pub async fn run(self, port: u16) -> Result<()> {
        let router = self.router();
        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind HTTP server to {addr}"))?;

        tracing::info!("HTTP server listening on {addr}");
        axum::serve(listener, router)
            .await
            .context("HTTP server terminated unexpectedly")
    }

    async fn index_handler() -> Json<ApiResponse<serde_json::Value>> {
        Json(ApiResponse::new(serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "status": "running",
            "endpoints": {
                "health": "/api/health",
                "ready": "/api/ready",
                "calculations": "/api/calculations",
                "users": "/api/users",
            },
        })))
    }
}
