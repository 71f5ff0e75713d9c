// ABOUTME: Health check route handlers for service monitoring
// ABOUTME: Provides health and readiness endpoints for load balancers and probes
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Health check routes for service monitoring

use crate::server::ServerResources;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(state: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/health", get(Self::health_handler))
            .route("/api/ready", get(Self::ready_handler))
            .with_state(state)
    }

    async fn health_handler() -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "status": "healthy",
            "service": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }

    async fn ready_handler(State(state): State<Arc<ServerResources>>) -> Json<serde_json::Value> {
        // Readiness includes a live database round trip
        let database_ok = sqlx::query_scalar::<_, i64>("SELECT 1")
            .fetch_one(state.database.pool())
            .await
            .is_ok();

        Json(serde_json::json!({
            "status": if database_ok { "ready" } else { "degraded" },
            "database": if database_ok { "connected" } else { "unreachable" },
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }
}
