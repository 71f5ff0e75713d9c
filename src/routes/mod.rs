// ABOUTME: Route module organization for Gainstracker HTTP endpoints
// ABOUTME: Groups route definitions by domain with thin handlers delegating to the calculator and database
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP routes organized by domain
//!
//! Each domain module contains route definitions and thin handler
//! functions that delegate to the calculation engine or the database.

use serde::Serialize;

/// Nutrition and energy calculation routes
pub mod calculations;
/// Health check and readiness routes
pub mod health;
/// User profile CRUD routes
pub mod users;

pub use calculations::CalculationRoutes;
pub use health::HealthRoutes;
pub use users::UserRoutes;

/// Standard success envelope wrapping every API payload
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Always `true` for successful responses
    pub success: bool,
    /// Optional human-readable message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Response payload
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Wrap a payload in the success envelope
    pub const fn new(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data,
        }
    }

    /// Wrap a payload with an accompanying message
    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data,
        }
    }
}
