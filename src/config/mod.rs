// ABOUTME: Configuration management module for centralized server settings and parameters
// ABOUTME: Handles environment configs and nutrition formula coefficients
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration module for the Gainstracker API
//!
//! - **Environment**: server configuration from environment variables
//! - **Nutrition**: formula coefficients and lookup tables for the
//!   metric calculator

/// Environment and server configuration
pub mod environment;
/// Nutrition formula coefficients and multiplier tables
pub mod nutrition;

pub use environment::ServerConfig;
pub use nutrition::NutritionConfig;
