// ABOUTME: Main library entry point for the Gainstracker nutrition API
// ABOUTME: Provides nutrition metric calculations and user profile management over REST
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Gainstracker
//!
//! A nutrition tracking backend that computes body and energy metrics
//! (BMI, basal metabolic rate, daily energy expenditure, calorie goals,
//! and macronutrient splits) and manages user profiles in SQLite.
//!
//! ## Architecture
//!
//! - **Calculator**: Pure, side-effect-free metric functions
//! - **Routes**: Thin axum handlers over the calculator and database
//! - **Database**: SQLite persistence for user profiles
//! - **Config**: Environment configuration and formula coefficients
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use gainstracker::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Gainstracker configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Nutrition and energy metric calculation engine
pub mod calculator;

/// Configuration management (environment and formula coefficients)
pub mod config;

/// SQLite database layer for user profiles
pub mod database;

/// Application error types and `HTTP` error responses
pub mod errors;

/// Structured logging setup
pub mod logging;

/// `HTTP` middleware (CORS)
pub mod middleware;

/// Domain models and request payloads
pub mod models;

/// `HTTP` route handlers
pub mod routes;

/// `HTTP` server assembly and shared resources
pub mod server;
