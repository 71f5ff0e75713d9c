// ABOUTME: Data models for the Gainstracker API
// ABOUTME: Re-exports the user profile record and request payload types
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Data models

/// User profile record and request payload
pub mod user;

pub use user::{User, UserProfile};
