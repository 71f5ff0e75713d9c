// ABOUTME: HTTP middleware for cross-origin request handling
// ABOUTME: Provides CORS layer construction from server configuration

pub mod cors;

pub use cors::setup_cors;
