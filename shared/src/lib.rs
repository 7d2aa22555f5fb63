//! Shared configuration and common types for the Bookshelf backend.
//!
//! This crate provides the pieces every other layer consumes:
//! - Configuration types (JWT signing, HTTP server)
//! - The generic error response body returned by the API

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{JwtConfig, ServerConfig};
pub use types::response::ErrorResponse;
