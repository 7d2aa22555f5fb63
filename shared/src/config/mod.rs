//! Configuration types loaded once at process startup.

mod auth;
mod server;

pub use auth::JwtConfig;
pub use server::ServerConfig;
