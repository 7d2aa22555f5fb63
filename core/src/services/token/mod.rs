//! Session token service: issue, verify, refresh, audience extraction.

mod service;

pub use service::TokenService;
