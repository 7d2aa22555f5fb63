//! Login service: credential check and initial token issue.

mod service;

pub use service::{AuthService, LoginOutcome};
