//! # Bookshelf Core
//!
//! Core business logic and domain layer for the Bookshelf backend.
//! This crate contains domain entities, the session token service, the
//! login service, repository interfaces, and the error taxonomy that the
//! API and infrastructure layers build on.

pub mod capabilities;
pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;
