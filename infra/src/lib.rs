//! # Bookshelf Infrastructure
//!
//! Concrete implementations of the core repository traits: in-memory
//! seeded stores and the bcrypt password verifier.

pub mod password;
pub mod stores;

pub use password::BcryptVerifier;
pub use stores::{seed_stores, MemoryBookStore, MemoryFavoriteStore, MemoryUserStore};
