//! Store implementations.

mod memory;

pub use memory::{seed_stores, MemoryBookStore, MemoryFavoriteStore, MemoryUserStore};
