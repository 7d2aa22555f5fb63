//! Repository interfaces consumed by the core services.
//!
//! Each trait is the abstraction boundary to an external collaborator
//! (data store or password hasher). In-memory mocks live alongside the
//! traits for use in unit tests.

mod book_repository;
mod favorite_repository;
mod password;
mod user_repository;

pub use book_repository::{BookRepository, MockBookRepository};
pub use favorite_repository::{FavoriteRepository, MockFavoriteRepository};
pub use password::{MockPasswordVerifier, PasswordVerifier};
pub use user_repository::{MockUserRepository, UserRepository};
