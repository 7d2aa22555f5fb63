//! Domain entities.

pub mod book;
pub mod token;
pub mod user;

pub use book::Book;
pub use token::Claims;
pub use user::{Role, User};
