//! Request and response DTOs.

pub mod auth;
pub mod book;
pub mod user;

pub use auth::{LoginResponse, LogoutResponse, MessageTokenResponse};
pub use book::{AddBookRequest, BooksResponse, FavoritesResponse};
pub use user::{UserSummary, UsersResponse};
