//! Route handlers.

pub mod auth;
pub mod books;
pub mod favorites;
pub mod users;

use std::sync::Arc;

use shelf_core::repositories::{
    BookRepository, FavoriteRepository, PasswordVerifier, UserRepository,
};
use shelf_core::services::auth::AuthService;
use shelf_core::services::token::TokenService;

/// Application state that holds shared services and stores
pub struct AppState<U, B, F, P>
where
    U: UserRepository,
    B: BookRepository,
    F: FavoriteRepository,
    P: PasswordVerifier,
{
    pub auth_service: Arc<AuthService<U, P>>,
    pub token_service: Arc<TokenService>,
    pub users: Arc<U>,
    pub books: Arc<B>,
    pub favorites: Arc<F>,
}
