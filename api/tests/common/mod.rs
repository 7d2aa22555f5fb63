//! Shared helpers for the API integration tests.

#![allow(dead_code)]

use actix_web::web;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::sync::Arc;

use shelf_api::routes::AppState;
use shelf_core::services::auth::AuthService;
use shelf_core::services::token::TokenService;
use shelf_infra::{
    seed_stores, BcryptVerifier, MemoryBookStore, MemoryFavoriteStore, MemoryUserStore,
};
use shelf_shared::config::JwtConfig;

/// Signing secret shared by the app under test and hand-built tokens
pub const TEST_SECRET: &str = "integration-test-secret";

pub type TestState = AppState<MemoryUserStore, MemoryBookStore, MemoryFavoriteStore, BcryptVerifier>;

/// App state over freshly seeded stores with the test signing secret
pub fn test_state() -> web::Data<TestState> {
    let jwt_config = JwtConfig::new(TEST_SECRET);
    let (users, books, favorites) = seed_stores().expect("seeding stores failed");

    let token_service = Arc::new(TokenService::new(&jwt_config));
    let auth_service = Arc::new(AuthService::new(
        users.clone(),
        Arc::new(BcryptVerifier),
        token_service.clone(),
    ));

    web::Data::new(AppState {
        auth_service,
        token_service,
        users,
        books,
        favorites,
    })
}

/// App state with seeded users but a book inventory of the caller's choice
pub fn state_with_books(books: Vec<shelf_core::domain::entities::Book>) -> web::Data<TestState> {
    let jwt_config = JwtConfig::new(TEST_SECRET);
    let (users, _, favorites) = seed_stores().expect("seeding stores failed");
    let books = Arc::new(MemoryBookStore::new(books));

    let token_service = Arc::new(TokenService::new(&jwt_config));
    let auth_service = Arc::new(AuthService::new(
        users.clone(),
        Arc::new(BcryptVerifier),
        token_service.clone(),
    ));

    web::Data::new(AppState {
        auth_service,
        token_service,
        users,
        books,
        favorites,
    })
}

/// Authorization header value for POST /login
pub fn basic_auth(username: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
}

/// Authorization header value for protected endpoints
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
