//! Application factory
//!
//! Wires middleware, routes, and shared state into the Actix-web
//! application. Kept generic over the repository traits so integration
//! tests can assemble the app with whatever stores they need.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use crate::middleware::{auth::JwtAuth, cors::create_cors};
use crate::routes::auth::{login::login, logout::logout};
use crate::routes::books::{add_book, list_books};
use crate::routes::favorites::list_favorites;
use crate::routes::users::list_users;
use crate::routes::AppState;

use shelf_core::errors::ErrorResponse;
use shelf_core::repositories::{
    BookRepository, FavoriteRepository, PasswordVerifier, UserRepository,
};

/// Create and configure the application with all dependencies
pub fn create_app<U, B, F, P>(
    app_state: web::Data<AppState<U, B, F, P>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    B: BookRepository + 'static,
    F: FavoriteRepository + 'static,
    P: PasswordVerifier + 'static,
{
    let cors = create_cors();
    let tokens = app_state.token_service.clone();

    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // Login is the only unauthenticated endpoint
        .route("/login", web::post().to(login::<U, B, F, P>))
        // Protected endpoints, each behind the JWT middleware
        .route(
            "/users",
            web::get()
                .to(list_users::<U, B, F, P>)
                .wrap(JwtAuth::new(tokens.clone())),
        )
        .route(
            "/books",
            web::get()
                .to(list_books::<U, B, F, P>)
                .wrap(JwtAuth::new(tokens.clone())),
        )
        .route(
            "/book",
            web::post()
                .to(add_book::<U, B, F, P>)
                .wrap(JwtAuth::new(tokens.clone())),
        )
        .route(
            "/favorite",
            web::get()
                .to(list_favorites::<U, B, F, P>)
                .wrap(JwtAuth::new(tokens.clone())),
        )
        .route(
            "/logout",
            web::get().to(logout).wrap(JwtAuth::new(tokens)),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "bookshelf-api",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        "not_found",
        "The requested resource was not found",
    ))
}
