use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::{info, warn};
use std::env;
use std::sync::Arc;

use shelf_api::app::create_app;
use shelf_api::routes::AppState;
use shelf_core::services::auth::AuthService;
use shelf_core::services::token::TokenService;
use shelf_infra::{seed_stores, BcryptVerifier};
use shelf_shared::config::{JwtConfig, ServerConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Bookshelf API server");

    // Signing secret is loaded once here and read-only afterwards
    let jwt_config = load_jwt_config();
    if jwt_config.is_using_default_secret() {
        warn!("JWT_SECRET not set; using the default secret (development only)");
    }

    let server_config = load_server_config();

    // Seeded in-memory collaborators
    let (users, books, favorites) =
        seed_stores().map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    let token_service = Arc::new(TokenService::new(&jwt_config));
    let auth_service = Arc::new(AuthService::new(
        users.clone(),
        Arc::new(BcryptVerifier),
        token_service.clone(),
    ));

    let app_state = web::Data::new(AppState {
        auth_service,
        token_service,
        users,
        books,
        favorites,
    });

    let bind_address = server_config.bind_address();
    info!("Listening on {bind_address}");

    HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}

fn load_jwt_config() -> JwtConfig {
    let mut config = match env::var("JWT_SECRET") {
        Ok(secret) => JwtConfig::new(secret),
        Err(_) => JwtConfig::default(),
    };

    if let Ok(minutes) = env::var("TOKEN_EXPIRY_MINUTES") {
        match minutes.parse::<i64>() {
            Ok(minutes) if minutes > 0 => config = config.with_expiry_minutes(minutes),
            _ => warn!("Ignoring invalid TOKEN_EXPIRY_MINUTES value: {minutes}"),
        }
    }

    config
}

fn load_server_config() -> ServerConfig {
    let default = ServerConfig::default();
    let host = env::var("SERVER_HOST").unwrap_or(default.host);
    let port = env::var("SERVER_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(default.port);
    ServerConfig::new(host, port)
}
