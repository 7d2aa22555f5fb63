use actix_web::{web, HttpResponse};

use crate::dto::book::FavoritesResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

use shelf_core::repositories::{
    BookRepository, FavoriteRepository, PasswordVerifier, UserRepository,
};

/// Handler for GET /favorite
///
/// Returns the verified subject's favorite books; a subject with none
/// gets an empty list. Refreshes the session token on success.
pub async fn list_favorites<U, B, F, P>(
    state: web::Data<AppState<U, B, F, P>>,
    auth: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    B: BookRepository + 'static,
    F: FavoriteRepository + 'static,
    P: PasswordVerifier + 'static,
{
    match state.favorites.find_for_user(&auth.subject).await {
        Ok(favorites) => {
            let token = match state.token_service.refresh(&auth.token) {
                Ok(token) => token,
                Err(error) => return handle_domain_error(&error),
            };
            HttpResponse::Ok().json(FavoritesResponse { favorites, token })
        }
        Err(error) => handle_domain_error(&error),
    }
}
