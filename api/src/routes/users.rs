use actix_web::{web, HttpResponse};

use crate::dto::auth::MessageTokenResponse;
use crate::dto::user::{UserSummary, UsersResponse};
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

use shelf_core::capabilities::SHOW_USERS;
use shelf_core::repositories::{
    BookRepository, FavoriteRepository, PasswordVerifier, UserRepository,
};

/// Handler for GET /users
///
/// Requires the `SHOW_USERS` capability in the token audience. A
/// successful listing refreshes the session token; failure paths echo
/// the presented token back without minting a new one.
///
/// # Errors
/// - 403 `{message, token}` when the capability is missing
/// - 500 `{users: [], token}` when the store is empty or unreachable
pub async fn list_users<U, B, F, P>(
    state: web::Data<AppState<U, B, F, P>>,
    auth: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    B: BookRepository + 'static,
    F: FavoriteRepository + 'static,
    P: PasswordVerifier + 'static,
{
    let audience = match state.token_service.audience_of(&auth.token) {
        Ok(audience) => audience,
        Err(error) => return handle_domain_error(&error),
    };

    if !audience.iter().any(|c| c == SHOW_USERS) {
        log::warn!("Subject {} denied access to user list", auth.subject);
        return HttpResponse::Forbidden().json(MessageTokenResponse {
            message: "Not authorized to view users".to_string(),
            token: auth.token,
        });
    }

    match state.users.find_all().await {
        Ok(users) if !users.is_empty() => {
            let token = match state.token_service.refresh(&auth.token) {
                Ok(token) => token,
                Err(error) => return handle_domain_error(&error),
            };
            HttpResponse::Ok().json(UsersResponse {
                users: users.iter().map(UserSummary::from).collect(),
                token,
            })
        }
        Ok(_) => HttpResponse::InternalServerError().json(UsersResponse {
            users: vec![],
            token: auth.token,
        }),
        Err(error) => {
            log::error!("User store failure: {error}");
            HttpResponse::InternalServerError().json(UsersResponse {
                users: vec![],
                token: auth.token,
            })
        }
    }
}
