use actix_web::{
    cookie::{time::OffsetDateTime, Cookie},
    HttpResponse,
};

use crate::dto::auth::LogoutResponse;
use crate::middleware::auth::AuthContext;

/// Handler for GET /logout
///
/// Clears the client-side token cookie. There is no server-side
/// revocation list: the presented bearer token stays valid until its
/// natural expiry, a known limitation of the session design.
pub async fn logout(auth: AuthContext) -> HttpResponse {
    log::info!("Subject {} logged out", auth.subject);

    let mut cookie = Cookie::new("token", "");
    cookie.set_path("/");
    cookie.set_expires(OffsetDateTime::UNIX_EPOCH);

    HttpResponse::Ok().cookie(cookie).json(LogoutResponse {
        message: "Cookies cleared".to_string(),
    })
}
