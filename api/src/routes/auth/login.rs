use actix_web::{http::header::AUTHORIZATION, web, HttpRequest, HttpResponse};
use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::dto::auth::LoginResponse;
use crate::handlers::error::handle_domain_error;
use crate::routes::AppState;

use shelf_core::errors::AuthError;
use shelf_core::repositories::{
    BookRepository, FavoriteRepository, PasswordVerifier, UserRepository,
};

/// Handler for POST /login
///
/// Credentials arrive Basic-style in the Authorization header as
/// `base64(username:password)`. On success the response carries the
/// initial session token together with the username and role.
///
/// # Errors
/// - 401 with a generic message for a missing/malformed header, unknown
///   user, or wrong password — indistinguishable on purpose
pub async fn login<U, B, F, P>(
    req: HttpRequest,
    state: web::Data<AppState<U, B, F, P>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    B: BookRepository + 'static,
    F: FavoriteRepository + 'static,
    P: PasswordVerifier + 'static,
{
    let (username, password) = match basic_credentials(&req) {
        Some(credentials) => credentials,
        None => return handle_domain_error(&AuthError::InvalidCredentials.into()),
    };

    match state.auth_service.login(&username, &password).await {
        Ok(outcome) => HttpResponse::Ok().json(LoginResponse {
            username: outcome.username,
            role: outcome.role,
            token: outcome.token,
        }),
        Err(error) => handle_domain_error(&error),
    }
}

/// Decodes `base64(username:password)` from the Authorization header
fn basic_credentials(req: &HttpRequest) -> Option<(String, String)> {
    let header = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let encoded = header.split_whitespace().last()?;
    let decoded = String::from_utf8(STANDARD.decode(encoded).ok()?).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    fn request_with_auth(value: &str) -> HttpRequest {
        TestRequest::default()
            .insert_header((AUTHORIZATION, value))
            .to_http_request()
    }

    #[test]
    fn test_basic_credentials_parsing() {
        // "admin:admin123"
        let req = request_with_auth("Basic YWRtaW46YWRtaW4xMjM=");
        assert_eq!(
            basic_credentials(&req),
            Some(("admin".to_string(), "admin123".to_string()))
        );
    }

    #[test]
    fn test_basic_credentials_rejects_garbage() {
        let req = request_with_auth("Basic !!!not-base64!!!");
        assert!(basic_credentials(&req).is_none());

        // No colon separator
        let req = request_with_auth("Basic YWRtaW4=");
        assert!(basic_credentials(&req).is_none());

        let req = TestRequest::default().to_http_request();
        assert!(basic_credentials(&req).is_none());
    }

    #[test]
    fn test_password_may_contain_colons() {
        // "admin:pa:ss"
        let req = request_with_auth("Basic YWRtaW46cGE6c3M=");
        assert_eq!(
            basic_credentials(&req),
            Some(("admin".to_string(), "pa:ss".to_string()))
        );
    }
}
