//! Domain error to HTTP response mapping.

use actix_web::{http::StatusCode, HttpResponse};

use shelf_core::errors::{DomainError, ErrorResponse};

/// Maps a domain error to an HTTP response with a JSON body
///
/// Every failure is handled here per-request; nothing propagates far
/// enough to crash the process, and no retry is attempted — the client
/// decides what to do with the status code.
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let status = match error {
        DomainError::Validation { .. } => StatusCode::BAD_REQUEST,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Forbidden { .. } => StatusCode::FORBIDDEN,
        DomainError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        DomainError::Auth(_) => StatusCode::UNAUTHORIZED,
        DomainError::Token(_) => StatusCode::UNAUTHORIZED,
    };

    if status.is_server_error() {
        log::error!("Domain error: {error:?}");
    } else {
        log::warn!("Domain error: {error:?}");
    }

    HttpResponse::build(status).json(ErrorResponse::from(error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_core::errors::{AuthError, TokenError};

    #[test]
    fn test_auth_error_maps_to_401() {
        let response = handle_domain_error(&AuthError::InvalidCredentials.into());
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_token_expired_maps_to_401() {
        let response = handle_domain_error(&TokenError::TokenExpired.into());
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_store_error_maps_to_500() {
        let error = DomainError::Store {
            message: "unreachable".to_string(),
        };
        let response = handle_domain_error(&error);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
