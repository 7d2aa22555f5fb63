//! Authentication service implementation

use std::sync::Arc;

use crate::domain::entities::user::Role;
use crate::errors::{AuthError, DomainError};
use crate::repositories::{PasswordVerifier, UserRepository};
use crate::services::token::TokenService;

/// Result of a successful login
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub username: String,
    pub role: Role,
    pub token: String,
}

/// Service handling the login flow
///
/// Generic over the user store and the password verifier so tests can
/// swap in mocks; the token service is concrete since it is pure
/// computation over the signing configuration.
pub struct AuthService<U, P>
where
    U: UserRepository,
    P: PasswordVerifier,
{
    users: Arc<U>,
    verifier: Arc<P>,
    tokens: Arc<TokenService>,
}

impl<U, P> AuthService<U, P>
where
    U: UserRepository,
    P: PasswordVerifier,
{
    pub fn new(users: Arc<U>, verifier: Arc<P>, tokens: Arc<TokenService>) -> Self {
        Self {
            users,
            verifier,
            tokens,
        }
    }

    /// Verifies credentials and issues the initial session token
    ///
    /// Unknown user and wrong password collapse into the same
    /// `InvalidCredentials` error so responses cannot be used to
    /// enumerate usernames.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, DomainError> {
        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self.verifier.verify(password, &user.password_hash).await? {
            tracing::warn!(subject = %username, "login rejected: password mismatch");
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.tokens.issue(&user)?;
        tracing::info!(subject = %username, role = user.role.as_str(), "login succeeded");

        Ok(LoginOutcome {
            username: user.username,
            role: user.role,
            token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::SHOW_USERS;
    use crate::domain::entities::user::User;
    use crate::repositories::{MockPasswordVerifier, MockUserRepository};
    use shelf_shared::config::JwtConfig;

    async fn service_with_user(user: User) -> AuthService<MockUserRepository, MockPasswordVerifier> {
        let users = MockUserRepository::new();
        users.insert(user).await;
        AuthService::new(
            Arc::new(users),
            Arc::new(MockPasswordVerifier),
            Arc::new(TokenService::new(&JwtConfig::new("unit-test-secret"))),
        )
    }

    #[tokio::test]
    async fn test_login_with_correct_credentials() {
        let user = User::new("alice", "secret", Role::Admin, vec![SHOW_USERS.to_string()]);
        let service = service_with_user(user).await;

        let outcome = service.login("alice", "secret").await.unwrap();
        assert_eq!(outcome.username, "alice");
        assert_eq!(outcome.role, Role::Admin);
        assert!(!outcome.token.is_empty());

        // Issued token carries the stored audience
        let tokens = TokenService::new(&JwtConfig::new("unit-test-secret"));
        let claims = tokens.verify(&outcome.token).unwrap();
        assert_eq!(claims.aud, vec![SHOW_USERS.to_string()]);
    }

    #[tokio::test]
    async fn test_login_with_wrong_password() {
        let user = User::new("alice", "secret", Role::Member, vec![]);
        let service = service_with_user(user).await;

        let err = service.login("alice", "nope").await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Auth(AuthError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_login_with_unknown_user() {
        let user = User::new("alice", "secret", Role::Member, vec![]);
        let service = service_with_user(user).await;

        let err = service.login("mallory", "secret").await.unwrap_err();
        // Indistinguishable from a wrong password
        assert!(matches!(
            err,
            DomainError::Auth(AuthError::InvalidCredentials)
        ));
    }
}
