//! Main token service implementation

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use shelf_shared::config::JwtConfig;

use crate::domain::entities::token::Claims;
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};

/// Service for managing session JWTs
///
/// All operations are stateless over the configuration captured at
/// construction; the signing secret is loaded once and never mutated, so
/// a single instance is safe to share across concurrent requests.
pub struct TokenService {
    ttl_seconds: i64,
    issuer: String,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service from the JWT configuration
    pub fn new(config: &JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.validate_exp = true;
        // The aud claim carries per-user capabilities, not a fixed API
        // audience, so it is not validated here.
        validation.validate_aud = false;
        // Expiry is exact: valid strictly while now < exp.
        validation.leeway = 0;

        Self {
            ttl_seconds: config.token_expiry,
            issuer: config.issuer.clone(),
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues a token for a user after their password has been verified
    ///
    /// Stamps `iat = now`, `exp = now + TTL`, and copies the user's
    /// capability set into the audience claim.
    pub fn issue(&self, user: &User) -> Result<String, DomainError> {
        let claims = Claims::new(
            &user.username,
            user.audience.clone(),
            self.ttl_seconds,
            &self.issuer,
        );
        tracing::debug!(subject = %user.username, "issuing session token");
        self.encode_jwt(&claims)
    }

    /// Verifies a token and returns its claims
    ///
    /// Signature integrity is checked before expiry: a tampered or
    /// malformed token fails with `InvalidToken`, an outdated one with
    /// `TokenExpired`. Never fails for business-logic reasons.
    pub fn verify(&self, token: &str) -> Result<Claims, DomainError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                if e.kind() == &jsonwebtoken::errors::ErrorKind::ExpiredSignature {
                    DomainError::Token(TokenError::TokenExpired)
                } else {
                    DomainError::Token(TokenError::InvalidToken)
                }
            })?;

        Ok(token_data.claims)
    }

    /// Re-issues a token for the same subject and audience
    ///
    /// Called after every successful protected operation so sessions
    /// extend on activity. Trusts that `verify` already gated the request
    /// and does not re-check the password; the signature is still
    /// enforced so only tokens this service minted can be refreshed. The
    /// audience set is carried over exactly, neither escalated nor
    /// dropped.
    pub fn refresh(&self, token: &str) -> Result<String, DomainError> {
        // Expiry is not re-checked here; the request was already gated.
        let mut validation = self.validation.clone();
        validation.validate_exp = false;
        validation.required_spec_claims.remove("exp");

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|_| DomainError::Token(TokenError::InvalidToken))?;

        let mut claims = Claims::new(
            token_data.claims.sub,
            token_data.claims.aud,
            self.ttl_seconds,
            &self.issuer,
        );
        // Timestamps are second-granular; a refresh landing in the same
        // second as issuance must still move iat forward.
        if claims.iat <= token_data.claims.iat {
            claims.iat = token_data.claims.iat + 1;
            claims.exp = claims.iat + self.ttl_seconds;
        }
        self.encode_jwt(&claims)
    }

    /// Extracts the audience claim without verifying the signature
    ///
    /// Only for authorization decisions inside handlers that already ran
    /// `verify`; the decoded claims still reject missing fields.
    pub fn audience_of(&self, token: &str) -> Result<Vec<String>, DomainError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        let token_data = decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)
            .map_err(|_| DomainError::Token(TokenError::InvalidToken))?;

        Ok(token_data.claims.aud)
    }

    /// Encodes claims into a JWT
    fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(Algorithm::HS256);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }
}
