use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use std::fmt;
use tracing;

use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider,
};

use super::jwt_config::JwtConfig;

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("issuer", &self.config.issuer)
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            decoding_key,
        }
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = self.config.leeway_seconds;
        validation.validate_nbf = true;
        if let Some(issuer) = &self.config.issuer {
            validation.set_issuer(&[issuer]);
        }
        validation
    }
}

impl TokenProvider for JwtTokenService {
    /// Verify and decode a token
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let decoded = decode::<TokenClaims>(token, &self.decoding_key, &self.validation())
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: Token expired");
                        TokenError::TokenExpired
                    }
                    ErrorKind::ImmatureSignature => {
                        tracing::warn!("Token verification failed: Token not yet valid");
                        TokenError::TokenNotYetValid
                    }
                    ErrorKind::InvalidIssuer => {
                        tracing::warn!("Token verification failed: Unexpected issuer");
                        TokenError::InvalidIssuer
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Security alert: Invalid token signature detected");
                        TokenError::InvalidSignature
                    }
                    ErrorKind::InvalidToken | ErrorKind::InvalidAlgorithm => {
                        tracing::error!("Security alert: Malformed or invalid algorithm token");
                        TokenError::MalformedToken
                    }
                    _ => {
                        tracing::warn!("Token verification failed: Malformed token");
                        TokenError::MalformedToken
                    }
                }
            })?;

        Ok(decoded.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde::Serialize;
    use uuid::Uuid;

    const SECRET: &str = "FAKE_JWT_SECRET_DO_NOT_USE_IN_PRODUCTION";

    #[derive(Serialize)]
    struct IssuedClaims {
        sub: Uuid,
        exp: i64,
        iat: i64,
        nbf: i64,
        token_type: String,
        is_verified: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        iss: Option<String>,
    }

    fn service(issuer: Option<&str>) -> JwtTokenService {
        JwtTokenService::new(JwtConfig {
            secret_key: SECRET.to_string(),
            issuer: issuer.map(str::to_string),
            leeway_seconds: 0,
        })
    }

    fn issue(secret: &str, user_id: Uuid, expires_in: Duration, iss: Option<&str>) -> String {
        let now = Utc::now();
        let claims = IssuedClaims {
            sub: user_id,
            exp: (now + expires_in).timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            token_type: "access".to_string(),
            is_verified: true,
            iss: iss.map(str::to_string),
        };
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_verify_valid_access_token() {
        let user_id = Uuid::new_v4();
        let token = issue(SECRET, user_id, Duration::hours(1), None);

        let claims = service(None).verify_token(&token).unwrap();

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.token_type, "access");
        assert!(claims.is_verified);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let token = issue(SECRET, Uuid::new_v4(), Duration::hours(-1), None);

        let result = service(None).verify_token(&token);

        assert!(matches!(result.unwrap_err(), TokenError::TokenExpired));
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let token = issue(
            "ANOTHER_SECRET_THAT_IS_LONG_ENOUGH_TOO",
            Uuid::new_v4(),
            Duration::hours(1),
            None,
        );

        let result = service(None).verify_token(&token);

        assert!(matches!(result.unwrap_err(), TokenError::InvalidSignature));
    }

    #[test]
    fn test_issuer_is_enforced_when_configured() {
        let token = issue(SECRET, Uuid::new_v4(), Duration::hours(1), Some("someone-else"));

        let result = service(Some("storages")).verify_token(&token);

        assert!(matches!(result.unwrap_err(), TokenError::InvalidIssuer));
    }

    #[test]
    fn test_matching_issuer_is_accepted() {
        let token = issue(SECRET, Uuid::new_v4(), Duration::hours(1), Some("storages"));

        assert!(service(Some("storages")).verify_token(&token).is_ok());
    }

    #[test]
    fn test_garbage_token_is_malformed() {
        let result = service(None).verify_token("invalid.jwt.token");

        assert!(matches!(result.unwrap_err(), TokenError::MalformedToken));
    }
}
