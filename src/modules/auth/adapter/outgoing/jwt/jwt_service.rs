use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use std::fmt;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider,
};

use super::jwt_config::JwtConfig;

pub const ACCESS_TOKEN_TYPE: &str = "access";

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtService")
            .field("issuer", &self.config.issuer)
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    fn generate_token(
        &self,
        user_id: Uuid,
        token_type: &str,
        expiry_seconds: i64,
    ) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(expiry_seconds);

        let claims = TokenClaims {
            sub: user_id,
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            token_type: token_type.to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }
}

impl TokenProvider for JwtTokenService {
    fn generate_access_token(&self, user_id: Uuid) -> Result<String, TokenError> {
        self.generate_token(user_id, ACCESS_TOKEN_TYPE, self.config.access_token_expiry)
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;

        let decoded =
            decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
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

    fn config(secret: &str, expiry: i64) -> JwtConfig {
        JwtConfig {
            secret_key: secret.to_string(),
            issuer: "test_issuer".to_string(),
            access_token_expiry: expiry,
        }
    }

    fn create_test_jwt_service() -> JwtTokenService {
        JwtTokenService::new(config("test_secret_key_for_testing_purposes_only", 3600))
    }

    #[test]
    fn test_generate_and_verify_access_token() {
        let service = create_test_jwt_service();
        let user_id = Uuid::new_v4();

        let token = service
            .generate_access_token(user_id)
            .expect("Token should be generated");

        let claims = service.verify_token(&token).expect("Token should be valid");
        assert_eq!(claims.sub, user_id, "User ID should match");
        assert_eq!(claims.token_type, ACCESS_TOKEN_TYPE);
    }

    #[test]
    fn test_invalid_token_verification() {
        let service = create_test_jwt_service();

        let result = service.verify_token("invalid.jwt.token");

        assert!(matches!(result, Err(TokenError::MalformedToken)));
    }

    #[test]
    fn test_token_with_invalid_json() {
        use base64::{engine::general_purpose, Engine as _};
        let service = create_test_jwt_service();

        let header = general_purpose::STANDARD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = general_purpose::STANDARD.encode("not valid json");
        let invalid_token = format!("{}.{}.fakesignature", header, payload);

        assert!(service.verify_token(&invalid_token).is_err());
    }

    #[test]
    fn test_expired_token() {
        // Expired beyond the 30s leeway
        let service = JwtTokenService::new(config("test_secret_key_for_testing_purposes_only", -35));

        let token = service.generate_access_token(Uuid::new_v4()).unwrap();
        let result = service.verify_token(&token);

        assert!(matches!(result, Err(TokenError::TokenExpired)));
    }

    #[test]
    fn test_invalid_signature() {
        let service = create_test_jwt_service();
        let token = service.generate_access_token(Uuid::new_v4()).unwrap();

        let other = JwtTokenService::new(config("a_completely_different_secret_value_here", 3600));

        assert!(matches!(
            other.verify_token(&token),
            Err(TokenError::InvalidSignature)
        ));
    }

    #[test]
    fn test_tampered_token_fails() {
        let service = create_test_jwt_service();
        let mut token = service.generate_access_token(Uuid::new_v4()).unwrap();
        token.push('x');

        assert!(service.verify_token(&token).is_err());
    }

    #[test]
    fn test_token_expiry_is_in_future() {
        let service = create_test_jwt_service();

        let token = service.generate_access_token(Uuid::new_v4()).unwrap();
        let claims = service.verify_token(&token).unwrap();

        let now = Utc::now().timestamp();
        assert!(claims.exp > now, "Expiry should be in the future");
        assert!(claims.iat <= now);
        assert!(claims.nbf <= now);
    }

    #[test]
    fn test_jwt_error_display() {
        assert_eq!(TokenError::TokenExpired.to_string(), "Token has expired");
        assert_eq!(
            TokenError::InvalidTokenType("access".to_string()).to_string(),
            "Invalid token type, expected: access"
        );
        assert_eq!(TokenError::MalformedToken.to_string(), "Malformed token");
    }
}
