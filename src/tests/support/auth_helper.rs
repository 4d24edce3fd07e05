use std::sync::Arc;

use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AUTH_TOKEN_HEADER;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;

pub fn test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        issuer: "devconnector".to_string(),
        secret_key: "test_secret_key_for_testing_only_0123456789".to_string(),
        access_token_expiry: 3600,
    })
}

/// Shape the `AuthenticatedUser` extractor looks up in app data.
pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(test_jwt_service())
}

pub fn token_for(user_id: Uuid) -> String {
    test_jwt_service()
        .generate_access_token(user_id)
        .expect("test token should encode")
}

/// Header pair ready for `insert_header`.
pub fn bearer(user_id: Uuid) -> (&'static str, String) {
    (AUTH_TOKEN_HEADER, token_for(user_id))
}
