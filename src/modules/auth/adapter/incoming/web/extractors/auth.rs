use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::auth::adapter::outgoing::jwt::ACCESS_TOKEN_TYPE;
use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::shared::api::ApiResponse;

pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// The caller proven by a valid access token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let jwt_service = match req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
        {
            Some(service) => service,
            None => {
                tracing::error!("Token provider is not registered as app data");
                return ready(Err(create_api_error(ApiResponse::internal_error())));
            }
        };

        let token = match extract_token(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "No token, authorization denied",
                ))));
            }
        };

        match jwt_service.verify_token(&token) {
            Ok(claims) if claims.token_type == ACCESS_TOKEN_TYPE => ready(Ok(AuthenticatedUser {
                user_id: UserId::from(claims.sub),
            })),
            Ok(claims) => {
                tracing::warn!(token_type = %claims.token_type, "Rejected non-access token");
                ready(Err(create_api_error(ApiResponse::unauthorized(
                    "Token is not valid",
                ))))
            }
            Err(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "Token is not valid",
            )))),
        }
    }
}

/// `x-auth-token` wins over `Authorization: Bearer`.
fn extract_token(req: &HttpRequest) -> Option<String> {
    let headers = req.headers();

    if let Some(raw) = headers.get(AUTH_TOKEN_HEADER).and_then(|v| v.to_str().ok()) {
        let raw = raw.trim();
        if !raw.is_empty() {
            return Some(raw.to_string());
        }
    }

    headers
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
