use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{MessageResponse, ValidationErrorResponse};
use crate::auth::application::ports::incoming::use_cases::{
    AuthToken, LoginUserCommand, LoginUserError,
};
use crate::shared::api::validation::{non_empty, Validator};
use crate::shared::api::{ApiResponse, FieldError};
use crate::AppState;

/// Login request from client
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,
    #[schema(example = "secret123")]
    pub password: Option<String>,
}

impl LoginRequestDto {
    fn validate(self) -> Result<LoginUserCommand, Vec<FieldError>> {
        let email_ok = non_empty(&self.email)
            .map(email_address::EmailAddress::is_valid)
            .unwrap_or(false);

        let mut v = Validator::new();
        v.check("email", email_ok, "Please include a valid email")
            .require("password", &self.password, "Password is required");
        v.finish()?;

        Ok(LoginUserCommand {
            email: self.email.unwrap_or_default(),
            password: self.password.unwrap_or_default(),
        })
    }
}

/// User login
///
/// Authenticates a user with email and password and returns an access token.
#[utoipa::path(
    post,
    path = "/api/auth",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = AuthToken),
        (status = 400, description = "Invalid input or credentials", body = ValidationErrorResponse),
        (status = 500, description = "Server error", body = MessageResponse)
    )
)]
#[post("/api/auth")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match req.into_inner().validate() {
        Ok(command) => command,
        Err(errors) => return ApiResponse::validation_failed(errors),
    };

    match data.auth.login.execute(command).await {
        Ok(token) => ApiResponse::success(token),
        Err(LoginUserError::InvalidCredentials) => {
            ApiResponse::validation_failed(vec![FieldError::general("Invalid Credentials")])
        }
        Err(
            LoginUserError::HashingFailed(msg)
            | LoginUserError::TokenFailed(msg)
            | LoginUserError::RepositoryError(msg),
        ) => {
            error!(error = %msg, "Login failed");
            ApiResponse::internal_error()
        }
    }
}
