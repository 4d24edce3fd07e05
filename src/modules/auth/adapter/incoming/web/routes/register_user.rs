use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::{MessageResponse, ValidationErrorResponse};
use crate::auth::application::ports::incoming::use_cases::{
    AuthToken, RegisterUserCommand, RegisterUserError,
};
use crate::shared::api::validation::{non_empty, Validator};
use crate::shared::api::{ApiResponse, FieldError};
use crate::AppState;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterUserRequest {
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,
    #[schema(example = "secret123")]
    pub password: Option<String>,
}

impl RegisterUserRequest {
    fn validate(self) -> Result<RegisterUserCommand, Vec<FieldError>> {
        let email_ok = non_empty(&self.email)
            .map(email_address::EmailAddress::is_valid)
            .unwrap_or(false);
        let password_ok = self
            .password
            .as_deref()
            .map(|p| p.chars().count() >= MIN_PASSWORD_LEN)
            .unwrap_or(false);

        let mut v = Validator::new();
        v.require("name", &self.name, "Name is required")
            .check("email", email_ok, "Please include a valid email")
            .check(
                "password",
                password_ok,
                "Please enter a password with 6 or more characters",
            );
        v.finish()?;

        Ok(RegisterUserCommand {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            password: self.password.unwrap_or_default(),
        })
    }
}

/// Register a user
///
/// Creates the account and returns an access token for it.
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "auth",
    request_body = RegisterUserRequest,
    responses(
        (status = 200, description = "User registered", body = AuthToken),
        (status = 400, description = "Invalid input or email already taken", body = ValidationErrorResponse),
        (status = 500, description = "Server error", body = MessageResponse)
    )
)]
#[post("/api/users")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match req.into_inner().validate() {
        Ok(command) => command,
        Err(errors) => return ApiResponse::validation_failed(errors),
    };

    match data.auth.register.execute(command).await {
        Ok(token) => ApiResponse::success(token),
        Err(e) => map_register_error(e),
    }
}

fn map_register_error(e: RegisterUserError) -> HttpResponse {
    match e {
        RegisterUserError::UserAlreadyExists => {
            warn!("Registration rejected: email already in use");
            ApiResponse::validation_failed(vec![FieldError::general("User already exists")])
        }
        RegisterUserError::HashingFailed(msg)
        | RegisterUserError::TokenFailed(msg)
        | RegisterUserError::RepositoryError(msg) => {
            error!(error = %msg, "Failed to register user");
            ApiResponse::internal_error()
        }
    }
}
