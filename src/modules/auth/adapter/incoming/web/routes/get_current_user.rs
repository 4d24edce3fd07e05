use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::MessageResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::ports::incoming::use_cases::{CurrentUser, GetCurrentUserError};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Current user
///
/// Returns the user the access token belongs to.
#[utoipa::path(
    get,
    path = "/api/auth",
    tag = "auth",
    responses(
        (status = 200, description = "Authenticated user", body = CurrentUser),
        (status = 400, description = "User no longer exists", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse)
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/auth")]
pub async fn get_current_user_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.current_user.execute(user.user_id).await {
        Ok(current) => ApiResponse::success(current),
        Err(GetCurrentUserError::UserNotFound) => ApiResponse::not_found("User not found"),
        Err(GetCurrentUserError::RepositoryError(msg)) => {
            error!(error = %msg, user_id = %user.user_id, "Failed to load current user");
            ApiResponse::internal_error()
        }
    }
}
