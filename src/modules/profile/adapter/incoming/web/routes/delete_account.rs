use actix_web::{delete, web, Responder};
use tracing::error;

use crate::api::schemas::MessageResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete the caller's account
///
/// Removes the caller's posts, profile and user record.
#[utoipa::path(
    delete,
    path = "/api/profile",
    tag = "profile",
    responses(
        (status = 200, description = "Account removed", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 500, description = "Server error", body = MessageResponse)
    ),
    security(("BearerAuth" = []))
)]
#[delete("/api/profile")]
pub async fn delete_account_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.profile.delete_account.execute(user.user_id).await {
        Ok(()) => ApiResponse::message("User deleted"),
        Err(e) => {
            error!(error = %e, user_id = %user.user_id, "Failed to delete account");
            ApiResponse::internal_error()
        }
    }
}
