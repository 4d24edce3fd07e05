use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::MessageResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::profile::application::domain::entities::ProfileView;
use crate::modules::profile::application::ports::incoming::use_cases::GetCurrentProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Current user's profile
#[utoipa::path(
    get,
    path = "/api/profile/me",
    tag = "profile",
    responses(
        (status = 200, description = "Profile of the caller", body = ProfileView),
        (status = 400, description = "Caller has no profile", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse)
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/profile/me")]
pub async fn get_current_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.profile.get_current.execute(user.user_id).await {
        Ok(view) => ApiResponse::success(view),
        Err(GetCurrentProfileError::ProfileNotFound) => {
            ApiResponse::not_found("There is no profile for this user")
        }
        Err(GetCurrentProfileError::QueryError(msg)) => {
            error!(error = %msg, user_id = %user.user_id, "Failed to load profile");
            ApiResponse::internal_error()
        }
    }
}
