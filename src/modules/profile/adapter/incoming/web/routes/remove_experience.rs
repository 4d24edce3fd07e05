use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::MessageResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::profile::application::domain::entities::Profile;
use crate::modules::profile::application::ports::incoming::use_cases::RemoveExperienceError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Remove an experience entry
#[utoipa::path(
    delete,
    path = "/api/profile/experience/{exp_id}",
    tag = "profile",
    params(("exp_id" = String, Path, description = "Experience entry id")),
    responses(
        (status = 200, description = "Updated profile", body = Profile),
        (status = 400, description = "No profile or no such entry", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 500, description = "Server error", body = MessageResponse)
    ),
    security(("BearerAuth" = []))
)]
#[delete("/api/profile/experience/{exp_id}")]
pub async fn remove_experience_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let exp_id = match Uuid::parse_str(&path.into_inner()) {
        Ok(id) => id,
        Err(_) => return ApiResponse::not_found("Experience not found"),
    };

    match data.profile.remove_experience.execute(user.user_id, exp_id).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(RemoveExperienceError::ProfileNotFound) => {
            ApiResponse::not_found("Profile not found")
        }
        Err(RemoveExperienceError::ExperienceNotFound) => {
            ApiResponse::not_found("Experience not found")
        }
        Err(RemoveExperienceError::RepositoryError(msg)) => {
            error!(error = %msg, user_id = %user.user_id, "Failed to remove experience");
            ApiResponse::internal_error()
        }
    }
}
