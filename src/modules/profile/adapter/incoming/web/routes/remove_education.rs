use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::MessageResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::profile::application::domain::entities::Profile;
use crate::modules::profile::application::ports::incoming::use_cases::RemoveEducationError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Remove an education entry
#[utoipa::path(
    delete,
    path = "/api/profile/education/{edu_id}",
    tag = "profile",
    params(("edu_id" = String, Path, description = "Education entry id")),
    responses(
        (status = 200, description = "Updated profile", body = Profile),
        (status = 400, description = "No profile or no such entry", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 500, description = "Server error", body = MessageResponse)
    ),
    security(("BearerAuth" = []))
)]
#[delete("/api/profile/education/{edu_id}")]
pub async fn remove_education_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let edu_id = match Uuid::parse_str(&path.into_inner()) {
        Ok(id) => id,
        Err(_) => return ApiResponse::not_found("Education not found"),
    };

    match data.profile.remove_education.execute(user.user_id, edu_id).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(RemoveEducationError::ProfileNotFound) => {
            ApiResponse::not_found("Profile not found")
        }
        Err(RemoveEducationError::EducationNotFound) => {
            ApiResponse::not_found("Education not found")
        }
        Err(RemoveEducationError::RepositoryError(msg)) => {
            error!(error = %msg, user_id = %user.user_id, "Failed to remove education");
            ApiResponse::internal_error()
        }
    }
}
