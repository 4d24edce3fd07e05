use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::MessageResponse;
use crate::auth::application::domain::entities::UserId;
use crate::modules::profile::application::domain::entities::ProfileView;
use crate::modules::profile::application::ports::incoming::use_cases::GetProfileByUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Profile of a given user
///
/// A malformed id is answered like an unknown one.
#[utoipa::path(
    get,
    path = "/api/profile/users/{user_id}",
    tag = "profile",
    params(("user_id" = String, Path, description = "Owner's user id")),
    responses(
        (status = 200, description = "Profile with its owner", body = ProfileView),
        (status = 400, description = "Profile not found", body = MessageResponse),
        (status = 500, description = "Server error", body = MessageResponse)
    )
)]
#[get("/api/profile/users/{user_id}")]
pub async fn get_profile_by_user_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = match Uuid::parse_str(&path.into_inner()) {
        Ok(id) => UserId::from(id),
        Err(_) => return ApiResponse::not_found("Profile not found"),
    };

    match data.profile.get_by_user.execute(user_id).await {
        Ok(view) => ApiResponse::success(view),
        Err(GetProfileByUserError::ProfileNotFound) => ApiResponse::not_found("Profile not found"),
        Err(GetProfileByUserError::QueryError(msg)) => {
            error!(error = %msg, user_id = %user_id, "Failed to load profile");
            ApiResponse::internal_error()
        }
    }
}
