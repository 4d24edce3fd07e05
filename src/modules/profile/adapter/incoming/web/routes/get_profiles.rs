use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::MessageResponse;
use crate::modules::profile::application::domain::entities::ProfileView;
use crate::modules::profile::application::ports::incoming::use_cases::GetProfilesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// All profiles
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = "profile",
    responses(
        (status = 200, description = "Every profile with its owner", body = [ProfileView]),
        (status = 500, description = "Server error", body = MessageResponse)
    )
)]
#[get("/api/profile")]
pub async fn get_profiles_handler(data: web::Data<AppState>) -> impl Responder {
    match data.profile.get_list.execute().await {
        Ok(views) => ApiResponse::success(views),
        Err(GetProfilesError::QueryError(msg)) => {
            error!(error = %msg, "Failed to list profiles");
            ApiResponse::internal_error()
        }
    }
}
