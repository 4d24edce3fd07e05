use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::MessageResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::post::application::domain::entities::Post;
use crate::modules::post::application::ports::incoming::use_cases::GetPostsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// All posts, newest first
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = "posts",
    responses(
        (status = 200, description = "Posts", body = [Post]),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 500, description = "Server error", body = MessageResponse)
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/posts")]
pub async fn get_posts_handler(_user: AuthenticatedUser, data: web::Data<AppState>) -> impl Responder {
    match data.post.get_list.execute().await {
        Ok(posts) => ApiResponse::success(posts),
        Err(GetPostsError::RepositoryError(msg)) => {
            error!(error = %msg, "Failed to list posts");
            ApiResponse::internal_error()
        }
    }
}
