use actix_web::{put, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::MessageResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::post::application::domain::entities::Like;
use crate::modules::post::application::ports::incoming::use_cases::LikePostError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Like a post
///
/// Returns the post's likes, newest first.
#[utoipa::path(
    put,
    path = "/api/posts/like/{id}",
    tag = "posts",
    params(("id" = String, Path, description = "Post id")),
    responses(
        (status = 200, description = "Likes after the change", body = [Like]),
        (status = 400, description = "Post not found or already liked", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 500, description = "Server error", body = MessageResponse)
    ),
    security(("BearerAuth" = []))
)]
#[put("/api/posts/like/{id}")]
pub async fn like_post_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = match Uuid::parse_str(&path.into_inner()) {
        Ok(id) => id,
        Err(_) => return ApiResponse::not_found("Post not found"),
    };

    match data.post.like.execute(user.user_id, post_id).await {
        Ok(likes) => ApiResponse::success(likes),
        Err(LikePostError::PostNotFound) => ApiResponse::not_found("Post not found"),
        Err(LikePostError::AlreadyLiked) => ApiResponse::bad_request("Post already liked"),
        Err(LikePostError::RepositoryError(msg)) => {
            error!(error = %msg, post_id = %post_id, "Failed to like post");
            ApiResponse::internal_error()
        }
    }
}
