use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::MessageResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::post::application::domain::entities::Comment;
use crate::modules::post::application::ports::incoming::use_cases::RemoveCommentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Remove one of the caller's comments
#[utoipa::path(
    delete,
    path = "/api/posts/comment/{id}/{comment_id}",
    tag = "posts",
    params(
        ("id" = String, Path, description = "Post id"),
        ("comment_id" = String, Path, description = "Comment id")
    ),
    responses(
        (status = 200, description = "Comments after the change", body = [Comment]),
        (status = 400, description = "Post or comment not found", body = MessageResponse),
        (status = 401, description = "Not the author, or missing token", body = MessageResponse),
        (status = 500, description = "Server error", body = MessageResponse)
    ),
    security(("BearerAuth" = []))
)]
#[delete("/api/posts/comment/{id}/{comment_id}")]
pub async fn remove_comment_handler(
    user: AuthenticatedUser,
    path: web::Path<(String, String)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (raw_post_id, raw_comment_id) = path.into_inner();

    let post_id = match Uuid::parse_str(&raw_post_id) {
        Ok(id) => id,
        Err(_) => return ApiResponse::not_found("Post not found"),
    };
    let comment_id = match Uuid::parse_str(&raw_comment_id) {
        Ok(id) => id,
        Err(_) => return ApiResponse::not_found("Comment doesn't exist"),
    };

    match data
        .post
        .remove_comment
        .execute(user.user_id, post_id, comment_id)
        .await
    {
        Ok(comments) => ApiResponse::success(comments),
        Err(RemoveCommentError::PostNotFound) => ApiResponse::not_found("Post not found"),
        Err(RemoveCommentError::CommentNotFound) => ApiResponse::not_found("Comment doesn't exist"),
        Err(RemoveCommentError::NotAuthorized) => ApiResponse::unauthorized("User not authorized"),
        Err(RemoveCommentError::RepositoryError(msg)) => {
            error!(error = %msg, post_id = %post_id, "Failed to remove comment");
            ApiResponse::internal_error()
        }
    }
}
