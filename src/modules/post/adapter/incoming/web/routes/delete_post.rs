use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::MessageResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::post::application::ports::incoming::use_cases::DeletePostError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete one of the caller's posts
#[utoipa::path(
    delete,
    path = "/api/posts/{id}",
    tag = "posts",
    params(("id" = String, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post removed", body = MessageResponse),
        (status = 400, description = "Post not found", body = MessageResponse),
        (status = 401, description = "Not the owner, or missing token", body = MessageResponse),
        (status = 500, description = "Server error", body = MessageResponse)
    ),
    security(("BearerAuth" = []))
)]
#[delete("/api/posts/{id}")]
pub async fn delete_post_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = match Uuid::parse_str(&path.into_inner()) {
        Ok(id) => id,
        Err(_) => return ApiResponse::not_found("Post not found"),
    };

    match data.post.delete.execute(user.user_id, post_id).await {
        Ok(()) => ApiResponse::message("Post removed"),
        Err(DeletePostError::PostNotFound) => ApiResponse::not_found("Post not found"),
        Err(DeletePostError::NotAuthorized) => ApiResponse::unauthorized("User not authorized"),
        Err(DeletePostError::RepositoryError(msg)) => {
            error!(error = %msg, post_id = %post_id, "Failed to delete post");
            ApiResponse::internal_error()
        }
    }
}
