use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{MessageResponse, ValidationErrorResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::post::application::domain::entities::Post;
use crate::modules::post::application::ports::incoming::use_cases::{
    CreatePostCommand, CreatePostError,
};
use crate::shared::api::validation::Validator;
use crate::shared::api::{ApiResponse, FieldError};
use crate::AppState;

/// Body of a new post or comment.
#[derive(Debug, Deserialize, ToSchema)]
pub struct TextRequest {
    #[schema(example = "Anyone tried sea-orm with jsonb columns?")]
    pub text: Option<String>,
}

impl TextRequest {
    pub(crate) fn validate(self) -> Result<String, Vec<FieldError>> {
        let mut v = Validator::new();
        v.require("text", &self.text, "Text is required");
        v.finish()?;
        Ok(self.text.unwrap_or_default())
    }
}

/// Create a post
///
/// The author's current name and avatar are stored with the post.
#[utoipa::path(
    post,
    path = "/api/posts",
    tag = "posts",
    request_body = TextRequest,
    responses(
        (status = 200, description = "Created post", body = Post),
        (status = 400, description = "Invalid input or unknown user", body = ValidationErrorResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 500, description = "Server error", body = MessageResponse)
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/posts")]
pub async fn create_post_handler(
    user: AuthenticatedUser,
    req: web::Json<TextRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let text = match req.into_inner().validate() {
        Ok(text) => text,
        Err(errors) => return ApiResponse::validation_failed(errors),
    };

    match data
        .post
        .create
        .execute(user.user_id, CreatePostCommand { text })
        .await
    {
        Ok(post) => ApiResponse::success(post),
        Err(CreatePostError::UserNotFound) => ApiResponse::not_found("User not found"),
        Err(CreatePostError::RepositoryError(msg)) => {
            error!(error = %msg, user_id = %user.user_id, "Failed to create post");
            ApiResponse::internal_error()
        }
    }
}
