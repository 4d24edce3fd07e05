use actix_web::{put, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{MessageResponse, ValidationErrorResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::post::adapter::incoming::web::routes::TextRequest;
use crate::modules::post::application::domain::entities::Comment;
use crate::modules::post::application::ports::incoming::use_cases::{
    AddCommentCommand, AddCommentError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Comment on a post
///
/// Returns the post's comments, newest first.
#[utoipa::path(
    put,
    path = "/api/posts/comment/{id}",
    tag = "posts",
    params(("id" = String, Path, description = "Post id")),
    request_body = TextRequest,
    responses(
        (status = 200, description = "Comments after the change", body = [Comment]),
        (status = 400, description = "Invalid input or post not found", body = ValidationErrorResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 500, description = "Server error", body = MessageResponse)
    ),
    security(("BearerAuth" = []))
)]
#[put("/api/posts/comment/{id}")]
pub async fn add_comment_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    req: web::Json<TextRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let text = match req.into_inner().validate() {
        Ok(text) => text,
        Err(errors) => return ApiResponse::validation_failed(errors),
    };

    let post_id = match Uuid::parse_str(&path.into_inner()) {
        Ok(id) => id,
        Err(_) => return ApiResponse::not_found("Post not found"),
    };

    match data
        .post
        .add_comment
        .execute(user.user_id, post_id, AddCommentCommand { text })
        .await
    {
        Ok(comments) => ApiResponse::success(comments),
        Err(AddCommentError::PostNotFound) => ApiResponse::not_found("Post not found"),
        Err(AddCommentError::UserNotFound) => ApiResponse::not_found("User not found"),
        Err(AddCommentError::RepositoryError(msg)) => {
            error!(error = %msg, post_id = %post_id, "Failed to add comment");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};

    use crate::auth::application::domain::entities::UserId;
    use crate::modules::post::application::ports::incoming::use_cases::AddCommentUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, test_token_provider};

    struct MockAddComment {
        fail: Option<AddCommentError>,
    }

    #[async_trait]
    impl AddCommentUseCase for MockAddComment {
        async fn execute(
            &self,
            author: UserId,
            _post_id: Uuid,
            command: AddCommentCommand,
        ) -> Result<Vec<Comment>, AddCommentError> {
            match &self.fail {
                Some(e) => Err(e.clone()),
                None => Ok(vec![Comment::new(
                    author,
                    command.text,
                    "Jane".to_string(),
                    "a".to_string(),
                )]),
            }
        }
    }

    async fn call(uc: MockAddComment, body: Value) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().with_add_comment(uc).build())
                .app_data(web::Data::new(test_token_provider()))
                .service(add_comment_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/posts/comment/{}", Uuid::new_v4()))
            .insert_header(bearer(Uuid::new_v4()))
            .set_json(body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_adds_comment() {
        let (status, body) = call(MockAddComment { fail: None }, json!({ "text": "nice" })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["text"], "nice");
        assert_eq!(body[0]["name"], "Jane");
    }

    #[actix_web::test]
    async fn test_text_required() {
        let (status, body) = call(MockAddComment { fail: None }, json!({})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"][0]["msg"], "Text is required");
    }

    #[actix_web::test]
    async fn test_missing_post() {
        let uc = MockAddComment {
            fail: Some(AddCommentError::PostNotFound),
        };

        let (status, body) = call(uc, json!({ "text": "nice" })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["msg"], "Post not found");
    }
}
