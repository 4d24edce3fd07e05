use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::MessageResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::post::application::domain::entities::Post;
use crate::modules::post::application::ports::incoming::use_cases::GetPostError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// A single post
#[utoipa::path(
    get,
    path = "/api/posts/{id}",
    tag = "posts",
    params(("id" = String, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post", body = Post),
        (status = 400, description = "Post not found", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 500, description = "Server error", body = MessageResponse)
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/posts/{id}")]
pub async fn get_post_handler(
    _user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = match Uuid::parse_str(&path.into_inner()) {
        Ok(id) => id,
        Err(_) => return ApiResponse::not_found("Post not found"),
    };

    match data.post.get_by_id.execute(post_id).await {
        Ok(post) => ApiResponse::success(post),
        Err(GetPostError::PostNotFound) => ApiResponse::not_found("Post not found"),
        Err(GetPostError::RepositoryError(msg)) => {
            error!(error = %msg, post_id = %post_id, "Failed to load post");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;

    use crate::modules::post::application::ports::incoming::use_cases::GetPostUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, test_token_provider};
    use crate::tests::support::fixtures::post_by;

    struct MockGetPost {
        result: Result<Post, GetPostError>,
    }

    #[async_trait]
    impl GetPostUseCase for MockGetPost {
        async fn execute(&self, _post_id: Uuid) -> Result<Post, GetPostError> {
            self.result.clone()
        }
    }

    async fn call(uc: MockGetPost, id: &str) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().with_get_post(uc).build())
                .app_data(web::Data::new(test_token_provider()))
                .service(get_post_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/posts/{}", id))
            .insert_header(bearer(Uuid::new_v4()))
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_found() {
        let post = post_by(Uuid::new_v4(), "hello");
        let id = post.id;

        let (status, body) = call(MockGetPost { result: Ok(post) }, &id.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], id.to_string());
    }

    #[actix_web::test]
    async fn test_missing() {
        let uc = MockGetPost {
            result: Err(GetPostError::PostNotFound),
        };

        let (status, body) = call(uc, &Uuid::new_v4().to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["msg"], "Post not found");
    }

    #[actix_web::test]
    async fn test_malformed_id() {
        let uc = MockGetPost {
            result: Ok(post_by(Uuid::new_v4(), "hello")),
        };

        let (status, body) = call(uc, "5d2f").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["msg"], "Post not found");
    }
}
