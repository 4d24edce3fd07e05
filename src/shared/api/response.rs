// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::{Deserialize, Serialize};

/// Body of every non-validation error: `{ "msg": "..." }`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MessageBody {
    pub msg: String,
}

/// One entry of a validation failure.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FieldError {
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl FieldError {
    pub fn body(param: &str, msg: &str) -> Self {
        Self {
            msg: msg.to_string(),
            param: Some(param.to_string()),
            location: Some("body".to_string()),
        }
    }

    /// Error not tied to a request field (duplicate user, bad credentials, bad JSON).
    pub fn general(msg: &str) -> Self {
        Self {
            msg: msg.to_string(),
            param: None,
            location: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ErrorsBody {
    pub errors: Vec<FieldError>,
}

pub struct ApiResponse;

impl ApiResponse {
    pub fn success<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Ok().json(data)
    }

    pub fn message(msg: &str) -> HttpResponse {
        HttpResponse::Ok().json(MessageBody {
            msg: msg.to_string(),
        })
    }

    pub fn error(status: StatusCode, msg: &str) -> HttpResponse {
        HttpResponse::build(status).json(MessageBody {
            msg: msg.to_string(),
        })
    }

    pub fn bad_request(msg: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, msg)
    }

    /// Missing targets are reported as 400, never 404.
    pub fn not_found(msg: &str) -> HttpResponse {
        Self::bad_request(msg)
    }

    pub fn unauthorized(msg: &str) -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, msg)
    }

    pub fn validation_failed(errors: Vec<FieldError>) -> HttpResponse {
        HttpResponse::BadRequest().json(ErrorsBody { errors })
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use serde_json::Value;

    async fn body_of(resp: HttpResponse) -> Value {
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn not_found_is_reported_as_bad_request() {
        let resp = ApiResponse::not_found("Post not found");
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_of(resp).await["msg"], "Post not found");
    }

    #[actix_web::test]
    async fn internal_error_hides_details() {
        let resp = ApiResponse::internal_error();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_of(resp).await, serde_json::json!({ "msg": "Server error" }));
    }

    #[actix_web::test]
    async fn validation_failed_lists_field_errors() {
        let resp = ApiResponse::validation_failed(vec![
            FieldError::body("status", "Status is required"),
            FieldError::general("User already exists"),
        ]);
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = body_of(resp).await;
        assert_eq!(body["errors"][0]["msg"], "Status is required");
        assert_eq!(body["errors"][0]["param"], "status");
        assert_eq!(body["errors"][0]["location"], "body");
        assert!(body["errors"][1].get("param").is_none());
    }
}
