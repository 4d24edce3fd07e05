// src/shared/api/json_config.rs
use crate::shared::api::{ApiResponse, FieldError};
use actix_web::web::JsonConfig;

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        tracing::debug!(error = %message, "Rejected request body");
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::validation_failed(vec![FieldError::general(&message)]),
        )
        .into()
    })
}
