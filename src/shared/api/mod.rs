mod json_config;
mod response;
pub mod validation;

pub use json_config::custom_json_config;
pub use response::{ApiResponse, ErrorsBody, FieldError, MessageBody};
