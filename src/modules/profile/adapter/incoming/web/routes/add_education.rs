use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{MessageResponse, ValidationErrorResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::profile::application::domain::entities::{NewEducation, Profile};
use crate::modules::profile::application::ports::incoming::use_cases::AddEducationError;
use crate::shared::api::validation::{non_empty, Validator};
use crate::shared::api::{ApiResponse, FieldError};
use crate::AppState;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct EducationRequest {
    #[schema(example = "TU Berlin")]
    pub school: Option<String>,
    #[schema(example = "BSc")]
    pub degree: Option<String>,
    #[schema(example = "Computer Science")]
    pub fieldofstudy: Option<String>,
    #[schema(example = "2015-10-01")]
    pub from: Option<String>,
    pub to: Option<String>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

impl EducationRequest {
    fn validate(self) -> Result<NewEducation, Vec<FieldError>> {
        let mut v = Validator::new();
        v.require("school", &self.school, "School is required")
            .require("degree", &self.degree, "Degree is required")
            .require("fieldofstudy", &self.fieldofstudy, "Field of study is required")
            .require("from", &self.from, "From date is required");
        let from = v.date("from", &self.from, "From date is invalid");
        let to = v.date("to", &self.to, "To date is invalid");
        v.finish()?;

        let from = from.ok_or_else(|| vec![FieldError::body("from", "From date is required")])?;

        Ok(NewEducation {
            school: self.school.unwrap_or_default().trim().to_string(),
            degree: self.degree.unwrap_or_default().trim().to_string(),
            fieldofstudy: self.fieldofstudy.unwrap_or_default().trim().to_string(),
            from,
            to,
            current: self.current,
            description: non_empty(&self.description).map(str::to_string),
        })
    }
}

/// Add an education entry
#[utoipa::path(
    put,
    path = "/api/profile/education",
    tag = "profile",
    request_body = EducationRequest,
    responses(
        (status = 200, description = "Updated profile", body = Profile),
        (status = 400, description = "Invalid input or no profile", body = ValidationErrorResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 500, description = "Server error", body = MessageResponse)
    ),
    security(("BearerAuth" = []))
)]
#[put("/api/profile/education")]
pub async fn add_education_handler(
    user: AuthenticatedUser,
    req: web::Json<EducationRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let entry = match req.into_inner().validate() {
        Ok(entry) => entry,
        Err(errors) => return ApiResponse::validation_failed(errors),
    };

    match data.profile.add_education.execute(user.user_id, entry).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(AddEducationError::ProfileNotFound) => {
            ApiResponse::not_found("Profile not found")
        }
        Err(AddEducationError::RepositoryError(msg)) => {
            error!(error = %msg, user_id = %user.user_id, "Failed to add education");
            ApiResponse::internal_error()
        }
    }
}
