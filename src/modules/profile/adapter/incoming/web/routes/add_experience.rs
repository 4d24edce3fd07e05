use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{MessageResponse, ValidationErrorResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::profile::application::domain::entities::{NewExperience, Profile};
use crate::modules::profile::application::ports::incoming::use_cases::AddExperienceError;
use crate::shared::api::validation::{non_empty, Validator};
use crate::shared::api::{ApiResponse, FieldError};
use crate::AppState;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ExperienceRequest {
    #[schema(example = "Backend Engineer")]
    pub title: Option<String>,
    #[schema(example = "Acme")]
    pub company: Option<String>,
    pub location: Option<String>,
    /// `YYYY-MM-DD` or an RFC 3339 timestamp.
    #[schema(example = "2021-03-01")]
    pub from: Option<String>,
    pub to: Option<String>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

impl ExperienceRequest {
    fn validate(self) -> Result<NewExperience, Vec<FieldError>> {
        let mut v = Validator::new();
        v.require("title", &self.title, "Title is required")
            .require("company", &self.company, "Company is required")
            .require("from", &self.from, "From date is required");
        let from = v.date("from", &self.from, "From date is invalid");
        let to = v.date("to", &self.to, "To date is invalid");
        v.finish()?;

        let from = from.ok_or_else(|| vec![FieldError::body("from", "From date is required")])?;

        Ok(NewExperience {
            title: self.title.unwrap_or_default().trim().to_string(),
            company: self.company.unwrap_or_default().trim().to_string(),
            location: non_empty(&self.location).map(str::to_string),
            from,
            to,
            current: self.current,
            description: non_empty(&self.description).map(str::to_string),
        })
    }
}

/// Add an experience entry
///
/// The new entry is placed first in the list.
#[utoipa::path(
    put,
    path = "/api/profile/experience",
    tag = "profile",
    request_body = ExperienceRequest,
    responses(
        (status = 200, description = "Updated profile", body = Profile),
        (status = 400, description = "Invalid input or no profile", body = ValidationErrorResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 500, description = "Server error", body = MessageResponse)
    ),
    security(("BearerAuth" = []))
)]
#[put("/api/profile/experience")]
pub async fn add_experience_handler(
    user: AuthenticatedUser,
    req: web::Json<ExperienceRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let entry = match req.into_inner().validate() {
        Ok(entry) => entry,
        Err(errors) => return ApiResponse::validation_failed(errors),
    };

    match data.profile.add_experience.execute(user.user_id, entry).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(AddExperienceError::ProfileNotFound) => {
            ApiResponse::not_found("Profile not found")
        }
        Err(AddExperienceError::RepositoryError(msg)) => {
            error!(error = %msg, user_id = %user.user_id, "Failed to add experience");
            ApiResponse::internal_error()
        }
    }
}
