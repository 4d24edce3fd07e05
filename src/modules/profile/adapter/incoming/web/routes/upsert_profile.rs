use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{MessageResponse, ValidationErrorResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::profile::application::domain::entities::{parse_skills, Profile};
use crate::modules::profile::application::ports::incoming::use_cases::{
    UpsertProfileCommand, UpsertProfileError,
};
use crate::shared::api::validation::Validator;
use crate::shared::api::{ApiResponse, FieldError};
use crate::AppState;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpsertProfileRequest {
    #[schema(example = "Developer")]
    pub status: Option<String>,
    /// Comma separated, e.g. `"rust, sql, docker"`.
    #[schema(example = "rust, sql, docker")]
    pub skills: Option<String>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub githubusername: Option<String>,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

impl UpsertProfileRequest {
    fn validate(self) -> Result<UpsertProfileCommand, Vec<FieldError>> {
        let mut v = Validator::new();
        let skills = parse_skills(self.skills.as_deref().unwrap_or_default());
        v.require("status", &self.status, "Status is required")
            .check("skills", !skills.is_empty(), "Skills is required");
        v.finish()?;

        Ok(UpsertProfileCommand {
            status: self.status.unwrap_or_default(),
            skills: self.skills.unwrap_or_default(),
            company: self.company,
            website: self.website,
            location: self.location,
            bio: self.bio,
            githubusername: self.githubusername,
            youtube: self.youtube,
            twitter: self.twitter,
            facebook: self.facebook,
            linkedin: self.linkedin,
            instagram: self.instagram,
        })
    }
}

/// Create or update the caller's profile
///
/// Omitted optional fields keep their stored value; supplied social links
/// replace only the links they name.
#[utoipa::path(
    post,
    path = "/api/profile",
    tag = "profile",
    request_body = UpsertProfileRequest,
    responses(
        (status = 200, description = "Stored profile", body = Profile),
        (status = 400, description = "Invalid input", body = ValidationErrorResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 500, description = "Server error", body = MessageResponse)
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/profile")]
pub async fn upsert_profile_handler(
    user: AuthenticatedUser,
    req: web::Json<UpsertProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match req.into_inner().validate() {
        Ok(command) => command,
        Err(errors) => return ApiResponse::validation_failed(errors),
    };

    match data.profile.upsert.execute(user.user_id, command).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(UpsertProfileError::RepositoryError(msg)) => {
            error!(error = %msg, user_id = %user.user_id, "Failed to save profile");
            ApiResponse::internal_error()
        }
    }
}
