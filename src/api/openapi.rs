use crate::api::schemas::{FieldErrorDetail, MessageResponse, ValidationErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::auth::adapter::incoming::web::routes::{LoginRequestDto, RegisterUserRequest};
use crate::auth::application::ports::incoming::use_cases::{AuthToken, CurrentUser};

// Profile
use crate::modules::profile::adapter::incoming::web::routes::{
    EducationRequest, ExperienceRequest, UpsertProfileRequest,
};
use crate::modules::profile::application::domain::entities::{
    Education, Experience, Profile, ProfileView, SocialLinks, UserSummary,
};

// Posts
use crate::modules::post::adapter::incoming::web::routes::TextRequest;
use crate::modules::post::application::domain::entities::{Comment, Like, Post};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "DevConnector API",
        version = "1.0.0",
        description = "API documentation for the developer social network",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::get_current_user_handler,

        // Profile endpoints
        crate::modules::profile::adapter::incoming::web::routes::get_current_profile_handler,
        crate::modules::profile::adapter::incoming::web::routes::upsert_profile_handler,
        crate::modules::profile::adapter::incoming::web::routes::get_profiles_handler,
        crate::modules::profile::adapter::incoming::web::routes::get_profile_by_user_handler,
        crate::modules::profile::adapter::incoming::web::routes::delete_account_handler,
        crate::modules::profile::adapter::incoming::web::routes::add_experience_handler,
        crate::modules::profile::adapter::incoming::web::routes::remove_experience_handler,
        crate::modules::profile::adapter::incoming::web::routes::add_education_handler,
        crate::modules::profile::adapter::incoming::web::routes::remove_education_handler,

        // Post endpoints
        crate::modules::post::adapter::incoming::web::routes::create_post_handler,
        crate::modules::post::adapter::incoming::web::routes::get_posts_handler,
        crate::modules::post::adapter::incoming::web::routes::get_post_handler,
        crate::modules::post::adapter::incoming::web::routes::delete_post_handler,
        crate::modules::post::adapter::incoming::web::routes::like_post_handler,
        crate::modules::post::adapter::incoming::web::routes::unlike_post_handler,
        crate::modules::post::adapter::incoming::web::routes::add_comment_handler,
        crate::modules::post::adapter::incoming::web::routes::remove_comment_handler,
    ),
    components(
        schemas(
            // Response bodies
            MessageResponse,
            ValidationErrorResponse,
            FieldErrorDetail,

            // Auth DTOs
            RegisterUserRequest,
            LoginRequestDto,
            AuthToken,
            CurrentUser,

            // Profile DTOs
            UpsertProfileRequest,
            ExperienceRequest,
            EducationRequest,
            Profile,
            ProfileView,
            UserSummary,
            SocialLinks,
            Experience,
            Education,

            // Post DTOs
            TextRequest,
            Post,
            Like,
            Comment
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration, login and the current user"),
        (name = "profile", description = "Developer profiles, experience and education"),
        (name = "posts", description = "Posts, likes and comments"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token from register or login; x-auth-token is accepted too"))
                        .build(),
                ),
            )
        }
    }
}
