pub mod api;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::auth;
pub use modules::post;
pub use modules::profile;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::service::{
    GetCurrentUserService, LoginUserService, RegisterUserService,
};

use crate::post::adapter::outgoing::post_repository_postgres::PostRepositoryPostgres;
use crate::post::application::post_use_cases::PostUseCases;
use crate::post::application::service::{
    AddCommentService, CreatePostService, DeletePostService, GetPostService, GetPostsService,
    LikePostService, RemoveCommentService, UnlikePostService,
};

use crate::profile::adapter::outgoing::profile_query_postgres::ProfileQueryPostgres;
use crate::profile::adapter::outgoing::profile_repository_postgres::ProfileRepositoryPostgres;
use crate::profile::application::profile_use_cases::ProfileUseCases;
use crate::profile::application::service::{
    AddEducationService, AddExperienceService, DeleteAccountService, GetCurrentProfileService,
    GetProfileByUserService, GetProfilesService, RemoveEducationService,
    RemoveExperienceService, UpsertProfileService,
};

use crate::shared::api::custom_json_config;
use crate::shared::config::{load_env_files, ServerConfig};

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

/// Use-case bundles handed to every handler through `web::Data`.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub profile: ProfileUseCases,
    pub post: PostUseCases,
}

#[cfg(not(tarpaulin_include))]
fn build_state(
    db: &Arc<DatabaseConnection>,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
) -> AppState {
    let user_query = UserQueryPostgres::new(Arc::clone(db));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(db));
    let profile_repo = ProfileRepositoryPostgres::new(Arc::clone(db));
    let profile_query = ProfileQueryPostgres::new(Arc::clone(db));
    let post_repo = PostRepositoryPostgres::new(Arc::clone(db));

    let auth = AuthUseCases {
        register: Arc::new(RegisterUserService::new(
            user_query.clone(),
            user_repo.clone(),
            Arc::clone(&hasher),
            Arc::clone(&tokens),
        )),
        login: Arc::new(LoginUserService::new(user_query.clone(), hasher, tokens)),
        current_user: Arc::new(GetCurrentUserService::new(user_query.clone())),
    };

    let profile = ProfileUseCases {
        get_current: Arc::new(GetCurrentProfileService::new(profile_query.clone())),
        upsert: Arc::new(UpsertProfileService::new(profile_repo.clone())),
        get_list: Arc::new(GetProfilesService::new(profile_query.clone())),
        get_by_user: Arc::new(GetProfileByUserService::new(profile_query)),
        delete_account: Arc::new(DeleteAccountService::new(
            post_repo.clone(),
            profile_repo.clone(),
            user_repo,
        )),
        add_experience: Arc::new(AddExperienceService::new(profile_repo.clone())),
        remove_experience: Arc::new(RemoveExperienceService::new(profile_repo.clone())),
        add_education: Arc::new(AddEducationService::new(profile_repo.clone())),
        remove_education: Arc::new(RemoveEducationService::new(profile_repo)),
    };

    let post = PostUseCases {
        create: Arc::new(CreatePostService::new(post_repo.clone(), user_query.clone())),
        get_list: Arc::new(GetPostsService::new(post_repo.clone())),
        get_by_id: Arc::new(GetPostService::new(post_repo.clone())),
        delete: Arc::new(DeletePostService::new(post_repo.clone())),
        like: Arc::new(LikePostService::new(post_repo.clone())),
        unlike: Arc::new(UnlikePostService::new(post_repo.clone())),
        add_comment: Arc::new(AddCommentService::new(post_repo.clone(), user_query)),
        remove_comment: Arc::new(RemoveCommentService::new(post_repo)),
    };

    AppState {
        auth,
        profile,
        post,
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    load_env_files();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = ServerConfig::from_env()?;
    let jwt_config = JwtConfig::from_env()?;
    let hasher = Argon2Hasher::from_env()?;

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    if config.run_migrations {
        Migrator::up(&conn, None)
            .await
            .context("Failed to apply migrations")?;
        info!("Migrations applied");
    }

    let db_arc = Arc::new(conn);
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(jwt_config));
    let state = build_state(&db_arc, Arc::new(hasher), Arc::clone(&token_provider_arc));

    let server_url = config.bind_address();
    info!(address = %server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(custom_json_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {}", server_url))?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::get_current_user_handler);
    // Profile
    cfg.service(crate::profile::adapter::incoming::web::routes::get_current_profile_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::get_profile_by_user_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::get_profiles_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::upsert_profile_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::delete_account_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::add_experience_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::remove_experience_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::add_education_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::remove_education_handler);
    // Posts
    cfg.service(crate::post::adapter::incoming::web::routes::create_post_handler);
    cfg.service(crate::post::adapter::incoming::web::routes::get_posts_handler);
    cfg.service(crate::post::adapter::incoming::web::routes::like_post_handler);
    cfg.service(crate::post::adapter::incoming::web::routes::unlike_post_handler);
    cfg.service(crate::post::adapter::incoming::web::routes::add_comment_handler);
    cfg.service(crate::post::adapter::incoming::web::routes::remove_comment_handler);
    cfg.service(crate::post::adapter::incoming::web::routes::get_post_handler);
    cfg.service(crate::post::adapter::incoming::web::routes::delete_post_handler);
}

/// Reports a startup failure and maps it to the process exit status.
fn exit_code(result: anyhow::Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error starting app: {e:#}");
            1
        }
    }
}

#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    ExitCode::from(exit_code(start()))
}
