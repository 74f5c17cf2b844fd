pub mod modules;
pub use modules::{auth, career, catalog, feedback, progress};
mod api;
mod config;
pub mod health;
mod shared;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::{
    LoginLogRepositoryPostgres, UserProfileQueryPostgres, UserQueryPostgres,
    UserRepositoryPostgres,
};
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::services::account::{
    LoginUserService, RegisterUserService, UpdatePasswordService,
};
use crate::auth::application::services::login_logs::ListLoginLogsService;
use crate::auth::application::services::user_profile::{
    FetchProfileService, SelectStreamService, UpdateDetailsService,
};
use crate::career::adapter::outgoing::CareerQueryPostgres;
use crate::career::application::career_use_cases::CareerUseCases;
use crate::career::application::services::{GetRoleDetailsService, GetSubStreamCoursesService};
use crate::catalog::adapter::outgoing::{
    CatalogQueryPostgres, CourseRepositoryPostgres, JobRepositoryPostgres,
    RoleRepositoryPostgres, StreamRepositoryPostgres, SubDomainRepositoryPostgres,
};
use crate::catalog::application::catalog_use_cases::CatalogUseCases;
use crate::catalog::application::services::{
    BrowseCatalogService, CourseAdminService, JobAdminService, RoleAdminService,
    StreamAdminService, SubDomainAdminService,
};
use crate::config::ServerConfig;
use crate::feedback::adapter::outgoing::FeedbackRepositoryPostgres;
use crate::feedback::application::feedback_use_cases::FeedbackUseCases;
use crate::feedback::application::services::{ListFeedbackService, SubmitFeedbackService};
use crate::progress::adapter::outgoing::UserProgressRepositoryPostgres;
use crate::progress::application::progress_use_cases::ProgressUseCases;
use crate::progress::application::services::{
    TrackCourseProgressService, UpdateSkillProgressService,
};
use crate::shared::api::{custom_json_config, custom_path_config};

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub catalog: CatalogUseCases,
    pub career: CareerUseCases,
    pub progress: ProgressUseCases,
    pub feedback: FeedbackUseCases,
}

#[cfg(not(tarpaulin_include))]
fn build_state(
    db: &Arc<DatabaseConnection>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
    hasher: Argon2Hasher,
    admin_emails: Vec<String>,
) -> AppState {
    let user_repo = UserRepositoryPostgres::new(Arc::clone(db));
    let user_query = UserQueryPostgres::new(Arc::clone(db));
    let profiles = UserProfileQueryPostgres::new(Arc::clone(db));
    let login_logs = LoginLogRepositoryPostgres::new(Arc::clone(db));

    let auth = AuthUseCases {
        register: Arc::new(RegisterUserService::new(
            user_repo.clone(),
            hasher.clone(),
            Arc::clone(&token_provider),
            admin_emails,
        )),
        login: Arc::new(LoginUserService::new(
            user_query.clone(),
            hasher.clone(),
            login_logs.clone(),
            Arc::clone(&token_provider),
        )),
        fetch_profile: Arc::new(FetchProfileService::new(profiles.clone())),
        update_details: Arc::new(UpdateDetailsService::new(user_repo.clone(), profiles.clone())),
        update_password: Arc::new(UpdatePasswordService::new(
            user_query,
            user_repo.clone(),
            hasher,
            token_provider,
        )),
        select_stream: Arc::new(SelectStreamService::new(user_repo, profiles.clone())),
        list_login_logs: Arc::new(ListLoginLogsService::new(login_logs)),
    };

    let catalog = CatalogUseCases {
        browse: Arc::new(BrowseCatalogService::new(CatalogQueryPostgres::new(
            Arc::clone(db),
        ))),
        streams: Arc::new(StreamAdminService::new(StreamRepositoryPostgres::new(
            Arc::clone(db),
        ))),
        sub_domains: Arc::new(SubDomainAdminService::new(SubDomainRepositoryPostgres::new(
            Arc::clone(db),
        ))),
        roles: Arc::new(RoleAdminService::new(RoleRepositoryPostgres::new(
            Arc::clone(db),
        ))),
        courses: Arc::new(CourseAdminService::new(CourseRepositoryPostgres::new(
            Arc::clone(db),
        ))),
        jobs: Arc::new(JobAdminService::new(JobRepositoryPostgres::new(Arc::clone(db)))),
    };

    let career_query = CareerQueryPostgres::new(Arc::clone(db));
    let career = CareerUseCases {
        role_details: Arc::new(GetRoleDetailsService::new(career_query.clone())),
        sub_stream_courses: Arc::new(GetSubStreamCoursesService::new(career_query)),
    };

    let progress_repo = UserProgressRepositoryPostgres::new(Arc::clone(db));
    let progress = ProgressUseCases {
        skill_progress: Arc::new(UpdateSkillProgressService::new(progress_repo.clone())),
        course_progress: Arc::new(TrackCourseProgressService::new(progress_repo, profiles)),
    };

    let feedback_repo = FeedbackRepositoryPostgres::new(Arc::clone(db));
    let feedback = FeedbackUseCases {
        submit: Arc::new(SubmitFeedbackService::new(feedback_repo.clone())),
        list: Arc::new(ListFeedbackService::new(feedback_repo)),
    };

    AppState {
        auth,
        catalog,
        career,
        progress,
        feedback,
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = ServerConfig::from_env()?;
    let jwt_config = JwtConfig::from_env()?;

    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(50)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    Migrator::up(&conn, None)
        .await
        .context("Failed to run migrations")?;

    let db_arc = Arc::new(conn);

    let token_provider: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(jwt_config));
    let state = build_state(
        &db_arc,
        Arc::clone(&token_provider),
        Argon2Hasher::from_env(),
        config.admin_emails.clone(),
    );
    let openapi = ApiDoc::openapi();

    let server_url = config.bind_address();
    info!(address = %server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .app_data(custom_path_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::auth::adapter::incoming::web::routes as auth_routes;
    use crate::career::adapter::incoming::web::routes as career_routes;
    use crate::catalog::adapter::incoming::web::routes as catalog_routes;
    use crate::feedback::adapter::incoming::web::routes as feedback_routes;
    use crate::progress::adapter::incoming::web::routes as progress_routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(auth_routes::register_user_handler);
    cfg.service(auth_routes::login_user_handler);
    cfg.service(auth_routes::fetch_profile_handler);
    cfg.service(auth_routes::update_details_handler);
    cfg.service(auth_routes::update_password_handler);
    cfg.service(auth_routes::select_stream_handler);
    // Catalog
    cfg.service(catalog_routes::list_streams_handler);
    cfg.service(catalog_routes::get_career_path_handler);
    cfg.service(catalog_routes::list_roles_by_sub_domain_handler);
    // Career
    cfg.service(career_routes::get_role_details_handler);
    cfg.service(career_routes::get_sub_stream_courses_handler);
    // Progress
    cfg.service(progress_routes::update_skill_progress_handler);
    cfg.service(progress_routes::track_course_progress_handler);
    // Feedback
    cfg.service(feedback_routes::submit_feedback_handler);
    // Admin
    cfg.service(catalog_routes::list_admin_streams_handler);
    cfg.service(catalog_routes::create_stream_handler);
    cfg.service(catalog_routes::update_stream_handler);
    cfg.service(catalog_routes::delete_stream_handler);
    cfg.service(catalog_routes::list_admin_sub_domains_handler);
    cfg.service(catalog_routes::create_sub_domain_handler);
    cfg.service(catalog_routes::update_sub_domain_handler);
    cfg.service(catalog_routes::replace_certifications_handler);
    cfg.service(catalog_routes::delete_sub_domain_handler);
    cfg.service(catalog_routes::list_admin_roles_handler);
    cfg.service(catalog_routes::create_role_handler);
    cfg.service(catalog_routes::update_role_handler);
    cfg.service(catalog_routes::delete_role_handler);
    cfg.service(catalog_routes::list_admin_courses_handler);
    cfg.service(catalog_routes::create_course_handler);
    cfg.service(catalog_routes::update_course_handler);
    cfg.service(catalog_routes::delete_course_handler);
    cfg.service(catalog_routes::list_admin_jobs_handler);
    cfg.service(catalog_routes::create_job_handler);
    cfg.service(catalog_routes::update_job_handler);
    cfg.service(catalog_routes::delete_job_handler);
    cfg.service(feedback_routes::list_feedback_handler);
    cfg.service(auth_routes::list_login_logs_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
