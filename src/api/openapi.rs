use crate::api::schemas::ErrorResponse;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::{
    LoginRequestDto, RegisterUserRequest, SelectStreamRequest, UpdateDetailsRequest,
    UpdatePasswordRequest,
};
use crate::catalog::adapter::incoming::web::routes::{
    CertificationDto, CertificationsRequest, CourseLinkDto, CourseRequest, JobRequest,
    RoleRequest, StreamRequest, SubDomainRequest,
};
use crate::feedback::adapter::incoming::web::routes::FeedbackRequest;
use crate::progress::adapter::incoming::web::routes::{
    CourseProgressRequest, SkillProgressRequest,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "OneEdu API",
        version = "1.0.0",
        description = "Career guidance backend: catalog of streams, roles, courses and jobs, plus learner progress"
    ),
    paths(
        // Auth
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::fetch_profile_handler,
        crate::auth::adapter::incoming::web::routes::update_details_handler,
        crate::auth::adapter::incoming::web::routes::update_password_handler,
        crate::auth::adapter::incoming::web::routes::select_stream_handler,

        // Catalog
        crate::catalog::adapter::incoming::web::routes::list_streams_handler,
        crate::catalog::adapter::incoming::web::routes::get_career_path_handler,
        crate::catalog::adapter::incoming::web::routes::list_roles_by_sub_domain_handler,

        // Career
        crate::career::adapter::incoming::web::routes::get_role_details_handler,
        crate::career::adapter::incoming::web::routes::get_sub_stream_courses_handler,

        // Progress
        crate::progress::adapter::incoming::web::routes::update_skill_progress_handler,
        crate::progress::adapter::incoming::web::routes::track_course_progress_handler,

        // Feedback
        crate::feedback::adapter::incoming::web::routes::submit_feedback_handler,

        // Admin
        crate::catalog::adapter::incoming::web::routes::list_admin_streams_handler,
        crate::catalog::adapter::incoming::web::routes::create_stream_handler,
        crate::catalog::adapter::incoming::web::routes::update_stream_handler,
        crate::catalog::adapter::incoming::web::routes::delete_stream_handler,
        crate::catalog::adapter::incoming::web::routes::list_admin_sub_domains_handler,
        crate::catalog::adapter::incoming::web::routes::create_sub_domain_handler,
        crate::catalog::adapter::incoming::web::routes::update_sub_domain_handler,
        crate::catalog::adapter::incoming::web::routes::replace_certifications_handler,
        crate::catalog::adapter::incoming::web::routes::delete_sub_domain_handler,
        crate::catalog::adapter::incoming::web::routes::list_admin_roles_handler,
        crate::catalog::adapter::incoming::web::routes::create_role_handler,
        crate::catalog::adapter::incoming::web::routes::update_role_handler,
        crate::catalog::adapter::incoming::web::routes::delete_role_handler,
        crate::catalog::adapter::incoming::web::routes::list_admin_courses_handler,
        crate::catalog::adapter::incoming::web::routes::create_course_handler,
        crate::catalog::adapter::incoming::web::routes::update_course_handler,
        crate::catalog::adapter::incoming::web::routes::delete_course_handler,
        crate::catalog::adapter::incoming::web::routes::list_admin_jobs_handler,
        crate::catalog::adapter::incoming::web::routes::create_job_handler,
        crate::catalog::adapter::incoming::web::routes::update_job_handler,
        crate::catalog::adapter::incoming::web::routes::delete_job_handler,
        crate::feedback::adapter::incoming::web::routes::list_feedback_handler,
        crate::auth::adapter::incoming::web::routes::list_login_logs_handler,
    ),
    components(
        schemas(
            ErrorResponse,

            RegisterUserRequest,
            LoginRequestDto,
            UpdateDetailsRequest,
            UpdatePasswordRequest,
            SelectStreamRequest,

            StreamRequest,
            SubDomainRequest,
            CertificationDto,
            CertificationsRequest,
            RoleRequest,
            CourseRequest,
            CourseLinkDto,
            JobRequest,

            SkillProgressRequest,
            CourseProgressRequest,
            FeedbackRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration, login and the caller's account"),
        (name = "user", description = "Learner profile"),
        (name = "catalog", description = "Streams, sub-domains and roles"),
        (name = "career", description = "Role and sub-stream aggregates with progress"),
        (name = "progress", description = "Skill and course progress"),
        (name = "feedback", description = "Learner feedback"),
        (name = "admin", description = "Catalog management and analytics"),
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
                        .description(Some("Token returned by register or login"))
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_group_is_documented() {
        let doc = ApiDoc::openapi();

        for path in [
            "/api/auth/register",
            "/api/auth/login",
            "/api/auth/me",
            "/api/auth/updatedetails",
            "/api/auth/updatepassword",
            "/api/user/profile",
            "/api/admin/login-logs",
            "/api/user/role-details/{role_id}",
            "/api/user/course-progress",
            "/api/admin/feedback",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn bearer_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");

        assert!(components.security_schemes.contains_key("BearerAuth"));
    }
}
