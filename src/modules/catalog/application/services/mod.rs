mod browse_catalog_service;
mod course_admin_service;
mod job_admin_service;
mod role_admin_service;
mod stream_admin_service;
mod sub_domain_admin_service;

pub use browse_catalog_service::BrowseCatalogService;
pub use course_admin_service::CourseAdminService;
pub use job_admin_service::JobAdminService;
pub use role_admin_service::RoleAdminService;
pub use stream_admin_service::StreamAdminService;
pub use sub_domain_admin_service::SubDomainAdminService;
