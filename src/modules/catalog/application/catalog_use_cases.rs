use std::sync::Arc;

use crate::catalog::application::ports::incoming::use_cases::{
    BrowseCatalogUseCase, CourseAdminUseCase, JobAdminUseCase, RoleAdminUseCase,
    StreamAdminUseCase, SubDomainAdminUseCase,
};

#[derive(Clone)]
pub struct CatalogUseCases {
    pub browse: Arc<dyn BrowseCatalogUseCase + Send + Sync>,
    pub streams: Arc<dyn StreamAdminUseCase + Send + Sync>,
    pub sub_domains: Arc<dyn SubDomainAdminUseCase + Send + Sync>,
    pub roles: Arc<dyn RoleAdminUseCase + Send + Sync>,
    pub courses: Arc<dyn CourseAdminUseCase + Send + Sync>,
    pub jobs: Arc<dyn JobAdminUseCase + Send + Sync>,
}
