mod catalog_query;
mod course_repository;
mod job_repository;
mod repository_error;
mod role_repository;
mod stream_repository;
mod sub_domain_repository;

pub use catalog_query::{CatalogQuery, CatalogQueryError};
pub use course_repository::{CourseData, CourseRepository};
pub use job_repository::{JobData, JobRepository};
pub use repository_error::CatalogRepositoryError;
pub use role_repository::{RoleData, RoleRepository};
pub use stream_repository::{StreamData, StreamRepository};
pub use sub_domain_repository::{SubDomainData, SubDomainRepository};
