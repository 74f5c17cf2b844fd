mod catalog_query_postgres;
mod course_repository_postgres;
mod db_errors;
mod job_repository_postgres;
mod role_repository_postgres;
pub mod sea_orm_entity;
mod stream_repository_postgres;
mod sub_domain_repository_postgres;

pub use catalog_query_postgres::CatalogQueryPostgres;
pub use course_repository_postgres::CourseRepositoryPostgres;
pub use job_repository_postgres::JobRepositoryPostgres;
pub use role_repository_postgres::RoleRepositoryPostgres;
pub use stream_repository_postgres::StreamRepositoryPostgres;
pub use sub_domain_repository_postgres::SubDomainRepositoryPostgres;
