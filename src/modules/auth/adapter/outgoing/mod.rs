pub mod jwt;
mod login_log_repository_postgres;
pub mod sea_orm_entity;
pub mod security;
mod user_profile_query_postgres;
mod user_query_postgres;
mod user_repository_postgres;

pub use login_log_repository_postgres::LoginLogRepositoryPostgres;
pub use user_profile_query_postgres::UserProfileQueryPostgres;
pub use user_query_postgres::UserQueryPostgres;
pub use user_repository_postgres::UserRepositoryPostgres;
