mod feedback_repository_postgres;
pub mod sea_orm_entity;

pub use feedback_repository_postgres::FeedbackRepositoryPostgres;
