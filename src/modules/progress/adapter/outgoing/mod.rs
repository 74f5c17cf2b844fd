mod user_progress_repository_postgres;

pub use user_progress_repository_postgres::UserProgressRepositoryPostgres;
