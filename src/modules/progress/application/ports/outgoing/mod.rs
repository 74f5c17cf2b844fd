mod user_progress_repository;

pub use user_progress_repository::{UserProgressRepository, UserProgressRepositoryError};
