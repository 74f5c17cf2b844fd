pub mod auth;
pub mod career;
pub mod catalog;
pub mod feedback;
pub mod progress;
