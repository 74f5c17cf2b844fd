pub mod login_logs;
pub mod users;
