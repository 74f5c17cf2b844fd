pub mod fetch_profile;
pub mod list_login_logs;
pub mod login_user;
pub mod register_user;
pub mod select_stream;
pub mod update_details;
pub mod update_password;

pub const MIN_PASSWORD_LENGTH: usize = 5;
pub const MAX_PASSWORD_LENGTH: usize = 128;
pub const MAX_NAME_LENGTH: usize = 100;
