mod fetch_profile;
mod list_login_logs;
mod login_user;
mod register_user;
mod select_stream;
mod update_details;
mod update_password;

pub use fetch_profile::*;
pub use list_login_logs::*;
pub use login_user::*;
pub use register_user::*;
pub use select_stream::*;
pub use update_details::*;
pub use update_password::*;
