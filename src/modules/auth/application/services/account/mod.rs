mod login_user;
mod register_user;
mod update_password;

pub use login_user::LoginUserService;
pub use register_user::RegisterUserService;
pub use update_password::UpdatePasswordService;
