pub mod login_log_repository;
pub mod password_hasher;
pub mod token_provider;
pub mod user_profile_query;
pub mod user_query;
pub mod user_repository;

pub use login_log_repository::{
    LoginLogRepository, LoginLogRepositoryError, LoginStats, NewLoginLog,
};
pub use password_hasher::{HashError, PasswordHasher};
pub use token_provider::{TokenClaims, TokenError, TokenProvider};
pub use user_profile_query::{CourseProgressView, UserProfileQuery, UserProfileView};
pub use user_query::{UserQuery, UserQueryError, UserQueryResult};
pub use user_repository::{
    CreateUserData, UpdateDetailsData, UserRepository, UserRepositoryError,
};
