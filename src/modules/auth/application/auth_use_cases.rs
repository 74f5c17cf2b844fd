use std::sync::Arc;

use crate::auth::application::use_cases::{
    fetch_profile::FetchProfileUseCase, list_login_logs::ListLoginLogsUseCase,
    login_user::LoginUserUseCase, register_user::RegisterUserUseCase,
    select_stream::SelectStreamUseCase, update_details::UpdateDetailsUseCase,
    update_password::UpdatePasswordUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub register: Arc<dyn RegisterUserUseCase + Send + Sync>,
    pub login: Arc<dyn LoginUserUseCase + Send + Sync>,
    pub fetch_profile: Arc<dyn FetchProfileUseCase + Send + Sync>,
    pub update_details: Arc<dyn UpdateDetailsUseCase + Send + Sync>,
    pub update_password: Arc<dyn UpdatePasswordUseCase + Send + Sync>,
    pub select_stream: Arc<dyn SelectStreamUseCase + Send + Sync>,
    pub list_login_logs: Arc<dyn ListLoginLogsUseCase + Send + Sync>,
}
