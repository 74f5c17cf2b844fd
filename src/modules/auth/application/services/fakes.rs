//! In-memory stand-ins for the auth outgoing ports, shared by service tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{
    LoginLog, LoginStatus, UserAccount, UserId, UserRole,
};
use crate::auth::application::ports::outgoing::{
    CreateUserData, HashError, LoginLogRepository, LoginLogRepositoryError, LoginStats,
    NewLoginLog, PasswordHasher, TokenClaims, TokenError, TokenProvider, UpdateDetailsData,
    UserProfileQuery, UserProfileView, UserQuery, UserQueryError, UserQueryResult,
    UserRepository, UserRepositoryError,
};

#[derive(Default)]
struct UserStoreState {
    users: Vec<UserQueryResult>,
    streams: Vec<Uuid>,
    fail_with: Option<String>,
}

/// Backs `UserQuery`, `UserRepository` and `UserProfileQuery` with one shared list.
#[derive(Clone, Default)]
pub struct FakeUserStore {
    state: Arc<Mutex<UserStoreState>>,
}

impl FakeUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(self, name: &str, email: &str, password: &str, role: UserRole) -> Self {
        self.insert(name, email, password, role);
        self
    }

    pub fn with_stream(self, stream_id: Uuid) -> Self {
        self.state.lock().unwrap().streams.push(stream_id);
        self
    }

    pub fn failing(self, message: &str) -> Self {
        self.state.lock().unwrap().fail_with = Some(message.to_string());
        self
    }

    pub fn insert(&self, name: &str, email: &str, password: &str, role: UserRole) -> UserId {
        let id = UserId::from(Uuid::new_v4());
        self.state.lock().unwrap().users.push(UserQueryResult {
            account: UserAccount {
                id,
                name: name.to_string(),
                email: email.to_string(),
                role,
                avatar: "https://example.com/avatar.svg".to_string(),
                stream_id: None,
                created_at: Utc::now(),
            },
            password_hash: FakeHasher::hash_of(password),
        });
        id
    }

    pub fn find(&self, user_id: UserId) -> Option<UserQueryResult> {
        self.state
            .lock()
            .unwrap()
            .users
            .iter()
            .find(|u| u.account.id == user_id)
            .cloned()
    }

    pub fn id_of(&self, email: &str) -> UserId {
        self.state
            .lock()
            .unwrap()
            .users
            .iter()
            .find(|u| u.account.email == email)
            .map(|u| u.account.id)
            .unwrap()
    }

    fn failure(&self) -> Option<String> {
        self.state.lock().unwrap().fail_with.clone()
    }

    fn modify<F>(&self, user_id: UserId, change: F) -> Result<UserAccount, UserRepositoryError>
    where
        F: FnOnce(&mut UserQueryResult),
    {
        if let Some(msg) = self.failure() {
            return Err(UserRepositoryError::DatabaseError(msg));
        }
        let mut state = self.state.lock().unwrap();
        let user = state
            .users
            .iter_mut()
            .find(|u| u.account.id == user_id)
            .ok_or(UserRepositoryError::UserNotFound)?;
        change(user);
        Ok(user.account.clone())
    }
}

#[async_trait]
impl UserQuery for FakeUserStore {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<UserQueryResult>, UserQueryError> {
        if let Some(msg) = self.failure() {
            return Err(UserQueryError::DatabaseError(msg));
        }
        Ok(self.find(user_id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError> {
        if let Some(msg) = self.failure() {
            return Err(UserQueryError::DatabaseError(msg));
        }
        Ok(self
            .state
            .lock()
            .unwrap()
            .users
            .iter()
            .find(|u| u.account.email == email)
            .cloned())
    }
}

#[async_trait]
impl UserRepository for FakeUserStore {
    async fn create_user(&self, data: CreateUserData) -> Result<UserAccount, UserRepositoryError> {
        if let Some(msg) = self.failure() {
            return Err(UserRepositoryError::DatabaseError(msg));
        }
        let mut state = self.state.lock().unwrap();
        if state.users.iter().any(|u| u.account.email == data.email) {
            return Err(UserRepositoryError::UserAlreadyExists);
        }
        let account = UserAccount {
            id: UserId::from(Uuid::new_v4()),
            name: data.name,
            email: data.email,
            role: data.role,
            avatar: data.avatar,
            stream_id: None,
            created_at: Utc::now(),
        };
        state.users.push(UserQueryResult {
            account: account.clone(),
            password_hash: data.password_hash,
        });
        Ok(account)
    }

    async fn update_details(
        &self,
        user_id: UserId,
        data: UpdateDetailsData,
    ) -> Result<UserAccount, UserRepositoryError> {
        self.modify(user_id, |user| {
            if let Some(name) = data.name {
                user.account.name = name;
            }
            if let Some(avatar) = data.avatar {
                user.account.avatar = avatar;
            }
        })
    }

    async fn update_password(
        &self,
        user_id: UserId,
        new_password_hash: String,
    ) -> Result<UserAccount, UserRepositoryError> {
        self.modify(user_id, |user| user.password_hash = new_password_hash)
    }

    async fn set_stream(
        &self,
        user_id: UserId,
        stream_id: Option<Uuid>,
    ) -> Result<UserAccount, UserRepositoryError> {
        if let Some(id) = stream_id {
            if !self.state.lock().unwrap().streams.contains(&id) {
                return Err(UserRepositoryError::UnknownStream);
            }
        }
        self.modify(user_id, |user| user.account.stream_id = stream_id)
    }
}

#[async_trait]
impl UserProfileQuery for FakeUserStore {
    async fn profile(&self, user_id: UserId) -> Result<Option<UserProfileView>, UserQueryError> {
        if let Some(msg) = self.failure() {
            return Err(UserQueryError::DatabaseError(msg));
        }
        Ok(self.find(user_id).map(|user| UserProfileView {
            id: user.account.id,
            name: user.account.name,
            email: user.account.email,
            role: user.account.role,
            avatar: user.account.avatar,
            stream: None,
            skill_progress: vec![],
            course_progress: vec![],
            created_at: user.account.created_at,
        }))
    }
}

/// Deterministic "hash" so tests can seed stored credentials.
#[derive(Clone, Default)]
pub struct FakeHasher {
    broken: bool,
}

impl FakeHasher {
    pub fn broken() -> Self {
        Self { broken: true }
    }

    pub fn hash_of(password: &str) -> String {
        format!("hashed:{password}")
    }
}

#[async_trait]
impl PasswordHasher for FakeHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        if self.broken {
            return Err(HashError::HashFailed);
        }
        Ok(Self::hash_of(password))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        if self.broken {
            return Err(HashError::MalformedHash);
        }
        Ok(Self::hash_of(password) == hash)
    }
}

pub struct FakeTokenProvider;

impl FakeTokenProvider {
    pub fn token_for(user_id: Uuid, role: UserRole) -> String {
        format!("token-{}-{}", user_id, role.as_str())
    }
}

impl TokenProvider for FakeTokenProvider {
    fn generate_access_token(&self, user_id: Uuid, role: UserRole) -> Result<String, TokenError> {
        Ok(Self::token_for(user_id, role))
    }

    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        Err(TokenError::MalformedToken)
    }
}

#[derive(Clone, Default)]
pub struct RecordingLoginLogs {
    entries: Arc<Mutex<Vec<NewLoginLog>>>,
    broken: bool,
}

impl RecordingLoginLogs {
    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    pub fn recorded(&self) -> Vec<NewLoginLog> {
        self.entries.lock().unwrap().clone()
    }
}

#[async_trait]
impl LoginLogRepository for RecordingLoginLogs {
    async fn record(&self, entry: NewLoginLog) -> Result<(), LoginLogRepositoryError> {
        if self.broken {
            return Err(LoginLogRepositoryError::DatabaseError("log table offline".into()));
        }
        self.entries.lock().unwrap().push(entry);
        Ok(())
    }

    async fn recent(&self, limit: u64) -> Result<Vec<LoginLog>, LoginLogRepositoryError> {
        if self.broken {
            return Err(LoginLogRepositoryError::DatabaseError("log table offline".into()));
        }
        let entries = self.entries.lock().unwrap();
        Ok(entries
            .iter()
            .rev()
            .take(limit as usize)
            .map(|entry| LoginLog {
                id: Uuid::new_v4(),
                user: entry.user,
                email: entry.email.clone(),
                user_name: entry.user_name.clone(),
                login_time: Utc::now(),
                ip_address: entry.ip_address.clone(),
                user_agent: entry.user_agent.clone(),
                status: entry.status,
                failure_reason: entry.failure_reason.clone(),
            })
            .collect())
    }

    async fn stats(&self) -> Result<LoginStats, LoginLogRepositoryError> {
        if self.broken {
            return Err(LoginLogRepositoryError::DatabaseError("log table offline".into()));
        }
        let entries = self.entries.lock().unwrap();
        let successful = entries
            .iter()
            .filter(|e| e.status == LoginStatus::Success)
            .count() as u64;
        Ok(LoginStats {
            total: entries.len() as u64,
            successful,
            failed: entries.len() as u64 - successful,
        })
    }
}
