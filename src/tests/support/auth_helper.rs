use actix_web::web;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserRole;
use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider,
};

pub const TEST_USER_ID: Uuid = Uuid::from_u128(0x6f1c_2a4e_0000_4000_8000_0000_0000_0001);
pub const TEST_ADMIN_ID: Uuid = Uuid::from_u128(0x6f1c_2a4e_0000_4000_8000_0000_0000_00ad);

const USER_TOKEN: &str = "user-token";
const ADMIN_TOKEN: &str = "admin-token";

/// Accepts exactly two fixed tokens, one per role.
pub struct StubTokenProvider;

impl TokenProvider for StubTokenProvider {
    fn generate_access_token(&self, user_id: Uuid, role: UserRole) -> Result<String, TokenError> {
        Ok(format!("token-{}-{}", user_id, role.as_str()))
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let (sub, role) = match token {
            USER_TOKEN => (TEST_USER_ID, UserRole::User),
            ADMIN_TOKEN => (TEST_ADMIN_ID, UserRole::Admin),
            _ => return Err(TokenError::MalformedToken),
        };

        let now = chrono::Utc::now().timestamp();
        Ok(TokenClaims {
            sub,
            role,
            iss: "OneEdu".to_string(),
            exp: now + 3600,
            iat: now,
            nbf: now,
        })
    }
}

pub fn token_provider_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    web::Data::new(Arc::new(StubTokenProvider) as Arc<dyn TokenProvider + Send + Sync>)
}

pub fn user_bearer() -> String {
    format!("Bearer {USER_TOKEN}")
}

pub fn admin_bearer() -> String {
    format!("Bearer {ADMIN_TOKEN}")
}
