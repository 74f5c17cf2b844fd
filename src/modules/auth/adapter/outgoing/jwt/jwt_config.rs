use std::env;

/// HS256 needs at least this many bytes of key material.
pub const MIN_SECRET_LENGTH: usize = 32;
const DEFAULT_ISSUER: &str = "OneEdu";
/// Thirty days.
const DEFAULT_EXPIRY_SECONDS: i64 = 30 * 24 * 60 * 60;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JwtConfigError {
    #[error("JWT_SECRET must be set")]
    MissingSecret,

    #[error("JWT_SECRET must be at least {MIN_SECRET_LENGTH} characters long for HS256")]
    SecretTooShort,

    #[error("Invalid JWT_EXPIRY value: {0}")]
    InvalidExpiry(String),
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    /// Access token lifetime in seconds.
    pub access_token_expiry: i64,
}

impl JwtConfig {
    /// Load JWT configuration from `JWT_SECRET`, `JWT_ISSUER` and `JWT_EXPIRY`.
    pub fn from_env() -> Result<Self, JwtConfigError> {
        let secret_key = env::var("JWT_SECRET").map_err(|_| JwtConfigError::MissingSecret)?;
        let issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| DEFAULT_ISSUER.to_string());
        let expiry = env::var("JWT_EXPIRY").ok();

        Self::from_parts(secret_key, issuer, expiry.as_deref())
    }

    fn from_parts(
        secret_key: String,
        issuer: String,
        expiry: Option<&str>,
    ) -> Result<Self, JwtConfigError> {
        if secret_key.len() < MIN_SECRET_LENGTH {
            return Err(JwtConfigError::SecretTooShort);
        }

        let access_token_expiry = match expiry {
            None => DEFAULT_EXPIRY_SECONDS,
            Some(raw) => match raw.trim().parse::<i64>() {
                Ok(secs) if secs > 0 => secs,
                _ => return Err(JwtConfigError::InvalidExpiry(raw.to_string())),
            },
        };

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
        })
    }
}
