use argon2::{
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;
use rand_core::OsRng;

use crate::auth::application::ports::outgoing::password_hasher::{
    HashError, PasswordHasher as HasherTrait,
};

const DEFAULT_MEMORY_KIB: u32 = 4 * 1024;
const DEFAULT_ITERATIONS: u32 = 3;
const DEFAULT_PARALLELISM: u32 = 1;

#[derive(Clone)]
pub struct Argon2Hasher {
    params: Params,
    #[cfg(test)]
    salt_override: Option<SaltString>,
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Argon2Hasher {
    pub fn new() -> Self {
        Self::with_params(DEFAULT_MEMORY_KIB, DEFAULT_ITERATIONS, DEFAULT_PARALLELISM)
            .unwrap_or_else(|_| Self::from_params(Params::default()))
    }

    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, argon2::Error> {
        Params::new(memory_kib, iterations, parallelism, None).map(Self::from_params)
    }

    /// Reads `ARGON2_MEMORY_KIB`, `ARGON2_ITERATIONS` and `ARGON2_PARALLELISM`.
    /// Invalid combinations fall back to the built-in cost.
    pub fn from_env() -> Self {
        let read = |key: &str, default: u32| -> u32 {
            std::env::var(key)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default)
        };

        let memory_kib = read("ARGON2_MEMORY_KIB", DEFAULT_MEMORY_KIB);
        let iterations = read("ARGON2_ITERATIONS", DEFAULT_ITERATIONS);
        let parallelism = read("ARGON2_PARALLELISM", DEFAULT_PARALLELISM);

        Self::with_params(memory_kib, iterations, parallelism).unwrap_or_else(|e| {
            tracing::warn!("Invalid Argon2 parameters ({e}), using defaults");
            Self::new()
        })
    }

    fn from_params(params: Params) -> Self {
        Self {
            params,
            #[cfg(test)]
            salt_override: None,
        }
    }

    #[cfg(test)]
    pub fn with_fixed_salt(salt: SaltString) -> Self {
        Self {
            salt_override: Some(salt),
            ..Self::new()
        }
    }
}

#[async_trait]
impl HasherTrait for Argon2Hasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_string();
        let params = self.params.clone();

        #[cfg(test)]
        let salt_override = self.salt_override.clone();

        tokio::task::spawn_blocking(move || {
            let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

            #[cfg(test)]
            let salt = salt_override.unwrap_or_else(|| SaltString::generate(&mut OsRng));

            #[cfg(not(test))]
            let salt = SaltString::generate(&mut OsRng);

            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|_| HashError::HashFailed)
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        let password = password.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || {
            let parsed_hash = PasswordHash::new(&hash).map_err(|_| HashError::MalformedHash)?;

            // cost parameters come from the stored hash
            match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
                Ok(_) => Ok(true),
                Err(PasswordHashError::Password) => Ok(false),
                Err(_) => Err(HashError::MalformedHash),
            }
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hash_then_verify_accepts_only_the_original_password() {
        let hasher = Argon2Hasher::new();

        let hashed = hasher.hash_password("secret1").await.unwrap();
        assert!(hashed.starts_with("$argon2id$"));

        assert!(hasher.verify_password("secret1", &hashed).await.unwrap());
        assert!(!hasher.verify_password("secret2", &hashed).await.unwrap());
    }

    #[tokio::test]
    async fn hashes_are_salted() {
        let hasher = Argon2Hasher::new();

        let first = hasher.hash_password("secret1").await.unwrap();
        let second = hasher.hash_password("secret1").await.unwrap();

        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn garbage_hash_is_malformed() {
        let hasher = Argon2Hasher::new();

        let result = hasher.verify_password("secret1", "invalid-hash").await;

        assert!(matches!(result, Err(HashError::MalformedHash)));
    }

    #[tokio::test]
    async fn tampered_params_are_malformed() {
        let hasher = Argon2Hasher::new();
        let valid_hash = hasher.hash_password("password123").await.unwrap();

        let mut parts: Vec<&str> = valid_hash.split('$').collect();
        parts[3] = "m=0,t=0,p=0";
        let tampered = parts.join("$");

        let result = hasher.verify_password("password123", &tampered).await;

        assert!(matches!(result, Err(HashError::MalformedHash)));
    }

    #[tokio::test]
    async fn too_short_salt_fails_hashing() {
        let bad_salt = SaltString::encode_b64(b"short").unwrap();
        let hasher = Argon2Hasher::with_fixed_salt(bad_salt);

        let result = hasher.hash_password("abc123").await;

        assert!(matches!(result, Err(HashError::HashFailed)));
    }

    #[test]
    fn zero_iterations_are_rejected() {
        assert!(Argon2Hasher::with_params(4 * 1024, 0, 1).is_err());
    }
}
