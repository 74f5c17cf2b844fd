use std::env;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServerConfigError {
    #[error("DATABASE_URL must be set")]
    MissingDatabaseUrl,

    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Emails that register with the admin role.
    pub admin_emails: Vec<String>,
}

impl ServerConfig {
    /// Reads `DATABASE_URL`, `HOST`, `PORT` and `ADMIN_EMAILS`.
    pub fn from_env() -> Result<Self, ServerConfigError> {
        let database_url =
            env::var("DATABASE_URL").map_err(|_| ServerConfigError::MissingDatabaseUrl)?;

        Self::from_parts(
            database_url,
            env::var("HOST").ok(),
            env::var("PORT").ok().as_deref(),
            env::var("ADMIN_EMAILS").ok().as_deref(),
        )
    }

    fn from_parts(
        database_url: String,
        host: Option<String>,
        port: Option<&str>,
        admin_emails: Option<&str>,
    ) -> Result<Self, ServerConfigError> {
        if database_url.trim().is_empty() {
            return Err(ServerConfigError::MissingDatabaseUrl);
        }

        let port = match port {
            None => DEFAULT_PORT,
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ServerConfigError::InvalidPort(raw.to_string()))?,
        };

        let admin_emails = admin_emails
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|email| !email.is_empty())
            .map(String::from)
            .collect();

        Ok(Self {
            database_url,
            host: host
                .filter(|h| !h.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            admin_emails,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "postgres://localhost/oneedu";

    #[test]
    fn defaults_apply_when_unset() {
        let config = ServerConfig::from_parts(URL.into(), None, None, None).unwrap();

        assert_eq!(config.bind_address(), "0.0.0.0:5000");
        assert!(config.admin_emails.is_empty());
    }

    #[test]
    fn admin_emails_are_split_and_trimmed() {
        let config = ServerConfig::from_parts(
            URL.into(),
            Some("127.0.0.1".into()),
            Some("8080"),
            Some(" admin@oneedu.in, ,ops@oneedu.in "),
        )
        .unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.admin_emails, vec!["admin@oneedu.in", "ops@oneedu.in"]);
    }

    #[test]
    fn bad_port_is_rejected() {
        let err = ServerConfig::from_parts(URL.into(), None, Some("http"), None).unwrap_err();

        assert_eq!(err, ServerConfigError::InvalidPort("http".into()));
    }

    #[test]
    fn blank_database_url_is_rejected() {
        let err = ServerConfig::from_parts("  ".into(), None, None, None).unwrap_err();

        assert_eq!(err, ServerConfigError::MissingDatabaseUrl);
    }
}
