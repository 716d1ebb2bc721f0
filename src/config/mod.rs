//! # Configuration
//!
//! Environment-driven application configuration with fail-fast validation.
//!
//! `DATABASE_URL` is required and must use the `sqlite://` scheme; everything
//! else has defaults. The notifier is only enabled when both `SMTP_HOST` and
//! `NOTIFY_TO` are present.

pub mod errors;

pub use errors::{ConfigError, ConfigResult};

use std::env;

use crate::http_server::HttpServerConfig;
use crate::notifier::NotifierConfig;

/// Full application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SQLite connection string (`sqlite://...`)
    pub database_url: String,

    /// HTTP server bind settings
    pub http: HttpServerConfig,

    /// Outbound notifier settings, if configured
    pub notifier: Option<NotifierConfig>,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> ConfigResult<Self> {
        let database_url = get("DATABASE_URL").ok_or(ConfigError::MissingDatabaseUrl)?;
        validate_database_url(&database_url)?;

        let mut http = HttpServerConfig::default();
        if let Some(host) = get("HOST") {
            http.host = host;
        }
        if let Some(port) = get("PORT") {
            http.port = parse_number("PORT", &port)?;
        }
        if let Some(origins) = get("CORS_ORIGINS") {
            http.cors_origins = origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        let notifier = match (get("SMTP_HOST"), get("NOTIFY_TO")) {
            (Some(smtp_host), Some(to_email)) => {
                let mut cfg = NotifierConfig {
                    smtp_host,
                    to_email,
                    ..NotifierConfig::default()
                };
                if let Some(port) = get("SMTP_PORT") {
                    cfg.smtp_port = parse_number("SMTP_PORT", &port)?;
                }
                if let Some(user) = get("SMTP_USER") {
                    cfg.smtp_user = user;
                }
                if let Some(password) = get("SMTP_PASSWORD") {
                    cfg.smtp_password = password;
                }
                if let Some(from) = get("NOTIFY_FROM") {
                    cfg.from_email = from;
                }
                if let Some(name) = get("NOTIFY_FROM_NAME") {
                    cfg.from_name = name;
                }
                Some(cfg)
            }
            _ => None,
        };

        Ok(Self {
            database_url,
            http,
            notifier,
        })
    }
}

fn validate_database_url(url: &str) -> ConfigResult<()> {
    if url.starts_with("sqlite://") || url == "sqlite::memory:" {
        Ok(())
    } else {
        Err(ConfigError::InvalidDatabaseUrl(url.to_string()))
    }
}

fn parse_number(var: &str, value: &str) -> ConfigResult<u16> {
    value.parse().map_err(|_| ConfigError::InvalidNumber {
        var: var.to_string(),
        value: value.to_string(),
    })
}
