//! Typed configuration from environment variables.
//!
//! Loads once at startup. Database and Pub/Sub settings are optional: when they are missing
//! the service runs with an unconfigured probe and a no-op publisher.

use crate::shared::application::notifier::{DEFAULT_MAX_ATTEMPTS, DEFAULT_TIMEOUT};
use crate::shared::infrastructure::database::mysql::{MySqlEndpoint, MySqlSettings};
use crate::shared::infrastructure::event_bus::pubsub::PubSubSettings;
use secrecy::SecretString;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tokio::net::TcpListener;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_MYSQL_PORT: u16 = 3306;
const DEFAULT_DB_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<MySqlSettings>,
    pub pubsub: Option<PubSubSettings>,
    pub notifier_timeout: Duration,
    pub notifier_max_attempts: u32,
}

impl AppConfig {
    /// In local dev, call `dotenvy::dotenv().ok()` before this.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let port = match var("FASTAPIPORT").or_else(|| var("PORT")) {
            Some(value) => parse("FASTAPIPORT", value)?,
            None => DEFAULT_PORT,
        };
        let notifier_timeout = match var("NOTIFIER_TIMEOUT_MS") {
            Some(value) => Duration::from_millis(parse("NOTIFIER_TIMEOUT_MS", value)?),
            None => DEFAULT_TIMEOUT,
        };
        let notifier_max_attempts = match var("NOTIFIER_MAX_ATTEMPTS") {
            Some(value) => parse("NOTIFIER_MAX_ATTEMPTS", value)?,
            None => DEFAULT_MAX_ATTEMPTS,
        };
        let db_timeout = match var("DB_TIMEOUT_MS") {
            Some(value) => Duration::from_millis(parse("DB_TIMEOUT_MS", value)?),
            None => DEFAULT_DB_TIMEOUT,
        };

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            database: database_settings(&var, db_timeout)?,
            pubsub: pubsub_settings(&var, notifier_timeout),
            notifier_timeout,
            notifier_max_attempts,
        })
    }

    /// `HOST` may be an IP address or a hostname; names are resolved here.
    pub async fn bind(&self) -> std::io::Result<TcpListener> {
        TcpListener::bind((self.host.as_str(), self.port)).await
    }
}

fn parse<T: std::str::FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { name, value })
}

fn database_settings(
    var: &impl Fn(&str) -> Option<String>,
    timeout: Duration,
) -> Result<Option<MySqlSettings>, ConfigError> {
    let (Some(user), Some(database)) = (var("DB_USER"), var("DB_NAME")) else {
        return Ok(None);
    };
    let endpoint = if let Some(instance) = var("INSTANCE_CONNECTION_NAME") {
        MySqlEndpoint::Socket(PathBuf::from(format!("/cloudsql/{instance}")))
    } else if let Some(host) = var("DB_HOST") {
        let port = match var("DB_PORT") {
            Some(value) => parse("DB_PORT", value)?,
            None => DEFAULT_MYSQL_PORT,
        };
        MySqlEndpoint::Tcp { host, port }
    } else {
        return Ok(None);
    };

    Ok(Some(MySqlSettings {
        user,
        password: SecretString::from(var("DB_PASS").unwrap_or_default()),
        database,
        endpoint,
        timeout,
    }))
}

fn pubsub_settings(
    var: &impl Fn(&str) -> Option<String>,
    request_timeout: Duration,
) -> Option<PubSubSettings> {
    let project_id = var("PUBSUB_PROJECT_ID")?;
    let topic_id = var("PUBSUB_TOPIC_ID")?;
    Some(PubSubSettings {
        project_id,
        topic_id,
        access_token: var("PUBSUB_ACCESS_TOKEN").map(SecretString::from),
        emulator_host: var("PUBSUB_EMULATOR_HOST"),
        request_timeout,
    })
}
