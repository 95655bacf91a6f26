// MySQL probe backed by a lazily connected sqlx pool.
//
// Cloud SQL is reached through its unix socket (/cloudsql/<instance>) in production and over
// TCP locally.

use crate::shared::infrastructure::database::{DatabaseProbe, ProbeError};
use chrono::NaiveDateTime;
use secrecy::{ExposeSecret, SecretString};
use sqlx::MySqlPool;
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MySqlEndpoint {
    Socket(PathBuf),
    Tcp { host: String, port: u16 },
}

#[derive(Debug, Clone)]
pub struct MySqlSettings {
    pub user: String,
    pub password: SecretString,
    pub database: String,
    pub endpoint: MySqlEndpoint,
    pub timeout: Duration,
}

impl MySqlSettings {
    pub fn connect_options(&self) -> MySqlConnectOptions {
        let options = MySqlConnectOptions::new()
            .username(&self.user)
            .password(self.password.expose_secret())
            .database(&self.database);
        match &self.endpoint {
            MySqlEndpoint::Socket(path) => options.socket(path),
            MySqlEndpoint::Tcp { host, port } => options.host(host).port(*port),
        }
    }
}

pub struct MySqlProbe {
    pool: MySqlPool,
    timeout: Duration,
}

impl MySqlProbe {
    /// No connection is opened until the first probe.
    pub fn connect_lazy(settings: &MySqlSettings) -> Self {
        let pool = MySqlPoolOptions::new()
            .max_connections(2)
            .acquire_timeout(settings.timeout)
            .connect_lazy_with(settings.connect_options());
        Self {
            pool,
            timeout: settings.timeout,
        }
    }
}

#[async_trait::async_trait]
impl DatabaseProbe for MySqlProbe {
    async fn server_time(&self) -> Result<NaiveDateTime, ProbeError> {
        let query = sqlx::query_scalar::<_, NaiveDateTime>("SELECT NOW() AS server_time")
            .fetch_one(&self.pool);
        match tokio::time::timeout(self.timeout, query).await {
            Ok(Ok(server_time)) => Ok(server_time),
            Ok(Err(err)) => Err(ProbeError::Transport(err.to_string())),
            Err(_) => Err(ProbeError::Timeout(self.timeout)),
        }
    }
}
