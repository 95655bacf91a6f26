// Database probe port.
//
// Purpose
// - Verify connectivity to the relational store by asking it for its clock.
//
// Boundaries
// - The service keeps its resources in memory. The database is only probed, never written.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProbeError {
    #[error("database is not configured")]
    Unconfigured,

    #[error("database did not answer within {0:?}")]
    Timeout(Duration),

    #[error("transport error: {0}")]
    Transport(String),
}

#[async_trait]
pub trait DatabaseProbe: Send + Sync {
    async fn server_time(&self) -> Result<NaiveDateTime, ProbeError>;
}

/// Probe used when no database settings are present.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredDatabase;

#[async_trait]
impl DatabaseProbe for UnconfiguredDatabase {
    async fn server_time(&self) -> Result<NaiveDateTime, ProbeError> {
        Err(ProbeError::Unconfigured)
    }
}

pub mod mysql;
