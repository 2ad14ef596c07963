//! Health result types and the aggregate service report.
//! Used by: health::database, handlers::health, handlers::root.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::config::DatabaseConfig;
use crate::health::database::{check_database, DatabaseProbe};
use crate::health::process::{MemorySnapshot, ProcessStats};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Outcome of a single dependency check. Serializes as
/// `{"status": "healthy" | "unhealthy", "message": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum HealthResult {
    Healthy { message: String },
    Unhealthy { message: String },
}

impl HealthResult {
    pub fn status(&self) -> HealthStatus {
        match self {
            HealthResult::Healthy { .. } => HealthStatus::Healthy,
            HealthResult::Unhealthy { .. } => HealthStatus::Unhealthy,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            HealthResult::Healthy { message } | HealthResult::Unhealthy { message } => message,
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status() == HealthStatus::Healthy
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Services {
    pub database: HealthResult,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceHealthReport {
    pub status: HealthStatus,
    pub timestamp: String,
    pub services: Services,
    pub uptime_seconds: f64,
    pub memory: MemorySnapshot,
}

/// Current UTC time as ISO-8601 with millisecond precision, e.g.
/// `2024-05-01T12:00:00.000Z`.
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Run the database check and wrap it with process metadata. With a single
/// dependency the overall status is the database status.
pub async fn health_check(
    probe: &dyn DatabaseProbe,
    config: &DatabaseConfig,
    stats: &dyn ProcessStats,
) -> ServiceHealthReport {
    let database = check_database(probe, config).await;
    ServiceHealthReport {
        status: database.status(),
        timestamp: timestamp(),
        services: Services { database },
        uptime_seconds: stats.uptime_seconds(),
        memory: stats.memory(),
    }
}
