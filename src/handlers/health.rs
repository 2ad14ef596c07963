//! Database readiness endpoints.
//! Used by: server.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::health::database::check_database;
use crate::health::report::{health_check, timestamp, HealthResult, HealthStatus, ServiceHealthReport};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: HealthStatus,
    pub database: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timestamp: String,
}

impl From<HealthResult> for ReadinessResponse {
    fn from(result: HealthResult) -> Self {
        match result {
            HealthResult::Healthy { .. } => Self {
                status: HealthStatus::Healthy,
                database: "connected",
                error: None,
                timestamp: timestamp(),
            },
            HealthResult::Unhealthy { message } => Self {
                status: HealthStatus::Unhealthy,
                database: "disconnected",
                error: Some(message),
                timestamp: timestamp(),
            },
        }
    }
}

fn status_code(status: HealthStatus) -> StatusCode {
    match status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `GET /api/health`: one live connect/ping/close against the database.
pub async fn readiness(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
    let result = check_database(state.probe.as_ref(), &state.config.database).await;
    let body = ReadinessResponse::from(result);
    (status_code(body.status), Json(body))
}

/// `GET /api/health/report`: database check plus uptime and memory.
pub async fn report(State(state): State<AppState>) -> (StatusCode, Json<ServiceHealthReport>) {
    let report = health_check(
        state.probe.as_ref(),
        &state.config.database,
        state.process.as_ref(),
    )
    .await;
    (status_code(report.status), Json(report))
}
