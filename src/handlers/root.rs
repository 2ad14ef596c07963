//! Liveness endpoint polled by the load balancer.
//! Used by: server.

use axum::Json;
use serde::Serialize;

use crate::health::report::{timestamp, HealthStatus};

pub const SERVICE_NAME: &str = "AWS Infrastructure Platform API";

#[derive(Debug, Serialize)]
pub struct LivenessResponse {
    pub status: HealthStatus,
    pub message: &'static str,
    pub timestamp: String,
    pub version: &'static str,
}

/// Always 200; touches no dependency.
pub async fn liveness() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        status: HealthStatus::Healthy,
        message: SERVICE_NAME,
        timestamp: timestamp(),
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn liveness_reports_healthy_service() {
        let Json(body) = liveness().await;
        assert_eq!(body.status, HealthStatus::Healthy);
        assert_eq!(body.message, "AWS Infrastructure Platform API");
        assert_eq!(body.version, "1.0.0");
        assert!(!body.timestamp.is_empty());
    }
}
