//! Health check endpoints

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub version: &'static str,
}

/// Process-level health only; the feed host is never contacted here.
pub async fn health() -> Json<HealthReport> {
    Json(HealthReport {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_reports_version() {
        let Json(report) = health().await;
        assert_eq!(report.status, "healthy");
        assert_eq!(report.version, env!("CARGO_PKG_VERSION"));
    }
}
