//! Liveness endpoint.

use axum::Json;
use serde::Serialize;

use super::segment::dto::SuccessResponse;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /health
pub async fn health() -> Json<SuccessResponse<HealthStatus>> {
    Json(SuccessResponse::new(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    }))
}
