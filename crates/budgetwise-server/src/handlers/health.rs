//! Service index and health handlers

use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::SERVICE_NAME;

/// Service description returned by the index
#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    pub status: String,
    pub endpoints: Vec<String>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub service: String,
}

/// GET / - Describe the service and its endpoints
pub async fn index() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: format!("{} API", SERVICE_NAME),
        status: "running".to_string(),
        endpoints: ["/health", "/analyze", "/budget", "/suggestions"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    })
}

/// GET /health - Service status and current time
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        service: SERVICE_NAME.to_string(),
    })
}
