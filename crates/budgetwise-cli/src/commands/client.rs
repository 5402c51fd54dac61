//! HTTP client for the Budgetwise API
//!
//! Used by the dashboard. Connection failures are reported as a single
//! "not reachable" error; there is no local fallback.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use budgetwise_core::models::BudgetInput;
use budgetwise_server::{AnalyzeResponse, HealthResponse};

/// Error body returned by the API
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

pub struct ApiClient {
    http_client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET /health
    pub async fn health(&self) -> Result<HealthResponse> {
        let url = format!("{}/health", self.base_url);
        debug!(url = %url, "Checking backend health");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Backend server is not reachable at {}", self.base_url))?;

        if !response.status().is_success() {
            bail!("Backend health check failed: HTTP {}", response.status());
        }

        response
            .json()
            .await
            .context("Failed to parse health response")
    }

    /// POST /analyze
    pub async fn analyze(&self, input: &BudgetInput) -> Result<AnalyzeResponse> {
        let url = format!("{}/analyze", self.base_url);
        debug!(url = %url, "Requesting budget analysis");

        let response = self
            .http_client
            .post(&url)
            .json(input)
            .send()
            .await
            .with_context(|| format!("Backend server is not reachable at {}", self.base_url))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|b| b.message)
                .unwrap_or_else(|| "no details".to_string());
            bail!("Analysis failed (HTTP {}): {}", status, message);
        }

        response
            .json()
            .await
            .context("Failed to parse analysis response")
    }
}
