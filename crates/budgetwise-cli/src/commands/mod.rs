//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `analyze` - Local budget analysis
//! - `client` - HTTP client for the API server
//! - `dashboard` - Terminal dashboard (metrics, charts, suggestions)
//! - `serve` - Web server command
//! - `tips` - Tips and health commands

pub mod analyze;
pub mod client;
pub mod dashboard;
pub mod serve;
pub mod tips;

use std::path::Path;

use anyhow::{Context, Result};
use budgetwise_core::AnalyzerConfig;

// Re-export command functions for main.rs
pub use analyze::*;
pub use dashboard::*;
pub use serve::*;
pub use tips::*;

/// Load analyzer thresholds from `--config`, the data-dir override, or defaults
pub fn load_analyzer_config(path: Option<&Path>) -> Result<AnalyzerConfig> {
    AnalyzerConfig::load(path).context("Failed to load analyzer config")
}

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
