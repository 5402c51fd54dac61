//! Server command implementation

use std::path::Path;

use anyhow::{Context, Result};

use super::load_analyzer_config;

/// Port used when neither --port nor $PORT is set
const DEFAULT_PORT: u16 = 5000;

/// Resolve the listen port: flag, then $PORT, then the default
pub fn resolve_port(flag: Option<u16>, env_port: Option<&str>) -> Result<u16> {
    if let Some(port) = flag {
        return Ok(port);
    }
    match env_port.map(str::trim).filter(|s| !s.is_empty()) {
        Some(value) => value
            .parse()
            .with_context(|| format!("Invalid PORT value: {}", value)),
        None => Ok(DEFAULT_PORT),
    }
}

pub async fn cmd_serve(config_path: Option<&Path>, host: &str, port: Option<u16>) -> Result<()> {
    let env_port = std::env::var("PORT").ok();
    let port = resolve_port(port, env_port.as_deref())?;
    let analyzer_config = load_analyzer_config(config_path)?;

    // Parse allowed CORS origins from environment (comma-separated)
    let origins_str = std::env::var("BUDGETWISE_ALLOWED_ORIGINS").unwrap_or_default();
    let allowed_origins = budgetwise_server::parse_allowed_origins(&origins_str);

    println!("🚀 Starting Budgetwise API server...");
    println!("   Listening: http://{}:{}", host, port);
    match config_path {
        Some(path) => println!("   Thresholds: {}", path.display()),
        None => println!("   Thresholds: default"),
    }
    if !allowed_origins.is_empty() {
        println!(
            "   🌐 CORS origins: {} (BUDGETWISE_ALLOWED_ORIGINS)",
            allowed_origins.join(", ")
        );
    }
    println!();
    println!("   Press Ctrl+C to stop");

    let config = budgetwise_server::ServerConfig { allowed_origins };
    budgetwise_server::serve(host, port, config, analyzer_config).await?;

    Ok(())
}
