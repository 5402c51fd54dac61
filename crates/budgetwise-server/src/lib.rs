//! Budgetwise Web Server
//!
//! Axum-based REST API for the Budgetwise budget planner.
//!
//! - `POST /analyze` runs the budget analyzer
//! - `GET|POST /budget` reads or appends the in-memory budget log
//! - `GET /suggestions` returns the static tip lists
//! - `GET /health` reports service status
//!
//! Errors are returned as `{"status": "error", "message": ...}`. Invalid
//! input maps to 400; anything else is logged and reported generically.

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use tracing::{error, info, warn};

use budgetwise_core::{Analyzer, AnalyzerConfig, BudgetStore, BudgetTips, MemoryBudgetStore};

mod handlers;

pub use handlers::{
    AnalyzeResponse, BudgetListResponse, HealthResponse, SaveBudgetResponse, ServiceInfo,
};

/// Service name reported by the index and health endpoints
pub const SERVICE_NAME: &str = "Budgetwise Backend";

/// Maximum request body size (64 KB)
pub const MAX_BODY_SIZE: usize = 64 * 1024;

/// Server configuration
#[derive(Clone, Default)]
pub struct ServerConfig {
    /// Allowed CORS origins (empty = same-origin only, "*" = any origin)
    pub allowed_origins: Vec<String>,
}

/// Shared application state
pub struct AppState {
    pub analyzer: Analyzer,
    /// Append-only budget log, injected so it can be swapped or shared
    pub store: Arc<dyn BudgetStore>,
    pub tips: BudgetTips,
}

/// Parse a comma-separated list of CORS origins
pub fn parse_allowed_origins(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Create the application router with an in-memory budget log
pub fn create_router(config: ServerConfig, analyzer_config: AnalyzerConfig) -> Router {
    create_router_with_store(
        config,
        Analyzer::new(analyzer_config),
        Arc::new(MemoryBudgetStore::new()),
    )
}

/// Create the application router with an explicit analyzer and budget store
pub fn create_router_with_store(
    config: ServerConfig,
    analyzer: Analyzer,
    store: Arc<dyn BudgetStore>,
) -> Router {
    let state = Arc::new(AppState {
        analyzer,
        store,
        tips: BudgetTips::default(),
    });

    let methods = [Method::GET, Method::POST, Method::OPTIONS];

    // Build CORS layer
    let cors = if config.allowed_origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers([header::CONTENT_TYPE])
    } else if config.allowed_origins.is_empty() {
        // Restrictive default: only allow same-origin
        CorsLayer::new()
            .allow_methods(methods)
            .allow_headers([header::CONTENT_TYPE])
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| match o.parse() {
                Ok(v) => Some(v),
                Err(_) => {
                    warn!(origin = %o, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers([header::CONTENT_TYPE])
    };

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .route("/analyze", post(handlers::analyze_budget))
        .route(
            "/budget",
            get(handlers::list_budgets).post(handlers::save_budget),
        )
        .route("/suggestions", get(handlers::get_tips))
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
}

/// Start the server
pub async fn serve(
    host: &str,
    port: u16,
    config: ServerConfig,
    analyzer_config: AnalyzerConfig,
) -> anyhow::Result<()> {
    if config.allowed_origins.iter().any(|o| o == "*") {
        warn!("⚠️  CORS allows any origin");
    }

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    serve_listener(listener, config, analyzer_config).await
}

/// Serve on an already-bound listener
pub async fn serve_listener(
    listener: tokio::net::TcpListener,
    config: ServerConfig,
    analyzer_config: AnalyzerConfig,
) -> anyhow::Result<()> {
    let app = create_router(config, analyzer_config);

    info!("Starting server at http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
pub struct AppError {
    status: StatusCode,
    message: String,
    internal: Option<anyhow::Error>,
}

impl AppError {
    pub fn bad_request(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.to_string(),
            internal: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the full internal error if present
        if let Some(err) = &self.internal {
            error!(error = %err, "Internal error");
        }

        let body = Json(serde_json::json!({
            "status": "error",
            "message": self.message
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        let err = err.into();

        // Validation failures are the caller's fault and safe to echo back
        if let Some(budgetwise_core::Error::InvalidRequest(msg)) =
            err.downcast_ref::<budgetwise_core::Error>()
        {
            return Self::bad_request(msg);
        }

        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            // Return generic message to client
            message: "An internal error occurred".to_string(),
            // Keep full error for logging
            internal: Some(err),
        }
    }
}
