//! Budget analysis handler

use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{AppError, AppState};
use budgetwise_core::{Analysis, BudgetInput};

/// Analysis response: `{status, analysis, suggestions}`
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub status: String,
    #[serde(flatten)]
    pub result: Analysis,
}

/// POST /analyze - Analyze a monthly budget
///
/// Body: `{"monthly_income": number, "expenses": {category: number, ...}}`.
/// The body is validated before it reaches the analyzer; any malformed input
/// is a 400 with a message and no analysis fields.
pub async fn analyze_budget(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let Json(body) = payload.map_err(|e| AppError::bad_request(&e.body_text()))?;
    let input = BudgetInput::from_json(body)?;

    let result = state.analyzer.analyze(&input);

    info!(
        categories = input.expenses.len(),
        status = %result.analysis.budget_status,
        suggestions = result.suggestions.len(),
        "Budget analyzed"
    );

    Ok(Json(AnalyzeResponse {
        status: "success".to_string(),
        result,
    }))
}
