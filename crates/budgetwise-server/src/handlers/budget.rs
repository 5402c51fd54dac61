//! Budget log handlers

use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{AppError, AppState};
use budgetwise_core::StoredBudget;

/// Response for a saved budget
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveBudgetResponse {
    pub status: String,
    pub message: String,
}

/// Response listing the budget log
#[derive(Debug, Serialize, Deserialize)]
pub struct BudgetListResponse {
    pub budgets: Vec<StoredBudget>,
}

/// POST /budget - Append a budget document to the log
///
/// Any JSON document is accepted as-is; it is never analyzed.
pub async fn save_budget(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<SaveBudgetResponse>, AppError> {
    let Json(body) = payload.map_err(|e| AppError::bad_request(&e.body_text()))?;

    let entry = state.store.append(body)?;
    info!(timestamp = %entry.timestamp, "Budget saved");

    Ok(Json(SaveBudgetResponse {
        status: "saved".to_string(),
        message: "Budget data saved".to_string(),
    }))
}

/// GET /budget - List saved budgets in submission order
pub async fn list_budgets(
    State(state): State<Arc<AppState>>,
) -> Result<Json<BudgetListResponse>, AppError> {
    let budgets = state.store.list()?;
    Ok(Json(BudgetListResponse { budgets }))
}
