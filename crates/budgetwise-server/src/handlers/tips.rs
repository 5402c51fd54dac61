//! Tips handler

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::AppState;
use budgetwise_core::BudgetTips;

/// GET /suggestions - Static budgeting and savings tips
pub async fn get_tips(State(state): State<Arc<AppState>>) -> Json<BudgetTips> {
    Json(state.tips.clone())
}
