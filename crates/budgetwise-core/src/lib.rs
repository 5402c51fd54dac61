//! Budgetwise Core Library
//!
//! Shared functionality for the Budgetwise budget planner:
//! - Budget models and input validation
//! - Rule-based budget analyzer with configurable thresholds
//! - Append-only budget log
//! - Dashboard metrics, chart series and planning helpers
//! - Static budgeting tips

pub mod analyzer;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod store;
pub mod tips;

pub use analyzer::{analyze, Analysis, Analyzer, AnalyzerConfig};
pub use dashboard::{DashboardSummary, MonthProjection, SavingsGoal};
pub use error::{Error, Result};
pub use models::{AnalysisResult, BudgetInput, BudgetStatus, Category, Suggestion, SuggestionRule};
pub use store::{BudgetStore, MemoryBudgetStore, StoredBudget};
pub use tips::BudgetTips;
