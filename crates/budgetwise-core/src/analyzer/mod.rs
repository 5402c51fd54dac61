//! Budget Analyzer - rule-based budget suggestions
//!
//! Turns a monthly income and a map of expenses into derived metrics and an
//! ordered list of suggestions. The analyzer is a pure function of its input
//! and its [`AnalyzerConfig`]: no I/O, no shared state.
//!
//! ## Rules (evaluation order)
//!
//! 1. **Low savings** - savings rate under target
//! 2. **Over budget** - expenses exceed income
//! 3. **Housing ratio** - housing share of income too high
//! 4. **Food ratio** - food share of income too high
//! 5. **Emergency fund** - generic advice while under the suggestion floor
//! 6. **Surplus savings** - leftover money that could be saved
//!
//! ## Usage
//!
//! ```rust
//! use budgetwise_core::analyzer::analyze;
//! use budgetwise_core::models::BudgetInput;
//!
//! let input = BudgetInput::new(5000.0).with_expense("housing", 1500.0);
//! let result = analyze(&input);
//! assert!(!result.suggestions.is_empty());
//! ```

pub mod config;
pub mod engine;
pub mod rules;

pub use config::{default_config_path, AnalyzerConfig};
pub use engine::{analyze, percent_of_income, Analysis, Analyzer, BudgetMetrics};
pub use rules::{format_amount, format_number, Rule};
