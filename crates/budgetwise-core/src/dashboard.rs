//! Dashboard computations
//!
//! Everything the dashboard shows besides the suggestions: the four summary
//! metrics, the series behind its two charts, and the planning widgets. All
//! pure; rendering is up to the caller.

use serde::{Deserialize, Serialize};

use crate::analyzer::{AnalyzerConfig, BudgetMetrics};
use crate::models::{BudgetInput, BudgetStatus, Category};

/// The four headline metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub remaining_budget: f64,
    pub savings_rate: f64,
    pub total_expenses: f64,
    pub monthly_income: f64,
    pub budget_status: BudgetStatus,
}

impl DashboardSummary {
    pub fn from_input(input: &BudgetInput) -> Self {
        let metrics = BudgetMetrics::compute(input);
        Self {
            remaining_budget: metrics.remaining_budget,
            savings_rate: metrics.savings_rate,
            total_expenses: metrics.total_expenses,
            monthly_income: metrics.monthly_income,
            budget_status: BudgetStatus::from_remaining(metrics.remaining_budget),
        }
    }

    /// Whether the savings rate meets the analyzer's low-savings threshold
    pub fn savings_on_target(&self, config: &AnalyzerConfig) -> bool {
        self.savings_rate >= config.low_savings_rate
    }
}

/// One slice of the category-distribution chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: String,
    pub amount: f64,
    /// Percentage of total expenses (0 when there are no expenses)
    pub share: f64,
}

/// Expense distribution by category
///
/// Known dashboard categories come first in display order, followed by any
/// other categories alphabetically.
pub fn category_distribution(input: &BudgetInput) -> Vec<CategoryShare> {
    let total = input.total_expenses();
    let share = |amount: f64| if total > 0.0 { amount / total * 100.0 } else { 0.0 };

    let known = Category::all()
        .iter()
        .filter_map(|c| input.expenses.get_key_value(c.as_str()));
    let others = input
        .expenses
        .iter()
        .filter(|(name, _)| !Category::all().iter().any(|c| c.as_str() == name.as_str()));

    known
        .chain(others)
        .map(|(name, amount)| CategoryShare {
            category: name.clone(),
            amount: *amount,
            share: share(*amount),
        })
        .collect()
}

/// One bar of the income/expense/remaining chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSegment {
    pub label: String,
    pub amount: f64,
}

/// Income, expenses and remaining budget as chart bars
pub fn budget_overview(summary: &DashboardSummary) -> Vec<BarSegment> {
    vec![
        BarSegment {
            label: "Income".to_string(),
            amount: summary.monthly_income,
        },
        BarSegment {
            label: "Expenses".to_string(),
            amount: summary.total_expenses,
        },
        BarSegment {
            label: "Remaining".to_string(),
            amount: summary.remaining_budget,
        },
    ]
}

/// Progress toward a monthly savings target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SavingsGoal {
    Reached { saved: f64 },
    Short { needed: f64 },
}

impl SavingsGoal {
    pub fn evaluate(target: f64, current: f64) -> Self {
        if current >= target {
            SavingsGoal::Reached { saved: current }
        } else {
            SavingsGoal::Short {
                needed: target - current,
            }
        }
    }
}

/// Next month's outlook if spending stays the same
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "amount", rename_all = "snake_case")]
pub enum MonthProjection {
    Surplus(f64),
    Deficit(f64),
}

impl MonthProjection {
    pub fn from_remaining(remaining_budget: f64) -> Self {
        if remaining_budget > 0.0 {
            MonthProjection::Surplus(remaining_budget)
        } else {
            MonthProjection::Deficit(remaining_budget.abs())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BudgetInput {
        BudgetInput::new(5000.0)
            .with_expense("other", 200.0)
            .with_expense("pets", 100.0)
            .with_expense("housing", 1500.0)
            .with_expense("savings", 500.0)
            .with_expense("boats", 200.0)
    }

    #[test]
    fn test_summary() {
        let summary = DashboardSummary::from_input(&sample());
        assert_eq!(summary.total_expenses, 2500.0);
        assert_eq!(summary.remaining_budget, 2500.0);
        assert_eq!(summary.savings_rate, 10.0);
        assert_eq!(summary.budget_status, BudgetStatus::Healthy);
        assert!(!summary.savings_on_target(&AnalyzerConfig::default()));
    }

    #[test]
    fn test_distribution_order_and_shares() {
        let dist = category_distribution(&sample());
        let names: Vec<&str> = dist.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(names, vec!["housing", "savings", "other", "boats", "pets"]);

        assert_eq!(dist[0].share, 60.0);
        let total: f64 = dist.iter().map(|c| c.share).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_distribution_no_expenses() {
        let input = BudgetInput::new(100.0).with_expense("food", 0.0);
        let dist = category_distribution(&input);
        assert_eq!(dist.len(), 1);
        assert_eq!(dist[0].share, 0.0);
    }

    #[test]
    fn test_overview_bars() {
        let bars = budget_overview(&DashboardSummary::from_input(&sample()));
        let labels: Vec<&str> = bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Income", "Expenses", "Remaining"]);
        assert_eq!(bars[2].amount, 2500.0);
    }

    #[test]
    fn test_savings_goal() {
        assert_eq!(
            SavingsGoal::evaluate(1000.0, 500.0),
            SavingsGoal::Short { needed: 500.0 }
        );
        assert_eq!(
            SavingsGoal::evaluate(1000.0, 1000.0),
            SavingsGoal::Reached { saved: 1000.0 }
        );
    }

    #[test]
    fn test_month_projection() {
        assert_eq!(MonthProjection::from_remaining(250.0), MonthProjection::Surplus(250.0));
        assert_eq!(MonthProjection::from_remaining(-80.0), MonthProjection::Deficit(80.0));
        assert_eq!(MonthProjection::from_remaining(0.0), MonthProjection::Deficit(0.0));
    }
}
