//! Built-in suggestion rules
//!
//! Each rule looks at the computed metrics (and at what earlier rules already
//! emitted) and produces at most one suggestion.

use crate::models::{Suggestion, SuggestionRule};

use super::config::AnalyzerConfig;
use super::engine::BudgetMetrics;

/// A single threshold check over the budget metrics
pub trait Rule: Send + Sync {
    /// Identifier stamped on the suggestions this rule produces
    fn id(&self) -> SuggestionRule;

    /// Evaluate the rule. `emitted` holds the suggestions produced by the
    /// rules that ran before this one.
    fn evaluate(
        &self,
        metrics: &BudgetMetrics,
        emitted: &[Suggestion],
        config: &AnalyzerConfig,
    ) -> Option<Suggestion>;
}

/// Savings rate under the recommended minimum
pub struct LowSavingsRule;

impl Rule for LowSavingsRule {
    fn id(&self) -> SuggestionRule {
        SuggestionRule::LowSavings
    }

    fn evaluate(
        &self,
        metrics: &BudgetMetrics,
        _emitted: &[Suggestion],
        config: &AnalyzerConfig,
    ) -> Option<Suggestion> {
        if metrics.savings_rate >= config.low_savings_rate {
            return None;
        }

        Some(Suggestion::new(
            self.id(),
            "Increase Your Savings Rate",
            format!(
                "You are currently saving {:.1}% of your income. {}-{}% is recommended for financial security.",
                metrics.savings_rate,
                format_number(config.savings_target_min),
                format_number(config.savings_target_max)
            ),
            format!(
                "Raise your monthly savings target to {}% of your income.",
                format_number(config.savings_target_min)
            ),
        ))
    }
}

/// Spending exceeds income
pub struct OverBudgetRule;

impl Rule for OverBudgetRule {
    fn id(&self) -> SuggestionRule {
        SuggestionRule::OverBudget
    }

    fn evaluate(
        &self,
        metrics: &BudgetMetrics,
        _emitted: &[Suggestion],
        config: &AnalyzerConfig,
    ) -> Option<Suggestion> {
        if metrics.remaining_budget >= 0.0 {
            return None;
        }

        Some(Suggestion::new(
            self.id(),
            "Close Your Budget Gap",
            format!(
                "You are spending {} more than your income. This can lead to accumulating debt.",
                format_amount(metrics.remaining_budget.abs(), &config.currency)
            ),
            "Cut unnecessary expenses or increase your income.",
        ))
    }
}

/// Housing share of income above the limit
pub struct HousingRatioRule;

impl Rule for HousingRatioRule {
    fn id(&self) -> SuggestionRule {
        SuggestionRule::HousingRatio
    }

    fn evaluate(
        &self,
        metrics: &BudgetMetrics,
        _emitted: &[Suggestion],
        config: &AnalyzerConfig,
    ) -> Option<Suggestion> {
        if metrics.housing_ratio <= config.housing_ratio_max {
            return None;
        }

        Some(Suggestion::new(
            self.id(),
            "Review Your Housing Costs",
            format!(
                "Housing costs make up {:.1}% of your income. Keeping them below {}% is recommended.",
                metrics.housing_ratio,
                format_number(config.housing_ratio_max)
            ),
            "Consider more affordable housing options.",
        ))
    }
}

/// Food share of income above the limit
pub struct FoodRatioRule;

impl Rule for FoodRatioRule {
    fn id(&self) -> SuggestionRule {
        SuggestionRule::FoodRatio
    }

    fn evaluate(
        &self,
        metrics: &BudgetMetrics,
        _emitted: &[Suggestion],
        config: &AnalyzerConfig,
    ) -> Option<Suggestion> {
        if metrics.food_ratio <= config.food_ratio_max {
            return None;
        }

        Some(Suggestion::new(
            self.id(),
            "Optimize Your Food Spending",
            format!(
                "Food costs make up {:.1}% of your income. Home cooking and bulk shopping save money.",
                metrics.food_ratio
            ),
            "Cook at home more often and shop in bulk.",
        ))
    }
}

/// Generic advice, added while the running count is below the floor
///
/// Only the suggestions emitted before this rule count toward the floor, so
/// the surplus rule that runs afterwards may still push the list past it.
pub struct EmergencyFundRule;

impl Rule for EmergencyFundRule {
    fn id(&self) -> SuggestionRule {
        SuggestionRule::EmergencyFund
    }

    fn evaluate(
        &self,
        _metrics: &BudgetMetrics,
        emitted: &[Suggestion],
        config: &AnalyzerConfig,
    ) -> Option<Suggestion> {
        if emitted.len() >= config.suggestion_floor {
            return None;
        }

        Some(Suggestion::new(
            self.id(),
            "Build an Emergency Fund",
            format!(
                "Build an emergency fund that covers at least {}-{} months of expenses.",
                config.emergency_fund_months_min, config.emergency_fund_months_max
            ),
            format!(
                "Set aside {}% of your monthly income for your emergency fund.",
                format_number(config.emergency_fund_contribution)
            ),
        ))
    }
}

/// Money left over while savings are still under the upper target
pub struct SurplusSavingsRule;

impl Rule for SurplusSavingsRule {
    fn id(&self) -> SuggestionRule {
        SuggestionRule::SurplusSavings
    }

    fn evaluate(
        &self,
        metrics: &BudgetMetrics,
        _emitted: &[Suggestion],
        config: &AnalyzerConfig,
    ) -> Option<Suggestion> {
        if metrics.remaining_budget <= 0.0 || metrics.savings_rate >= config.surplus_savings_rate_max
        {
            return None;
        }

        Some(Suggestion::new(
            self.id(),
            "Put Your Surplus to Work",
            format!(
                "You could save another {} from your remaining budget.",
                format_amount(metrics.remaining_budget, &config.currency)
            ),
            "Transfer your remaining budget to your savings accounts.",
        ))
    }
}

/// Format a number without trailing decimals when it is whole ("1000"),
/// otherwise in its shortest exact form ("1000.5", "999.999")
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

/// Format an amount with its currency label
pub fn format_amount(value: f64, currency: &str) -> String {
    if currency.is_empty() {
        format_number(value)
    } else {
        format!("{} {}", format_number(value), currency)
    }
}
