//! Analyzer - computes budget metrics and runs the rules in order

use serde::{Deserialize, Serialize};

use crate::models::{AnalysisResult, BudgetInput, BudgetStatus, Suggestion, FOOD, HOUSING, SAVINGS};

use super::config::AnalyzerConfig;
use super::rules::{
    EmergencyFundRule, FoodRatioRule, HousingRatioRule, LowSavingsRule, OverBudgetRule, Rule,
    SurplusSavingsRule,
};

/// Metrics the rules compare against thresholds
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetMetrics {
    pub monthly_income: f64,
    pub total_expenses: f64,
    pub remaining_budget: f64,
    pub savings_rate: f64,
    pub housing_ratio: f64,
    pub food_ratio: f64,
}

impl BudgetMetrics {
    pub fn compute(input: &BudgetInput) -> Self {
        let income = input.monthly_income;
        let total_expenses = input.total_expenses();

        Self {
            monthly_income: income,
            total_expenses,
            remaining_budget: income - total_expenses,
            savings_rate: percent_of_income(input.expense(SAVINGS), income),
            housing_ratio: percent_of_income(input.expense(HOUSING), income),
            food_ratio: percent_of_income(input.expense(FOOD), income),
        }
    }

    pub fn to_result(&self) -> AnalysisResult {
        AnalysisResult {
            total_expenses: self.total_expenses,
            remaining_budget: self.remaining_budget,
            savings_rate: self.savings_rate,
            budget_status: BudgetStatus::from_remaining(self.remaining_budget),
        }
    }
}

/// `amount` as a percentage of `income`, 0 when there is no income
pub fn percent_of_income(amount: f64, income: f64) -> f64 {
    if income > 0.0 {
        amount / income * 100.0
    } else {
        0.0
    }
}

/// Outcome of one analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub analysis: AnalysisResult,
    /// Suggestions in rule-evaluation order
    pub suggestions: Vec<Suggestion>,
}

/// Rule engine with its thresholds
///
/// Holds no mutable state; one instance can be shared across threads.
pub struct Analyzer {
    config: AnalyzerConfig,
    rules: Vec<Box<dyn Rule>>,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

impl Analyzer {
    /// Create an analyzer with the built-in rules in evaluation order
    pub fn new(config: AnalyzerConfig) -> Self {
        let rules: Vec<Box<dyn Rule>> = vec![
            Box::new(LowSavingsRule),
            Box::new(OverBudgetRule),
            Box::new(HousingRatioRule),
            Box::new(FoodRatioRule),
            Box::new(EmergencyFundRule),
            Box::new(SurplusSavingsRule),
        ];

        Self { config, rules }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Compute metrics and suggestions for a budget
    pub fn analyze(&self, input: &BudgetInput) -> Analysis {
        let metrics = BudgetMetrics::compute(input);
        let mut suggestions = Vec::new();

        for rule in &self.rules {
            if let Some(suggestion) = rule.evaluate(&metrics, &suggestions, &self.config) {
                tracing::debug!(rule = rule.id().as_str(), "Rule triggered");
                suggestions.push(suggestion);
            }
        }

        tracing::debug!(
            total_expenses = metrics.total_expenses,
            remaining_budget = metrics.remaining_budget,
            savings_rate = metrics.savings_rate,
            count = suggestions.len(),
            "Budget analysis complete"
        );

        Analysis {
            analysis: metrics.to_result(),
            suggestions,
        }
    }
}

/// Analyze a budget with the default thresholds
pub fn analyze(input: &BudgetInput) -> Analysis {
    Analyzer::default().analyze(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SuggestionRule;

    fn rules(analysis: &Analysis) -> Vec<SuggestionRule> {
        analysis.suggestions.iter().map(|s| s.rule).collect()
    }

    #[test]
    fn test_metrics_zero_income() {
        let input = BudgetInput::new(0.0)
            .with_expense(SAVINGS, 500.0)
            .with_expense(HOUSING, 200.0);
        let m = BudgetMetrics::compute(&input);

        assert_eq!(m.savings_rate, 0.0);
        assert_eq!(m.housing_ratio, 0.0);
        assert_eq!(m.food_ratio, 0.0);
        assert_eq!(m.remaining_budget, -700.0);
    }

    #[test]
    fn test_over_budget_comes_second() {
        let input = BudgetInput::new(1000.0)
            .with_expense(HOUSING, 600.0)
            .with_expense(FOOD, 600.0);
        let analysis = analyze(&input);

        assert_eq!(analysis.analysis.budget_status, BudgetStatus::OverBudget);
        assert_eq!(analysis.analysis.remaining_budget, -200.0);
        assert_eq!(
            rules(&analysis),
            vec![
                SuggestionRule::LowSavings,
                SuggestionRule::OverBudget,
                SuggestionRule::HousingRatio,
                SuggestionRule::FoodRatio,
            ]
        );
    }

    #[test]
    fn test_healthy_saver_gets_floor_only() {
        // Saving 40%, nothing over threshold, nothing left over
        let input = BudgetInput::new(1000.0)
            .with_expense(SAVINGS, 400.0)
            .with_expense(HOUSING, 300.0)
            .with_expense(FOOD, 150.0)
            .with_expense("transport", 150.0);
        let analysis = analyze(&input);

        assert_eq!(analysis.analysis.remaining_budget, 0.0);
        assert_eq!(rules(&analysis), vec![SuggestionRule::EmergencyFund]);
    }

    #[test]
    fn test_custom_thresholds() {
        let config = AnalyzerConfig {
            food_ratio_max: 50.0,
            suggestion_floor: 0,
            ..Default::default()
        };
        let analyzer = Analyzer::new(config);
        let input = BudgetInput::new(1000.0)
            .with_expense(SAVINGS, 400.0)
            .with_expense(FOOD, 300.0);
        let analysis = analyzer.analyze(&input);

        // No food warning at 30%, no fallback with a zero floor
        assert!(analysis.suggestions.is_empty());
        assert_eq!(analyzer.config().food_ratio_max, 50.0);
    }
}
