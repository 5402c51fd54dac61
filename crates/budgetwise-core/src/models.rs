//! Data models for Budgetwise

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::analyzer::percent_of_income;
use crate::error::{Error, Result};

/// Expense category keys the analyzer looks at directly
pub const HOUSING: &str = "housing";
pub const FOOD: &str = "food";
pub const SAVINGS: &str = "savings";

/// Monthly budget submitted for analysis
///
/// Expenses are keyed by free-form category name. Only `housing`, `food` and
/// `savings` drive individual rules; every other category is summed into the
/// total and otherwise ignored. A sorted map keeps summation order stable so
/// the same input always produces the same output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetInput {
    pub monthly_income: f64,
    pub expenses: BTreeMap<String, f64>,
}

impl BudgetInput {
    /// Create a budget with no expenses
    pub fn new(monthly_income: f64) -> Self {
        Self {
            monthly_income,
            expenses: BTreeMap::new(),
        }
    }

    /// Add (or replace) an expense category
    pub fn with_expense(mut self, category: impl Into<String>, amount: f64) -> Self {
        self.expenses.insert(category.into(), amount);
        self
    }

    /// Amount for a category, 0 when the category is absent
    pub fn expense(&self, category: &str) -> f64 {
        self.expenses.get(category).copied().unwrap_or(0.0)
    }

    /// Sum of every expense value, regardless of category name
    pub fn total_expenses(&self) -> f64 {
        self.expenses.values().sum()
    }

    /// Build a budget from an untrusted JSON document
    ///
    /// Expects `{"monthly_income": number, "expenses": {category: number}}`.
    /// Missing fields, non-numeric values and negative amounts are all
    /// reported as [`Error::InvalidRequest`].
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        let serde_json::Value::Object(mut body) = value else {
            return Err(Error::InvalidRequest(
                "request body must be a JSON object".to_string(),
            ));
        };

        let monthly_income = match body.remove("monthly_income") {
            Some(v) => v.as_f64().ok_or_else(|| {
                Error::InvalidRequest("monthly_income must be a number".to_string())
            })?,
            None => {
                return Err(Error::InvalidRequest(
                    "monthly_income is required".to_string(),
                ))
            }
        };

        let expenses = match body.remove("expenses") {
            Some(serde_json::Value::Object(map)) => {
                let mut expenses = BTreeMap::new();
                for (category, amount) in map {
                    let amount = amount.as_f64().ok_or_else(|| {
                        Error::InvalidRequest(format!("expense '{}' must be a number", category))
                    })?;
                    expenses.insert(category, amount);
                }
                expenses
            }
            Some(_) => {
                return Err(Error::InvalidRequest(
                    "expenses must be an object of category to amount".to_string(),
                ))
            }
            None => return Err(Error::InvalidRequest("expenses is required".to_string())),
        };

        let input = Self {
            monthly_income,
            expenses,
        };
        input.validate()?;
        Ok(input)
    }

    /// Check that income and every expense are finite and non-negative, and
    /// that every derived metric stays finite
    pub fn validate(&self) -> Result<()> {
        if !self.monthly_income.is_finite() || self.monthly_income < 0.0 {
            return Err(Error::InvalidRequest(
                "monthly_income must be a non-negative number".to_string(),
            ));
        }
        for (category, amount) in &self.expenses {
            if !amount.is_finite() || *amount < 0.0 {
                return Err(Error::InvalidRequest(format!(
                    "expense '{}' must be a non-negative number",
                    category
                )));
            }
        }

        let total = self.total_expenses();
        if !total.is_finite() || !(self.monthly_income - total).is_finite() {
            return Err(Error::InvalidRequest(
                "total expenses are too large to analyze".to_string(),
            ));
        }
        for category in [SAVINGS, HOUSING, FOOD] {
            if !percent_of_income(self.expense(category), self.monthly_income).is_finite() {
                return Err(Error::InvalidRequest(format!(
                    "expense '{}' is too large relative to monthly_income",
                    category
                )));
            }
        }
        Ok(())
    }
}

/// Coarse classification of whether spending exceeds income
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    Healthy,
    OverBudget,
}

impl BudgetStatus {
    /// `Healthy` iff the remaining budget is zero or positive
    pub fn from_remaining(remaining_budget: f64) -> Self {
        if remaining_budget >= 0.0 {
            BudgetStatus::Healthy
        } else {
            BudgetStatus::OverBudget
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetStatus::Healthy => "healthy",
            BudgetStatus::OverBudget => "over_budget",
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Derived budget metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub total_expenses: f64,
    /// Income minus total expenses (negative when over budget)
    pub remaining_budget: f64,
    /// Percentage of income in the `savings` category (0 when income is 0)
    pub savings_rate: f64,
    pub budget_status: BudgetStatus,
}

/// Which rule produced a suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionRule {
    /// Savings rate below target
    LowSavings,
    /// Spending exceeds income
    OverBudget,
    /// Housing takes too large a share of income
    HousingRatio,
    /// Food takes too large a share of income
    FoodRatio,
    /// Generic emergency-fund advice to reach the suggestion floor
    EmergencyFund,
    /// Unspent surplus could go to savings
    SurplusSavings,
}

impl SuggestionRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestionRule::LowSavings => "low_savings",
            SuggestionRule::OverBudget => "over_budget",
            SuggestionRule::HousingRatio => "housing_ratio",
            SuggestionRule::FoodRatio => "food_ratio",
            SuggestionRule::EmergencyFund => "emergency_fund",
            SuggestionRule::SurplusSavings => "surplus_savings",
        }
    }

    /// All rules in evaluation order
    pub fn all() -> &'static [SuggestionRule] {
        &[
            SuggestionRule::LowSavings,
            SuggestionRule::OverBudget,
            SuggestionRule::HousingRatio,
            SuggestionRule::FoodRatio,
            SuggestionRule::EmergencyFund,
            SuggestionRule::SurplusSavings,
        ]
    }
}

impl fmt::Display for SuggestionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Advisory message produced by the analyzer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub rule: SuggestionRule,
    pub title: String,
    /// Explanation, may embed computed percentages or amounts
    pub description: String,
    /// Recommended next step
    pub action: String,
}

impl Suggestion {
    pub fn new(
        rule: SuggestionRule,
        title: impl Into<String>,
        description: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            rule,
            title: title.into(),
            description: description.into(),
            action: action.into(),
        }
    }
}

/// Expense categories the dashboard collects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Housing,
    Food,
    Transport,
    Utilities,
    Entertainment,
    Savings,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Housing => "housing",
            Category::Food => "food",
            Category::Transport => "transport",
            Category::Utilities => "utilities",
            Category::Entertainment => "entertainment",
            Category::Savings => "savings",
            Category::Other => "other",
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Category::Housing => "Housing",
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Utilities => "Utilities",
            Category::Entertainment => "Entertainment",
            Category::Savings => "Savings",
            Category::Other => "Other",
        }
    }

    /// All categories in dashboard display order
    pub fn all() -> &'static [Category] {
        &[
            Category::Housing,
            Category::Food,
            Category::Transport,
            Category::Utilities,
            Category::Entertainment,
            Category::Savings,
            Category::Other,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "housing" => Ok(Category::Housing),
            "food" => Ok(Category::Food),
            "transport" => Ok(Category::Transport),
            "utilities" => Ok(Category::Utilities),
            "entertainment" => Ok(Category::Entertainment),
            "savings" => Ok(Category::Savings),
            "other" => Ok(Category::Other),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_valid() {
        let input = BudgetInput::from_json(json!({
            "monthly_income": 5000,
            "expenses": {"housing": 1500, "food": 800.5, "pets": 20}
        }))
        .unwrap();

        assert_eq!(input.monthly_income, 5000.0);
        assert_eq!(input.expense(HOUSING), 1500.0);
        assert_eq!(input.expense(FOOD), 800.5);
        assert_eq!(input.expense("pets"), 20.0);
        assert_eq!(input.expense(SAVINGS), 0.0);
    }

    #[test]
    fn test_from_json_missing_income() {
        let err = BudgetInput::from_json(json!({"expenses": {}})).unwrap_err();
        assert!(matches!(err, Error::InvalidRequest(_)));
        assert!(err.to_string().contains("monthly_income"));
    }

    #[test]
    fn test_from_json_missing_expenses() {
        let err = BudgetInput::from_json(json!({"monthly_income": 100})).unwrap_err();
        assert!(matches!(err, Error::InvalidRequest(_)));
    }

    #[test]
    fn test_from_json_non_numeric() {
        let err = BudgetInput::from_json(json!({
            "monthly_income": "lots",
            "expenses": {}
        }))
        .unwrap_err();
        assert!(matches!(err, Error::InvalidRequest(_)));

        let err = BudgetInput::from_json(json!({
            "monthly_income": 100,
            "expenses": {"food": "cheap"}
        }))
        .unwrap_err();
        assert!(err.to_string().contains("food"));

        let err = BudgetInput::from_json(json!({
            "monthly_income": 100,
            "expenses": [1, 2]
        }))
        .unwrap_err();
        assert!(matches!(err, Error::InvalidRequest(_)));
    }

    #[test]
    fn test_from_json_rejects_negative() {
        assert!(BudgetInput::from_json(json!({"monthly_income": -1, "expenses": {}})).is_err());
        assert!(BudgetInput::from_json(json!({
            "monthly_income": 10,
            "expenses": {"food": -5}
        }))
        .is_err());
    }

    #[test]
    fn test_from_json_rejects_overflowing_totals() {
        let err = BudgetInput::from_json(json!({
            "monthly_income": 1e308,
            "expenses": {"a": 1e308, "b": 1e308}
        }))
        .unwrap_err();
        assert!(matches!(err, Error::InvalidRequest(_)));

        let err = BudgetInput::from_json(json!({
            "monthly_income": 1e-300,
            "expenses": {"savings": 1e10}
        }))
        .unwrap_err();
        assert!(err.to_string().contains("savings"));

        // Large but representable values are still accepted
        assert!(BudgetInput::from_json(json!({
            "monthly_income": 1e308,
            "expenses": {"a": 1e308}
        }))
        .is_ok());
    }

    #[test]
    fn test_from_json_not_an_object() {
        assert!(BudgetInput::from_json(json!([1, 2, 3])).is_err());
        assert!(BudgetInput::from_json(serde_json::Value::Null).is_err());
    }

    #[test]
    fn test_total_expenses_ignores_names() {
        let input = BudgetInput::new(0.0)
            .with_expense("a", 1.5)
            .with_expense("b", 2.5)
            .with_expense("zzz", 6.0);
        assert_eq!(input.total_expenses(), 10.0);
    }

    #[test]
    fn test_budget_status_boundary() {
        assert_eq!(BudgetStatus::from_remaining(0.0), BudgetStatus::Healthy);
        assert_eq!(BudgetStatus::from_remaining(-0.01), BudgetStatus::OverBudget);
        assert_eq!(
            serde_json::to_value(BudgetStatus::OverBudget).unwrap(),
            json!("over_budget")
        );
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("Housing".parse::<Category>().unwrap(), Category::Housing);
        assert!("rent".parse::<Category>().is_err());
    }
}
