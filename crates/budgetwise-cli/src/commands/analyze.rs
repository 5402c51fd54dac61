//! Local analysis command implementation

use std::path::Path;

use anyhow::{bail, Context, Result};
use budgetwise_core::analyzer::{format_amount, Analyzer};
use budgetwise_core::models::BudgetInput;
use budgetwise_core::Analysis;

use super::load_analyzer_config;

/// Parse a `CATEGORY=AMOUNT` pair
pub fn parse_expense(pair: &str) -> Result<(String, f64)> {
    let (category, amount) = pair
        .split_once('=')
        .with_context(|| format!("Expected CATEGORY=AMOUNT, got '{}'", pair))?;

    let category = category.trim().to_lowercase();
    if category.is_empty() {
        bail!("Missing category name in '{}'", pair);
    }

    let amount: f64 = amount
        .trim()
        .parse()
        .with_context(|| format!("Invalid amount for '{}': {}", category, amount.trim()))?;

    Ok((category, amount))
}

/// Build and validate a budget from CLI arguments
pub fn build_input(income: f64, expenses: &[String]) -> Result<BudgetInput> {
    let mut input = BudgetInput::new(income);

    for pair in expenses {
        let (category, amount) = parse_expense(pair)?;
        if input.expenses.contains_key(&category) {
            bail!("Category '{}' given more than once", category);
        }
        input = input.with_expense(category, amount);
    }

    input.validate()?;
    Ok(input)
}

pub fn cmd_analyze(
    config_path: Option<&Path>,
    income: f64,
    expenses: &[String],
    json: bool,
) -> Result<()> {
    print!("{}", analysis_report(config_path, income, expenses, json)?);
    Ok(())
}

/// Run a local analysis and render it as text or pretty JSON
pub fn analysis_report(
    config_path: Option<&Path>,
    income: f64,
    expenses: &[String],
    json: bool,
) -> Result<String> {
    let config = load_analyzer_config(config_path)?;
    let input = build_input(income, expenses)?;
    let analyzer = Analyzer::new(config);
    let result = analyzer.analyze(&input);

    if json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(&result)?));
    }

    Ok(render_analysis(&result, &analyzer.config().currency))
}

/// Human-readable analysis report
pub fn render_analysis(result: &Analysis, currency: &str) -> String {
    let a = &result.analysis;
    let mut out = String::new();

    out.push('\n');
    out.push_str("📊 Budget Analysis\n");
    out.push_str("   ─────────────────────────────────────────────────────────────\n");
    out.push_str(&format!(
        "   Total expenses:   {}\n",
        format_amount(a.total_expenses, currency)
    ));
    out.push_str(&format!(
        "   Remaining budget: {}\n",
        format_amount(a.remaining_budget, currency)
    ));
    out.push_str(&format!("   Savings rate:     {:.1}%\n", a.savings_rate));
    out.push_str(&format!("   Status:           {}\n", a.budget_status));
    out.push('\n');
    out.push_str(&super::dashboard::render_suggestions(&result.suggestions));
    out
}
