//! Terminal dashboard
//!
//! Shows the four summary metrics, the category and income/expense charts,
//! the planning widgets and (with `--suggest`) the server's suggestions.

use std::path::Path;

use anyhow::Result;
use budgetwise_core::analyzer::format_amount;
use budgetwise_core::dashboard::{
    budget_overview, category_distribution, BarSegment, CategoryShare, DashboardSummary,
    MonthProjection, SavingsGoal,
};
use budgetwise_core::models::{BudgetStatus, Category, Suggestion};
use budgetwise_core::AnalyzerConfig;

use super::client::ApiClient;
use super::{load_analyzer_config, truncate};
use crate::cli::DashboardArgs;

/// Width of the longest chart bar
const BAR_WIDTH: usize = 30;

pub async fn cmd_dashboard(config_path: Option<&Path>, args: &DashboardArgs) -> Result<()> {
    let config = load_analyzer_config(config_path)?;
    let client = ApiClient::new(&args.api_url)?;

    // The dashboard is useless without the backend; stop before rendering
    if let Err(e) = client.health().await {
        anyhow::bail!(
            "⚠️  Backend server is not running ({}). Start it with `budgetwise serve`.",
            e
        );
    }

    let input = args.to_input();
    input.validate()?;
    let summary = DashboardSummary::from_input(&input);

    println!();
    println!("╭─────────────────────────────────────────╮");
    println!("│        💰 Budgetwise Dashboard          │");
    println!("╰─────────────────────────────────────────╯");
    print!("{}", render_summary(&summary, &config));
    print!(
        "{}",
        render_distribution_chart(&category_distribution(&input), &config.currency)
    );
    print!(
        "{}",
        render_overview_chart(&budget_overview(&summary), &config.currency)
    );

    if args.suggest {
        let response = client.analyze(&input).await?;
        println!();
        println!("🤖 Budget Suggestions");
        println!("   ─────────────────────────────────────────────────────────────");
        print!("{}", render_suggestions(&response.result.suggestions));
    }

    print!(
        "{}",
        render_planning(
            SavingsGoal::evaluate(args.savings_target, args.amount(Category::Savings)),
            MonthProjection::from_remaining(summary.remaining_budget),
            &config.currency,
        )
    );
    println!();

    Ok(())
}

/// The four headline metrics
pub fn render_summary(summary: &DashboardSummary, config: &AnalyzerConfig) -> String {
    let currency = &config.currency;
    let status_icon = match summary.budget_status {
        BudgetStatus::Healthy => "✅",
        BudgetStatus::OverBudget => "❌",
    };
    let savings_icon = if summary.savings_on_target(config) {
        "✅"
    } else {
        "⚠️ "
    };

    let mut out = String::new();
    out.push('\n');
    out.push_str(&format!(
        "  {} Remaining budget: {}\n",
        status_icon,
        format_amount(summary.remaining_budget, currency)
    ));
    out.push_str(&format!(
        "  {} Savings rate:     {:.1}%\n",
        savings_icon, summary.savings_rate
    ));
    out.push_str(&format!(
        "  📊 Total expenses:   {}\n",
        format_amount(summary.total_expenses, currency)
    ));
    out.push_str(&format!(
        "  💵 Monthly income:   {}\n",
        format_amount(summary.monthly_income, currency)
    ));
    out
}

/// Horizontal bar scaled so `max` fills [`BAR_WIDTH`]
pub fn bar(value: f64, max: f64) -> String {
    if max <= 0.0 || value == 0.0 {
        return String::new();
    }
    let len = ((value.abs() / max) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(len.clamp(1, BAR_WIDTH))
}

/// Category distribution chart (share of total expenses)
pub fn render_distribution_chart(shares: &[CategoryShare], currency: &str) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str("📊 Expense Distribution\n");
    out.push_str("   ─────────────────────────────────────────────────────────────\n");

    if shares.is_empty() {
        out.push_str("   No expenses entered.\n");
        return out;
    }

    let max = shares.iter().map(|s| s.amount).fold(0.0, f64::max);
    for share in shares {
        let label = share
            .category
            .parse::<Category>()
            .map(|c| c.label().to_string())
            .unwrap_or_else(|_| share.category.clone());
        out.push_str(&format!(
            "   {:14} │ {:30} {:>5.1}%  {}\n",
            truncate(&label, 14),
            bar(share.amount, max),
            share.share,
            format_amount(share.amount, currency)
        ));
    }
    out
}

/// Income vs expenses vs remaining chart
pub fn render_overview_chart(bars: &[BarSegment], currency: &str) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str("📈 Income vs Expenses\n");
    out.push_str("   ─────────────────────────────────────────────────────────────\n");

    let max = bars.iter().map(|b| b.amount.abs()).fold(0.0, f64::max);
    for segment in bars {
        out.push_str(&format!(
            "   {:14} │ {:30} {}\n",
            segment.label,
            bar(segment.amount, max),
            format_amount(segment.amount, currency)
        ));
    }
    out
}

/// Suggestions in the order the server returned them
pub fn render_suggestions(suggestions: &[Suggestion]) -> String {
    let mut out = String::new();
    for (i, suggestion) in suggestions.iter().enumerate() {
        out.push_str(&format!("   💡 {}. {}\n", i + 1, suggestion.title));
        out.push_str(&format!("      {}\n", suggestion.description));
        out.push_str(&format!("      → {}\n", suggestion.action));
        out.push('\n');
    }
    out
}

/// Savings goal and next-month outlook
pub fn render_planning(goal: SavingsGoal, projection: MonthProjection, currency: &str) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str("🎯 Planning\n");
    out.push_str("   ─────────────────────────────────────────────────────────────\n");

    match goal {
        SavingsGoal::Reached { saved } => out.push_str(&format!(
            "   🎉 Savings goal reached! You are saving {}.\n",
            format_amount(saved, currency)
        )),
        SavingsGoal::Short { needed } => out.push_str(&format!(
            "   ⚠️  Save {} more to reach your goal.\n",
            format_amount(needed, currency)
        )),
    }

    match projection {
        MonthProjection::Surplus(amount) => out.push_str(&format!(
            "   ✅ Next month you could save {}.\n",
            format_amount(amount, currency)
        )),
        MonthProjection::Deficit(amount) => out.push_str(&format!(
            "   ⚠️  Next month you could run a deficit of {}.\n",
            format_amount(amount, currency)
        )),
    }
    out
}
