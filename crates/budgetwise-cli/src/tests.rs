//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use clap::Parser;

use budgetwise_core::dashboard::{
    budget_overview, category_distribution, DashboardSummary, MonthProjection, SavingsGoal,
};
use budgetwise_core::models::{Category, Suggestion, SuggestionRule};
use budgetwise_core::{analyze, AnalyzerConfig, BudgetInput};

use crate::cli::{Cli, Commands, DashboardArgs};
use crate::commands::client::ApiClient;
use crate::commands::{self, truncate};

fn default_dashboard_args() -> DashboardArgs {
    let cli = Cli::try_parse_from(["budgetwise", "dashboard"]).unwrap();
    match cli.command {
        Commands::Dashboard(args) => args,
        _ => panic!("expected dashboard command"),
    }
}

// ========== Argument Parsing Tests ==========

#[test]
fn test_dashboard_defaults() {
    let args = default_dashboard_args();
    assert_eq!(args.api_url, "http://localhost:5000");
    assert_eq!(args.income, 5000.0);
    assert_eq!(args.savings_target, 1000.0);
    assert!(!args.suggest);

    let input = args.to_input();
    assert_eq!(input.expenses.len(), 7);
    assert_eq!(input.expense("housing"), 1500.0);
    assert_eq!(input.expense("savings"), 500.0);
    assert_eq!(input.total_expenses(), 4000.0);
}

#[test]
fn test_dashboard_flags_override_defaults() {
    let cli = Cli::try_parse_from([
        "budgetwise",
        "dashboard",
        "--income",
        "3000",
        "--housing",
        "2000",
        "--suggest",
    ])
    .unwrap();
    let Commands::Dashboard(args) = cli.command else {
        panic!("expected dashboard command");
    };

    assert!(args.suggest);
    assert_eq!(args.amount(Category::Housing), 2000.0);
    assert_eq!(args.to_input().monthly_income, 3000.0);
}

#[test]
fn test_analyze_repeatable_expense_flag() {
    let cli = Cli::try_parse_from([
        "budgetwise",
        "analyze",
        "-i",
        "4000",
        "-e",
        "food=700",
        "--expense",
        "housing=1200",
    ])
    .unwrap();
    let Commands::Analyze {
        income, expenses, ..
    } = cli.command
    else {
        panic!("expected analyze command");
    };

    assert_eq!(income, 4000.0);
    assert_eq!(expenses, vec!["food=700", "housing=1200"]);
}

#[test]
fn test_global_config_flag() {
    let cli = Cli::try_parse_from(["budgetwise", "tips", "--config", "/tmp/analyzer.toml"]).unwrap();
    assert_eq!(
        cli.config.as_deref(),
        Some(std::path::Path::new("/tmp/analyzer.toml"))
    );
}

// ========== Analyze Command Tests ==========

#[test]
fn test_parse_expense() {
    let (category, amount) = commands::parse_expense("Food=800").unwrap();
    assert_eq!(category, "food");
    assert_eq!(amount, 800.0);

    let (category, amount) = commands::parse_expense(" pets = 49.5 ").unwrap();
    assert_eq!(category, "pets");
    assert_eq!(amount, 49.5);
}

#[test]
fn test_parse_expense_rejects_bad_input() {
    assert!(commands::parse_expense("food").is_err());
    assert!(commands::parse_expense("=100").is_err());
    assert!(commands::parse_expense("food=lots").is_err());
}

#[test]
fn test_build_input() {
    let input = commands::build_input(
        5000.0,
        &["housing=1500".to_string(), "food=800".to_string()],
    )
    .unwrap();
    assert_eq!(input.monthly_income, 5000.0);
    assert_eq!(input.total_expenses(), 2300.0);
}

#[test]
fn test_build_input_rejects_duplicates() {
    let err = commands::build_input(
        5000.0,
        &["food=100".to_string(), "FOOD=200".to_string()],
    )
    .unwrap_err();
    assert!(err.to_string().contains("more than once"));
}

#[test]
fn test_build_input_rejects_negative_amounts() {
    assert!(commands::build_input(5000.0, &["food=-5".to_string()]).is_err());
    assert!(commands::build_input(-1.0, &[]).is_err());
}

fn write_config(content: &str) -> tempfile::NamedTempFile {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_analysis_report_uses_config_file() {
    let config = write_config("[ratios]\nfood_max = 10\n\n[display]\ncurrency = \"USD\"\n");
    let expenses = ["food=600".to_string(), "savings=1500".to_string()];

    let report = commands::analysis_report(Some(config.path()), 5000.0, &expenses, false).unwrap();
    assert!(report.contains("Total expenses:   2100 USD"));
    assert!(report.contains("Savings rate:     30.0%"));
    // Food at 12% only fires with the lowered threshold
    assert!(report.contains("1. Optimize Your Food Spending"));
    assert!(!report.contains(" TL"));
}

#[test]
fn test_analysis_report_json() {
    let config = write_config("");
    let expenses = ["food=800".to_string()];

    let report = commands::analysis_report(Some(config.path()), 5000.0, &expenses, true).unwrap();
    let json: serde_json::Value = serde_json::from_str(&report).unwrap();
    assert_eq!(json["analysis"]["total_expenses"], 800.0);
    assert_eq!(json["analysis"]["budget_status"], "healthy");
    assert_eq!(json["suggestions"][0]["rule"], "low_savings");
}

#[test]
fn test_render_analysis() {
    let input = BudgetInput::new(3000.0)
        .with_expense("housing", 2000.0)
        .with_expense("food", 300.0);
    let report = commands::render_analysis(&analyze(&input), "TL");

    assert!(report.contains("Total expenses:   2300 TL"));
    assert!(report.contains("Remaining budget: 700 TL"));
    assert!(report.contains("Savings rate:     0.0%"));
    assert!(report.contains("Status:           healthy"));
    assert!(report.contains("1. Increase Your Savings Rate"));
    assert!(report.contains("2. Review Your Housing Costs"));
}

// ========== Serve Command Tests ==========

#[test]
fn test_resolve_port() {
    assert_eq!(commands::resolve_port(Some(8080), Some("9000")).unwrap(), 8080);
    assert_eq!(commands::resolve_port(None, Some("9000")).unwrap(), 9000);
    assert_eq!(commands::resolve_port(None, None).unwrap(), 5000);
    assert_eq!(commands::resolve_port(None, Some("  ")).unwrap(), 5000);
    assert!(commands::resolve_port(None, Some("http")).is_err());
}

#[test]
fn test_cmd_tips() {
    assert!(commands::cmd_tips().is_ok());
}

// ========== Dashboard Rendering Tests ==========

#[test]
fn test_render_summary() {
    let summary = DashboardSummary::from_input(&default_dashboard_args().to_input());
    let out = commands::render_summary(&summary, &AnalyzerConfig::default());

    assert!(out.contains("Remaining budget: 1000 TL"));
    assert!(out.contains("Savings rate:     10.0%"));
    assert!(out.contains("Total expenses:   4000 TL"));
    assert!(out.contains("Monthly income:   5000 TL"));
    assert!(out.contains("✅ Remaining"));
    assert!(out.contains("⚠️  Savings"));
}

#[test]
fn test_render_summary_over_budget() {
    let input = BudgetInput::new(1000.0).with_expense("housing", 1500.0);
    let summary = DashboardSummary::from_input(&input);
    let out = commands::render_summary(&summary, &AnalyzerConfig::default());

    assert!(out.contains("❌ Remaining budget: -500 TL"));
}

#[test]
fn test_bar_scaling() {
    assert_eq!(commands::bar(100.0, 100.0).chars().count(), 30);
    assert_eq!(commands::bar(50.0, 100.0).chars().count(), 15);
    // Tiny non-zero values still get a visible bar
    assert_eq!(commands::bar(0.1, 100.0).chars().count(), 1);
    assert_eq!(commands::bar(0.0, 100.0), "");
    assert_eq!(commands::bar(10.0, 0.0), "");
    // Negative values are drawn by magnitude
    assert_eq!(commands::bar(-50.0, 100.0).chars().count(), 15);
}

#[test]
fn test_render_distribution_chart() {
    let input = default_dashboard_args().to_input();
    let out = commands::render_distribution_chart(&category_distribution(&input), "TL");

    assert!(out.contains("Housing"));
    assert!(out.contains("37.5%"));
    assert!(out.contains("1500 TL"));

    let housing = out.find("Housing").unwrap();
    let other = out.find("Other").unwrap();
    assert!(housing < other);
}

#[test]
fn test_render_distribution_chart_custom_and_empty() {
    let input = BudgetInput::new(1000.0).with_expense("pets", 100.0);
    let out = commands::render_distribution_chart(&category_distribution(&input), "TL");
    assert!(out.contains("pets"));
    assert!(out.contains("100.0%"));

    let out = commands::render_distribution_chart(&[], "TL");
    assert!(out.contains("No expenses entered."));
}

#[test]
fn test_render_overview_chart() {
    let summary = DashboardSummary::from_input(&default_dashboard_args().to_input());
    let out = commands::render_overview_chart(&budget_overview(&summary), "TL");

    let lines: Vec<&str> = out.lines().filter(|l| l.contains('│')).collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("Income") && lines[0].contains("5000 TL"));
    assert!(lines[1].contains("Expenses") && lines[1].contains("4000 TL"));
    assert!(lines[2].contains("Remaining") && lines[2].contains("1000 TL"));
}

#[test]
fn test_render_suggestions_keeps_order() {
    let suggestions = vec![
        Suggestion::new(SuggestionRule::FoodRatio, "First", "d1", "a1"),
        Suggestion::new(SuggestionRule::LowSavings, "Second", "d2", "a2"),
    ];
    let out = commands::render_suggestions(&suggestions);

    let first = out.find("1. First").unwrap();
    let second = out.find("2. Second").unwrap();
    assert!(first < second);
    assert!(out.contains("→ a2"));
    assert_eq!(commands::render_suggestions(&[]), "");
}

#[test]
fn test_render_planning() {
    let out = commands::render_planning(
        SavingsGoal::evaluate(1000.0, 500.0),
        MonthProjection::from_remaining(1000.0),
        "TL",
    );
    assert!(out.contains("Save 500 TL more to reach your goal."));
    assert!(out.contains("Next month you could save 1000 TL."));

    let out = commands::render_planning(
        SavingsGoal::evaluate(400.0, 500.0),
        MonthProjection::from_remaining(-250.0),
        "TL",
    );
    assert!(out.contains("Savings goal reached! You are saving 500 TL."));
    assert!(out.contains("deficit of 250 TL"));
}

// ========== Utility Function Tests ==========

#[test]
fn test_truncate() {
    assert_eq!(truncate("hello", 10), "hello");
    assert_eq!(truncate("hello world", 8), "hello...");
    assert_eq!(truncate("", 5), "");
    assert_eq!(truncate("Eğlence harcamaları", 10), "Eğlence...");
}

// ========== API Client Tests ==========

#[tokio::test]
async fn test_client_against_running_server() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(budgetwise_server::serve_listener(
        listener,
        budgetwise_server::ServerConfig::default(),
        AnalyzerConfig::default(),
    ));

    let client = ApiClient::new(&format!("http://{}/", addr)).unwrap();
    assert_eq!(client.base_url(), format!("http://{}", addr));

    let health = client.health().await.unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.service, budgetwise_server::SERVICE_NAME);

    let input = default_dashboard_args().to_input();
    let response = client.analyze(&input).await.unwrap();
    assert_eq!(response.status, "success");
    let expected = analyze(&input);
    assert_eq!(response.result.suggestions, expected.suggestions);
    assert_eq!(response.result.analysis.total_expenses, 4000.0);
    assert_eq!(response.result.analysis.remaining_budget, 1000.0);
}

#[tokio::test]
async fn test_client_reports_unreachable_server() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(&format!("http://{}", addr)).unwrap();
    let err = client.health().await.unwrap_err();
    assert!(format!("{:#}", err).contains("not reachable"));

    let args = DashboardArgs {
        api_url: format!("http://{}", addr),
        ..default_dashboard_args()
    };
    let err = commands::cmd_dashboard(None, &args).await.unwrap_err();
    assert!(err.to_string().contains("Backend server is not running"));
}
