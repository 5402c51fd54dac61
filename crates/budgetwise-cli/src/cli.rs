//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use budgetwise_core::models::{BudgetInput, Category};

/// Where the dashboard looks for the API by default
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Budgetwise - Plan your monthly budget
#[derive(Parser)]
#[command(name = "budgetwise")]
#[command(about = "Personal budget planner with rule-based suggestions", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Analyzer threshold config (TOML)
    ///
    /// Defaults to ~/.local/share/budgetwise/config/analyzer.toml when it
    /// exists, otherwise the built-in thresholds.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the API server
    Serve {
        /// Port to listen on (falls back to $PORT, then 5000)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// Analyze a budget locally
    Analyze {
        /// Monthly income
        #[arg(short, long)]
        income: f64,

        /// Expense as CATEGORY=AMOUNT (repeatable)
        #[arg(short, long = "expense", value_name = "CATEGORY=AMOUNT")]
        expenses: Vec<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the budget dashboard (requires a running server)
    Dashboard(DashboardArgs),

    /// Show budgeting and savings tips
    Tips,

    /// Check whether the API server is up
    Health {
        /// API base URL
        #[arg(long, default_value = DEFAULT_API_URL)]
        api_url: String,
    },
}

/// Dashboard inputs, one flag per category
#[derive(Args, Debug, Clone)]
pub struct DashboardArgs {
    /// API base URL
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Monthly income
    #[arg(long, default_value_t = 5000.0)]
    pub income: f64,

    /// Housing (rent/mortgage)
    #[arg(long, default_value_t = 1500.0)]
    pub housing: f64,

    /// Food
    #[arg(long, default_value_t = 800.0)]
    pub food: f64,

    /// Transport
    #[arg(long, default_value_t = 400.0)]
    pub transport: f64,

    /// Utilities and bills
    #[arg(long, default_value_t = 300.0)]
    pub utilities: f64,

    /// Entertainment
    #[arg(long, default_value_t = 300.0)]
    pub entertainment: f64,

    /// Savings
    #[arg(long, default_value_t = 500.0)]
    pub savings: f64,

    /// Everything else
    #[arg(long, default_value_t = 200.0)]
    pub other: f64,

    /// Monthly savings target
    #[arg(long, default_value_t = 1000.0)]
    pub savings_target: f64,

    /// Ask the server for suggestions
    #[arg(long)]
    pub suggest: bool,
}

impl DashboardArgs {
    pub fn amount(&self, category: Category) -> f64 {
        match category {
            Category::Housing => self.housing,
            Category::Food => self.food,
            Category::Transport => self.transport,
            Category::Utilities => self.utilities,
            Category::Entertainment => self.entertainment,
            Category::Savings => self.savings,
            Category::Other => self.other,
        }
    }

    /// Budget built from the dashboard inputs
    pub fn to_input(&self) -> BudgetInput {
        Category::all()
            .iter()
            .fold(BudgetInput::new(self.income), |input, c| {
                input.with_expense(c.as_str(), self.amount(*c))
            })
    }
}
