//! Analyzer thresholds
//!
//! Every number the rules compare against lives here so boundary values can
//! be tested and tuned without touching rule code.
//!
//! ## Configuration Resolution
//!
//! Config is loaded with a two-layer resolution:
//! 1. Explicit path, or the override in the data dir
//!    (~/.local/share/budgetwise/config/analyzer.toml)
//! 2. Fall back to embedded defaults (compiled into binary)

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../../config/analyzer.toml");

/// Thresholds and display settings for the rule engine
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerConfig {
    /// Savings rate (percent) below which the low-savings rule fires
    pub low_savings_rate: f64,
    /// Lower bound of the recommended savings range
    pub savings_target_min: f64,
    /// Upper bound of the recommended savings range
    pub savings_target_max: f64,
    /// Housing share of income (percent) above which the housing rule fires
    pub housing_ratio_max: f64,
    /// Food share of income (percent) above which the food rule fires
    pub food_ratio_max: f64,
    /// Emergency-fund advice is added while fewer suggestions than this exist
    pub suggestion_floor: usize,
    /// Surplus rule only fires while the savings rate is below this
    pub surplus_savings_rate_max: f64,
    pub emergency_fund_months_min: u32,
    pub emergency_fund_months_max: u32,
    /// Percent of monthly income to put toward the emergency fund
    pub emergency_fund_contribution: f64,
    /// Currency label appended to amounts in messages
    pub currency: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            low_savings_rate: 20.0,
            savings_target_min: 20.0,
            savings_target_max: 30.0,
            housing_ratio_max: 30.0,
            food_ratio_max: 15.0,
            suggestion_floor: 3,
            surplus_savings_rate_max: 30.0,
            emergency_fund_months_min: 3,
            emergency_fund_months_max: 6,
            emergency_fund_contribution: 10.0,
            currency: "TL".to_string(),
        }
    }
}

impl AnalyzerConfig {
    /// Load config from an explicit path, the data-dir override, or the
    /// embedded defaults (in that order)
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        let content = match override_path {
            Some(path) if path.exists() => read_config(path)?,
            Some(path) => {
                tracing::warn!(
                    path = %path.display(),
                    "Config file not found, using defaults"
                );
                DEFAULT_CONFIG.to_string()
            }
            None => match default_config_path() {
                Some(path) if path.exists() => read_config(&path)?,
                _ => DEFAULT_CONFIG.to_string(),
            },
        };

        Self::from_toml_str(&content)
    }

    /// Parse config from TOML content; keys not present keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(content)?;
        let mut config = Self::default();

        if let Some(savings) = raw.savings {
            if let Some(v) = savings.low_rate {
                config.low_savings_rate = v;
            }
            if let Some(v) = savings.target_min {
                config.savings_target_min = v;
            }
            if let Some(v) = savings.target_max {
                config.savings_target_max = v;
            }
            if let Some(v) = savings.surplus_rate_max {
                config.surplus_savings_rate_max = v;
            }
        }

        if let Some(ratios) = raw.ratios {
            if let Some(v) = ratios.housing_max {
                config.housing_ratio_max = v;
            }
            if let Some(v) = ratios.food_max {
                config.food_ratio_max = v;
            }
        }

        if let Some(fund) = raw.emergency_fund {
            if let Some(v) = fund.months_min {
                config.emergency_fund_months_min = v;
            }
            if let Some(v) = fund.months_max {
                config.emergency_fund_months_max = v;
            }
            if let Some(v) = fund.contribution {
                config.emergency_fund_contribution = v;
            }
        }

        if let Some(floor) = raw.suggestions.and_then(|s| s.floor) {
            config.suggestion_floor = floor;
        }

        if let Some(currency) = raw.display.and_then(|d| d.currency) {
            config.currency = currency;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject thresholds that cannot describe a sensible budget
    pub fn validate(&self) -> Result<()> {
        let percentages = [
            ("savings.low_rate", self.low_savings_rate),
            ("savings.target_min", self.savings_target_min),
            ("savings.target_max", self.savings_target_max),
            ("savings.surplus_rate_max", self.surplus_savings_rate_max),
            ("ratios.housing_max", self.housing_ratio_max),
            ("ratios.food_max", self.food_ratio_max),
            ("emergency_fund.contribution", self.emergency_fund_contribution),
        ];
        for (key, value) in percentages {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::Config(format!(
                    "{} must be a non-negative number, got {}",
                    key, value
                )));
            }
        }

        if self.savings_target_min > self.savings_target_max {
            return Err(Error::Config(format!(
                "savings.target_min ({}) exceeds savings.target_max ({})",
                self.savings_target_min, self.savings_target_max
            )));
        }

        if self.emergency_fund_months_min > self.emergency_fund_months_max {
            return Err(Error::Config(format!(
                "emergency_fund.months_min ({}) exceeds emergency_fund.months_max ({})",
                self.emergency_fund_months_min, self.emergency_fund_months_max
            )));
        }

        Ok(())
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("budgetwise").join("config").join("analyzer.toml"))
}

fn read_config(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        Error::Config(format!("Failed to read config {}: {}", path.display(), e))
    })
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    savings: Option<RawSavings>,
    ratios: Option<RawRatios>,
    emergency_fund: Option<RawEmergencyFund>,
    suggestions: Option<RawSuggestions>,
    display: Option<RawDisplay>,
}

#[derive(Debug, Deserialize)]
struct RawSavings {
    low_rate: Option<f64>,
    target_min: Option<f64>,
    target_max: Option<f64>,
    surplus_rate_max: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawRatios {
    housing_max: Option<f64>,
    food_max: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawEmergencyFund {
    months_min: Option<u32>,
    months_max: Option<u32>,
    contribution: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawSuggestions {
    floor: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct RawDisplay {
    currency: Option<String>,
}
