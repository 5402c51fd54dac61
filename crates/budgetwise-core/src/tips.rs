//! Static budgeting tips

use serde::{Deserialize, Serialize};

const GENERAL_TIPS: &[&str] = &[
    "Put 50% of your income toward essential needs",
    "Put 30% of your income toward wants",
    "Put 20% of your income toward savings and investments",
];

const SAVINGS_TIPS: &[&str] = &[
    "Set up automatic savings transfers",
    "Cancel subscriptions you don't use",
    "Shop in bulk",
    "Cut your energy usage",
];

/// General budgeting tips and savings tips
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetTips {
    pub general_tips: Vec<String>,
    pub savings_tips: Vec<String>,
}

impl Default for BudgetTips {
    fn default() -> Self {
        Self {
            general_tips: GENERAL_TIPS.iter().map(|s| s.to_string()).collect(),
            savings_tips: SAVINGS_TIPS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tips() {
        let tips = BudgetTips::default();
        assert_eq!(tips.general_tips.len(), 3);
        assert_eq!(tips.savings_tips.len(), 4);
        assert!(tips.general_tips[2].contains("20%"));
    }
}
