//! Tips and health command implementations

use anyhow::Result;
use budgetwise_core::BudgetTips;

use super::client::ApiClient;

pub fn cmd_tips() -> Result<()> {
    let tips = BudgetTips::default();

    println!();
    println!("📋 Budgeting Tips");
    for tip in &tips.general_tips {
        println!("   • {}", tip);
    }
    println!();
    println!("💎 Savings Tips");
    for tip in &tips.savings_tips {
        println!("   • {}", tip);
    }
    println!();

    Ok(())
}

pub async fn cmd_health(api_url: &str) -> Result<()> {
    let client = ApiClient::new(api_url)?;
    let health = client.health().await?;

    println!("✅ {} is {}", health.service, health.status);
    println!("   URL: {}", client.base_url());
    println!("   Server time: {}", health.timestamp.to_rfc3339());

    Ok(())
}
