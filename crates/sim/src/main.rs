use std::sync::Arc;

use anyhow::Context;
use marketplace_events::TracingSink;
use marketplace_observability::LogConfig;

fn main() -> anyhow::Result<()> {
    let config = LogConfig::from_env().context("invalid MARKETPLACE_LOG_FORMAT")?;
    marketplace_observability::init_with(&config);

    let report = marketplace_sim::run(Arc::new(TracingSink))?;

    for event in &report.events {
        println!("{}", serde_json::to_string(event)?);
    }
    for customer in &report.customers {
        tracing::info!(
            customer = %customer.name,
            budget = customer.budget,
            purchases = customer.purchases.len(),
            "final customer state"
        );
    }

    Ok(())
}
