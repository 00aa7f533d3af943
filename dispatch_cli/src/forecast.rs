use anyhow::Context;
use dispatch_network::json_dataset::JsonFileNetwork;
use dispatch_optimizer::planner::LogisticsPlanner;
use tracing::info;

use crate::{config::AppConfig, tables};

pub fn run(config: &AppConfig, period: Option<u32>) -> anyhow::Result<()> {
    let planner = LogisticsPlanner::new(
        JsonFileNetwork::new(&config.dataset),
        config.allocation_config(),
    );

    let period = match period {
        Some(period) => period,
        None => planner
            .next_period()
            .context("No historical demand to forecast from")?,
    };

    info!("Forecasting demand for period {}", period);
    let report = planner.forecast_report(period);

    println!("Demand forecast for period {}", report.target_period);
    println!("{}", tables::predictions_table(&report.predictions));
    for skipped in &report.skipped {
        println!(
            "No forecast for {} ({}): {}",
            skipped.demand_node_name, skipped.demand_node_id, skipped.reason
        );
    }

    Ok(())
}
