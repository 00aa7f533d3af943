use anyhow::Context;
use clap::Args;
use dispatch_network::{data_source::NetworkDataSource, json_dataset::JsonFileNetwork};
use dispatch_optimizer::{
    demand_prediction::DemandPrediction, planner::LogisticsPlanner,
    solver::allocation_result::{AllocationResult, AllocationStatus},
};
use serde::Serialize;
use tracing::info;

use crate::{config::AppConfig, tables};

#[derive(Args)]
pub struct PlanArgs {
    /// Period to plan for, defaults to the one after the latest history
    #[arg(short, long)]
    period: Option<u32>,

    /// Print the plan as JSON instead of tables
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct PlanOutput<'a> {
    period: u32,
    predictions: &'a [DemandPrediction],
    allocation: &'a AllocationResult,
}

pub fn run(config: &AppConfig, args: PlanArgs) -> anyhow::Result<()> {
    let planner = LogisticsPlanner::new(
        JsonFileNetwork::new(&config.dataset),
        config.allocation_config(),
    );

    let period = match args.period {
        Some(period) => period,
        None => planner
            .next_period()
            .context("No historical demand to plan from")?,
    };

    info!("Planning allocation for period {}", period);
    let report = planner.forecast_report(period);
    let result = planner.optimize_allocation(&report.predictions);

    if args.json {
        let output = PlanOutput {
            period,
            predictions: &report.predictions,
            allocation: &result,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    match result.status() {
        AllocationStatus::Optimal => {
            let total_cost = result.total_cost().unwrap_or_default();
            let supply_nodes = planner.source().list_supply_nodes()?;
            let demand_nodes = planner.source().list_demand_nodes()?;

            println!("Optimal plan found for period {period}");
            println!("Cost index: {total_cost:.2}");
            println!(
                "Estimated fuel cost: {:.2}",
                total_cost * config.fuel_cost_per_km
            );
            println!(
                "{}",
                tables::distribution_table(
                    &result,
                    &supply_nodes,
                    &demand_nodes,
                    config.truck_capacity
                )
            );
            println!("{}", tables::supply_load_table(&result, &supply_nodes));
            for skipped in &report.skipped {
                println!(
                    "{} ({}) left out of the plan: {}",
                    skipped.demand_node_name, skipped.demand_node_id, skipped.reason
                );
            }
        }
        AllocationStatus::Infeasible | AllocationStatus::Error => {
            println!(
                "{}: {}",
                result.status(),
                result.message().unwrap_or("no plan could be computed")
            );
        }
    }

    Ok(())
}
