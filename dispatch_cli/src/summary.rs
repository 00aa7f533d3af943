use dispatch_network::{data_source::NetworkDataSource, json_dataset::JsonFileNetwork};
use dispatch_optimizer::planner::LogisticsPlanner;
use tracing::info;

use crate::{config::AppConfig, tables};

pub fn run(config: &AppConfig) -> anyhow::Result<()> {
    info!("Reading network {}", config.dataset.display());
    let planner = LogisticsPlanner::new(
        JsonFileNetwork::new(&config.dataset),
        config.allocation_config(),
    );

    let summary = planner.network_summary()?;
    let supply_nodes = planner.source().list_supply_nodes()?;

    println!("Total capacity: {} units", summary.total_capacity);
    println!("Warehouses: {}", summary.supply_node_count);
    println!("Customer nodes: {}", summary.demand_node_count);
    println!("{}", tables::supply_nodes_table(&supply_nodes));

    Ok(())
}
