use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};
use dispatch_network::records::{DemandNode, SupplyNode};
use dispatch_optimizer::{
    demand_prediction::DemandPrediction, solver::allocation_result::AllocationResult,
};

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

pub fn trucks_needed(units: f64, truck_capacity: f64) -> u64 {
    (units / truck_capacity).ceil().max(0.0) as u64
}

pub fn supply_nodes_table(supply_nodes: &[SupplyNode]) -> Table {
    let mut table = new_table(vec!["Warehouse", "Latitude", "Longitude", "Capacity"]);
    for node in supply_nodes {
        table.add_row(vec![
            node.name.clone(),
            format!("{:.4}", node.latitude),
            format!("{:.4}", node.longitude),
            format!("{}", node.capacity),
        ]);
    }
    table
}

pub fn predictions_table(predictions: &[DemandPrediction]) -> Table {
    let mut table = new_table(vec!["Customer", "Units"]);
    for prediction in predictions {
        table.add_row(vec![
            prediction.demand_node_name.clone(),
            format!("{:.2}", prediction.predicted_demand),
        ]);
    }
    table
}

pub fn distribution_table(
    result: &AllocationResult,
    supply_nodes: &[SupplyNode],
    demand_nodes: &[DemandNode],
    truck_capacity: f64,
) -> Table {
    let mut table = new_table(vec!["Warehouse", "Customer", "Units", "Trucks"]);
    for edge in result.edges() {
        let warehouse = supply_nodes
            .iter()
            .find(|node| node.id == edge.supply_node_id)
            .map_or_else(|| edge.supply_node_id.to_string(), |node| node.name.clone());
        let customer = demand_nodes
            .iter()
            .find(|node| node.id == edge.demand_node_id)
            .map_or_else(|| edge.demand_node_id.to_string(), |node| node.name.clone());

        table.add_row(vec![
            warehouse,
            customer,
            format!("{:.2}", edge.units),
            trucks_needed(edge.units, truck_capacity).to_string(),
        ]);
    }
    table
}

pub fn supply_load_table(result: &AllocationResult, supply_nodes: &[SupplyNode]) -> Table {
    let load = result.supply_load();
    let mut table = new_table(vec!["Warehouse", "Shipped", "Capacity", "Utilization"]);

    for node in supply_nodes {
        let shipped = load
            .iter()
            .find(|(id, _)| *id == node.id)
            .map_or(0.0, |(_, units)| *units);
        let utilization = if node.capacity > 0.0 {
            format!("{:.1}%", 100.0 * shipped / node.capacity)
        } else {
            String::from("-")
        };

        table.add_row(vec![
            node.name.clone(),
            format!("{shipped:.2}"),
            format!("{}", node.capacity),
            utilization,
        ]);
    }
    table
}
