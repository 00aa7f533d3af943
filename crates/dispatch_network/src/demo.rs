use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::info;

use crate::{
    json_dataset::NetworkDataset,
    records::{DemandNode, DemandNodeId, StoredDemandRecord, SupplyNode, SupplyNodeId},
};

const SUPPLY_NODES: [(u64, &str, f64, f64, f64); 3] = [
    (1, "Central Hub", 40.7128, -74.0060, 5000.0),
    (2, "North Branch", 40.7831, -73.9712, 3000.0),
    (3, "South Port", 40.6782, -73.9442, 4000.0),
];

const DEMAND_NODES: [(u64, &str, f64, f64); 5] = [
    (101, "Retail Store A", 40.7580, -73.9855),
    (102, "Pharmacy B", 40.7484, -73.9857),
    (103, "Supermarket C", 40.7306, -73.9352),
    (104, "Tech Shop D", 40.7061, -74.0092),
    (105, "Hospital E", 40.8075, -73.9626),
];

#[derive(Debug, Clone)]
pub struct DemoNetworkParams {
    pub seed: u64,
    /// Number of historical periods, starting at period 1
    pub days: u32,
    pub min_units: u32,
    /// Exclusive
    pub max_units: u32,
}

impl Default for DemoNetworkParams {
    fn default() -> Self {
        Self {
            seed: 42,
            days: 30,
            min_units: 50,
            max_units: 200,
        }
    }
}

/// Builds a small metropolitan network with random daily demand.
/// The same params always produce the same dataset.
pub fn generate_demo_network(params: &DemoNetworkParams) -> NetworkDataset {
    let mut rng = SmallRng::seed_from_u64(params.seed);

    let supply_nodes = SUPPLY_NODES
        .iter()
        .map(|&(id, name, latitude, longitude, capacity)| SupplyNode {
            id: SupplyNodeId::new(id),
            name: name.to_owned(),
            latitude,
            longitude,
            capacity,
        })
        .collect::<Vec<_>>();

    let demand_nodes = DEMAND_NODES
        .iter()
        .map(|&(id, name, latitude, longitude)| DemandNode {
            id: DemandNodeId::new(id),
            name: name.to_owned(),
            latitude,
            longitude,
        })
        .collect::<Vec<_>>();

    let upper = params.max_units.max(params.min_units + 1);
    let mut historical_demand =
        Vec::with_capacity(params.days as usize * demand_nodes.len());
    for day in 1..=params.days {
        for node in &demand_nodes {
            historical_demand.push(StoredDemandRecord {
                period: day,
                demand_node_id: node.id,
                units_requested: f64::from(rng.random_range(params.min_units..upper)),
            });
        }
    }

    info!(
        "Generated demo network: {} supply nodes, {} demand nodes, {} history rows",
        supply_nodes.len(),
        demand_nodes.len(),
        historical_demand.len()
    );

    NetworkDataset {
        supply_nodes,
        demand_nodes,
        historical_demand,
    }
}
