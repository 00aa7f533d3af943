#![allow(dead_code)]

use dispatch_network::{
    in_memory::InMemoryNetwork,
    records::{DemandNode, DemandNodeId, StoredDemandRecord, SupplyNode, SupplyNodeId},
};
use dispatch_optimizer::demand_prediction::DemandPrediction;

pub const CUSTOMER_A: u64 = 101;
pub const CUSTOMER_B: u64 = 102;

/// Warehouse of capacity 100 at (0, 0), customer A at (0, 1) and B at (1, 0).
pub fn scenario_nodes() -> (Vec<SupplyNode>, Vec<DemandNode>) {
    let supply = vec![SupplyNode {
        id: SupplyNodeId::new(1),
        name: String::from("Central Hub"),
        latitude: 0.0,
        longitude: 0.0,
        capacity: 100.0,
    }];

    let demand = vec![
        DemandNode {
            id: DemandNodeId::new(CUSTOMER_A),
            name: String::from("Customer A"),
            latitude: 0.0,
            longitude: 1.0,
        },
        DemandNode {
            id: DemandNodeId::new(CUSTOMER_B),
            name: String::from("Customer B"),
            latitude: 1.0,
            longitude: 0.0,
        },
    ];

    (supply, demand)
}

pub fn predictions(a: f64, b: f64) -> Vec<DemandPrediction> {
    vec![
        DemandPrediction::new(DemandNodeId::new(CUSTOMER_A), "Customer A", a),
        DemandPrediction::new(DemandNodeId::new(CUSTOMER_B), "Customer B", b),
    ]
}

pub fn scenario_network(history: Vec<StoredDemandRecord>) -> InMemoryNetwork {
    let (supply, demand) = scenario_nodes();
    InMemoryNetwork::new(supply, demand, history)
}

pub fn stored(period: u32, demand_node_id: u64, units: f64) -> StoredDemandRecord {
    StoredDemandRecord {
        period,
        demand_node_id: DemandNodeId::new(demand_node_id),
        units_requested: units,
    }
}
