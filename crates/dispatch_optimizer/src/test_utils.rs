use dispatch_network::{
    data_source::NetworkDataSource,
    error::DataSourceError,
    json_dataset::NetworkDataset,
    records::{
        DemandNode, DemandNodeId, HistoricalDemandRecord, StoredDemandRecord, SupplyNode,
        SupplyNodeId,
    },
};

use crate::demand_prediction::DemandPrediction;

pub fn supply_node(id: u64, latitude: f64, longitude: f64, capacity: f64) -> SupplyNode {
    SupplyNode {
        id: SupplyNodeId::new(id),
        name: format!("Supply {id}"),
        latitude,
        longitude,
        capacity,
    }
}

pub fn demand_node(id: u64, latitude: f64, longitude: f64) -> DemandNode {
    DemandNode {
        id: DemandNodeId::new(id),
        name: format!("Demand {id}"),
        latitude,
        longitude,
    }
}

pub fn prediction(demand_node_id: u64, predicted_demand: f64) -> DemandPrediction {
    DemandPrediction::new(
        DemandNodeId::new(demand_node_id),
        format!("Demand {demand_node_id}"),
        predicted_demand,
    )
}

pub fn record(period: u32, demand_node_id: u64, name: &str, units: f64) -> HistoricalDemandRecord {
    HistoricalDemandRecord {
        period,
        demand_node_id: DemandNodeId::new(demand_node_id),
        demand_node_name: name.to_owned(),
        units_requested: units,
    }
}

pub fn history(demand_node_id: u64, name: &str, points: &[(u32, f64)]) -> Vec<HistoricalDemandRecord> {
    points
        .iter()
        .map(|&(period, units)| record(period, demand_node_id, name, units))
        .collect()
}

/// One supply node of capacity 100 at (0, 0), demand nodes 101 at (0, 1)
/// and 102 at (1, 0).
pub fn scenario_network() -> (Vec<SupplyNode>, Vec<DemandNode>) {
    (
        vec![supply_node(1, 0.0, 0.0, 100.0)],
        vec![demand_node(101, 0.0, 1.0), demand_node(102, 1.0, 0.0)],
    )
}

/// Two demand nodes on exact trends: 10, 20, 30 and 20, 30, 40.
pub fn linear_history_network() -> NetworkDataset {
    let (supply_nodes, mut demand_nodes) = scenario_network();
    demand_nodes[0].name = String::from("North Store");
    demand_nodes[1].name = String::from("East Store");

    let historical_demand = (1..=3)
        .flat_map(|period| {
            [
                StoredDemandRecord {
                    period,
                    demand_node_id: DemandNodeId::new(101),
                    units_requested: f64::from(period) * 10.0,
                },
                StoredDemandRecord {
                    period,
                    demand_node_id: DemandNodeId::new(102),
                    units_requested: f64::from(period) * 10.0 + 10.0,
                },
            ]
        })
        .collect();

    NetworkDataset {
        supply_nodes,
        demand_nodes,
        historical_demand,
    }
}

/// A source whose backing store is unreachable.
pub struct FailingNetwork;

impl NetworkDataSource for FailingNetwork {
    fn list_supply_nodes(&self) -> Result<Vec<SupplyNode>, DataSourceError> {
        Err(DataSourceError::Unavailable(String::from("offline")))
    }

    fn list_demand_nodes(&self) -> Result<Vec<DemandNode>, DataSourceError> {
        Err(DataSourceError::Unavailable(String::from("offline")))
    }

    fn list_historical_demand(&self) -> Result<Vec<HistoricalDemandRecord>, DataSourceError> {
        Err(DataSourceError::Unavailable(String::from("offline")))
    }
}
