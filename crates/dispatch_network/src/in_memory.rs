use crate::{
    data_source::NetworkDataSource,
    error::DataSourceError,
    json_dataset::NetworkDataset,
    records::{DemandNode, HistoricalDemandRecord, StoredDemandRecord, SupplyNode, join_history},
};

#[derive(Debug, Clone, Default)]
pub struct InMemoryNetwork {
    supply_nodes: Vec<SupplyNode>,
    demand_nodes: Vec<DemandNode>,
    history: Vec<StoredDemandRecord>,
}

impl InMemoryNetwork {
    pub fn new(
        supply_nodes: Vec<SupplyNode>,
        demand_nodes: Vec<DemandNode>,
        history: Vec<StoredDemandRecord>,
    ) -> Self {
        Self {
            supply_nodes,
            demand_nodes,
            history,
        }
    }

    pub fn push_record(&mut self, record: StoredDemandRecord) -> &mut Self {
        self.history.push(record);
        self
    }

    pub fn set_supply_nodes(&mut self, supply_nodes: Vec<SupplyNode>) -> &mut Self {
        self.supply_nodes = supply_nodes;
        self
    }
}

impl From<NetworkDataset> for InMemoryNetwork {
    fn from(dataset: NetworkDataset) -> Self {
        Self {
            supply_nodes: dataset.supply_nodes,
            demand_nodes: dataset.demand_nodes,
            history: dataset.historical_demand,
        }
    }
}

impl NetworkDataSource for InMemoryNetwork {
    fn list_supply_nodes(&self) -> Result<Vec<SupplyNode>, DataSourceError> {
        Ok(self.supply_nodes.clone())
    }

    fn list_demand_nodes(&self) -> Result<Vec<DemandNode>, DataSourceError> {
        Ok(self.demand_nodes.clone())
    }

    fn list_historical_demand(&self) -> Result<Vec<HistoricalDemandRecord>, DataSourceError> {
        Ok(join_history(&self.history, &self.demand_nodes))
    }
}

#[cfg(test)]
mod tests {
    use crate::records::{DemandNodeId, SupplyNodeId};

    use super::*;

    #[test]
    fn test_total_supply_capacity() {
        let mut network = InMemoryNetwork::default();
        assert_eq!(network.total_supply_capacity().unwrap(), 0.0);

        network.set_supply_nodes(vec![
            SupplyNode {
                id: SupplyNodeId::new(1),
                name: String::from("Central Hub"),
                latitude: 40.7128,
                longitude: -74.0060,
                capacity: 5000.0,
            },
            SupplyNode {
                id: SupplyNodeId::new(2),
                name: String::from("North Branch"),
                latitude: 40.7831,
                longitude: -73.9712,
                capacity: 3000.0,
            },
        ]);

        assert_eq!(network.total_supply_capacity().unwrap(), 8000.0);
    }

    #[test]
    fn test_history_is_joined_with_names() {
        let mut network = InMemoryNetwork::new(
            vec![],
            vec![DemandNode {
                id: DemandNodeId::new(101),
                name: String::from("Retail Store A"),
                latitude: 40.7580,
                longitude: -73.9855,
            }],
            vec![],
        );
        network.push_record(StoredDemandRecord {
            period: 1,
            demand_node_id: DemandNodeId::new(101),
            units_requested: 75.0,
        });

        let history = network.list_historical_demand().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].demand_node_name, "Retail Store A");
    }
}
