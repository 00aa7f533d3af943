use dispatch_network::records::DemandNodeId;
use serde::{Deserialize, Serialize};

/// Forecasted demand of one demand node for the next period.
///
/// This is the only contract between the forecaster and the allocation solver,
/// predictions may equally be built by hand or deserialized.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DemandPrediction {
    pub demand_node_id: DemandNodeId,
    pub demand_node_name: String,
    /// Never negative
    pub predicted_demand: f64,
}

impl DemandPrediction {
    pub fn new(
        demand_node_id: DemandNodeId,
        demand_node_name: impl Into<String>,
        predicted_demand: f64,
    ) -> Self {
        Self {
            demand_node_id,
            demand_node_name: demand_node_name.into(),
            predicted_demand,
        }
    }
}
