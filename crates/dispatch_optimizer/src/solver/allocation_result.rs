use dispatch_network::records::{DemandNodeId, SupplyNodeId};
use fxhash::FxHashMap;
use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocationStatus {
    Optimal,
    Infeasible,
    Error,
}

impl std::fmt::Display for AllocationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                AllocationStatus::Optimal => "Optimal",
                AllocationStatus::Infeasible => "Infeasible",
                AllocationStatus::Error => "Error",
            }
        )
    }
}

/// Units shipped from one supply node to one demand node. Always positive.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AllocationEdge {
    pub supply_node_id: SupplyNodeId,
    pub demand_node_id: DemandNodeId,
    pub units: f64,
}

/// Outcome of a single optimization call.
///
/// `total_cost` is only present for an optimal plan, infeasible and failed
/// plans never carry edges.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AllocationResult {
    status: AllocationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    total_cost: Option<f64>,
    edges: Vec<AllocationEdge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl AllocationResult {
    pub fn optimal(total_cost: f64, edges: Vec<AllocationEdge>) -> Self {
        Self {
            status: AllocationStatus::Optimal,
            total_cost: Some(total_cost),
            edges,
            message: None,
        }
    }

    pub fn infeasible(message: impl Into<String>) -> Self {
        Self {
            status: AllocationStatus::Infeasible,
            total_cost: None,
            edges: Vec::new(),
            message: Some(message.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: AllocationStatus::Error,
            total_cost: None,
            edges: Vec::new(),
            message: Some(message.into()),
        }
    }

    pub fn status(&self) -> AllocationStatus {
        self.status
    }

    pub fn total_cost(&self) -> Option<f64> {
        self.total_cost
    }

    pub fn edges(&self) -> &[AllocationEdge] {
        &self.edges
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn total_units(&self) -> f64 {
        self.edges.iter().map(|edge| edge.units).sum()
    }

    pub fn delivered_to(&self, demand_node_id: DemandNodeId) -> f64 {
        self.edges
            .iter()
            .filter(|edge| edge.demand_node_id == demand_node_id)
            .map(|edge| edge.units)
            .sum()
    }

    /// Units shipped out of each supply node that ships anything, in order of
    /// first appearance in the plan.
    pub fn supply_load(&self) -> Vec<(SupplyNodeId, f64)> {
        let mut positions: FxHashMap<SupplyNodeId, usize> = FxHashMap::default();
        let mut load: Vec<(SupplyNodeId, f64)> = Vec::new();

        for edge in &self.edges {
            let position = *positions.entry(edge.supply_node_id).or_insert_with(|| {
                load.push((edge.supply_node_id, 0.0));
                load.len() - 1
            });
            load[position].1 += edge.units;
        }

        load
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(supply: u64, demand: u64, units: f64) -> AllocationEdge {
        AllocationEdge {
            supply_node_id: SupplyNodeId::new(supply),
            demand_node_id: DemandNodeId::new(demand),
            units,
        }
    }

    #[test]
    fn test_supply_load_and_delivered() {
        let result = AllocationResult::optimal(
            12.5,
            vec![edge(2, 101, 10.0), edge(1, 102, 5.0), edge(2, 102, 2.5)],
        );

        assert_eq!(
            result.supply_load(),
            vec![(SupplyNodeId::new(2), 12.5), (SupplyNodeId::new(1), 5.0)]
        );
        assert_eq!(result.delivered_to(DemandNodeId::new(102)), 7.5);
        assert_eq!(result.delivered_to(DemandNodeId::new(105)), 0.0);
        assert_eq!(result.total_units(), 17.5);
    }

    #[test]
    fn test_infeasible_has_no_cost_or_edges() {
        let result = AllocationResult::infeasible("not enough capacity");

        assert_eq!(result.status(), AllocationStatus::Infeasible);
        assert_eq!(result.total_cost(), None);
        assert!(result.edges().is_empty());
        assert_eq!(result.message(), Some("not enough capacity"));
    }

    #[test]
    fn test_serialize_optimal() {
        let result = AllocationResult::optimal(1.0, vec![edge(1, 101, 1.0)]);

        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["status"], "Optimal");
        assert_eq!(json["total_cost"], 1.0);
        assert_eq!(json["edges"][0]["supply_node_id"], 1);
        assert!(json.get("message").is_none());
    }

    #[test]
    fn test_serialize_error_omits_cost() {
        let json = serde_json::to_value(AllocationResult::error("boom")).unwrap();

        assert_eq!(json["status"], "Error");
        assert!(json.get("total_cost").is_none());
        assert_eq!(json["message"], "boom");
    }
}
