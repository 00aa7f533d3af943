use dispatch_network::records::{DemandNode, DemandNodeId, SupplyNode, SupplyNodeId};
use fxhash::{FxHashMap, FxHashSet};

use crate::{
    define_index_newtype, demand_prediction::DemandPrediction, error::AllocationError,
    solver::allocation_config::AllocationConfig,
};

use super::{
    cost_matrix::{Cost, CostMatrix},
    location::Location,
};

define_index_newtype!(SupplyIdx, SupplySite);
define_index_newtype!(DemandIdx, DemandSite);

#[derive(Debug, Clone)]
pub struct SupplySite {
    id: SupplyNodeId,
    capacity: f64,
    location: Location,
}

impl SupplySite {
    pub fn id(&self) -> SupplyNodeId {
        self.id
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }
}

#[derive(Debug, Clone)]
pub struct DemandSite {
    id: DemandNodeId,
    demand: f64,
    location: Location,
}

impl DemandSite {
    pub fn id(&self) -> DemandNodeId {
        self.id
    }

    pub fn demand(&self) -> f64 {
        self.demand
    }
}

/// A capacitated transportation problem: ship exactly the predicted demand to
/// every demand site without exceeding any supply site capacity.
///
/// Sites are stored in arenas, supply sites in input order and demand sites in
/// prediction order. Every prediction becomes a demand site, including those
/// with zero demand.
#[derive(Debug, Clone)]
pub struct TransportationProblem {
    supply_sites: Vec<SupplySite>,
    demand_sites: Vec<DemandSite>,
    costs: CostMatrix,
}

impl TransportationProblem {
    pub fn new(
        predictions: &[DemandPrediction],
        supply_nodes: &[SupplyNode],
        demand_nodes: &[DemandNode],
        config: &AllocationConfig,
    ) -> Result<Self, AllocationError> {
        config.validate()?;

        if predictions.is_empty() {
            return Err(AllocationError::EmptyPredictions);
        }

        let supply_sites = Self::supply_sites(supply_nodes)?;
        let demand_sites = Self::demand_sites(predictions, demand_nodes)?;

        let supply_locations = supply_sites
            .iter()
            .map(|site| site.location)
            .collect::<Vec<_>>();
        let demand_locations = demand_sites
            .iter()
            .map(|site| site.location)
            .collect::<Vec<_>>();

        let costs = CostMatrix::from_euclidean(
            &supply_locations,
            &demand_locations,
            config.cost_per_distance,
        );

        Ok(Self {
            supply_sites,
            demand_sites,
            costs,
        })
    }

    fn supply_sites(supply_nodes: &[SupplyNode]) -> Result<Vec<SupplySite>, AllocationError> {
        let mut seen = FxHashSet::default();

        supply_nodes
            .iter()
            .map(|node| {
                if !seen.insert(node.id) {
                    return Err(AllocationError::InvalidInput(format!(
                        "duplicate supply node {}",
                        node.id
                    )));
                }

                if !node.capacity.is_finite() || node.capacity < 0.0 {
                    return Err(AllocationError::InvalidInput(format!(
                        "supply node {} has invalid capacity {}",
                        node.id, node.capacity
                    )));
                }

                let location = Location::from_lat_lon(node.latitude, node.longitude);
                if !location.is_finite() {
                    return Err(AllocationError::InvalidInput(format!(
                        "supply node {} has invalid coordinates",
                        node.id
                    )));
                }

                Ok(SupplySite {
                    id: node.id,
                    capacity: node.capacity,
                    location,
                })
            })
            .collect()
    }

    fn demand_sites(
        predictions: &[DemandPrediction],
        demand_nodes: &[DemandNode],
    ) -> Result<Vec<DemandSite>, AllocationError> {
        let nodes = demand_nodes
            .iter()
            .map(|node| (node.id, node))
            .collect::<FxHashMap<_, _>>();
        let mut seen = FxHashSet::default();

        predictions
            .iter()
            .map(|prediction| {
                let id = prediction.demand_node_id;
                let Some(node) = nodes.get(&id) else {
                    return Err(AllocationError::UnresolvedReference(id));
                };

                if !seen.insert(id) {
                    return Err(AllocationError::InvalidInput(format!(
                        "more than one prediction for demand node {id}"
                    )));
                }

                if !prediction.predicted_demand.is_finite() || prediction.predicted_demand < 0.0 {
                    return Err(AllocationError::InvalidInput(format!(
                        "demand node {} has invalid predicted demand {}",
                        id, prediction.predicted_demand
                    )));
                }

                let location = Location::from_lat_lon(node.latitude, node.longitude);
                if !location.is_finite() {
                    return Err(AllocationError::InvalidInput(format!(
                        "demand node {id} has invalid coordinates"
                    )));
                }

                Ok(DemandSite {
                    id,
                    demand: prediction.predicted_demand,
                    location,
                })
            })
            .collect()
    }

    pub fn supply_sites_iter(&self) -> impl Iterator<Item = (SupplyIdx, &SupplySite)> {
        SupplyIdx::all(self.supply_sites.len()).map(|idx| (idx, &self.supply_sites[idx]))
    }

    pub fn demand_sites_iter(&self) -> impl Iterator<Item = (DemandIdx, &DemandSite)> {
        DemandIdx::all(self.demand_sites.len()).map(|idx| (idx, &self.demand_sites[idx]))
    }

    pub fn demand_site(&self, idx: DemandIdx) -> &DemandSite {
        &self.demand_sites[idx]
    }

    pub fn num_supply_sites(&self) -> usize {
        self.supply_sites.len()
    }

    pub fn num_demand_sites(&self) -> usize {
        self.demand_sites.len()
    }

    pub fn costs(&self) -> &CostMatrix {
        &self.costs
    }

    pub fn cost(&self, supply: SupplyIdx, demand: DemandIdx) -> Cost {
        self.costs.cost(supply, demand)
    }

    pub fn total_demand(&self) -> f64 {
        self.demand_sites.iter().map(|site| site.demand).sum()
    }

    pub fn total_capacity(&self) -> f64 {
        self.supply_sites.iter().map(|site| site.capacity).sum()
    }
}
