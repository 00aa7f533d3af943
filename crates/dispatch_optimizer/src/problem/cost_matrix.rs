use super::{
    location::Location,
    transportation_problem::{DemandIdx, SupplyIdx},
};

pub type Cost = f64;

/// Unit shipping costs between every supply and demand site, stored flat.
/// The cost of the edge `(supply, demand)` lives at
/// `supply * num_demand + demand`.
#[derive(Debug, Clone)]
pub struct CostMatrix {
    costs: Vec<Cost>,
    num_supply: usize,
    num_demand: usize,
}

impl CostMatrix {
    pub fn from_euclidean(
        supply_locations: &[Location],
        demand_locations: &[Location],
        cost_per_distance: f64,
    ) -> Self {
        let num_supply = supply_locations.len();
        let num_demand = demand_locations.len();
        let mut costs: Vec<Cost> = Vec::with_capacity(num_supply * num_demand);

        for from in supply_locations {
            for to in demand_locations {
                costs.push(from.euclidean_distance(to) * cost_per_distance);
            }
        }

        Self {
            costs,
            num_supply,
            num_demand,
        }
    }

    #[inline(always)]
    pub fn index(&self, supply: SupplyIdx, demand: DemandIdx) -> usize {
        supply.get() * self.num_demand + demand.get()
    }

    #[inline(always)]
    pub fn cost(&self, supply: SupplyIdx, demand: DemandIdx) -> Cost {
        self.costs[self.index(supply, demand)]
    }

    pub fn num_supply(&self) -> usize {
        self.num_supply
    }

    pub fn num_demand(&self) -> usize {
        self.num_demand
    }

    /// Number of supply x demand edges.
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }
}
