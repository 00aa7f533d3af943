use std::panic::AssertUnwindSafe;

use dispatch_network::records::{DemandNode, SupplyNode};
use good_lp::{
    Expression, ProblemVariables, ResolutionError, Solution, SolverModel, Variable, constraint,
    default_solver, variable,
};
use tracing::{debug, error, info, instrument, warn};

use crate::{
    demand_prediction::DemandPrediction,
    error::AllocationError,
    problem::transportation_problem::{DemandIdx, SupplyIdx, TransportationProblem},
};

use super::{
    allocation_config::AllocationConfig,
    allocation_result::{AllocationEdge, AllocationResult, AllocationStatus},
};

/// Relative slack allowed when comparing total demand against total capacity.
const CAPACITY_TOLERANCE: f64 = 1e-9;

/// Capacity relaxation, in scaled units, for a second solve when the LP solver
/// rejects an instance that passed the capacity check.
const TIGHT_CAPACITY_SLACK: f64 = 1e-8;

/// Solves the capacitated transportation problem: minimize the sum of
/// `cost(s, d) * units(s, d)` such that every demand site receives exactly its
/// predicted demand and no supply site ships more than its capacity.
pub struct AllocationSolver {
    config: AllocationConfig,
}

impl Default for AllocationSolver {
    fn default() -> Self {
        Self::new(AllocationConfig::default())
    }
}

impl AllocationSolver {
    pub fn new(config: AllocationConfig) -> Self {
        Self { config }
    }

    /// Never fails, every failure is folded into the result status.
    #[instrument(skip_all, level = "debug")]
    pub fn optimize(
        &self,
        predictions: &[DemandPrediction],
        supply_nodes: &[SupplyNode],
        demand_nodes: &[DemandNode],
    ) -> AllocationResult {
        match self.try_optimize(predictions, supply_nodes, demand_nodes) {
            Ok(result) => result,
            Err(err) => Self::failed(err),
        }
    }

    pub fn try_optimize(
        &self,
        predictions: &[DemandPrediction],
        supply_nodes: &[SupplyNode],
        demand_nodes: &[DemandNode],
    ) -> Result<AllocationResult, AllocationError> {
        let problem =
            TransportationProblem::new(predictions, supply_nodes, demand_nodes, &self.config)?;
        self.solve(&problem)
    }

    pub fn solve(&self, problem: &TransportationProblem) -> Result<AllocationResult, AllocationError> {
        let total_demand = problem.total_demand();
        let total_capacity = problem.total_capacity();

        if total_demand > total_capacity + CAPACITY_TOLERANCE * total_capacity.max(1.0) {
            return Err(AllocationError::InsufficientCapacity {
                demand: total_demand,
                capacity: total_capacity,
            });
        }

        if problem.costs().is_empty() {
            // No supply sites left, which only works out when nothing is demanded.
            return Ok(AllocationResult::optimal(0.0, Vec::new()));
        }

        debug!(
            "Solving transportation problem: {} supply sites, {} demand sites, demand = {}, capacity = {}",
            problem.num_supply_sites(),
            problem.num_demand_sites(),
            total_demand,
            total_capacity
        );

        let scale = unit_scale(problem);
        let solution = match solve_linear_program(problem, scale, 0.0) {
            // Total demand fits in total capacity and every supply site reaches
            // every demand site, so this instance is feasible.
            Err(AllocationError::Infeasible) => {
                debug!(
                    "Solver reported a feasible instance as infeasible, retrying with capacities relaxed by {}",
                    TIGHT_CAPACITY_SLACK * scale
                );
                solve_linear_program(problem, scale, TIGHT_CAPACITY_SLACK)?
            }
            outcome => outcome?,
        };
        let result = self.build_result(problem, &solution);

        info!(
            "Allocation completed: {} edges, total cost = {:.4}",
            result.edges().len(),
            result.total_cost().unwrap_or_default()
        );

        Ok(result)
    }

    fn build_result(
        &self,
        problem: &TransportationProblem,
        solution: &LinearProgramSolution,
    ) -> AllocationResult {
        let costs = problem.costs();
        let mut edges = Vec::new();

        for (supply_idx, supply_site) in problem.supply_sites_iter() {
            for (demand_idx, demand_site) in problem.demand_sites_iter() {
                let shipped = solution.units[costs.index(supply_idx, demand_idx)];

                if shipped > self.config.edge_epsilon {
                    edges.push(AllocationEdge {
                        supply_node_id: supply_site.id(),
                        demand_node_id: demand_site.id(),
                        units: shipped,
                    });
                }
            }
        }

        AllocationResult::optimal(solution.objective.max(0.0), edges)
    }

    fn failed(err: AllocationError) -> AllocationResult {
        match err.status() {
            AllocationStatus::Infeasible => {
                warn!("Allocation infeasible: {}", err);
                AllocationResult::infeasible(err.to_string())
            }
            _ => {
                error!("Allocation failed: {}", err);
                AllocationResult::error(err.to_string())
            }
        }
    }
}

struct LinearProgramSolution {
    /// Units shipped on every edge, laid out like the cost matrix
    units: Vec<f64>,
    /// Objective value in unscaled cost units
    objective: f64,
}

/// Largest predicted demand, at least 1. Demands and capacities are divided by
/// it before solving so the LP works on values of order one, shipped units are
/// multiplied back afterwards.
fn unit_scale(problem: &TransportationProblem) -> f64 {
    problem
        .demand_sites_iter()
        .map(|(_, site)| site.demand())
        .fold(1.0, f64::max)
}

fn solve_linear_program(
    problem: &TransportationProblem,
    scale: f64,
    capacity_slack: f64,
) -> Result<LinearProgramSolution, AllocationError> {
    let costs = problem.costs();
    let mut vars = ProblemVariables::new();
    let units: Vec<Variable> = (0..costs.len())
        .map(|_| vars.add(variable().min(0.0)))
        .collect();

    let mut objective = Expression::from(0.0);
    for supply_idx in SupplyIdx::all(costs.num_supply()) {
        for demand_idx in DemandIdx::all(costs.num_demand()) {
            let edge = costs.index(supply_idx, demand_idx);
            objective += costs.cost(supply_idx, demand_idx) * units[edge];
        }
    }

    let mut model = vars.minimise(objective.clone()).using(default_solver);

    for (demand_idx, demand_site) in problem.demand_sites_iter() {
        let mut incoming = Expression::from(0.0);
        for supply_idx in SupplyIdx::all(costs.num_supply()) {
            incoming += units[costs.index(supply_idx, demand_idx)];
        }
        let demand = demand_site.demand() / scale;
        model = model.with(constraint!(incoming == demand));
    }

    for (supply_idx, supply_site) in problem.supply_sites_iter() {
        let mut outgoing = Expression::from(0.0);
        for demand_idx in DemandIdx::all(costs.num_demand()) {
            outgoing += units[costs.index(supply_idx, demand_idx)];
        }
        let capacity = supply_site.capacity() / scale + capacity_slack;
        model = model.with(constraint!(outgoing <= capacity));
    }

    let outcome = std::panic::catch_unwind(AssertUnwindSafe(|| model.solve()))
        .map_err(|_| AllocationError::Solver(String::from("linear program solver panicked")))?;

    match outcome {
        Ok(solution) => Ok(LinearProgramSolution {
            units: units
                .iter()
                .map(|&var| solution.value(var).max(0.0) * scale)
                .collect(),
            objective: solution.eval(objective) * scale,
        }),
        Err(ResolutionError::Infeasible) => Err(AllocationError::Infeasible),
        Err(err) => Err(AllocationError::Solver(err.to_string())),
    }
}
