use dispatch_network::{data_source::NetworkDataSource, error::DataSourceError};
use serde::Serialize;
use tracing::{error, instrument};

use crate::{
    demand_prediction::DemandPrediction,
    error::AllocationError,
    forecast::demand_forecaster::{DemandForecaster, ForecastReport},
    solver::{
        allocation_config::AllocationConfig, allocation_result::AllocationResult,
        allocation_solver::AllocationSolver,
    },
};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NetworkSummary {
    pub supply_node_count: usize,
    pub demand_node_count: usize,
    pub total_capacity: f64,
}

/// Entry point for callers: forecasts next-period demand from the history of
/// a data source and allocates it over that source's supply nodes.
///
/// Nothing is cached between calls, every call reads the source again.
pub struct LogisticsPlanner<S> {
    source: S,
    solver: AllocationSolver,
}

impl<S: NetworkDataSource> LogisticsPlanner<S> {
    pub fn new(source: S, config: AllocationConfig) -> Self {
        Self {
            source,
            solver: AllocationSolver::new(config),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn forecast_next_period(&self, target_period: u32) -> Vec<DemandPrediction> {
        self.forecaster().forecast(target_period)
    }

    pub fn forecast_report(&self, target_period: u32) -> ForecastReport {
        self.forecaster().forecast_with_report(target_period)
    }

    pub fn next_period(&self) -> Option<u32> {
        self.forecaster().next_period()
    }

    #[instrument(skip_all, level = "debug")]
    pub fn optimize_allocation(&self, predictions: &[DemandPrediction]) -> AllocationResult {
        let nodes = self
            .source
            .list_supply_nodes()
            .and_then(|supply| Ok((supply, self.source.list_demand_nodes()?)));

        match nodes {
            Ok((supply_nodes, demand_nodes)) => {
                self.solver
                    .optimize(predictions, &supply_nodes, &demand_nodes)
            }
            Err(err) => {
                let err = AllocationError::DataUnavailable(err.to_string());
                error!("Allocation failed: {}", err);
                AllocationResult::error(err.to_string())
            }
        }
    }

    pub fn network_summary(&self) -> Result<NetworkSummary, DataSourceError> {
        let supply_nodes = self.source.list_supply_nodes()?;
        let demand_nodes = self.source.list_demand_nodes()?;

        Ok(NetworkSummary {
            supply_node_count: supply_nodes.len(),
            demand_node_count: demand_nodes.len(),
            total_capacity: self.source.total_supply_capacity()?,
        })
    }

    fn forecaster(&self) -> DemandForecaster<&S> {
        DemandForecaster::new(&self.source)
    }
}
