use dispatch_network::{
    data_source::NetworkDataSource,
    records::{DemandNodeId, HistoricalDemandRecord},
};
use fxhash::FxHashMap;
use tracing::{debug, error, info, instrument, warn};

use crate::{demand_prediction::DemandPrediction, error::FitError};

use super::trend_model::TrendModel;

const PREDICTION_SCALE: f64 = 100.0;

/// A demand node left out of a forecast.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedNode {
    pub demand_node_id: DemandNodeId,
    pub demand_node_name: String,
    pub reason: FitError,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastReport {
    pub target_period: u32,
    /// At most one per demand node, in order of first appearance in the history
    pub predictions: Vec<DemandPrediction>,
    pub skipped: Vec<SkippedNode>,
}

impl ForecastReport {
    pub fn empty(target_period: u32) -> Self {
        Self {
            target_period,
            predictions: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

struct NodeHistory<'a> {
    demand_node_id: DemandNodeId,
    demand_node_name: &'a str,
    observations: Vec<(u32, f64)>,
}

fn partition_by_node(records: &[HistoricalDemandRecord]) -> Vec<NodeHistory<'_>> {
    let mut positions: FxHashMap<DemandNodeId, usize> = FxHashMap::default();
    let mut histories: Vec<NodeHistory> = Vec::new();

    for record in records {
        let position = *positions.entry(record.demand_node_id).or_insert_with(|| {
            histories.push(NodeHistory {
                demand_node_id: record.demand_node_id,
                demand_node_name: &record.demand_node_name,
                observations: Vec::new(),
            });
            histories.len() - 1
        });

        histories[position]
            .observations
            .push((record.period, record.units_requested));
    }

    histories
}

/// Clamps to zero and rounds to two decimals. NaN becomes zero.
fn to_predicted_demand(value: f64) -> f64 {
    let rounded = (value * PREDICTION_SCALE).round() / PREDICTION_SCALE;
    if rounded > 0.0 { rounded } else { 0.0 }
}

/// Fits one trend line per demand node and evaluates it at `target_period`.
///
/// A node that cannot be fitted is skipped and reported, the remaining nodes
/// are still forecast.
pub fn forecast_records(records: &[HistoricalDemandRecord], target_period: u32) -> ForecastReport {
    let mut report = ForecastReport::empty(target_period);

    if records.is_empty() {
        warn!("No historical demand found, nothing to forecast");
        return report;
    }

    for history in partition_by_node(records) {
        match TrendModel::fit(&history.observations) {
            Ok(model) => {
                let predicted_demand = to_predicted_demand(model.predict(target_period));
                debug!(
                    "Demand node {}: slope = {:.4}, intercept = {:.4}, predicted = {}",
                    history.demand_node_id,
                    model.slope(),
                    model.intercept(),
                    predicted_demand
                );

                report.predictions.push(DemandPrediction {
                    demand_node_id: history.demand_node_id,
                    demand_node_name: history.demand_node_name.to_owned(),
                    predicted_demand,
                });
            }
            Err(reason) => {
                warn!(
                    "Skipping demand node {} ({}): {}",
                    history.demand_node_id, history.demand_node_name, reason
                );

                report.skipped.push(SkippedNode {
                    demand_node_id: history.demand_node_id,
                    demand_node_name: history.demand_node_name.to_owned(),
                    reason,
                });
            }
        }
    }

    info!(
        "Forecast for period {} completed: {} predictions, {} skipped",
        target_period,
        report.predictions.len(),
        report.skipped.len()
    );

    report
}

pub struct DemandForecaster<S> {
    source: S,
}

impl<S: NetworkDataSource> DemandForecaster<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn forecast(&self, target_period: u32) -> Vec<DemandPrediction> {
        self.forecast_with_report(target_period).predictions
    }

    #[instrument(skip(self), level = "debug")]
    pub fn forecast_with_report(&self, target_period: u32) -> ForecastReport {
        match self.source.list_historical_demand() {
            Ok(records) => forecast_records(&records, target_period),
            Err(err) => {
                error!("Could not read historical demand: {}", err);
                ForecastReport::empty(target_period)
            }
        }
    }

    /// The period right after the latest one in the history.
    pub fn next_period(&self) -> Option<u32> {
        match self.source.list_historical_demand() {
            Ok(records) => records
                .iter()
                .map(|record| record.period)
                .max()
                .map(|period| period.saturating_add(1)),
            Err(err) => {
                error!("Could not read historical demand: {}", err);
                None
            }
        }
    }
}
