use std::path::PathBuf;

use anyhow::Context;
use dispatch_optimizer::solver::allocation_config::AllocationConfig;

const DATASET_ENV_VAR: &str = "DISPATCH_DATASET";
const COST_PER_DISTANCE_ENV_VAR: &str = "DISPATCH_COST_PER_DISTANCE";
const FUEL_COST_ENV_VAR: &str = "DISPATCH_FUEL_COST_PER_KM";
const TRUCK_CAPACITY_ENV_VAR: &str = "DISPATCH_TRUCK_CAPACITY";

const DEFAULT_DATASET: &str = "data/network.json";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub dataset: PathBuf,
    pub cost_per_distance: f64,
    /// Only used to display an estimated fuel cost
    pub fuel_cost_per_km: f64,
    /// Only used to display the number of trucks per edge
    pub truck_capacity: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset: PathBuf::from(DEFAULT_DATASET),
            cost_per_distance: 1.0,
            fuel_cost_per_km: 1.50,
            truck_capacity: 500.0,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = AppConfig::default();

        if let Some(dataset) = lookup(DATASET_ENV_VAR) {
            config.dataset = PathBuf::from(dataset);
        }
        if let Some(value) = parse_number(&lookup, COST_PER_DISTANCE_ENV_VAR)? {
            config.cost_per_distance = value;
        }
        if let Some(value) = parse_number(&lookup, FUEL_COST_ENV_VAR)? {
            config.fuel_cost_per_km = value;
        }
        if let Some(value) = parse_number(&lookup, TRUCK_CAPACITY_ENV_VAR)? {
            if value <= 0.0 {
                anyhow::bail!("{TRUCK_CAPACITY_ENV_VAR} must be positive, got {value}");
            }
            config.truck_capacity = value;
        }

        Ok(config)
    }

    pub fn allocation_config(&self) -> AllocationConfig {
        AllocationConfig {
            cost_per_distance: self.cost_per_distance,
            ..AllocationConfig::default()
        }
    }
}

fn parse_number(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> anyhow::Result<Option<f64>> {
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<f64>()
                .with_context(|| format!("Invalid value for {key}: {raw}"))
        })
        .transpose()
}
