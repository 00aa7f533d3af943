use std::{
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use fxhash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    data_source::NetworkDataSource,
    error::DataSourceError,
    records::{DemandNode, HistoricalDemandRecord, StoredDemandRecord, SupplyNode, join_history},
};

/// The on-disk network document.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct NetworkDataset {
    pub supply_nodes: Vec<SupplyNode>,
    pub demand_nodes: Vec<DemandNode>,
    #[serde(default)]
    pub historical_demand: Vec<StoredDemandRecord>,
}

impl NetworkDataset {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DataSourceError> {
        let file = std::fs::File::open(path)?;
        let dataset: NetworkDataset = serde_json::from_reader(BufReader::new(file))?;
        dataset.validate()?;
        Ok(dataset)
    }

    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), DataSourceError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::File::create(path)?;
        let mut writer = BufWriter::with_capacity(64 * 1024, file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;

        Ok(())
    }

    pub fn validate(&self) -> Result<(), DataSourceError> {
        let mut supply_ids = FxHashSet::default();
        for node in &self.supply_nodes {
            if !supply_ids.insert(node.id) {
                return Err(invalid(format!("duplicate supply node id {}", node.id)));
            }
            if !node.latitude.is_finite() || !node.longitude.is_finite() {
                return Err(invalid(format!("supply node {} has invalid coordinates", node.id)));
            }
            if !node.capacity.is_finite() || node.capacity < 0.0 {
                return Err(invalid(format!(
                    "supply node {} has invalid capacity {}",
                    node.id, node.capacity
                )));
            }
        }

        let mut demand_ids = FxHashSet::default();
        for node in &self.demand_nodes {
            if !demand_ids.insert(node.id) {
                return Err(invalid(format!("duplicate demand node id {}", node.id)));
            }
            if !node.latitude.is_finite() || !node.longitude.is_finite() {
                return Err(invalid(format!("demand node {} has invalid coordinates", node.id)));
            }
        }

        let mut rows = FxHashSet::default();
        for record in &self.historical_demand {
            if record.period == 0 {
                return Err(invalid(format!(
                    "history row for {} has period 0, periods start at 1",
                    record.demand_node_id
                )));
            }
            if !record.units_requested.is_finite() || record.units_requested < 0.0 {
                return Err(invalid(format!(
                    "history row for {} in period {} has invalid units {}",
                    record.demand_node_id, record.period, record.units_requested
                )));
            }
            if !rows.insert((record.period, record.demand_node_id)) {
                return Err(invalid(format!(
                    "duplicate history row for {} in period {}",
                    record.demand_node_id, record.period
                )));
            }
        }

        Ok(())
    }
}

fn invalid(message: String) -> DataSourceError {
    DataSourceError::InvalidDataset(message)
}

/// Reads the dataset from disk on every call, nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct JsonFileNetwork {
    path: PathBuf,
}

impl JsonFileNetwork {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<NetworkDataset, DataSourceError> {
        if !self.path.is_file() {
            return Err(DataSourceError::Unavailable(format!(
                "{} is not a file",
                self.path.display()
            )));
        }

        debug!("Loading network dataset from {}", self.path.display());
        NetworkDataset::from_file(&self.path)
    }
}

impl NetworkDataSource for JsonFileNetwork {
    fn list_supply_nodes(&self) -> Result<Vec<SupplyNode>, DataSourceError> {
        Ok(self.load()?.supply_nodes)
    }

    fn list_demand_nodes(&self) -> Result<Vec<DemandNode>, DataSourceError> {
        Ok(self.load()?.demand_nodes)
    }

    fn list_historical_demand(&self) -> Result<Vec<HistoricalDemandRecord>, DataSourceError> {
        let dataset = self.load()?;
        Ok(join_history(&dataset.historical_demand, &dataset.demand_nodes))
    }
}
