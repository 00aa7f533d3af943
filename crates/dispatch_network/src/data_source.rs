use crate::{
    error::DataSourceError,
    records::{DemandNode, HistoricalDemandRecord, SupplyNode},
};

/// Read-only access to the reference data and demand history of a network.
pub trait NetworkDataSource {
    fn list_supply_nodes(&self) -> Result<Vec<SupplyNode>, DataSourceError>;

    fn list_demand_nodes(&self) -> Result<Vec<DemandNode>, DataSourceError>;

    /// History rows joined with the demand node names.
    fn list_historical_demand(&self) -> Result<Vec<HistoricalDemandRecord>, DataSourceError>;

    /// Sum of all supply node capacities, 0 for an empty network.
    fn total_supply_capacity(&self) -> Result<f64, DataSourceError> {
        Ok(self
            .list_supply_nodes()?
            .iter()
            .map(|node| node.capacity)
            .sum())
    }
}

impl<T: NetworkDataSource + ?Sized> NetworkDataSource for &T {
    fn list_supply_nodes(&self) -> Result<Vec<SupplyNode>, DataSourceError> {
        (**self).list_supply_nodes()
    }

    fn list_demand_nodes(&self) -> Result<Vec<DemandNode>, DataSourceError> {
        (**self).list_demand_nodes()
    }

    fn list_historical_demand(&self) -> Result<Vec<HistoricalDemandRecord>, DataSourceError> {
        (**self).list_historical_demand()
    }

    fn total_supply_capacity(&self) -> Result<f64, DataSourceError> {
        (**self).total_supply_capacity()
    }
}
