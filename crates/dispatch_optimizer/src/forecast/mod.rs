pub mod demand_forecaster;
pub mod trend_model;
