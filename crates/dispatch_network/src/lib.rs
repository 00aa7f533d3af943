pub mod data_source;
pub mod demo;
pub mod error;
pub mod in_memory;
pub mod json_dataset;
pub mod records;
