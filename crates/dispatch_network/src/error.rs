use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataSourceError {
    #[error("Failed to read network data: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode network data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid network dataset: {0}")]
    InvalidDataset(String),

    #[error("Network data unavailable: {0}")]
    Unavailable(String),
}
