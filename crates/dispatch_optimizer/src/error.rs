use dispatch_network::records::DemandNodeId;
use thiserror::Error;

use crate::solver::allocation_result::AllocationStatus;

/// Why a demand node history could not be fitted with a trend line.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FitError {
    #[error("{count} observation(s), at least 2 are required")]
    InsufficientObservations { count: usize },

    #[error("all observations share the same period")]
    DegeneratePeriods,

    #[error("non-finite units in period {period}")]
    NonFiniteObservation { period: u32 },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AllocationError {
    #[error("Network data unavailable: {0}")]
    DataUnavailable(String),

    #[error("No demand predictions to allocate")]
    EmptyPredictions,

    #[error("Prediction references unknown demand node {0}")]
    UnresolvedReference(DemandNodeId),

    #[error("Invalid allocation input: {0}")]
    InvalidInput(String),

    #[error("Total predicted demand {demand} exceeds total supply capacity {capacity}")]
    InsufficientCapacity { demand: f64, capacity: f64 },

    #[error("No allocation satisfies every demand and capacity constraint")]
    Infeasible,

    #[error("Solver failure: {0}")]
    Solver(String),
}

impl AllocationError {
    /// The result status this error is reported as.
    pub fn status(&self) -> AllocationStatus {
        match self {
            AllocationError::InsufficientCapacity { .. } | AllocationError::Infeasible => {
                AllocationStatus::Infeasible
            }
            _ => AllocationStatus::Error,
        }
    }
}
