use crate::error::AllocationError;

#[derive(Clone, Debug)]
pub struct AllocationConfig {
    /// Multiplies the euclidean distance of an edge to get its unit cost
    pub cost_per_distance: f64,

    /// Edges carrying this many units or fewer are treated as solver noise
    /// and left out of the plan
    pub edge_epsilon: f64,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            cost_per_distance: 1.0,
            edge_epsilon: 1e-7,
        }
    }
}

impl AllocationConfig {
    pub fn validate(&self) -> Result<(), AllocationError> {
        if !self.cost_per_distance.is_finite() || self.cost_per_distance < 0.0 {
            return Err(AllocationError::InvalidInput(format!(
                "cost per distance must be a non-negative number, got {}",
                self.cost_per_distance
            )));
        }

        if !self.edge_epsilon.is_finite() || self.edge_epsilon < 0.0 {
            return Err(AllocationError::InvalidInput(format!(
                "edge epsilon must be a non-negative number, got {}",
                self.edge_epsilon
            )));
        }

        Ok(())
    }
}
