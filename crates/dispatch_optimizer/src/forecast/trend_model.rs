use crate::error::FitError;

/// Ordinary least squares line `units = slope * period + intercept` fitted
/// over the history of a single demand node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendModel {
    slope: f64,
    intercept: f64,
}

impl TrendModel {
    pub fn fit(observations: &[(u32, f64)]) -> Result<Self, FitError> {
        if observations.len() < 2 {
            return Err(FitError::InsufficientObservations {
                count: observations.len(),
            });
        }

        if let Some(&(period, _)) = observations.iter().find(|(_, units)| !units.is_finite()) {
            return Err(FitError::NonFiniteObservation { period });
        }

        let n = observations.len() as f64;
        let mean_period = observations
            .iter()
            .map(|&(period, _)| f64::from(period))
            .sum::<f64>()
            / n;
        let mean_units = observations.iter().map(|&(_, units)| units).sum::<f64>() / n;

        // Centered sums, periods are integers so a zero spread is exact.
        let (sxx, sxy) = observations
            .iter()
            .fold((0.0, 0.0), |(sxx, sxy), &(period, units)| {
                let dx = f64::from(period) - mean_period;
                (sxx + dx * dx, sxy + dx * (units - mean_units))
            });

        if sxx == 0.0 {
            return Err(FitError::DegeneratePeriods);
        }

        let slope = sxy / sxx;
        let intercept = mean_units - slope * mean_period;

        if !slope.is_finite() || !intercept.is_finite() {
            return Err(FitError::NonFiniteObservation {
                period: observations[0].0,
            });
        }

        Ok(Self { slope, intercept })
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn predict(&self, period: u32) -> f64 {
        self.slope * f64::from(period) + self.intercept
    }
}
