use crate::error::{Error, Result};

pub const RADIUS: f64 = 1.0;
pub const SIDE_LENGTH: f64 = 2.0;
pub const TOTAL_NUM_TRIALS: usize = 10_000_000;

/// Fixed parameters of one run. The circle is centered at the origin and
/// inscribed in a square of `side_length` also centered at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunConfig {
    pub radius: f64,
    pub side_length: f64,
    pub total_num_trials: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            radius: RADIUS,
            side_length: SIDE_LENGTH,
            total_num_trials: TOTAL_NUM_TRIALS,
        }
    }
}

impl RunConfig {
    /// Default geometry with a different trial count.
    pub fn with_trials(total_num_trials: usize) -> Self {
        RunConfig {
            total_num_trials,
            ..RunConfig::default()
        }
    }

    pub fn half_side(&self) -> f64 {
        self.side_length / 2.0
    }

    /// side_length² / radius², the factor turning a hit probability into pi.
    pub fn area_ratio(&self) -> f64 {
        (self.side_length * self.side_length) / (self.radius * self.radius)
    }

    /// Rejects anything that would make the estimate meaningless before any
    /// worker is started.
    pub fn validate(&self) -> Result<()> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "radius must be positive and finite, got {}",
                self.radius
            )));
        }
        if !self.side_length.is_finite() || self.side_length <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "side length must be positive and finite, got {}",
                self.side_length
            )));
        }
        let radius_sq = self.radius * self.radius;
        let side_sq = self.side_length * self.side_length;
        if !radius_sq.is_finite() || radius_sq <= 0.0 || !side_sq.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "squared radius {} or squared side length {} is out of range",
                radius_sq, side_sq
            )));
        }
        if !self.area_ratio().is_finite() {
            return Err(Error::InvalidConfig(format!(
                "area ratio of radius {} and side length {} is not finite",
                self.radius, self.side_length
            )));
        }
        if self.radius > self.half_side() {
            return Err(Error::InvalidConfig(format!(
                "circle of radius {} does not fit in a square of side {}",
                self.radius, self.side_length
            )));
        }
        if self.total_num_trials == 0 {
            return Err(Error::NoTrials);
        }
        Ok(())
    }
}
