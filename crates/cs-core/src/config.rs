//! Per-courier motion parameters.

use crate::{CoreError, CoreResult};

/// Step size and speed shared by every courier in a run.
///
/// `step_size` is both the clock increment per tick and the unscaled travel
/// quantum; the distance actually covered per tick is `step_size * speed`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CourierConfig {
    /// Clock increment and travel quantum per tick.  Default: 0.25.
    pub step_size: f64,

    /// Multiplier on `step_size` for spatial movement.  Default: 320
    /// (metres per minute when one clock unit is a minute).
    pub speed: f64,
}

impl CourierConfig {
    pub const DEFAULT_STEP_SIZE: f64 = 0.25;
    pub const DEFAULT_SPEED:     f64 = 320.0;

    pub fn new(step_size: f64, speed: f64) -> Self {
        Self { step_size, speed }
    }

    /// Distance covered by one unobstructed tick.
    #[inline]
    pub fn travel_per_tick(&self) -> f64 {
        self.step_size * self.speed
    }

    /// Reject non-finite or non-positive parameters.
    pub fn validate(&self) -> CoreResult<()> {
        if !(self.step_size.is_finite() && self.step_size > 0.0) {
            return Err(CoreError::Config(format!(
                "step_size must be a positive finite number, got {}",
                self.step_size
            )));
        }
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return Err(CoreError::Config(format!(
                "speed must be a positive finite number, got {}",
                self.speed
            )));
        }
        Ok(())
    }
}

impl Default for CourierConfig {
    fn default() -> Self {
        Self {
            step_size: Self::DEFAULT_STEP_SIZE,
            speed:     Self::DEFAULT_SPEED,
        }
    }
}
