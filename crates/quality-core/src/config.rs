use crate::constants::*;
use crate::error::{QualityError, Result};

/// Controller tuning. `Default` mirrors the constants in [`crate::constants`].
#[derive(Clone, Debug, PartialEq)]
pub struct ControllerConfig {
    pub window_capacity: usize,
    pub decision_interval_frames: u32,
    pub drop_to_low_below_fps: f64,
    pub drop_to_medium_below_fps: f64,
    pub recover_to_medium_above_fps: f64,
    pub recover_to_high_above_fps: f64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            window_capacity: FPS_WINDOW_CAPACITY,
            decision_interval_frames: DECISION_INTERVAL_FRAMES,
            drop_to_low_below_fps: DROP_TO_LOW_BELOW_FPS,
            drop_to_medium_below_fps: DROP_TO_MEDIUM_BELOW_FPS,
            recover_to_medium_above_fps: RECOVER_TO_MEDIUM_ABOVE_FPS,
            recover_to_high_above_fps: RECOVER_TO_HIGH_ABOVE_FPS,
        }
    }
}

impl ControllerConfig {
    /// Reject configs that would sample nothing or collapse the hysteresis band.
    pub fn validate(&self) -> Result<()> {
        if self.window_capacity == 0 {
            return Err(QualityError::InvalidConfig("window_capacity must be at least 1"));
        }
        if self.decision_interval_frames == 0 {
            return Err(QualityError::InvalidConfig(
                "decision_interval_frames must be at least 1",
            ));
        }
        let thresholds = [
            self.drop_to_low_below_fps,
            self.drop_to_medium_below_fps,
            self.recover_to_medium_above_fps,
            self.recover_to_high_above_fps,
        ];
        if thresholds.iter().any(|t| !t.is_finite() || *t <= 0.0) {
            return Err(QualityError::InvalidConfig("thresholds must be positive and finite"));
        }
        if self.drop_to_low_below_fps >= self.drop_to_medium_below_fps {
            return Err(QualityError::InvalidConfig(
                "drop_to_low_below_fps must be below drop_to_medium_below_fps",
            ));
        }
        if self.drop_to_medium_below_fps >= self.recover_to_medium_above_fps {
            return Err(QualityError::InvalidConfig(
                "drop_to_medium_below_fps must be below recover_to_medium_above_fps",
            ));
        }
        if self.recover_to_medium_above_fps >= self.recover_to_high_above_fps {
            return Err(QualityError::InvalidConfig(
                "recover_to_medium_above_fps must be below recover_to_high_above_fps",
            ));
        }
        Ok(())
    }
}
