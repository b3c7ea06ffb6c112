// Controller tuning shared by the web and native front-ends.

// Sampling
pub const FPS_WINDOW_CAPACITY: usize = 60; // rolling window of instantaneous fps samples
pub const DEFAULT_AVERAGE_FPS: f64 = 60.0; // assumed until the first sample arrives

// Decision cadence (rendered frames, not wall-clock time)
pub const DECISION_INTERVAL_FRAMES: u32 = 120;

// Hysteresis thresholds (fps). Degrade below, recover above.
pub const DROP_TO_LOW_BELOW_FPS: f64 = 30.0; // any tier above Low falls straight to Low
pub const DROP_TO_MEDIUM_BELOW_FPS: f64 = 45.0; // High -> Medium
pub const RECOVER_TO_MEDIUM_ABOVE_FPS: f64 = 50.0; // Low -> Medium
pub const RECOVER_TO_HIGH_ABOVE_FPS: f64 = 58.0; // Medium -> High

// Device heuristic
pub const LOW_DEVICE_MEMORY_GB: f64 = 4.0;
