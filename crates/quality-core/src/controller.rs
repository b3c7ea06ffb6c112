//! Hysteretic tier controller.
//!
//! Every `decision_interval_frames` ticks the controller judges the monitor's
//! average and moves the tier at most once:
//!
//! 1. below `drop_to_low` and not Low: straight to Low (from High too);
//! 2. below `drop_to_medium` and High: Medium;
//! 3. above `recover_to_high` and Medium: High;
//! 4. above `recover_to_medium` and Low: Medium;
//! 5. otherwise hold.
//!
//! Degrading is aggressive and recovery goes one tier at a time. The
//! monitor is reset after every judgment, hold included, so each window is
//! measured on the settings that were active for all of it.

use crate::config::ControllerConfig;
use crate::error::Result;
use crate::handle::{QualityHandle, QualitySnapshot};
use crate::monitor::PerformanceMonitor;
use crate::tier::{QualitySettings, QualityTier};
use instant::Instant;
use std::cell::Cell;
use std::rc::Rc;

/// A tier move made at a decision point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TierChange {
    pub from: QualityTier,
    pub to: QualityTier,
    pub average_fps: f64,
}

/// Pure decision table. `None` means hold.
pub fn decide(
    config: &ControllerConfig,
    tier: QualityTier,
    average_fps: f64,
) -> Option<QualityTier> {
    use QualityTier::*;
    if average_fps < config.drop_to_low_below_fps && tier != Low {
        Some(Low)
    } else if average_fps < config.drop_to_medium_below_fps && tier == High {
        Some(Medium)
    } else if average_fps > config.recover_to_high_above_fps && tier == Medium {
        Some(High)
    } else if average_fps > config.recover_to_medium_above_fps && tier == Low {
        Some(Medium)
    } else {
        None
    }
}

/// Owns the frame-rate monitor and the decision cadence; publishes the
/// active tier through [`QualityHandle`]s.
///
/// One instance per rendering surface. Call [`tick`](Self::tick) exactly
/// once per rendered frame from the host's frame callback.
#[derive(Debug)]
pub struct AdaptiveQuality {
    config: ControllerConfig,
    monitor: PerformanceMonitor,
    frames_since_decision: u32,
    active: Rc<Cell<QualityTier>>,
    // Window mean seen at the most recent judgment, before the reset.
    last_judged_fps: Option<f64>,
}

impl AdaptiveQuality {
    pub fn new(initial: QualityTier) -> Self {
        Self::new_at(initial, Instant::now())
    }

    pub fn new_at(initial: QualityTier, now: Instant) -> Self {
        Self::build(initial, ControllerConfig::default(), now)
    }

    pub fn with_config(initial: QualityTier, config: ControllerConfig) -> Result<Self> {
        Self::with_config_at(initial, config, Instant::now())
    }

    pub fn with_config_at(
        initial: QualityTier,
        config: ControllerConfig,
        now: Instant,
    ) -> Result<Self> {
        if let Err(e) = config.validate() {
            log::warn!("quality: rejecting controller config: {}", e);
            return Err(e);
        }
        Ok(Self::build(initial, config, now))
    }

    fn build(initial: QualityTier, config: ControllerConfig, now: Instant) -> Self {
        let monitor = PerformanceMonitor::with_capacity_at(config.window_capacity, now);
        Self {
            config,
            monitor,
            frames_since_decision: 0,
            active: Rc::new(Cell::new(initial)),
            last_judged_fps: None,
        }
    }

    /// A read-only view of the active tier for rendering call sites.
    pub fn handle(&self) -> QualityHandle {
        QualityHandle::new(self.active.clone())
    }

    #[inline]
    pub fn tier(&self) -> QualityTier {
        self.active.get()
    }

    #[inline]
    pub fn settings(&self) -> &'static QualitySettings {
        self.tier().settings()
    }

    pub fn snapshot(&self) -> QualitySnapshot {
        let tier = self.tier();
        QualitySnapshot {
            tier,
            settings: tier.settings(),
        }
    }

    #[inline]
    pub fn monitor(&self) -> &PerformanceMonitor {
        &self.monitor
    }

    /// Window mean the last judgment was made on, if any.
    #[inline]
    pub fn last_judged_fps(&self) -> Option<f64> {
        self.last_judged_fps
    }

    /// Best current fps estimate for display.
    ///
    /// The live window while it holds samples; right after a judgment (when
    /// the window was just cleared) the mean that judgment saw.
    pub fn average_fps(&self) -> f64 {
        match self.last_judged_fps {
            Some(fps) if self.monitor.sample_count() == 0 => fps,
            _ => self.monitor.average_fps(),
        }
    }

    #[inline]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Frames left before the next judgment.
    #[inline]
    pub fn frames_until_decision(&self) -> u32 {
        self.config
            .decision_interval_frames
            .saturating_sub(self.frames_since_decision)
    }

    /// Per-frame entry point using the current wall-clock time.
    pub fn tick(&mut self) -> Option<TierChange> {
        self.tick_at(Instant::now())
    }

    /// Per-frame entry point with an explicit frame timestamp.
    pub fn tick_at(&mut self, now: Instant) -> Option<TierChange> {
        self.monitor.update_at(now);
        self.frames_since_decision += 1;
        if self.frames_since_decision < self.config.decision_interval_frames {
            return None;
        }

        let average_fps = self.monitor.average_fps();
        let from = self.active.get();
        let change = decide(&self.config, from, average_fps).map(|to| {
            self.active.set(to);
            log::info!(
                "quality: switching to {} (avg fps {:.0})",
                to.as_str().to_uppercase(),
                average_fps
            );
            TierChange {
                from,
                to,
                average_fps,
            }
        });
        if change.is_none() {
            log::debug!("quality: holding {} (avg fps {:.1})", from, average_fps);
        }

        self.last_judged_fps = Some(average_fps);
        self.frames_since_decision = 0;
        self.monitor.reset_at(now);
        change
    }
}
