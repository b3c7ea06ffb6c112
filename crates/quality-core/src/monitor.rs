use crate::constants::{DEFAULT_AVERAGE_FPS, FPS_WINDOW_CAPACITY};
use instant::Instant;
use std::collections::VecDeque;

/// Rolling-window frame-rate estimator.
///
/// Fed once per rendered frame. Each call turns the wall-clock gap since the
/// previous call into an instantaneous fps sample; the estimate is the plain
/// mean of the most recent `capacity` samples.
#[derive(Clone, Debug)]
pub struct PerformanceMonitor {
    samples: VecDeque<f64>,
    capacity: usize,
    last: Instant,
    frame_count: u64,
}

impl Default for PerformanceMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl PerformanceMonitor {
    pub fn new() -> Self {
        Self::with_capacity_at(FPS_WINDOW_CAPACITY, Instant::now())
    }

    pub fn new_at(now: Instant) -> Self {
        Self::with_capacity_at(FPS_WINDOW_CAPACITY, now)
    }

    /// `capacity` is clamped to at least one sample.
    pub fn with_capacity_at(capacity: usize, now: Instant) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity + 1),
            capacity,
            last: now,
            frame_count: 0,
        }
    }

    /// Record a frame at the current time and return the running average.
    pub fn update(&mut self) -> f64 {
        self.update_at(Instant::now())
    }

    /// Record a frame observed at `now` and return the running average.
    ///
    /// A gap that is zero or negative (clock did not advance) yields no
    /// sample, but the frame still counts.
    pub fn update_at(&mut self, now: Instant) -> f64 {
        if now > self.last {
            let delta_ms = (now - self.last).as_secs_f64() * 1000.0;
            if delta_ms > 0.0 {
                self.samples.push_back(1000.0 / delta_ms);
                while self.samples.len() > self.capacity {
                    self.samples.pop_front();
                }
            }
        }
        self.last = now;
        self.frame_count += 1;
        self.average_fps()
    }

    /// Mean of the samples in the window, or the healthy default when empty.
    pub fn average_fps(&self) -> f64 {
        if self.samples.is_empty() {
            return DEFAULT_AVERAGE_FPS;
        }
        self.samples.iter().sum::<f64>() / self.samples.len() as f64
    }

    pub fn reset(&mut self) {
        self.reset_at(Instant::now());
    }

    pub fn reset_at(&mut self, now: Instant) {
        self.samples.clear();
        self.frame_count = 0;
        self.last = now;
    }

    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    #[inline]
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn samples(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }
}
