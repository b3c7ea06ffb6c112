/// Per-call-site frame skipper.
///
/// Fires on every Nth call. Each instance keeps its own counter, so two
/// throttled routines never share a skip phase.
#[derive(Clone, Debug)]
pub struct FrameThrottle {
    interval: u32,
    count: u32,
}

impl FrameThrottle {
    /// `interval` is clamped to at least 1 (fire every call).
    pub fn new(interval: u32) -> Self {
        Self {
            interval: interval.max(1),
            count: 0,
        }
    }

    #[inline]
    pub fn interval(&self) -> u32 {
        self.interval
    }

    /// Change the interval without losing the current phase.
    pub fn set_interval(&mut self, interval: u32) {
        self.interval = interval.max(1);
    }

    /// Count one call; true when this call should do the work.
    #[inline]
    pub fn ready(&mut self) -> bool {
        self.count += 1;
        if self.count >= self.interval {
            self.count = 0;
            true
        } else {
            false
        }
    }

    /// Like [`ready`](Self::ready) but with an interval read fresh this frame,
    /// e.g. from the live `update_throttle`.
    #[inline]
    pub fn ready_every(&mut self, interval: u32) -> bool {
        self.set_interval(interval);
        self.ready()
    }

    /// Run `f` if this call is due. Returns whether it ran.
    pub fn run(&mut self, f: impl FnOnce()) -> bool {
        let due = self.ready();
        if due {
            f();
        }
        due
    }
}

/// A callback bundled with its own [`FrameThrottle`].
pub struct Throttled<F: FnMut()> {
    callback: F,
    throttle: FrameThrottle,
}

impl<F: FnMut()> Throttled<F> {
    pub fn new(callback: F, interval: u32) -> Self {
        Self {
            callback,
            throttle: FrameThrottle::new(interval),
        }
    }

    /// Invoke the callback on every Nth call. Returns whether it ran.
    pub fn call(&mut self) -> bool {
        if self.throttle.ready() {
            (self.callback)();
            true
        } else {
            false
        }
    }

    pub fn set_interval(&mut self, interval: u32) {
        self.throttle.set_interval(interval);
    }
}
