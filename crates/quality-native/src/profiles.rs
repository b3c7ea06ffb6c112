use clap::ValueEnum;

/// Shape of the synthetic frame-time trace fed to the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Profile {
    /// A constant 60 fps.
    Steady,
    /// Linear slide from 60 fps down to 20 fps.
    Degrade,
    /// Linear climb from 20 fps up to 60 fps.
    Recover,
    /// Wobbles around 51 fps, inside the hysteresis band.
    Noisy,
    /// 60 fps with a 25 fps stall through the middle third.
    Spike,
}

const FAST_FPS: f64 = 60.0;
const SLOW_FPS: f64 = 20.0;
const NOISY_CENTER_FPS: f64 = 51.0;
const NOISY_SWING_FPS: f64 = 5.0;
const NOISY_PERIOD_FRAMES: f64 = 240.0;
const SPIKE_FPS: f64 = 25.0;

impl Profile {
    /// Target frame rate at `frame` of a `total`-frame run.
    pub fn fps_at(self, frame: u32, total: u32) -> f64 {
        let t = if total <= 1 {
            0.0
        } else {
            frame.min(total - 1) as f64 / (total - 1) as f64
        };
        match self {
            Profile::Steady => FAST_FPS,
            Profile::Degrade => FAST_FPS + (SLOW_FPS - FAST_FPS) * t,
            Profile::Recover => SLOW_FPS + (FAST_FPS - SLOW_FPS) * t,
            Profile::Noisy => {
                let phase = frame as f64 / NOISY_PERIOD_FRAMES * std::f64::consts::TAU;
                NOISY_CENTER_FPS + NOISY_SWING_FPS * phase.sin()
            }
            Profile::Spike => {
                if (1.0 / 3.0..2.0 / 3.0).contains(&t) {
                    SPIKE_FPS
                } else {
                    FAST_FPS
                }
            }
        }
    }

    #[inline]
    pub fn frame_seconds(self, frame: u32, total: u32) -> f64 {
        1.0 / self.fps_at(frame, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steady_is_flat() {
        for f in [0, 10, 500, 999] {
            assert_eq!(Profile::Steady.fps_at(f, 1000), 60.0);
        }
    }

    #[test]
    fn ramps_hit_their_endpoints() {
        assert_eq!(Profile::Degrade.fps_at(0, 1000), 60.0);
        assert_eq!(Profile::Degrade.fps_at(999, 1000), 20.0);
        assert_eq!(Profile::Recover.fps_at(0, 1000), 20.0);
        assert_eq!(Profile::Recover.fps_at(999, 1000), 60.0);
        // past the end clamps
        assert_eq!(Profile::Degrade.fps_at(5000, 1000), 20.0);
    }

    #[test]
    fn degrade_is_monotonic() {
        let mut prev = f64::INFINITY;
        for f in 0..600 {
            let fps = Profile::Degrade.fps_at(f, 600);
            assert!(fps <= prev);
            prev = fps;
        }
    }

    #[test]
    fn noisy_stays_inside_hysteresis_band() {
        for f in 0..2000 {
            let fps = Profile::Noisy.fps_at(f, 2000);
            assert!(fps > 45.0 && fps < 58.0, "frame {f}: {fps}");
        }
    }

    #[test]
    fn spike_covers_middle_third() {
        assert_eq!(Profile::Spike.fps_at(0, 3001), 60.0);
        assert_eq!(Profile::Spike.fps_at(1500, 3001), 25.0);
        assert_eq!(Profile::Spike.fps_at(3000, 3001), 60.0);
    }

    #[test]
    fn single_frame_run() {
        assert_eq!(Profile::Recover.fps_at(0, 1), 20.0);
        assert_eq!(Profile::Degrade.fps_at(0, 0), 60.0);
    }

    #[test]
    fn frame_seconds_inverts_fps() {
        let s = Profile::Steady.frame_seconds(0, 10);
        assert!((s - 1.0 / 60.0).abs() < 1e-12);
    }
}
