use crate::profiles::Profile;
use quality_core::{AdaptiveQuality, QualityTier, TierChange};
use rand::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

// Jitter above this would let a frame take zero or negative time.
const MAX_JITTER: f64 = 0.9;

#[derive(Clone, Debug)]
pub struct SimOptions {
    pub profile: Profile,
    pub initial: QualityTier,
    pub frames: u32,
    pub seed: u64,
    /// Relative frame-time noise, e.g. 0.1 for ±10%.
    pub jitter: f64,
}

#[derive(Clone, Debug)]
pub struct SimReport {
    pub frames: u32,
    pub simulated: Duration,
    pub final_tier: QualityTier,
    /// Frame index each change happened on, with the change itself.
    pub changes: Vec<(u32, TierChange)>,
    pub frames_per_tier: BTreeMap<QualityTier, u32>,
}

/// Run the controller over a synthetic clock.
pub fn simulate(opts: &SimOptions) -> SimReport {
    let mut rng = StdRng::seed_from_u64(opts.seed);
    let jitter = opts.jitter.clamp(0.0, MAX_JITTER);
    let start = Instant::now();
    let mut now = start;
    let mut controller = AdaptiveQuality::new_at(opts.initial, start);
    let mut changes = Vec::new();
    let mut frames_per_tier = BTreeMap::new();

    for frame in 0..opts.frames {
        let mut secs = opts.profile.frame_seconds(frame, opts.frames);
        if jitter > 0.0 {
            secs *= 1.0 + rng.gen_range(-jitter..=jitter);
        }
        now += Duration::from_secs_f64(secs);
        *frames_per_tier.entry(controller.tier()).or_insert(0) += 1;
        if let Some(change) = controller.tick_at(now) {
            log::debug!("frame {frame}: {:?}", change);
            changes.push((frame, change));
        }
    }

    SimReport {
        frames: opts.frames,
        simulated: now - start,
        final_tier: controller.tier(),
        changes,
        frames_per_tier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(profile: Profile, initial: QualityTier) -> SimOptions {
        SimOptions {
            profile,
            initial,
            frames: 3600,
            seed: 1,
            jitter: 0.0,
        }
    }

    #[test]
    fn steady_holds_high() {
        let r = simulate(&opts(Profile::Steady, QualityTier::High));
        assert!(r.changes.is_empty());
        assert_eq!(r.final_tier, QualityTier::High);
        assert_eq!(r.frames_per_tier.get(&QualityTier::High), Some(&3600));
    }

    #[test]
    fn degrade_walks_down_to_low() {
        let r = simulate(&opts(Profile::Degrade, QualityTier::High));
        assert_eq!(r.final_tier, QualityTier::Low);
        let path: Vec<_> = r.changes.iter().map(|(_, c)| c.to).collect();
        assert_eq!(path, vec![QualityTier::Medium, QualityTier::Low]);
    }

    #[test]
    fn recover_climbs_back_to_high() {
        let r = simulate(&opts(Profile::Recover, QualityTier::Low));
        assert_eq!(r.final_tier, QualityTier::High);
        let path: Vec<_> = r.changes.iter().map(|(_, c)| c.to).collect();
        assert_eq!(path, vec![QualityTier::Medium, QualityTier::High]);
    }

    #[test]
    fn noisy_never_flaps() {
        let r = simulate(&opts(Profile::Noisy, QualityTier::High));
        assert!(r.changes.is_empty());
        let r = simulate(&opts(Profile::Noisy, QualityTier::Medium));
        assert!(r.changes.is_empty());
    }

    #[test]
    fn spike_drops_then_recovers() {
        let r = simulate(&opts(Profile::Spike, QualityTier::High));
        let path: Vec<_> = r.changes.iter().map(|(_, c)| c.to).collect();
        assert_eq!(
            path,
            vec![QualityTier::Low, QualityTier::Medium, QualityTier::High]
        );
    }

    #[test]
    fn changes_land_on_decision_frames() {
        let r = simulate(&opts(Profile::Degrade, QualityTier::High));
        for (frame, _) in &r.changes {
            assert_eq!((frame + 1) % 120, 0, "change on frame {frame}");
        }
    }

    #[test]
    fn same_seed_same_run() {
        let mut o = opts(Profile::Degrade, QualityTier::High);
        o.jitter = 0.2;
        let a = simulate(&o);
        let b = simulate(&o);
        assert_eq!(a.changes, b.changes);
        assert_eq!(a.simulated, b.simulated);
    }

    #[test]
    fn frame_count_is_accounted() {
        let r = simulate(&opts(Profile::Spike, QualityTier::High));
        assert_eq!(r.frames_per_tier.values().sum::<u32>(), 3600);
    }
}
