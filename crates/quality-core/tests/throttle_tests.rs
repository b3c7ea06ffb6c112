use quality_core::{FrameThrottle, QualityTier, Throttled};
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn throttle_fires_floor_m_over_n_times() {
    for n in 1..=7u32 {
        for m in 0..=50u32 {
            let mut throttle = FrameThrottle::new(n);
            let fired = (0..m).filter(|_| throttle.ready()).count() as u32;
            assert_eq!(fired, m / n, "n={n} m={m}");
        }
    }
}

#[test]
fn throttle_fires_on_the_nth_call_not_the_first() {
    let mut throttle = FrameThrottle::new(3);
    let pattern: Vec<bool> = (0..7).map(|_| throttle.ready()).collect();
    assert_eq!(pattern, vec![false, false, true, false, false, true, false]);
}

#[test]
fn zero_interval_behaves_like_every_frame() {
    let mut throttle = FrameThrottle::new(0);
    assert_eq!(throttle.interval(), 1);
    assert!((0..5).all(|_| throttle.ready()));
}

#[test]
fn independent_throttles_do_not_share_counters() {
    let a_hits = Rc::new(Cell::new(0u32));
    let b_hits = Rc::new(Cell::new(0u32));
    let a_count = a_hits.clone();
    let b_count = b_hits.clone();
    let mut a = Throttled::new(move || a_count.set(a_count.get() + 1), 2);
    let mut b = Throttled::new(move || b_count.set(b_count.get() + 1), 5);

    for _ in 0..30 {
        a.call();
        b.call();
    }
    // Extra calls on one side leave the other untouched.
    for _ in 0..4 {
        a.call();
    }
    assert_eq!(a_hits.get(), 17);
    assert_eq!(b_hits.get(), 6);
}

#[test]
fn run_reports_whether_the_callback_ran() {
    let mut throttle = FrameThrottle::new(2);
    let mut ran = 0;
    assert!(!throttle.run(|| ran += 1));
    assert!(throttle.run(|| ran += 1));
    assert_eq!(ran, 1);
}

#[test]
fn ready_every_follows_live_settings() {
    let mut throttle = FrameThrottle::new(1);
    let low = QualityTier::Low.settings().update_throttle;
    let high = QualityTier::High.settings().update_throttle;

    // Low skips every other frame...
    let fired_low = (0..10).filter(|_| throttle.ready_every(low)).count();
    assert_eq!(fired_low, 5);
    // ...High runs every frame.
    let fired_high = (0..10).filter(|_| throttle.ready_every(high)).count();
    assert_eq!(fired_high, 10);
}
