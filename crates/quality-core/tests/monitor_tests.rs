// Rolling-window behaviour of the frame-rate monitor, driven by synthetic
// timestamps so results do not depend on the machine running the tests.

use quality_core::constants::{DEFAULT_AVERAGE_FPS, FPS_WINDOW_CAPACITY};
use quality_core::PerformanceMonitor;
use std::time::{Duration, Instant};

fn gap_for_fps(fps: f64) -> Duration {
    Duration::from_secs_f64(1.0 / fps)
}

#[test]
fn empty_monitor_reports_healthy_default() {
    let monitor = PerformanceMonitor::new_at(Instant::now());
    assert_eq!(monitor.sample_count(), 0);
    assert_eq!(monitor.frame_count(), 0);
    assert_eq!(monitor.average_fps(), DEFAULT_AVERAGE_FPS);
}

#[test]
fn steady_frames_average_to_their_rate() {
    let t0 = Instant::now();
    let mut monitor = PerformanceMonitor::new_at(t0);
    let mut t = t0;
    let mut avg = 0.0;
    for _ in 0..30 {
        t += Duration::from_millis(20);
        avg = monitor.update_at(t);
    }
    assert!((avg - 50.0).abs() < 1e-6, "expected ~50 fps, got {avg}");
    assert_eq!(monitor.frame_count(), 30);
    assert_eq!(monitor.sample_count(), 30);
}

#[test]
fn window_is_bounded_and_average_matches_held_samples() {
    let t0 = Instant::now();
    let mut monitor = PerformanceMonitor::new_at(t0);
    let mut t = t0;
    // Varying gaps: 10ms..=49ms repeating
    for i in 0..500u64 {
        t += Duration::from_millis(10 + (i * 7) % 40);
        let avg = monitor.update_at(t);
        assert!(monitor.sample_count() <= FPS_WINDOW_CAPACITY);

        let held: Vec<f64> = monitor.samples().collect();
        let mean = held.iter().sum::<f64>() / held.len() as f64;
        assert!(
            (avg - mean).abs() < 1e-9,
            "frame {i}: average {avg} != mean of held samples {mean}"
        );
    }
    assert_eq!(monitor.sample_count(), FPS_WINDOW_CAPACITY);
    assert_eq!(monitor.frame_count(), 500);
}

#[test]
fn oldest_samples_are_evicted_first() {
    let t0 = Instant::now();
    let mut monitor = PerformanceMonitor::new_at(t0);
    let mut t = t0;
    // A full window of slow frames...
    for _ in 0..FPS_WINDOW_CAPACITY {
        t += gap_for_fps(20.0);
        monitor.update_at(t);
    }
    // ...then a full window of fast ones pushes every slow sample out.
    for _ in 0..FPS_WINDOW_CAPACITY {
        t += gap_for_fps(100.0);
        monitor.update_at(t);
    }
    assert!((monitor.average_fps() - 100.0).abs() < 1e-6);
    assert!(monitor.samples().all(|s| s > 90.0));
}

#[test]
fn non_advancing_clock_counts_frame_without_sample() {
    let t0 = Instant::now();
    let mut monitor = PerformanceMonitor::new_at(t0);
    let avg = monitor.update_at(t0);
    assert_eq!(monitor.frame_count(), 1);
    assert_eq!(monitor.sample_count(), 0);
    assert_eq!(avg, DEFAULT_AVERAGE_FPS);

    let t1 = t0 + Duration::from_millis(25);
    monitor.update_at(t1);
    // Same timestamp twice in a row
    monitor.update_at(t1);
    assert_eq!(monitor.frame_count(), 3);
    assert_eq!(monitor.sample_count(), 1);
    assert!((monitor.average_fps() - 40.0).abs() < 1e-6);
}

#[test]
fn reset_clears_window_and_counter() {
    let t0 = Instant::now();
    let mut monitor = PerformanceMonitor::new_at(t0);
    let mut t = t0;
    for _ in 0..90 {
        t += gap_for_fps(24.0);
        monitor.update_at(t);
    }
    assert!(monitor.average_fps() < 30.0);

    monitor.reset_at(t);
    assert_eq!(monitor.sample_count(), 0);
    assert_eq!(monitor.frame_count(), 0);
    assert_eq!(monitor.average_fps(), DEFAULT_AVERAGE_FPS);

    // The first gap after a reset is measured from the reset time.
    monitor.update_at(t + Duration::from_millis(10));
    assert!((monitor.average_fps() - 100.0).abs() < 1e-6);
}

#[test]
fn custom_capacity_is_clamped_to_one() {
    let t0 = Instant::now();
    let mut monitor = PerformanceMonitor::with_capacity_at(0, t0);
    assert_eq!(monitor.capacity(), 1);
    monitor.update_at(t0 + Duration::from_millis(50));
    monitor.update_at(t0 + Duration::from_millis(60));
    assert_eq!(monitor.sample_count(), 1);
    assert!((monitor.average_fps() - 100.0).abs() < 1e-6);
}
