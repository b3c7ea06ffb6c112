use quality_core::{
    classify, is_mobile_user_agent, DeviceSignals, QualityError, QualityTier, RenderContext,
};

#[test]
fn tiers_are_ordered_cheapest_first() {
    assert!(QualityTier::Low < QualityTier::Medium);
    assert!(QualityTier::Medium < QualityTier::High);
    assert_eq!(
        QualityTier::ALL.iter().max(),
        Some(&QualityTier::High)
    );
}

#[test]
fn settings_table_is_monotonic_in_tier() {
    for pair in QualityTier::ALL.windows(2) {
        let (lo, hi) = (pair[0].settings(), pair[1].settings());
        assert!(lo.transmission_samples < hi.transmission_samples);
        assert!(lo.transmission_resolution < hi.transmission_resolution);
        assert!(lo.geometry_detail < hi.geometry_detail);
        assert!(lo.particle_count < hi.particle_count);
        assert!(lo.update_throttle >= hi.update_throttle);
    }
    for tier in QualityTier::ALL {
        let s = tier.settings();
        assert!(s.geometry_detail > 0.0 && s.geometry_detail <= 1.0);
        assert!(s.particle_count > 0.0 && s.particle_count <= 1.0);
        assert!(s.update_throttle >= 1);
    }
    assert!(!QualityTier::Low.settings().shadows_enabled);
    assert!(QualityTier::Medium.settings().shadows_enabled);
}

#[test]
fn settings_lookup_returns_the_same_record_every_time() {
    for tier in QualityTier::ALL {
        assert!(std::ptr::eq(tier.settings(), tier.settings()));
    }
}

#[test]
fn particle_scaling_rounds_and_never_hits_zero() {
    let low = QualityTier::Low.settings();
    assert_eq!(low.scale_particles(1000), 300);
    assert_eq!(low.scale_particles(5), 2); // 1.5 rounds up
    assert_eq!(low.scale_particles(1), 1); // 0.3 would round to zero
    assert_eq!(low.scale_particles(0), 1);
    assert_eq!(QualityTier::High.settings().scale_particles(1234), 1234);
}

#[test]
fn segment_and_sample_scaling_respect_floor() {
    let medium = QualityTier::Medium.settings();
    assert_eq!(medium.scale_segments(64, 8), 48);
    assert_eq!(QualityTier::Low.settings().scale_segments(64, 8), 32);
    assert_eq!(QualityTier::Low.settings().scale_segments(10, 8), 8);
    assert_eq!(QualityTier::Low.settings().scale_samples(3, 2), 2);
    assert_eq!(QualityTier::High.settings().scale_samples(3, 2), 3);
}

#[test]
fn relaxed_throttle_skips_one_frame_less() {
    assert_eq!(QualityTier::Low.settings().relaxed_throttle(), 1);
    assert_eq!(QualityTier::High.settings().relaxed_throttle(), 1);
}

#[test]
fn tier_names_parse_and_display() {
    for tier in QualityTier::ALL {
        let parsed: QualityTier = tier.to_string().parse().unwrap();
        assert_eq!(parsed, tier);
    }
    assert_eq!(" HIGH ".parse::<QualityTier>(), Ok(QualityTier::High));
    assert_eq!(
        "ultra".parse::<QualityTier>(),
        Err(QualityError::UnknownTier("ultra".to_string()))
    );
}

fn desktop(renderer: Option<&str>, memory: Option<f64>) -> DeviceSignals {
    DeviceSignals {
        user_agent: "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 Chrome/126.0".into(),
        render_context: RenderContext::Available {
            renderer: renderer.map(str::to_string),
        },
        device_memory_gb: memory,
    }
}

#[test]
fn mobile_agents_always_start_low() {
    let agents = [
        "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)",
        "Mozilla/5.0 (Linux; Android 14; Pixel 8)",
        "Mozilla/5.0 (iPad; CPU OS 16_0 like Mac OS X)",
        "Opera/9.80 (J2ME/MIDP; Opera Mini/9.80)",
    ];
    for ua in agents {
        assert!(is_mobile_user_agent(ua), "{ua}");
        let signals = DeviceSignals {
            user_agent: ua.into(),
            ..desktop(Some("NVIDIA GeForce RTX 4090"), Some(16.0))
        };
        assert_eq!(classify(&signals), QualityTier::Low, "{ua}");
    }
}

#[test]
fn missing_render_context_starts_low() {
    let signals = DeviceSignals {
        render_context: RenderContext::Unavailable,
        ..desktop(None, Some(16.0))
    };
    assert_eq!(classify(&signals), QualityTier::Low);
    assert_eq!(classify(&DeviceSignals::default()), QualityTier::Low);
}

#[test]
fn integrated_gpu_or_small_memory_starts_medium() {
    assert_eq!(
        classify(&desktop(Some("ANGLE (Intel, Intel(R) UHD Graphics 620)"), Some(8.0))),
        QualityTier::Medium
    );
    assert_eq!(
        classify(&desktop(Some("Google SwiftShader"), None)),
        QualityTier::Medium
    );
    assert_eq!(classify(&desktop(None, Some(2.0))), QualityTier::Medium);
}

#[test]
fn capable_desktop_starts_high() {
    assert_eq!(
        classify(&desktop(Some("ANGLE (NVIDIA GeForce RTX 3080)"), Some(8.0))),
        QualityTier::High
    );
    // Unknown renderer and memory skip their rules.
    assert_eq!(classify(&desktop(None, None)), QualityTier::High);
    // A zero memory report is treated as unknown.
    assert_eq!(classify(&desktop(None, Some(0.0))), QualityTier::High);
}
