//! One-shot starting tier from static device signals.
//!
//! Runs before any frame is measured and never again once the controller is
//! live. Missing signals skip their rule instead of failing.

use crate::constants::LOW_DEVICE_MEMORY_GB;
use crate::tier::QualityTier;

const MOBILE_AGENT_MARKERS: &[&str] = &[
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

// Integrated or software renderers that struggle with transmission materials.
const LOW_POWER_RENDERER_MARKERS: &[&str] = &[
    "intel",
    "swiftshader",
    "llvmpipe",
    "microsoft basic render",
];

/// What the host could find out about the rendering context.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RenderContext {
    #[default]
    Unavailable,
    /// A context exists; the renderer string is only known when the host
    /// exposes it (e.g. `WEBGL_debug_renderer_info`).
    Available { renderer: Option<String> },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeviceSignals {
    pub user_agent: String,
    pub render_context: RenderContext,
    pub device_memory_gb: Option<f64>,
}

pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    MOBILE_AGENT_MARKERS.iter().any(|m| ua.contains(m))
}

pub fn is_low_power_renderer(renderer: &str) -> bool {
    let r = renderer.to_ascii_lowercase();
    LOW_POWER_RENDERER_MARKERS.iter().any(|m| r.contains(m))
}

/// Pick a starting tier.
///
/// Mobile agents and hosts without a rendering context start Low; a
/// low-power renderer or under 4 GB of reported memory starts Medium;
/// everything else starts High.
pub fn classify(signals: &DeviceSignals) -> QualityTier {
    if is_mobile_user_agent(&signals.user_agent) {
        return QualityTier::Low;
    }
    let renderer = match &signals.render_context {
        RenderContext::Unavailable => return QualityTier::Low,
        RenderContext::Available { renderer } => renderer.as_deref(),
    };
    if renderer.is_some_and(is_low_power_renderer) {
        return QualityTier::Medium;
    }
    match signals.device_memory_gb {
        Some(gb) if gb > 0.0 && gb < LOW_DEVICE_MEMORY_GB => QualityTier::Medium,
        _ => QualityTier::High,
    }
}
