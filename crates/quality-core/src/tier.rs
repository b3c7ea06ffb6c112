//! Quality tiers and the fixed settings table behind them.
//!
//! Each tier maps to exactly one `static` [`QualitySettings`] record. The
//! table never changes at runtime; the controller only moves the active tier.

use crate::error::QualityError;
use std::fmt;
use std::str::FromStr;

/// Ordered quality presets, cheapest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QualityTier {
    Low,
    Medium,
    High,
}

/// Rendering parameters implied by a tier.
///
/// `geometry_detail` and `particle_count` are multipliers in (0, 1] applied
/// to a call site's own base counts; `update_throttle` is the number of
/// rendered frames between expensive recomputations of non-critical effects.
#[derive(Clone, Debug, PartialEq)]
pub struct QualitySettings {
    pub transmission_samples: u32,
    pub transmission_resolution: u32,
    pub geometry_detail: f32,
    pub shadows_enabled: bool,
    pub particle_count: f32,
    pub update_throttle: u32,
}

pub static LOW_SETTINGS: QualitySettings = QualitySettings {
    transmission_samples: 2,
    transmission_resolution: 256,
    geometry_detail: 0.5,
    shadows_enabled: false,
    particle_count: 0.3,
    update_throttle: 2,
};

pub static MEDIUM_SETTINGS: QualitySettings = QualitySettings {
    transmission_samples: 4,
    transmission_resolution: 512,
    geometry_detail: 0.75,
    shadows_enabled: true,
    particle_count: 0.6,
    update_throttle: 1,
};

pub static HIGH_SETTINGS: QualitySettings = QualitySettings {
    transmission_samples: 8,
    transmission_resolution: 1024,
    geometry_detail: 1.0,
    shadows_enabled: true,
    particle_count: 1.0,
    update_throttle: 1,
};

impl QualityTier {
    pub const ALL: [QualityTier; 3] = [QualityTier::Low, QualityTier::Medium, QualityTier::High];

    #[inline]
    pub fn settings(self) -> &'static QualitySettings {
        match self {
            QualityTier::Low => &LOW_SETTINGS,
            QualityTier::Medium => &MEDIUM_SETTINGS,
            QualityTier::High => &HIGH_SETTINGS,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QualityTier::Low => "low",
            QualityTier::Medium => "medium",
            QualityTier::High => "high",
        }
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for QualityTier {
    type Err = QualityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(QualityTier::Low),
            "medium" | "med" => Ok(QualityTier::Medium),
            "high" => Ok(QualityTier::High),
            _ => Err(QualityError::UnknownTier(s.to_string())),
        }
    }
}

impl QualitySettings {
    /// Scale a base particle count, never dropping to zero.
    #[inline]
    pub fn scale_particles(&self, base: u32) -> u32 {
        scale_round(base, self.particle_count).max(1)
    }

    /// Scale a base segment/subdivision count, floored at `min`.
    #[inline]
    pub fn scale_segments(&self, base: u32, min: u32) -> u32 {
        scale_round(base, self.geometry_detail).max(min)
    }

    /// Scale a material sample count by geometry detail, floored at `min`.
    #[inline]
    pub fn scale_samples(&self, base: u32, min: u32) -> u32 {
        scale_round(base, self.geometry_detail).max(min)
    }

    /// Throttle for hero content: one frame less skipping than secondary effects.
    #[inline]
    pub fn relaxed_throttle(&self) -> u32 {
        self.update_throttle.saturating_sub(1).max(1)
    }
}

#[inline]
fn scale_round(base: u32, factor: f32) -> u32 {
    (base as f32 * factor).round().max(0.0) as u32
}
