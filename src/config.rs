// Start-up configuration read from the page URL.
//
// `?quality=low|medium|high` fixes the starting tier; `?quality=auto` (or no
// parameter) leaves it to the device heuristic. The controller adapts from
// whichever tier it starts on.

use quality_core::{QualityError, QualityTier};

pub const QUALITY_QUERY_KEY: &str = "quality";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QualityParam {
    Auto,
    Start(QualityTier),
}

pub fn parse_quality_param(value: Option<&str>) -> Result<QualityParam, QualityError> {
    match value.map(str::trim) {
        None | Some("") => Ok(QualityParam::Auto),
        Some(v) if v.eq_ignore_ascii_case("auto") => Ok(QualityParam::Auto),
        Some(v) => v.parse().map(QualityParam::Start),
    }
}

/// The tier the controller starts on. The heuristic only runs for `Auto`.
pub fn initial_tier(param: QualityParam, heuristic: impl FnOnce() -> QualityTier) -> QualityTier {
    match param {
        QualityParam::Start(tier) => tier,
        QualityParam::Auto => heuristic(),
    }
}
