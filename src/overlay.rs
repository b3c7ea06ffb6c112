use quality_core::QualityTier;
use web_sys as web;

const HUD_ID: &str = "quality-hud";

/// Update the diagnostics HUD with the active tier and measured fps.
pub fn update_hud(document: &web::Document, tier: QualityTier, avg_fps: f64, pinned: bool) {
    if let Some(el) = document.get_element_by_id(HUD_ID) {
        let pin = if pinned { " • hero pinned" } else { "" };
        el.set_text_content(Some(&format!(
            "Quality: {} • {:.0} fps{}",
            tier.as_str().to_uppercase(),
            avg_fps,
            pin
        )));
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    document
        .get_element_by_id(HUD_ID)
        .map(|el| el.class_list().contains("hidden"))
        .unwrap_or(true)
}

#[inline]
pub fn toggle_hud(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(HUD_ID) {
        _ = el.class_list().toggle("hidden");
    }
}
