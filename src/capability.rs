use crate::config::{self, QualityParam, QUALITY_QUERY_KEY};
use quality_core::{DeviceSignals, QualityTier, RenderContext};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

// WEBGL_debug_renderer_info
const UNMASKED_RENDERER_WEBGL: u32 = 0x9246;

/// Gather the static signals the device heuristic looks at.
pub fn probe(window: &web::Window, document: &web::Document) -> DeviceSignals {
    let navigator = window.navigator();
    let user_agent = navigator.user_agent().unwrap_or_default();
    // Not in every browser's Navigator interface, so read it reflectively.
    let device_memory_gb = js_sys::Reflect::get(&navigator, &JsValue::from_str("deviceMemory"))
        .ok()
        .and_then(|v| v.as_f64());
    DeviceSignals {
        user_agent,
        render_context: probe_render_context(document),
        device_memory_gb,
    }
}

fn probe_render_context(document: &web::Document) -> RenderContext {
    let canvas = match document
        .create_element("canvas")
        .ok()
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
    {
        Some(c) => c,
        None => return RenderContext::Unavailable,
    };
    let gl = ["webgl", "experimental-webgl"]
        .iter()
        .find_map(|kind| canvas.get_context(kind).ok().flatten())
        .and_then(|ctx| ctx.dyn_into::<web::WebGlRenderingContext>().ok());
    let Some(gl) = gl else {
        return RenderContext::Unavailable;
    };
    let renderer = match gl.get_extension("WEBGL_debug_renderer_info") {
        Ok(Some(_)) => gl
            .get_parameter(UNMASKED_RENDERER_WEBGL)
            .ok()
            .and_then(|v| v.as_string()),
        _ => None,
    };
    RenderContext::Available { renderer }
}

fn quality_query_value(window: &web::Window) -> Option<String> {
    let search = window.location().search().ok()?;
    let params = web::UrlSearchParams::new_with_str(&search).ok()?;
    params.get(QUALITY_QUERY_KEY)
}

/// Starting tier: the URL override if valid, otherwise the device heuristic.
pub fn choose_initial_tier(window: &web::Window, document: &web::Document) -> QualityTier {
    let param = match config::parse_quality_param(quality_query_value(window).as_deref()) {
        Ok(p) => p,
        Err(e) => {
            log::warn!("ignoring ?{}=: {}", QUALITY_QUERY_KEY, e);
            QualityParam::Auto
        }
    };
    let tier = config::initial_tier(param, || {
        let signals = probe(window, document);
        let tier = quality_core::classify(&signals);
        log::info!(
            "[quality] device probe: mobile={} renderer={:?} memory={:?}GB -> {}",
            quality_core::is_mobile_user_agent(&signals.user_agent),
            match &signals.render_context {
                RenderContext::Unavailable => None,
                RenderContext::Available { renderer } => renderer.clone(),
            },
            signals.device_memory_gb,
            tier
        );
        tier
    });
    if let QualityParam::Start(t) = param {
        log::info!("[quality] starting tier {} from URL", t);
    }
    tier
}
