#![cfg(target_arch = "wasm32")]
use instant::Instant;
use quality_core::AdaptiveQuality;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod capability;
mod config;
mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;
mod scene;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    dom::add_window_listener("resize", move |_ev: web::Event| {
        dom::sync_canvas_backing_size(&canvas_resize);
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("quality-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let initial = capability::choose_initial_tier(&window, &document);
    let controller = AdaptiveQuality::new_at(initial, Instant::now());

    let mut frame_ctx = frame::FrameContext::new(controller, canvas.clone(), document.clone());
    // Without a GPU the controller still runs so the HUD stays truthful.
    frame_ctx.gpu = frame::init_gpu(&canvas, frame_ctx.budget()).await;
    let frame_ctx = Rc::new(RefCell::new(frame_ctx));

    events::wire_hud_toggle_q(&document);
    let handle = Rc::new(RefCell::new(Some(frame::start_loop(frame_ctx))));
    events::wire_teardown_on_pagehide(handle);

    log::info!("[quality] render loop started at {}", initial);
    Ok(())
}
