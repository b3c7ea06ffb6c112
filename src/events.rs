use crate::frame::LoopHandle;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `q` shows/hides the quality HUD.
pub fn wire_hud_toggle_q(document: &web::Document) {
    let doc = document.clone();
    crate::dom::add_window_listener("keydown", move |ev: web::Event| {
        if let Some(kev) = ev.dyn_ref::<web::KeyboardEvent>() {
            let key = kev.key();
            if key == "q" || key == "Q" {
                crate::overlay::toggle_hud(&doc);
                ev.prevent_default();
            }
        }
    });
}

/// Tear the rendering surface down when the page goes away so no frame
/// callback outlives it.
pub fn wire_teardown_on_pagehide(handle: Rc<RefCell<Option<LoopHandle>>>) {
    crate::dom::add_window_listener("pagehide", move |_ev: web::Event| {
        if let Some(h) = handle.borrow_mut().take() {
            h.cancel();
            log::info!("render loop cancelled (pagehide)");
        }
    });
}
