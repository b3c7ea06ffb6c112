use crate::constants::{HUD_REFRESH_FRAMES, PARTICLE_BASE_COUNT, PARTICLE_FIELD_SEED};
use crate::render;
use crate::scene::{self, ParticleField, ParticleInstance, SceneBudget};
use crate::{dom, overlay};
use instant::Instant;
use quality_core::{AdaptiveQuality, FrameThrottle, QualityHandle, QualityTier};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Clamp for the animation clock after a backgrounded tab resumes.
const MAX_FRAME_DT_SEC: f32 = 0.1;

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct FrameContext<'a> {
    pub controller: AdaptiveQuality,
    /// What the hero sphere renders at; pinned to High on compact layouts.
    pub hero: QualityHandle,
    pub gpu: Option<render::GpuState<'a>>,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,

    field: ParticleField,
    instances: Vec<ParticleInstance>,
    particle_throttle: FrameThrottle,
    hero_throttle: FrameThrottle,
    hud_throttle: FrameThrottle,

    particle_time: f32,
    hero_time: f32,
    hero_pending: f32,
    last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        controller: AdaptiveQuality,
        canvas: web::HtmlCanvasElement,
        document: web::Document,
    ) -> Self {
        let hero = hero_handle(&controller, &canvas);
        Self {
            controller,
            hero,
            gpu: None,
            canvas,
            document,
            field: ParticleField::new(PARTICLE_BASE_COUNT, PARTICLE_FIELD_SEED),
            instances: Vec::with_capacity(PARTICLE_BASE_COUNT as usize),
            particle_throttle: FrameThrottle::new(1),
            hero_throttle: FrameThrottle::new(1),
            hud_throttle: FrameThrottle::new(HUD_REFRESH_FRAMES),
            particle_time: 0.0,
            hero_time: 0.0,
            hero_pending: 0.0,
            last_instant: Instant::now(),
        }
    }

    /// Work sizes for the current frame.
    pub fn budget(&self) -> SceneBudget {
        SceneBudget::compose(self.hero.settings(), self.controller.settings())
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_instant = now;

        let changed = self.controller.tick().is_some();
        let budget = self.budget();

        self.particle_time += dt;
        self.hero_pending += dt;
        if self.hero_throttle.ready_every(budget.hero_throttle) {
            self.hero_time += self.hero_pending;
            self.hero_pending = 0.0;
        }

        let hud_due = self.hud_throttle.ready_every(HUD_REFRESH_FRAMES);
        if changed || hud_due {
            self.refresh_layout();
            self.refresh_hud();
        }

        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        // No-op unless the budget moved since the last rebuild.
        gpu.apply_budget(budget);

        let count_changed = self.instances.len() != budget.particle_count as usize;
        if self.particle_throttle.ready_every(budget.particle_throttle) || count_changed {
            self.field
                .write_instances(budget.particle_count, self.particle_time, &mut self.instances);
            gpu.upload_particles(&self.instances);
        }

        gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
        match gpu.render(self.hero_time, scene::sphere_model(self.hero_time)) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu.reconfigure(),
            Err(e) => log::warn!("[gpu] frame skipped: {:?}", e),
        }
    }

    fn refresh_layout(&mut self) {
        let compact = scene::is_compact_viewport(dom::css_width(&self.canvas));
        if compact != self.hero.is_pinned() {
            self.hero = if compact {
                self.hero.pinned(QualityTier::High)
            } else {
                self.hero.unpinned()
            };
            log::info!(
                "[quality] hero {} (compact layout: {})",
                if compact { "pinned to HIGH" } else { "follows adaptive tier" },
                compact
            );
        }
    }

    fn refresh_hud(&self) {
        if overlay::is_hidden(&self.document) {
            return;
        }
        overlay::update_hud(
            &self.document,
            self.controller.tier(),
            self.controller.average_fps(),
            self.hero.is_pinned(),
        );
    }
}

fn hero_handle(controller: &AdaptiveQuality, canvas: &web::HtmlCanvasElement) -> QualityHandle {
    let handle = controller.handle();
    if scene::is_compact_viewport(dom::css_width(canvas)) {
        handle.pinned(QualityTier::High)
    } else {
        handle
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    budget: SceneBudget,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, budget, PARTICLE_BASE_COUNT).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Owner of a running requestAnimationFrame loop.
///
/// Cancelling (or dropping) stops the loop before its next frame.
pub struct LoopHandle {
    raf_id: Rc<Cell<Option<i32>>>,
    cancelled: Rc<Cell<bool>>,
}

impl LoopHandle {
    pub fn cancel(&self) {
        self.cancelled.set(true);
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }
}

impl Drop for LoopHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) -> LoopHandle {
    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let cancelled = Rc::new(Cell::new(false));
    let tick: TickClosure = Rc::new(RefCell::new(None));

    let tick_clone = tick.clone();
    let raf_tick = raf_id.clone();
    let cancelled_tick = cancelled.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        raf_tick.set(None);
        if cancelled_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        raf_tick.set(request_frame(&tick_clone));
    }) as Box<dyn FnMut()>));

    raf_id.set(request_frame(&tick));
    LoopHandle { raf_id, cancelled }
}

fn request_frame(tick: &TickClosure) -> Option<i32> {
    let window = web::window()?;
    let tick = tick.borrow();
    let callback = tick.as_ref()?;
    window
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .ok()
}
