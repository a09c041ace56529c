#![cfg(target_arch = "wasm32")]
use agency_core::{MotionConfig, ParticleField, PointerTracker, ScrollMapper};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod hover;
mod overlay;
mod paint;
mod particles;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn build_particle_canvas(document: &web::Document) -> Option<particles::ParticleCanvas> {
    let canvas = document
        .get_element_by_id(constants::PARTICLE_CANVAS_ID)?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()?;
    wire_canvas_resize(&canvas);
    match particles::ParticleCanvas::new(canvas) {
        Ok(p) => Some(p),
        Err(e) => {
            log::warn!("[particles] disabled: {:?}", e);
            None
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("agency-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let reduced_motion = dom::prefers_reduced_motion(&window);
    if reduced_motion {
        log::info!("reduced motion requested; spring and particle spin disabled");
    }

    // ---------------- Custom cursor ----------------
    let overlay = overlay::CursorOverlay::find(&document).map(Rc::new);
    if overlay.is_none() {
        log::warn!(
            "[cursor] missing #{}; tracking without overlay",
            constants::CURSOR_ID
        );
    }
    let tracker = Rc::new(RefCell::new(PointerTracker::new()));
    let cursor = events::CursorSlot::mount(&window, tracker, overlay);
    events::wire_page_lifecycle(&window, Rc::new(RefCell::new(cursor)));

    // ---------------- Scroll-driven hero ----------------
    let scroll = Rc::new(RefCell::new(ScrollMapper::new(MotionConfig {
        reduced_motion,
        ..MotionConfig::default()
    })));
    events::wire_scroll_progress(&window, scroll.clone());
    let hero = overlay::HeroOrb::find(&document);
    match &hero {
        Some(h) => h.apply(scroll.borrow().hero()),
        None => log::warn!(
            "[scroll] missing #{}; hero motion skipped",
            constants::HERO_ORB_ID
        ),
    }

    events::wire_anchor_navigation(&document, reduced_motion);

    // ---------------- Particle field ----------------
    let mut field = ParticleField::default();
    field.set_spinning(!reduced_motion);
    let painter = build_particle_canvas(&document);
    if painter.is_none() {
        log::warn!("[particles] no canvas; field not drawn");
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        window,
        scroll,
        hero,
        field,
        painter,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
