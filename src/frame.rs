use crate::overlay::HeroOrb;
use crate::particles::ParticleCanvas;
use agency_core::{clamp_frame_dt, ParticleField, ScrollMapper};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub window: web::Window,
    pub scroll: Rc<RefCell<ScrollMapper>>,
    pub hero: Option<HeroOrb>,
    pub field: ParticleField,
    pub painter: Option<ParticleCanvas>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = clamp_frame_dt((now - self.last_instant).as_secs_f32());
        self.last_instant = now;

        // Spring smoothing; the hero is only touched when its transform moved.
        let changed = self.scroll.borrow_mut().tick(dt_sec);
        if let (Some(hero), Some(t)) = (&self.hero, changed) {
            hero.apply(t);
        }

        self.field.advance(dt_sec);
        if let Some(painter) = &mut self.painter {
            painter.draw(&self.field, self.window.device_pixel_ratio());
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
    }
}
