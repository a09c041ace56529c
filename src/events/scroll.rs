use crate::dom;
use agency_core::ScrollMapper;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Feed raw scroll progress into the mapper on every `scroll` and `resize`.
/// The frame loop owns the smoothing; this only writes the target.
pub fn wire_scroll_progress(window: &web::Window, mapper: Rc<RefCell<ScrollMapper>>) {
    mapper
        .borrow_mut()
        .set_raw_progress(dom::read_scroll_progress(window));

    let wnd = window.clone();
    let closure = Closure::wrap(Box::new(move || {
        let progress = dom::read_scroll_progress(&wnd);
        mapper.borrow_mut().set_raw_progress(progress);
    }) as Box<dyn FnMut()>);

    for event in ["scroll", "resize"] {
        if let Err(e) =
            window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            log::warn!("[scroll] could not listen for {}: {:?}", event, e);
        }
    }
    closure.forget();
}
