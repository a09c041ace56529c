use agency_core::Section;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Smooth-scroll in-page anchor clicks to their section and record the hash
/// without the browser's jump.
pub fn wire_anchor_navigation(document: &web::Document, reduced_motion: bool) {
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        if ev.default_prevented() || ev.button() != 0 || ev.meta_key() || ev.ctrl_key() {
            return;
        }
        let Some(anchor) = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.closest("a[href]").ok().flatten())
        else {
            return;
        };
        let Some(section) = anchor
            .get_attribute("href")
            .and_then(|href| Section::from_href(&href))
        else {
            return;
        };
        let Some(target) = doc.get_element_by_id(section.id()) else {
            log::warn!("[nav] missing section #{}", section.id());
            return;
        };
        ev.prevent_default();
        scroll_to(&target, reduced_motion);
        if let Some(history) = web::window().and_then(|w| w.history().ok()) {
            _ = history.push_state_with_url(&JsValue::NULL, "", Some(&section.fragment()));
        }
        log::info!("[nav] -> {}", section.fragment());
    }) as Box<dyn FnMut(_)>);

    if let Err(e) =
        document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
    {
        log::warn!("[nav] could not listen for clicks: {:?}", e);
    }
    closure.forget();
}

fn scroll_to(target: &web::Element, reduced_motion: bool) {
    let opts = web::ScrollIntoViewOptions::new();
    opts.set_behavior(if reduced_motion {
        web::ScrollBehavior::Auto
    } else {
        web::ScrollBehavior::Smooth
    });
    target.scroll_into_view_with_scroll_into_view_options(&opts);
}
