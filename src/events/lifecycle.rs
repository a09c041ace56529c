use super::pointer::CursorBinding;
use crate::overlay::CursorOverlay;
use agency_core::{CursorAction, PageTransition, PointerTracker};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Holds the cursor binding, if any, plus what is needed to build it again
/// after a back/forward-cache restore.
pub struct CursorSlot {
    window: web::Window,
    tracker: Rc<RefCell<PointerTracker>>,
    overlay: Option<Rc<CursorOverlay>>,
    binding: Option<CursorBinding>,
}

impl CursorSlot {
    /// Mount right away. A failed mount leaves the slot empty and logs; the
    /// rest of the page keeps working without the custom cursor.
    pub fn mount(
        window: &web::Window,
        tracker: Rc<RefCell<PointerTracker>>,
        overlay: Option<Rc<CursorOverlay>>,
    ) -> Self {
        let mut slot = Self {
            window: window.clone(),
            tracker,
            overlay,
            binding: None,
        };
        slot.remount();
        slot
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.binding.is_some()
    }

    fn remount(&mut self) {
        match CursorBinding::mount(&self.window, self.tracker.clone(), self.overlay.clone()) {
            Ok(b) => self.binding = Some(b),
            Err(e) => log::warn!("[cursor] disabled: {:?}", e),
        }
    }

    pub fn apply(&mut self, transition: PageTransition) {
        match transition.cursor_action(self.is_mounted()) {
            CursorAction::Keep => {}
            CursorAction::Unmount => {
                if let Some(mut b) = self.binding.take() {
                    b.unmount();
                }
            }
            CursorAction::Remount => self.remount(),
        }
    }
}

/// Route `pagehide`/`pageshow` into the slot.
pub fn wire_page_lifecycle(window: &web::Window, slot: Rc<RefCell<CursorSlot>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::PageTransitionEvent| {
        if let Some(t) = PageTransition::from_event(&ev.type_(), ev.persisted()) {
            slot.borrow_mut().apply(t);
        }
    }) as Box<dyn FnMut(_)>);
    for event in ["pagehide", "pageshow"] {
        if let Err(e) =
            window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            log::warn!("[cursor] could not listen for {}: {:?}", event, e);
        }
    }
    closure.forget();
}
