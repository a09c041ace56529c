use crate::hover::DomHoverTarget;
use crate::overlay::CursorOverlay;
use agency_core::PointerTracker;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type PointerClosure = Closure<dyn FnMut(web::PointerEvent)>;
type EventClosure = Closure<dyn FnMut(web::Event)>;

/// Window-level `pointermove` + `pointerover` listeners feeding a
/// [`PointerTracker`] and the crosshair overlay.
///
/// The closures are owned here rather than forgotten so that
/// [`CursorBinding::unmount`] can detach them again.
pub struct CursorBinding {
    window: web::Window,
    tracker: Rc<RefCell<PointerTracker>>,
    overlay: Option<Rc<CursorOverlay>>,
    on_move: PointerClosure,
    on_over: EventClosure,
    attached: bool,
}

impl CursorBinding {
    pub fn mount(
        window: &web::Window,
        tracker: Rc<RefCell<PointerTracker>>,
        overlay: Option<Rc<CursorOverlay>>,
    ) -> anyhow::Result<Self> {
        tracker.borrow_mut().mount();

        let on_move = {
            let tracker = tracker.clone();
            let overlay = overlay.clone();
            Closure::wrap(Box::new(move |ev: web::PointerEvent| {
                let mut t = tracker.borrow_mut();
                if t.on_pointer_move(ev.client_x() as f32, ev.client_y() as f32) {
                    if let Some(o) = &overlay {
                        o.apply(&t.pose());
                    }
                }
            }) as Box<dyn FnMut(_)>)
        };

        let on_over = {
            let tracker = tracker.clone();
            let overlay = overlay.clone();
            let window = window.clone();
            Closure::wrap(Box::new(move |ev: web::Event| {
                let Some(target) = DomHoverTarget::from_event(&window, &ev) else {
                    return;
                };
                let mut t = tracker.borrow_mut();
                if let Some(class) = t.on_pointer_over(&target) {
                    if let Some(o) = &overlay {
                        o.set_hover_class(class);
                        o.apply(&t.pose());
                    }
                }
            }) as Box<dyn FnMut(_)>)
        };

        let mut binding = Self {
            window: window.clone(),
            tracker,
            overlay,
            on_move,
            on_over,
            attached: false,
        };
        if let Err(e) = binding.attach() {
            binding.tracker.borrow_mut().unmount();
            return Err(e);
        }
        binding.attached = true;
        if let Some(o) = &binding.overlay {
            o.show();
        }
        log::info!("[cursor] mounted");
        Ok(binding)
    }

    fn attach(&self) -> anyhow::Result<()> {
        self.window
            .add_event_listener_with_callback("pointermove", self.on_move.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("pointermove listener: {:?}", e))?;
        if let Err(e) = self
            .window
            .add_event_listener_with_callback("pointerover", self.on_over.as_ref().unchecked_ref())
        {
            _ = self.window.remove_event_listener_with_callback(
                "pointermove",
                self.on_move.as_ref().unchecked_ref(),
            );
            return Err(anyhow::anyhow!("pointerover listener: {:?}", e));
        }
        Ok(())
    }

    /// Detach both listeners and stop the tracker. Safe to call twice.
    pub fn unmount(&mut self) {
        if !self.attached {
            return;
        }
        _ = self.window.remove_event_listener_with_callback(
            "pointermove",
            self.on_move.as_ref().unchecked_ref(),
        );
        _ = self.window.remove_event_listener_with_callback(
            "pointerover",
            self.on_over.as_ref().unchecked_ref(),
        );
        self.attached = false;
        self.tracker.borrow_mut().unmount();
        if let Some(o) = &self.overlay {
            o.hide();
        }
        log::info!("[cursor] unmounted");
    }
}

impl Drop for CursorBinding {
    fn drop(&mut self) {
        self.unmount();
    }
}
