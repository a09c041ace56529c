use agency_core::HoverTarget;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Live view of a DOM element for hover classification. Every read goes to
/// the DOM at call time so styles applied after load are honoured.
pub struct DomHoverTarget<'a> {
    window: &'a web::Window,
    element: web::Element,
}

impl<'a> DomHoverTarget<'a> {
    /// `None` when the event target is not an element (text nodes, window).
    pub fn from_event(window: &'a web::Window, ev: &web::Event) -> Option<Self> {
        let element = ev.target()?.dyn_into::<web::Element>().ok()?;
        Some(Self { window, element })
    }
}

impl HoverTarget for DomHoverTarget<'_> {
    fn tag_name(&self) -> String {
        self.element.tag_name()
    }

    fn computed_cursor(&self) -> Option<String> {
        let style = self.window.get_computed_style(&self.element).ok()??;
        style.get_property_value("cursor").ok()
    }

    fn rendered_text(&self) -> String {
        match self.element.dyn_ref::<web::HtmlElement>() {
            Some(html) => html.inner_text(),
            None => self.element.text_content().unwrap_or_default(),
        }
    }
}
