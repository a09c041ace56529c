use crate::constants::{
    CURSOR_ID, CURSOR_LABEL_ID, CURSOR_LINK_CLASS, CURSOR_TEXT_CLASS, HERO_ORB_ID,
};
use crate::dom;
use agency_core::{CursorPose, HeroTransform, HoverClass};
use web_sys as web;

/// Crosshair overlay and its link label.
pub struct CursorOverlay {
    crosshair: web::HtmlElement,
    label: Option<web::HtmlElement>,
}

impl CursorOverlay {
    pub fn find(document: &web::Document) -> Option<Self> {
        let crosshair = dom::html_element_by_id(document, CURSOR_ID)?;
        let label = dom::html_element_by_id(document, CURSOR_LABEL_ID);
        Some(Self { crosshair, label })
    }

    pub fn apply(&self, pose: &CursorPose) {
        _ = self
            .crosshair
            .style()
            .set_property("transform", &pose.css_transform());
        if let Some(label) = &self.label {
            _ = label.style().set_property(
                "transform",
                &format!("translate3d({:.1}px, {:.1}px, 0)", pose.x, pose.y),
            );
            _ = label
                .style()
                .set_property("opacity", if pose.label_visible { "1" } else { "0" });
        }
    }

    pub fn set_hover_class(&self, hover: HoverClass) {
        let cl = self.crosshair.class_list();
        _ = cl.toggle_with_force(CURSOR_LINK_CLASS, hover == HoverClass::Link);
        _ = cl.toggle_with_force(CURSOR_TEXT_CLASS, hover == HoverClass::Text);
    }

    pub fn show(&self) {
        _ = self.crosshair.style().remove_property("display");
    }

    pub fn hide(&self) {
        _ = self.crosshair.style().set_property("display", "none");
        if let Some(label) = &self.label {
            _ = label.style().set_property("opacity", "0");
        }
    }
}

/// Scroll-driven hero decoration.
pub struct HeroOrb {
    el: web::HtmlElement,
}

impl HeroOrb {
    pub fn find(document: &web::Document) -> Option<Self> {
        dom::html_element_by_id(document, HERO_ORB_ID).map(|el| Self { el })
    }

    pub fn apply(&self, hero: HeroTransform) {
        let style = self.el.style();
        _ = style.set_property("transform", &format!("scale({:.4})", hero.scale));
        _ = style.set_property("opacity", &format!("{:.4}", hero.opacity));
    }
}
