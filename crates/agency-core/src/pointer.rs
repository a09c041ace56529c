//! Pointer tracking and hover classification for the custom cursor.
//!
//! Nothing here touches the DOM. The web layer adapts `web_sys::Element` to
//! [`HoverTarget`] and forwards raw event data to [`PointerTracker`].

use crate::constants::{LINK_CURSOR_ROTATION_DEG, LINK_CURSOR_SCALE, TEXT_HOVER_MIN_CHARS};
use crate::reactive::Tracked;

/// Pointer location in client (viewport) pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f32,
    pub y: f32,
}

impl PointerPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HoverClass {
    #[default]
    None,
    Link,
    Text,
}

impl HoverClass {
    pub fn as_str(self) -> &'static str {
        match self {
            HoverClass::None => "none",
            HoverClass::Link => "link",
            HoverClass::Text => "text",
        }
    }
}

/// What the classifier needs to know about the element under the pointer.
pub trait HoverTarget {
    /// Element tag name, any case (`"A"`, `"button"`, ...).
    fn tag_name(&self) -> String;
    /// Computed CSS `cursor` value, if the host can resolve it.
    fn computed_cursor(&self) -> Option<String>;
    /// Rendered text of the element and its descendants.
    fn rendered_text(&self) -> String;
}

#[inline]
fn is_link_tag(tag: &str) -> bool {
    tag.eq_ignore_ascii_case("a") || tag.eq_ignore_ascii_case("button")
}

/// Link beats text: an anchor, a button or anything with `cursor: pointer` is
/// a link regardless of how much text it holds.
pub fn classify<T: HoverTarget + ?Sized>(target: &T) -> HoverClass {
    let pointer_cursor = target
        .computed_cursor()
        .map(|c| c.trim() == "pointer")
        .unwrap_or(false);
    if pointer_cursor || is_link_tag(&target.tag_name()) {
        return HoverClass::Link;
    }
    if target.rendered_text().chars().count() > TEXT_HOVER_MIN_CHARS {
        return HoverClass::Text;
    }
    HoverClass::None
}

/// Visual state of the crosshair overlay derived from the tracker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorPose {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub rotation_deg: f32,
    pub label_visible: bool,
}

impl CursorPose {
    pub fn new(position: PointerPosition, hover: HoverClass) -> Self {
        let link = hover == HoverClass::Link;
        Self {
            x: position.x,
            y: position.y,
            scale: if link { LINK_CURSOR_SCALE } else { 1.0 },
            rotation_deg: if link { LINK_CURSOR_ROTATION_DEG } else { 0.0 },
            label_visible: link,
        }
    }

    /// CSS `transform` value for an overlay positioned at the page origin.
    pub fn css_transform(&self) -> String {
        format!(
            "translate3d({:.1}px, {:.1}px, 0) translate(-50%, -50%) scale({}) rotate({}deg)",
            self.x, self.y, self.scale, self.rotation_deg
        )
    }
}

/// Owns the pointer position and hover class for the lifetime of a mount.
///
/// Event methods are no-ops while unmounted so late events delivered after
/// teardown cannot mutate state.
#[derive(Debug, Default)]
pub struct PointerTracker {
    position: Tracked<PointerPosition>,
    hover: Tracked<HoverClass>,
    mounted: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount(&mut self) {
        self.mounted = true;
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Returns whether the stored position changed.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) -> bool {
        if !self.mounted {
            return false;
        }
        self.position.set(PointerPosition::new(x, y))
    }

    /// Reclassify against the newly entered element. Returns the new class
    /// when it differs from the previous one.
    pub fn on_pointer_over<T: HoverTarget + ?Sized>(&mut self, target: &T) -> Option<HoverClass> {
        if !self.mounted {
            return None;
        }
        let class = classify(target);
        let prev = self.hover.get();
        if self.hover.set(class) {
            log::debug!("[cursor] hover {} -> {}", prev.as_str(), class.as_str());
            Some(class)
        } else {
            None
        }
    }

    #[inline]
    pub fn position(&self) -> PointerPosition {
        self.position.get()
    }

    #[inline]
    pub fn hover(&self) -> HoverClass {
        self.hover.get()
    }

    pub fn pose(&self) -> CursorPose {
        CursorPose::new(self.position(), self.hover())
    }
}
