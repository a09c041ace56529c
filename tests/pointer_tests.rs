// Host-side tests for pointer tracking and hover classification.

use agency_core::{classify, CursorPose, HoverClass, HoverTarget, PointerPosition, PointerTracker};

struct FakeElement {
    tag: &'static str,
    cursor: Option<&'static str>,
    text: &'static str,
}

impl FakeElement {
    fn new(tag: &'static str, text: &'static str) -> Self {
        Self {
            tag,
            cursor: Some("auto"),
            text,
        }
    }

    fn with_cursor(mut self, cursor: &'static str) -> Self {
        self.cursor = Some(cursor);
        self
    }
}

impl HoverTarget for FakeElement {
    fn tag_name(&self) -> String {
        self.tag.to_string()
    }
    fn computed_cursor(&self) -> Option<String> {
        self.cursor.map(str::to_string)
    }
    fn rendered_text(&self) -> String {
        self.text.to_string()
    }
}

fn mounted_tracker() -> PointerTracker {
    let mut t = PointerTracker::new();
    t.mount();
    t
}

#[test]
fn pointer_move_stores_exact_coordinates() {
    let mut t = mounted_tracker();
    for &(x, y) in &[(0.0, 0.0), (12.5, 300.0), (-4.0, 1080.0), (1919.0, 1.0)] {
        t.on_pointer_move(x, y);
        assert_eq!(t.position(), PointerPosition::new(x, y));
    }
}

#[test]
fn pointer_move_reports_change_only_when_moved() {
    let mut t = mounted_tracker();
    assert!(t.on_pointer_move(10.0, 20.0));
    assert!(!t.on_pointer_move(10.0, 20.0));
    assert!(t.on_pointer_move(10.0, 21.0));
}

#[test]
fn anchor_and_button_are_links_in_any_case() {
    assert_eq!(classify(&FakeElement::new("A", "")), HoverClass::Link);
    assert_eq!(classify(&FakeElement::new("a", "")), HoverClass::Link);
    assert_eq!(classify(&FakeElement::new("BUTTON", "Go")), HoverClass::Link);
    assert_eq!(classify(&FakeElement::new("button", "Go")), HoverClass::Link);
}

#[test]
fn pointer_cursor_is_a_link() {
    let div = FakeElement::new("DIV", "").with_cursor("pointer");
    assert_eq!(classify(&div), HoverClass::Link);
}

#[test]
fn link_takes_precedence_over_long_text() {
    let a = FakeElement::new("A", "Read the full case study here");
    assert_eq!(classify(&a), HoverClass::Link);
    let card =
        FakeElement::new("DIV", "A clickable card with lots of copy").with_cursor("pointer");
    assert_eq!(classify(&card), HoverClass::Link);
}

#[test]
fn text_requires_more_than_ten_characters() {
    assert_eq!(classify(&FakeElement::new("P", "0123456789")), HoverClass::None);
    assert_eq!(classify(&FakeElement::new("P", "0123456789A")), HoverClass::Text);
    assert_eq!(classify(&FakeElement::new("SPAN", "")), HoverClass::None);
}

#[test]
fn text_length_counts_characters_not_bytes() {
    // 10 characters, 20+ bytes
    assert_eq!(classify(&FakeElement::new("P", "éééééééééé")), HoverClass::None);
    assert_eq!(classify(&FakeElement::new("P", "ééééééééééé")), HoverClass::Text);
}

#[test]
fn missing_computed_style_falls_back_to_tag_and_text() {
    let p = FakeElement {
        tag: "P",
        cursor: None,
        text: "Brand voice that sticks",
    };
    assert_eq!(classify(&p), HoverClass::Text);
}

#[test]
fn paragraph_then_button_inside_it() {
    let mut t = mounted_tracker();
    assert_eq!(t.hover(), HoverClass::None);

    let paragraph = FakeElement::new("P", "Hello world!");
    assert_eq!(t.on_pointer_over(&paragraph), Some(HoverClass::Text));
    assert_eq!(t.hover(), HoverClass::Text);

    let button = FakeElement::new("BUTTON", "Book a call with our studio");
    assert_eq!(t.on_pointer_over(&button), Some(HoverClass::Link));
    assert_eq!(t.hover(), HoverClass::Link);
}

#[test]
fn same_class_is_not_reported_twice() {
    let mut t = mounted_tracker();
    let p1 = FakeElement::new("P", "First long paragraph");
    let p2 = FakeElement::new("P", "Second long paragraph");
    assert_eq!(t.on_pointer_over(&p1), Some(HoverClass::Text));
    assert_eq!(t.on_pointer_over(&p2), None);
    assert_eq!(t.hover(), HoverClass::Text);
}

#[test]
fn unmounted_tracker_ignores_events() {
    let mut t = mounted_tracker();
    t.on_pointer_move(1.0, 2.0);
    t.on_pointer_over(&FakeElement::new("A", ""));

    t.unmount();
    assert!(!t.is_mounted());
    assert!(!t.on_pointer_move(5.0, 6.0));
    assert_eq!(t.on_pointer_over(&FakeElement::new("P", "long enough text")), None);

    assert_eq!(t.position(), PointerPosition::new(1.0, 2.0));
    assert_eq!(t.hover(), HoverClass::Link);
}

#[test]
fn tracker_starts_unmounted() {
    let mut t = PointerTracker::new();
    assert!(!t.on_pointer_move(3.0, 4.0));
    assert_eq!(t.position(), PointerPosition::default());
}

#[test]
fn cursor_pose_for_link_is_scaled_and_rotated() {
    let pose = CursorPose::new(PointerPosition::new(100.0, 50.0), HoverClass::Link);
    assert_eq!(pose.scale, 1.5);
    assert_eq!(pose.rotation_deg, 45.0);
    assert!(pose.label_visible);
    let css = pose.css_transform();
    assert!(css.starts_with("translate3d(100.0px, 50.0px, 0)"), "{}", css);
    assert!(css.ends_with("scale(1.5) rotate(45deg)"), "{}", css);
}

#[test]
fn cursor_pose_is_neutral_otherwise() {
    for hover in [HoverClass::None, HoverClass::Text] {
        let pose = CursorPose::new(PointerPosition::new(0.0, 0.0), hover);
        assert_eq!(pose.scale, 1.0);
        assert_eq!(pose.rotation_deg, 0.0);
        assert!(!pose.label_visible);
        assert!(pose.css_transform().ends_with("scale(1) rotate(0deg)"));
    }
}
