pub mod lifecycle;
pub mod nav;
pub mod pointer;
pub mod scroll;

pub use lifecycle::{wire_page_lifecycle, CursorSlot};
pub use nav::wire_anchor_navigation;
pub use scroll::wire_scroll_progress;
