//! Page show/hide transitions and what they mean for the cursor listeners.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageTransition {
    /// `pagehide`; `persisted` when the page goes into the back/forward cache.
    Hide { persisted: bool },
    /// `pageshow`; `persisted` when the page comes back from that cache.
    Show { persisted: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorAction {
    Keep,
    Unmount,
    Remount,
}

impl PageTransition {
    pub fn from_event(event_type: &str, persisted: bool) -> Option<Self> {
        match event_type {
            "pagehide" => Some(PageTransition::Hide { persisted }),
            "pageshow" => Some(PageTransition::Show { persisted }),
            _ => None,
        }
    }

    /// A cached page keeps its listeners: it is frozen, not gone, and resumes
    /// with the same heap. Only a final hide unmounts, and a restore brings the
    /// cursor back if something unmounted it anyway.
    pub fn cursor_action(self, mounted: bool) -> CursorAction {
        match self {
            PageTransition::Hide { persisted: false } if mounted => CursorAction::Unmount,
            PageTransition::Show { persisted: true } if !mounted => CursorAction::Remount,
            _ => CursorAction::Keep,
        }
    }
}
