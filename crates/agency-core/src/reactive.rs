//! Single-writer value cell that reports whether a write changed anything.
//!
//! The owner writes through [`Tracked::set`] and only pushes to the DOM when
//! it returns `true`; readers just [`Tracked::get`].

#[derive(Clone, Debug, Default)]
pub struct Tracked<T> {
    value: T,
}

impl<T: Copy + PartialEq> Tracked<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    #[inline]
    pub fn get(&self) -> T {
        self.value
    }

    /// Store `value`. Returns whether it differed from the previous one.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        true
    }
}
