use std::ops::Range;

/// A half-open index range `[left, right)` over a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Window {
    left: usize,
    right: usize,
}

impl Window {
    /// Creates a window covering `left..right`.
    ///
    /// # Panics
    ///
    /// Panics if `left > right`.
    pub fn new(left: usize, right: usize) -> Self {
        assert!(left <= right, "Window left bound must not exceed right bound");
        Self { left, right }
    }

    pub fn left(&self) -> usize {
        self.left
    }

    pub fn right(&self) -> usize {
        self.right
    }

    pub fn len(&self) -> usize {
        self.right - self.left
    }

    pub fn is_empty(&self) -> bool {
        self.left == self.right
    }

    pub fn range(&self) -> Range<usize> {
        self.left..self.right
    }

    /// Returns the covered part of `seq`, or `None` if the window runs past it.
    pub fn slice<'a, T>(&self, seq: &'a [T]) -> Option<&'a [T]> {
        seq.get(self.range())
    }
}

impl From<Window> for Range<usize> {
    fn from(window: Window) -> Self {
        window.range()
    }
}
