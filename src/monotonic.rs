//! Monotonic index deque for O(1) window extrema.
//!
//! The deque holds indices into a caller-owned slice. Indices are strictly
//! increasing front to back, and the values they reference never increase
//! (for [`Extremum::Max`]) or never decrease (for [`Extremum::Min`]); equal
//! values are retained in arrival order. The front is therefore always the
//! extremum of the current window. Each index is pushed and popped at most once, so a full
//! pass over `n` elements costs O(n) and the deque never holds more than
//! `width` indices.

use std::collections::VecDeque;

/// Which extremum the deque tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremum {
    Max,
    Min,
}

impl Extremum {
    /// True when `back` can never again be the extremum once `incoming` is in the window.
    #[inline]
    fn dominates<T: Ord>(self, incoming: &T, back: &T) -> bool {
        match self {
            Extremum::Max => back < incoming,
            Extremum::Min => back > incoming,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MonotonicDeque {
    deque: VecDeque<usize>,
    width: usize,
    extremum: Extremum,
}

impl MonotonicDeque {
    /// Creates an empty deque for windows of `width` elements.
    pub fn new(width: usize, extremum: Extremum) -> Self {
        Self {
            deque: VecDeque::with_capacity(width),
            width,
            extremum,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn extremum(&self) -> Extremum {
        self.extremum
    }

    pub fn len(&self) -> usize {
        self.deque.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deque.is_empty()
    }

    pub fn clear(&mut self) {
        self.deque.clear();
    }

    /// Index of the current window's extremum.
    pub fn front(&self) -> Option<usize> {
        self.deque.front().copied()
    }

    /// Indices currently retained, front to back.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.deque.iter().copied()
    }

    /// Admits `data[index]` into the window ending at `index`.
    ///
    /// Indices must be pushed in increasing order. The expired front is
    /// evicted first, then every back entry the new value strictly dominates.
    /// Equal values are kept, so the earliest index of a tie stays in front.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds for `data`.
    #[inline]
    pub fn push<T: Ord>(&mut self, index: usize, data: &[T]) {
        debug_assert!(
            self.deque.back().map_or(true, |&back| back < index),
            "Indices must be pushed in increasing order"
        );

        while let Some(&front) = self.deque.front() {
            if front + self.width <= index {
                self.deque.pop_front();
            } else {
                break;
            }
        }

        let value = &data[index];
        while let Some(&back) = self.deque.back() {
            if self.extremum.dominates(value, &data[back]) {
                self.deque.pop_back();
            } else {
                break;
            }
        }

        self.deque.push_back(index);
    }
}
