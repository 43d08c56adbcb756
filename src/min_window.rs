use crate::counter::FrequencyCounter;
use crate::window::Window;
use log::debug;
use std::hash::Hash;

/// Outcome of a minimum window search over a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinWindow<'a> {
    /// The shortest satisfying window, in character positions, and its text.
    Found { window: Window, text: &'a str },
    /// No window of the text contains the whole pattern.
    Absent,
}

impl<'a> MinWindow<'a> {
    pub fn is_found(&self) -> bool {
        matches!(self, MinWindow::Found { .. })
    }

    /// The matched substring, or `""` when absent.
    pub fn as_str(&self) -> &'a str {
        match self {
            MinWindow::Found { text, .. } => *text,
            MinWindow::Absent => "",
        }
    }

    pub fn into_option(self) -> Option<&'a str> {
        match self {
            MinWindow::Found { text, .. } => Some(text),
            MinWindow::Absent => None,
        }
    }
}

/// Finds the shortest window of `text` holding every element of `pattern`
/// at least as many times as `pattern` does.
///
/// Both pointers only move forward, so the scan is O(|text| + |pattern|).
/// Among windows of equal length the leftmost wins. Returns `None` if either
/// input is empty or no window qualifies.
pub fn min_window<T: Hash + Eq>(text: &[T], pattern: &[T]) -> Option<Window> {
    if text.is_empty() || pattern.is_empty() {
        return None;
    }

    let need: FrequencyCounter<&T> = pattern.iter().collect();
    let required = need.distinct();
    let mut have = FrequencyCounter::new();
    let mut satisfied = 0;
    let mut best: Option<Window> = None;
    let mut left = 0;

    for (right, item) in text.iter().enumerate() {
        let wanted = need.count(&item);
        if wanted > 0 && have.increment(item) == wanted {
            satisfied += 1;
        }

        // Shrink while the window still covers the pattern. `required >= 1`
        // keeps `left <= right` here.
        while satisfied == required {
            let candidate = Window::new(left, right + 1);
            if best.map_or(true, |b| candidate.len() < b.len()) {
                best = Some(candidate);
            }

            let leaving = &text[left];
            let wanted = need.count(&leaving);
            if wanted > 0 && have.decrement(&leaving) < wanted {
                satisfied -= 1;
            }
            left += 1;
        }
    }

    best
}

/// Character-level minimum window substring of `s` covering `t`.
///
/// # Example
///
/// ```
/// use windowing_rs::min_window_substring;
///
/// assert_eq!(min_window_substring("ADOBECODEBANC", "ABC").as_str(), "BANC");
/// assert!(!min_window_substring("a", "aa").is_found());
/// ```
pub fn min_window_substring<'a>(s: &'a str, t: &str) -> MinWindow<'a> {
    let text: Vec<char> = s.chars().collect();
    let pattern: Vec<char> = t.chars().collect();

    match min_window(&text, &pattern) {
        Some(window) => {
            let start = byte_offset(s, window.left());
            let end = byte_offset(s, window.right());
            debug!(
                "min window {}..{} of {} chars covers pattern of {} chars",
                window.left(),
                window.right(),
                text.len(),
                pattern.len()
            );
            MinWindow::Found {
                window,
                text: &s[start..end],
            }
        }
        None => {
            debug!("no window of {} chars covers pattern of {} chars", text.len(), pattern.len());
            MinWindow::Absent
        }
    }
}

/// Byte offset of the character at position `chars`, or `s.len()` past the end.
fn byte_offset(s: &str, chars: usize) -> usize {
    s.char_indices().nth(chars).map_or(s.len(), |(offset, _)| offset)
}
