use crate::counter::FrequencyCounter;
use log::debug;
use std::hash::Hash;
use std::iter::FusedIterator;

/// Iterator over the start positions of every permutation of a pattern in a text.
///
/// Slides a window of `pattern.len()` elements across the text, keeping a
/// running [`FrequencyCounter`] of the window. Starts are yielded in ascending
/// order and may overlap.
pub struct AnagramStarts<'a, T> {
    text: &'a [T],
    width: usize,
    pattern: FrequencyCounter<&'a T>,
    window: FrequencyCounter<&'a T>,
    /// Next text position to admit into the window
    next: usize,
}

impl<'a, T: Hash + Eq> AnagramStarts<'a, T> {
    pub(crate) fn new(text: &'a [T], pattern: &'a [T]) -> Self {
        Self {
            text,
            width: pattern.len(),
            pattern: pattern.iter().collect(),
            window: FrequencyCounter::new(),
            next: 0,
        }
    }
}

impl<'a, T: Hash + Eq> Iterator for AnagramStarts<'a, T> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.width == 0 {
            return None;
        }

        let text = self.text;
        while self.next < text.len() {
            let i = self.next;
            self.next += 1;

            self.window.increment(&text[i]);
            if i >= self.width {
                self.window.decrement(&&text[i - self.width]);
            }

            if i + 1 >= self.width && self.window == self.pattern {
                return Some(i + 1 - self.width);
            }
        }

        None
    }
}

impl<'a, T: Hash + Eq> FusedIterator for AnagramStarts<'a, T> {}

/// Lazily yields every start index `i` where `text[i..i + pattern.len()]`
/// is a permutation of `pattern`.
///
/// Yields nothing when `pattern` is empty or longer than `text`.
pub fn anagram_starts<'a, T: Hash + Eq>(text: &'a [T], pattern: &'a [T]) -> AnagramStarts<'a, T> {
    AnagramStarts::new(text, pattern)
}

/// Character positions in `s` where an anagram of `p` begins.
///
/// # Example
///
/// ```
/// use windowing_rs::find_anagram_indices;
///
/// assert_eq!(find_anagram_indices("cbaebabacd", "abc"), vec![0, 6]);
/// assert_eq!(find_anagram_indices("abab", "ab"), vec![0, 1, 2]);
/// ```
pub fn find_anagram_indices(s: &str, p: &str) -> Vec<usize> {
    let text: Vec<char> = s.chars().collect();
    let pattern: Vec<char> = p.chars().collect();

    let starts: Vec<usize> = anagram_starts(&text, &pattern).collect();
    debug!(
        "found {} anagram(s) of a {}-char pattern in {} chars",
        starts.len(),
        pattern.len(),
        text.len()
    );
    starts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_cases() {
        assert_eq!(find_anagram_indices("cbaebabacd", "abc"), vec![0, 6]);
        assert_eq!(find_anagram_indices("abab", "ab"), vec![0, 1, 2]);
    }

    #[test]
    fn test_pattern_longer_than_text() {
        assert!(find_anagram_indices("ab", "abc").is_empty());
    }

    #[test]
    fn test_empty_inputs() {
        assert!(find_anagram_indices("abc", "").is_empty());
        assert!(find_anagram_indices("", "a").is_empty());
        assert!(find_anagram_indices("", "").is_empty());
    }

    #[test]
    fn test_repeated_characters() {
        assert_eq!(find_anagram_indices("aaaa", "aa"), vec![0, 1, 2]);
        // Same letters, different multiplicity.
        assert!(find_anagram_indices("aabb", "abbb").is_empty());
    }

    #[test]
    fn test_whole_text_match() {
        assert_eq!(find_anagram_indices("listen", "silent"), vec![0]);
    }

    #[test]
    fn test_character_leaving_window_resets_to_absent() {
        // After 'x' slides out its count reaches zero; "ba" must still match "ab".
        assert_eq!(find_anagram_indices("xba", "ab"), vec![1]);
    }

    #[test]
    fn test_lazy_iterator() {
        let text = [1, 2, 1, 2, 3];
        let pattern = [2, 1];
        let mut starts = anagram_starts(&text, &pattern);
        assert_eq!(starts.next(), Some(0));
        assert_eq!(starts.next(), Some(1));
        assert_eq!(starts.next(), Some(2));
        assert_eq!(starts.next(), None);
        assert_eq!(starts.next(), None);
    }
}
