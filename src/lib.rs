//! # Windowing - Sliding-Window and Stack-Based Sequence Algorithms
//!
//! Exact, linear-time algorithms over finite in-memory sequences:
//!
//! 1. **Window extrema**: maximum (or minimum) of every fixed-width window,
//!    via a monotonic deque of indices
//! 2. **Minimum window**: shortest substring covering a pattern with
//!    multiplicity, via a two-pointer scan over a need/have counter pair
//! 3. **Anagram starts**: every position where a permutation of a pattern
//!    begins, via a fixed-width window compared as a multiset
//! 4. **Nested run decoding**: expansion of `k[payload]` encodings, via an
//!    explicit parse stack
//!
//! Every call is pure and keeps all working state local, so independent
//! calls can run on any thread.
//!
//! ## Example
//!
//! ```
//! use windowing_rs::{
//!     decode_nested_runs, find_anagram_indices, min_window_substring, sliding_window_max,
//! };
//!
//! assert_eq!(sliding_window_max(&[1, 3, -1, -3, 5, 3, 6, 7], 3).unwrap(), vec![3, 3, 5, 5, 6, 7]);
//! assert_eq!(min_window_substring("ADOBECODEBANC", "ABC").as_str(), "BANC");
//! assert_eq!(find_anagram_indices("cbaebabacd", "abc"), vec![0, 6]);
//! assert_eq!(decode_nested_runs("3[a2[c]]").unwrap(), "accaccacc");
//! ```
//!
//! ## Performance
//!
//! - Window extrema: O(n) time, O(k) space
//! - Minimum window: O(|s| + |t|) time, O(distinct chars in t) space
//! - Anagram starts: O(|s|) expected time, O(distinct chars) space
//! - Decoding: O(output length)

mod anagram;
mod counter;
mod decode;
mod error;
mod ip_class;
mod min_window;
mod monotonic;
mod window;
mod window_max;


pub use anagram::{anagram_starts, find_anagram_indices, AnagramStarts};
pub use counter::FrequencyCounter;
pub use decode::{
    decode_nested_runs, decode_nested_runs_with, DecodeMode, DecodeOptions, Decoder, ParseFrame,
};
pub use error::{Error, Result};
pub use ip_class::{classify_ip_address, IpKind};
pub use min_window::{min_window, min_window_substring, MinWindow};
pub use monotonic::{Extremum, MonotonicDeque};
pub use window::Window;
pub use window_max::{sliding_window_max, sliding_window_min};
