//! Error types shared by every algorithm in the crate.

use thiserror::Error;

/// Failure conditions for window and decode operations.
///
/// "No result" outcomes (no minimum window, no anagram) are not errors; they
/// are reported through the return value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The window width is zero or larger than the input.
    ///
    /// An empty input always produces this error, since no width is valid.
    #[error("invalid window width {width} for input of length {len}")]
    InvalidWindow {
        /// The requested window width.
        width: usize,
        /// Length of the input sequence.
        len: usize,
    },

    /// The nested run encoding is not well formed.
    #[error("malformed encoding at position {position}: {reason}")]
    MalformedEncoding {
        /// Character position where the problem was detected.
        position: usize,
        /// What was wrong.
        reason: &'static str,
    },

    /// A repeat count does not fit in `usize`.
    #[error("repeat count overflows at position {position}")]
    CountOverflow {
        /// Character position of the digit that overflowed.
        position: usize,
    },

    /// The decoded output would grow beyond the configured limit.
    #[error("decoded output exceeds limit of {limit} bytes")]
    OutputLimitExceeded {
        /// The configured limit.
        limit: usize,
    },
}

impl Error {
    /// Returns true for caller contract violations (bad widths, bad grammar).
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::InvalidWindow { .. } | Error::MalformedEncoding { .. } | Error::CountOverflow { .. }
        )
    }
}

/// Convenience alias for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
