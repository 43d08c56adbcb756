//! Decoder for nested run encodings such as `3[a2[c]]`.
//!
//! A digit group followed by a bracketed payload means "repeat the payload
//! that many times". Groups nest to any depth and concatenate freely, so
//! `2[abc]3[cd]ef` decodes to `abcabccdcdcdef`.
//!
//! Decoding is a single left-to-right pass over an explicit stack of
//! [`ParseFrame`]s, one per open bracket. Nesting depth is bounded only by
//! memory, and the stack can be inspected between calls to
//! [`Decoder::feed`].
//!
//! Decoded output can be exponential in nesting depth. Set
//! [`DecodeOptions::with_max_output_len`] to cap it.

use crate::error::{Error, Result};
use log::{debug, trace};

/// How the decoder reacts to input that breaks the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeMode {
    /// Reject malformed input with [`Error::MalformedEncoding`].
    #[default]
    Strict,
    /// Decode as much as possible: stray `]` is skipped, a `[` without a
    /// count repeats once, pending digits carry over to the next `[` and
    /// open brackets are closed at end of input.
    Lenient,
}

/// Decoder configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeOptions {
    pub mode: DecodeMode,
    /// Upper bound on the decoded output, in bytes
    pub max_output_len: Option<usize>,
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, mode: DecodeMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_max_output_len(mut self, limit: usize) -> Self {
        self.max_output_len = Some(limit);
        self
    }
}

/// State saved when a bracket opens: the text decoded so far at the
/// enclosing level and how many times the bracketed payload repeats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFrame {
    prefix: String,
    repeat: usize,
}

impl ParseFrame {
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn repeat(&self) -> usize {
        self.repeat
    }
}

/// Incremental decoder fed one character at a time.
#[derive(Debug, Clone)]
pub struct Decoder {
    options: DecodeOptions,
    stack: Vec<ParseFrame>,
    /// Text decoded so far at the innermost open level
    current: String,
    /// Digit group read but not yet consumed by a `[`
    count: Option<usize>,
    /// Number of characters fed
    position: usize,
}

impl Decoder {
    pub fn new(options: DecodeOptions) -> Self {
        Self {
            options,
            stack: Vec::new(),
            current: String::new(),
            count: None,
            position: 0,
        }
    }

    /// Number of currently open brackets.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Open frames, outermost first.
    pub fn frames(&self) -> &[ParseFrame] {
        &self.stack
    }

    /// Text accumulated at the innermost open level.
    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn pending_count(&self) -> Option<usize> {
        self.count
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Consumes one input character.
    pub fn feed(&mut self, ch: char) -> Result<()> {
        let position = self.position;
        self.position += 1;

        if let Some(digit) = ch.to_digit(10) {
            let count = self
                .count
                .unwrap_or(0)
                .checked_mul(10)
                .and_then(|n| n.checked_add(digit as usize))
                .ok_or(Error::CountOverflow { position })?;
            self.count = Some(count);
            return Ok(());
        }

        let strict = self.options.mode == DecodeMode::Strict;
        if strict && self.count.is_some() && ch != '[' {
            return Err(Error::MalformedEncoding {
                position,
                reason: "digit group not followed by '['",
            });
        }

        match ch {
            '[' => {
                let repeat = match self.count.take() {
                    Some(n) => n,
                    None if strict => {
                        return Err(Error::MalformedEncoding {
                            position,
                            reason: "'[' without a repeat count",
                        })
                    }
                    None => 1,
                };
                self.stack.push(ParseFrame {
                    prefix: std::mem::take(&mut self.current),
                    repeat,
                });
                trace!("open x{} at {}, depth {}", repeat, position, self.stack.len());
            }
            ']' => match self.stack.pop() {
                Some(frame) => {
                    self.close(frame)?;
                    trace!("close at {}, depth {}", position, self.stack.len());
                }
                None if strict => {
                    return Err(Error::MalformedEncoding {
                        position,
                        reason: "unmatched ']'",
                    })
                }
                None => trace!("skipping unmatched ']' at {}", position),
            },
            _ => {
                self.current.push(ch);
                if self.stack.is_empty() {
                    self.check_limit(self.current.len())?;
                }
            }
        }

        Ok(())
    }

    /// Ends the input and returns the decoded string.
    pub fn finish(mut self) -> Result<String> {
        match self.options.mode {
            DecodeMode::Strict => {
                if self.count.is_some() {
                    return Err(Error::MalformedEncoding {
                        position: self.position,
                        reason: "digit group at end of input",
                    });
                }
                if !self.stack.is_empty() {
                    return Err(Error::MalformedEncoding {
                        position: self.position,
                        reason: "unclosed '['",
                    });
                }
            }
            DecodeMode::Lenient => {
                self.count = None;
                while let Some(frame) = self.stack.pop() {
                    self.close(frame)?;
                }
            }
        }

        debug!(
            "decoded {} input chars into {} bytes",
            self.position,
            self.current.len()
        );
        Ok(self.current)
    }

    /// Feeds all of `input` and finishes.
    pub fn decode(mut self, input: &str) -> Result<String> {
        for ch in input.chars() {
            self.feed(ch)?;
        }
        self.finish()
    }

    /// Replaces the innermost level with `prefix + current * repeat`.
    fn close(&mut self, frame: ParseFrame) -> Result<()> {
        let body = std::mem::take(&mut self.current);
        let total = body
            .len()
            .checked_mul(frame.repeat)
            .and_then(|n| n.checked_add(frame.prefix.len()))
            .ok_or(Error::OutputLimitExceeded { limit: usize::MAX })?;
        self.check_limit(total)?;

        self.current = frame.prefix;
        self.current.reserve(total - self.current.len());
        for _ in 0..frame.repeat {
            self.current.push_str(&body);
        }
        Ok(())
    }

    fn check_limit(&self, len: usize) -> Result<()> {
        match self.options.max_output_len {
            Some(limit) if len > limit => Err(Error::OutputLimitExceeded { limit }),
            _ => Ok(()),
        }
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new(DecodeOptions::default())
    }
}

/// Decodes `s` strictly with default options.
///
/// # Example
///
/// ```
/// use windowing_rs::decode_nested_runs;
///
/// assert_eq!(decode_nested_runs("3[a2[c]]").unwrap(), "accaccacc");
/// assert_eq!(decode_nested_runs("2[abc]3[cd]ef").unwrap(), "abcabccdcdcdef");
/// ```
pub fn decode_nested_runs(s: &str) -> Result<String> {
    Decoder::default().decode(s)
}

/// Decodes `s` with the given options.
pub fn decode_nested_runs_with(s: &str, options: DecodeOptions) -> Result<String> {
    Decoder::new(options).decode(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lenient(s: &str) -> Result<String> {
        decode_nested_runs_with(s, DecodeOptions::new().with_mode(DecodeMode::Lenient))
    }

    #[test]
    fn test_reference_cases() {
        assert_eq!(decode_nested_runs("3[a2[c]]").unwrap(), "accaccacc");
        assert_eq!(decode_nested_runs("2[abc]3[cd]ef").unwrap(), "abcabccdcdcdef");
        assert_eq!(decode_nested_runs("3[a]2[bc]").unwrap(), "aaabcbc");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(decode_nested_runs("xyz").unwrap(), "xyz");
        assert_eq!(decode_nested_runs("").unwrap(), "");
    }

    #[test]
    fn test_multi_digit_count() {
        assert_eq!(decode_nested_runs("10[a]").unwrap(), "a".repeat(10));
        assert_eq!(decode_nested_runs("2[12[z]]").unwrap(), "z".repeat(24));
    }

    #[test]
    fn test_zero_and_empty_payload() {
        assert_eq!(decode_nested_runs("a0[bc]d").unwrap(), "ad");
        assert_eq!(decode_nested_runs("5[]x").unwrap(), "x");
    }

    #[test]
    fn test_deep_nesting() {
        let encoded = format!("{}a{}", "2[".repeat(10), "]".repeat(10));
        assert_eq!(decode_nested_runs(&encoded).unwrap(), "a".repeat(1024));
    }

    #[test]
    fn test_stack_inspectable_mid_parse() {
        let mut decoder = Decoder::default();
        for ch in "x3[a2[".chars() {
            decoder.feed(ch).unwrap();
        }
        assert_eq!(decoder.depth(), 2);
        assert_eq!(decoder.frames()[0].prefix(), "x");
        assert_eq!(decoder.frames()[0].repeat(), 3);
        assert_eq!(decoder.frames()[1].prefix(), "a");
        assert_eq!(decoder.frames()[1].repeat(), 2);
        assert_eq!(decoder.current(), "");

        decoder.feed('c').unwrap();
        decoder.feed(']').unwrap();
        assert_eq!(decoder.depth(), 1);
        assert_eq!(decoder.current(), "acc");

        decoder.feed(']').unwrap();
        assert_eq!(decoder.depth(), 0);
        assert_eq!(decoder.finish().unwrap(), "xaccaccacc");
    }

    #[test]
    fn test_pending_count_visible() {
        let mut decoder = Decoder::default();
        decoder.feed('4').unwrap();
        decoder.feed('2').unwrap();
        assert_eq!(decoder.pending_count(), Some(42));
        decoder.feed('[').unwrap();
        assert_eq!(decoder.pending_count(), None);
        assert_eq!(decoder.position(), 3);
    }

    #[test]
    fn test_strict_unmatched_close() {
        assert_eq!(
            decode_nested_runs("a]b"),
            Err(Error::MalformedEncoding {
                position: 1,
                reason: "unmatched ']'"
            })
        );
    }

    #[test]
    fn test_strict_bracket_without_count() {
        assert_eq!(
            decode_nested_runs("[ab]"),
            Err(Error::MalformedEncoding {
                position: 0,
                reason: "'[' without a repeat count"
            })
        );
    }

    #[test]
    fn test_strict_digits_without_bracket() {
        assert_eq!(
            decode_nested_runs("2a[b]"),
            Err(Error::MalformedEncoding {
                position: 1,
                reason: "digit group not followed by '['"
            })
        );
        assert_eq!(
            decode_nested_runs("ab12"),
            Err(Error::MalformedEncoding {
                position: 4,
                reason: "digit group at end of input"
            })
        );
    }

    #[test]
    fn test_strict_unclosed() {
        let err = decode_nested_runs("3[ab").unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(
            err,
            Error::MalformedEncoding {
                position: 4,
                reason: "unclosed '['"
            }
        );
    }

    #[test]
    fn test_lenient_best_effort() {
        assert_eq!(lenient("a]b").unwrap(), "ab");
        assert_eq!(lenient("[ab]").unwrap(), "ab");
        assert_eq!(lenient("2a[b]").unwrap(), "abb");
        assert_eq!(lenient("ab12").unwrap(), "ab");
        assert_eq!(lenient("3[ab").unwrap(), "ababab");
        assert_eq!(lenient("x2[y3[z").unwrap(), "xyzzzyzzz");
    }

    #[test]
    fn test_lenient_agrees_on_well_formed() {
        for s in ["3[a2[c]]", "2[abc]3[cd]ef", "xyz", "10[q]"] {
            assert_eq!(lenient(s).unwrap(), decode_nested_runs(s).unwrap());
        }
    }

    #[test]
    fn test_count_overflow() {
        let err = decode_nested_runs("99999999999999999999999999[a]").unwrap_err();
        assert!(matches!(err, Error::CountOverflow { .. }));
    }

    #[test]
    fn test_output_limit() {
        let options = DecodeOptions::new().with_max_output_len(5);
        assert_eq!(decode_nested_runs_with("2[ab]", options).unwrap(), "abab");
        assert_eq!(
            decode_nested_runs_with("2[abc]", options),
            Err(Error::OutputLimitExceeded { limit: 5 })
        );
        assert_eq!(
            decode_nested_runs_with("abcdef", options),
            Err(Error::OutputLimitExceeded { limit: 5 })
        );
    }

    #[test]
    fn test_output_limit_stops_exponential_blowup() {
        let encoded = format!("{}a{}", "1000[".repeat(8), "]".repeat(8));
        let options = DecodeOptions::new().with_max_output_len(1 << 20);
        assert!(matches!(
            decode_nested_runs_with(&encoded, options),
            Err(Error::OutputLimitExceeded { .. })
        ));
    }
}
