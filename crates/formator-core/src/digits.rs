//! # Digit Sequence
//!
//! Every numeric identifier is validated on its digits alone: spaces,
//! dashes, plus signs and letters are discarded, digit order is kept.
//!
//! ```text
//!   "+46 (0)70-123 45 67"  ──►  drop non-digits  ──►  "460701234567"
//!         raw input                                   Digits
//! ```

use std::fmt;

use crate::checksum::luhn;

/// The ASCII digits of an input, in original left-to-right order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Digits(String);

impl Digits {
    /// Extracts the digit sequence from raw input.
    ///
    /// ## Example
    /// ```rust
    /// use formator_core::digits::Digits;
    ///
    /// assert_eq!(Digits::from_input("SE-123 45").as_str(), "12345");
    /// assert!(Digits::from_input("abc").is_empty());
    /// ```
    pub fn from_input(input: &str) -> Self {
        Digits(input.chars().filter(char::is_ascii_digit).collect())
    }

    /// Returns the digits as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the input held no digits at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The last `n` digits, or all of them when there are fewer.
    pub fn tail(&self, n: usize) -> &str {
        &self.0[self.0.len().saturating_sub(n)..]
    }

    /// Parses `len` digits starting at `start` as a number.
    ///
    /// Returns `None` when the span is out of bounds.
    pub fn number_at(&self, start: usize, len: usize) -> Option<u32> {
        self.0.get(start..start + len)?.parse().ok()
    }

    /// True when the whole sequence passes the Luhn checksum.
    pub fn passes_luhn(&self) -> bool {
        luhn(&self.0)
    }

    /// Consumes the sequence, returning the owned digits.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
