//! # Natural Number Model
//!
//! Defines the validated value the whole tool operates on.
//!
//! A [`NaturalNumber`] keeps its digits as a canonical decimal string:
//! * Never empty.
//! * ASCII digits only.
//! * No leading zero; `"0"` only ever appears as the normalization result
//!   of reversing a value whose digits collapse entirely.
//!
//! Digits are indexed from the most significant position, the same order a
//! user reads them in. Positions outside the stored digits read as zero
//! rather than failing, including negative positions.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::NaturalError;

/// An arbitrary-precision natural number in canonical decimal form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NaturalNumber {
    digits: String,
}

impl NaturalNumber {
    /// Parses user-supplied text into a natural number.
    ///
    /// Surrounding whitespace is ignored. The trimmed text must start with a
    /// digit `1`-`9` followed by any number of digits `0`-`9`; anything else
    /// (signs, decimal points, leading zeros, the lone `"0"`) is rejected
    /// with the original input preserved in the error.
    pub fn from_text(text: &str) -> Result<Self, NaturalError> {
        let trimmed = text.trim();

        if !Self::is_valid_natural_number(trimmed) {
            return Err(NaturalError::InvalidText {
                input: text.to_string(),
            });
        }

        Ok(Self {
            digits: trimmed.to_string(),
        })
    }

    /// Converts a machine integer into a natural number.
    ///
    /// Zero and negative values are rejected; the decimal rendering of a
    /// positive integer can never carry a leading zero, so no normalization
    /// is needed on this path.
    pub fn from_integer(value: i64) -> Result<Self, NaturalError> {
        if value <= 0 {
            return Err(NaturalError::InvalidNumber {
                value: value as f64,
            });
        }

        Ok(Self {
            digits: value.to_string(),
        })
    }

    /// Converts an arbitrary numeric value into a natural number.
    ///
    /// Accepts exactly the finite whole values greater than zero. Finite
    /// values outside that domain fail with
    /// [`NaturalError::InvalidNumber`]; NaN and the infinities are not
    /// numbers in any usable sense and fail with
    /// [`NaturalError::Unsupported`].
    pub fn from_number(value: f64) -> Result<Self, NaturalError> {
        if !value.is_finite() {
            return Err(NaturalError::Unsupported {
                found: value.to_string(),
            });
        }

        if value <= 0.0 || value.fract() != 0.0 {
            return Err(NaturalError::InvalidNumber { value });
        }

        Ok(Self {
            digits: format!("{value:.0}"),
        })
    }

    /// Reports whether `text` spells a natural number.
    ///
    /// Pure helper shared with callers that want to judge input before
    /// constructing anything, e.g. live input feedback. Equivalent to
    /// `from_text(text).is_ok()`.
    pub fn is_valid_natural_number(text: &str) -> bool {
        let mut bytes = text.trim().bytes();

        match bytes.next() {
            Some(b'1'..=b'9') => bytes.all(|b| b.is_ascii_digit()),
            _ => false,
        }
    }

    /// Removes leading `'0'` characters from `text`.
    ///
    /// An empty input, or one consisting only of zeros, collapses to `"0"`.
    pub fn strip_leading_zeros(text: &str) -> String {
        let stripped = text.trim_start_matches('0');

        if stripped.is_empty() {
            "0".to_string()
        } else {
            stripped.to_string()
        }
    }

    /// Number of digits.
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// The canonical digit string.
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Digit at `index`, counted from the most significant digit.
    ///
    /// Positions outside `0..len()`, negative ones included, read as 0:
    /// digits beyond the stored range are implicitly absent.
    pub fn digit(&self, index: isize) -> u8 {
        if index < 0 {
            return 0;
        }

        self.digits
            .as_bytes()
            .get(index as usize)
            .map_or(0, |&b| b - b'0')
    }

    /// Counts the `'0'` digits anywhere in the value.
    pub fn count_zeros(&self) -> usize {
        self.digits.bytes().filter(|&b| b == b'0').count()
    }

    /// Returns a new value holding the normalized reversed digits.
    pub fn reversed(&self) -> Self {
        Self {
            digits: self.reversed_digits(),
        }
    }

    /// Reverses the receiver's digits, returning it for chaining.
    pub fn reverse_in_place(&mut self) -> &mut Self {
        self.digits = self.reversed_digits();
        self
    }

    /// Reversal shared by both operations: flip the digit order, then strip
    /// the leading zeros that used to be trailing ones.
    fn reversed_digits(&self) -> String {
        let flipped: String = self.digits.chars().rev().collect();
        let normalized = Self::strip_leading_zeros(&flipped);

        if normalized.len() != flipped.len() {
            debug!(
                dropped = flipped.len() - normalized.len(),
                "trailing zeros collapsed during reversal"
            );
        }

        normalized
    }
}

impl fmt::Display for NaturalNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}

impl FromStr for NaturalNumber {
    type Err = NaturalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s)
    }
}

impl TryFrom<i64> for NaturalNumber {
    type Error = NaturalError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_integer(value)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
