//! Digits, the bounded entry buffer, and the submitted code

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Result};

/// Number of digits in an unlock code
pub const CODE_LENGTH: usize = 4;

/// A single decimal digit emitted by the keypad
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Zeroize)]
pub struct Digit(u8);

impl Digit {
    /// Create a digit from its numeric value (0-9)
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    /// Numeric value of the digit
    pub fn value(self) -> u8 {
        self.0
    }

    /// ASCII character for the digit
    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<char> for Digit {
    type Error = Error;

    fn try_from(c: char) -> Result<Self> {
        c.to_digit(10)
            .map(|d| Self(d as u8))
            .ok_or(Error::InvalidDigit(c))
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Ordered digits entered so far, bounded at [`CODE_LENGTH`]
///
/// Contents are wiped on [`clear`](Self::clear) and on drop.
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct DigitBuffer {
    digits: [Digit; CODE_LENGTH],
    len: usize,
}

impl DigitBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of digits entered
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no digit has been entered
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the buffer holds a full code
    pub fn is_full(&self) -> bool {
        self.len == CODE_LENGTH
    }

    /// Append a digit. Returns `false` (and changes nothing) when full.
    pub fn push(&mut self, digit: Digit) -> bool {
        if self.is_full() {
            return false;
        }
        self.digits[self.len] = digit;
        self.len += 1;
        true
    }

    /// Remove every digit
    pub fn clear(&mut self) {
        self.zeroize();
    }

    /// Digits in entry order
    pub fn digits(&self) -> &[Digit] {
        &self.digits[..self.len]
    }

    /// Join the buffer into a code, failing unless exactly [`CODE_LENGTH`] digits are present
    pub fn to_code(&self) -> Result<PinCode> {
        if self.len != CODE_LENGTH {
            return Err(Error::IncompleteEntry {
                entered: self.len,
                expected: CODE_LENGTH,
            });
        }
        Ok(PinCode(self.digits().iter().map(|d| d.as_char()).collect()))
    }
}

impl fmt::Debug for DigitBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigitBuffer")
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

/// Code forwarded to the command executor: the buffer's digits joined in entry order
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct PinCode(String);

impl PinCode {
    /// Build a code from a string of ASCII digits
    pub fn parse(s: &str) -> Result<Self> {
        if let Some(bad) = s.chars().find(|c| !c.is_ascii_digit()) {
            return Err(Error::InvalidDigit(bad));
        }
        Ok(Self(s.to_string()))
    }

    /// The raw code string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for PinCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PinCode(****)")
    }
}

impl PartialEq<str> for PinCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PinCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
