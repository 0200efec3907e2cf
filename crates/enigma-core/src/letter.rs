//! Alphabet letters and contact positions.
//!
//! The machine uses one coordinate space for everything: a letter, a contact
//! position on a rotor face, a rotor's rotational position and its ring
//! setting are all a [`Letter`]. Indices are zero-based (`A = 0`, `Z = 25`),
//! so ring setting `A` is the historical ring setting "01".
//!
//! # Invariants
//!
//! - A `Letter` always holds an index in `0..26`
//! - Arithmetic wraps modulo 26

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Number of symbols in the alphabet.
pub const ALPHABET_LEN: u8 = 26;

/// One of the 26 letters A-Z, used both as a value and as a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Letter(u8);

impl Letter {
    /// The letter `A` (index 0).
    pub const A: Self = Self(0);

    /// The letter `Z` (index 25).
    pub const Z: Self = Self(ALPHABET_LEN - 1);

    /// Letter at `index`, or `None` if `index >= 26`.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < ALPHABET_LEN { Some(Self(index)) } else { None }
    }

    /// Letter at `index` reduced modulo 26.
    pub const fn wrapping(index: u8) -> Self {
        Self(index % ALPHABET_LEN)
    }

    /// Letter for an uppercase ASCII byte.
    ///
    /// Used by the static catalog tables; bytes outside `A..=Z` wrap rather
    /// than fail, and the catalog tests check every table entry.
    pub(crate) const fn from_ascii(byte: u8) -> Self {
        Self::wrapping(byte.wrapping_sub(b'A'))
    }

    /// Letter for an uppercase ASCII character, or `None`.
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_uppercase() { Some(Self(c as u8 - b'A')) } else { None }
    }

    /// Zero-based index of this letter.
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Uppercase character for this letter.
    pub fn to_char(self) -> char {
        char::from(b'A' + self.0)
    }

    /// This letter moved forward by `by` positions.
    pub const fn forward(self, by: Self) -> Self {
        Self((self.0 + by.0) % ALPHABET_LEN)
    }

    /// This letter moved backward by `by` positions.
    pub const fn backward(self, by: Self) -> Self {
        Self((self.0 + ALPHABET_LEN - by.0) % ALPHABET_LEN)
    }

    /// The following letter, wrapping Z to A.
    pub const fn successor(self) -> Self {
        Self((self.0 + 1) % ALPHABET_LEN)
    }

    /// All letters in alphabet order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..ALPHABET_LEN).map(Self)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl TryFrom<char> for Letter {
    type Error = ConfigError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c.to_ascii_uppercase()).ok_or(ConfigError::InvalidLetter { character: c })
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.to_char()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_conversion_covers_alphabet() {
        let text: String = Letter::all().map(Letter::to_char).collect();
        assert_eq!(text, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");

        for letter in Letter::all() {
            assert_eq!(Letter::from_char(letter.to_char()), Some(letter));
        }
    }

    #[test]
    fn from_char_rejects_non_letters() {
        assert_eq!(Letter::from_char('a'), None);
        assert_eq!(Letter::from_char(' '), None);
        assert_eq!(Letter::from_char('Ä'), None);
        assert_eq!(Letter::from_char('['), None);
    }

    #[test]
    fn try_from_accepts_lowercase() {
        assert_eq!(Letter::try_from('q'), Ok(Letter::wrapping(16)));
        assert_eq!(Letter::try_from('1'), Err(ConfigError::InvalidLetter { character: '1' }));
    }

    #[test]
    fn arithmetic_wraps() {
        assert_eq!(Letter::Z.successor(), Letter::A);
        assert_eq!(Letter::A.backward(Letter::wrapping(1)), Letter::Z);
        assert_eq!(Letter::wrapping(20).forward(Letter::wrapping(10)), Letter::wrapping(4));
        assert_eq!(Letter::wrapping(52), Letter::A);
        assert_eq!(Letter::from_index(26), None);
    }
}
