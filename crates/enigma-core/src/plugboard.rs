//! Plugboard: symmetric letter-pair swaps at machine input and output.
//!
//! # Parsing
//!
//! A plugboard specification is a list of two-letter tokens separated by a
//! single space, e.g. `"AB CD EF"`. Tokens are accepted left to right and
//! added to the pairs already on the board. Only an empty specification
//! clears the board.
//!
//! [`Plugboard::configure`] is permissive: a token that is malformed, plugs a
//! letter to itself, reuses a letter already plugged, or arrives after ten
//! pairs are in place is skipped and parsing continues. The caller gets the
//! best-effort board, never an error. [`Plugboard::configure_strict`] uses
//! the same grammar but rejects the whole specification on the first bad
//! token.
//!
//! # Invariants
//!
//! - `swap(swap(x)) == x` for every letter
//! - At most [`MAX_PAIRS`] pairs; no letter in more than one pair

use std::fmt;

use thiserror::Error;

use crate::{
    error::ConfigError,
    letter::{ALPHABET_LEN, Letter},
};

/// Maximum number of plugged pairs.
pub const MAX_PAIRS: usize = 10;

/// Token separator in a plugboard specification.
pub const PAIR_SEPARATOR: char = ' ';

/// Why a plugboard token was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlugRejection {
    /// Token is not exactly two letters.
    #[error("token must be exactly two letters")]
    Malformed,

    /// Both letters of the token are the same.
    #[error("letter plugged to itself")]
    SameLetter,

    /// One of the letters is already part of another pair.
    #[error("letter {0} is already plugged")]
    AlreadyPlugged(Letter),

    /// The board already holds the maximum number of pairs.
    #[error("plugboard already holds the maximum of 10 pairs")]
    Full,
}

/// Letter-pair swap table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    table: [Letter; ALPHABET_LEN as usize],
    pairs: usize,
}

impl Plugboard {
    /// Empty plugboard: every letter maps to itself.
    pub fn new() -> Self {
        let mut table = [Letter::A; ALPHABET_LEN as usize];
        for letter in Letter::all() {
            table[usize::from(letter.index())] = letter;
        }
        Self { table, pairs: 0 }
    }

    /// Board built permissively from `spec`. See [`Plugboard::configure`].
    pub fn parse(spec: &str) -> Self {
        let mut board = Self::new();
        board.configure(spec);
        board
    }

    /// Add the pairs parsed from `spec`, skipping bad tokens.
    ///
    /// An empty specification clears the board. Conflicts and the pair cap
    /// are checked against the pairs already present.
    pub fn configure(&mut self, spec: &str) {
        if spec.is_empty() {
            self.clear();
            return;
        }
        for token in tokens(spec) {
            if let Err(reason) = self.plug_token(token) {
                tracing::debug!(token, %reason, "skipping plugboard token");
            }
        }
    }

    /// Add the pairs parsed from `spec`, rejecting bad tokens.
    ///
    /// An empty specification clears the board. On error the board is left
    /// unchanged.
    pub fn configure_strict(&mut self, spec: &str) -> Result<(), ConfigError> {
        if spec.is_empty() {
            self.clear();
            return Ok(());
        }
        let mut board = self.clone();
        for token in tokens(spec) {
            board
                .plug_token(token)
                .map_err(|reason| ConfigError::InvalidPlug { token: token.to_string(), reason })?;
        }
        *self = board;
        Ok(())
    }

    fn plug_token(&mut self, token: &str) -> Result<(), PlugRejection> {
        let mut chars = token.chars();
        let (Some(a), Some(b), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(PlugRejection::Malformed);
        };
        let a = Letter::try_from(a).map_err(|_| PlugRejection::Malformed)?;
        let b = Letter::try_from(b).map_err(|_| PlugRejection::Malformed)?;
        self.plug(a, b)
    }

    /// Add one pair.
    pub fn plug(&mut self, a: Letter, b: Letter) -> Result<(), PlugRejection> {
        if a == b {
            return Err(PlugRejection::SameLetter);
        }
        for letter in [a, b] {
            if self.is_plugged(letter) {
                return Err(PlugRejection::AlreadyPlugged(letter));
            }
        }
        if self.pairs >= MAX_PAIRS {
            return Err(PlugRejection::Full);
        }

        self.table[usize::from(a.index())] = b;
        self.table[usize::from(b.index())] = a;
        self.pairs += 1;
        Ok(())
    }

    /// Remove every pair.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Partner of `letter`, or `letter` itself if unplugged.
    pub fn swap(&self, letter: Letter) -> Letter {
        self.table[usize::from(letter.index())]
    }

    /// Returns true if `letter` is part of a pair.
    pub fn is_plugged(&self, letter: Letter) -> bool {
        self.swap(letter) != letter
    }

    /// Number of plugged pairs.
    pub fn pair_count(&self) -> usize {
        self.pairs
    }

    /// Plugged pairs, each with its alphabetically smaller letter first.
    pub fn pairs(&self) -> impl Iterator<Item = (Letter, Letter)> + '_ {
        Letter::all().filter_map(|a| {
            let b = self.swap(a);
            (a < b).then_some((a, b))
        })
    }
}

impl Default for Plugboard {
    fn default() -> Self {
        Self::new()
    }
}

/// Canonical specification, e.g. `"AB CD"`.
impl fmt::Display for Plugboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (a, b)) in self.pairs().enumerate() {
            if i > 0 {
                write!(f, "{PAIR_SEPARATOR}")?;
            }
            write!(f, "{a}{b}")?;
        }
        Ok(())
    }
}

fn tokens(spec: &str) -> impl Iterator<Item = &str> {
    spec.split(PAIR_SEPARATOR).filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap_or(Letter::A)
    }

    #[test]
    fn empty_board_is_identity() {
        let board = Plugboard::new();
        assert!(Letter::all().all(|l| board.swap(l) == l));
        assert_eq!(board.pair_count(), 0);
        assert_eq!(board.to_string(), "");
    }

    #[test]
    fn configure_swaps_both_ways() {
        let board = Plugboard::parse("AB QZ");
        assert_eq!(board.swap(letter('A')), letter('B'));
        assert_eq!(board.swap(letter('B')), letter('A'));
        assert_eq!(board.swap(letter('Z')), letter('Q'));
        assert_eq!(board.swap(letter('C')), letter('C'));
        assert_eq!(board.pair_count(), 2);
    }

    #[test]
    fn configure_skips_bad_tokens() {
        // ABC: too long, X: too short, AA: same letter, BC: B already used,
        // 1Z: not a letter, double space: empty token.
        let board = Plugboard::parse("AB ABC X AA BC 1Z  DE");
        assert_eq!(board.to_string(), "AB DE");
    }

    #[test]
    fn configure_accepts_lowercase() {
        assert_eq!(Plugboard::parse("ab cd").to_string(), "AB CD");
    }

    #[test]
    fn configure_adds_to_previous_pairs() {
        let mut board = Plugboard::parse("AB");
        board.configure("CD");
        assert_eq!(board.to_string(), "AB CD");
        board.configure("");
        assert_eq!(board.pair_count(), 0);
    }

    #[test]
    fn configure_checks_conflicts_against_present_pairs() {
        let mut board = Plugboard::parse("AB CD");
        // AE: A already plugged, DF: D already plugged.
        board.configure("AE DF GH");
        assert_eq!(board.to_string(), "AB CD GH");
    }

    #[test]
    fn cap_counts_present_pairs() {
        let mut board = Plugboard::parse("AB CD EF GH IJ KL MN OP QR");
        board.configure("ST UV");
        assert_eq!(board.pair_count(), MAX_PAIRS);
        assert_eq!(board.swap(letter('S')), letter('T'));
        assert_eq!(board.swap(letter('U')), letter('U'));
    }

    #[test]
    fn blank_tokens_do_not_clear() {
        let mut board = Plugboard::parse("AB");
        board.configure("  ");
        assert_eq!(board.to_string(), "AB");
    }

    #[test]
    fn eleventh_pair_is_dropped() {
        let board = Plugboard::parse("AB CD EF GH IJ KL MN OP QR ST UV");
        assert_eq!(board.pair_count(), MAX_PAIRS);
        assert_eq!(board.swap(letter('U')), letter('U'));
        assert_eq!(board.swap(letter('V')), letter('V'));
        assert_eq!(board.swap(letter('S')), letter('T'));
    }

    #[test]
    fn strict_rejects_and_preserves_board() {
        let mut board = Plugboard::parse("AB");
        let result = board.configure_strict("CD CE");
        assert_eq!(
            result,
            Err(ConfigError::InvalidPlug {
                token: "CE".to_string(),
                reason: PlugRejection::AlreadyPlugged(letter('C')),
            })
        );
        assert_eq!(board.to_string(), "AB");

        assert_eq!(board.configure_strict("CD EF"), Ok(()));
        assert_eq!(board.to_string(), "AB CD EF");

        assert_eq!(board.configure_strict(""), Ok(()));
        assert_eq!(board.pair_count(), 0);
    }

    #[test]
    fn strict_rejects_conflict_with_present_pair() {
        let mut board = Plugboard::parse("AB");
        let result = board.configure_strict("BC");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidPlug { reason: PlugRejection::AlreadyPlugged(_), .. })
        ));
        assert_eq!(board.to_string(), "AB");
    }

    #[test]
    fn strict_rejects_eleventh_pair() {
        let mut board = Plugboard::new();
        let result = board.configure_strict("AB CD EF GH IJ KL MN OP QR ST UV");
        assert!(matches!(result, Err(ConfigError::InvalidPlug { reason: PlugRejection::Full, .. })));
    }

    #[test]
    fn plug_reports_reason() {
        let mut board = Plugboard::new();
        assert_eq!(board.plug(letter('A'), letter('A')), Err(PlugRejection::SameLetter));
        assert_eq!(board.plug(letter('A'), letter('B')), Ok(()));
        assert_eq!(
            board.plug(letter('C'), letter('B')),
            Err(PlugRejection::AlreadyPlugged(letter('B')))
        );
    }
}
