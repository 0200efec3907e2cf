//! Fuzz target for [`Plugboard`] parsing
//!
//! # Strategy
//!
//! - Raw specification strings: malformed tokens, repeated letters, odd
//!   separators, lowercase and non-ASCII input
//!
//! # Invariants
//!
//! - NEVER panic on any specification
//! - Permissive parsing always yields an involution with at most ten pairs
//! - The canonical form parses back to the same board, strictly and
//!   permissively
//! - Strict parsing onto an existing board either agrees with permissive
//!   parsing onto the same board or rejects and leaves it unchanged

#![no_main]

use enigma_core::{Letter, MAX_PAIRS, Plugboard};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|spec: &str| {
    let board = Plugboard::parse(spec);

    assert!(board.pair_count() <= MAX_PAIRS);
    for letter in Letter::all() {
        assert_eq!(board.swap(board.swap(letter)), letter);
    }

    let canonical = board.to_string();
    assert_eq!(Plugboard::parse(&canonical), board);
    let mut reparsed = Plugboard::new();
    assert!(reparsed.configure_strict(&canonical).is_ok());
    assert_eq!(reparsed, board);

    let mut permissive = Plugboard::parse("QZ");
    permissive.configure(spec);
    let mut strict = Plugboard::parse("QZ");
    match strict.configure_strict(spec) {
        Ok(()) => assert_eq!(strict, permissive),
        Err(_) => assert_eq!(strict, Plugboard::parse("QZ")),
    }
});
