//! Fixed catalogs of rotor and reflector wirings.
//!
//! Wiring tables are `static` and built at compile time, so every machine
//! shares them by reference. A catalog entry is selected through a closed
//! enum ([`RotorId`], [`FourthRotorId`], [`ReflectorId`]); parsing a name
//! from text is the only place an unknown identity can appear.
//!
//! # Invariants
//!
//! - Every wiring is a bijection over the alphabet
//! - Every reflector is an involution without fixed points
//! - Stepping rotors and fourth rotors are disjoint catalogs

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    error::ConfigError,
    letter::{ALPHABET_LEN, Letter},
};

const LEN: usize = ALPHABET_LEN as usize;

/// An immutable permutation of the alphabet with its inverse.
#[derive(Debug, PartialEq, Eq)]
pub struct Wiring {
    forward: [Letter; LEN],
    inverse: [Letter; LEN],
}

impl Wiring {
    const fn from_ascii(table: &[u8; LEN]) -> Self {
        let mut forward = [Letter::A; LEN];
        let mut inverse = [Letter::A; LEN];
        let mut i = 0;
        while i < LEN {
            let out = Letter::from_ascii(table[i]);
            forward[i] = out;
            inverse[out.index() as usize] = Letter::wrapping(i as u8);
            i += 1;
        }
        Self { forward, inverse }
    }

    /// Output contact for `input` entering from the alphabet side.
    pub fn forward(&self, input: Letter) -> Letter {
        self.forward[usize::from(input.index())]
    }

    /// Output contact for `input` entering from the wired side.
    pub fn inverse(&self, input: Letter) -> Letter {
        self.inverse[usize::from(input.index())]
    }

    /// Returns true if every letter appears exactly once in the table.
    pub fn is_bijection(&self) -> bool {
        let mut seen = [false; LEN];
        for out in self.forward {
            seen[usize::from(out.index())] = true;
        }
        seen.iter().all(|&s| s) && Letter::all().all(|l| self.inverse(self.forward(l)) == l)
    }

    /// Returns true if applying the wiring twice is the identity.
    pub fn is_involution(&self) -> bool {
        Letter::all().all(|l| self.forward(self.forward(l)) == l)
    }

    /// Returns true if some letter is wired to itself.
    pub fn has_fixed_point(&self) -> bool {
        Letter::all().any(|l| self.forward(l) == l)
    }
}

impl fmt::Display for Wiring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.forward.iter().try_for_each(|l| write!(f, "{l}"))
    }
}

struct Entry {
    name: &'static str,
    wiring: Wiring,
    notches: &'static [Letter],
}

impl Entry {
    const fn new(name: &'static str, table: &[u8; LEN], notches: &'static [Letter]) -> Self {
        Self { name, wiring: Wiring::from_ascii(table), notches }
    }
}

const NOTCH_Q: &[Letter] = &[Letter::from_ascii(b'Q')];
const NOTCH_E: &[Letter] = &[Letter::from_ascii(b'E')];
const NOTCH_V: &[Letter] = &[Letter::from_ascii(b'V')];
const NOTCH_J: &[Letter] = &[Letter::from_ascii(b'J')];
const NOTCH_Z: &[Letter] = &[Letter::from_ascii(b'Z')];
const NOTCH_ZM: &[Letter] = &[Letter::from_ascii(b'Z'), Letter::from_ascii(b'M')];

static ROTORS: [Entry; 8] = [
    Entry::new("I", b"EKMFLGDQVZNTOWYHXUSPAIBRCJ", NOTCH_Q),
    Entry::new("II", b"AJDKSIRUXBLHWTMCQGZNPYFVOE", NOTCH_E),
    Entry::new("III", b"BDFHJLCPRTXVZNYEIWGAKMUSQO", NOTCH_V),
    Entry::new("IV", b"ESOVPZJAYQUIRHXLNFTGKDCMWB", NOTCH_J),
    Entry::new("V", b"VZBRGITYUPSDNHLXAWMJQOFECK", NOTCH_Z),
    Entry::new("VI", b"JPGVOUMFYQBENHZRDKASXLICTW", NOTCH_ZM),
    Entry::new("VII", b"NZJHGRCXMYSWBOUFAIVLPEKQDT", NOTCH_ZM),
    Entry::new("VIII", b"FKQHTLXOCBJSPDZRAMEWNIUYGV", NOTCH_ZM),
];

static FOURTH_ROTORS: [Entry; 2] = [
    Entry::new("Beta", b"LEYJVCNIXWPBQMDRTAKZGFUHOS", &[]),
    Entry::new("Gamma", b"FSOKANUERHMBTIYCWLQPZXVGJD", &[]),
];

static REFLECTORS: [Entry; 5] = [
    Entry::new("A", b"EJMZALYXVBWFCRQUONTSPIKHGD", &[]),
    Entry::new("B", b"YRUHQSLDPXNGOKMIEBFZCWVJAT", &[]),
    Entry::new("C", b"FVPJIAOYEDRZXWGCTKUQSBNMHL", &[]),
    Entry::new("B-thin", b"ENKQAUYWJICOPBLMDXZVFTHRGS", &[]),
    Entry::new("C-thin", b"RDOBJNTKVEHMLFCWZAXGYIPSUQ", &[]),
];

/// Case-insensitive name match that ignores `-`, `_` and spaces.
fn name_matches(candidate: &str, name: &str) -> bool {
    let normalize = |s: &str| {
        s.chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect::<String>()
    };
    normalize(candidate) == normalize(name)
}

/// Stepping rotor identity.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotorId {
    /// Rotor I, notch Q.
    I,
    /// Rotor II, notch E.
    II,
    /// Rotor III, notch V.
    III,
    /// Rotor IV, notch J.
    IV,
    /// Rotor V, notch Z.
    V,
    /// Rotor VI, notches Z and M.
    VI,
    /// Rotor VII, notches Z and M.
    VII,
    /// Rotor VIII, notches Z and M.
    VIII,
}

impl RotorId {
    /// Every stepping rotor in catalog order.
    pub const ALL: [Self; 8] =
        [Self::I, Self::II, Self::III, Self::IV, Self::V, Self::VI, Self::VII, Self::VIII];

    fn entry(self) -> &'static Entry {
        &ROTORS[self as usize]
    }

    /// Catalog name (`"I"` … `"VIII"`).
    pub fn name(self) -> &'static str {
        self.entry().name
    }

    /// Wiring table.
    pub fn wiring(self) -> &'static Wiring {
        &self.entry().wiring
    }

    /// Notch letters: advancing off one of these carries to the next rotor.
    pub fn notches(self) -> &'static [Letter] {
        self.entry().notches
    }
}

/// Non-stepping fourth rotor identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FourthRotorId {
    /// Greek rotor Beta.
    Beta,
    /// Greek rotor Gamma.
    Gamma,
}

impl FourthRotorId {
    /// Every fourth rotor in catalog order.
    pub const ALL: [Self; 2] = [Self::Beta, Self::Gamma];

    fn entry(self) -> &'static Entry {
        &FOURTH_ROTORS[self as usize]
    }

    /// Catalog name.
    pub fn name(self) -> &'static str {
        self.entry().name
    }

    /// Wiring table.
    pub fn wiring(self) -> &'static Wiring {
        &self.entry().wiring
    }
}

/// Reflector identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReflectorId {
    /// Reflector A.
    #[default]
    A,
    /// Reflector B.
    B,
    /// Reflector C.
    C,
    /// Thin reflector B, paired with a fourth rotor.
    #[serde(rename = "B-thin")]
    BThin,
    /// Thin reflector C, paired with a fourth rotor.
    #[serde(rename = "C-thin")]
    CThin,
}

impl ReflectorId {
    /// Every reflector in catalog order.
    pub const ALL: [Self; 5] = [Self::A, Self::B, Self::C, Self::BThin, Self::CThin];

    fn entry(self) -> &'static Entry {
        &REFLECTORS[self as usize]
    }

    /// Catalog name.
    pub fn name(self) -> &'static str {
        self.entry().name
    }

    /// Wiring table.
    pub fn wiring(self) -> &'static Wiring {
        &self.entry().wiring
    }
}

macro_rules! catalog_name_impls {
    ($id:ty, $error:ident) => {
        impl fmt::Display for $id {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $id {
            type Err = ConfigError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .into_iter()
                    .find(|id| name_matches(s, id.name()))
                    .ok_or_else(|| ConfigError::$error { name: s.to_string() })
            }
        }
    };
}

catalog_name_impls!(RotorId, UnknownRotor);
catalog_name_impls!(FourthRotorId, UnknownFourthRotor);
catalog_name_impls!(ReflectorId, UnknownReflector);
