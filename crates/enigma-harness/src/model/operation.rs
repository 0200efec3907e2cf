//! Operations for model-based testing.
//!
//! Operations represent every action an operator can take on a machine. They
//! are generated randomly by proptest (or decoded by the fuzzer) and applied to
//! both the model and the real implementation.
//!
//! Catalog entries and letters are carried as raw `u8` values and reduced
//! modulo the catalog or alphabet size when applied, so every generated value
//! is meaningful.

use arbitrary::Arbitrary;

/// Operations that can be applied to a machine.
#[derive(Debug, Clone, Arbitrary)]
pub enum Operation {
    /// Press a letter key.
    Press {
        /// Letter index, reduced modulo 26.
        letter: u8,
    },

    /// Send a space through the machine.
    Space,

    /// Set the three stepping rotor positions.
    SetPositions {
        /// Left, middle and right letter indices.
        letters: [u8; 3],
    },

    /// Set the three stepping rotor ring settings.
    SetRings {
        /// Left, middle and right letter indices.
        letters: [u8; 3],
    },

    /// Replace the rotor in one slot.
    SetRotor {
        /// Slot: 0 = left, 1 = middle, 2 = right (reduced modulo 3).
        slot: u8,
        /// Catalog index into rotors I..VIII.
        rotor: u8,
    },

    /// Replace the reflector.
    SetReflector {
        /// Catalog index into A, B, C, B-thin, C-thin.
        reflector: u8,
    },

    /// Install or remove the fourth rotor.
    SetFourth {
        /// Catalog index into Beta, Gamma; `None` removes the rotor.
        rotor: Option<u8>,
    },

    /// Set the fourth rotor's position.
    ///
    /// Fails when no fourth rotor is installed.
    SetFourthPosition {
        /// Letter index.
        letter: u8,
    },

    /// Set the fourth rotor's ring setting.
    ///
    /// Fails when no fourth rotor is installed.
    SetFourthRing {
        /// Letter index.
        letter: u8,
    },

    /// Add plugboard pairs permissively; an empty spec clears the board.
    SetPlugboard {
        /// Pair specification.
        spec: SmallPlugboard,
    },
}

/// Compact plugboard specification for testing.
///
/// Pairs are reduced modulo 26, so self-plugs, reused letters and more than
/// ten pairs all occur naturally and exercise the permissive parser.
#[derive(Debug, Clone, Arbitrary)]
pub struct SmallPlugboard {
    /// Letter index pairs.
    pub pairs: Vec<(u8, u8)>,
    /// Bit 0 lowercases the output, bit 1 appends a malformed token.
    pub noise: u8,
}

impl SmallPlugboard {
    /// Expand to a specification string such as `"AB CD"`.
    pub fn to_spec(&self) -> String {
        let mut tokens: Vec<String> = self
            .pairs
            .iter()
            .map(|&(a, b)| [letter(a), letter(b)].iter().collect())
            .collect();

        if self.noise & 0b10 != 0 {
            tokens.push("Q7".to_string());
        }

        let spec = tokens.join(" ");
        if self.noise & 0b01 != 0 { spec.to_ascii_lowercase() } else { spec }
    }
}

/// Uppercase letter for an index, reduced modulo 26.
pub fn letter(index: u8) -> char {
    char::from(b'A' + index % 26)
}

/// Result of applying an operation.
///
/// Used to compare model and real machine behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationResult {
    /// Operation succeeded without output.
    Ok,

    /// A key was pressed and this character came out.
    Output(char),

    /// Operation failed with expected error.
    Error(OperationError),
}

/// Expected errors that can occur during operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationError {
    /// Fourth rotor setting changed while no fourth rotor is installed.
    NoFourthRotor,

    /// Any other configuration error from the real machine. The model never
    /// produces this.
    Rejected(String),
}

impl OperationResult {
    /// Check if operation succeeded.
    pub fn is_ok(&self) -> bool {
        !self.is_err()
    }

    /// Check if operation failed.
    pub fn is_err(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}
