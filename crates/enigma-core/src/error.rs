//! Engine error types.

use thiserror::Error;

use crate::plugboard::PlugRejection;

/// Errors from building or reconfiguring a machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Rotor name is not in the stepping rotor catalog.
    #[error("unknown rotor: {name}")]
    UnknownRotor {
        /// The name that failed to resolve.
        name: String,
    },

    /// Rotor name is not in the fourth (non-stepping) rotor catalog.
    #[error("unknown fourth rotor: {name}")]
    UnknownFourthRotor {
        /// The name that failed to resolve.
        name: String,
    },

    /// Reflector name is not in the reflector catalog.
    #[error("unknown reflector: {name}")]
    UnknownReflector {
        /// The name that failed to resolve.
        name: String,
    },

    /// Character is not a letter of the alphabet.
    #[error("invalid letter: {character:?}")]
    InvalidLetter {
        /// The offending character.
        character: char,
    },

    /// A rotor position or ring setting string could not be parsed.
    #[error("invalid rotor settings {input:?}: {reason}")]
    InvalidSettings {
        /// The input as given.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Strict plugboard parsing rejected a token.
    #[error("rejected plugboard token {token:?}: {reason}")]
    InvalidPlug {
        /// The token as given.
        token: String,
        /// Why it was rejected.
        reason: PlugRejection,
    },

    /// Operation targets the fourth rotor but none is installed.
    #[error("no fourth rotor installed")]
    NoFourthRotor,
}

/// Errors from operating a machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnigmaError {
    /// Message contains a character that is neither A-Z nor a space.
    #[error("invalid character {character:?} at index {index}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Zero-based character index within the message.
        index: usize,
    },

    /// Configuration was rejected.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),
}

impl EnigmaError {
    /// Returns true if the error was caused by message input rather than
    /// configuration.
    ///
    /// Input errors are fixed by correcting the message; the machine is
    /// still configured as before.
    pub fn is_input_error(&self) -> bool {
        match self {
            Self::InvalidCharacter { .. } => true,
            Self::Configuration(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_character_display() {
        let err = EnigmaError::InvalidCharacter { character: '7', index: 3 };
        assert_eq!(err.to_string(), "invalid character '7' at index 3");
        assert!(err.is_input_error());
    }

    #[test]
    fn unknown_rotor_names_identity() {
        let err = ConfigError::UnknownRotor { name: "IX".to_string() };
        assert_eq!(err.to_string(), "unknown rotor: IX");
    }

    #[test]
    fn configuration_wraps_config_error() {
        let err: EnigmaError = ConfigError::UnknownReflector { name: "D".to_string() }.into();
        assert_eq!(err.to_string(), "configuration error: unknown reflector: D");
        assert!(!err.is_input_error());
    }

    #[test]
    fn invalid_plug_display() {
        let err = ConfigError::InvalidPlug {
            token: "AA".to_string(),
            reason: PlugRejection::SameLetter,
        };
        assert_eq!(err.to_string(), "rejected plugboard token \"AA\": letter plugged to itself");
    }
}
