//! Enigma rotor cipher engine.
//!
//! This crate models the cipher core of an Enigma-family rotor machine: a
//! stack of rotating substitution rotors, an involutive reflector and a
//! plugboard. Each keystroke steps the rotors (including the middle-rotor
//! double-step) and then sends the letter through the stack and back.
//!
//! # Architecture
//!
//! ```text
//! enigma-core
//!   ├─ Letter        (alphabet value and contact position, 0-based)
//!   ├─ catalog       (static rotor / fourth rotor / reflector tables)
//!   ├─ Rotor         (offset-lookup-unoffset substitution + stepping)
//!   ├─ Reflector     (fixed involution)
//!   ├─ Plugboard     (permissive pair parsing, symmetric swap)
//!   └─ Machine       (stepping protocol + keystroke path)
//! ```
//!
//! # Example
//!
//! ```
//! use enigma_core::{Machine, MachineConfig};
//!
//! let config = MachineConfig { plugboard: "AB CD".to_string(), ..MachineConfig::default() };
//!
//! let mut sender = Machine::new(&config);
//! let cipher = sender.encipher("ATTACK AT DAWN").unwrap();
//!
//! let mut receiver = Machine::new(&config);
//! assert_eq!(receiver.encipher(&cipher).unwrap(), "ATTACK AT DAWN");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod letter;
pub mod machine;
pub mod plugboard;
pub mod reflector;
pub mod rotor;

pub use catalog::{FourthRotorId, ReflectorId, RotorId, Wiring};
pub use config::{FourthRotorConfig, MachineConfig, RotorChoice, RotorSettings, Slot};
pub use error::{ConfigError, EnigmaError};
pub use letter::{ALPHABET_LEN, Letter};
pub use machine::{Machine, PASS_THROUGH, Process, validate};
pub use plugboard::{MAX_PAIRS, PlugRejection, Plugboard};
pub use reflector::Reflector;
pub use rotor::{Direction, Rotor};
