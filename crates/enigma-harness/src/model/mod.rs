//! Reference model for model-based testing.
//!
//! The model is a deliberately naive Enigma: characters instead of typed
//! letters, wiring strings instead of precomputed tables, and a linear search
//! instead of an inverse table. It serves as the oracle against which the real
//! machine is verified.
//!
//! # Design Principles
//!
//! - Simplicity: every step should be checkable by hand
//! - Independence: no lookup tables shared with `enigma-core`
//! - Deterministic: same operations produce same outputs

mod machine;
pub mod operation;
mod plugboard;

pub use machine::{ModelMachine, ModelRotor, ObservableState};
pub use operation::{Operation, OperationError, OperationResult, SmallPlugboard};
pub use plugboard::ModelPlugboard;
