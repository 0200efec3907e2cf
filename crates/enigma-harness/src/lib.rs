//! Test harness for the Enigma cipher core.
//!
//! # Model-Based Testing
//!
//! The `model` module provides a reference machine that works over plain
//! characters. Operations are applied to both the model and the real
//! [`enigma_core::Machine`] (through [`RealMachine`]), and their observable
//! states are compared.
//!
//! # Seeded Configurations
//!
//! [`ConfigGenerator`] produces reproducible machine configurations and
//! messages from a `u64` seed, so a failing case can be replayed exactly.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod generator;
pub mod model;
pub mod real;

pub use generator::ConfigGenerator;
pub use model::{
    ModelMachine, ModelPlugboard, ModelRotor, ObservableState, Operation, OperationError,
    OperationResult, SmallPlugboard,
};
pub use real::RealMachine;
