//! Fuzz target comparing [`RealMachine`] with the reference model
//!
//! # Strategy
//!
//! - Operation sequences: keystrokes interleaved with every reconfiguration
//!   an operator can make, decoded straight from fuzzer bytes
//!
//! # Invariants
//!
//! - Model and real machine return the same result for every operation
//! - Observable state (rotors, positions, rings, fourth rotor, reflector,
//!   plugboard) matches after every operation

#![no_main]

use enigma_core::MachineConfig;
use enigma_harness::{ModelMachine, Operation, RealMachine};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|ops: Vec<Operation>| {
    let mut model = ModelMachine::new();
    let mut real = RealMachine::new(&MachineConfig::default());

    for (i, op) in ops.iter().enumerate() {
        assert_eq!(model.apply(op), real.apply(op), "divergence at operation {i}: {op:?}");
        assert_eq!(model.observable_state(), real.observable_state(), "state after {i}: {op:?}");
    }
});
