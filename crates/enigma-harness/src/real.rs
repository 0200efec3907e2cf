//! Real machine wrapper that mirrors [`ModelMachine`]'s interface.
//!
//! [`ModelMachine`]: crate::ModelMachine

use enigma_core::{
    ConfigError, FourthRotorId, Letter, Machine, MachineConfig, ReflectorId, RotorId,
    RotorSettings, Slot,
};

use crate::model::{ObservableState, Operation, OperationError, OperationResult};

const SLOTS: [Slot; 3] = [Slot::Left, Slot::Middle, Slot::Right];

/// [`Machine`] driven by model [`Operation`]s.
#[derive(Debug, Clone)]
pub struct RealMachine {
    machine: Machine,
}

impl RealMachine {
    /// Wrap a machine built from `config`.
    pub fn new(config: &MachineConfig) -> Self {
        Self { machine: Machine::new(config) }
    }

    /// The wrapped machine.
    pub fn machine(&self) -> &Machine {
        &self.machine
    }

    /// Apply an operation and return the result.
    pub fn apply(&mut self, op: &Operation) -> OperationResult {
        match op {
            Operation::Press { letter } => {
                OperationResult::Output(self.machine.press(Letter::wrapping(*letter)).to_char())
            },
            Operation::Space => match self.machine.encipher(" ").as_deref() {
                Ok(" ") => OperationResult::Output(' '),
                _ => OperationResult::Ok,
            },
            Operation::SetPositions { letters } => {
                self.machine.set_rotor_positions(settings(*letters));
                OperationResult::Ok
            },
            Operation::SetRings { letters } => {
                self.machine.set_ring_settings(settings(*letters));
                OperationResult::Ok
            },
            Operation::SetRotor { slot, rotor } => {
                let id = RotorId::ALL[usize::from(*rotor) % RotorId::ALL.len()];
                self.machine.set_rotor_choice(SLOTS[usize::from(slot % 3)], id);
                OperationResult::Ok
            },
            Operation::SetReflector { reflector } => {
                let id = ReflectorId::ALL[usize::from(*reflector) % ReflectorId::ALL.len()];
                self.machine.set_reflector(id);
                OperationResult::Ok
            },
            Operation::SetFourth { rotor } => {
                let id = rotor.map(|r| FourthRotorId::ALL[usize::from(r) % 2]);
                self.machine.set_fourth_rotor(id);
                OperationResult::Ok
            },
            Operation::SetFourthPosition { letter } => {
                outcome(self.machine.set_fourth_position(Letter::wrapping(*letter)))
            },
            Operation::SetFourthRing { letter } => {
                outcome(self.machine.set_fourth_ring(Letter::wrapping(*letter)))
            },
            Operation::SetPlugboard { spec } => {
                self.machine.set_plugboard(&spec.to_spec());
                OperationResult::Ok
            },
        }
    }

    /// Get the observable state for oracle comparison.
    pub fn observable_state(&self) -> ObservableState {
        let machine = &self.machine;
        ObservableState {
            rotors: SLOTS.map(|slot| machine.rotor(slot).name()),
            positions: machine.positions().to_string(),
            rings: machine.ring_settings().to_string(),
            fourth: machine
                .fourth_rotor()
                .map(|rotor| (rotor.name(), rotor.position().to_char(), rotor.ring().to_char())),
            reflector: machine.reflector().name(),
            plugboard: machine.plugboard().to_string(),
        }
    }
}

fn settings([left, middle, right]: [u8; 3]) -> RotorSettings {
    RotorSettings::new(Letter::wrapping(left), Letter::wrapping(middle), Letter::wrapping(right))
}

fn outcome(result: Result<(), ConfigError>) -> OperationResult {
    match result {
        Ok(()) => OperationResult::Ok,
        Err(ConfigError::NoFourthRotor) => OperationResult::Error(OperationError::NoFourthRotor),
        Err(other) => OperationResult::Error(OperationError::Rejected(other.to_string())),
    }
}
