//! Reflector: a fixed involution applied once per keystroke.

use crate::{
    catalog::{ReflectorId, Wiring},
    letter::Letter,
};

/// The active reflector of a machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reflector {
    id: ReflectorId,
    wiring: &'static Wiring,
}

impl Reflector {
    /// Reflector from the catalog.
    pub fn new(id: ReflectorId) -> Self {
        Self { id, wiring: id.wiring() }
    }

    /// Catalog identity.
    pub fn id(&self) -> ReflectorId {
        self.id
    }

    /// Send a contact back through the rotor stack.
    pub fn reflect(&self, input: Letter) -> Letter {
        self.wiring.forward(input)
    }
}

impl Default for Reflector {
    fn default() -> Self {
        Self::new(ReflectorId::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflect_is_involution_without_fixed_points() {
        for id in ReflectorId::ALL {
            let reflector = Reflector::new(id);
            for x in Letter::all() {
                let y = reflector.reflect(x);
                assert_ne!(x, y, "{id} reflects {x} to itself");
                assert_eq!(reflector.reflect(y), x, "{id} is not symmetric at {x}");
            }
        }
    }

    #[test]
    fn reflector_b_table() {
        let reflector = Reflector::new(ReflectorId::B);
        assert_eq!(reflector.reflect(Letter::A).to_char(), 'Y');
        assert_eq!(reflector.reflect(Letter::Z).to_char(), 'T');
    }
}
