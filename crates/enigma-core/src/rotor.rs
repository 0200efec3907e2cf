//! Rotor: a fixed wiring plus rotational state.
//!
//! A rotor at position `P` with ring setting `R` is simulated without
//! rotating its table. The input contact is shifted by `P - R` into the
//! wiring's own frame, looked up, and shifted back, so one static table
//! serves every rotation.

use crate::{
    catalog::{FourthRotorId, RotorId, Wiring},
    letter::Letter,
};

/// Which way a signal crosses a rotor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Into the rotor stack, towards the reflector.
    In,
    /// Back out of the rotor stack, after the reflector.
    Out,
}

/// One rotor instance.
///
/// The wiring and notch set are shared `'static` catalog data; position and
/// ring setting are owned by this instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    name: &'static str,
    wiring: &'static Wiring,
    notches: &'static [Letter],
    position: Letter,
    ring: Letter,
}

impl Rotor {
    /// Stepping rotor from the catalog, at position `A` with ring setting `A`.
    pub fn new(id: RotorId) -> Self {
        Self::from_parts(id.name(), id.wiring(), id.notches())
    }

    /// Fourth rotor from the catalog, at position `A` with ring setting `A`.
    ///
    /// Fourth rotors carry no notches.
    pub fn fourth(id: FourthRotorId) -> Self {
        Self::from_parts(id.name(), id.wiring(), &[])
    }

    fn from_parts(
        name: &'static str,
        wiring: &'static Wiring,
        notches: &'static [Letter],
    ) -> Self {
        Self { name, wiring, notches, position: Letter::A, ring: Letter::A }
    }

    /// Catalog name of this rotor.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Notch letters of this rotor.
    pub fn notches(&self) -> &'static [Letter] {
        self.notches
    }

    /// Current rotational position (the letter in the window).
    pub fn position(&self) -> Letter {
        self.position
    }

    /// Ring setting.
    pub fn ring(&self) -> Letter {
        self.ring
    }

    /// Set the rotational position.
    pub fn set_position(&mut self, position: Letter) {
        self.position = position;
    }

    /// Set the ring setting.
    pub fn set_ring(&mut self, ring: Letter) {
        self.ring = ring;
    }

    /// Returns true if the next [`Rotor::advance`] will carry.
    pub fn at_notch(&self) -> bool {
        self.carries_into(self.position.successor())
    }

    /// Advance one position, wrapping Z to A.
    ///
    /// Returns true if the step carries to the neighbouring rotor: the rotor
    /// has just stepped off one of its notch letters. A rotor without notches
    /// carries when it lands on Z.
    pub fn advance(&mut self) -> bool {
        self.position = self.position.successor();
        self.carries_into(self.position)
    }

    fn carries_into(&self, position: Letter) -> bool {
        if self.notches.is_empty() {
            return position == Letter::Z;
        }
        self.notches.iter().any(|notch| notch.successor() == position)
    }

    /// Substitute one contact position in the given direction.
    pub fn map(&self, input: Letter, direction: Direction) -> Letter {
        let shift = self.position.backward(self.ring);
        let contact = input.forward(shift);
        let wired = match direction {
            Direction::In => self.wiring.forward(contact),
            Direction::Out => self.wiring.inverse(contact),
        };
        wired.backward(shift)
    }
}
