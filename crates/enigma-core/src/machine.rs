//! The cipher machine: rotor stack orchestration and stepping.
//!
//! # Keystroke
//!
//! ```text
//! step()  right ── carry ──► middle ── carry ──► left + middle again
//!
//! plugboard ─► right ─► middle ─► left ─► [fourth] ─► reflector
//!                                                        │
//! plugboard ◄─ right ◄─ middle ◄─ left ◄─ [fourth] ◄─────┘
//! ```
//!
//! The right rotor advances on every keystroke. When it carries, the middle
//! rotor advances; when the middle rotor carries in turn, the left rotor
//! advances and the middle rotor advances a second time within the same
//! keystroke (the double-step). The fourth rotor never moves.
//!
//! # Invariants
//!
//! - Enciphering is an involution for a fixed machine state
//! - No letter enciphers to itself
//! - Spaces pass through without stepping
//! - Configuration cannot change while a message is being processed:
//!   [`Process`] holds the machine's unique borrow

use std::{iter::FusedIterator, str::Chars};

use crate::{
    catalog::{FourthRotorId, ReflectorId, RotorId},
    config::{FourthRotorConfig, MachineConfig, RotorChoice, RotorSettings, Slot},
    error::{ConfigError, EnigmaError},
    letter::Letter,
    plugboard::Plugboard,
    reflector::Reflector,
    rotor::{Direction, Rotor},
};

/// Character copied to the output without touching the cipher path.
pub const PASS_THROUGH: char = ' ';

/// A rotor cipher machine.
///
/// Each machine owns its rotor state. Cloning yields an independent machine
/// that shares only the immutable catalog tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    choice: RotorChoice,
    left: Rotor,
    middle: Rotor,
    right: Rotor,
    fourth: Option<(FourthRotorId, Rotor)>,
    reflector: Reflector,
    plugboard: Plugboard,
}

impl Machine {
    /// Build a machine from a configuration.
    ///
    /// The plugboard specification is parsed permissively; use
    /// [`Machine::set_plugboard_strict`] to reject bad tokens.
    pub fn new(config: &MachineConfig) -> Self {
        let rotor_at = |slot: Slot| {
            let mut rotor = Rotor::new(config.rotors.get(slot));
            rotor.set_ring(config.rings.get(slot));
            rotor.set_position(config.positions.get(slot));
            rotor
        };

        let fourth = config.fourth.map(|fourth| {
            let mut rotor = Rotor::fourth(fourth.rotor);
            rotor.set_ring(fourth.ring);
            rotor.set_position(fourth.position);
            (fourth.rotor, rotor)
        });

        let machine = Self {
            choice: config.rotors,
            left: rotor_at(Slot::Left),
            middle: rotor_at(Slot::Middle),
            right: rotor_at(Slot::Right),
            fourth,
            reflector: Reflector::new(config.reflector),
            plugboard: Plugboard::parse(&config.plugboard),
        };

        tracing::debug!(
            rotors = %config.rotors,
            fourth = ?config.fourth.map(|f| f.rotor),
            reflector = %config.reflector,
            rings = %config.rings,
            positions = %config.positions,
            plugboard = %machine.plugboard,
            "machine configured"
        );

        machine
    }

    /// Snapshot of the current configuration, including current positions.
    pub fn config(&self) -> MachineConfig {
        let fourth = self.fourth.as_ref().map(|(id, rotor)| FourthRotorConfig {
            rotor: *id,
            position: rotor.position(),
            ring: rotor.ring(),
        });

        MachineConfig {
            rotors: self.choice,
            fourth,
            reflector: self.reflector.id(),
            rings: self.ring_settings(),
            positions: self.positions(),
            plugboard: self.plugboard.to_string(),
        }
    }

    /// Rotor in a stepping slot.
    pub fn rotor(&self, slot: Slot) -> &Rotor {
        match slot {
            Slot::Left => &self.left,
            Slot::Middle => &self.middle,
            Slot::Right => &self.right,
        }
    }

    fn rotor_mut(&mut self, slot: Slot) -> &mut Rotor {
        match slot {
            Slot::Left => &mut self.left,
            Slot::Middle => &mut self.middle,
            Slot::Right => &mut self.right,
        }
    }

    /// Rotor order of the stepping slots.
    pub fn rotor_choice(&self) -> RotorChoice {
        self.choice
    }

    /// The fourth rotor, if installed.
    pub fn fourth_rotor(&self) -> Option<&Rotor> {
        self.fourth.as_ref().map(|(_, rotor)| rotor)
    }

    /// Active reflector.
    pub fn reflector(&self) -> ReflectorId {
        self.reflector.id()
    }

    /// Plugboard.
    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    /// Current positions of the stepping rotors.
    pub fn positions(&self) -> RotorSettings {
        RotorSettings::new(self.left.position(), self.middle.position(), self.right.position())
    }

    /// Ring settings of the stepping rotors.
    pub fn ring_settings(&self) -> RotorSettings {
        RotorSettings::new(self.left.ring(), self.middle.ring(), self.right.ring())
    }

    /// Put a different catalog rotor in a slot.
    ///
    /// The new rotor takes over the slot's position and ring setting.
    pub fn set_rotor_choice(&mut self, slot: Slot, id: RotorId) {
        let current = self.rotor(slot);
        let mut rotor = Rotor::new(id);
        rotor.set_position(current.position());
        rotor.set_ring(current.ring());
        tracing::debug!(?slot, from = current.name(), to = id.name(), "rotor replaced");
        *self.rotor_mut(slot) = rotor;
        match slot {
            Slot::Left => self.choice.left = id,
            Slot::Middle => self.choice.middle = id,
            Slot::Right => self.choice.right = id,
        }
    }

    /// Install, replace or remove (`None`) the fourth rotor.
    ///
    /// A newly installed fourth rotor starts at position `A`, ring `A`.
    pub fn set_fourth_rotor(&mut self, id: Option<FourthRotorId>) {
        tracing::debug!(fourth = ?id, "fourth rotor changed");
        self.fourth = id.map(|id| (id, Rotor::fourth(id)));
    }

    /// Set the fourth rotor's fixed position.
    pub fn set_fourth_position(&mut self, position: Letter) -> Result<(), ConfigError> {
        let (_, rotor) = self.fourth.as_mut().ok_or(ConfigError::NoFourthRotor)?;
        rotor.set_position(position);
        Ok(())
    }

    /// Set the fourth rotor's ring setting.
    pub fn set_fourth_ring(&mut self, ring: Letter) -> Result<(), ConfigError> {
        let (_, rotor) = self.fourth.as_mut().ok_or(ConfigError::NoFourthRotor)?;
        rotor.set_ring(ring);
        Ok(())
    }

    /// Swap the reflector. Rotors and plugboard are untouched.
    pub fn set_reflector(&mut self, id: ReflectorId) {
        tracing::debug!(reflector = %id, "reflector changed");
        self.reflector = Reflector::new(id);
    }

    /// Set the ring settings of the stepping rotors.
    pub fn set_ring_settings(&mut self, rings: RotorSettings) {
        tracing::debug!(%rings, "ring settings changed");
        self.left.set_ring(rings.left);
        self.middle.set_ring(rings.middle);
        self.right.set_ring(rings.right);
    }

    /// Set the positions of the stepping rotors.
    pub fn set_rotor_positions(&mut self, positions: RotorSettings) {
        tracing::debug!(%positions, "rotor positions changed");
        self.left.set_position(positions.left);
        self.middle.set_position(positions.middle);
        self.right.set_position(positions.right);
    }

    /// Add plugboard pairs, skipping bad tokens. An empty spec clears the board.
    pub fn set_plugboard(&mut self, spec: &str) {
        self.plugboard.configure(spec);
        tracing::debug!(plugboard = %self.plugboard, "plugboard changed");
    }

    /// Add plugboard pairs, failing on the first bad token.
    pub fn set_plugboard_strict(&mut self, spec: &str) -> Result<(), ConfigError> {
        self.plugboard.configure_strict(spec)?;
        tracing::debug!(plugboard = %self.plugboard, "plugboard changed");
        Ok(())
    }

    /// Advance the stepping rotors by one keystroke.
    pub fn step(&mut self) {
        if self.right.advance() && self.middle.advance() {
            self.left.advance();
            self.middle.advance();
            tracing::trace!(positions = %self.positions(), "middle rotor double-stepped");
        }
    }

    /// Encipher one letter at the current state, without stepping.
    pub fn encipher_one(&self, letter: Letter) -> Letter {
        let mut x = self.plugboard.swap(letter);

        x = self.right.map(x, Direction::In);
        x = self.middle.map(x, Direction::In);
        x = self.left.map(x, Direction::In);
        if let Some((_, fourth)) = &self.fourth {
            x = fourth.map(x, Direction::In);
        }

        x = self.reflector.reflect(x);

        if let Some((_, fourth)) = &self.fourth {
            x = fourth.map(x, Direction::Out);
        }
        x = self.left.map(x, Direction::Out);
        x = self.middle.map(x, Direction::Out);
        x = self.right.map(x, Direction::Out);

        self.plugboard.swap(x)
    }

    /// One keystroke: step, then encipher.
    pub fn press(&mut self, letter: Letter) -> Letter {
        self.step();
        self.encipher_one(letter)
    }

    /// Lazily encipher `text`, one output per input character.
    ///
    /// The first character outside A-Z (other than a space) yields
    /// [`EnigmaError::InvalidCharacter`] and ends the sequence; letters before
    /// it have already stepped the machine.
    pub fn process<'a>(&'a mut self, text: &'a str) -> Process<'a> {
        Process { machine: self, chars: text.chars().enumerate(), failed: false }
    }

    /// Encipher a whole message.
    ///
    /// The text is checked before any keystroke, so on error the machine is
    /// left exactly as it was.
    pub fn encipher(&mut self, text: &str) -> Result<String, EnigmaError> {
        validate(text)?;
        self.process(text).collect()
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new(&MachineConfig::default())
    }
}

/// Check that `text` contains only A-Z and spaces.
pub fn validate(text: &str) -> Result<(), EnigmaError> {
    match text.chars().enumerate().find(|&(_, c)| c != PASS_THROUGH && !c.is_ascii_uppercase()) {
        Some((index, character)) => Err(EnigmaError::InvalidCharacter { character, index }),
        None => Ok(()),
    }
}

/// Iterator returned by [`Machine::process`].
#[derive(Debug)]
pub struct Process<'a> {
    machine: &'a mut Machine,
    chars: std::iter::Enumerate<Chars<'a>>,
    failed: bool,
}

impl Iterator for Process<'_> {
    type Item = Result<char, EnigmaError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let (index, character) = self.chars.next()?;
        if character == PASS_THROUGH {
            return Some(Ok(character));
        }

        match Letter::from_char(character) {
            Some(letter) => Some(Ok(self.machine.press(letter).to_char())),
            None => {
                self.failed = true;
                Some(Err(EnigmaError::InvalidCharacter { character, index }))
            },
        }
    }
}

impl FusedIterator for Process<'_> {}
