//! Machine configuration.
//!
//! [`MachineConfig`] is a plain value describing everything an operator
//! sets on a machine before a message: rotor order, optional fourth rotor,
//! reflector, ring settings, start positions and plugboard.
//!
//! Setting strings are written left to right as seen through the machine's
//! windows, so positions `"AAZ"` mean left = A, middle = A, right = Z.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    catalog::{FourthRotorId, ReflectorId, RotorId},
    error::ConfigError,
    letter::Letter,
};

/// Stepping rotor slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Leftmost stepping rotor, next to the reflector.
    Left,
    /// Middle rotor.
    Middle,
    /// Rightmost rotor, next to the plugboard. Steps on every keystroke.
    Right,
}

/// One letter per stepping rotor, used for positions and ring settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RotorSettings {
    /// Left rotor.
    pub left: Letter,
    /// Middle rotor.
    pub middle: Letter,
    /// Right rotor.
    pub right: Letter,
}

impl RotorSettings {
    /// Settings from three letters, left to right.
    pub const fn new(left: Letter, middle: Letter, right: Letter) -> Self {
        Self { left, middle, right }
    }

    /// Same letter on every rotor.
    pub const fn uniform(letter: Letter) -> Self {
        Self::new(letter, letter, letter)
    }

    /// Letter for one slot.
    pub fn get(&self, slot: Slot) -> Letter {
        match slot {
            Slot::Left => self.left,
            Slot::Middle => self.middle,
            Slot::Right => self.right,
        }
    }
}

impl Default for RotorSettings {
    fn default() -> Self {
        Self::uniform(Letter::A)
    }
}

impl fmt::Display for RotorSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.left, self.middle, self.right)
    }
}

impl FromStr for RotorSettings {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ConfigError::InvalidSettings {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let letters = s
            .chars()
            .map(Letter::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| invalid("settings must be letters A-Z"))?;

        match letters.as_slice() {
            &[left, middle, right] => Ok(Self::new(left, middle, right)),
            _ => Err(invalid("expected exactly three letters")),
        }
    }
}

impl TryFrom<String> for RotorSettings {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<RotorSettings> for String {
    fn from(settings: RotorSettings) -> Self {
        settings.to_string()
    }
}

/// Rotor order, one catalog rotor per stepping slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RotorChoice {
    /// Left rotor.
    pub left: RotorId,
    /// Middle rotor.
    pub middle: RotorId,
    /// Right rotor.
    pub right: RotorId,
}

impl RotorChoice {
    /// Rotor for one slot.
    pub fn get(&self, slot: Slot) -> RotorId {
        match slot {
            Slot::Left => self.left,
            Slot::Middle => self.middle,
            Slot::Right => self.right,
        }
    }
}

impl Default for RotorChoice {
    fn default() -> Self {
        Self { left: RotorId::III, middle: RotorId::II, right: RotorId::I }
    }
}

/// Space-separated rotor names, left to right, e.g. `"III II I"`.
impl FromStr for RotorChoice {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let names: Vec<&str> = s.split_whitespace().collect();
        let &[left, middle, right] = names.as_slice() else {
            return Err(ConfigError::InvalidSettings {
                input: s.to_string(),
                reason: "expected exactly three rotor names".to_string(),
            });
        };
        Ok(Self { left: left.parse()?, middle: middle.parse()?, right: right.parse()? })
    }
}

impl fmt::Display for RotorChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.middle, self.right)
    }
}

/// Non-stepping fourth rotor and its fixed settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FourthRotorConfig {
    /// Catalog rotor.
    pub rotor: FourthRotorId,
    /// Rotational position, fixed for the message.
    #[serde(default = "default_letter")]
    pub position: Letter,
    /// Ring setting.
    #[serde(default = "default_letter")]
    pub ring: Letter,
}

const fn default_letter() -> Letter {
    Letter::A
}

impl FourthRotorConfig {
    /// Fourth rotor at position `A`, ring setting `A`.
    pub const fn new(rotor: FourthRotorId) -> Self {
        Self { rotor, position: Letter::A, ring: Letter::A }
    }
}

/// Complete machine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Stepping rotor order.
    pub rotors: RotorChoice,
    /// Optional fourth rotor between the left rotor and the reflector.
    pub fourth: Option<FourthRotorConfig>,
    /// Reflector.
    pub reflector: ReflectorId,
    /// Ring settings of the stepping rotors.
    pub rings: RotorSettings,
    /// Start positions of the stepping rotors.
    pub positions: RotorSettings,
    /// Plugboard specification, parsed permissively.
    pub plugboard: String,
}

impl Default for MachineConfig {
    /// Rotors III II I, reflector A, rings `AAA`, positions `AAZ`, no plugs.
    ///
    /// The right rotor starts on Z so the first keystroke wraps it to A.
    fn default() -> Self {
        Self {
            rotors: RotorChoice::default(),
            fourth: None,
            reflector: ReflectorId::A,
            rings: RotorSettings::default(),
            positions: RotorSettings::new(Letter::A, Letter::A, Letter::Z),
            plugboard: String::new(),
        }
    }
}
