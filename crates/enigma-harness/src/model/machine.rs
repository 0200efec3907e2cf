//! Model machine: the reference implementation.

use enigma_core::MachineConfig;

use super::{
    operation::{Operation, OperationError, OperationResult, letter},
    plugboard::ModelPlugboard,
};

/// Rotors I..VIII as (name, wiring, turnover letters).
const ROTORS: [(&str, &str, &str); 8] = [
    ("I", "EKMFLGDQVZNTOWYHXUSPAIBRCJ", "Q"),
    ("II", "AJDKSIRUXBLHWTMCQGZNPYFVOE", "E"),
    ("III", "BDFHJLCPRTXVZNYEIWGAKMUSQO", "V"),
    ("IV", "ESOVPZJAYQUIRHXLNFTGKDCMWB", "J"),
    ("V", "VZBRGITYUPSDNHLXAWMJQOFECK", "Z"),
    ("VI", "JPGVOUMFYQBENHZRDKASXLICTW", "ZM"),
    ("VII", "NZJHGRCXMYSWBOUFAIVLPEKQDT", "ZM"),
    ("VIII", "FKQHTLXOCBJSPDZRAMEWNIUYGV", "ZM"),
];

const FOURTH_ROTORS: [(&str, &str); 2] =
    [("Beta", "LEYJVCNIXWPBQMDRTAKZGFUHOS"), ("Gamma", "FSOKANUERHMBTIYCWLQPZXVGJD")];

const REFLECTORS: [(&str, &str); 5] = [
    ("A", "EJMZALYXVBWFCRQUONTSPIKHGD"),
    ("B", "YRUHQSLDPXNGOKMIEBFZCWVJAT"),
    ("C", "FVPJIAOYEDRZXWGCTKUQSBNMHL"),
    ("B-thin", "ENKQAUYWJICOPBLMDXZVFTHRGS"),
    ("C-thin", "RDOBJNTKVEHMLFCWZAXGYIPSUQ"),
];

/// Observable state for oracle comparison.
///
/// This is the subset of machine state that can be compared against the real
/// implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservableState {
    /// Rotor names, left to right.
    pub rotors: [&'static str; 3],
    /// Window letters, left to right.
    pub positions: String,
    /// Ring settings, left to right.
    pub rings: String,
    /// Fourth rotor name, position and ring.
    pub fourth: Option<(&'static str, char, char)>,
    /// Reflector name.
    pub reflector: &'static str,
    /// Canonical plugboard specification.
    pub plugboard: String,
}

/// Index of an uppercase letter.
fn index(c: char) -> u8 {
    u8::try_from(c).map_or(0, |b| b.wrapping_sub(b'A') % 26)
}

/// One rotor as a wiring string plus window and ring letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRotor {
    name: &'static str,
    wiring: &'static str,
    turnovers: &'static str,
    position: char,
    ring: char,
}

impl ModelRotor {
    fn stepping(index: u8) -> Self {
        let (name, wiring, turnovers) = ROTORS[usize::from(index) % ROTORS.len()];
        Self { name, wiring, turnovers, position: 'A', ring: 'A' }
    }

    fn fourth(index: u8) -> Self {
        let (name, wiring) = FOURTH_ROTORS[usize::from(index) % FOURTH_ROTORS.len()];
        Self { name, wiring, turnovers: "", position: 'A', ring: 'A' }
    }

    fn named(name: &str) -> Option<Self> {
        let stepping = (0u8..8).map(Self::stepping);
        let fourth = (0u8..2).map(Self::fourth);
        stepping.chain(fourth).find(|rotor| rotor.name == name)
    }

    /// How far the wiring core is turned relative to the housing.
    fn shift(&self) -> u8 {
        (index(self.position) + 26 - index(self.ring)) % 26
    }

    /// Signal travelling towards the reflector.
    pub fn forward(&self, c: char) -> char {
        let shift = self.shift();
        let contact = usize::from((index(c) + shift) % 26);
        let wired = self.wiring.chars().nth(contact).unwrap_or(c);
        letter(index(wired) + 26 - shift)
    }

    /// Signal travelling back from the reflector: the letter whose forward
    /// image is `c`.
    pub fn backward(&self, c: char) -> char {
        ('A'..='Z').find(|&x| self.forward(x) == c).unwrap_or(c)
    }

    /// Move one letter on. Returns true if the rotor was on a turnover letter,
    /// or on Y for a rotor without one.
    fn turn(&mut self) -> bool {
        let leaving = self.position;
        self.position = letter(index(leaving) + 1);
        if self.turnovers.is_empty() { leaving == 'Y' } else { self.turnovers.contains(leaving) }
    }
}

/// Reference machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelMachine {
    /// Left, middle, right.
    rotors: [ModelRotor; 3],
    fourth: Option<ModelRotor>,
    reflector: (&'static str, &'static str),
    plugboard: ModelPlugboard,
}

impl ModelMachine {
    /// Rotors III II I, reflector A, positions AAZ, no plugs.
    pub fn new() -> Self {
        let mut right = ModelRotor::stepping(0);
        right.position = 'Z';
        Self {
            rotors: [ModelRotor::stepping(2), ModelRotor::stepping(1), right],
            fourth: None,
            reflector: REFLECTORS[0],
            plugboard: ModelPlugboard::new(),
        }
    }

    /// Model of a real configuration, by catalog name.
    ///
    /// Returns `None` if the configuration names something the model does not
    /// know.
    pub fn from_config(config: &MachineConfig) -> Option<Self> {
        let rotor = |name: &str, position: char, ring: char| {
            ModelRotor::named(name).map(|r| ModelRotor { position, ring, ..r })
        };

        let rotors = &config.rotors;
        let names = [rotors.left.name(), rotors.middle.name(), rotors.right.name()];
        let positions = config.positions.to_string();
        let rings = config.rings.to_string();

        let mut rotors = Vec::with_capacity(3);
        for ((&name, position), ring) in names.iter().zip(positions.chars()).zip(rings.chars()) {
            rotors.push(rotor(name, position, ring)?);
        }
        let rotors: [ModelRotor; 3] = rotors.try_into().ok()?;

        let fourth = match config.fourth {
            Some(f) => Some(rotor(f.rotor.name(), f.position.to_char(), f.ring.to_char())?),
            None => None,
        };

        let reflector =
            REFLECTORS.iter().copied().find(|(name, _)| *name == config.reflector.name())?;

        let mut plugboard = ModelPlugboard::new();
        plugboard.configure(&config.plugboard);

        Some(Self { rotors, fourth, reflector, plugboard })
    }

    /// Apply an operation and return the result.
    ///
    /// This is the main entry point for model-based testing. The result should
    /// match the real implementation's result.
    pub fn apply(&mut self, op: &Operation) -> OperationResult {
        match op {
            Operation::Press { letter: l } => OperationResult::Output(self.press(letter(*l))),
            Operation::Space => OperationResult::Output(' '),
            Operation::SetPositions { letters } => {
                for (rotor, l) in self.rotors.iter_mut().zip(letters) {
                    rotor.position = letter(*l);
                }
                OperationResult::Ok
            },
            Operation::SetRings { letters } => {
                for (rotor, l) in self.rotors.iter_mut().zip(letters) {
                    rotor.ring = letter(*l);
                }
                OperationResult::Ok
            },
            Operation::SetRotor { slot, rotor } => {
                let current = &mut self.rotors[usize::from(slot % 3)];
                let (position, ring) = (current.position, current.ring);
                *current = ModelRotor { position, ring, ..ModelRotor::stepping(*rotor) };
                OperationResult::Ok
            },
            Operation::SetReflector { reflector } => {
                self.reflector = REFLECTORS[usize::from(*reflector) % REFLECTORS.len()];
                OperationResult::Ok
            },
            Operation::SetFourth { rotor } => {
                self.fourth = rotor.map(ModelRotor::fourth);
                OperationResult::Ok
            },
            Operation::SetFourthPosition { letter: l } => match &mut self.fourth {
                Some(fourth) => {
                    fourth.position = letter(*l);
                    OperationResult::Ok
                },
                None => OperationResult::Error(OperationError::NoFourthRotor),
            },
            Operation::SetFourthRing { letter: l } => match &mut self.fourth {
                Some(fourth) => {
                    fourth.ring = letter(*l);
                    OperationResult::Ok
                },
                None => OperationResult::Error(OperationError::NoFourthRotor),
            },
            Operation::SetPlugboard { spec } => {
                self.plugboard.configure(&spec.to_spec());
                OperationResult::Ok
            },
        }
    }

    /// Step the rotors, then encipher one uppercase letter.
    pub fn press(&mut self, c: char) -> char {
        let [left, middle, right] = &mut self.rotors;
        if right.turn() && middle.turn() {
            left.turn();
            middle.turn();
        }

        let mut c = self.plugboard.swap(c);
        for rotor in self.rotors.iter().rev() {
            c = rotor.forward(c);
        }
        if let Some(fourth) = &self.fourth {
            c = fourth.forward(c);
        }
        c = self.reflector.1.chars().nth(usize::from(index(c))).unwrap_or(c);
        if let Some(fourth) = &self.fourth {
            c = fourth.backward(c);
        }
        for rotor in &self.rotors {
            c = rotor.backward(c);
        }
        self.plugboard.swap(c)
    }

    /// Encipher a message of uppercase letters and spaces.
    pub fn encipher(&mut self, text: &str) -> String {
        text.chars().map(|c| if c == ' ' { c } else { self.press(c) }).collect()
    }

    /// Get the observable state for oracle comparison.
    pub fn observable_state(&self) -> ObservableState {
        ObservableState {
            rotors: [self.rotors[0].name, self.rotors[1].name, self.rotors[2].name],
            positions: self.rotors.iter().map(|r| r.position).collect(),
            rings: self.rotors.iter().map(|r| r.ring).collect(),
            fourth: self.fourth.as_ref().map(|f| (f.name, f.position, f.ring)),
            reflector: self.reflector.0,
            plugboard: self.plugboard.canonical(),
        }
    }
}

impl Default for ModelMachine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn historical() -> ModelMachine {
        let mut model = ModelMachine::new();
        model.apply(&Operation::SetRotor { slot: 0, rotor: 0 });
        model.apply(&Operation::SetRotor { slot: 2, rotor: 2 });
        model.apply(&Operation::SetReflector { reflector: 1 });
        model.apply(&Operation::SetPositions { letters: [0, 0, 0] });
        model
    }

    #[test]
    fn historical_check_group() {
        let mut model = historical();
        assert_eq!(model.encipher("AAAAA"), "BDZGO");
        assert_eq!(model.observable_state().positions, "AAF");
    }

    #[test]
    fn double_step() {
        let mut model = historical();
        model.apply(&Operation::SetPositions { letters: [0, 4, 21] });
        model.press('A');
        assert_eq!(model.observable_state().positions, "BGW");
    }

    #[test]
    fn backward_inverts_forward() {
        let mut rotor = ModelRotor::stepping(5);
        rotor.position = 'K';
        rotor.ring = 'R';
        for c in 'A'..='Z' {
            assert_eq!(rotor.backward(rotor.forward(c)), c);
        }
    }

    #[test]
    fn fourth_rotor_operations_need_a_rotor() {
        let mut model = ModelMachine::new();
        assert_eq!(
            model.apply(&Operation::SetFourthRing { letter: 3 }),
            OperationResult::Error(OperationError::NoFourthRotor)
        );
        model.apply(&Operation::SetFourth { rotor: Some(1) });
        assert_eq!(model.apply(&Operation::SetFourthRing { letter: 3 }), OperationResult::Ok);
        assert_eq!(model.observable_state().fourth, Some(("Gamma", 'A', 'D')));
    }

    #[test]
    fn from_default_config_matches_new() {
        assert_eq!(ModelMachine::from_config(&MachineConfig::default()), Some(ModelMachine::new()));
    }
}
