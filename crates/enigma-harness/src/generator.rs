//! Seeded configuration and message generation.
//!
//! Every value comes from a [`ChaCha8Rng`] seeded with a `u64`, so the same
//! seed always yields the same sequence of configurations and messages.

use enigma_core::{
    ALPHABET_LEN, FourthRotorConfig, FourthRotorId, Letter, MAX_PAIRS, MachineConfig, ReflectorId,
    RotorChoice, RotorId, RotorSettings,
};
use rand::{Rng, SeedableRng, seq::SliceRandom};
use rand_chacha::ChaCha8Rng;

/// Deterministic generator of machine configurations.
#[derive(Debug, Clone)]
pub struct ConfigGenerator {
    rng: ChaCha8Rng,
}

impl ConfigGenerator {
    /// Generator seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Random letter.
    pub fn letter(&mut self) -> Letter {
        Letter::wrapping(self.rng.gen_range(0..ALPHABET_LEN))
    }

    fn settings(&mut self) -> RotorSettings {
        RotorSettings::new(self.letter(), self.letter(), self.letter())
    }

    /// Random configuration as an operator would set it up.
    ///
    /// Three distinct stepping rotors. About one configuration in three
    /// carries a fourth rotor, and those use a thin reflector.
    pub fn config(&mut self) -> MachineConfig {
        let mut rotors = RotorId::ALL;
        rotors.shuffle(&mut self.rng);

        let (fourth, reflector) = if self.rng.gen_bool(1.0 / 3.0) {
            let rotor = FourthRotorId::ALL[self.rng.gen_range(0..FourthRotorId::ALL.len())];
            let fourth = FourthRotorConfig { rotor, position: self.letter(), ring: self.letter() };
            let thin = [ReflectorId::BThin, ReflectorId::CThin];
            (Some(fourth), thin[self.rng.gen_range(0..thin.len())])
        } else {
            let thick = [ReflectorId::A, ReflectorId::B, ReflectorId::C];
            (None, thick[self.rng.gen_range(0..thick.len())])
        };

        MachineConfig {
            rotors: RotorChoice { left: rotors[0], middle: rotors[1], right: rotors[2] },
            fourth,
            reflector,
            rings: self.settings(),
            positions: self.settings(),
            plugboard: self.plugboard(),
        }
    }

    /// Valid plugboard specification with up to ten pairs.
    pub fn plugboard(&mut self) -> String {
        let mut letters: Vec<Letter> = Letter::all().collect();
        letters.shuffle(&mut self.rng);
        let pairs = self.rng.gen_range(0..=MAX_PAIRS);

        letters
            .chunks_exact(2)
            .take(pairs)
            .map(|pair| format!("{}{}", pair[0], pair[1]))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Message of `len` uppercase letters, roughly one in six a space.
    pub fn message(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| if self.rng.gen_ratio(1, 6) { ' ' } else { self.letter().to_char() })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use enigma_core::Plugboard;

    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = ConfigGenerator::new(7);
        let mut b = ConfigGenerator::new(7);
        for _ in 0..10 {
            assert_eq!(a.config(), b.config());
            assert_eq!(a.message(40), b.message(40));
        }
    }

    #[test]
    fn configs_are_well_formed() {
        let mut generator = ConfigGenerator::new(42);
        for _ in 0..200 {
            let config = generator.config();
            let RotorChoice { left, middle, right } = config.rotors;
            assert!(left != middle && middle != right && left != right);
            assert_eq!(
                config.fourth.is_some(),
                matches!(config.reflector, ReflectorId::BThin | ReflectorId::CThin)
            );

            // Generated plugboards are valid, so nothing is dropped.
            let mut strict = Plugboard::new();
            assert_eq!(strict.configure_strict(&config.plugboard), Ok(()));
        }
    }

    #[test]
    fn messages_are_valid_input() {
        let mut generator = ConfigGenerator::new(3);
        let message = generator.message(500);
        assert_eq!(message.len(), 500);
        assert!(enigma_core::validate(&message).is_ok());
    }
}
