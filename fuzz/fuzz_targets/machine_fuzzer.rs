//! Fuzz target for [`Machine`] message processing
//!
//! # Strategy
//!
//! - Arbitrary configurations: any rotor order, reflector, fourth rotor, ring
//!   setting, position and plugboard spec
//! - Arbitrary text: raw strings including lowercase, digits, punctuation and
//!   non-ASCII characters
//!
//! # Invariants
//!
//! - NEVER panic on any input
//! - Valid text deciphers back to itself on an identically configured machine
//! - No letter enciphers to itself
//! - Invalid text is rejected by `encipher` with the machine left unchanged
//! - `process` yields exactly one error, at the first invalid character, and
//!   nothing after it

#![no_main]

use arbitrary::Arbitrary;
use enigma_core::{
    FourthRotorConfig, FourthRotorId, Letter, Machine, MachineConfig, ReflectorId, RotorChoice,
    RotorId, RotorSettings, validate,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    rotors: [u8; 3],
    fourth: Option<(u8, u8, u8)>,
    reflector: u8,
    rings: [u8; 3],
    positions: [u8; 3],
    plugboard: String,
    text: String,
}

fn settings([left, middle, right]: [u8; 3]) -> RotorSettings {
    RotorSettings::new(Letter::wrapping(left), Letter::wrapping(middle), Letter::wrapping(right))
}

impl FuzzInput {
    fn config(&self) -> MachineConfig {
        let rotor = |i: u8| RotorId::ALL[usize::from(i) % RotorId::ALL.len()];
        MachineConfig {
            rotors: RotorChoice {
                left: rotor(self.rotors[0]),
                middle: rotor(self.rotors[1]),
                right: rotor(self.rotors[2]),
            },
            fourth: self.fourth.map(|(rotor, position, ring)| FourthRotorConfig {
                rotor: FourthRotorId::ALL[usize::from(rotor) % FourthRotorId::ALL.len()],
                position: Letter::wrapping(position),
                ring: Letter::wrapping(ring),
            }),
            reflector: ReflectorId::ALL[usize::from(self.reflector) % ReflectorId::ALL.len()],
            rings: settings(self.rings),
            positions: settings(self.positions),
            plugboard: self.plugboard.clone(),
        }
    }
}

fuzz_target!(|input: FuzzInput| {
    let config = input.config();
    let mut sender = Machine::new(&config);

    match validate(&input.text) {
        Ok(()) => {
            let cipher = sender.encipher(&input.text).expect("valid text enciphers");
            for (plain, out) in input.text.chars().zip(cipher.chars()) {
                assert!(plain == ' ' || plain != out, "{plain} enciphered to itself");
            }

            let mut receiver = Machine::new(&config);
            assert_eq!(receiver.encipher(&cipher).expect("ciphertext is valid"), input.text);
        },
        Err(err) => {
            let before = sender.clone();
            assert_eq!(sender.encipher(&input.text), Err(err.clone()));
            assert_eq!(sender, before, "rejected text must not move the rotors");

            let results: Vec<_> = sender.process(&input.text).collect();
            let errors = results.iter().filter(|r| r.is_err()).count();
            assert_eq!(errors, 1);
            assert_eq!(results.last(), Some(&Err(err)));
        },
    }
});
