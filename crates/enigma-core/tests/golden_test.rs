//! Golden ciphertext fixtures.
//!
//! Each fixture pins a concrete configuration and message to a literal
//! ciphertext so arithmetic regressions in rotor mapping or stepping show up
//! as snapshot diffs.

#![allow(clippy::expect_used)]

use enigma_core::{
    FourthRotorConfig, FourthRotorId, Machine, MachineConfig, ReflectorId, RotorChoice, RotorId,
};
use insta::assert_snapshot;

/// Helper: parse three letters into settings.
fn settings(s: &str) -> enigma_core::RotorSettings {
    s.parse().expect("valid settings")
}

/// Helper: rotors I II III (left to right), reflector B, rings and
/// positions AAA.
fn wehrmacht_config() -> MachineConfig {
    MachineConfig {
        rotors: RotorChoice { left: RotorId::I, middle: RotorId::II, right: RotorId::III },
        reflector: ReflectorId::B,
        rings: settings("AAA"),
        positions: settings("AAA"),
        ..MachineConfig::default()
    }
}

fn encipher(config: &MachineConfig, text: &str) -> (String, String) {
    let mut machine = Machine::new(config);
    let cipher = machine.encipher(text).expect("valid message");
    (cipher, machine.positions().to_string())
}

#[test]
fn test_historical_check_group() {
    let (cipher, positions) = encipher(&wehrmacht_config(), "AAAAA");
    assert_snapshot!(cipher, @"BDZGO");
    assert_snapshot!(positions, @"AAF");
}

#[test]
fn test_ring_settings_shift_output() {
    let config = MachineConfig { rings: settings("BBB"), ..wehrmacht_config() };
    let (cipher, _) = encipher(&config, "AAAAA");
    assert_snapshot!(cipher, @"EWTYX");
}

#[test]
fn test_default_configuration() {
    let (cipher, positions) = encipher(&MachineConfig::default(), "HELLO WORLD");
    assert_snapshot!(cipher, @"BQRFG JFCEP");
    assert_snapshot!(positions, @"AAJ");
}

#[test]
fn test_default_configuration_long_run() {
    // Sixty keystrokes carry the right rotor (I, notch Q) into the middle
    // rotor twice.
    let (cipher, positions) = encipher(&MachineConfig::default(), &"A".repeat(60));
    assert_snapshot!(cipher, @"OSQCXFKBQCSRHJMMXTBUFZDMFCPIINRDZWCSVUTRVRBZUSWGFCNCINIOULNT");
    assert_snapshot!(positions, @"ACH");
}

#[test]
fn test_full_plugboard_and_rings() {
    let config = MachineConfig {
        rotors: RotorChoice { left: RotorId::IV, middle: RotorId::V, right: RotorId::VI },
        reflector: ReflectorId::B,
        rings: settings("CHM"),
        positions: settings("QEV"),
        plugboard: "AZ BY CX DW EV FU GT HS IR JQ".to_string(),
        ..MachineConfig::default()
    };
    let (cipher, positions) = encipher(&config, "THE QUICK BROWN FOX");
    assert_snapshot!(cipher, @"VUB DSQTI UZEXA CEG");
    assert_snapshot!(positions, @"QFL");
}

#[test]
fn test_four_rotor_machine() {
    let config = MachineConfig {
        rotors: RotorChoice { left: RotorId::VI, middle: RotorId::VII, right: RotorId::VIII },
        fourth: Some(FourthRotorConfig::new(FourthRotorId::Gamma)),
        reflector: ReflectorId::C,
        rings: settings("ZZZ"),
        positions: settings("MZY"),
        plugboard: "AB CD EF".to_string(),
    };
    let (cipher, positions) = encipher(&config, "ATTACK AT DAWN");
    assert_snapshot!(cipher, @"MLHCDZ XG UYXJ");
    assert_snapshot!(positions, @"NBK");
}

#[test]
fn test_thin_reflector_with_fourth_rotor_at_a_matches_thick_reflector() {
    let cases = [
        (FourthRotorId::Beta, ReflectorId::BThin, ReflectorId::B),
        (FourthRotorId::Gamma, ReflectorId::CThin, ReflectorId::C),
    ];

    for (fourth, thin, thick) in cases {
        let four_rotor = MachineConfig {
            fourth: Some(FourthRotorConfig::new(fourth)),
            reflector: thin,
            ..wehrmacht_config()
        };
        let three_rotor = MachineConfig { reflector: thick, ..wehrmacht_config() };

        let message = "THE FOURTH ROTOR AT A WITH A THIN REFLECTOR IS TRANSPARENT";
        assert_eq!(
            encipher(&four_rotor, message).0,
            encipher(&three_rotor, message).0,
            "{fourth} + {thin} should equal {thick}"
        );
    }

    let config = MachineConfig {
        fourth: Some(FourthRotorConfig::new(FourthRotorId::Beta)),
        reflector: ReflectorId::BThin,
        ..wehrmacht_config()
    };
    assert_snapshot!(encipher(&config, "AAAAA").0, @"BDZGO");
}

#[test]
fn test_double_step_fixture() {
    // Right rotor III leaves V on the first keystroke and carries into the
    // middle rotor, which leaves its notch E and carries into the left
    // rotor. The middle rotor moves twice in that keystroke.
    let config = MachineConfig { positions: settings("AEV"), ..wehrmacht_config() };
    let (cipher, positions) = encipher(&config, "A");
    assert_snapshot!(cipher, @"R");
    assert_snapshot!(positions, @"BGW");

    let (cipher, positions) = encipher(&config, "AAAAAA");
    assert_snapshot!(cipher, @"RNCOCJ");
    assert_snapshot!(positions, @"BGB");
}
