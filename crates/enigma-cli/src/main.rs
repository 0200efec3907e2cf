//! Enigma machine on the command line.
//!
//! # Usage
//!
//! ```bash
//! # Encipher arguments with the default machine
//! enigma HELLO WORLD
//!
//! # Historical settings, message from stdin
//! echo "AAAAA" | enigma --rotors "I II III" --reflector B --positions AAA
//!
//! # Four-rotor machine with a thin reflector
//! enigma --fourth beta --reflector b-thin --plugboard "AB CD" ATTACK AT DAWN
//! ```
//!
//! Enciphering is its own inverse: running the ciphertext through the same
//! settings gives back the plaintext.

use std::{
    error::Error,
    io::{self, BufRead, Write},
};

use clap::Parser;
use enigma_core::{
    ConfigError, FourthRotorConfig, FourthRotorId, Letter, Machine, MachineConfig, Plugboard,
    ReflectorId, RotorChoice, RotorSettings,
};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Enigma rotor cipher machine
#[derive(Parser, Debug)]
#[command(name = "enigma")]
#[command(about = "Encipher or decipher text with an Enigma rotor machine")]
#[command(version)]
struct Args {
    /// Rotor order, left to right
    #[arg(long, default_value = "III II I")]
    rotors: RotorChoice,

    /// Non-stepping fourth rotor (beta, gamma)
    #[arg(long)]
    fourth: Option<FourthRotorId>,

    /// Fourth rotor position [default: A]
    #[arg(long, requires = "fourth")]
    fourth_position: Option<char>,

    /// Fourth rotor ring setting [default: A]
    #[arg(long, requires = "fourth")]
    fourth_ring: Option<char>,

    /// Reflector (A, B, C, B-thin, C-thin)
    #[arg(long, default_value = "A")]
    reflector: ReflectorId,

    /// Ring settings, left to right
    #[arg(long, default_value = "AAA")]
    rings: RotorSettings,

    /// Start positions, left to right
    #[arg(long, default_value = "AAZ")]
    positions: RotorSettings,

    /// Plugboard pairs, e.g. "AB CD EF"
    #[arg(long, default_value = "")]
    plugboard: String,

    /// Reject the plugboard spec on the first bad token instead of skipping it
    #[arg(long)]
    strict_plugboard: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Message; read from stdin when empty
    message: Vec<String>,
}

impl Args {
    fn machine_config(&self) -> Result<MachineConfig, ConfigError> {
        if self.strict_plugboard {
            Plugboard::new().configure_strict(&self.plugboard)?;
        }

        let fourth = match self.fourth {
            Some(rotor) => Some(FourthRotorConfig {
                rotor,
                position: self.fourth_position.map_or(Ok(Letter::A), Letter::try_from)?,
                ring: self.fourth_ring.map_or(Ok(Letter::A), Letter::try_from)?,
            }),
            None => None,
        };

        Ok(MachineConfig {
            rotors: self.rotors,
            fourth,
            reflector: self.reflector,
            rings: self.rings,
            positions: self.positions,
            plugboard: self.plugboard.clone(),
        })
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)).with(filter).init();

    run(&args, io::stdin().lock(), io::stdout().lock())
}

/// Encipher the message arguments, or every line of `input`, into `output`.
///
/// One machine handles the whole run, so rotor positions carry across lines.
fn run(args: &Args, input: impl BufRead, mut output: impl Write) -> Result<(), Box<dyn Error>> {
    let config = args.machine_config()?;
    let mut machine = Machine::new(&config);

    tracing::info!(
        rotors = %config.rotors,
        reflector = %config.reflector,
        rings = %config.rings,
        positions = %config.positions,
        plugboard = %machine.plugboard(),
        "machine ready"
    );

    if !args.message.is_empty() {
        let message = args.message.join(" ").to_ascii_uppercase();
        writeln!(output, "{}", machine.encipher(&message)?)?;
        return Ok(());
    }

    for (number, line) in input.lines().enumerate() {
        let line = line?.to_ascii_uppercase();
        let cipher = machine.encipher(&line).inspect_err(|err| {
            tracing::error!(line = number + 1, %err, "cannot encipher line");
        })?;
        writeln!(output, "{cipher}")?;
    }

    tracing::info!(positions = %machine.positions(), "done");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("enigma").chain(argv.iter().copied())).unwrap()
    }

    fn run_to_string(args: &Args, input: &str) -> Result<String, Box<dyn Error>> {
        let mut output = Vec::new();
        run(args, input.as_bytes(), &mut output)?;
        Ok(String::from_utf8(output)?)
    }

    #[test]
    fn defaults_match_machine_defaults() {
        let args = args(&[]);
        assert_eq!(args.machine_config().unwrap(), MachineConfig::default());
    }

    #[test]
    fn message_arguments_are_joined_and_uppercased() {
        let output = run_to_string(&args(&["hello", "world"]), "").unwrap();
        assert_eq!(output, "BQRFG JFCEP\n");
    }

    #[test]
    fn stdin_lines_share_one_machine() {
        let args = args(&["--rotors", "I II III", "--reflector", "B", "--positions", "AAA"]);
        let output = run_to_string(&args, "aa\naaa\n").unwrap();
        assert_eq!(output, "BD\nZGO\n");
    }

    #[test]
    fn ciphertext_round_trips() {
        let argv = ["--fourth", "gamma", "--reflector", "c-thin", "--plugboard", "AB CD"];
        let cipher = run_to_string(&args(&argv), "ATTACK AT DAWN\n").unwrap();
        let plain = run_to_string(&args(&argv), &cipher).unwrap();
        assert_eq!(plain, "ATTACK AT DAWN\n");
    }

    #[test]
    fn invalid_character_is_an_error() {
        assert!(run_to_string(&args(&["HELLO,", "WORLD"]), "").is_err());
    }

    #[test]
    fn strict_plugboard_rejects_bad_tokens() {
        let lenient = args(&["--plugboard", "AB AC"]);
        assert_eq!(lenient.machine_config().unwrap().plugboard, "AB AC");

        let strict = args(&["--plugboard", "AB AC", "--strict-plugboard"]);
        assert!(matches!(strict.machine_config(), Err(ConfigError::InvalidPlug { .. })));
    }

    #[test]
    fn unknown_names_fail_to_parse() {
        let argv = ["enigma", "--rotors", "I II IX"];
        assert!(Args::try_parse_from(argv).is_err());
        assert!(Args::try_parse_from(["enigma", "--reflector", "D"]).is_err());
        assert!(Args::try_parse_from(["enigma", "--positions", "AA"]).is_err());
    }

    #[test]
    fn fourth_rotor_settings_require_fourth_rotor() {
        assert!(Args::try_parse_from(["enigma", "--fourth-ring", "B"]).is_err());

        let args = args(&["--fourth", "beta", "--fourth-position", "q"]);
        let fourth = args.machine_config().unwrap().fourth.unwrap();
        assert_eq!(fourth.rotor, FourthRotorId::Beta);
        assert_eq!(fourth.position.to_char(), 'Q');
    }
}
