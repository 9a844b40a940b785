//! This module contains the game rules and the command-line interface they are read from.

use clap::Parser;

use crate::scoring::DEFAULT_SIGMA;

/// The number of rounds in a game unless told otherwise.
pub const DEFAULT_ROUNDS: u32 = 5;

/// This struct holds information about the application when it comes to the command-line argument
/// parser. Every option can also be set through an environment variable, which is shown next to it
/// in the help message.
#[derive(Parser, Debug)]
#[command(name = "terraguess", version, about)]
#[command(next_line_help = true)]
pub struct Cli {
    /// The number of rounds in one game.
    #[arg(short, long, default_value_t = DEFAULT_ROUNDS)]
    #[arg(value_parser = clap::value_parser!(u32).range(1..=100))]
    #[arg(env = "TERRAGUESS_ROUNDS", value_name = "ROUNDS")]
    pub rounds: u32,
    /// The seed for the location generator.
    ///
    /// Two games started with the same seed visit the same targets in the same order. A fresh seed
    /// is used when this option is left out.
    #[arg(long, env = "TERRAGUESS_SEED", value_name = "SEED")]
    pub seed: Option<u64>,
    /// How forgiving scoring is, in kilometers; 50 by default.
    ///
    /// A guess this far away from its target is still worth about 607 of the 1000 points in a
    /// round, and one twice as far about 135.
    #[arg(long, default_value_t = DEFAULT_SIGMA, value_parser = verify_sigma)]
    #[arg(env = "TERRAGUESS_SIGMA", value_name = "KILOMETERS")]
    pub sigma: f64,
    /// Print debug logs to standard error.
    ///
    /// Without this flag, the RUST_LOG environment variable decides what gets logged, and only
    /// warnings do by default.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Builds the game rules out of the parsed arguments.
    ///
    /// # Errors
    ///
    /// Fails with a [`RulesError`] if the arguments were not run through the value parsers and
    /// hold invalid values.
    pub fn rules(&self) -> Result<Rules, RulesError> {
        Rules::new(self.rounds, self.sigma)
    }
}

/// This struct holds the parameters one game is played with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rules {
    /// The number of rounds before the game is over. Never zero.
    max_rounds: u32,
    /// The decay constant of the score curve in kilometers. Always finite and positive.
    sigma: f64,
}

impl Rules {
    /// Returns the number of rounds in a game.
    #[must_use]
    pub const fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    /// Builds a validated set of rules.
    ///
    /// # Errors
    ///
    /// Fails with [`RulesError::NoRounds`] when `max_rounds` is zero, and with
    /// [`RulesError::Sigma`] when `sigma` is not a finite positive number.
    pub fn new(max_rounds: u32, sigma: f64) -> Result<Self, RulesError> {
        if max_rounds == 0 {
            return Err(RulesError::NoRounds);
        }
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(RulesError::Sigma(sigma));
        }

        Ok(Self { max_rounds, sigma })
    }

    /// Returns the decay constant of the score curve in kilometers.
    #[must_use]
    pub const fn sigma(&self) -> f64 {
        self.sigma
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_ROUNDS,
            sigma: DEFAULT_SIGMA,
        }
    }
}

/// This enum holds the ways a set of rules can be invalid.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RulesError {
    /// A game needs at least one round.
    #[error("a game needs at least one round")]
    NoRounds,
    /// The decay constant must be finite and greater than zero.
    #[error("sigma must be a positive number of kilometers, got {0}")]
    Sigma(f64),
}

/// This function serves as a value parser for the `sigma` field, so that invalid values are
/// reported by clap alongside the rest of the usage errors.
fn verify_sigma(input: &str) -> Result<f64, String> {
    let sigma: f64 = input
        .parse()
        .map_err(|err| format!("`{input}` is not a number: {err}"))?;

    match Rules::new(DEFAULT_ROUNDS, sigma) {
        Ok(_) => Ok(sigma),
        Err(err) => Err(err.to_string()),
    }
}
