//! The game module contains the game loop that connects the terminal to the game controller.
//!
//! It contains the `init()` function to parse the command line, set up logging and start the game
//! loop, which keeps playing games until the player declines a new one.

use anyhow::Result;
use clap::Parser;
use console::Term;
use env_logger::Env;
use log::debug;

use crate::config::Cli;
use crate::engine::Game;
use crate::input::{ask_new_game, take_guess, GuessParser};
use crate::messages::{init_message, show_game_over, show_outcome, show_round};
use crate::sampling::UniformSampler;
use crate::spherical::HaversineOracle;
use crate::state::Phase;

/// Initializes the game state and runs the game loop. This is a `main()` function of sorts though
/// it is still called from main.rs.
///
/// Each iteration of the loop plays one round: it shows the round header, takes a guess and
/// reports its score. After the final round, the player is asked whether to start over.
///
/// # Errors
///
/// The function may return any one of the following errors:
///
/// - `terraguess::config::RulesError`
/// - `regex::Error`
/// - `io::Error`
/// - `dialoguer::Error`
/// - `indicatif::style::TemplateError`
/// - `terraguess::state::InvalidStateError`
pub fn init() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let rules = cli.rules()?;
    let sampler = cli
        .seed
        .map_or_else(UniformSampler::new, UniformSampler::with_seed);
    let parser = GuessParser::new()?;
    let term = Term::stdout();
    let mut game = Game::new(rules, sampler, HaversineOracle);
    debug!("starting with {rules:?}");

    // show the init message
    init_message(&term)?;

    // game loop
    loop {
        show_round(&term, &game.snapshot())?;

        let guess = take_guess(&term, &parser)?;
        let outcome = game.submit_guess(guess)?;
        show_outcome(&term, &outcome)?;

        if outcome.next == Phase::GameOver {
            show_game_over(&term, &game.snapshot())?;

            if !ask_new_game(&term)? {
                break Ok(());
            }

            game.reset_game();
            term.clear_screen()?;
        }
    }
}

/// Sets up the logger writing to standard error. The `RUST_LOG` environment variable takes
/// precedence, and otherwise only warnings are shown, or debug messages in verbose mode.
fn init_logging(verbose: bool) -> Result<()> {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default)).try_init()?;
    Ok(())
}
