//! This module contains the game controller, which owns the current session together with the
//! location sampler and the distance oracle it needs to move from one round to the next.

use log::{info, warn};

use crate::config::Rules;
use crate::coords::Coordinate;
use crate::sampling::Sampler;
use crate::spherical::DistanceOracle;
use crate::state::{GuessOutcome, InvalidStateError, RoundSession, Snapshot};

/// This struct is the single owner of the game state. The presentation layer talks to it through
/// [`Game::submit_guess`] and [`Game::reset_game`], and reads it back through [`Game::snapshot`].
#[derive(Debug)]
pub struct Game<S, D> {
    /// The oracle measuring how far guesses land from their targets.
    oracle: D,
    /// The source of new targets.
    sampler: S,
    /// The session of the game being played.
    session: RoundSession,
}

impl<S: Sampler, D: DistanceOracle> Game<S, D> {
    /// Starts a new game with the given rules, drawing its first target from `sampler`.
    #[must_use]
    pub fn new(rules: Rules, mut sampler: S, oracle: D) -> Self {
        let session = RoundSession::start(rules, &mut sampler);

        Self {
            oracle,
            sampler,
            session,
        }
    }

    /// Throws away the current game, whatever its phase, and starts over from the first round.
    pub fn reset_game(&mut self) {
        info!(
            "resetting game at round {} with {} points",
            self.session.round(),
            self.session.score()
        );
        self.session = self.session.reset(&mut self.sampler);
    }

    /// Returns the session of the game being played.
    #[must_use]
    pub const fn session(&self) -> &RoundSession {
        &self.session
    }

    /// Returns a view of the game for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.session.snapshot()
    }

    /// Scores `guess` against the current target and advances the game.
    ///
    /// # Errors
    ///
    /// Fails with [`InvalidStateError`] if the game is already over, in which case nothing
    /// changes.
    pub fn submit_guess(&mut self, guess: Coordinate) -> Result<GuessOutcome, InvalidStateError> {
        let (session, outcome) = self
            .session
            .submit_guess(guess, &mut self.sampler, &self.oracle)
            .inspect_err(|err| warn!("rejecting guess at {guess}: {err}"))?;
        self.session = session;

        Ok(outcome)
    }
}
