//! This module contains the round session, the only piece of state in the game, and the
//! transitions between its phases.
//!
//! A session is never changed in place. Applying an [`Event`] to it yields a [`Step`] holding the
//! session that follows, so that a rejected event leaves the current one untouched.

use log::{debug, info};
use serde::Serialize;

use crate::config::Rules;
use crate::coords::Coordinate;
use crate::sampling::Sampler;
use crate::scoring::gaussian_score;
use crate::spherical::DistanceOracle;

/// This enum holds the player actions a session reacts to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    /// The player placed a guess for the current target.
    Guess(Coordinate),
    /// The player asked for a brand new game.
    Reset,
}

/// This struct holds everything there is to know about a round once it has been scored. It doubles
/// as the short-lived "round scored" state shown to the player before moving on.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GuessOutcome {
    /// The distance between the guess and the target in kilometers.
    pub distance_km: f64,
    /// The coordinate the player picked.
    pub guess: Coordinate,
    /// The phase the session is in after this guess.
    pub next: Phase,
    /// The round that was just scored.
    pub round: u32,
    /// The points awarded for this guess alone.
    pub round_score: u32,
    /// The target the player was looking for.
    pub target: Coordinate,
    /// The accumulated score after this guess.
    pub total_score: u32,
}

/// This struct represents the error of guessing while no round is being played.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("a guess can only be submitted during a round, but the session is {phase:?}")]
pub struct InvalidStateError {
    /// The phase the session was in when the guess arrived.
    pub phase: Phase,
}

/// This enum holds the phases a session goes through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// The final round has been scored; only a reset is accepted.
    GameOver,
    /// A target is waiting for a guess.
    InRound,
}

/// This struct holds the state of one game from its first round up to the final score.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundSession {
    /// The guess of the final round, kept once the game is over. Absent while rounds are played.
    guess: Option<Coordinate>,
    /// Whether the session is waiting for a guess or finished.
    phase: Phase,
    /// The round being played, counting from 1.
    round: u32,
    /// The rules this game is played by.
    rules: Rules,
    /// The points accumulated so far.
    score: u32,
    /// The location the player has to find in the current round.
    target: Coordinate,
}

impl RoundSession {
    /// Applies a single event and returns the session that follows it, together with the outcome
    /// of the guess when the event was one. This dispatches to [`RoundSession::submit_guess`] and
    /// [`RoundSession::reset`].
    ///
    /// # Errors
    ///
    /// Fails with [`InvalidStateError`] if a guess arrives after the game is over.
    pub fn apply<S, D>(
        &self,
        event: Event,
        sampler: &mut S,
        oracle: &D,
    ) -> Result<Step, InvalidStateError>
    where
        S: Sampler,
        D: DistanceOracle,
    {
        match event {
            Event::Guess(guess) => {
                let (session, outcome) = self.submit_guess(guess, sampler, oracle)?;
                Ok(Step::Scored(session, outcome))
            }
            Event::Reset => Ok(Step::Reset(self.reset(sampler))),
        }
    }

    /// Returns whether the final round has been scored.
    #[must_use]
    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Returns the guess of the final round, which is only present once the game is over.
    #[must_use]
    pub const fn guess(&self) -> Option<Coordinate> {
        self.guess
    }

    /// Returns the phase the session is in.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the session of a fresh game played by the same rules, whatever the phase of this
    /// one.
    #[must_use]
    pub fn reset<S: Sampler>(&self, sampler: &mut S) -> Self {
        Self::start(self.rules, sampler)
    }

    /// Returns the round being played, counting from 1.
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    /// Returns the rules the session is played by.
    #[must_use]
    pub const fn rules(&self) -> Rules {
        self.rules
    }

    /// Returns the points accumulated so far.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Returns a read-only view of the session for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            game_over: self.game_over(),
            guess: self.guess,
            max_rounds: self.rules.max_rounds(),
            round: self.round,
            score: self.score,
            target: self.target,
        }
    }

    /// Creates the session of a fresh game: first round, no points and a new target.
    #[must_use]
    pub fn start<S: Sampler>(rules: Rules, sampler: &mut S) -> Self {
        let target = sampler.sample();
        debug!("new game of {} rounds, first target at {target}", rules.max_rounds());

        Self {
            guess: None,
            phase: Phase::InRound,
            round: 1,
            rules,
            score: 0,
            target,
        }
    }

    /// Scores a guess against the current target and returns the session that follows, which is
    /// either the next round or, if this was the final one, the end of the game.
    ///
    /// # Errors
    ///
    /// Fails with [`InvalidStateError`] if the game is already over.
    pub fn submit_guess<S, D>(
        &self,
        guess: Coordinate,
        sampler: &mut S,
        oracle: &D,
    ) -> Result<(Self, GuessOutcome), InvalidStateError>
    where
        S: Sampler,
        D: DistanceOracle,
    {
        if self.phase != Phase::InRound {
            return Err(InvalidStateError { phase: self.phase });
        }

        let distance_km = oracle.distance_km(&self.target, &guess);
        let round_score = gaussian_score(distance_km, self.rules.sigma());
        let score = self.score.saturating_add(round_score);
        debug!(
            "round {} scored {round_score} points for a guess {distance_km:.1} km away",
            self.round
        );

        let next = if self.round < self.rules.max_rounds() {
            let target = sampler.sample();
            debug!("round {} target at {target}", self.round + 1);

            Self {
                guess: None,
                round: self.round + 1,
                score,
                target,
                ..*self
            }
        } else {
            info!("game over with {score} points");

            Self {
                guess: Some(guess),
                phase: Phase::GameOver,
                score,
                ..*self
            }
        };

        let outcome = GuessOutcome {
            distance_km,
            guess,
            next: next.phase,
            round: self.round,
            round_score,
            target: self.target,
            total_score: score,
        };

        Ok((next, outcome))
    }

    /// Returns the location the player has to find in the current round.
    #[must_use]
    pub const fn target(&self) -> Coordinate {
        self.target
    }
}

/// This struct holds everything the presentation layer needs to draw the game at a given moment.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    /// Whether the game is over and a new one can be started.
    pub game_over: bool,
    /// The guess of the final round, present only once the game is over.
    pub guess: Option<Coordinate>,
    /// The number of rounds in the game.
    pub max_rounds: u32,
    /// The round being played, counting from 1.
    pub round: u32,
    /// The points accumulated so far.
    pub score: u32,
    /// The location the panorama should be rendered at.
    pub target: Coordinate,
}

/// This enum holds the result of applying an event to a session, one variant per event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    /// A new game was started with the given session.
    Reset(RoundSession),
    /// A guess was scored, leading to the given session.
    Scored(RoundSession, GuessOutcome),
}

impl Step {
    /// Returns the session that follows the event.
    #[must_use]
    pub const fn session(&self) -> &RoundSession {
        match *self {
            Self::Reset(ref session) | Self::Scored(ref session, _) => session,
        }
    }
}
