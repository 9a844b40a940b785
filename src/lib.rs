//! The library components of the game. They hold the round session and its scoring, the sources of
//! locations and distances it relies on, and the terminal front-end that plays it.
//!
//! The starting point of the library is the game.rs file, which contains the main game loop. The
//! [`engine::Game`] controller can also be driven on its own by any other front-end.

#![expect(
    clippy::cargo_common_metadata,
    reason = "The package has not yet been pushed to a remote."
)]

pub mod config;
pub mod coords;
pub mod engine;
mod game;
pub mod input;
mod messages;
pub mod sampling;
pub mod scoring;
pub mod spherical;
pub mod state;
#[cfg(test)]
mod testing;

pub use game::init;
