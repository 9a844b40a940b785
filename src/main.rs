//! # terraguess
//!
//! This crate is a game about guessing where on Earth a random location is. Every round opens on a
//! panorama of a random spot, and you answer with the coordinate you think it was taken at.
//!
//! The closer the guess, the more points it earns, up to 1000 points for a guess right on target.
//! Points fall off along a bell curve, so only guesses within a couple hundred kilometers score at
//! all. A game lasts five rounds unless told otherwise.

#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use anyhow::Result;
use terraguess::init;

fn main() -> Result<()> {
    init()
}
