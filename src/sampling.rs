//! This module holds the source of target locations. The game only ever asks for one coordinate at
//! a time, so the seam is a single method trait with a uniform random implementation behind it.

use fastrand::Rng;

use crate::coords::Coordinate;

/// The largest absolute latitude a sampled target can have. Targets never come from the polar
/// caps above 85 degrees.
pub const SAMPLED_LATITUDE: f64 = 85.0;

/// The largest absolute longitude a sampled target can have.
pub const SAMPLED_LONGITUDE: f64 = 180.0;

/// This trait represents anything able to hand out target locations for new rounds.
pub trait Sampler {
    /// Produces a new coordinate, independent of every previous call.
    fn sample(&mut self) -> Coordinate;
}

/// This struct samples latitude uniformly within `[-85, 85]` and longitude uniformly within
/// `[-180, 180]`. It keeps its own generator so a seeded instance replays the same sequence of
/// targets.
#[derive(Clone, Debug)]
pub struct UniformSampler {
    /// The generator every sample is drawn from.
    rng: Rng,
}

impl UniformSampler {
    /// Creates a sampler seeded from the thread local generator.
    #[must_use]
    pub fn new() -> Self {
        Self { rng: Rng::new() }
    }

    /// Creates a sampler with a fixed seed, so that two samplers with the same seed produce the
    /// same targets.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Rng::with_seed(seed),
        }
    }
}

impl Default for UniformSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl Sampler for UniformSampler {
    fn sample(&mut self) -> Coordinate {
        let latitude = self
            .rng
            .f64()
            .mul_add(2.0 * SAMPLED_LATITUDE, -SAMPLED_LATITUDE);
        let longitude = self
            .rng
            .f64()
            .mul_add(2.0 * SAMPLED_LONGITUDE, -SAMPLED_LONGITUDE);

        // both values stay inside their ranges because `f64()` is drawn from [0, 1)
        Coordinate::new_unchecked(latitude, longitude)
    }
}
