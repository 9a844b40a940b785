//! Deterministic stand-ins for the sampler and the distance oracle.

use crate::coords::Coordinate;
use crate::sampling::Sampler;
use crate::spherical::DistanceOracle;

/// The targets handed out by [`CycleSampler`], in order.
const TARGETS: [(f64, f64); 3] = [(10.0, 20.0), (-30.0, 40.0), (50.0, -60.0)];

/// Shorthand for a coordinate known to be valid.
pub(crate) fn coordinate(latitude: f64, longitude: f64) -> Coordinate {
    Coordinate::new(latitude, longitude).expect("valid coordinate")
}

/// A sampler cycling through [`TARGETS`].
#[derive(Default)]
pub(crate) struct CycleSampler {
    /// The number of samples drawn so far.
    drawn: usize,
}

impl Sampler for CycleSampler {
    fn sample(&mut self) -> Coordinate {
        let (latitude, longitude) = TARGETS
            .get(self.drawn % TARGETS.len())
            .copied()
            .unwrap_or_default();
        self.drawn += 1;
        coordinate(latitude, longitude)
    }
}

/// An oracle reporting the same distance, in kilometers, for every pair of coordinates.
pub(crate) struct FixedOracle(pub(crate) f64);

impl DistanceOracle for FixedOracle {
    fn distance_km(&self, _from: &Coordinate, _to: &Coordinate) -> f64 {
        self.0
    }
}
