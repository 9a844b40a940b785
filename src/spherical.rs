//! This module contains the distance computation between a target and a guess. The game does not
//! care how the distance is obtained as long as it comes back in kilometers, so the computation is
//! hidden behind the `DistanceOracle` trait.

use geo::{HaversineDistance as _, Point};

use crate::coords::Coordinate;

/// The number of meters in a kilometer, used to convert what `geo` returns.
const METERS_PER_KILOMETER: f64 = 1000.0;

/// This trait represents a provider of great-circle distances.
pub trait DistanceOracle {
    /// Returns the great-circle distance between `from` and `to` in kilometers. The result is
    /// never negative.
    fn distance_km(&self, from: &Coordinate, to: &Coordinate) -> f64;
}

/// This struct computes distances with the haversine formula over a spherical earth of mean
/// radius, as implemented by the `geo` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct HaversineOracle;

impl DistanceOracle for HaversineOracle {
    fn distance_km(&self, from: &Coordinate, to: &Coordinate) -> f64 {
        let meters = to_point(from).haversine_distance(&to_point(to));
        meters / METERS_PER_KILOMETER
    }
}

/// Converts a coordinate into a `geo` point, which stores longitude as `x` and latitude as `y`.
fn to_point(coordinate: &Coordinate) -> Point<f64> {
    Point::new(coordinate.longitude(), coordinate.latitude())
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    /// Shorthand for a coordinate known to be valid.
    fn coordinate(latitude: f64, longitude: f64) -> Coordinate {
        Coordinate::new(latitude, longitude).expect("valid coordinate")
    }

    #[test]
    fn distance_is_symmetric() {
        let london = coordinate(51.5074, -0.1278);
        let new_york = coordinate(40.7128, -74.0060);

        assert_abs_diff_eq!(
            HaversineOracle.distance_km(&london, &new_york),
            HaversineOracle.distance_km(&new_york, &london),
            epsilon = 1e-9
        );
    }

    #[test]
    fn distance_to_itself_is_zero() {
        let everest = coordinate(27.9881, 86.9250);
        assert_abs_diff_eq!(HaversineOracle.distance_km(&everest, &everest), 0.0);
    }

    #[test]
    fn london_to_new_york() {
        let london = coordinate(51.5074, -0.1278);
        let new_york = coordinate(40.7128, -74.0060);

        assert_abs_diff_eq!(
            HaversineOracle.distance_km(&london, &new_york),
            5570.0,
            epsilon = 10.0
        );
    }

    #[test]
    fn one_degree_of_latitude() {
        let distance = HaversineOracle.distance_km(&coordinate(0.0, 0.0), &coordinate(1.0, 0.0));
        assert_abs_diff_eq!(distance, 111.195, epsilon = 0.01);
    }

    #[test]
    fn wraps_around_the_antimeridian() {
        let west = coordinate(0.0, 179.5);
        let east = coordinate(0.0, -179.5);

        assert_abs_diff_eq!(HaversineOracle.distance_km(&west, &east), 111.195, epsilon = 0.01);
    }
}
