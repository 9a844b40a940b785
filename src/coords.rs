//! This module contains the coordinate value type shared by every other part of the game, along
//! with the validation that keeps out-of-range positions from ever reaching the scoring code.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The largest absolute latitude, in degrees, of a valid coordinate.
pub const MAX_LATITUDE: f64 = 90.0;

/// The largest absolute longitude, in degrees, of a valid coordinate.
pub const MAX_LONGITUDE: f64 = 180.0;

/// This struct represents a position on the globe in decimal degrees. It can only be built through
/// [`Coordinate::new`] or deserialization, both of which check that the latitude lies within
/// `[-90, 90]` and the longitude within `[-180, 180]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Degrees")]
pub struct Coordinate {
    /// The latitude in degrees, positive towards the north.
    #[serde(rename = "lat")]
    latitude: f64,
    /// The longitude in degrees, positive towards the east.
    #[serde(rename = "lng")]
    longitude: f64,
}

impl Coordinate {
    /// Returns the latitude of the coordinate in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude of the coordinate in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Builds a coordinate from a latitude and a longitude in degrees.
    ///
    /// # Errors
    ///
    /// Fails with [`ValidationError::Latitude`] or [`ValidationError::Longitude`] if either value
    /// is not finite or falls out of its range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ValidationError> {
        if !latitude.is_finite() || latitude.abs() > MAX_LATITUDE {
            return Err(ValidationError::Latitude(latitude));
        }
        if !longitude.is_finite() || longitude.abs() > MAX_LONGITUDE {
            return Err(ValidationError::Longitude(longitude));
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Builds a coordinate without checking its bounds. Callers must guarantee both values are in
    /// range.
    pub(crate) const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

impl TryFrom<Degrees> for Coordinate {
    type Error = ValidationError;

    fn try_from(value: Degrees) -> Result<Self, Self::Error> {
        Self::new(value.lat, value.lng)
    }
}

/// The unchecked wire form of a coordinate, run through [`Coordinate::new`] when deserializing.
#[derive(Deserialize)]
struct Degrees {
    /// The latitude as found in the input.
    lat: f64,
    /// The longitude as found in the input.
    lng: f64,
}

/// This enum holds the reasons a coordinate can be rejected at the input boundary.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ValidationError {
    /// The text could not be read as a pair of decimal degrees.
    #[error("expected a coordinate in the format `lat, lng`, got `{0}`")]
    Format(String),
    /// The latitude is not finite or lies outside `[-90, 90]`.
    #[error("latitude {0} is outside the range -90..=90")]
    Latitude(f64),
    /// The longitude is not finite or lies outside `[-180, 180]`.
    #[error("longitude {0} is outside the range -180..=180")]
    Longitude(f64),
}
