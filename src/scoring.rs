//! This module turns the distance between a guess and its target into points.

/// The points awarded for a guess landing exactly on its target.
pub const MAX_ROUND_SCORE: u32 = 1000;

/// The default decay constant of the score curve, in kilometers.
pub const DEFAULT_SIGMA: f64 = 50.0;

/// Returns the unrounded share of [`MAX_ROUND_SCORE`] awarded at `distance_km` for a curve of width
/// `sigma`, namely `exp(-(d/σ)² / 2)`. It is 1 at distance zero and strictly positive for every
/// finite distance.
#[must_use]
pub fn gaussian_factor(distance_km: f64, sigma: f64) -> f64 {
    (-0.5 * (distance_km / sigma).powi(2)).exp()
}

/// Returns the points for a guess `distance_km` away from its target. The score follows a gaussian
/// bell of width `sigma`: 1000 at distance zero, about 607 one sigma away and about 135 two sigmas
/// away, going down to 0 once the rounded value vanishes.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "The rounded value always lies within 0..=1000."
)]
#[must_use]
pub fn gaussian_score(distance_km: f64, sigma: f64) -> u32 {
    (f64::from(MAX_ROUND_SCORE) * gaussian_factor(distance_km, sigma)).round() as u32
}
