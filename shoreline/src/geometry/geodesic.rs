//! All distances are great-circle distances on a sphere with the IUGG mean Earth radius.
//!
//! Longitude differences are always taken along the shorter arc, so points on either side of the
//! anti-meridian are close to each other. Every formula clamps its intermediate terms to the
//! valid domain of `asin`/`sqrt`, near-antipodal inputs never produce NaN.

use crate::geometry::primitives::GeoPoint;

/// Mean radius of the Earth (IUGG R1), in meters
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// Signed difference `to - from` in degrees of longitude, wrapped into `[-180, 180]`.
pub fn lng_delta(from: f64, to: f64) -> f64 {
    let delta = (to - from) % 360.0;
    if delta > 180.0 {
        delta - 360.0
    } else if delta < -180.0 {
        delta + 360.0
    } else {
        delta
    }
}

/// Central angle (radians) between two points, using the haversine formula.
pub fn haversine_angle(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let (phi_a, phi_b) = (a.lat.to_radians(), b.lat.to_radians());
    let d_phi = (b.lat - a.lat).to_radians();
    let d_lambda = lng_delta(a.lng, b.lng).to_radians();

    let h = (d_phi / 2.0).sin().powi(2)
        + phi_a.cos() * phi_b.cos() * (d_lambda / 2.0).sin().powi(2);
    let h = h.clamp(0.0, 1.0);

    2.0 * f64::atan2(h.sqrt(), (1.0 - h).sqrt())
}

/// Great-circle distance between two points, in meters.
pub fn distance_m(a: &GeoPoint, b: &GeoPoint) -> f64 {
    angle_to_meters(haversine_angle(a, b))
}

pub fn angle_to_meters(angle: f64) -> f64 {
    angle * EARTH_RADIUS_M
}

/// Converts the length of a chord of the unit sphere into the central angle it spans.
pub fn chord_to_angle(chord: f64) -> f64 {
    2.0 * f64::asin((chord / 2.0).clamp(0.0, 1.0))
}
