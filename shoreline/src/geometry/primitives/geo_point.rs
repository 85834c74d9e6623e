use std::fmt::{Display, Formatter};

use crate::ShorelineError;
use crate::geometry::geo_traits::AngularDistanceTo;
use crate::geometry::geodesic;
use crate::geometry::primitives::UnitVector;

/// Latitude/longitude pair in decimal degrees (WGS-84 convention).
///
/// Any pair of values can be stored, so that raw (possibly corrupt) records can be represented.
/// Use [`GeoPoint::validate`] before relying on the coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        GeoPoint { lat, lng }
    }

    /// Creates a point from the longitude-first order used by GeoJSON and most external formats.
    pub const fn from_lng_lat(lng: f64, lat: f64) -> Self {
        GeoPoint { lat, lng }
    }

    /// `true` if both coordinates are finite and within `[-90, 90]` x `[-180, 180]`.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }

    pub fn validate(&self) -> Result<(), ShorelineError> {
        match self.is_valid() {
            true => Ok(()),
            false => Err(ShorelineError::InvalidPoint {
                lat: self.lat,
                lng: self.lng,
            }),
        }
    }

    /// Position of the point on the unit sphere (earth-centered, z towards the north pole).
    pub fn to_unit_vector(&self) -> UnitVector {
        let (phi, lambda) = (self.lat.to_radians(), self.lng.to_radians());
        UnitVector(
            phi.cos() * lambda.cos(),
            phi.cos() * lambda.sin(),
            phi.sin(),
        )
    }
}

impl AngularDistanceTo<GeoPoint> for GeoPoint {
    #[inline(always)]
    fn angle_to(&self, other: &GeoPoint) -> f64 {
        geodesic::haversine_angle(self, other)
    }
}

impl From<(f64, f64)> for GeoPoint {
    /// Interprets the tuple as `(lat, lng)`.
    fn from((lat, lng): (f64, f64)) -> Self {
        GeoPoint { lat, lng }
    }
}

impl From<GeoPoint> for (f64, f64) {
    fn from(p: GeoPoint) -> Self {
        (p.lat, p.lng)
    }
}

impl Display for GeoPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}
