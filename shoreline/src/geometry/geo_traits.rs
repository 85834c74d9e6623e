use crate::geometry::primitives::UnitVector;

/// Trait for types that can compute the minimum great-circle distance between `Self` and `T`.
pub trait AngularDistanceTo<T> {
    /// Minimum central angle (radians) between the two primitives. Will be 0 when they touch.
    fn angle_to(&self, other: &T) -> f64;

    /// Minimum distance along the surface of the Earth, in meters.
    fn distance_to(&self, other: &T) -> f64 {
        crate::geometry::geodesic::angle_to_meters(self.angle_to(other))
    }
}

/// Trait for bounding volumes that can provide a lower bound on the chord length to a point on the unit sphere.
///
/// Chord length is strictly monotone in the central angle, so a chord lower bound converts
/// into an exact angular lower bound via [`chord_to_angle`](crate::geometry::geodesic::chord_to_angle).
pub trait ChordLowerBound {
    /// Squared Euclidean distance from `point` to the closest point of the volume. 0 if inside.
    fn sq_chord_lower_bound(&self, point: &UnitVector) -> f64;
}
