mod batch;
mod brute_force;
mod coastal_index;

/// Bounding volume hierarchy used to accelerate the queries
pub mod tree;

#[doc(inline)]
pub use brute_force::BruteForce;
#[doc(inline)]
pub use coastal_index::CoastalDistanceIndex;

use crate::Result;
use crate::entities::DistanceResult;
use crate::geometry::primitives::GeoPoint;

/// Trait for structures answering nearest-coastline queries.
pub trait BoundaryDistance: Sync {
    /// Minimum distance from `point` to the coastline.
    /// Fails with [`InvalidPoint`](crate::ShorelineError::InvalidPoint) for NaN or out-of-range coordinates.
    fn nearest_distance(&self, point: &GeoPoint) -> Result<DistanceResult>;

    /// Evaluates every point independently, results are index-aligned with `points`.
    fn nearest_distances(&self, points: &[GeoPoint]) -> Vec<Result<DistanceResult>> {
        points.iter().map(|p| self.nearest_distance(p)).collect()
    }
}
