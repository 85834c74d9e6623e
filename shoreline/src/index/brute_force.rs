use crate::Result;
use crate::entities::{Coastline, DistanceResult};
use crate::geometry::geodesic;
use crate::geometry::primitives::GeoPoint;
use crate::index::BoundaryDistance;
use crate::index::tree::{QueryProbe, TreeEntry};
use crate::util::DistanceModel;

/// Reference implementation: scans every vertex (or segment) of the coastline for every query.
///
/// O(n) per query. Scores entries exactly like [`CoastalDistanceIndex`](crate::index::CoastalDistanceIndex),
/// so both agree on the distance and on the nearest feature.
#[derive(Clone, Debug)]
pub struct BruteForce {
    entries: Vec<TreeEntry>,
}

impl BruteForce {
    pub fn new(coastline: &Coastline, model: DistanceModel) -> Self {
        BruteForce {
            entries: TreeEntry::from_coastline(coastline, model),
        }
    }
}

impl BoundaryDistance for BruteForce {
    fn nearest_distance(&self, point: &GeoPoint) -> Result<DistanceResult> {
        point.validate()?;
        let probe = QueryProbe::new(*point);

        let mut best: Option<(f64, &TreeEntry)> = None;
        for entry in &self.entries {
            let angle = entry.angle_to(&probe);
            //strict comparison: the first entry in (ring, index) order wins ties
            if best.is_none_or(|(best_angle, _)| angle < best_angle) {
                best = Some((angle, entry));
            }
        }
        let (angle, entry) = best.expect("a coastline always has at least one entry");

        Ok(DistanceResult {
            distance: geodesic::angle_to_meters(angle),
            nearest: entry.feature,
        })
    }
}
