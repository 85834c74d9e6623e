use log::debug;

use crate::Result;
use crate::entities::{Coastline, CoastlineBoundary, DistanceResult};
use crate::geometry::geodesic;
use crate::geometry::primitives::GeoPoint;
use crate::index::tree::{QueryProbe, SphereTree, TreeEntry};
use crate::index::{BoundaryDistance, batch};
use crate::util::terminator::NoTerminator;
use crate::util::{IndexConfig, Terminator, assertions};

/// Answers minimum-distance queries from geographic points to a coastline.
///
/// Built once from a [`Coastline`] and immutable afterwards: it can be shared between threads
/// without any locking. Results are exact, i.e. equal to a full scan of the coastline
/// (see [`BruteForce`](crate::index::BruteForce)), only computed faster.
#[derive(Clone, Debug)]
pub struct CoastalDistanceIndex {
    coastline: Coastline,
    tree: SphereTree,
    config: IndexConfig,
}

impl CoastalDistanceIndex {
    /// Builds an index over a single polyline given as raw points.
    /// Fails with [`InvalidBoundary`](crate::ShorelineError::InvalidBoundary) if there are fewer than 2 points
    /// or any of them has invalid coordinates.
    pub fn build(points: Vec<GeoPoint>, config: IndexConfig) -> Result<Self> {
        let boundary = CoastlineBoundary::new(points)?;
        Ok(Self::from_boundary(boundary, config))
    }

    pub fn from_boundary(boundary: CoastlineBoundary, config: IndexConfig) -> Self {
        Self::from_coastline(boundary.into(), config)
    }

    pub fn from_coastline(coastline: Coastline, config: IndexConfig) -> Self {
        let entries = TreeEntry::from_coastline(&coastline, config.model);
        let tree = SphereTree::new(entries, config.leaf_size);

        debug!(
            "[IDX] built {:?} index: {} rings, {} entries, {} nodes, depth {}",
            config.model,
            coastline.rings().len(),
            tree.entries().len(),
            tree.root().n_nodes(),
            tree.root().depth()
        );
        debug_assert!(assertions::tree_is_consistent(&tree));

        Self {
            coastline,
            tree,
            config,
        }
    }

    /// Evaluates a batch of points. Stops evaluating once `terminator` fires: the remaining
    /// points are reported as [`Cancelled`](crate::ShorelineError::Cancelled), while the
    /// results of the points evaluated before that stay valid.
    pub fn nearest_distances_until(
        &self,
        points: &[GeoPoint],
        terminator: &impl Terminator,
    ) -> Vec<Result<DistanceResult>> {
        let parallel = self.config.parallel && points.len() >= self.config.parallel_threshold;
        batch::evaluate(self, points, parallel, terminator)
    }

    pub fn coastline(&self) -> &Coastline {
        &self.coastline
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    pub fn tree(&self) -> &SphereTree {
        &self.tree
    }
}

impl BoundaryDistance for CoastalDistanceIndex {
    fn nearest_distance(&self, point: &GeoPoint) -> Result<DistanceResult> {
        point.validate()?;
        let probe = QueryProbe::new(*point);
        let (entry, angle) = self.tree.nearest(&probe);

        Ok(DistanceResult {
            distance: geodesic::angle_to_meters(angle),
            nearest: entry.feature,
        })
    }

    fn nearest_distances(&self, points: &[GeoPoint]) -> Vec<Result<DistanceResult>> {
        self.nearest_distances_until(points, &NoTerminator)
    }
}
