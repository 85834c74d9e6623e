use itertools::Itertools;

use crate::geometry::primitives::{Arc, GeoPoint};
use crate::{Result, ShorelineError};

/// Ordered polyline of [`GeoPoint`]s approximating (part of) a coastline.
///
/// Contains at least 2 points, all with valid coordinates. It is not necessarily closed and
/// consecutive points may coincide. Immutable after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct CoastlineBoundary {
    points: Vec<GeoPoint>,
}

impl CoastlineBoundary {
    pub fn new(points: Vec<GeoPoint>) -> Result<Self> {
        if points.len() < 2 {
            return Err(ShorelineError::invalid_boundary(format!(
                "a boundary requires at least 2 points, got {}",
                points.len()
            )));
        }
        if let Some((i, p)) = points.iter().find_position(|p| !p.is_valid()) {
            return Err(ShorelineError::invalid_boundary(format!(
                "point {i} has invalid coordinates {p}"
            )));
        }
        Ok(CoastlineBoundary { points })
    }

    /// Builds a boundary from `(lat, lng)` pairs
    pub fn try_from_lat_lng(coords: impl IntoIterator<Item = (f64, f64)>) -> Result<Self> {
        Self::new(coords.into_iter().map(GeoPoint::from).collect())
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn n_points(&self) -> usize {
        self.points.len()
    }

    /// The arcs between consecutive points; arc `i` joins point `i` and `i + 1`
    pub fn arcs(&self) -> impl Iterator<Item = Arc> + '_ {
        self.points
            .iter()
            .tuple_windows()
            .map(|(a, b)| Arc::new(*a, *b))
    }

    pub fn n_arcs(&self) -> usize {
        self.points.len() - 1
    }

    /// The same boundary, traversed in the opposite direction
    pub fn reversed(&self) -> Self {
        CoastlineBoundary {
            points: self.points.iter().rev().copied().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_boundaries() {
        assert!(matches!(
            CoastlineBoundary::new(vec![]),
            Err(ShorelineError::InvalidBoundary { .. })
        ));
        assert!(matches!(
            CoastlineBoundary::new(vec![GeoPoint::new(1.0, 2.0)]),
            Err(ShorelineError::InvalidBoundary { .. })
        ));
    }

    #[test]
    fn rejects_invalid_vertices() {
        let err = CoastlineBoundary::try_from_lat_lng([(0.0, 0.0), (f64::NAN, 1.0), (1.0, 1.0)])
            .unwrap_err();
        match err {
            ShorelineError::InvalidBoundary { reason } => assert!(reason.contains("point 1")),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(CoastlineBoundary::try_from_lat_lng([(0.0, 0.0), (0.0, 181.0)]).is_err());
    }

    #[test]
    fn accepts_repeated_points() {
        let b = CoastlineBoundary::try_from_lat_lng([(5.0, 5.0), (5.0, 5.0)]).unwrap();
        assert_eq!(b.n_points(), 2);
        assert_eq!(b.n_arcs(), 1);
        assert!(b.arcs().all(|arc| arc.is_degenerate()));
    }

    #[test]
    fn arcs_follow_point_order() {
        let b = CoastlineBoundary::try_from_lat_lng([(0.0, 0.0), (0.0, 1.0), (1.0, 1.0)]).unwrap();
        let arcs = b.arcs().collect_vec();
        assert_eq!(arcs.len(), 2);
        assert_eq!(arcs[1].start, GeoPoint::new(0.0, 1.0));
        assert_eq!(arcs[1].end, GeoPoint::new(1.0, 1.0));
        assert_eq!(b.reversed().points()[0], GeoPoint::new(1.0, 1.0));
    }
}
