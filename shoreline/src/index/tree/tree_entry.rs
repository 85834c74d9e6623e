use itertools::Either;

use crate::entities::{Coastline, NearestFeature};
use crate::geometry::geo_traits::AngularDistanceTo;
use crate::geometry::primitives::{AABox, Arc, GeoPoint, UnitVector};
use crate::util::DistanceModel;

/// A single vertex or segment of the coastline, as stored in the [`SphereTree`](crate::index::tree::SphereTree)
#[derive(Clone, Debug)]
pub struct TreeEntry {
    pub bbox: AABox,
    pub shape: EntryShape,
    pub feature: NearestFeature,
}

#[derive(Clone, Debug)]
pub enum EntryShape {
    Vertex(GeoPoint),
    Arc(Arc),
}

/// Query point with its position on the unit sphere precomputed
#[derive(Clone, Copy, Debug)]
pub struct QueryProbe {
    pub point: GeoPoint,
    pub vector: UnitVector,
}

impl QueryProbe {
    pub fn new(point: GeoPoint) -> Self {
        QueryProbe {
            point,
            vector: point.to_unit_vector(),
        }
    }
}

impl TreeEntry {
    /// Central angle (radians) between the entry and the probe
    #[inline(always)]
    pub fn angle_to(&self, probe: &QueryProbe) -> f64 {
        match &self.shape {
            EntryShape::Vertex(v) => v.angle_to(&probe.point),
            EntryShape::Arc(arc) => arc.angle_to_probe(&probe.point, &probe.vector),
        }
    }

    /// All entries of a coastline under the given model, ordered by (ring, index)
    pub fn from_coastline(coastline: &Coastline, model: DistanceModel) -> Vec<TreeEntry> {
        coastline
            .rings()
            .iter()
            .enumerate()
            .flat_map(|(ring, boundary)| match model {
                DistanceModel::Vertex => {
                    Either::Left(boundary.points().iter().enumerate().map(move |(index, p)| {
                        TreeEntry {
                            bbox: AABox::from_point(p.to_unit_vector()),
                            shape: EntryShape::Vertex(*p),
                            feature: NearestFeature::Vertex { ring, index },
                        }
                    }))
                }
                DistanceModel::Segment => {
                    Either::Right(boundary.arcs().enumerate().map(move |(index, arc)| TreeEntry {
                        bbox: arc.bbox(),
                        shape: EntryShape::Arc(arc),
                        feature: NearestFeature::Segment { ring, index },
                    }))
                }
            })
            .collect()
    }
}
