use itertools::Itertools;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::entities::{Coastline, CoastlineBoundary};
use crate::geometry::primitives::GeoPoint;
use crate::io::ext_repr::{ExtBoundaryResource, ExtFeature, ExtGeometry, ExtPosition};
use crate::{Result, ShorelineError};

/// Which features of a feature collection make up the coastline
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FeatureSelection {
    /// Only the first feature is used, any others are ignored
    First,
    /// Every ring of every feature is part of the coastline
    #[default]
    All,
}

/// Converts external GeoJSON representations into a [`Coastline`].
///
/// GeoJSON positions are longitude-first, they are reversed into latitude-first [`GeoPoint`]s here.
#[derive(Clone, Debug, Copy, Default)]
pub struct Importer {
    pub feature_selection: FeatureSelection,
}

impl Importer {
    pub fn new(feature_selection: FeatureSelection) -> Importer {
        Importer { feature_selection }
    }

    pub fn import_coastline(&self, ext_resource: &ExtBoundaryResource) -> Result<Coastline> {
        let rings = match ext_resource {
            ExtBoundaryResource::Geometry(geometry) => self.import_geometry(geometry)?,
            ExtBoundaryResource::Feature(feature) => self.import_feature(0, feature)?,
            ExtBoundaryResource::Collection(collection) => {
                let selected = match self.feature_selection {
                    FeatureSelection::First => collection.features.iter().take(1).collect_vec(),
                    FeatureSelection::All => collection.features.iter().collect_vec(),
                };
                if selected.len() < collection.features.len() {
                    debug!(
                        "[IMPORT] ignoring {} of {} features",
                        collection.features.len() - selected.len(),
                        collection.features.len()
                    );
                }
                let mut rings = vec![];
                for (i, feature) in selected.into_iter().enumerate() {
                    rings.extend(self.import_feature(i, feature)?);
                }
                rings
            }
        };
        debug!(
            "[IMPORT] coastline with {} rings, {} points",
            rings.len(),
            rings.iter().map(|r| r.n_points()).sum::<usize>()
        );
        Coastline::new(rings)
    }

    pub fn import_feature(&self, id: usize, ext_feature: &ExtFeature) -> Result<Vec<CoastlineBoundary>> {
        match &ext_feature.geometry {
            Some(geometry) => self.import_geometry(geometry),
            None => {
                warn!("[IMPORT] feature {id} has no geometry, skipping");
                Ok(vec![])
            }
        }
    }

    pub fn import_geometry(&self, ext_geometry: &ExtGeometry) -> Result<Vec<CoastlineBoundary>> {
        ext_geometry
            .rings()
            .into_iter()
            .map(ext_ring_to_boundary)
            .collect()
    }
}

fn ext_ring_to_boundary(ring: &[ExtPosition]) -> Result<CoastlineBoundary> {
    let points = ring
        .iter()
        .map(|pos| match pos.as_slice() {
            [lng, lat, ..] => Ok(GeoPoint::from_lng_lat(*lng, *lat)),
            _ => Err(ShorelineError::invalid_boundary(format!(
                "position {pos:?} has fewer than 2 coordinates"
            ))),
        })
        .collect::<Result<Vec<GeoPoint>>>()?;
    CoastlineBoundary::new(points)
}
