use crate::entities::CoastlineBoundary;
use crate::{Result, ShorelineError};

/// One or more [`CoastlineBoundary`] rings (mainland, islands, bays...) which together form a coastline.
/// Distances are always measured to the closest ring.
#[derive(Clone, Debug, PartialEq)]
pub struct Coastline {
    rings: Vec<CoastlineBoundary>,
}

impl Coastline {
    pub fn new(rings: Vec<CoastlineBoundary>) -> Result<Self> {
        if rings.is_empty() {
            return Err(ShorelineError::invalid_boundary(
                "a coastline requires at least one boundary",
            ));
        }
        Ok(Coastline { rings })
    }

    pub fn rings(&self) -> &[CoastlineBoundary] {
        &self.rings
    }

    pub fn n_points(&self) -> usize {
        self.rings.iter().map(|r| r.n_points()).sum()
    }

    pub fn n_arcs(&self) -> usize {
        self.rings.iter().map(|r| r.n_arcs()).sum()
    }
}

impl From<CoastlineBoundary> for Coastline {
    fn from(boundary: CoastlineBoundary) -> Self {
        Coastline {
            rings: vec![boundary],
        }
    }
}
