use std::cmp::Ordering;
use std::fmt::{Debug, Display};

use crate::entities::DistanceResult;

/// Relative tolerance used by [`FPA`]
pub const FPA_REL_TOLERANCE: f64 = 1e-9;

/// Floating point distance (or angle) compared with a relative tolerance of [`FPA_REL_TOLERANCE`],
/// scaled to the larger magnitude of the two operands (at least 1.0).
/// Values within a few ulps are equal as well, so tiny distances near zero also compare equal.
#[derive(Debug, Clone, Copy)]
pub struct FPA(pub f64);

impl FPA {
    fn tolerance(&self, other: &Self) -> f64 {
        FPA_REL_TOLERANCE * self.0.abs().max(other.0.abs()).max(1.0)
    }
}

impl From<&DistanceResult> for FPA {
    fn from(result: &DistanceResult) -> Self {
        FPA(result.distance)
    }
}

impl PartialEq for FPA {
    fn eq(&self, other: &Self) -> bool {
        let epsilon = self.tolerance(other);
        float_cmp::approx_eq!(f64, self.0, other.0, epsilon = epsilon, ulps = 4)
    }
}

impl PartialOrd for FPA {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else {
            self.0.partial_cmp(&other.0)
        }
    }
}

impl Display for FPA {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}~", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_tolerance() {
        assert_eq!(FPA(1_000_000.0), FPA(1_000_000.0005));
        assert_ne!(FPA(1_000_000.0), FPA(1_000_000.01));
        assert_eq!(FPA(0.0), FPA(1e-12));
        assert!(FPA(1.0) < FPA(1.1));
        assert_eq!(FPA(2.0).partial_cmp(&FPA(2.0 + 1e-12)), Some(Ordering::Equal));
    }
}
