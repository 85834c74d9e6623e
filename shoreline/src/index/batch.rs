use crate::entities::DistanceResult;
use crate::geometry::primitives::GeoPoint;
use crate::index::BoundaryDistance;
use crate::util::Terminator;
use crate::{Result, ShorelineError};

/// Evaluates a batch of points against `oracle`, each point independently.
///
/// Points still pending when `terminator` fires are reported as [`ShorelineError::Cancelled`],
/// results of points evaluated before that remain untouched.
pub fn evaluate<O>(
    oracle: &O,
    points: &[GeoPoint],
    parallel: bool,
    terminator: &impl Terminator,
) -> Vec<Result<DistanceResult>>
where
    O: BoundaryDistance + ?Sized,
{
    let eval_point = |p: &GeoPoint| match terminator.kill() {
        true => Err(ShorelineError::Cancelled),
        false => oracle.nearest_distance(p),
    };

    #[cfg(feature = "parallel")]
    if parallel {
        use rayon::prelude::*;
        return points.par_iter().map(eval_point).collect();
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    points.iter().map(eval_point).collect()
}
