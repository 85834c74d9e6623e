/// Errors raised while building or querying a coastal distance index.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShorelineError {
    /// The boundary cannot be indexed: too few points, or a vertex with invalid coordinates.
    /// Fatal to index construction.
    #[error("invalid boundary: {reason}")]
    InvalidBoundary { reason: String },

    /// A query point has NaN or out-of-range coordinates.
    /// Only affects the point itself when evaluated as part of a batch.
    #[error("invalid point: latitude {lat}, longitude {lng}")]
    InvalidPoint { lat: f64, lng: f64 },

    /// The point was never evaluated because the batch was terminated early.
    #[error("query cancelled before the point was evaluated")]
    Cancelled,
}

impl ShorelineError {
    pub(crate) fn invalid_boundary(reason: impl Into<String>) -> Self {
        ShorelineError::InvalidBoundary {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ShorelineError>;
