/// Precondition failures reported by curve operations.
///
/// Numerical degeneracies (cusps, straight pieces) are not errors; they
/// resolve to the documented fallback values instead.
#[derive(Debug, thiserror::Error)]
pub enum CurveError {
    #[error("an open cubic B-spline needs at least 4 control points, got {got}")]
    TooFewControls { got: usize },
    #[error("too many control points: {got} > {max}")]
    TooManyControls { got: usize, max: usize },
    #[error("control point {index} is not finite")]
    NonFiniteControl { index: usize },
    #[error("control point {index} is outside the coordinate bounds")]
    CoordinateOutOfBounds { index: usize },
    #[error("query point {index} is not finite")]
    NonFiniteQuery { index: usize },
    #[error("sampling interval {0} must lie in [1e-6, 1]")]
    InvalidInterval(f64),
    #[error("sample cache would hold {samples} positions, max {max}")]
    SampleBudgetExceeded { samples: usize, max: usize },
    #[error("segment {segment} out of range (segment count {segment_count})")]
    SegmentOutOfRange { segment: usize, segment_count: usize },
    #[error("local control index {0} out of range 0..=3")]
    LocalIndexOutOfRange(usize),
    #[error("local parameter {0} outside [0, 1]")]
    ParameterOutOfRange(f64),
    #[error("sample index {index} out of range (cache length {len})")]
    SampleOutOfRange { index: usize, len: usize },
    #[error("sample cache is empty; install control points first")]
    EmptySampleCache,
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
    #[error("unsupported curve document version {0}")]
    UnsupportedVersion(u32),
    #[error("invalid curve document: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CurveError>;
