use thiserror::Error;

/// Top-level error type for parallel curve construction.
#[derive(Debug, Error)]
pub enum ParallelCurveError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate segment: reference points coincide at ({x}, {y})")]
    DegenerateSegment { x: f64, y: f64 },

    #[error("lines are parallel")]
    ParallelLines,

    #[error("cosine {cosine} is outside [-1, 1]")]
    AngleOutOfDomain { cosine: f64 },
}

/// Errors related to offset operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`ParallelCurveError`].
pub type Result<T> = std::result::Result<T, ParallelCurveError>;
