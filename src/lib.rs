pub mod error;
pub mod math;
pub mod operations;

pub use error::{ParallelCurveError, Result};
pub use math::projection_2d::Side;
pub use math::Point2;
pub use operations::offset::{build_offset, resolve_overlaps, ParallelCurve2D};
