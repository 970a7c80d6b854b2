mod overlap;
mod parallel_curve_2d;

pub use overlap::resolve_overlaps;
pub use parallel_curve_2d::{build_offset, ParallelCurve2D};
