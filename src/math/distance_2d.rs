use super::Point2;
use crate::error::{GeometryError, Result};

/// Returns the Euclidean distance from point `a` to point `b`.
#[must_use]
pub fn segment_length(a: &Point2, b: &Point2) -> f64 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
}

/// Returns the interior angle at `b` of triangle `a`-`b`-`c`, in degrees.
///
/// Uses the law of cosines: `acos((BC² + AB² − AC²) / (2·BC·AB))`.
///
/// # Errors
///
/// - `GeometryError::DegenerateSegment` if `a` or `c` coincides with `b`
/// - `GeometryError::AngleOutOfDomain` if rounding pushes the cosine outside `[-1, 1]`
pub fn vertex_angle(a: &Point2, b: &Point2, c: &Point2) -> Result<f64> {
    let ab = segment_length(a, b);
    let bc = segment_length(b, c);
    let ac = segment_length(a, c);
    if a == b || b == c {
        return Err(GeometryError::DegenerateSegment { x: b.x, y: b.y }.into());
    }

    let cosine = (bc * bc + ab * ab - ac * ac) / (2.0 * bc * ab);
    if !(-1.0..=1.0).contains(&cosine) {
        return Err(GeometryError::AngleOutOfDomain { cosine }.into());
    }
    Ok(cosine.acos().to_degrees())
}
