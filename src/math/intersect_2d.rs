use super::{Point2, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Returns `true` if open segment `a`-`b` properly crosses open segment `c`-`d`.
///
/// Both endpoints of each segment must lie strictly on opposite sides of the
/// other segment's supporting line. Endpoint touches and collinear overlaps
/// are not crossings.
#[must_use]
pub fn segments_cross(a: &Point2, b: &Point2, c: &Point2, d: &Point2) -> bool {
    let cd = d - c;
    let ab = b - a;
    let side_a = cd.perp(&(a - c));
    let side_b = cd.perp(&(b - c));
    let side_c = ab.perp(&(c - a));
    let side_d = ab.perp(&(d - a));
    side_a * side_b < 0.0 && side_c * side_d < 0.0
}

/// Intersection point of the infinite lines through `a`-`b` and `c`-`d`.
///
/// Solved parametrically along `c`-`d`: `c + k * (d - c)`.
///
/// # Errors
///
/// Returns `GeometryError::ParallelLines` if the lines are parallel (or either
/// pair of points coincides). The check is relative to the segment lengths.
pub fn lines_intersection(a: &Point2, b: &Point2, c: &Point2, d: &Point2) -> Result<Point2> {
    let ab = b - a;
    let cd = d - c;
    let denom = cd.perp(&ab);
    if denom.abs() <= TOLERANCE * ab.norm() * cd.norm() {
        return Err(GeometryError::ParallelLines.into());
    }
    let k = ab.perp(&(c - a)) / denom;
    Ok(c + cd * k)
}
