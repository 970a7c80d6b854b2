use tracing::{debug, trace};

use crate::error::Result;
use crate::math::intersect_2d::{lines_intersection, segments_cross};
use crate::math::Point2;

/// Trims local self-intersections from a raw offset polyline.
///
/// Slides a window of four points `a1, a2, b1, b2` (two consecutive raw offset
/// segments `a1-a2` and `b1-b2`) along the curve. When the two segments
/// properly cross, `a2` is moved to the crossing point and `b1` is dropped,
/// so each detected crossing removes exactly one point.
///
/// Trims are visible to later windows; removals happen after the scan, in
/// descending index order.
///
/// This is a single forward pass. Crossings between non-adjacent segments, and
/// new adjacencies created by a removal, are not checked.
///
/// # Errors
///
/// Returns `GeometryError::ParallelLines` if a crossing pair has (numerically)
/// parallel supporting lines.
pub fn resolve_overlaps(mut points: Vec<Point2>) -> Result<Vec<Point2>> {
    if points.len() < 4 {
        return Ok(points);
    }

    let mut to_remove = Vec::new();
    for i in 3..points.len() {
        let (a1, a2, b1, b2) = (points[i - 3], points[i - 2], points[i - 1], points[i]);
        if segments_cross(&a1, &a2, &b1, &b2) {
            let crossing = lines_intersection(&a1, &a2, &b1, &b2)?;
            trace!(window = i, x = crossing.x, y = crossing.y, "trimming offset corner");
            points[i - 2] = crossing;
            to_remove.push(i - 1);
        }
    }

    for &idx in to_remove.iter().rev() {
        points.remove(idx);
    }
    debug!(removed = to_remove.len(), remaining = points.len(), "resolved overlaps");

    Ok(points)
}
