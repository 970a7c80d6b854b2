use tracing::debug;

use super::overlap::resolve_overlaps;
use crate::error::{OperationError, Result};
use crate::math::projection_2d::{perpendicular_point, Side};
use crate::math::Point2;

/// Builds a curve parallel to an open 2D polyline.
///
/// # Algorithm
///
/// 1. Each segment `A → B` emits two points: the offset of `A` (projected
///    towards `side`) and the offset of `B` (projected from `B` back towards
///    `A` on the opposite rotation, which lands on the same side).
/// 2. One trailing point is appended: the offset of the last vertex, projected
///    from the last segment reversed. It repeats the last point of step 1.
/// 3. Adjacent raw segments that cross at concave corners are trimmed by
///    [`resolve_overlaps`].
///
/// Convex corners are left open (no round or bevel joins), and closed curves
/// get no wrap-around handling.
#[derive(Debug, Clone)]
pub struct ParallelCurve2D {
    points: Vec<Point2>,
    distance: f64,
    side: Side,
}

impl ParallelCurve2D {
    /// Creates a new parallel curve operation.
    #[must_use]
    pub fn new(points: Vec<Point2>, distance: f64, side: Side) -> Self {
        Self {
            points,
            distance,
            side,
        }
    }

    /// Executes the operation: raw offset followed by overlap trimming.
    ///
    /// Returns an empty curve when fewer than 2 points are given.
    ///
    /// # Errors
    ///
    /// - `OperationError::InvalidInput` if the distance is negative or not
    ///   finite, or a point has a non-finite coordinate
    /// - `GeometryError::DegenerateSegment` if two consecutive points coincide
    pub fn execute(&self) -> Result<Vec<Point2>> {
        self.validate()?;
        let raw = self.raw_offset()?;
        let raw_len = raw.len();
        let resolved = resolve_overlaps(raw)?;
        debug!(
            input = self.points.len(),
            raw = raw_len,
            resolved = resolved.len(),
            side = ?self.side,
            "built parallel curve"
        );
        Ok(resolved)
    }

    /// Builds the raw offset polyline, before overlap trimming.
    ///
    /// For `n >= 2` input points the result has `2 * (n - 1) + 1` points.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateSegment` if two consecutive points coincide.
    pub fn raw_offset(&self) -> Result<Vec<Point2>> {
        let n = self.points.len();
        if n < 2 {
            return Ok(Vec::new());
        }

        let mut raw = Vec::with_capacity(2 * (n - 1) + 1);
        for pair in self.points.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            raw.push(perpendicular_point(a, b, self.distance, self.side)?);
            raw.push(perpendicular_point(b, a, self.distance, self.side.opposite())?);
        }

        let last = &self.points[n - 1];
        let before_last = &self.points[n - 2];
        raw.push(perpendicular_point(
            last,
            before_last,
            self.distance,
            self.side.opposite(),
        )?);

        Ok(raw)
    }

    fn validate(&self) -> Result<()> {
        if !self.distance.is_finite() || self.distance < 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "offset distance must be finite and non-negative, got {}",
                self.distance
            ))
            .into());
        }
        if let Some((i, pt)) = self
            .points
            .iter()
            .enumerate()
            .find(|(_, pt)| !pt.x.is_finite() || !pt.y.is_finite())
        {
            return Err(OperationError::InvalidInput(format!(
                "point {i} has non-finite coordinates ({}, {})",
                pt.x, pt.y
            ))
            .into());
        }
        Ok(())
    }
}

/// Offsets `points` by `distance` towards `side` and trims local overlaps.
///
/// Shorthand for `ParallelCurve2D::new(points.to_vec(), distance, side).execute()`.
///
/// # Errors
///
/// See [`ParallelCurve2D::execute`].
pub fn build_offset(points: &[Point2], distance: f64, side: Side) -> Result<Vec<Point2>> {
    ParallelCurve2D::new(points.to_vec(), distance, side).execute()
}
