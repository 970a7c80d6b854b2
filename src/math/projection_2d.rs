use std::f64::consts::FRAC_PI_2;

use super::{Point2, Vector2};
use crate::error::{GeometryError, Result};

/// Side of a directed curve, relative to its direction of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Tangent rotated by +90° (counter-clockwise).
    Left,
    /// Tangent rotated by −90° (clockwise).
    Right,
}

impl Side {
    /// Returns the other side.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Rotation applied to a bearing to point towards this side, in radians.
    #[must_use]
    pub fn rotation(self) -> f64 {
        match self {
            Self::Left => FRAC_PI_2,
            Self::Right => -FRAC_PI_2,
        }
    }
}

/// Returns the point at `distance` from `a`, perpendicular to the bearing `a → b`.
///
/// The bearing `atan2(b.y - a.y, b.x - a.x)` is rotated by ±90° towards `side`
/// and the result is `a + distance * (cos θ, sin θ)`.
///
/// Projecting from the other end of a segment with the opposite side lands on
/// the same side of the segment:
/// `perpendicular_point(b, a, d, side.opposite())` is the offset of `b`.
///
/// # Errors
///
/// Returns `GeometryError::DegenerateSegment` if `a` and `b` coincide.
pub fn perpendicular_point(a: &Point2, b: &Point2, distance: f64, side: Side) -> Result<Point2> {
    if a == b {
        return Err(GeometryError::DegenerateSegment { x: a.x, y: a.y }.into());
    }
    let bearing = (b.y - a.y).atan2(b.x - a.x);
    let theta = bearing + side.rotation();
    Ok(a + Vector2::new(theta.cos(), theta.sin()) * distance)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::error::ParallelCurveError;
    use crate::math::distance_2d::segment_length;

    const TOL: f64 = 1e-9;

    #[test]
    fn opposite_side() {
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Right.opposite(), Side::Left);
    }

    #[test]
    fn left_of_eastward_segment_is_north() {
        let pt = perpendicular_point(&Point2::new(0.0, 0.0), &Point2::new(10.0, 0.0), 2.0, Side::Left)
            .unwrap();
        assert_abs_diff_eq!(pt, Point2::new(0.0, 2.0), epsilon = TOL);
    }

    #[test]
    fn right_of_eastward_segment_is_south() {
        let pt =
            perpendicular_point(&Point2::new(0.0, 0.0), &Point2::new(10.0, 0.0), 2.0, Side::Right)
                .unwrap();
        assert_abs_diff_eq!(pt, Point2::new(0.0, -2.0), epsilon = TOL);
    }

    #[test]
    fn reversed_projection_lands_on_same_side() {
        // Offset of the end point b, computed from b towards a.
        let a = Point2::new(1.0, 1.0);
        let b = Point2::new(4.0, 5.0);
        let start = perpendicular_point(&a, &b, 5.0, Side::Left).unwrap();
        let end = perpendicular_point(&b, &a, 5.0, Side::Right).unwrap();

        // Left normal of (3, 4) is (-4, 3) / 5.
        assert_abs_diff_eq!(start, Point2::new(-3.0, 4.0), epsilon = TOL);
        assert_abs_diff_eq!(end, Point2::new(0.0, 8.0), epsilon = TOL);
        assert_abs_diff_eq!(end - start, b - a, epsilon = TOL);
    }

    #[test]
    fn zero_distance_returns_anchor() {
        let a = Point2::new(3.0, -2.0);
        let pt = perpendicular_point(&a, &Point2::new(7.0, 1.0), 0.0, Side::Right).unwrap();
        assert_abs_diff_eq!(pt, a, epsilon = TOL);
    }

    #[test]
    fn result_is_at_requested_distance() {
        let a = Point2::new(-2.5, 0.75);
        let b = Point2::new(3.0, -6.0);
        for side in [Side::Left, Side::Right] {
            let pt = perpendicular_point(&a, &b, 1.5, side).unwrap();
            assert_abs_diff_eq!(segment_length(&a, &pt), 1.5, epsilon = TOL);
            // Perpendicular to a → b.
            assert_abs_diff_eq!((pt - a).dot(&(b - a)), 0.0, epsilon = TOL);
        }
    }

    #[test]
    fn short_segment_is_not_degenerate() {
        let a = Point2::new(0.0, 0.0);
        let pt = perpendicular_point(&a, &Point2::new(1e-12, 0.0), 3e-13, Side::Left).unwrap();
        assert_abs_diff_eq!(pt, Point2::new(0.0, 3e-13), epsilon = 1e-20);
    }

    #[test]
    fn coincident_points_are_degenerate() {
        let a = Point2::new(1.0, 1.0);
        let err = perpendicular_point(&a, &a, 2.0, Side::Left).unwrap_err();
        assert!(matches!(
            err,
            ParallelCurveError::Geometry(GeometryError::DegenerateSegment { .. })
        ));
    }
}
