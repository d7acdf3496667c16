//! Grid snapping utilities.

use kurbo::Point;

/// Default grid cell size in canvas units.
pub const DEFAULT_GRID_SIZE: f64 = 10.0;

/// Snap a point to the nearest grid intersection.
///
/// Each axis is rounded independently to the nearest multiple of
/// `grid_size`. A non-positive grid size disables snapping and returns
/// the point unchanged.
pub fn snap_to_grid(point: Point, grid_size: f64) -> Point {
    if grid_size <= 0.0 {
        return point;
    }
    Point::new(
        (point.x / grid_size).round() * grid_size,
        (point.y / grid_size).round() * grid_size,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_rounds_to_nearest() {
        let snapped = snap_to_grid(Point::new(14.0, 16.0), 10.0);
        assert!((snapped.x - 10.0).abs() < f64::EPSILON);
        assert!((snapped.y - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_snap_exact_multiple_unchanged() {
        let snapped = snap_to_grid(Point::new(30.0, -20.0), 10.0);
        assert!((snapped.x - 30.0).abs() < f64::EPSILON);
        assert!((snapped.y - -20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_snap_negative_coordinates() {
        let snapped = snap_to_grid(Point::new(-14.0, -16.0), 10.0);
        assert!((snapped.x - -10.0).abs() < f64::EPSILON);
        assert!((snapped.y - -20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_grid_disables_snapping() {
        let point = Point::new(13.7, 42.2);
        let snapped = snap_to_grid(point, 0.0);
        assert_eq!(snapped, point);
    }
}
