//! Pure 2D geometry helpers for diagram construction.
//!
//! All angles are degrees; conversion to radians happens internally. No
//! function here touches I/O or shared state.

use digkit_core::{DiagramError, Result};

/// Convert polar coordinates to Cartesian.
pub fn polar_to_cartesian(distance: f64, angle_deg: f64) -> (f64, f64) {
    let angle = angle_deg.to_radians();
    (distance * angle.cos(), distance * angle.sin())
}

/// Corners of an axis-aligned square around a center, as a closed 5-point
/// sequence: four corners counter-clockwise from bottom-left, then the
/// first corner repeated to close the loop.
pub fn square_corners(cx: f64, cy: f64, side: f64) -> Result<[(f64, f64); 5]> {
    if side <= 0.0 {
        return Err(DiagramError::InvalidGeometry(format!(
            "square side must be positive, got {}",
            side
        )));
    }
    let h = side / 2.0;
    Ok([
        (cx - h, cy - h),
        (cx + h, cy - h),
        (cx + h, cy + h),
        (cx - h, cy + h),
        (cx - h, cy - h),
    ])
}

/// Normalize a vector to unit length. Zero-length input yields (0, 0) so
/// callers get a zero offset instead of a division by zero.
pub fn unit_vector(vx: f64, vy: f64) -> (f64, f64) {
    let norm = vx.hypot(vy);
    if norm > 0.0 {
        (vx / norm, vy / norm)
    } else {
        (0.0, 0.0)
    }
}

/// Rotate a vector 90 degrees counter-clockwise.
pub fn perpendicular(vx: f64, vy: f64) -> (f64, f64) {
    (-vy, vx)
}

/// Rotate a point about the origin, counter-clockwise, by degrees.
pub fn rotate_about_origin(x: f64, y: f64, theta_deg: f64) -> (f64, f64) {
    let theta = theta_deg.to_radians();
    let (sin, cos) = theta.sin_cos();
    (x * cos - y * sin, x * sin + y * cos)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < EPS, "{} != {}", a, b);
    }

    #[test]
    fn test_polar_preserves_magnitude() {
        for &distance in &[0.5, 1.0, 42.0, 9000.0] {
            for angle in 0..360 {
                let (x, y) = polar_to_cartesian(distance, angle as f64);
                assert_close(x.hypot(y), distance);
            }
        }
    }

    #[test]
    fn test_polar_known_angles() {
        let (x, y) = polar_to_cartesian(9000.0, 45.0);
        assert_close(x, 9000.0 * std::f64::consts::FRAC_1_SQRT_2);
        assert_close(y, 9000.0 * std::f64::consts::FRAC_1_SQRT_2);

        let (x, y) = polar_to_cartesian(1.0, 180.0);
        assert_close(x, -1.0);
        assert_close(y, 0.0);
    }

    #[test]
    fn test_square_corners_closed_and_equidistant() {
        let corners = square_corners(10.0, -4.0, 2.0).unwrap();
        assert_eq!(corners[0], corners[4]);

        let expected = 2.0 * std::f64::consts::SQRT_2 / 2.0;
        for &(x, y) in &corners[..4] {
            assert_close((x - 10.0).hypot(y - -4.0), expected);
        }
    }

    #[test]
    fn test_square_corners_ordering() {
        let corners = square_corners(0.0, 0.0, 2.0).unwrap();
        assert_eq!(corners[0], (-1.0, -1.0));
        assert_eq!(corners[1], (1.0, -1.0));
        assert_eq!(corners[2], (1.0, 1.0));
        assert_eq!(corners[3], (-1.0, 1.0));
    }

    #[test]
    fn test_square_corners_rejects_non_positive_side() {
        assert!(matches!(
            square_corners(0.0, 0.0, 0.0),
            Err(DiagramError::InvalidGeometry(_))
        ));
        assert!(matches!(
            square_corners(0.0, 0.0, -1.0),
            Err(DiagramError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn test_unit_vector() {
        let (ux, uy) = unit_vector(3.0, 4.0);
        assert_close(ux, 0.6);
        assert_close(uy, 0.8);

        assert_eq!(unit_vector(0.0, 0.0), (0.0, 0.0));
    }

    #[test]
    fn test_perpendicular_is_ccw() {
        assert_eq!(perpendicular(1.0, 0.0), (0.0, 1.0));
        assert_eq!(perpendicular(0.0, 1.0), (-1.0, 0.0));
    }

    #[test]
    fn test_rotation_preserves_norm() {
        for angle in [-270.0, -90.0, 0.0, 33.3, 90.0, 210.0] {
            let (x, y) = rotate_about_origin(3.0, -7.0, angle);
            assert_close(x.hypot(y), 3.0_f64.hypot(-7.0));
        }
    }

    #[test]
    fn test_rotation_round_trip() {
        let (x, y) = rotate_about_origin(12.5, 4.25, 77.0);
        let (bx, by) = rotate_about_origin(x, y, -77.0);
        assert_close(bx, 12.5);
        assert_close(by, 4.25);
    }

    #[test]
    fn test_rotation_quarter_turn() {
        let (x, y) = rotate_about_origin(1.0, 0.0, 90.0);
        assert_close(x, 0.0);
        assert_close(y, 1.0);
    }
}
