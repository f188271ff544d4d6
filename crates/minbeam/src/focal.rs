//! Focal geometry: foci placement and string lengths.
//!
//! The string construction: an ellipse is the locus of points whose summed
//! distance to two foci is constant and equal to the major axis. For an
//! arbitrary point set, the maximum string length over the set is the
//! minimal major axis of an ellipse with those foci containing every point.

use nalgebra::Vector2;

/// Foci at half the separation from the origin along the `pa` direction,
/// symmetric about the origin. Total for `sep >= 0`.
#[inline]
pub fn focii_positions(sep: f64, pa: f64) -> (Vector2<f64>, Vector2<f64>) {
    let (sin_pa, cos_pa) = pa.sin_cos();
    let f1 = Vector2::new(sep / 2.0 * cos_pa, sep / 2.0 * sin_pa);
    (f1, -f1)
}

/// Sum of distances from `p` to both foci.
#[inline]
pub fn string_length(p: Vector2<f64>, f1: Vector2<f64>, f2: Vector2<f64>) -> f64 {
    (p - f1).norm() + (p - f2).norm()
}

/// Largest string length over a cloud.
pub fn max_string_length(points: &[Vector2<f64>], f1: Vector2<f64>, f2: Vector2<f64>) -> f64 {
    points
        .iter()
        .map(|&p| string_length(p, f1, f2))
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn foci_are_symmetric_about_origin() {
        let (f1, f2) = focii_positions(4.0, 0.3);
        assert!((f1 + f2).norm() < 1e-12);
        assert!(((f1 - f2).norm() - 4.0).abs() < 1e-12);
        // zero separation collapses both foci onto the origin
        let (g1, g2) = focii_positions(0.0, 1.1);
        assert!(g1.norm() < 1e-12 && g2.norm() < 1e-12);
    }

    #[test]
    fn string_length_lower_bound_is_the_separation() {
        // Triangle inequality: every string is at least |f1 - f2| long.
        let (f1, f2) = focii_positions(3.0, 0.9);
        for p in [
            Vector2::new(0.0, 0.0),
            Vector2::new(2.0, -1.0),
            Vector2::new(-0.5, 4.0),
        ] {
            assert!(string_length(p, f1, f2) >= 3.0 - 1e-12);
        }
    }

    #[test]
    fn max_over_cloud_picks_the_farthest_point() {
        let (f1, f2) = focii_positions(2.0, 0.0);
        let points = vec![
            Vector2::new(0.0, 1.0),
            Vector2::new(5.0, 0.0),
            Vector2::new(0.0, -2.0),
        ];
        let s = max_string_length(&points, f1, f2);
        assert!((s - string_length(points[1], f1, f2)).abs() < 1e-12);
    }
}
