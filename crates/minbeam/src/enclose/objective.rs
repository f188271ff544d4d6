//! Enclosing-ellipse area as a function of focal separation and orientation.

use nalgebra::Vector2;

use crate::focal::{focii_positions, max_string_length};

/// Relative tolerance separating floating-point jitter in the minor-axis
/// radicand from a genuinely infeasible `sep > s` candidate.
const RADICAND_EPS: f64 = 1e-12;

/// Area of the smallest ellipse with foci given by `(sep, pa)` that
/// contains the whole cloud. Borrows the cloud; it stays read-only for the
/// lifetime of the search.
pub struct AreaObjective<'a> {
    cloud: &'a [Vector2<f64>],
}

impl<'a> AreaObjective<'a> {
    pub fn new(cloud: &'a [Vector2<f64>]) -> Self {
        Self { cloud }
    }

    /// Major and minor axes implied by `(sep, pa)`: the major is the max
    /// string length `s` over the cloud, the minor follows from the ellipse
    /// identity `minor² = s² − sep²`. Small negative radicands from
    /// rounding clamp to zero; larger ones mean the candidate is infeasible
    /// and yield `None`.
    pub fn implied_axes(&self, sep: f64, pa: f64) -> Option<(f64, f64)> {
        let (f1, f2) = focii_positions(sep, pa);
        let major = max_string_length(self.cloud, f1, f2);
        let radicand = major * major - sep * sep;
        if radicand < -RADICAND_EPS * major * major {
            return None;
        }
        Some((major, radicand.max(0.0).sqrt()))
    }

    /// Objective value. Infeasible candidates evaluate to `+∞`, which both
    /// the simplex ordering and the Metropolis test discard, so a numeric
    /// domain error never escapes the search.
    pub fn eval(&self, x: &[f64; 2]) -> f64 {
        match self.implied_axes(x[0], x[1]) {
            Some((major, minor)) => std::f64::consts::PI / 4.0 * major * minor,
            None => f64::INFINITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beam::Beam;
    use crate::sample::{boundary_cloud, SampleCfg};

    fn cloud_of(beam: Beam) -> Vec<Vector2<f64>> {
        boundary_cloud(&[beam], SampleCfg { samples_per_beam: 512 }).unwrap()
    }

    #[test]
    fn true_parameters_recover_the_beam_area() {
        let beam = Beam::new(6.0, 3.0, 0.5).unwrap();
        let cloud = cloud_of(beam);
        let obj = AreaObjective::new(&cloud);
        let sep = (beam.major * beam.major - beam.minor * beam.minor).sqrt();
        let area = obj.eval(&[sep, beam.pa]);
        assert!((area - beam.area()).abs() < 1e-3 * beam.area());
    }

    #[test]
    fn zero_separation_gives_the_circumscribed_circle() {
        let beam = Beam::new(6.0, 3.0, 0.2).unwrap();
        let cloud = cloud_of(beam);
        let obj = AreaObjective::new(&cloud);
        let (major, minor) = obj.implied_axes(0.0, 0.0).unwrap();
        // with coincident foci every string is a diameter
        assert!((major - beam.major).abs() < 1e-9);
        assert!((minor - beam.major).abs() < 1e-9);
    }

    #[test]
    fn suboptimal_orientation_costs_area() {
        let beam = Beam::new(6.0, 3.0, 0.0).unwrap();
        let cloud = cloud_of(beam);
        let obj = AreaObjective::new(&cloud);
        let sep = (beam.major * beam.major - beam.minor * beam.minor).sqrt();
        let aligned = obj.eval(&[sep, 0.0]);
        let crossed = obj.eval(&[sep, std::f64::consts::FRAC_PI_2]);
        assert!(aligned < crossed);
    }
}
