//! Boundary sampler: beams to a dense Cartesian point cloud.
//!
//! Each beam boundary is parametrized by an angle φ sampled uniformly over
//! [0, 2π) and mapped through the rotated-ellipse parametric form. The
//! concatenated cloud is built once per solve and is read-only afterwards;
//! its convex hull approximates the union boundary of all inputs to within
//! the sampling resolution, and every sample lies exactly on an input
//! boundary by construction.

use nalgebra::Vector2;

use crate::beam::{Beam, BeamError};

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    /// Boundary samples per beam. Higher density tightens the enclosure at
    /// proportional cost.
    pub samples_per_beam: usize,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            samples_per_beam: 1000,
        }
    }
}

/// Boundary of a single beam at `k` evenly spaced parameter angles.
pub fn boundary_points(beam: &Beam, k: usize) -> Vec<Vector2<f64>> {
    let k = k.max(4);
    let (sin_pa, cos_pa) = beam.pa.sin_cos();
    let a = beam.major / 2.0;
    let b = beam.minor / 2.0;
    let delta = 2.0 * std::f64::consts::PI / (k as f64);
    (0..k)
        .map(|i| {
            let (sin_phi, cos_phi) = ((i as f64) * delta).sin_cos();
            Vector2::new(
                a * cos_phi * cos_pa - b * sin_phi * sin_pa,
                a * cos_phi * sin_pa + b * sin_phi * cos_pa,
            )
        })
        .collect()
}

/// Concatenated boundary cloud for all beams (N×K points).
pub fn boundary_cloud(beams: &[Beam], cfg: SampleCfg) -> Result<Vec<Vector2<f64>>, BeamError> {
    if beams.is_empty() {
        return Err(BeamError::EmptyBeams);
    }
    let k = cfg.samples_per_beam.max(4);
    let mut cloud = Vec::with_capacity(beams.len() * k);
    for beam in beams {
        cloud.extend(boundary_points(beam, k));
    }
    Ok(cloud)
}
