//! Smallest-area enclosing ellipse: objective, global search, decoder.
//!
//! Purpose
//! - Wrap the focal geometry into a scalar area objective over the boundary
//!   cloud, minimize it globally over (separation, orientation) inside the
//!   box `[0, max_sep] × [0, π]`, and decode the winner back into axes.
//!
//! Model
//! - For foci with separation `sep` along direction `pa`, the max string
//!   length `s` over the cloud is the smallest major axis enclosing every
//!   point; the minor axis follows from `minor² = s² − sep²` and the area
//!   `π/4·s·minor` is the quantity minimized.
//! - The search is stochastic (basin hopping); reproducibility comes from a
//!   caller-supplied `ReplayToken`, never hidden global state.

mod basin;
mod objective;
mod simplex;
mod types;

pub use objective::AreaObjective;
pub use types::{ParamBounds, SearchCfg, SearchReport, SimplexCfg};

use nalgebra::Vector2;

use crate::beam::{Beam, BeamError};
use crate::draw::ReplayToken;
use crate::focal::{focii_positions, max_string_length};
use crate::sample::{boundary_cloud, SampleCfg};

/// Full configuration for `minbeam_with`.
#[derive(Clone, Copy, Debug, Default)]
pub struct EncloseCfg {
    pub sample: SampleCfg,
    pub search: SearchCfg,
}

/// Solver result: the enclosing beam plus search diagnostics.
#[derive(Clone, Copy, Debug)]
pub struct Enclosure {
    pub beam: Beam,
    /// Focal separation of the enclosing ellipse.
    pub sep: f64,
    pub report: SearchReport,
}

impl Enclosure {
    /// Foci of the enclosing ellipse.
    pub fn foci(&self) -> (Vector2<f64>, Vector2<f64>) {
        focii_positions(self.sep, self.beam.pa)
    }
}

/// Smallest-area ellipse enclosing every beam, with default sampling,
/// search budget, and replay token.
pub fn minbeam(beams: &[Beam]) -> Result<Beam, BeamError> {
    minbeam_with(beams, &EncloseCfg::default(), ReplayToken::default()).map(|e| e.beam)
}

/// As [`minbeam`], with explicit configuration and random source.
pub fn minbeam_with(
    beams: &[Beam],
    cfg: &EncloseCfg,
    tok: ReplayToken,
) -> Result<Enclosure, BeamError> {
    validate(beams)?;
    let cloud = boundary_cloud(beams, cfg.sample)?;
    // Twice the largest major axis bounds the focal separation: the major
    // axis is itself the maximal string length.
    let max_sep = 2.0 * beams.iter().map(|b| b.major).fold(0.0, f64::max);
    let report = enclose_points(&cloud, max_sep, &cfg.search, tok);
    Ok(decode(&cloud, report))
}

/// Global search over `[0, max_sep] × [0, π]` for the best focal
/// parameters enclosing `cloud`.
pub fn enclose_points(
    cloud: &[Vector2<f64>],
    max_sep: f64,
    cfg: &SearchCfg,
    tok: ReplayToken,
) -> SearchReport {
    let bounds = ParamBounds::new(max_sep);
    let obj = AreaObjective::new(cloud);
    let guess = [max_sep / 2.0, std::f64::consts::FRAC_PI_2];
    basin::basin_hop(&obj, guess, &bounds, cfg, tok)
}

/// Decode the winning `(sep, pa)` back into axes against the same cloud.
///
/// Recomputing the max string length here (rather than reusing the
/// optimizer's internal value) keeps the returned axes self-consistent
/// with the returned foci.
fn decode(cloud: &[Vector2<f64>], report: SearchReport) -> Enclosure {
    let [sep, pa] = report.params;
    let (f1, f2) = focii_positions(sep, pa);
    let major = max_string_length(cloud, f1, f2);
    let minor = (major * major - sep * sep).max(0.0).sqrt();
    Enclosure {
        beam: Beam { major, minor, pa },
        sep,
        report,
    }
}

fn validate(beams: &[Beam]) -> Result<(), BeamError> {
    if beams.is_empty() {
        return Err(BeamError::EmptyBeams);
    }
    for b in beams {
        Beam::new(b.major, b.minor, b.pa)?;
    }
    Ok(())
}
