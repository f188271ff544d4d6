//! Smallest-area enclosing ellipse ("minimum beam") for sets of beams.
//!
//! A beam is an ellipse centered at the origin, described by its full major
//! axis, full minor axis, and position angle in radians. Given a set of
//! beams, this crate finds the smallest-area ellipse that encloses them all.
//!
//! Pipeline
//! - `sample`: each input beam becomes a dense boundary point cloud.
//! - `focal`: foci placement and per-point string lengths (the two-focus
//!   string construction of an ellipse).
//! - `enclose`: the area objective over the cloud, a bounded simplex
//!   refiner inside a basin-hopping global search, and the result decoder.
//! - `draw`: reproducible random beam draws for demos and tests.

pub mod beam;
pub mod draw;
pub mod enclose;
pub mod focal;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use beam::{Beam, BeamError};
pub use enclose::{minbeam, minbeam_with, EncloseCfg, Enclosure};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::beam::{beams_from_flat, beams_from_rows, Beam, BeamError};
    pub use crate::draw::{draw_beams, BeamDrawCfg, ReplayToken};
    pub use crate::enclose::{
        enclose_points, minbeam, minbeam_with, AreaObjective, EncloseCfg, Enclosure, ParamBounds,
        SearchCfg, SearchReport, SimplexCfg,
    };
    pub use crate::focal::{focii_positions, max_string_length, string_length};
    pub use crate::sample::{boundary_cloud, boundary_points, SampleCfg};
    pub use nalgebra::Vector2 as Vec2;
}
