//! Random beam draws (demo driver) and replay tokens.
//!
//! Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//! so a draw or a search can be replayed from its token alone. Beam
//! parameters are drawn uniformly within configured ranges; this generator
//! exists for demos and tests, not as part of the solver contract.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::beam::Beam;

/// Replay token to make draws and searches reproducible and indexable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    pub(crate) fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Uniform parameter ranges for demo beam draws.
#[derive(Clone, Copy, Debug)]
pub struct BeamDrawCfg {
    pub count: usize,
    /// Full major axis range `(lo, hi)`.
    pub major: (f64, f64),
    /// Full minor axis range `(lo, hi)`; draws are clamped below the major.
    pub minor: (f64, f64),
    /// Position angle range `(lo, hi)` in radians.
    pub pa: (f64, f64),
}

impl Default for BeamDrawCfg {
    fn default() -> Self {
        Self {
            count: 10,
            major: (5.0, 10.0),
            minor: (2.0, 5.0),
            pa: (0.0, std::f64::consts::PI),
        }
    }
}

/// Draw `cfg.count` beams uniformly within the configured ranges.
pub fn draw_beams(cfg: BeamDrawCfg, tok: ReplayToken) -> Vec<Beam> {
    let mut rng = tok.to_std_rng();
    (0..cfg.count)
        .map(|_| {
            let major = rng.gen_range(cfg.major.0..=cfg.major.1);
            let minor = rng.gen_range(cfg.minor.0..=cfg.minor.1).min(major);
            let pa = rng.gen_range(cfg.pa.0..=cfg.pa.1);
            Beam { major, minor, pa }
        })
        .collect()
}
