//! Bounded Nelder–Mead refinement on the `[sep, pa]` box.
//!
//! Derivative-free local minimization of a 2-variable objective. Every
//! trial vertex is projected into the bounds before evaluation, so the
//! objective is never evaluated out of domain. The objective here is a max
//! of many distance sums (piecewise-smooth), which a simplex method handles
//! without derivative information.

use super::types::{ParamBounds, SimplexCfg};

// Standard reflection/expansion/contraction/shrink coefficients.
const ALPHA: f64 = 1.0;
const GAMMA: f64 = 2.0;
const RHO: f64 = 0.5;
const SIGMA: f64 = 0.5;

/// Minimize `f` from `x0`, projecting every trial point into `bounds`.
///
/// Returns `(x_min, f_min, evals)`.
pub(crate) fn minimize_box(
    f: &mut dyn FnMut(&[f64; 2]) -> f64,
    x0: [f64; 2],
    bounds: &ParamBounds,
    cfg: &SimplexCfg,
) -> ([f64; 2], f64, usize) {
    let mut evals = 0usize;
    let mut eval = |x: [f64; 2], evals: &mut usize| -> ([f64; 2], f64) {
        let x = bounds.clamp(x);
        *evals += 1;
        let v = f(&x);
        (x, v)
    };

    // Initial simplex: x0 plus one step along each coordinate, stepping
    // inward when the vertex would leave the box.
    let x0 = bounds.clamp(x0);
    let mut simplex: Vec<([f64; 2], f64)> = Vec::with_capacity(3);
    simplex.push(eval(x0, &mut evals));
    for i in 0..2 {
        let mut h = cfg.init_step_frac * bounds.range(i);
        if h <= 0.0 {
            h = cfg.init_step_frac.max(1e-6);
        }
        if x0[i] + h > bounds.hi[i] {
            h = -h;
        }
        let mut v = x0;
        v[i] += h;
        simplex.push(eval(v, &mut evals));
    }

    for _ in 0..cfg.max_iters {
        simplex.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
        let (best, f_best) = simplex[0];
        let (worst, f_worst) = simplex[2];
        let f_second = simplex[1].1;

        let f_spread = f_worst - f_best;
        let diameter = simplex
            .iter()
            .map(|(v, _)| ((v[0] - best[0]).powi(2) + (v[1] - best[1]).powi(2)).sqrt())
            .fold(0.0, f64::max);
        if f_spread.is_finite() && f_spread <= cfg.f_tol * (1.0 + f_best.abs())
            || diameter <= cfg.x_tol
        {
            break;
        }

        // Centroid of the two best vertices.
        let c = [
            (simplex[0].0[0] + simplex[1].0[0]) / 2.0,
            (simplex[0].0[1] + simplex[1].0[1]) / 2.0,
        ];

        let reflect = [
            c[0] + ALPHA * (c[0] - worst[0]),
            c[1] + ALPHA * (c[1] - worst[1]),
        ];
        let (xr, fr) = eval(reflect, &mut evals);

        if fr < f_best {
            let expand = [c[0] + GAMMA * (xr[0] - c[0]), c[1] + GAMMA * (xr[1] - c[1])];
            let (xe, fe) = eval(expand, &mut evals);
            simplex[2] = if fe < fr { (xe, fe) } else { (xr, fr) };
            continue;
        }
        if fr < f_second {
            simplex[2] = (xr, fr);
            continue;
        }

        // Contract toward the better of the reflected and worst vertices.
        let (toward, f_toward) = if fr < f_worst { (xr, fr) } else { (worst, f_worst) };
        let contract = [
            c[0] + RHO * (toward[0] - c[0]),
            c[1] + RHO * (toward[1] - c[1]),
        ];
        let (xc, fc) = eval(contract, &mut evals);
        if fc < f_toward {
            simplex[2] = (xc, fc);
            continue;
        }

        // Shrink toward the best vertex.
        for k in 1..3 {
            let v = simplex[k].0;
            let shrunk = [
                best[0] + SIGMA * (v[0] - best[0]),
                best[1] + SIGMA * (v[1] - best[1]),
            ];
            simplex[k] = eval(shrunk, &mut evals);
        }
    }

    simplex.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    (simplex[0].0, simplex[0].1, evals)
}
