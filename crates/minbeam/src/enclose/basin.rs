//! Basin hopping over the bounded (separation, orientation) box.
//!
//! The objective is piecewise-smooth with potential local minima, so local
//! refinement alone is not enough: the search refines the initial guess,
//! then repeatedly perturbs the current point, refines the proposal, and
//! applies a Metropolis accept/reject test at fixed temperature. Proposals
//! outside the bounds are rejected before any objective evaluation. The
//! whole loop is sequential and deterministic for a fixed replay token.

use rand::Rng;

use super::objective::AreaObjective;
use super::simplex::minimize_box;
use super::types::{ParamBounds, SearchCfg, SearchReport};
use crate::draw::ReplayToken;

pub(crate) fn basin_hop(
    obj: &AreaObjective<'_>,
    guess: [f64; 2],
    bounds: &ParamBounds,
    cfg: &SearchCfg,
    tok: ReplayToken,
) -> SearchReport {
    let mut rng = tok.to_std_rng();
    let mut f = |x: &[f64; 2]| obj.eval(x);
    let mut evals = 0usize;

    let (x0, f0, e0) = minimize_box(&mut f, guess, bounds, &cfg.simplex);
    evals += e0;

    let mut cur = x0;
    let mut f_cur = f0;
    let mut best = x0;
    let mut f_best = f0;
    let mut accepted = 0usize;
    let mut rejected = 0usize;

    for _ in 0..cfg.hops {
        let mut proposal = [0.0; 2];
        for (i, p) in proposal.iter_mut().enumerate() {
            let amp = cfg.step_frac * bounds.range(i);
            *p = cur[i] + (rng.gen::<f64>() * 2.0 - 1.0) * amp;
        }
        if !bounds.contains(&proposal) {
            rejected += 1;
            continue;
        }

        let (x_new, f_new, e) = minimize_box(&mut f, proposal, bounds, &cfg.simplex);
        evals += e;

        let take = if f_new <= f_cur {
            true
        } else if cfg.temperature > 0.0 {
            rng.gen::<f64>() < (-(f_new - f_cur) / cfg.temperature).exp()
        } else {
            false
        };
        if take {
            cur = x_new;
            f_cur = f_new;
            accepted += 1;
            if f_new < f_best {
                best = x_new;
                f_best = f_new;
            }
        } else {
            rejected += 1;
        }
    }

    SearchReport {
        params: best,
        area: f_best,
        evals,
        hops_accepted: accepted,
        hops_rejected: rejected,
        improved: f_best < f0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beam::Beam;
    use crate::sample::{boundary_cloud, SampleCfg};

    fn short_cfg() -> SearchCfg {
        SearchCfg {
            hops: 25,
            ..Default::default()
        }
    }

    #[test]
    fn reproducible_per_token() {
        let beams = [
            Beam::new(6.0, 3.0, 0.4).unwrap(),
            Beam::new(5.0, 2.0, 1.9).unwrap(),
        ];
        let cloud = boundary_cloud(&beams, SampleCfg { samples_per_beam: 128 }).unwrap();
        let obj = AreaObjective::new(&cloud);
        let bounds = ParamBounds::new(12.0);
        let tok = ReplayToken::new(11, 0);
        let a = basin_hop(&obj, [6.0, 1.5], &bounds, &short_cfg(), tok);
        let b = basin_hop(&obj, [6.0, 1.5], &bounds, &short_cfg(), tok);
        assert_eq!(a.params, b.params);
        assert_eq!(a.area, b.area);
        assert_eq!(a.evals, b.evals);
        assert_eq!(a.hops_accepted, b.hops_accepted);
    }

    #[test]
    fn hop_counts_partition_the_budget() {
        let beams = [Beam::new(4.0, 2.0, 0.0).unwrap()];
        let cloud = boundary_cloud(&beams, SampleCfg { samples_per_beam: 128 }).unwrap();
        let obj = AreaObjective::new(&cloud);
        let bounds = ParamBounds::new(8.0);
        let cfg = short_cfg();
        let report = basin_hop(&obj, [4.0, 1.5], &bounds, &cfg, ReplayToken::new(2, 5));
        assert_eq!(report.hops_accepted + report.hops_rejected, cfg.hops);
        assert!(bounds.contains(&report.params));
        assert!(report.area.is_finite());
    }

    #[test]
    fn best_never_worse_than_the_refined_guess() {
        let beams = [
            Beam::new(7.0, 2.0, 0.1).unwrap(),
            Beam::new(6.0, 2.5, 2.6).unwrap(),
        ];
        let cloud = boundary_cloud(&beams, SampleCfg { samples_per_beam: 128 }).unwrap();
        let obj = AreaObjective::new(&cloud);
        let bounds = ParamBounds::new(14.0);
        let report = basin_hop(&obj, [7.0, 1.5], &bounds, &short_cfg(), ReplayToken::new(9, 9));
        let mut f = |x: &[f64; 2]| obj.eval(x);
        let (_, f_guess, _) = minimize_box(&mut f, [7.0, 1.5], &bounds, &short_cfg().simplex);
        assert!(report.area <= f_guess + 1e-12);
    }
}
