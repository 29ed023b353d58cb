//! Bounded multi-seed Newton–Raphson root scanning.
//!
//! The scan starts one Newton iteration per integer seed in a fixed
//! window, accepts a candidate when its residual falls inside a relative
//! band, and deduplicates candidates that converge to the same root from
//! different seeds. Everything is bounded: seed count × iteration cap.

use monic_core::{approx_zero, RESIDUAL_EPS};
use monic_poly::Polynomial;

/// Default relative band for merging candidates into one root.
///
/// Wider than the residual acceptance band on purpose: near a double or
/// triple root the residual test admits candidates spread across the
/// whole flat basin, and `f64` evaluation noise caps how far polishing
/// can tighten them (about `1e-5` for a unit-scale triple root). A
/// `1e-4` band absorbs that spread; roots the scan could actually tell
/// apart are separated by far more.
pub const DEDUP_EPS: f64 = 1e-4;

/// Parameters of the Newton scan. Plain data, fixed at call time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScanConfig {
    /// Leftmost integer seed.
    pub seed_min: i32,
    /// Rightmost integer seed (inclusive).
    pub seed_max: i32,
    /// Newton iterations allowed per seed.
    pub max_iter: u32,
    /// Relative residual band for accepting a converged candidate.
    pub accept_tol: f64,
    /// Relative band for treating two candidates as the same root.
    pub dedup_tol: f64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            seed_min: -10,
            seed_max: 10,
            max_iter: 50,
            accept_tol: RESIDUAL_EPS,
            dedup_tol: DEDUP_EPS,
        }
    }
}

/// Scans for real roots of `p`, returning them in discovery order
/// (ascending seeds), deduplicated within [`ScanConfig::dedup_tol`].
///
/// Roots lying far outside the seed window can be missed; the scan makes
/// no completeness claim. Constant polynomials scan to nothing; callers
/// dispatch degenerate inputs before scanning.
#[must_use]
pub fn newton_scan(p: &Polynomial, config: &ScanConfig) -> Vec<f64> {
    if p.degree().unwrap_or(0) == 0 {
        return Vec::new();
    }
    let dp = p.derivative();
    let mut roots: Vec<f64> = Vec::new();
    for seed in config.seed_min..=config.seed_max {
        let Some(x) = newton_from(p, &dp, f64::from(seed), config) else {
            continue;
        };
        if !roots
            .iter()
            .any(|&r| (r - x).abs() <= config.dedup_tol * r.abs().max(x.abs()).max(1.0))
        {
            roots.push(x);
        }
    }
    roots
}

/// One Newton descent. `None` when the seed diverges, hits a negligible
/// derivative, or fails the residual band within the iteration cap.
fn newton_from(p: &Polynomial, dp: &Polynomial, seed: f64, config: &ScanConfig) -> Option<f64> {
    let mut x = seed;
    for _ in 0..config.max_iter {
        let fx = p.eval(x);
        if residual_ok(p, x, fx, config.accept_tol) {
            return Some(polish(p, dp, x));
        }
        let dfx = dp.eval(x);
        if !dfx.is_finite() || approx_zero(dfx, fx) {
            return None;
        }
        let next = x - fx / dfx;
        if !next.is_finite() {
            return None;
        }
        x = next;
    }
    let fx = p.eval(x);
    residual_ok(p, x, fx, config.accept_tol)
        .then(|| polish(p, dp, x))
}

/// Extra Newton steps once a candidate is inside the band, so that seeds
/// converging to the same root from different sides land close enough
/// for deduplication. Simple roots snap to full precision in one or two
/// steps; at a double or triple root convergence is only linear (ratio
/// 1/2 or 2/3 per step), so the cap leaves room to walk the acceptance
/// basin down to the evaluation noise floor.
fn polish(p: &Polynomial, dp: &Polynomial, mut x: f64) -> f64 {
    for _ in 0..24 {
        let fx = p.eval(x);
        if fx == 0.0 {
            break;
        }
        let dfx = dp.eval(x);
        if !dfx.is_finite() || approx_zero(dfx, fx) {
            break;
        }
        let next = x - fx / dfx;
        if !next.is_finite() || next == x {
            break;
        }
        x = next;
    }
    x
}

/// Residual test scaled by the evaluation magnitude at `x`, so that
/// neither large nor sub-unit polynomials are held to an absolute band.
/// The scale is zero only at `x = 0` with no constant term, where the
/// residual is exactly zero too.
fn residual_ok(p: &Polynomial, x: f64, fx: f64, tol: f64) -> bool {
    let scale = p.terms().iter().map(|t| t.eval(x).abs()).sum::<f64>();
    fx.abs() <= tol * scale
}
