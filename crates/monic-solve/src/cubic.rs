//! Cubic equations: a bounded Newton scan and a closed-form monic variant.
//!
//! [`solve_cubic`] is the general entry point; it finds real roots by
//! scanning and makes no completeness claim. [`monic_cubic_roots`] is the
//! closed-form classification used where all three roots, conjugate pair
//! included, must come back with a reliable multiplicity pattern, as in
//! the 3×3 eigenvalue problem.

use monic_core::{approx_zero, coeff_zero, EquationResult, Explained, Root};
use monic_poly::Polynomial;
use num_complex::Complex64;

use crate::kernel::solve_quadratic_explained;
use crate::scan::{newton_scan, ScanConfig};

/// Solves `a·x³ + b·x² + c·x + d = 0` by the bounded Newton scan.
///
/// A leading coefficient within the zero band delegates to the quadratic
/// solver. Otherwise this returns up to three distinct real roots in
/// discovery order; complex roots are never produced, and real roots far
/// outside the seed window can be missed (see [`ScanConfig`]).
#[must_use]
pub fn solve_cubic(a: f64, b: f64, c: f64, d: f64) -> EquationResult {
    solve_cubic_explained(a, b, c, d).into_value()
}

/// Solves `a·x³ + b·x² + c·x + d = 0`, narrating the scan.
#[must_use]
pub fn solve_cubic_explained(a: f64, b: f64, c: f64, d: f64) -> Explained<EquationResult> {
    if !(a.is_finite() && b.is_finite() && c.is_finite() && d.is_finite()) {
        return Explained::new(
            EquationResult::Indeterminate,
            vec!["a coefficient is not finite; the equation is indeterminate".into()],
        );
    }
    // Absolute band: `a` is an input coefficient, and scaling its zero
    // test by the other coefficients would misclassify monic cubics with
    // large lower-order terms, such as characteristic polynomials.
    if coeff_zero(a) {
        let mut quadratic = solve_quadratic_explained(b, c, d);
        quadratic
            .steps
            .insert(0, "the x^3 coefficient vanishes; solving as quadratic".into());
        return quadratic;
    }

    let p = Polynomial::from_coeffs(&[a, b, c, d]);
    let config = ScanConfig::default();
    let mut steps = vec![format!("solve {p} = 0 by a Newton–Raphson scan")];
    steps.push(format!(
        "iterate from integer seeds {}..={}, at most {} steps each",
        config.seed_min, config.seed_max, config.max_iter
    ));

    let roots = newton_scan(&p, &config);
    if roots.is_empty() {
        steps.push("no seed converged to an acceptable residual".into());
    } else {
        for r in &roots {
            steps.push(format!("x = {r}"));
        }
    }
    Explained::new(
        EquationResult::Solution(roots.into_iter().map(Root::Real).collect()),
        steps,
    )
}

/// Closed-form roots of the monic cubic `x³ + p2·x² + p1·x + p0`.
///
/// The cubic is depressed to `t³ + pt + q` and classified by the
/// discriminant `Δ = −4p³ − 27q²`: three real roots (trigonometric
/// method) when `Δ` is non-negative within the band, otherwise one real
/// Cardano root plus an analytic conjugate pair. All-real spectra come
/// back descending; the mixed case is `[real, +imaginary, −imaginary]`.
///
/// Inputs are assumed finite; non-finite coefficients propagate NaN
/// roots rather than classifying.
#[must_use]
pub fn monic_cubic_roots(p2: f64, p1: f64, p0: f64) -> [Root; 3] {
    monic_cubic_roots_explained(p2, p1, p0).into_value()
}

/// Closed-form monic cubic roots, narrating the classification.
#[must_use]
pub fn monic_cubic_roots_explained(p2: f64, p1: f64, p0: f64) -> Explained<[Root; 3]> {
    let mut steps = vec![format!(
        "roots of {} = 0",
        Polynomial::from_coeffs(&[1.0, p2, p1, p0])
    )];
    let shift = p2 / 3.0;
    let p = p1 - p2 * p2 / 3.0;
    let q = 2.0 * p2 * p2 * p2 / 27.0 - p2 * p1 / 3.0 + p0;
    steps.push(format!(
        "substitute x = t - ({shift}): depressed cubic t^3 + ({p})t + ({q}) = 0"
    ));
    let disc = -4.0 * p * p * p - 27.0 * q * q;
    steps.push(format!("discriminant: -4p^3 - 27q^2 = {disc}"));

    let p_scale = p1.abs().max(p2 * p2 / 3.0);
    let q_scale = p0
        .abs()
        .max((p2 * p1 / 3.0).abs())
        .max((2.0 * p2 * p2 * p2 / 27.0).abs());
    let disc_zero = approx_zero(disc, (4.0 * p * p * p).abs().max(27.0 * q * q));

    let roots = if approx_zero(p, p_scale) && approx_zero(q, q_scale) {
        // t^3 = 0 up to the band: a triple root.
        let x = -shift;
        steps.push(format!("p and q vanish; triple root x = {x}"));
        [Root::Real(x); 3]
    } else if (disc > 0.0 || disc_zero) && p < 0.0 {
        // Three real roots by the cosine method. `p < 0` holds whenever
        // the discriminant is truly non-negative; the explicit check
        // keeps banded near-zero discriminants with p > 0 on the
        // Cardano path, where they belong.
        let m = 2.0 * (-p / 3.0).sqrt();
        let arg = (3.0 * q / (p * m)).clamp(-1.0, 1.0);
        let theta = arg.acos();
        let mut real = [0.0f64; 3];
        for (k, slot) in real.iter_mut().enumerate() {
            let angle = (theta - 2.0 * std::f64::consts::PI * k as f64) / 3.0;
            *slot = m * angle.cos() - shift;
        }
        real.sort_by(|a, b| b.total_cmp(a));
        steps.push(format!(
            "non-negative discriminant; real roots {}, {}, {}",
            real[0], real[1], real[2]
        ));
        [Root::Real(real[0]), Root::Real(real[1]), Root::Real(real[2])]
    } else {
        // One real root by Cardano radicals; the remaining pair follows
        // analytically from the two cube roots.
        let s = (q * q / 4.0 + p * p * p / 27.0).sqrt();
        let u = (-q / 2.0 + s).cbrt();
        let v = (-q / 2.0 - s).cbrt();
        let real = u + v - shift;
        let re = -(u + v) / 2.0 - shift;
        // u ≥ v, so the positive-imaginary member leads.
        let im = (u - v) * 3.0f64.sqrt() / 2.0;
        steps.push(format!(
            "negative discriminant; real root x = {real} and conjugate pair {re} ± {im}i"
        ));
        [
            Root::Real(real),
            Root::Complex(Complex64::new(re, im)),
            Root::Complex(Complex64::new(re, -im)),
        ]
    };
    Explained::new(roots, steps)
}
