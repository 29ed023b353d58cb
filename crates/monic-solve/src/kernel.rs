//! Closed-form solvers for linear and quadratic equations.
//!
//! Degenerate coefficients are classified with the tolerance bands from
//! `monic-core`, never by exact floating comparison. Input coefficients
//! use the absolute band (they carry no accumulated round-off), while
//! derived quantities such as discriminants use the band scaled to the
//! magnitude of the terms that produced them.

use monic_core::{approx_zero, coeff_zero, EquationResult, Explained, Root};
use monic_poly::Polynomial;
use num_complex::Complex64;

/// Solves `a·x + b = 0`.
///
/// `a` within the zero band classifies the equation instead of dividing:
/// `b` also banded to zero means every `x` solves it (`Infinite`),
/// otherwise no `x` does (`NoSolution`). Non-finite coefficients are
/// `Indeterminate`.
#[must_use]
pub fn solve_linear(a: f64, b: f64) -> EquationResult {
    solve_linear_explained(a, b).into_value()
}

/// Solves `a·x + b = 0`, narrating the derivation.
#[must_use]
pub fn solve_linear_explained(a: f64, b: f64) -> Explained<EquationResult> {
    if !(a.is_finite() && b.is_finite()) {
        return Explained::new(
            EquationResult::Indeterminate,
            vec!["a coefficient is not finite; the equation is indeterminate".into()],
        );
    }
    let mut steps = vec![format!("solve {} = 0", Polynomial::from_coeffs(&[a, b]))];
    // Input coefficients carry no accumulated round-off, so the zero test
    // is the absolute band, not scaled by the other coefficients.
    if coeff_zero(a) {
        if coeff_zero(b) {
            steps.push("both coefficients vanish; every x satisfies the equation".into());
            return Explained::new(EquationResult::Infinite, steps);
        }
        steps.push(format!(
            "the x coefficient vanishes but the constant {b} does not; no solution"
        ));
        return Explained::new(EquationResult::NoSolution, steps);
    }
    let root = -b / a;
    steps.push(format!("x = -({b})/({a}) = {root}"));
    Explained::new(EquationResult::Solution(vec![Root::Real(root)]), steps)
}

/// Solves `a·x² + b·x + c = 0`.
///
/// A leading coefficient within the zero band delegates to
/// [`solve_linear`]. Otherwise the discriminant `b² − 4ac` picks the
/// branch, banded against its own magnitude: within the band → one
/// repeated real root; positive → two real roots with the `+` branch
/// first; negative → a conjugate pair with the positive imaginary part
/// first.
#[must_use]
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> EquationResult {
    solve_quadratic_explained(a, b, c).into_value()
}

/// Solves `a·x² + b·x + c = 0`, narrating the derivation.
#[must_use]
pub fn solve_quadratic_explained(a: f64, b: f64, c: f64) -> Explained<EquationResult> {
    if !(a.is_finite() && b.is_finite() && c.is_finite()) {
        return Explained::new(
            EquationResult::Indeterminate,
            vec!["a coefficient is not finite; the equation is indeterminate".into()],
        );
    }
    if coeff_zero(a) {
        let mut linear = solve_linear_explained(b, c);
        linear
            .steps
            .insert(0, "the x^2 coefficient vanishes; solving as linear".into());
        return linear;
    }

    let mut steps = vec![format!("solve {} = 0", Polynomial::from_coeffs(&[a, b, c]))];
    let disc = b * b - 4.0 * a * c;
    steps.push(format!("discriminant: ({b})^2 - 4({a})({c}) = {disc}"));

    if approx_zero(disc, (b * b).max((4.0 * a * c).abs())) {
        let root = -b / (2.0 * a);
        steps.push(format!("the discriminant vanishes; repeated root x = {root}"));
        return Explained::new(EquationResult::Solution(vec![Root::Real(root)]), steps);
    }
    if disc > 0.0 {
        let sq = disc.sqrt();
        let plus = (-b + sq) / (2.0 * a);
        let minus = (-b - sq) / (2.0 * a);
        steps.push(format!("x = ({:+} ± √{disc}) / {}", -b, 2.0 * a));
        steps.push(format!("x = {plus} or x = {minus}"));
        return Explained::new(
            EquationResult::Solution(vec![Root::Real(plus), Root::Real(minus)]),
            steps,
        );
    }
    let re = -b / (2.0 * a);
    // `.abs()` pins the pair's order regardless of the sign of `a`.
    let im = ((-disc).sqrt() / (2.0 * a)).abs();
    steps.push(format!(
        "negative discriminant; conjugate pair x = {re} ± {im}i"
    ));
    Explained::new(
        EquationResult::Solution(vec![
            Root::Complex(Complex64::new(re, im)),
            Root::Complex(Complex64::new(re, -im)),
        ]),
        steps,
    )
}
