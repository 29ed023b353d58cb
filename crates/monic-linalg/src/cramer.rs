//! Cramer-rule solvers for 2×2 and 3×3 linear systems.
//!
//! Unique solutions are verified by re-substitution in debug builds; the
//! residual helpers are public so hosts and tests can run the same check.
//! Degenerate 2×2 systems keep the full Infinite / NoSolution split. A
//! 3×3 system with a vanishing determinant is reported as
//! `NoUniqueSolution` only; dependent and inconsistent systems are not
//! told apart at that size.

use monic_core::{approx_zero, coeff_zero, Explained, RESIDUAL_EPS};

use crate::matrix::{Matrix2, Matrix3};

/// Outcome of a 2×2 linear system.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum System2Result {
    /// Exactly one solution.
    Unique {
        /// The `x` component.
        x: f64,
        /// The `y` component.
        y: f64,
    },
    /// Dependent equations; every point of the shared line solves the
    /// system.
    Infinite,
    /// Inconsistent equations.
    NoSolution,
    /// Non-finite input; no classification is meaningful.
    Indeterminate,
}

impl System2Result {
    /// The unique solution as `[x, y]`, when there is one.
    #[must_use]
    pub fn solution(&self) -> Option<[f64; 2]> {
        match self {
            Self::Unique { x, y } => Some([*x, *y]),
            _ => None,
        }
    }
}

/// Outcome of a 3×3 linear system.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum System3Result {
    /// Exactly one solution.
    Unique {
        /// The `x` component.
        x: f64,
        /// The `y` component.
        y: f64,
        /// The `z` component.
        z: f64,
    },
    /// The determinant vanishes; dependent and inconsistent systems are
    /// not distinguished.
    NoUniqueSolution,
    /// Non-finite input; no classification is meaningful.
    Indeterminate,
}

impl System3Result {
    /// The unique solution as `[x, y, z]`, when there is one.
    #[must_use]
    pub fn solution(&self) -> Option<[f64; 3]> {
        match self {
            Self::Unique { x, y, z } => Some([*x, *y, *z]),
            _ => None,
        }
    }
}

/// Renders one equation row. Zero coefficients stay visible so that a
/// degenerate row reads as what it is.
fn equation(coeffs: &[f64], constant: f64) -> String {
    const VARS: [&str; 3] = ["x", "y", "z"];
    let mut text = String::new();
    for (i, &c) in coeffs.iter().enumerate() {
        if text.is_empty() {
            if c < 0.0 {
                text.push('-');
            }
        } else if c < 0.0 {
            text.push_str(" - ");
        } else {
            text.push_str(" + ");
        }
        let mag = c.abs();
        if mag != 1.0 {
            text.push_str(&mag.to_string());
        }
        text.push_str(VARS[i]);
    }
    format!("{text} = {constant}")
}

// Row coefficients are inputs, so the vanishing test is absolute.
fn zero_row2(a: f64, b: f64) -> bool {
    coeff_zero(a) && coeff_zero(b)
}

/// Signed residuals of a candidate 2×2 solution, equation by equation.
#[must_use]
pub fn residuals_2x2(
    a1: f64,
    b1: f64,
    c1: f64,
    a2: f64,
    b2: f64,
    c2: f64,
    x: f64,
    y: f64,
) -> [f64; 2] {
    [a1 * x + b1 * y - c1, a2 * x + b2 * y - c2]
}

/// Signed residuals of a candidate 3×3 solution, equation by equation.
#[must_use]
pub fn residuals_3x3(
    rows: [[f64; 3]; 3],
    constants: [f64; 3],
    solution: [f64; 3],
) -> [f64; 3] {
    let product = Matrix3::new(rows).mul_vec(solution);
    [
        product[0] - constants[0],
        product[1] - constants[1],
        product[2] - constants[2],
    ]
}

/// Solves `a1·x + b1·y = c1`, `a2·x + b2·y = c2` by Cramer's rule.
///
/// A determinant inside the zero band switches to degenerate
/// classification: a row `0·x + 0·y = k` with non-zero `k` is
/// `NoSolution`; otherwise the constant column's proportionality is
/// checked with cross-products (no division by possibly-zero
/// coefficients): agreement means `Infinite`, disagreement
/// `NoSolution`. Non-finite input is `Indeterminate`.
#[must_use]
pub fn solve_system_2x2(a1: f64, b1: f64, c1: f64, a2: f64, b2: f64, c2: f64) -> System2Result {
    solve_system_2x2_explained(a1, b1, c1, a2, b2, c2).into_value()
}

/// Solves a 2×2 system, narrating determinants and classification.
#[must_use]
pub fn solve_system_2x2_explained(
    a1: f64,
    b1: f64,
    c1: f64,
    a2: f64,
    b2: f64,
    c2: f64,
) -> Explained<System2Result> {
    if ![a1, b1, c1, a2, b2, c2].iter().all(|v| v.is_finite()) {
        return Explained::new(
            System2Result::Indeterminate,
            vec!["a coefficient is not finite; the system is indeterminate".into()],
        );
    }
    let mut steps = vec![
        format!("solve: {}", equation(&[a1, b1], c1)),
        format!("       {}", equation(&[a2, b2], c2)),
    ];
    let m = Matrix2::new([[a1, b1], [a2, b2]]);
    let d = m.det();
    steps.push(format!("D = ({a1})({b2}) - ({a2})({b1}) = {d}"));

    if !approx_zero(d, (a1 * b2).abs().max((a2 * b1).abs())) {
        let dx = m.with_column(0, [c1, c2]).det();
        let dy = m.with_column(1, [c1, c2]).det();
        let x = dx / d;
        let y = dy / d;
        steps.push(format!("Dx = {dx}, Dy = {dy}"));
        steps.push(format!("x = Dx/D = {x}, y = Dy/D = {y}"));

        let r = residuals_2x2(a1, b1, c1, a2, b2, c2, x, y);
        debug_assert!(
            r[0].abs() <= RESIDUAL_EPS * ((a1 * x).abs() + (b1 * y).abs() + c1.abs()).max(1.0)
                && r[1].abs()
                    <= RESIDUAL_EPS * ((a2 * x).abs() + (b2 * y).abs() + c2.abs()).max(1.0),
            "solution fails re-substitution: {r:?}"
        );
        return Explained::new(System2Result::Unique { x, y }, steps);
    }

    steps.push("D vanishes; classifying the degenerate system".into());
    if zero_row2(a1, b1) && !coeff_zero(c1) {
        steps.push("equation 1 reduces to 0 = non-zero; no solution".into());
        return Explained::new(System2Result::NoSolution, steps);
    }
    if zero_row2(a2, b2) && !coeff_zero(c2) {
        steps.push("equation 2 reduces to 0 = non-zero; no solution".into());
        return Explained::new(System2Result::NoSolution, steps);
    }

    let cross_a = a1 * c2 - a2 * c1;
    let cross_b = b1 * c2 - b2 * c1;
    steps.push(format!(
        "constant-column cross-products: {cross_a} and {cross_b}"
    ));
    if approx_zero(cross_a, (a1 * c2).abs().max((a2 * c1).abs()))
        && approx_zero(cross_b, (b1 * c2).abs().max((b2 * c1).abs()))
    {
        steps.push("the equations are proportional; infinitely many solutions".into());
        Explained::new(System2Result::Infinite, steps)
    } else {
        steps.push("parallel but never coincident; no solution".into());
        Explained::new(System2Result::NoSolution, steps)
    }
}

/// Magnitude scale of the 3×3 cofactor expansion, for banding `|D|`.
fn det3_scale(rows: &[[f64; 3]; 3]) -> f64 {
    let [[a, b, c], [d, e, f], [g, h, i]] = *rows;
    (a * e * i).abs()
        + (a * f * h).abs()
        + (b * d * i).abs()
        + (b * f * g).abs()
        + (c * d * h).abs()
        + (c * e * g).abs()
}

/// Solves a 3×3 system given coefficient rows and the constant column.
///
/// A determinant inside the zero band is reported as
/// [`System3Result::NoUniqueSolution`] without further classification.
/// Non-finite input is `Indeterminate`.
#[must_use]
pub fn solve_system_3x3(rows: [[f64; 3]; 3], constants: [f64; 3]) -> System3Result {
    solve_system_3x3_explained(rows, constants).into_value()
}

/// Solves a 3×3 system, narrating the four determinants.
#[must_use]
pub fn solve_system_3x3_explained(
    rows: [[f64; 3]; 3],
    constants: [f64; 3],
) -> Explained<System3Result> {
    let m = Matrix3::new(rows);
    if !(m.is_finite() && constants.iter().all(|v| v.is_finite())) {
        return Explained::new(
            System3Result::Indeterminate,
            vec!["a coefficient is not finite; the system is indeterminate".into()],
        );
    }
    let mut steps = vec![format!("solve: {}", equation(&rows[0], constants[0]))];
    steps.push(format!("       {}", equation(&rows[1], constants[1])));
    steps.push(format!("       {}", equation(&rows[2], constants[2])));

    let d = m.det();
    steps.push(format!("D = {d}"));
    if approx_zero(d, det3_scale(&rows)) {
        steps.push(
            "D vanishes; no unique solution (dependent and inconsistent systems are not \
             distinguished at this size)"
                .into(),
        );
        return Explained::new(System3Result::NoUniqueSolution, steps);
    }

    let dx = m.with_column(0, constants).det();
    let dy = m.with_column(1, constants).det();
    let dz = m.with_column(2, constants).det();
    let x = dx / d;
    let y = dy / d;
    let z = dz / d;
    steps.push(format!("Dx = {dx}, Dy = {dy}, Dz = {dz}"));
    steps.push(format!("x = {x}, y = {y}, z = {z}"));

    let r = residuals_3x3(rows, constants, [x, y, z]);
    debug_assert!(
        r.iter().zip(rows.iter()).zip(constants.iter()).all(|((res, row), c)| {
            let scale = (row[0] * x).abs() + (row[1] * y).abs() + (row[2] * z).abs() + c.abs();
            res.abs() <= RESIDUAL_EPS * scale.max(1.0)
        }),
        "solution fails re-substitution: {r:?}"
    );
    Explained::new(System3Result::Unique { x, y, z }, steps)
}
