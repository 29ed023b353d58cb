//! Eigenvalues of 2×2 and 3×3 matrices via characteristic polynomials.
//!
//! The 2×2 path also produces eigenvectors for real spectra. The 3×3
//! path reports eigenvalues only, and goes through the closed-form monic
//! cubic rather than the Newton scan: a scan can miss or duplicate roots
//! near multiplicity changes, which an eigenvalue caller cannot tolerate.

use monic_core::{approx_zero, EquationResult, Explained, Root, RESIDUAL_EPS};
use monic_solve::{monic_cubic_roots_explained, solve_quadratic_explained};
use num_complex::Complex64;

use crate::matrix::{Matrix2, Matrix3};

/// A real eigenvalue paired with one of its eigenvectors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EigenPair {
    /// The eigenvalue.
    pub value: f64,
    /// An eigenvector for `value`; not normalized.
    pub vector: [f64; 2],
}

/// The spectrum of a 2×2 matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Eigen2 {
    /// Two real eigenvalues (listed in solver order, a repeated value
    /// twice) with eigenvectors.
    Real([EigenPair; 2]),
    /// A complex conjugate pair; no real eigenvectors exist.
    Complex([Complex64; 2]),
}

impl Eigen2 {
    /// The eigenvalues as roots, in solver order.
    #[must_use]
    pub fn values(&self) -> [Root; 2] {
        match self {
            Self::Real(pairs) => [Root::Real(pairs[0].value), Root::Real(pairs[1].value)],
            Self::Complex(pair) => [Root::Complex(pair[0]), Root::Complex(pair[1])],
        }
    }
}

/// The spectrum of a 3×3 matrix. No eigenvectors at this size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Eigen3 {
    /// Three real eigenvalues, largest first.
    Real([f64; 3]),
    /// One real eigenvalue and a complex conjugate pair.
    Mixed {
        /// The real eigenvalue.
        real: f64,
        /// The conjugate pair, positive imaginary part first.
        pair: [Complex64; 2],
    },
}

impl Eigen3 {
    /// The eigenvalues as roots.
    #[must_use]
    pub fn values(&self) -> [Root; 3] {
        match self {
            Self::Real(values) => [
                Root::Real(values[0]),
                Root::Real(values[1]),
                Root::Real(values[2]),
            ],
            Self::Mixed { real, pair } => [
                Root::Real(*real),
                Root::Complex(pair[0]),
                Root::Complex(pair[1]),
            ],
        }
    }
}

/// Eigenvalues and eigenvectors of a 2×2 matrix.
///
/// The characteristic polynomial `λ² − T·λ + det` goes through the
/// quadratic kernel, so discriminant banding and root ordering follow
/// the solver's rules. For each real eigenvalue the eigenvector comes
/// from the row of `A − λI` with the larger-magnitude pivot, free
/// variable fixed to 1; when both pivots vanish (`A = λI`, or a Jordan
/// block's single direction) the canonical `[1, 0]` is returned.
///
/// Returns `None` when the matrix has non-finite entries.
#[must_use]
pub fn eigen_2x2(m: &Matrix2) -> Option<Eigen2> {
    eigen_2x2_explained(m).into_value()
}

/// 2×2 eigen solve, narrating the characteristic polynomial work.
#[must_use]
pub fn eigen_2x2_explained(m: &Matrix2) -> Explained<Option<Eigen2>> {
    if !m.is_finite() {
        return Explained::new(
            None,
            vec!["the matrix has non-finite entries".into()],
        );
    }
    let t = m.trace();
    let det = m.det();
    let mut steps = vec![format!(
        "characteristic polynomial: λ^2 - ({t})λ + ({det})"
    )];
    let quadratic = solve_quadratic_explained(1.0, -t, det);
    steps.extend(quadratic.steps);

    let spectrum = match &quadratic.value {
        EquationResult::Solution(roots) => match roots.as_slice() {
            [Root::Real(repeated)] => {
                let pair = EigenPair {
                    value: *repeated,
                    vector: eigenvector(m, *repeated),
                };
                steps.push(format!(
                    "repeated eigenvalue {repeated} with eigenvector {:?}",
                    pair.vector
                ));
                Some(Eigen2::Real([pair, pair]))
            }
            [Root::Real(first), Root::Real(second)] => {
                let pairs = [
                    EigenPair {
                        value: *first,
                        vector: eigenvector(m, *first),
                    },
                    EigenPair {
                        value: *second,
                        vector: eigenvector(m, *second),
                    },
                ];
                steps.push(format!(
                    "eigenvectors {:?} and {:?}",
                    pairs[0].vector, pairs[1].vector
                ));
                Some(Eigen2::Real(pairs))
            }
            [Root::Complex(first), Root::Complex(second)] => {
                steps.push("complex spectrum; no real eigenvectors".into());
                Some(Eigen2::Complex([*first, *second]))
            }
            _ => None,
        },
        _ => None,
    };

    if let Some(found) = &spectrum {
        let values = found.values();
        let sum: Complex64 = values.iter().map(Root::as_complex).sum();
        let product: Complex64 = values.iter().map(Root::as_complex).product();
        let scale = 1.0 + t.abs() + det.abs();
        debug_assert!(
            (sum.re - t).abs() <= RESIDUAL_EPS * scale
                && (product.re - det).abs() <= RESIDUAL_EPS * scale * scale,
            "spectrum violates trace/determinant invariants"
        );
    }
    Explained::new(spectrum, steps)
}

/// Null-space direction of `A − λI`, taken from the row with the
/// larger-magnitude pivot.
fn eigenvector(m: &Matrix2, lambda: f64) -> [f64; 2] {
    let rows = [
        [m[(0, 0)] - lambda, m[(0, 1)]],
        [m[(1, 0)], m[(1, 1)] - lambda],
    ];
    let row = if rows[0][0].abs() >= rows[1][0].abs() {
        rows[0]
    } else {
        rows[1]
    };
    if approx_zero(row[0], row[1]) {
        // Both pivots vanish; x is free.
        [1.0, 0.0]
    } else {
        [-row[1] / row[0], 1.0]
    }
}

/// Eigenvalues of a 3×3 matrix.
///
/// Builds the characteristic polynomial `λ³ − T·λ² + S·λ − det` from the
/// trace, the principal-minor sum, and the determinant, then classifies
/// its roots in closed form. Eigenvectors are not computed at this size.
///
/// Returns `None` when the matrix has non-finite entries.
#[must_use]
pub fn eigen_3x3(m: &Matrix3) -> Option<Eigen3> {
    eigen_3x3_explained(m).into_value()
}

/// 3×3 eigen solve, narrating the characteristic cubic work.
#[must_use]
pub fn eigen_3x3_explained(m: &Matrix3) -> Explained<Option<Eigen3>> {
    if !m.is_finite() {
        return Explained::new(
            None,
            vec!["the matrix has non-finite entries".into()],
        );
    }
    let t = m.trace();
    let s = m.minor_sum();
    let det = m.det();
    let mut steps = vec![format!(
        "characteristic polynomial: λ^3 - ({t})λ^2 + ({s})λ - ({det})"
    )];
    let cubic = monic_cubic_roots_explained(-t, s, -det);
    steps.extend(cubic.steps);

    let spectrum = match cubic.value {
        [Root::Real(a), Root::Real(b), Root::Real(c)] => Some(Eigen3::Real([a, b, c])),
        [Root::Real(real), Root::Complex(first), Root::Complex(second)] => Some(Eigen3::Mixed {
            real,
            pair: [first, second],
        }),
        _ => None,
    };

    if let Some(found) = &spectrum {
        let values = found.values();
        let sum: Complex64 = values.iter().map(Root::as_complex).sum();
        let product: Complex64 = values.iter().map(Root::as_complex).product();
        let scale = 1.0 + t.abs() + s.abs() + det.abs();
        debug_assert!(
            (sum.re - t).abs() <= RESIDUAL_EPS * scale
                && (product.re - det).abs() <= RESIDUAL_EPS * scale * scale,
            "spectrum violates trace/determinant invariants"
        );
    }
    Explained::new(spectrum, steps)
}
