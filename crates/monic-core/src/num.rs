//! The engine-wide tolerance policy.
//!
//! Discriminant signs, determinant signs, ratio agreement, and root
//! deduplication are the crux of correctness in this engine, and every one
//! of them is decided by a comparison against zero. Exact floating-point
//! equality is never used for those decisions; the two helpers here band
//! the comparison with a relative epsilon so that round-off cannot flip a
//! classification.
//!
//! Two constants cover two distinct concerns:
//! - [`EPS`] classifies derived quantities (discriminants, determinants,
//!   cross-products) whose sign selects a solution branch.
//! - [`RESIDUAL_EPS`] accepts a-posteriori checks (re-substituted
//!   residuals, Newton root deduplication) where the quantity being tested
//!   was itself produced by an iterative or cancellation-heavy computation
//!   and carries more noise than a single arithmetic expression.

/// Relative tolerance for classification decisions.
pub const EPS: f64 = 1e-10;

/// Relative tolerance for verification residuals and root deduplication.
pub const RESIDUAL_EPS: f64 = 1e-6;

/// Tests whether the derived quantity `x` is zero within the
/// classification band.
///
/// The band is relative to `scale`, the natural magnitude of the
/// computation that produced `x` (for a discriminant `b² − 4ac`, the
/// larger magnitude of the two products). There is no absolute floor: the
/// scale of a derived quantity is zero only when every contributing term
/// is zero, and then `x` is exactly zero too. A floor would widen the
/// band to `EPS` outright for sub-unit inputs and misclassify equations
/// whose coefficients are merely small.
#[must_use]
pub fn approx_zero(x: f64, scale: f64) -> bool {
    x.abs() <= EPS * scale.abs()
}

/// Tests whether a caller-supplied coefficient is zero.
///
/// Inputs carry no accumulated round-off, so the band is the absolute
/// `EPS`. Scaling it by neighbouring coefficients would misclassify
/// well-conditioned inputs with large entries, such as the unit leading
/// term of a characteristic polynomial.
#[must_use]
pub fn coeff_zero(x: f64) -> bool {
    x.abs() <= EPS
}
