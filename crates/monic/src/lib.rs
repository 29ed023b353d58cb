//! # Monic
//!
//! A small algebra engine over `f64`: sparse polynomials, equation
//! solving through cubics, 2×2 and 3×3 linear systems, and eigenvalues.
//!
//! ## Features
//!
//! - **Polynomials**: canonical sparse representation with parsing,
//!   formatting, arithmetic, and long division
//! - **Equation solving**: linear through cubic, with complex conjugate
//!   pairs and tolerance-banded degenerate classification
//! - **Linear systems**: Cramer's rule, splitting dependent from
//!   inconsistent systems at the 2×2 size
//! - **Eigenvalues**: 2×2 with eigenvectors, 3×3 in closed form
//! - **Derivation steps**: every solver has an `_explained` variant
//!   that narrates its work line by line
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use monic::prelude::*;
//!
//! let p: Polynomial = "x^2 - 3x + 2".parse()?;
//! let roots = solve_quadratic(p.coeff(2), p.coeff(1), p.coeff(0));
//! assert_eq!(roots.real_roots(), vec![2.0, 1.0]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use monic_core as core;
pub use monic_linalg as linalg;
pub use monic_poly as poly;
pub use monic_solve as solve;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use monic_core::{
        approx_zero, coeff_zero, DomainError, EquationResult, Explained, Root,
    };
    pub use monic_linalg::{
        eigen_2x2, eigen_2x2_explained, eigen_3x3, eigen_3x3_explained, solve_system_2x2,
        solve_system_2x2_explained, solve_system_3x3, solve_system_3x3_explained, Eigen2, Eigen3,
        EigenPair, Matrix2, Matrix3, System2Result, System3Result,
    };
    pub use monic_poly::{Division, ParseError, PolyError, Polynomial, Term};
    pub use monic_solve::{
        monic_cubic_roots, monic_cubic_roots_explained, newton_scan, solve_cubic,
        solve_cubic_explained, solve_linear, solve_linear_explained, solve_quadratic,
        solve_quadratic_explained, ScanConfig,
    };
}
