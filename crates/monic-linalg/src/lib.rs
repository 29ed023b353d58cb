//! # monic-linalg
//!
//! Small-matrix linear algebra for the Monic algebra engine.
//!
//! This crate provides:
//! - Row-major `Matrix2` / `Matrix3` with trace, determinant, and
//!   principal-minor helpers
//! - Cramer-rule solvers for 2×2 and 3×3 linear systems with
//!   tolerance-banded degenerate classification
//! - Eigenvalue computation: 2×2 with eigenvectors, 3×3 values-only via
//!   the closed-form characteristic cubic
//!
//! Everything is sized for hand-written systems; there is no sparse or
//! blocked machinery here.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cramer;
pub mod eigen;
pub mod matrix;

#[cfg(test)]
mod proptests;

pub use cramer::{
    residuals_2x2, residuals_3x3, solve_system_2x2, solve_system_2x2_explained,
    solve_system_3x3, solve_system_3x3_explained, System2Result, System3Result,
};
pub use eigen::{
    eigen_2x2, eigen_2x2_explained, eigen_3x3, eigen_3x3_explained, Eigen2, Eigen3, EigenPair,
};
pub use matrix::{Matrix2, Matrix3};
