//! # monic-solve
//!
//! Equation solvers for the Monic algebra engine.
//!
//! This crate provides:
//! - Closed-form linear and quadratic solvers with tolerance-banded
//!   degenerate classification and complex conjugate pairs
//! - A bounded multi-seed Newton–Raphson scan for cubic equations
//! - A closed-form monic cubic (trigonometric / Cardano) used where the
//!   multiplicity pattern must be classified reliably
//!
//! Every solver has an `_explained` variant returning the same result
//! together with human-readable derivation steps:
//!
//! ```rust,ignore
//! use monic_solve::solve_quadratic_explained;
//!
//! let explained = solve_quadratic_explained(1.0, -3.0, 2.0);
//! for line in &explained.steps {
//!     println!("{line}");
//! }
//! assert_eq!(explained.value.real_roots(), vec![2.0, 1.0]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cubic;
pub mod kernel;
pub mod scan;

#[cfg(test)]
mod proptests;

pub use cubic::{
    monic_cubic_roots, monic_cubic_roots_explained, solve_cubic, solve_cubic_explained,
};
pub use kernel::{
    solve_linear, solve_linear_explained, solve_quadratic, solve_quadratic_explained,
};
pub use scan::{newton_scan, ScanConfig, DEDUP_EPS};
