//! # monic-core
//!
//! Shared numeric foundation for the Monic algebra engine.
//!
//! This crate provides:
//! - The engine-wide tolerance policy for comparisons against zero
//! - The `Root` / `EquationResult` model shared by every solver
//! - The `Explained<T>` carrier for human-readable derivation steps
//! - Checked elementary operations with typed domain errors
//!
//! Everything here is a pure value or a pure function; there is no shared
//! mutable state, and the tolerance constants are compile-time constants.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod domain;
pub mod num;
pub mod result;
pub mod steps;

pub use domain::{checked_log, checked_nth_root, checked_powf, DomainError};
pub use num::{approx_zero, coeff_zero, EPS, RESIDUAL_EPS};
pub use result::{EquationResult, Root};
pub use steps::Explained;
