//! # monic-poly
//!
//! Sparse univariate polynomials over `f64` for the Monic algebra engine.
//!
//! This crate provides:
//! - The canonical term-list representation (descending exponents, merged
//!   like terms, no zero coefficients)
//! - Arithmetic: add, subtract, multiply, and long division with remainder
//! - A tokenizer + recursive-descent parser (`FromStr`) and a
//!   sign-normalizing formatter (`Display`)
//!
//! ## Canonical form
//!
//! Every constructor and every operation re-establishes the invariant, so
//! a `Polynomial` in hand is always canonical:
//!
//! ```rust,ignore
//! use monic_poly::Polynomial;
//!
//! let p: Polynomial = "x^2 - 2x + 1".parse()?;
//! let q: Polynomial = "x - 1".parse()?;
//! let div = p.divide(&q)?;
//! assert_eq!(div.quotient.to_string(), "x - 1");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod parse;
pub mod poly;
pub mod term;

#[cfg(test)]
mod proptests;

pub use parse::ParseError;
pub use poly::{Division, PolyError, Polynomial};
pub use term::Term;
