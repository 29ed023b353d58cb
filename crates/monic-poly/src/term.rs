//! Single polynomial terms.

use std::fmt;

/// A single `coefficient · x^exponent` component of a polynomial.
///
/// Terms are immutable value objects; arithmetic produces new terms. A
/// canonical [`Polynomial`](crate::Polynomial) never stores a term with a
/// zero coefficient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Term {
    /// The real coefficient.
    pub coeff: f64,
    /// The non-negative integer exponent.
    pub exp: u32,
}

impl Term {
    /// Creates a term `coeff · x^exp`.
    #[must_use]
    pub const fn new(coeff: f64, exp: u32) -> Self {
        Self { coeff, exp }
    }

    /// Creates a constant term.
    #[must_use]
    pub const fn constant(coeff: f64) -> Self {
        Self { coeff, exp: 0 }
    }

    /// Returns true if the coefficient is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeff == 0.0
    }

    /// Multiplies two terms: coefficients multiply, exponents add.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        Self {
            coeff: self.coeff * other.coeff,
            exp: self.exp + other.exp,
        }
    }

    /// Divides by another term if the quotient is again a term.
    ///
    /// Returns `None` when the divisor coefficient is zero or its exponent
    /// exceeds this term's.
    #[must_use]
    pub fn div(&self, other: &Self) -> Option<Self> {
        if other.coeff == 0.0 || other.exp > self.exp {
            return None;
        }
        Some(Self {
            coeff: self.coeff / other.coeff,
            exp: self.exp - other.exp,
        })
    }

    /// Evaluates the term at `x`.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.coeff * x.powi(self.exp as i32)
    }

    /// Formats the term without its sign, suppressing a unit coefficient
    /// magnitude (except for constants) and the `^1` exponent.
    ///
    /// This is the building block of the polynomial formatter, which owns
    /// sign placement.
    #[must_use]
    pub fn unsigned_text(&self) -> String {
        let mag = self.coeff.abs();
        match (self.exp, mag == 1.0) {
            (0, _) => format!("{mag}"),
            (1, true) => "x".to_string(),
            (1, false) => format!("{mag}x"),
            (e, true) => format!("x^{e}"),
            (e, false) => format!("{mag}x^{e}"),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coeff < 0.0 {
            write!(f, "-{}", self.unsigned_text())
        } else {
            write!(f, "{}", self.unsigned_text())
        }
    }
}
