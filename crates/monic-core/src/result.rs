//! Roots and tagged solve outcomes.

use num_complex::Complex64;
use std::fmt;

/// A single root of an equation: either a real scalar or one member of a
/// complex conjugate pair.
///
/// Roots carry no identity beyond their value. Ordering inside a result
/// list follows the derivation that produced them (the `+` branch of a
/// discriminant before the `−` branch, positive imaginary part before
/// negative).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Root {
    /// A real root.
    Real(f64),
    /// A complex root.
    Complex(Complex64),
}

impl Root {
    /// Builds a complex root from its parts.
    #[must_use]
    pub fn complex(re: f64, im: f64) -> Self {
        Self::Complex(Complex64::new(re, im))
    }

    /// Returns true for the `Real` variant.
    #[must_use]
    pub fn is_real(&self) -> bool {
        matches!(self, Self::Real(_))
    }

    /// Returns the real value if this root is real.
    #[must_use]
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Self::Real(x) => Some(*x),
            Self::Complex(_) => None,
        }
    }

    /// Returns the root as a complex number, promoting a real root with a
    /// zero imaginary part.
    #[must_use]
    pub fn as_complex(&self) -> Complex64 {
        match self {
            Self::Real(x) => Complex64::new(*x, 0.0),
            Self::Complex(z) => *z,
        }
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real(x) => write!(f, "{x}"),
            Self::Complex(z) => write!(f, "{z}"),
        }
    }
}

/// The tagged outcome of solving one equation.
#[derive(Clone, Debug, PartialEq)]
pub enum EquationResult {
    /// The equation has the listed roots, in derivation order.
    ///
    /// The list may be empty when a bounded numerical search found no
    /// acceptable root.
    Solution(Vec<Root>),
    /// Every value satisfies the equation (e.g. `0·x + 0 = 0`).
    Infinite,
    /// No value satisfies the equation (e.g. `0·x + 5 = 0`).
    NoSolution,
    /// The coefficients were not finite numbers; no classification is
    /// meaningful.
    Indeterminate,
}

impl EquationResult {
    /// Returns the roots of a `Solution`, or an empty slice otherwise.
    #[must_use]
    pub fn roots(&self) -> &[Root] {
        match self {
            Self::Solution(roots) => roots,
            _ => &[],
        }
    }

    /// Returns the real roots, in derivation order.
    #[must_use]
    pub fn real_roots(&self) -> Vec<f64> {
        self.roots().iter().filter_map(Root::as_real).collect()
    }

    /// Returns true for the `Solution` variant.
    #[must_use]
    pub fn is_solution(&self) -> bool {
        matches!(self, Self::Solution(_))
    }
}
