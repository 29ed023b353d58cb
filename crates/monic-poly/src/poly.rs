//! The canonical sparse polynomial and its arithmetic.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use monic_core::Explained;
use thiserror::Error;

use crate::term::Term;

/// Errors from polynomial arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// Long division requires a divisor with a non-zero leading term; the
    /// zero polynomial has none.
    #[error("division by the zero polynomial")]
    DivisionByZero,
}

/// The quotient/remainder pair produced by long division.
#[derive(Clone, Debug, PartialEq)]
pub struct Division {
    /// The polynomial quotient.
    pub quotient: Polynomial,
    /// The remainder; empty when the division is exact.
    pub remainder: Polynomial,
}

impl Division {
    /// Returns true when the remainder is the zero polynomial.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.remainder.is_zero()
    }
}

/// A sparse univariate polynomial over `f64`.
///
/// Terms are kept in canonical form: strictly descending exponents, at
/// most one term per exponent, and no zero coefficients. The empty term
/// list is the zero polynomial. Operations never mutate their operands;
/// they build new canonical polynomials.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polynomial {
    terms: Vec<Term>,
}

impl Polynomial {
    /// Creates a polynomial from terms, establishing canonical form.
    #[must_use]
    pub fn new(terms: Vec<Term>) -> Self {
        Self {
            terms: canonicalize(terms),
        }
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self { terms: Vec::new() }
    }

    /// Creates the constant polynomial `1`.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(1.0)
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: f64) -> Self {
        Self::new(vec![Term::constant(c)])
    }

    /// Creates the polynomial `x`.
    #[must_use]
    pub fn x() -> Self {
        Self::new(vec![Term::new(1.0, 1)])
    }

    /// Creates the monomial `c · x^n`.
    #[must_use]
    pub fn monomial(c: f64, n: u32) -> Self {
        Self::new(vec![Term::new(c, n)])
    }

    /// Creates a polynomial from coefficients in descending degree order,
    /// leading coefficient first: `[a, b, c]` is `a·x² + b·x + c`.
    #[must_use]
    pub fn from_coeffs(coeffs: &[f64]) -> Self {
        let top = coeffs.len().saturating_sub(1) as u32;
        Self::new(
            coeffs
                .iter()
                .enumerate()
                .map(|(i, &c)| Term::new(c, top - i as u32))
                .collect(),
        )
    }

    /// Returns the terms in descending exponent order.
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Returns true for the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the degree, or `None` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<u32> {
        self.terms.first().map(|t| t.exp)
    }

    /// Returns the leading (highest-exponent) term.
    #[must_use]
    pub fn leading(&self) -> Option<Term> {
        self.terms.first().copied()
    }

    /// Returns the coefficient of `x^exp` (zero when absent).
    #[must_use]
    pub fn coeff(&self, exp: u32) -> f64 {
        self.terms
            .iter()
            .find(|t| t.exp == exp)
            .map_or(0.0, |t| t.coeff)
    }

    /// Evaluates the polynomial at `x` by sparse Horner steps.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        let Some(lead) = self.terms.first() else {
            return 0.0;
        };
        let mut acc = 0.0;
        let mut exp = lead.exp;
        for t in &self.terms {
            acc *= x.powi((exp - t.exp) as i32);
            acc += t.coeff;
            exp = t.exp;
        }
        acc * x.powi(exp as i32)
    }

    /// Computes the formal derivative.
    #[must_use]
    pub fn derivative(&self) -> Self {
        Self::new(
            self.terms
                .iter()
                .filter(|t| t.exp > 0)
                .map(|t| Term::new(t.coeff * f64::from(t.exp), t.exp - 1))
                .collect(),
        )
    }

    /// Multiplies every coefficient by a scalar.
    #[must_use]
    pub fn scale(&self, c: f64) -> Self {
        Self::new(
            self.terms
                .iter()
                .map(|t| Term::new(t.coeff * c, t.exp))
                .collect(),
        )
    }

    /// Adds two polynomials, merging terms by exponent.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let mut terms = self.terms.clone();
        terms.extend_from_slice(&other.terms);
        Self::new(terms)
    }

    /// Subtracts `other`: its coefficients are negated, then added.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.scale(-1.0))
    }

    /// Multiplies two polynomials by a full pairwise cross product:
    /// exponents add, coefficients multiply, like terms merge.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let mut terms = Vec::with_capacity(self.terms.len() * other.terms.len());
        for a in &self.terms {
            for b in &other.terms {
                terms.push(a.mul(b));
            }
        }
        Self::new(terms)
    }

    /// Multiplies by a single term.
    #[must_use]
    pub fn mul_term(&self, t: &Term) -> Self {
        Self::new(self.terms.iter().map(|s| s.mul(t)).collect())
    }

    /// Raises the polynomial to a non-negative integer power by repeated
    /// squaring.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;
        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul(&base);
            }
            base = base.mul(&base);
            exp >>= 1;
        }
        result
    }

    /// Long division with remainder.
    ///
    /// Repeatedly divides the remainder's leading term by the divisor's
    /// leading term, subtracts the scaled divisor, and drops the cancelled
    /// leading exponent outright (floating subtraction is not trusted to
    /// produce an exact zero there). Stops when the remainder is empty or
    /// its degree falls below the divisor's.
    ///
    /// # Errors
    ///
    /// [`PolyError::DivisionByZero`] when the divisor is the zero
    /// polynomial.
    pub fn divide(&self, divisor: &Self) -> Result<Division, PolyError> {
        self.divide_explained(divisor).map(Explained::into_value)
    }

    /// Long division, narrating each round.
    ///
    /// # Errors
    ///
    /// [`PolyError::DivisionByZero`] when the divisor is the zero
    /// polynomial.
    pub fn divide_explained(&self, divisor: &Self) -> Result<Explained<Division>, PolyError> {
        let Some(lead_div) = divisor.leading() else {
            return Err(PolyError::DivisionByZero);
        };

        let mut steps = vec![format!("divide ({self}) by ({divisor})")];
        let mut quotient_terms: Vec<Term> = Vec::new();
        let mut remainder = self.clone();

        while let Some(lead_rem) = remainder.leading() {
            if lead_rem.exp < lead_div.exp {
                steps.push(format!(
                    "remainder {remainder} has lower degree than the divisor; stop"
                ));
                break;
            }
            // Guaranteed: lead_div is non-zero and lead_rem.exp >= lead_div.exp.
            let qt = Term::new(lead_rem.coeff / lead_div.coeff, lead_rem.exp - lead_div.exp);
            steps.push(format!("{lead_rem} ÷ {lead_div} gives the quotient term {qt}"));

            remainder = remainder.sub(&divisor.mul_term(&qt));
            remainder.drop_exponent(lead_rem.exp);
            steps.push(format!(
                "subtract ({qt})·({divisor}); remainder is now {remainder}"
            ));
            quotient_terms.push(qt);
        }

        let division = Division {
            quotient: Self::new(quotient_terms),
            remainder,
        };
        if division.is_exact() {
            steps.push(format!(
                "the division is exact: quotient {}",
                division.quotient
            ));
        } else {
            steps.push(format!(
                "quotient {} with remainder {}",
                division.quotient, division.remainder
            ));
        }
        Ok(Explained::new(division, steps))
    }

    /// Adds, narrating the merge.
    #[must_use]
    pub fn add_explained(&self, other: &Self) -> Explained<Polynomial> {
        let sum = self.add(other);
        let steps = vec![
            format!("add ({self}) and ({other})"),
            format!("combine like terms: {sum}"),
        ];
        Explained::new(sum, steps)
    }

    /// Subtracts, narrating the sign flip and merge.
    #[must_use]
    pub fn sub_explained(&self, other: &Self) -> Explained<Polynomial> {
        let diff = self.sub(other);
        let steps = vec![
            format!("subtract ({other}) from ({self})"),
            format!("negate the subtrahend and combine like terms: {diff}"),
        ];
        Explained::new(diff, steps)
    }

    /// Multiplies, narrating the cross product.
    #[must_use]
    pub fn mul_explained(&self, other: &Self) -> Explained<Polynomial> {
        let product = self.mul(other);
        let steps = vec![
            format!("multiply ({self}) by ({other})"),
            format!("cross-multiply every term pair and merge: {product}"),
        ];
        Explained::new(product, steps)
    }

    /// Removes any term with the given exponent.
    fn drop_exponent(&mut self, exp: u32) {
        self.terms.retain(|t| t.exp != exp);
    }
}

/// Sorts descending by exponent, merges like terms, drops zeros.
fn canonicalize(mut terms: Vec<Term>) -> Vec<Term> {
    terms.retain(|t| !t.is_zero());
    terms.sort_by(|a, b| b.exp.cmp(&a.exp));

    let mut merged: Vec<Term> = Vec::with_capacity(terms.len());
    for t in terms {
        match merged.last_mut() {
            Some(last) if last.exp == t.exp => last.coeff += t.coeff,
            _ => merged.push(t),
        }
    }
    merged.retain(|t| !t.is_zero());
    merged
}

impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, other: Self) -> Polynomial {
        Polynomial::add(self, other)
    }
}

impl Sub for &Polynomial {
    type Output = Polynomial;

    fn sub(self, other: Self) -> Polynomial {
        Polynomial::sub(self, other)
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, other: Self) -> Polynomial {
        Polynomial::mul(self, other)
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        self.scale(-1.0)
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        self.scale(-1.0)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        for (i, term) in self.terms.iter().enumerate() {
            if i == 0 {
                if term.coeff < 0.0 {
                    write!(f, "-")?;
                }
            } else if term.coeff < 0.0 {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }
            write!(f, "{}", term.unsigned_text())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(coeffs: &[f64]) -> Polynomial {
        Polynomial::from_coeffs(coeffs)
    }

    #[test]
    fn test_canonical_merge_and_drop() {
        // 2x^2 + 3x^2 - 5x^2 collapses entirely; x survives.
        let p = Polynomial::new(vec![
            Term::new(2.0, 2),
            Term::new(1.0, 1),
            Term::new(3.0, 2),
            Term::new(-5.0, 2),
        ]);
        assert_eq!(p.terms(), &[Term::new(1.0, 1)]);
    }

    #[test]
    fn test_degree_and_leading() {
        assert_eq!(Polynomial::zero().degree(), None);
        assert_eq!(poly(&[1.0, 0.0, -4.0]).degree(), Some(2));
        assert_eq!(poly(&[2.0, 1.0]).leading(), Some(Term::new(2.0, 1)));
    }

    #[test]
    fn test_add_merges_by_exponent() {
        let p = poly(&[1.0, 2.0, 3.0]); // x^2 + 2x + 3
        let q = poly(&[3.0, 4.0]); // 3x + 4
        let sum = p.add(&q);
        assert_eq!(sum, poly(&[1.0, 5.0, 7.0]));
    }

    #[test]
    fn test_sub_negates_then_adds() {
        let p = poly(&[1.0, 2.0, 3.0]);
        let q = poly(&[1.0, 2.0, 3.0]);
        assert!(p.sub(&q).is_zero());
    }

    #[test]
    fn test_mul_cross_product() {
        // (x + 1)(x - 1) = x^2 - 1
        let p = poly(&[1.0, 1.0]);
        let q = poly(&[1.0, -1.0]);
        assert_eq!(p.mul(&q), poly(&[1.0, 0.0, -1.0]));
    }

    #[test]
    fn test_eval_sparse_horner() {
        // 2x^3 - 6x + 1 at x = 2: 16 - 12 + 1 = 5
        let p = poly(&[2.0, 0.0, -6.0, 1.0]);
        assert_eq!(p.eval(2.0), 5.0);
        assert_eq!(Polynomial::zero().eval(41.0), 0.0);
    }

    #[test]
    fn test_derivative() {
        // d/dx (x^3 - 2x^2 + 7) = 3x^2 - 4x
        let p = poly(&[1.0, -2.0, 0.0, 7.0]);
        assert_eq!(p.derivative(), poly(&[3.0, -4.0, 0.0]));
        assert!(Polynomial::constant(5.0).derivative().is_zero());
    }

    #[test]
    fn test_pow() {
        // (x + 1)^3 = x^3 + 3x^2 + 3x + 1
        let p = poly(&[1.0, 1.0]);
        assert_eq!(p.pow(3), poly(&[1.0, 3.0, 3.0, 1.0]));
        assert_eq!(p.pow(0), Polynomial::one());
    }

    #[test]
    fn test_divide_exact() {
        // (x^2 - 5x + 6) / (x - 2) = x - 3
        let p = poly(&[1.0, -5.0, 6.0]);
        let d = poly(&[1.0, -2.0]);
        let div = p.divide(&d).unwrap();
        assert_eq!(div.quotient, poly(&[1.0, -3.0]));
        assert!(div.is_exact());
    }

    #[test]
    fn test_divide_with_remainder() {
        // (x^3 + 2) / (x^2) = x, remainder 2
        let p = poly(&[1.0, 0.0, 0.0, 2.0]);
        let d = Polynomial::monomial(1.0, 2);
        let div = p.divide(&d).unwrap();
        assert_eq!(div.quotient, Polynomial::x());
        assert_eq!(div.remainder, Polynomial::constant(2.0));
    }

    #[test]
    fn test_divide_reconstructs_dividend() {
        // q·d + r must re-expand to the dividend.
        let p = poly(&[3.0, -2.0, 0.0, 7.0, -4.0]);
        let d = poly(&[2.0, 0.0, -1.0]);
        let div = p.divide(&d).unwrap();
        let rebuilt = div.quotient.mul(&d).add(&div.remainder);
        assert_eq!(rebuilt, p);
    }

    #[test]
    fn test_divide_by_zero() {
        let p = poly(&[1.0, 1.0]);
        assert_eq!(
            p.divide(&Polynomial::zero()),
            Err(PolyError::DivisionByZero)
        );
    }

    #[test]
    fn test_divide_zero_dividend() {
        let div = Polynomial::zero().divide(&poly(&[1.0, 1.0])).unwrap();
        assert!(div.quotient.is_zero());
        assert!(div.remainder.is_zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(poly(&[1.0, -2.0, 1.0]).to_string(), "x^2 - 2x + 1");
        assert_eq!(poly(&[-1.0, 0.0, 4.0]).to_string(), "-x^2 + 4");
        assert_eq!(poly(&[2.5, 1.0]).to_string(), "2.5x + 1");
        assert_eq!(Polynomial::zero().to_string(), "0");
        assert_eq!(Polynomial::constant(-3.0).to_string(), "-3");
        assert_eq!(Polynomial::x().to_string(), "x");
    }

    #[test]
    fn test_operators_match_methods() {
        let p = poly(&[1.0, 2.0]);
        let q = poly(&[3.0, -1.0]);
        assert_eq!(&p + &q, p.add(&q));
        assert_eq!(&p - &q, p.sub(&q));
        assert_eq!(&p * &q, p.mul(&q));
        assert_eq!(-&p, p.scale(-1.0));
    }

    #[test]
    fn test_divide_explained_narrates_rounds() {
        let p = poly(&[1.0, -5.0, 6.0]);
        let d = poly(&[1.0, -2.0]);
        let explained = p.divide_explained(&d).unwrap();
        assert!(explained.value.is_exact());
        assert!(explained.steps.len() >= 3);
        assert!(explained.steps[0].contains("divide"));
        assert!(explained.steps.last().unwrap().contains("exact"));
    }
}
