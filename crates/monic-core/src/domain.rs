//! Checked elementary operations.
//!
//! The surrounding calculators feed user-entered scalars straight into
//! powers, logarithms, and radicals. These helpers refuse the
//! out-of-domain cases with a typed error instead of silently producing
//! NaN, so hosts can report the reason rather than a blank result.

use thiserror::Error;

/// A typed out-of-domain failure from an elementary operation.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum DomainError {
    /// A negative base raised to a non-integer exponent has no real value.
    #[error("negative base {base} with non-integer exponent {exponent}")]
    NegativeBase {
        /// The offending base.
        base: f64,
        /// The non-integer exponent.
        exponent: f64,
    },
    /// Logarithms are only defined for positive arguments.
    #[error("logarithm of non-positive value {0}")]
    NonPositiveLog(f64),
    /// An even-order root of a negative value has no real value.
    #[error("root of order {n} of negative value {value}")]
    EvenRootOfNegative {
        /// The (even) root order.
        n: u32,
        /// The negative radicand.
        value: f64,
    },
}

/// Computes `base^exponent` over the reals.
///
/// # Errors
///
/// Returns [`DomainError::NegativeBase`] when `base < 0` and `exponent`
/// is not an integer; the result would be complex.
pub fn checked_powf(base: f64, exponent: f64) -> Result<f64, DomainError> {
    if base < 0.0 && exponent.fract() != 0.0 {
        return Err(DomainError::NegativeBase { base, exponent });
    }
    Ok(base.powf(exponent))
}

/// Computes the natural logarithm of `value`.
///
/// # Errors
///
/// Returns [`DomainError::NonPositiveLog`] when `value ≤ 0`.
pub fn checked_log(value: f64) -> Result<f64, DomainError> {
    if value <= 0.0 {
        return Err(DomainError::NonPositiveLog(value));
    }
    Ok(value.ln())
}

/// Computes the real `n`-th root of `value`.
///
/// Odd orders are defined for every real (the root keeps the sign of the
/// radicand); even orders require a non-negative radicand.
///
/// # Errors
///
/// Returns [`DomainError::EvenRootOfNegative`] when `n` is even and
/// `value < 0`.
///
/// # Panics
///
/// Panics if `n` is zero; a zeroth root is a caller bug, not an input
/// condition.
pub fn checked_nth_root(value: f64, n: u32) -> Result<f64, DomainError> {
    assert!(n > 0, "root order must be positive");
    if n % 2 == 0 && value < 0.0 {
        return Err(DomainError::EvenRootOfNegative { n, value });
    }
    Ok(value.signum() * value.abs().powf(1.0 / f64::from(n)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_powf_integer_exponent_of_negative_base() {
        assert_eq!(checked_powf(-2.0, 3.0), Ok(-8.0));
        assert_eq!(checked_powf(-2.0, 2.0), Ok(4.0));
    }

    #[test]
    fn test_powf_rejects_fractional_exponent_of_negative_base() {
        assert_eq!(
            checked_powf(-4.0, 0.5),
            Err(DomainError::NegativeBase {
                base: -4.0,
                exponent: 0.5
            })
        );
    }

    #[test]
    fn test_log_domain() {
        assert!((checked_log(std::f64::consts::E).unwrap() - 1.0).abs() < 1e-12);
        assert_eq!(checked_log(0.0), Err(DomainError::NonPositiveLog(0.0)));
        assert_eq!(checked_log(-3.0), Err(DomainError::NonPositiveLog(-3.0)));
    }

    #[test]
    fn test_odd_root_of_negative() {
        let r = checked_nth_root(-27.0, 3).unwrap();
        assert!((r + 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_even_root_of_negative_rejected() {
        assert_eq!(
            checked_nth_root(-16.0, 4),
            Err(DomainError::EvenRootOfNegative { n: 4, value: -16.0 })
        );
    }

    #[test]
    fn test_even_root_of_positive() {
        let r = checked_nth_root(16.0, 4).unwrap();
        assert!((r - 2.0).abs() < 1e-12);
    }
}
