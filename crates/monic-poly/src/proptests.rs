//! Property tests for polynomial arithmetic, parsing, and division.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::poly::Polynomial;
    use crate::term::Term;

    /// Integer-valued coefficients keep ring identities exact in `f64`.
    fn small_coeff() -> impl Strategy<Value = f64> {
        (-9i32..=9).prop_map(f64::from)
    }

    fn small_poly() -> impl Strategy<Value = Polynomial> {
        prop::collection::vec((small_coeff(), 0u32..6), 0..6).prop_map(|pairs| {
            Polynomial::new(
                pairs
                    .into_iter()
                    .map(|(c, e)| Term::new(c, e))
                    .collect(),
            )
        })
    }

    fn nonzero_poly() -> impl Strategy<Value = Polynomial> {
        small_poly().prop_filter("divisor must be non-zero", |p| !p.is_zero())
    }

    /// Coefficient-wise comparison with a relative band, for results that
    /// pass through floating division.
    fn coeffs_close(a: &Polynomial, b: &Polynomial) -> bool {
        let top = a.degree().unwrap_or(0).max(b.degree().unwrap_or(0));
        (0..=top).all(|e| {
            let (x, y) = (a.coeff(e), b.coeff(e));
            (x - y).abs() <= 1e-6 * x.abs().max(y.abs()).max(1.0)
        })
    }

    proptest! {
        #[test]
        fn prop_add_commutes(p in small_poly(), q in small_poly()) {
            prop_assert_eq!(p.add(&q), q.add(&p));
        }

        #[test]
        fn prop_add_then_sub_returns_start(p in small_poly(), q in small_poly()) {
            prop_assert_eq!(p.add(&q).sub(&q), p);
        }

        #[test]
        fn prop_mul_commutes(p in small_poly(), q in small_poly()) {
            prop_assert_eq!(p.mul(&q), q.mul(&p));
        }

        #[test]
        fn prop_mul_distributes_over_add(
            p in small_poly(),
            q in small_poly(),
            r in small_poly(),
        ) {
            prop_assert_eq!(p.mul(&q.add(&r)), p.mul(&q).add(&p.mul(&r)));
        }

        #[test]
        fn prop_identities(p in small_poly()) {
            prop_assert_eq!(p.add(&Polynomial::zero()), p.clone());
            prop_assert_eq!(p.mul(&Polynomial::constant(1.0)), p);
        }

        #[test]
        fn prop_derivative_is_linear(p in small_poly(), q in small_poly()) {
            prop_assert_eq!(
                p.add(&q).derivative(),
                p.derivative().add(&q.derivative())
            );
        }

        #[test]
        fn prop_division_reconstructs_dividend(p in small_poly(), d in nonzero_poly()) {
            let div = p.divide(&d).unwrap();
            if let (Some(rd), Some(dd)) = (div.remainder.degree(), d.degree()) {
                prop_assert!(rd < dd, "remainder degree {} not below divisor degree {}", rd, dd);
            }
            let rebuilt = div.quotient.mul(&d).add(&div.remainder);
            prop_assert!(
                coeffs_close(&rebuilt, &p),
                "q·d + r = {} does not re-expand to {}",
                rebuilt,
                p
            );
        }

        #[test]
        fn prop_format_parse_round_trip(p in small_poly()) {
            let text = p.to_string();
            prop_assert_eq!(text.parse::<Polynomial>().unwrap(), p);
        }
    }
}
