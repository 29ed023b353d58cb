//! Property tests for the equation solvers.

#[cfg(test)]
mod tests {
    use num_complex::Complex64;
    use proptest::prelude::*;

    use monic_core::Root;

    use crate::cubic::{monic_cubic_roots, solve_cubic};
    use crate::kernel::{solve_linear, solve_quadratic};

    fn small_int() -> impl Strategy<Value = f64> {
        (-9i32..=9).prop_map(f64::from)
    }

    fn nonzero_int() -> impl Strategy<Value = f64> {
        (-9i32..=9)
            .prop_filter("leading coefficient must not vanish", |n| *n != 0)
            .prop_map(f64::from)
    }

    proptest! {
        #[test]
        fn prop_linear_root_satisfies_equation(a in nonzero_int(), b in small_int()) {
            let roots = solve_linear(a, b).real_roots();
            prop_assert_eq!(roots.len(), 1);
            let x = roots[0];
            let scale = (a * x).abs().max(b.abs()).max(1.0);
            prop_assert!((a * x + b).abs() <= 1e-9 * scale);
        }

        #[test]
        fn prop_quadratic_roots_satisfy_equation(
            a in nonzero_int(),
            b in small_int(),
            c in small_int(),
        ) {
            let result = solve_quadratic(a, b, c);
            prop_assert!(result.is_solution());
            for root in result.roots() {
                let z = root.as_complex();
                let residual = (Complex64::from(a) * z * z
                    + Complex64::from(b) * z
                    + Complex64::from(c))
                .norm();
                let scale = (a * z.norm() * z.norm()).abs()
                    + (b * z.norm()).abs()
                    + c.abs();
                prop_assert!(
                    residual <= 1e-9 * scale.max(1.0),
                    "residual {} for root {}",
                    residual,
                    z
                );
            }
        }

        #[test]
        fn prop_quadratic_conjugate_pair_is_ordered(
            a in nonzero_int(),
            b in small_int(),
            c in small_int(),
        ) {
            let result = solve_quadratic(a, b, c);
            let roots = result.roots();
            if roots.len() == 2 && !roots[0].is_real() {
                let (z, conj) = (roots[0].as_complex(), roots[1].as_complex());
                prop_assert!(z.im > 0.0);
                prop_assert_eq!(z.re, conj.re);
                prop_assert_eq!(z.im, -conj.im);
            }
        }

        #[test]
        fn prop_cubic_scan_finds_distinct_integer_roots(
            r1 in -5i32..=5,
            r2 in -5i32..=5,
            r3 in -5i32..=5,
            lead in prop::sample::select(vec![-3.0, -1.0, 1.0, 2.0]),
        ) {
            prop_assume!(r1 != r2 && r2 != r3 && r1 != r3);
            let (r1, r2, r3) = (f64::from(r1), f64::from(r2), f64::from(r3));
            // lead · (x - r1)(x - r2)(x - r3), expanded.
            let b = -(r1 + r2 + r3);
            let c = r1 * r2 + r1 * r3 + r2 * r3;
            let d = -(r1 * r2 * r3);

            let result = solve_cubic(lead, lead * b, lead * c, lead * d);
            let mut found = result.real_roots();
            found.sort_by(f64::total_cmp);
            let mut expected = [r1, r2, r3];
            expected.sort_by(f64::total_cmp);

            prop_assert_eq!(found.len(), 3, "found {:?}", found);
            for (got, want) in found.iter().zip(expected) {
                prop_assert!(
                    (got - want).abs() <= 1e-6 * want.abs().max(1.0),
                    "{} vs {}",
                    got,
                    want
                );
            }
        }

        #[test]
        fn prop_monic_cubic_root_invariants(
            p2 in small_int(),
            p1 in small_int(),
            p0 in small_int(),
        ) {
            // Vieta: sum of roots is -p2, product is -p0.
            let roots = monic_cubic_roots(p2, p1, p0);
            let sum: Complex64 = roots.iter().map(Root::as_complex).sum();
            let product: Complex64 = roots.iter().map(Root::as_complex).product();
            let scale = 1.0 + p2.abs() + p1.abs() + p0.abs();
            prop_assert!((sum.re + p2).abs() <= 1e-6 * scale, "sum {}", sum);
            prop_assert!(sum.im.abs() <= 1e-6 * scale, "sum {}", sum);
            prop_assert!(
                (product.re + p0).abs() <= 1e-6 * scale * scale,
                "product {}",
                product
            );
            prop_assert!(product.im.abs() <= 1e-6 * scale * scale, "product {}", product);
        }
    }
}
