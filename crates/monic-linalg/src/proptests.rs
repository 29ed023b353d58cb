//! Property tests for the system and eigen solvers.

#[cfg(test)]
mod tests {
    use num_complex::Complex64;
    use proptest::prelude::*;

    use monic_core::Root;

    use crate::cramer::{solve_system_2x2, solve_system_3x3, System2Result};
    use crate::eigen::{eigen_2x2, eigen_3x3, Eigen2};
    use crate::matrix::{Matrix2, Matrix3};

    fn entry() -> impl Strategy<Value = f64> {
        (-6i32..=6).prop_map(f64::from)
    }

    fn matrix2() -> impl Strategy<Value = Matrix2> {
        (entry(), entry(), entry(), entry())
            .prop_map(|(a, b, c, d)| Matrix2::new([[a, b], [c, d]]))
    }

    fn matrix3() -> impl Strategy<Value = Matrix3> {
        (
            (entry(), entry(), entry()),
            (entry(), entry(), entry()),
            (entry(), entry(), entry()),
        )
            .prop_map(|((a, b, c), (d, e, f), (g, h, i))| {
                Matrix3::new([[a, b, c], [d, e, f], [g, h, i]])
            })
    }

    proptest! {
        #[test]
        fn prop_eigen_2x2_trace_and_det_invariants(m in matrix2()) {
            let spectrum = eigen_2x2(&m).expect("finite matrices always have a spectrum");
            let values = spectrum.values();
            let sum: Complex64 = values.iter().map(Root::as_complex).sum();
            let product: Complex64 = values.iter().map(Root::as_complex).product();
            let scale = 1.0 + m.trace().abs() + m.det().abs();
            prop_assert!((sum.re - m.trace()).abs() <= 1e-6 * scale);
            prop_assert!(sum.im.abs() <= 1e-6 * scale);
            prop_assert!((product.re - m.det()).abs() <= 1e-6 * scale * scale);
            prop_assert!(product.im.abs() <= 1e-6 * scale * scale);
        }

        #[test]
        fn prop_eigen_2x2_pairs_satisfy_matrix_action(m in matrix2()) {
            if let Some(Eigen2::Real(pairs)) = eigen_2x2(&m) {
                for pair in pairs {
                    let av = m.mul_vec(pair.vector);
                    let vmax = pair.vector[0].abs().max(pair.vector[1].abs());
                    let band = 1e-6 * (1.0 + pair.value.abs() + 6.0) * vmax.max(1.0);
                    prop_assert!(
                        (av[0] - pair.value * pair.vector[0]).abs() <= band
                            && (av[1] - pair.value * pair.vector[1]).abs() <= band,
                        "Av != λv for λ = {}, v = {:?}",
                        pair.value,
                        pair.vector
                    );
                }
            }
        }

        #[test]
        fn prop_eigen_3x3_trace_and_det_invariants(m in matrix3()) {
            let spectrum = eigen_3x3(&m).expect("finite matrices always have a spectrum");
            let values = spectrum.values();
            let sum: Complex64 = values.iter().map(Root::as_complex).sum();
            let product: Complex64 = values.iter().map(Root::as_complex).product();
            let scale = 1.0 + m.trace().abs() + m.minor_sum().abs() + m.det().abs();
            prop_assert!((sum.re - m.trace()).abs() <= 1e-6 * scale, "sum {}", sum);
            prop_assert!(sum.im.abs() <= 1e-6 * scale);
            prop_assert!(
                (product.re - m.det()).abs() <= 1e-6 * scale * scale,
                "product {}",
                product
            );
            prop_assert!(product.im.abs() <= 1e-6 * scale * scale);
        }

        #[test]
        fn prop_cramer_2x2_recovers_constructed_solution(
            a1 in entry(), b1 in entry(),
            a2 in entry(), b2 in entry(),
            x in entry(), y in entry(),
        ) {
            prop_assume!((a1 * b2 - a2 * b1).abs() > 0.5);
            // Integer systems built from a known solution solve exactly.
            let c1 = a1 * x + b1 * y;
            let c2 = a2 * x + b2 * y;
            let result = solve_system_2x2(a1, b1, c1, a2, b2, c2);
            prop_assert_eq!(result.solution(), Some([x, y]));
        }

        #[test]
        fn prop_cramer_2x2_classifies_proportional_rows(
            a in entry(), b in entry(), c in entry(),
            k in 1i32..=3,
        ) {
            prop_assume!(a != 0.0 || b != 0.0);
            let k = f64::from(k);
            prop_assert_eq!(
                solve_system_2x2(a, b, c, k * a, k * b, k * c),
                System2Result::Infinite
            );
            prop_assert_eq!(
                solve_system_2x2(a, b, c, k * a, k * b, k * c + 1.0),
                System2Result::NoSolution
            );
        }

        #[test]
        fn prop_cramer_3x3_recovers_constructed_solution(
            m in matrix3(),
            x in entry(), y in entry(), z in entry(),
        ) {
            prop_assume!(m.det().abs() > 0.5);
            let rows = [
                [m[(0, 0)], m[(0, 1)], m[(0, 2)]],
                [m[(1, 0)], m[(1, 1)], m[(1, 2)]],
                [m[(2, 0)], m[(2, 1)], m[(2, 2)]],
            ];
            let constants = m.mul_vec([x, y, z]);
            let result = solve_system_3x3(rows, constants);
            prop_assert_eq!(result.solution(), Some([x, y, z]));
        }
    }
}
