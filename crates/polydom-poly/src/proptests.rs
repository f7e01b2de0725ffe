//! Property-based tests for polynomial arithmetic.
//!
//! Coefficients and sample points are small integers, so every product and
//! sum below is exact in `f64` and most properties compare with `==`.

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    use crate::domain::Domain;
    use crate::polynomial::Polynomial;

    // Strategy for generating small integral coefficients
    fn small_coeff() -> impl Strategy<Value = f64> {
        (-100i32..100i32).prop_map(f64::from)
    }

    // Strategy for generating small polynomials (degree 0-4) on [-10, 10]
    fn small_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec(small_coeff(), 1..=5)
            .prop_map(|c| Polynomial::new(c, (-10.0, 10.0)).unwrap())
    }

    fn small_point() -> impl Strategy<Value = f64> {
        (-10i32..=10i32).prop_map(f64::from)
    }

    proptest! {
        #[test]
        fn poly_additive_inverse_evaluates_to_zero(a in small_poly(), x in small_point()) {
            let sum = a.add(&a.neg());
            prop_assert_eq!(sum.evaluate(x).unwrap(), 0.0);
            prop_assert!(sum.is_zero());
        }

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            let (ab, ba) = (a.add(&b), b.add(&a));
            prop_assert_eq!(ab.coeffs(), ba.coeffs());
        }

        #[test]
        fn poly_add_degree_is_max(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b).degree(), a.degree().max(b.degree()));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            let (ab, ba) = (a.mul(&b), b.mul(&a));
            prop_assert_eq!(ab.coeffs(), ba.coeffs());
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left.coeffs(), right.coeffs());
        }

        #[test]
        fn poly_mul_degree(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b).degree(), a.degree() + b.degree());
        }

        #[test]
        fn poly_eval_mul(a in small_poly(), b in small_poly(), x in small_point()) {
            // (a * b)(x) = a(x) * b(x)
            let product = a.mul(&b);
            let expected = a.evaluate(x).unwrap() * b.evaluate(x).unwrap();
            assert_relative_eq!(product.evaluate(x).unwrap(), expected, max_relative = 1e-12);
        }

        #[test]
        fn poly_scalar_commutes(a in small_poly(), c in small_coeff()) {
            prop_assert_eq!(&a * c, c * &a);
        }

        #[test]
        fn poly_derivative_integral_round_trip(a in small_poly()) {
            let back = a.derivative().integral(a.coeff(0));
            prop_assert_eq!(back.degree(), a.degree().max(1));
            for k in 0..=a.degree() {
                assert_relative_eq!(back.coeff(k), a.coeff(k), epsilon = 1e-9);
            }
        }

        #[test]
        fn poly_coeff_beyond_degree_is_zero(a in small_poly(), extra in 1usize..50) {
            prop_assert_eq!(a.coeff(a.degree() + extra), 0.0);
        }

        #[test]
        fn poly_pow_matches_repeated_eval(a in small_poly(), n in 0u32..4, x in -2i32..=2) {
            let x = f64::from(x);
            let expected = a.evaluate(x).unwrap().powi(i32::try_from(n).unwrap());
            assert_relative_eq!(a.pow(n).evaluate(x).unwrap(), expected, max_relative = 1e-12);
        }

        #[test]
        fn poly_outside_domain_fails(a in small_poly(), x in 10.5f64..1e6) {
            prop_assert!(a.evaluate(x).is_err());
            prop_assert!(a.evaluate(-x).is_err());
        }

        #[test]
        fn poly_shared_domain(lo in -50i32..0, hi in 1i32..50) {
            let p = Polynomial::new(vec![1.0], (f64::from(lo), 10.0)).unwrap();
            let q = Polynomial::new(vec![1.0], (5.0, f64::from(hi) + 5.0)).unwrap();
            let expected = Domain::new(5.0, (f64::from(hi) + 5.0).min(10.0));
            prop_assert_eq!(p.add(&q).domain(), expected);
            prop_assert_eq!(p.mul(&q).domain(), expected);
        }
    }
}
