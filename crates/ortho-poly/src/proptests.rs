//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::dense::Polynomial;

    // Integer-valued coefficients keep sums and products exact in f64
    fn small_coeff() -> impl Strategy<Value = f64> {
        (-100i32..100i32).prop_map(f64::from)
    }

    // Strategy for generating small polynomials (degree 0-5, possibly zero)
    fn small_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec(small_coeff(), 0..=6).prop_map(Polynomial::new)
    }

    // Strategy for generating non-zero polynomials
    fn nonzero_poly() -> impl Strategy<Value = Polynomial> {
        small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    proptest! {
        // Representation

        #[test]
        fn normalization_is_idempotent(coeffs in proptest::collection::vec(small_coeff(), 0..=8)) {
            let p = Polynomial::new(coeffs);
            let again = Polynomial::new(p.coeffs().to_vec());
            prop_assert_eq!(&again, &p);
            prop_assert!(p.leading_coeff().map_or(true, |c| c != 0.0));
        }

        #[test]
        fn trailing_zeros_are_dropped(coeffs in proptest::collection::vec(small_coeff(), 0..=6), pad in 0usize..4) {
            let p = Polynomial::new(coeffs.clone());
            let mut padded = coeffs;
            padded.extend(std::iter::repeat(0.0).take(pad));
            prop_assert_eq!(Polynomial::new(padded), p);
        }

        // Ring identities

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_add_then_subtract(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b).subtract(&b), a);
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.multiply(&b), b.multiply(&a));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = a.multiply(&b.add(&c));
            let right = a.multiply(&b).add(&a.multiply(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_add_identity(a in small_poly()) {
            let zero = Polynomial::zero();
            prop_assert_eq!(a.add(&zero), a.clone());
            prop_assert_eq!(zero.add(&a), a);
        }

        #[test]
        fn poly_mul_identity(a in small_poly()) {
            let one = Polynomial::one();
            prop_assert_eq!(a.multiply(&one), a.clone());
            prop_assert_eq!(one.multiply(&a), a);
        }

        #[test]
        fn poly_mul_zero(a in small_poly()) {
            let zero = Polynomial::zero();
            prop_assert!(a.multiply(&zero).is_zero());
            prop_assert!(zero.multiply(&a).is_zero());
            prop_assert!(a.scale(0.0).is_zero());
        }

        #[test]
        fn poly_additive_inverse(a in small_poly()) {
            prop_assert!(a.add(&a.negate()).is_zero());
            prop_assert!(a.subtract(&a).is_zero());
        }

        // Degree properties

        #[test]
        fn poly_mul_degree(a in nonzero_poly(), b in nonzero_poly()) {
            // Integer coefficients have no zero divisors, so degrees add exactly
            let (Some(da), Some(db)) = (a.degree(), b.degree()) else {
                unreachable!("filtered to non-zero polynomials");
            };
            prop_assert_eq!(a.multiply(&b).degree(), Some(da + db));
        }

        #[test]
        fn poly_add_degree_bound(a in small_poly(), b in small_poly()) {
            // deg(a + b) <= max(deg(a), deg(b))
            prop_assert!(a.add(&b).degree() <= a.degree().max(b.degree()));
        }

        // Evaluation

        #[test]
        fn poly_eval_add(a in small_poly(), b in small_poly(), x in -3i32..=3) {
            let x = f64::from(x);
            prop_assert_eq!(a.add(&b).evaluate_at(x), a.evaluate_at(x) + b.evaluate_at(x));
        }

        #[test]
        fn poly_eval_mul(a in small_poly(), b in small_poly(), x in -3i32..=3) {
            let x = f64::from(x);
            prop_assert_eq!(a.multiply(&b).evaluate_at(x), a.evaluate_at(x) * b.evaluate_at(x));
        }

        // Calculus

        #[test]
        fn integrate_then_derive_recovers(a in small_poly()) {
            let back = a.integrate().derive();
            prop_assert_eq!(back.degree(), a.degree());
            for (x, y) in back.coeffs().iter().zip(a.coeffs()) {
                prop_assert!((x - y).abs() <= 1e-12 * y.abs().max(1.0));
            }
        }

        #[test]
        fn derivative_is_linear(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b).derive(), a.derive().add(&b.derive()));
        }

        #[test]
        fn inner_product_symmetric(a in small_poly(), b in small_poly()) {
            let ab = a.inner_product(&b);
            let ba = b.inner_product(&a);
            prop_assert!((ab - ba).abs() <= 1e-9 * ab.abs().max(1.0));
        }

        #[test]
        fn self_inner_product_nonnegative(a in small_poly()) {
            prop_assert!(a.inner_product(&a) >= -1e-9);
        }
    }
}
