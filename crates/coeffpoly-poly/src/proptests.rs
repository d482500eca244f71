//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::dense::Polynomial;

    const TOLERANCE: f64 = 1e-9;

    // Strategy for generating small integer coefficients
    fn small_coeff() -> impl Strategy<Value = i64> {
        -100i64..100i64
    }

    // Strategy for generating small polynomials, zero polynomial included
    fn small_poly() -> impl Strategy<Value = Polynomial<i64>> {
        proptest::collection::vec(small_coeff(), 0..=5).prop_map(Polynomial::new)
    }

    // Strategy for generating small float polynomials
    fn float_poly() -> impl Strategy<Value = Polynomial<f64>> {
        proptest::collection::vec(-100.0f64..100.0f64, 0..=5).prop_map(Polynomial::new)
    }

    fn i32_poly() -> impl Strategy<Value = Polynomial<i32>> {
        proptest::collection::vec(-100i32..100i32, 0..=5).prop_map(Polynomial::new)
    }

    fn f32_poly() -> impl Strategy<Value = Polynomial<f32>> {
        proptest::collection::vec(-100.0f32..100.0f32, 0..=5).prop_map(Polynomial::new)
    }

    // Any i64 value, so sums and differences cross the integer bounds
    fn wide_poly() -> impl Strategy<Value = Polynomial<i64>> {
        proptest::collection::vec(any::<i64>(), 0..=5).prop_map(Polynomial::new)
    }

    proptest! {
        // Addition

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_add_identity(a in small_poly()) {
            let zero = Polynomial::zero();
            prop_assert_eq!(a.add(&zero), a.clone());
            prop_assert_eq!(zero.add(&a), a);
        }

        #[test]
        fn poly_add_length(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b).len(), a.len().max(b.len()));
            prop_assert_eq!(a.sub(&b).len(), a.len().max(b.len()));
        }

        // Subtraction

        #[test]
        fn poly_sub_then_add_inverse(a in small_poly(), b in small_poly()) {
            // Padding may lengthen the result, so compare against a padded a
            let restored = a.sub(&b).add(&b);
            let padded = a.add(&Polynomial::new(vec![0; b.len()]));
            prop_assert_eq!(restored, padded);
        }

        #[test]
        fn poly_sub_then_add_inverse_float(a in float_poly(), b in float_poly()) {
            let restored = a.sub(&b).add(&b);
            let padded = a.add(&Polynomial::new(vec![0.0; b.len()]));
            prop_assert!(restored.approx_eq(&padded, TOLERANCE));
        }

        #[test]
        fn poly_sub_antisymmetric(a in small_poly(), b in small_poly()) {
            let forward = a.sub(&b);
            let backward = b.sub(&a);
            for (x, y) in forward.iter().zip(&backward) {
                prop_assert_eq!(*x, -*y);
            }
        }

        // Multiplication

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_mul_length(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b).len(), a.degree() + b.degree() + 1);
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert!(left.approx_eq(&right, TOLERANCE), "{:?} != {:?}", left, right);
        }

        #[test]
        fn poly_mul_zero_is_all_zeros(a in small_poly()) {
            let product = a.mul(&Polynomial::zero());
            prop_assert_eq!(product.len(), a.degree() + 1);
            prop_assert!(product.iter().all(|c| *c == 0.0));
        }

        // Differentiation

        #[test]
        fn poly_derivative_length(a in small_poly()) {
            let expected = if a.is_empty() { 1 } else { a.len() - 1 };
            prop_assert_eq!(a.derivative().len(), expected);
        }

        #[test]
        fn poly_derivative_linear(a in small_poly(), b in small_poly()) {
            // (a + b)' = a' + b' whenever neither operand is the zero polynomial
            prop_assume!(!a.is_empty() && !b.is_empty());
            let left = a.add(&b).derivative();
            let right = a.derivative().add(&b.derivative());
            prop_assert!(left.approx_eq(&right, TOLERANCE));
        }

        #[test]
        fn poly_value_at_matches_coefficients(a in small_poly(), index in 0usize..8) {
            match a.coefficients().get(index) {
                Some(c) => prop_assert_eq!(a.value_at(index), Ok(*c)),
                None => prop_assert!(a.value_at(index).is_err()),
            }
        }

        #[test]
        fn poly_iter_restartable(a in small_poly()) {
            let first: Vec<i64> = a.iter().copied().collect();
            let second: Vec<i64> = a.iter().copied().collect();
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first.as_slice(), a.coefficients());
        }

        #[test]
        fn poly_sub_then_add_inverse_wrapping(a in wide_poly(), b in wide_poly()) {
            let restored = a.sub(&b).add(&b);
            let padded = a.add(&Polynomial::new(vec![0; b.len()]));
            prop_assert_eq!(restored, padded);
        }

        // Float coefficients

        #[test]
        fn poly_add_commutative_float(a in float_poly(), b in float_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_add_length_float(a in float_poly(), b in float_poly()) {
            prop_assert_eq!(a.add(&b).len(), a.len().max(b.len()));
            prop_assert_eq!(a.sub(&b).len(), a.len().max(b.len()));
        }

        #[test]
        fn poly_mul_commutative_float(a in float_poly(), b in float_poly()) {
            prop_assert!(a.mul(&b).approx_eq(&b.mul(&a), TOLERANCE));
        }

        #[test]
        fn poly_distributive_float(a in float_poly(), b in float_poly(), c in float_poly()) {
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert!(left.approx_eq(&right, 1e-6), "{:?} != {:?}", left, right);
        }

        // Narrower coefficient types

        #[test]
        fn poly_i32_ops(a in i32_poly(), b in i32_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
            prop_assert_eq!(a.sub(&b).add(&b).len(), a.len().max(b.len()));
            prop_assert_eq!(a.mul(&b).len(), a.degree() + b.degree() + 1);
            prop_assert!(a.mul(&b).approx_eq(&b.mul(&a), TOLERANCE));
        }

        #[test]
        fn poly_f32_ops(a in f32_poly(), b in f32_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
            prop_assert_eq!(a.add(&b).len(), a.len().max(b.len()));
            prop_assert_eq!(a.mul(&b).len(), a.degree() + b.degree() + 1);
            let expected = if a.is_empty() { 1 } else { a.len() - 1 };
            prop_assert_eq!(a.derivative().len(), expected);
        }
    }
}
