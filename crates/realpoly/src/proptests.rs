//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use crate::dense::Polynomial;
    use crate::error::PolyError;
    use crate::settings::Tolerance;

    // Strategy for generating moderate real coefficients
    fn small_coeff() -> impl Strategy<Value = f64> {
        -100.0f64..100.0f64
    }

    // Strategy for generating small polynomials (degree 0-5)
    fn small_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec(small_coeff(), 1..=6)
            .prop_map(|c| Polynomial::new(&c).unwrap())
    }

    // Strategy for polynomials whose leading coefficient is far from zero
    fn leading_poly() -> impl Strategy<Value = Polynomial> {
        (
            proptest::collection::vec(small_coeff(), 0..=5),
            prop_oneof![-100.0f64..-1.0, 1.0f64..100.0],
        )
            .prop_map(|(mut c, lead)| {
                c.push(lead);
                Polynomial::new(&c).unwrap()
            })
    }

    fn tight() -> Tolerance {
        Tolerance::new(1e-9).unwrap()
    }

    fn hash_of(p: &Polynomial) -> u64 {
        let mut hasher = DefaultHasher::new();
        p.hash(&mut hasher);
        hasher.finish()
    }

    proptest! {
        // Construction and access

        #[test]
        fn coefficients_round_trip(c in proptest::collection::vec(small_coeff(), 1..=8)) {
            let p = Polynomial::new(&c).unwrap();
            let exported = p.coefficients();
            prop_assert_eq!(&exported, &c);
            prop_assert_ne!(exported.as_ptr(), p.as_slice().as_ptr());
            prop_assert_eq!(p.degree(), c.len() - 1);
        }

        #[test]
        fn get_respects_bounds(p in small_poly(), index in -10isize..16isize) {
            match usize::try_from(index) {
                Ok(i) if i <= p.degree() => {
                    prop_assert_eq!(p.get(index).unwrap(), p.as_slice()[i]);
                }
                _ => {
                    let is_out_of_range = matches!(
                        p.get(index),
                        Err(PolyError::IndexOutOfRange { .. })
                    );
                    prop_assert!(is_out_of_range);
                }
            }
        }

        // Arithmetic

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert!(a.add(&b).approx_eq(&b.add(&a), tight()));
        }

        #[test]
        fn poly_add_length(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b).len(), a.len().max(b.len()));
        }

        #[test]
        fn poly_sub_round_trip(a in small_poly(), b in small_poly()) {
            // (a - b) + b keeps the longer length, so only compare when b fits in a
            let back = a.sub(&b).add(&b);
            if b.len() <= a.len() {
                prop_assert!(back.approx_eq(&a, tight()));
            } else {
                prop_assert_eq!(back.len(), b.len());
            }
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert!(a.mul(&b).approx_eq(&b.mul(&a), Tolerance::new(1e-7).unwrap()));
        }

        #[test]
        fn poly_mul_degree(a in leading_poly(), b in leading_poly()) {
            // deg(a * b) = deg(a) + deg(b) when the leading terms do not cancel
            let product = a.mul(&b);
            prop_assert_eq!(product.degree(), a.degree() + b.degree());
            prop_assert!(product.as_slice()[product.degree()] != 0.0);
        }

        #[test]
        fn poly_eval_mul(a in small_poly(), b in small_poly(), x in -2.0f64..2.0f64) {
            // (a * b)(x) = a(x) * b(x)
            let lhs = a.mul(&b).calculate_value(x);
            let rhs = a.calculate_value(x) * b.calculate_value(x);
            prop_assert!((lhs - rhs).abs() <= 1e-6 * (1.0 + rhs.abs()));
        }

        // Equality

        #[test]
        fn equality_is_tolerance_sensitive(v in small_coeff(), t in 1e-6f64..1e-2f64) {
            let tolerance = Tolerance::new(t).unwrap();
            let p = Polynomial::constant(v);
            prop_assert!(p.approx_eq(&Polynomial::constant(v + 0.5 * t), tolerance));
            prop_assert!(!p.approx_eq(&Polynomial::constant(v + 2.0 * t), tolerance));
        }

        #[test]
        fn equality_is_reflexive_and_symmetric(a in small_poly(), b in small_poly()) {
            prop_assert!(a == a.clone());
            prop_assert_eq!(a == b, b == a);
            prop_assert_eq!(a != b, !(a == b));
        }

        #[test]
        fn equal_polynomials_hash_equal(a in small_poly(), jitter in -1e-10f64..1e-10f64) {
            let shifted: Vec<f64> = a.as_slice().iter().map(|c| c + jitter).collect();
            let b = Polynomial::new(&shifted).unwrap();
            prop_assert!(a.approx_eq(&b, tight()));
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }
    }
}
