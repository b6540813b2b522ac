//! Property-based tests for integer utilities and rational arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{bcd, find_scalars, gcd, Rational};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::new(n, d).unwrap())
    }

    proptest! {
        // Set gcd

        #[test]
        fn bcd_divides_every_element(xs in prop::collection::vec(non_zero_int(), 1..8)) {
            let g = bcd(&xs);
            prop_assert!(g >= 1);
            for x in &xs {
                prop_assert_eq!(x % g, 0);
            }
        }

        #[test]
        fn bcd_is_greatest(xs in prop::collection::vec(non_zero_int(), 1..8)) {
            let g = bcd(&xs);
            let bound = xs.iter().map(|x| x.abs()).min().unwrap();
            for candidate in (g + 1)..=bound {
                prop_assert!(xs.iter().any(|x| x % candidate != 0));
            }
        }

        #[test]
        fn gcd_commutative(a in small_int(), b in small_int()) {
            prop_assert_eq!(gcd(a, b), gcd(b, a));
        }

        // Bezout coefficients

        #[test]
        fn find_scalars_yields_unit(x in -20i64..20, y in -20i64..20) {
            prop_assume!(x != 0 && y != 0 && gcd(x, y) == 1);

            let bz = find_scalars(x, y).unwrap();
            let forward = bz.a * x - bz.b * y == 1;
            let backward = bz.b * y - bz.a * x == 1;

            // Exactly one of the identities holds, and the flag names it.
            prop_assert!(forward != backward);
            prop_assert_eq!(backward, bz.flipped);
            prop_assert!(bz.a * x >= 0);
            prop_assert!(bz.b * y >= 0);
        }

        // Rational field axioms

        #[test]
        fn rational_add_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(a + b, b + a);
        }

        #[test]
        fn rational_mul_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(a * b, b * a);
        }

        #[test]
        fn rational_distributive(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(a * (b + c), a * b + a * c);
        }

        #[test]
        fn rational_additive_inverse(a in rational()) {
            prop_assert!((a + -a).is_zero());
            prop_assert!((a - a).is_zero());
        }

        #[test]
        fn rational_multiplicative_inverse(n in non_zero_int(), d in non_zero_int()) {
            let a = Rational::new(n, d).unwrap();
            let product = a * a.recip().unwrap();
            prop_assert!(product.is_one());
        }

        #[test]
        fn rational_denominator_positive(a in rational(), b in rational()) {
            prop_assert!(a.denom() > 0);
            prop_assert!((a - b).denom() > 0);
            if !b.is_zero() {
                prop_assert!(a.checked_div(&b).unwrap().denom() > 0);
            }
        }

        #[test]
        fn rational_simplify_preserves_value(a in rational()) {
            let s = a.simplify();
            prop_assert_eq!(s, a);
            prop_assert_eq!(gcd(s.numer(), s.denom()), 1);
        }

        #[test]
        fn rational_compare_matches_float(a in rational(), b in rational()) {
            let sign = a.compare(&b).signum();
            let expected = if a.to_f64() < b.to_f64() {
                -1
            } else if a.to_f64() > b.to_f64() {
                1
            } else {
                0
            };
            prop_assert_eq!(sign, expected);
        }
    }
}
