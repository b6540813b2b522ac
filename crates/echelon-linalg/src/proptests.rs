//! Property-based tests for vectors, matrices and elimination.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use echelon_integers::Rational;

    use crate::{
        gauss_jordan, gauss_jordan_with, gauss_reduction, EliminationConfig, Matrix,
        PivotStrategy, Vector,
    };

    // Small integer matrices of up to 4x5
    fn int_rows(max_rows: usize, max_cols: usize, bound: i64) -> impl Strategy<Value = Vec<Vec<i64>>> {
        (1..=max_rows, 1..=max_cols).prop_flat_map(move |(r, c)| {
            prop::collection::vec(prop::collection::vec(-bound..=bound, c), r)
        })
    }

    fn rational_matrix() -> impl Strategy<Value = Matrix<Rational>> {
        int_rows(4, 5, 9).prop_map(|rows| Matrix::from_int_rows(&rows).unwrap())
    }

    fn integer_matrix() -> impl Strategy<Value = Matrix<i64>> {
        int_rows(3, 4, 5).prop_map(|rows| Matrix::from_int_rows(&rows).unwrap())
    }

    proptest! {
        #[test]
        fn simplify_leaves_unit_gcd(xs in prop::collection::vec(-50i64..=50, 1..6)) {
            let v: Vector<i64> = Vector::new(xs.clone());
            let s = v.simplified();

            prop_assert_eq!(v.as_slice(), xs.as_slice());
            if !s.is_zero() {
                prop_assert_eq!(s.bcd(), 1);
            }
        }

        #[test]
        fn reduction_is_row_echelon(m in rational_matrix()) {
            let before = m.clone();
            let r = gauss_reduction(&m).unwrap();

            prop_assert!(r.is_row_echelon());
            prop_assert_eq!(r.dims(), m.dims());
            prop_assert_eq!(m, before);
        }

        #[test]
        fn integer_reduction_is_row_echelon(m in integer_matrix()) {
            let r = gauss_reduction(&m).unwrap();
            prop_assert!(r.is_row_echelon());
        }

        #[test]
        fn jordan_is_reduced(m in rational_matrix()) {
            let r = gauss_jordan(&m).unwrap();
            prop_assert!(r.is_reduced_row_echelon());
        }

        #[test]
        fn jordan_after_reduction_is_idempotent(m in rational_matrix()) {
            let direct = gauss_jordan(&m).unwrap();
            let staged = gauss_jordan(&gauss_reduction(&m).unwrap()).unwrap();
            prop_assert_eq!(&direct, &staged);
            prop_assert_eq!(gauss_jordan(&direct).unwrap(), direct);
        }

        #[test]
        fn pivot_strategies_agree(m in rational_matrix()) {
            let bezout = EliminationConfig::default().with_pivot_strategy(PivotStrategy::Bezout);
            prop_assert_eq!(
                gauss_jordan(&m).unwrap(),
                gauss_jordan_with(&m, &bezout).unwrap()
            );
        }

        #[test]
        fn transpose_is_involution(m in rational_matrix()) {
            prop_assert_eq!(m.transpose().transpose(), m);
        }

        #[test]
        fn identity_is_neutral(m in rational_matrix()) {
            let (rows, cols) = m.dims();
            prop_assert_eq!(Matrix::identity(rows).mat_mul(&m).unwrap(), m.clone());
            prop_assert_eq!(m.mat_mul(&Matrix::identity(cols)).unwrap(), m);
        }
    }
}
