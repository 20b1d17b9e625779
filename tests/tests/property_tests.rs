//! Property tests across the public surface

use lesscanon::prelude::*;
use proptest::prelude::*;

fn small_matrix() -> impl Strategy<Value = Vec<Vec<u8>>> {
    (1usize..8, 1usize..12).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(prop::collection::vec(0u8..3, cols), rows)
    })
}

fn distinct_multisets() -> impl Strategy<Value = Vec<Vec<u8>>> {
    (1usize..8, 1usize..12)
        .prop_flat_map(|(rows, cols)| {
            prop::collection::vec(prop::collection::vec(0u8..127, cols), rows)
        })
        .prop_filter("row multisets must differ", |rows| {
            let mut keys: Vec<Vec<u8>> = rows
                .iter()
                .map(|r| {
                    let mut k = r.clone();
                    k.sort_unstable();
                    k
                })
                .collect();
            keys.sort();
            keys.windows(2).all(|w| w[0] != w[1])
        })
}

proptest! {
    #[test]
    fn column_modes_agree_bit_for_bit(rows in small_matrix()) {
        let original = InfoSetMatrix::from_rows(127, &rows).unwrap();
        let z = original.cols();

        let mut a = original.clone();
        let mut b = original.clone();
        let pa = sort_columns(&mut a, z, ColumnSortMode::TransposeBitonic, TiePolicy::ByIndex).unwrap();
        let pb = sort_columns(&mut b, z, ColumnSortMode::Quicksort, TiePolicy::ByIndex).unwrap();
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(pa, pb);
    }

    #[test]
    fn canonical_form_is_idempotent(rows in distinct_multisets()) {
        let config = CanonConfig::secret(127);
        let mut once = InfoSetMatrix::from_rows(127, &rows).unwrap();
        let n = once.rows();
        canonical_form(&mut once, n, &config).unwrap();

        let mut twice = once.clone();
        let form = canonical_form(&mut twice, n, &config).unwrap();
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(form.row_permutation, Permutation::identity(n));
        prop_assert_eq!(form.column_permutation, Permutation::identity(twice.cols()));
    }

    #[test]
    fn sorted_rows_are_ordered(rows in small_matrix()) {
        let mut m = InfoSetMatrix::from_rows(127, &rows).unwrap();
        let n = m.rows();
        let perm = sort_rows(&mut m, n, TiePolicy::ByIndex).unwrap();
        prop_assert!(perm.is_valid());
        let sorted = m.to_rows();
        prop_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
        for (i, &src) in perm.iter().enumerate() {
            prop_assert_eq!(&sorted[i], &rows[src]);
        }
    }
}
