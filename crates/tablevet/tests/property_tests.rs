//! Property-based tests for the rule evaluators.
//!
//! These verify the check semantics against independently computed
//! predicates: row bounds hold iff the count falls inside
//! `[expected*(1-margin), expected*(1+margin)]`, uniqueness fails iff a
//! projected tuple repeats, and the null check fails iff some selected
//! column has zero non-null values.

use std::collections::HashSet;

use proptest::prelude::*;

use tablevet::checks::{check_max_rows, check_min_rows, check_unique_rows, no_null_cols};
use tablevet::{ColumnCheck, DataTable, RowExpectation};

fn table_with_rows(n: usize) -> DataTable {
    DataTable::new(
        vec!["id".to_string()],
        (0..n).map(|i| vec![i.to_string()]).collect(),
    )
}

/// Values drawn from a mix of null spellings and real data.
fn cell_value() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("NA".to_string()),
        Just(".".to_string()),
        "[a-z0-9]{1,6}",
    ]
}

proptest! {
    /// Min/max checks agree with the closed-form bound predicate.
    #[test]
    fn row_bounds_match_predicate(
        actual in 0usize..400,
        expected in 0usize..400,
        margin in 0.0f64..0.5,
    ) {
        let table = table_with_rows(actual);

        let min_ok = check_min_rows(&table, RowExpectation::Count(expected), margin, "t").is_ok();
        let max_ok = check_max_rows(&table, RowExpectation::Count(expected), margin, "t").is_ok();

        prop_assert_eq!(min_ok, !((actual as f64) < expected as f64 * (1.0 - margin)));
        prop_assert_eq!(max_ok, !((actual as f64) > expected as f64 * (1.0 + margin)));
    }

    /// An unconstrained expectation passes for any table size and margin.
    #[test]
    fn unconstrained_always_passes(actual in 0usize..400, margin in 0.0f64..0.5) {
        let table = table_with_rows(actual);
        prop_assert!(check_min_rows(&table, RowExpectation::Unconstrained, margin, "t").is_ok());
        prop_assert!(check_max_rows(&table, RowExpectation::Unconstrained, margin, "t").is_ok());
    }

    /// Uniqueness fails iff the projection contains a repeated tuple.
    #[test]
    fn unique_rows_matches_set_semantics(
        rows in prop::collection::vec(("[ab]{1,2}", "[xy]{1,2}", "[0-9]{1,3}"), 1..50)
    ) {
        let table = DataTable::new(
            vec!["k1".to_string(), "k2".to_string(), "payload".to_string()],
            rows.iter()
                .map(|(a, b, c)| vec![a.clone(), b.clone(), c.clone()])
                .collect(),
        );

        let mut seen = HashSet::new();
        let has_dup = rows.iter().any(|(a, b, _)| !seen.insert((a.clone(), b.clone())));

        let result = check_unique_rows(&table, &["k1", "k2"], "t");
        prop_assert_eq!(result.is_err(), has_dup);
    }

    /// The null check fails iff every value in the column is a null spelling.
    #[test]
    fn no_null_cols_matches_null_scan(
        values in prop::collection::vec(cell_value(), 1..60)
    ) {
        let table = DataTable::new(
            vec!["col".to_string()],
            values.iter().map(|v| vec![v.clone()]).collect(),
        );

        let all_null = values.iter().all(|v| DataTable::is_null_value(v));
        let result = no_null_cols(&table, ColumnCheck::All, "t");
        prop_assert_eq!(result.is_err(), all_null);
    }

    /// Evaluators never panic on arbitrary ragged input.
    #[test]
    fn checks_never_panic(
        rows in prop::collection::vec(prop::collection::vec("[a-z]{0,3}", 0..4), 0..20)
    ) {
        let table = DataTable::new(
            vec!["a".to_string(), "b".to_string()],
            rows,
        );

        let _ = no_null_cols(&table, ColumnCheck::All, "t");
        let _ = check_min_rows(&table, RowExpectation::Count(5), 0.1, "t");
        let _ = check_max_rows(&table, RowExpectation::Count(5), 0.1, "t");
        let _ = check_unique_rows(&table, &["a", "b"], "t");
    }
}
