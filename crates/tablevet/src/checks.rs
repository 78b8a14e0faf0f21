//! Data-quality rule evaluators.
//!
//! Pure checks over a [`DataTable`]. Each evaluator is a fail-fast
//! assertion: it returns the first violated invariant as a
//! [`ValidationError`] and never aggregates partial failures. The row-count
//! checks hand the table reference back so calls can be chained.

use indexmap::IndexMap;

use crate::error::ValidationError;
use crate::input::DataTable;

/// Which columns a null-column check covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnCheck<'a> {
    /// Every column in the table.
    All,
    /// An explicit subset; each name must exist in the table.
    Subset(&'a [&'a str]),
}

/// Row-count expectation for a dataset at one aggregation frequency.
///
/// `Unconstrained` is an explicit "no bound" state; it is not the same as
/// the dataset being unsupported at a frequency, which the expectations
/// table expresses by omitting the entry entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowExpectation {
    /// Row count must fall within `expected * (1 ± margin)`.
    Count(usize),
    /// The dataset exists at this frequency but carries no row bound.
    Unconstrained,
}

/// Fail if any selected column is entirely null.
pub fn no_null_cols(
    table: &DataTable,
    cols: ColumnCheck<'_>,
    name: &str,
) -> Result<(), ValidationError> {
    let indices: Vec<(usize, &str)> = match cols {
        ColumnCheck::All => table
            .headers
            .iter()
            .enumerate()
            .map(|(i, h)| (i, h.as_str()))
            .collect(),
        ColumnCheck::Subset(subset) => {
            let mut indices = Vec::with_capacity(subset.len());
            for &col in subset {
                let idx = table.column_index(col).ok_or_else(|| {
                    ValidationError::MissingColumn {
                        table: name.to_string(),
                        column: col.to_string(),
                    }
                })?;
                indices.push((idx, col));
            }
            indices
        }
    };

    for (idx, col) in indices {
        if table.column_all_null(idx) {
            return Err(ValidationError::NullColumn {
                table: name.to_string(),
                column: col.to_string(),
            });
        }
    }

    Ok(())
}

/// Fail if the table has fewer rows than `expected * (1 - margin)`.
///
/// Returns the table unchanged so min and max checks can be chained.
pub fn check_min_rows<'t>(
    table: &'t DataTable,
    expected: RowExpectation,
    margin: f64,
    name: &str,
) -> Result<&'t DataTable, ValidationError> {
    if let RowExpectation::Count(expected) = expected {
        let minimum = (expected as f64 * (1.0 - margin)).ceil() as usize;
        let actual = table.row_count();
        if actual < minimum {
            return Err(ValidationError::TooFewRows {
                table: name.to_string(),
                actual,
                minimum,
                expected,
                margin,
            });
        }
    }
    Ok(table)
}

/// Fail if the table has more rows than `expected * (1 + margin)`.
pub fn check_max_rows<'t>(
    table: &'t DataTable,
    expected: RowExpectation,
    margin: f64,
    name: &str,
) -> Result<&'t DataTable, ValidationError> {
    if let RowExpectation::Count(expected) = expected {
        let maximum = (expected as f64 * (1.0 + margin)).floor() as usize;
        let actual = table.row_count();
        if actual > maximum {
            return Err(ValidationError::TooManyRows {
                table: name.to_string(),
                actual,
                maximum,
                expected,
                margin,
            });
        }
    }
    Ok(table)
}

/// Fail if any combination of values in `subset` appears more than once.
pub fn check_unique_rows(
    table: &DataTable,
    subset: &[&str],
    name: &str,
) -> Result<(), ValidationError> {
    let mut indices = Vec::with_capacity(subset.len());
    for &col in subset {
        let idx = table
            .column_index(col)
            .ok_or_else(|| ValidationError::MissingColumn {
                table: name.to_string(),
                column: col.to_string(),
            })?;
        indices.push(idx);
    }

    let mut seen: IndexMap<Vec<&str>, usize> = IndexMap::new();
    for row in &table.rows {
        let key: Vec<&str> = indices
            .iter()
            .map(|&i| row.get(i).map(|s| s.as_str()).unwrap_or(""))
            .collect();
        *seen.entry(key).or_insert(0) += 1;
    }

    let surplus: usize = seen.values().filter(|&&c| c > 1).map(|&c| c - 1).sum();
    if surplus > 0 {
        return Err(ValidationError::DuplicateRows {
            table: name.to_string(),
            subset: subset.iter().map(|s| s.to_string()).collect(),
            surplus,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> DataTable {
        DataTable::new(
            headers.iter().map(|s| s.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_no_null_cols_passes_on_clean_table() {
        let t = table(&["a", "b"], &[&["1", "x"], &["2", "y"]]);
        assert!(no_null_cols(&t, ColumnCheck::All, "t").is_ok());
    }

    #[test]
    fn test_no_null_cols_names_offending_column() {
        // One of three columns entirely null.
        let t = table(
            &["a", "b", "c"],
            &[&["1", "", "x"], &["2", "NA", "y"], &["3", ".", "z"]],
        );
        let err = no_null_cols(&t, ColumnCheck::All, "t").unwrap_err();
        assert_eq!(
            err,
            ValidationError::NullColumn {
                table: "t".to_string(),
                column: "b".to_string(),
            }
        );
    }

    #[test]
    fn test_no_null_cols_subset_ignores_other_columns() {
        let t = table(&["a", "b"], &[&["1", ""], &["2", ""]]);
        assert!(no_null_cols(&t, ColumnCheck::Subset(&["a"]), "t").is_ok());
        assert!(no_null_cols(&t, ColumnCheck::Subset(&["b"]), "t").is_err());
    }

    #[test]
    fn test_no_null_cols_unknown_column() {
        let t = table(&["a"], &[&["1"]]);
        let err = no_null_cols(&t, ColumnCheck::Subset(&["zzz"]), "t").unwrap_err();
        assert!(matches!(err, ValidationError::MissingColumn { .. }));
    }

    #[test]
    fn test_row_bounds_exact_match_passes() {
        let rows: Vec<Vec<String>> = (0..100).map(|i| vec![i.to_string()]).collect();
        let t = DataTable::new(vec!["a".to_string()], rows);

        let chained = check_min_rows(&t, RowExpectation::Count(100), 0.0, "t")
            .and_then(|t| check_max_rows(t, RowExpectation::Count(100), 0.0, "t"));
        assert!(chained.is_ok());
    }

    #[test]
    fn test_min_rows_fails_one_short() {
        let rows: Vec<Vec<String>> = (0..99).map(|i| vec![i.to_string()]).collect();
        let t = DataTable::new(vec!["a".to_string()], rows);

        let err = check_min_rows(&t, RowExpectation::Count(100), 0.0, "t").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::TooFewRows {
                actual: 99,
                expected: 100,
                ..
            }
        ));
        // But the max bound is still satisfied.
        assert!(check_max_rows(&t, RowExpectation::Count(100), 0.0, "t").is_ok());
    }

    #[test]
    fn test_max_rows_fails_one_over() {
        let rows: Vec<Vec<String>> = (0..101).map(|i| vec![i.to_string()]).collect();
        let t = DataTable::new(vec!["a".to_string()], rows);
        assert!(check_max_rows(&t, RowExpectation::Count(100), 0.0, "t").is_err());
        assert!(check_min_rows(&t, RowExpectation::Count(100), 0.0, "t").is_ok());
    }

    #[test]
    fn test_margin_widens_bounds() {
        let rows: Vec<Vec<String>> = (0..95).map(|i| vec![i.to_string()]).collect();
        let t = DataTable::new(vec!["a".to_string()], rows);
        assert!(check_min_rows(&t, RowExpectation::Count(100), 0.05, "t").is_ok());
        assert!(check_min_rows(&t, RowExpectation::Count(100), 0.04, "t").is_err());
    }

    #[test]
    fn test_unconstrained_always_passes() {
        let t = table(&["a"], &[&["1"]]);
        assert!(check_min_rows(&t, RowExpectation::Unconstrained, 0.0, "t").is_ok());
        assert!(check_max_rows(&t, RowExpectation::Unconstrained, 0.0, "t").is_ok());
    }

    #[test]
    fn test_unique_rows_duplicate_pair_fails() {
        let t = table(&["a", "b"], &[&["1", "2"], &["1", "2"]]);
        let err = check_unique_rows(&t, &["a", "b"], "t").unwrap_err();
        assert_eq!(
            err,
            ValidationError::DuplicateRows {
                table: "t".to_string(),
                subset: vec!["a".to_string(), "b".to_string()],
                surplus: 1,
            }
        );
    }

    #[test]
    fn test_unique_rows_distinct_on_subset_passes() {
        // Duplicated in column a alone, but unique over (a, b).
        let t = table(&["a", "b"], &[&["1", "2"], &["1", "3"]]);
        assert!(check_unique_rows(&t, &["a", "b"], "t").is_ok());
        assert!(check_unique_rows(&t, &["a"], "t").is_err());
    }

    #[test]
    fn test_unique_rows_counts_surplus() {
        let t = table(
            &["a"],
            &[&["x"], &["x"], &["x"], &["y"], &["y"], &["z"]],
        );
        let err = check_unique_rows(&t, &["a"], "t").unwrap_err();
        assert!(matches!(err, ValidationError::DuplicateRows { surplus: 3, .. }));
    }
}
