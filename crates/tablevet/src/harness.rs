//! Generic check driver over the expected-value table.
//!
//! One-shot batch execution: every dataset in the expectations table gets
//! its applicable checks evaluated against the output store, producing a
//! [`HarnessReport`]. Skipping is explicit and distinct from failure: a
//! store that is not live, or a frequency the dataset is not materialized
//! at, yields [`Outcome::Skipped`] rather than an error.

use serde::Serialize;

use crate::catalog::{Dataset, Frequency};
use crate::checks;
use crate::error::{Result, ValidationError};
use crate::expectations::{DatasetExpectations, EXPECTATIONS};
use crate::store::OutputStore;

/// The checks the harness knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    NoNullCols,
    RowCountBounds,
    UniqueRows,
}

/// Why a check was not evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// No live data source is available.
    NoLiveStore,
    /// The dataset is not materialized at the requested frequency.
    UnsupportedFrequency,
}

/// Result of one check on one dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Passed,
    Skipped { reason: SkipReason },
    Failed { error: ValidationError },
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub dataset: Dataset,
    pub check: CheckKind,
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Everything one harness run produced.
#[derive(Debug, Clone, Serialize)]
pub struct HarnessReport {
    pub frequency: Frequency,
    pub results: Vec<CheckResult>,
}

impl HarnessReport {
    pub fn passed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Passed))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Skipped { .. }))
    }

    /// True when nothing failed (skips do not count against cleanliness).
    pub fn is_clean(&self) -> bool {
        self.failed() == 0
    }

    /// The failed results, in run order.
    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.results
            .iter()
            .filter(|r| matches!(r.outcome, Outcome::Failed { .. }))
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.results.iter().filter(|r| pred(&r.outcome)).count()
    }
}

/// Runs the expected-value table against an output store.
pub struct Harness<'a, S: OutputStore> {
    store: &'a S,
    frequency: Frequency,
    expectations: &'a [DatasetExpectations],
}

impl<'a, S: OutputStore> Harness<'a, S> {
    /// Harness over the shipped expectations.
    pub fn new(store: &'a S, frequency: Frequency) -> Self {
        Self::with_expectations(store, frequency, EXPECTATIONS)
    }

    /// Harness over a caller-supplied expectations table.
    pub fn with_expectations(
        store: &'a S,
        frequency: Frequency,
        expectations: &'a [DatasetExpectations],
    ) -> Self {
        Self {
            store,
            frequency,
            expectations,
        }
    }

    /// Run every applicable check. Store fetch errors propagate as hard
    /// errors; violated invariants are recorded per check.
    pub fn run(&self) -> Result<HarnessReport> {
        let mut results = Vec::new();

        if !self.store.live() {
            tracing::warn!(
                frequency = %self.frequency,
                "no live data source; skipping all validations"
            );
            for exp in self.expectations {
                self.push_skipped(&mut results, exp, SkipReason::NoLiveStore);
            }
            return Ok(HarnessReport {
                frequency: self.frequency,
                results,
            });
        }

        for exp in self.expectations {
            self.run_dataset(&mut results, exp)?;
        }

        let report = HarnessReport {
            frequency: self.frequency,
            results,
        };
        tracing::info!(
            frequency = %self.frequency,
            passed = report.passed(),
            failed = report.failed(),
            skipped = report.skipped(),
            "validation run complete"
        );
        Ok(report)
    }

    fn run_dataset(
        &self,
        results: &mut Vec<CheckResult>,
        exp: &DatasetExpectations,
    ) -> Result<()> {
        let Some(&row_expectation) = exp.rows.get(self.frequency) else {
            tracing::debug!(
                dataset = %exp.dataset,
                frequency = %self.frequency,
                "dataset not materialized at this frequency; skipping"
            );
            self.push_skipped(results, exp, SkipReason::UnsupportedFrequency);
            return Ok(());
        };

        let table = self.store.fetch(exp.dataset, self.frequency)?;
        let name = exp.dataset.name();

        results.push(CheckResult {
            dataset: exp.dataset,
            check: CheckKind::NoNullCols,
            outcome: outcome(checks::no_null_cols(&table, exp.null_cols, name)),
        });

        let bounds = checks::check_min_rows(&table, row_expectation, exp.margin, name)
            .and_then(|t| checks::check_max_rows(t, row_expectation, exp.margin, name))
            .map(|_| ());
        results.push(CheckResult {
            dataset: exp.dataset,
            check: CheckKind::RowCountBounds,
            outcome: outcome(bounds),
        });

        if let Some(subset) = exp.unique_subset {
            results.push(CheckResult {
                dataset: exp.dataset,
                check: CheckKind::UniqueRows,
                outcome: outcome(checks::check_unique_rows(&table, subset, name)),
            });
        }

        Ok(())
    }

    /// Record a skip for every check that would have run.
    fn push_skipped(
        &self,
        results: &mut Vec<CheckResult>,
        exp: &DatasetExpectations,
        reason: SkipReason,
    ) {
        let mut kinds = vec![CheckKind::NoNullCols, CheckKind::RowCountBounds];
        if exp.unique_subset.is_some() {
            kinds.push(CheckKind::UniqueRows);
        }
        for check in kinds {
            results.push(CheckResult {
                dataset: exp.dataset,
                check,
                outcome: Outcome::Skipped { reason },
            });
        }
    }
}

fn outcome(result: std::result::Result<(), ValidationError>) -> Outcome {
    match result {
        Ok(()) => Outcome::Passed,
        Err(error) => {
            tracing::error!(%error, "check failed");
            Outcome::Failed { error }
        }
    }
}
