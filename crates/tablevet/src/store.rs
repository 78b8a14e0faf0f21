//! Access to materialized ETL outputs.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::catalog::{Dataset, Frequency};
use crate::error::{Result, TablevetError};
use crate::input::{DataTable, Parser};

/// A source of named Tabular Results.
///
/// `live` gates whether validation runs at all: a store that is not live
/// causes every check to be skipped rather than evaluated.
pub trait OutputStore {
    /// Whether a materialized data source is available.
    fn live(&self) -> bool;

    /// Fetch the output table for a dataset at the given rollup.
    fn fetch(&self, dataset: Dataset, frequency: Frequency) -> Result<DataTable>;
}

/// Reads outputs from `<root>/<frequency>/<dataset>.csv`.
pub struct DirectoryStore {
    root: PathBuf,
    parser: Parser,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            parser: Parser::new(),
        }
    }

    /// Path a dataset's output file would live at.
    pub fn path_for(&self, dataset: Dataset, frequency: Frequency) -> PathBuf {
        self.root
            .join(frequency.name())
            .join(format!("{}.csv", dataset.name()))
    }
}

impl OutputStore for DirectoryStore {
    fn live(&self) -> bool {
        self.root.is_dir()
    }

    fn fetch(&self, dataset: Dataset, frequency: Frequency) -> Result<DataTable> {
        let path = self.path_for(dataset, frequency);
        let (table, meta) = self.parser.parse_file(&path)?;
        tracing::debug!(
            dataset = %dataset,
            frequency = %frequency,
            rows = meta.row_count,
            hash = %meta.hash,
            "loaded output table"
        );
        Ok(table)
    }
}

/// In-memory store, used by tests and embedding callers.
#[derive(Default)]
pub struct MemoryStore {
    tables: HashMap<(Dataset, Frequency), DataTable>,
    offline: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that reports itself as not live.
    pub fn offline() -> Self {
        Self {
            tables: HashMap::new(),
            offline: true,
        }
    }

    pub fn insert(&mut self, dataset: Dataset, frequency: Frequency, table: DataTable) {
        self.tables.insert((dataset, frequency), table);
    }
}

impl OutputStore for MemoryStore {
    fn live(&self) -> bool {
        !self.offline
    }

    fn fetch(&self, dataset: Dataset, frequency: Frequency) -> Result<DataTable> {
        self.tables
            .get(&(dataset, frequency))
            .cloned()
            .ok_or_else(|| {
                TablevetError::EmptyData(format!(
                    "no table for {dataset} at {frequency} rollup"
                ))
            })
    }
}
