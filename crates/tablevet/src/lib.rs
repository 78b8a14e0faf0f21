//! tablevet: data-quality vetting for post-ETL tabular outputs.
//!
//! tablevet checks the tables an ETL pipeline materializes against a static
//! expected-value table: no entirely-null columns, row counts within a
//! margin of known-good counts, and uniqueness over natural-key columns.
//! It also exports the dataset catalog as a YAML metadata document.
//!
//! # Core Principles
//!
//! - **Fail fast**: each check raises on the first violated invariant
//! - **Skips are not failures**: a missing data source or an unsupported
//!   rollup frequency skips a check rather than failing it
//! - **Static expectations**: expected values live in one table in code,
//!   keyed by dataset and aggregation frequency
//!
//! # Example
//!
//! ```no_run
//! use tablevet::{DirectoryStore, Frequency, Harness};
//!
//! let store = DirectoryStore::new("/var/lib/etl/outputs");
//! let report = Harness::new(&store, Frequency::Annual).run().unwrap();
//!
//! println!("passed: {}", report.passed());
//! println!("failed: {}", report.failed());
//! ```

pub mod catalog;
pub mod checks;
pub mod error;
pub mod expectations;
pub mod harness;
pub mod input;
pub mod metadata;
pub mod store;

pub use catalog::{Dataset, Frequency};
pub use checks::{ColumnCheck, RowExpectation};
pub use error::{Result, TablevetError, ValidationError};
pub use expectations::{DatasetExpectations, FrequencyTable, EXPECTATIONS};
pub use harness::{CheckKind, CheckResult, Harness, HarnessReport, Outcome, SkipReason};
pub use input::{DataTable, Parser, SourceMetadata};
pub use metadata::{CatalogMetadata, DatasetMetadata};
pub use store::{DirectoryStore, MemoryStore, OutputStore};
