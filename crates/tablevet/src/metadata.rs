//! YAML metadata document describing the dataset catalog.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{Dataset, Frequency};
use crate::error::{Result, TablevetError};
use crate::expectations::expectations_for;

/// Metadata for one catalog dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetMetadata {
    pub name: String,
    pub title: String,
    pub description: String,
    /// Frequencies the dataset is materialized at.
    pub frequencies: Vec<Frequency>,
    /// Natural-key columns, empty when the dataset has none.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub primary_key: Vec<String>,
}

/// The full metadata document, one entry per catalog dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogMetadata {
    pub generated_at: DateTime<Utc>,
    pub datasets: Vec<DatasetMetadata>,
}

impl CatalogMetadata {
    /// Build the document from the fixed catalog and the shipped
    /// expectations table.
    pub fn from_catalog() -> Self {
        let datasets = Dataset::ALL
            .iter()
            .map(|&dataset| {
                let (frequencies, primary_key) = match expectations_for(dataset) {
                    Some(exp) => (
                        exp.rows.supported(),
                        exp.unique_subset
                            .map(|s| s.iter().map(|c| c.to_string()).collect())
                            .unwrap_or_default(),
                    ),
                    None => (Frequency::ALL.to_vec(), Vec::new()),
                };
                DatasetMetadata {
                    name: dataset.name().to_string(),
                    title: dataset.title().to_string(),
                    description: dataset.description().to_string(),
                    frequencies,
                    primary_key,
                }
            })
            .collect();

        Self {
            generated_at: Utc::now(),
            datasets,
        }
    }

    /// Serialize the document as YAML to a writer.
    pub fn to_yaml<W: Write>(&self, writer: W) -> Result<()> {
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }

    /// Write the document as YAML to a file path.
    pub fn write_yaml(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| TablevetError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        self.to_yaml(file)?;
        tracing::info!(path = %path.display(), "wrote catalog metadata");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_entry_per_dataset() {
        let doc = CatalogMetadata::from_catalog();
        assert_eq!(doc.datasets.len(), Dataset::ALL.len());
        assert!(doc.datasets.iter().any(|d| d.name == "plants"));
    }

    #[test]
    fn test_yaml_round_trip() {
        let doc = CatalogMetadata::from_catalog();
        let mut buf = Vec::new();
        doc.to_yaml(&mut buf).unwrap();

        let parsed: CatalogMetadata = serde_yaml::from_slice(&buf).unwrap();
        assert_eq!(parsed.datasets.len(), doc.datasets.len());
        let plants = parsed.datasets.iter().find(|d| d.name == "plants").unwrap();
        assert_eq!(plants.primary_key, vec!["report_date", "plant_id"]);
    }

    #[test]
    fn test_frequency_limited_dataset_listed_correctly() {
        let doc = CatalogMetadata::from_catalog();
        let frc = doc
            .datasets
            .iter()
            .find(|d| d.name == "fuel_receipts_costs")
            .unwrap();
        assert_eq!(frc.frequencies, vec![Frequency::Monthly, Frequency::Annual]);
    }
}
