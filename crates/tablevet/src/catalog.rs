//! The fixed catalog of dataset identifiers and aggregation frequencies.
//!
//! Every output table the harness knows about is a [`Dataset`] variant.
//! Accessors are dispatched through the enum rather than looked up by name
//! at runtime, so an unknown dataset is a compile-time impossibility inside
//! the library and a parse error at the CLI boundary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TablevetError;

/// A named output table produced by the upstream ETL pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dataset {
    BoilerFuel,
    BoilerGeneratorAssn,
    FuelReceiptsCosts,
    Generation,
    GenerationFuel,
    Generators,
    Ownership,
    Plants,
    PlantUtilityAssn,
    Utilities,
}

impl Dataset {
    /// Every dataset in the catalog, in stable order.
    pub const ALL: &'static [Dataset] = &[
        Dataset::BoilerFuel,
        Dataset::BoilerGeneratorAssn,
        Dataset::FuelReceiptsCosts,
        Dataset::Generation,
        Dataset::GenerationFuel,
        Dataset::Generators,
        Dataset::Ownership,
        Dataset::Plants,
        Dataset::PlantUtilityAssn,
        Dataset::Utilities,
    ];

    /// Stable identifier, doubles as the output file stem.
    pub fn name(&self) -> &'static str {
        match self {
            Dataset::BoilerFuel => "boiler_fuel",
            Dataset::BoilerGeneratorAssn => "boiler_generator_assn",
            Dataset::FuelReceiptsCosts => "fuel_receipts_costs",
            Dataset::Generation => "generation",
            Dataset::GenerationFuel => "generation_fuel",
            Dataset::Generators => "generators",
            Dataset::Ownership => "ownership",
            Dataset::Plants => "plants",
            Dataset::PlantUtilityAssn => "plant_utility_assn",
            Dataset::Utilities => "utilities",
        }
    }

    /// Human-readable title for the metadata document.
    pub fn title(&self) -> &'static str {
        match self {
            Dataset::BoilerFuel => "Boiler Fuel Consumption",
            Dataset::BoilerGeneratorAssn => "Boiler-Generator Associations",
            Dataset::FuelReceiptsCosts => "Fuel Receipts and Costs",
            Dataset::Generation => "Net Generation",
            Dataset::GenerationFuel => "Generation Fuel Consumption",
            Dataset::Generators => "Generators",
            Dataset::Ownership => "Generator Ownership",
            Dataset::Plants => "Plants",
            Dataset::PlantUtilityAssn => "Plant-Utility Associations",
            Dataset::Utilities => "Utilities",
        }
    }

    /// One-line description for the metadata document.
    pub fn description(&self) -> &'static str {
        match self {
            Dataset::BoilerFuel => {
                "Fuel consumed per boiler, by report date and energy source."
            }
            Dataset::BoilerGeneratorAssn => {
                "Mapping between boilers and the generators they serve."
            }
            Dataset::FuelReceiptsCosts => {
                "Fuel deliveries to plants with quantities and delivered costs."
            }
            Dataset::Generation => "Net generation reported per generator.",
            Dataset::GenerationFuel => {
                "Fuel consumed and generation produced per plant and prime mover."
            }
            Dataset::Generators => "Generator-level attributes and capacities.",
            Dataset::Ownership => "Ownership shares of generators by owning utility.",
            Dataset::Plants => "Plant-level attributes and locations.",
            Dataset::PlantUtilityAssn => {
                "Mapping between plants and their operating utilities."
            }
            Dataset::Utilities => "Utility-level attributes and identifiers.",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dataset {
    type Err = TablevetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dataset::ALL
            .iter()
            .copied()
            .find(|d| d.name() == s)
            .ok_or_else(|| TablevetError::UnknownDataset(s.to_string()))
    }
}

/// How source records were rolled up before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    /// No aggregation; records as reported.
    Raw,
    /// Rolled up to month start.
    Monthly,
    /// Rolled up to year start.
    Annual,
}

impl Frequency {
    pub const ALL: &'static [Frequency] =
        &[Frequency::Raw, Frequency::Monthly, Frequency::Annual];

    pub fn name(&self) -> &'static str {
        match self {
            Frequency::Raw => "raw",
            Frequency::Monthly => "monthly",
            Frequency::Annual => "annual",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Frequency {
    type Err = TablevetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "raw" => Ok(Frequency::Raw),
            // "MS"/"AS" are the rollup offsets used by the upstream pipeline.
            "monthly" | "ms" => Ok(Frequency::Monthly),
            "annual" | "as" => Ok(Frequency::Annual),
            _ => Err(TablevetError::UnknownFrequency(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_round_trip() {
        for &dataset in Dataset::ALL {
            assert_eq!(dataset.name().parse::<Dataset>().unwrap(), dataset);
        }
    }

    #[test]
    fn test_unknown_dataset() {
        assert!("no_such_table".parse::<Dataset>().is_err());
    }

    #[test]
    fn test_frequency_aliases() {
        assert_eq!("MS".parse::<Frequency>().unwrap(), Frequency::Monthly);
        assert_eq!("AS".parse::<Frequency>().unwrap(), Frequency::Annual);
        assert_eq!("raw".parse::<Frequency>().unwrap(), Frequency::Raw);
        assert!("weekly".parse::<Frequency>().is_err());
    }
}
