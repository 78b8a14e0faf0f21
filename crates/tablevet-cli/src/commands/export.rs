//! Export-metadata command - write the dataset catalog as YAML.

use std::path::PathBuf;

use colored::Colorize;
use tablevet::CatalogMetadata;

pub fn run(output: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(path = %output.display(), "exporting catalog metadata");

    let doc = CatalogMetadata::from_catalog();
    doc.write_yaml(&output)?;

    println!(
        "{} {} dataset(s) to {}",
        "Exported".green().bold(),
        doc.datasets.len(),
        output.display()
    );

    Ok(())
}
