//! Validate command - run the harness and report outcomes.

use std::path::PathBuf;

use colored::Colorize;
use tablevet::{
    DirectoryStore, Frequency, Harness, HarnessReport, Outcome, OutputStore, SkipReason,
};

pub fn run(
    data_dir: PathBuf,
    frequency: &str,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let frequency: Frequency = frequency.parse()?;
    let store = DirectoryStore::new(&data_dir);

    if !store.live() {
        println!(
            "{} output directory {} does not exist; all validations skipped",
            "Notice:".yellow().bold(),
            data_dir.display()
        );
    }

    let report = Harness::new(&store, frequency).run()?;

    if json_output {
        let summary = serde_json::json!({
            "frequency": report.frequency,
            "passed": report.passed(),
            "failed": report.failed(),
            "skipped": report.skipped(),
            "results": report.results,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_report(&report);
    }

    if report.is_clean() {
        Ok(())
    } else {
        Err(format!("{} check(s) failed", report.failed()).into())
    }
}

fn print_report(report: &HarnessReport) {
    println!(
        "{} {} rollup",
        "Validation report for".cyan().bold(),
        report.frequency.name().white()
    );
    println!();

    for result in &report.results {
        let label = format!("{} / {:?}", result.dataset, result.check);
        match &result.outcome {
            Outcome::Passed => {
                println!("  {} {}", "PASS".green(), label);
            }
            Outcome::Skipped { reason } => {
                let why = match reason {
                    SkipReason::NoLiveStore => "no live data source",
                    SkipReason::UnsupportedFrequency => "frequency not materialized",
                };
                println!("  {} {} ({})", "SKIP".blue(), label, why);
            }
            Outcome::Failed { error } => {
                println!("  {} {}: {}", "FAIL".red().bold(), label, error);
            }
        }
    }

    println!();
    println!(
        "{} passed, {} failed, {} skipped",
        report.passed().to_string().green(),
        report.failed().to_string().red(),
        report.skipped().to_string().blue()
    );
}
