use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueHint};
use sensor_normalize::{normalize_file, AliasCatalog, NormalizeOptions};

#[derive(Parser, Debug)]
#[command(author, version, about = "Normalize a sensor log into the canonical flight schema", long_about = None)]
struct Cli {
    /// Sensor log to normalize (CSV, or TSV by extension)
    #[arg(value_hint = ValueHint::FilePath)]
    input: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let report = normalize_file(&cli.input, &AliasCatalog::builtin(), &NormalizeOptions::default())
        .with_context(|| format!("normalizing {}", cli.input.display()))?;

    if !report.empty_columns.is_empty() {
        let names: Vec<&str> = report.empty_columns.iter().map(|f| f.name()).collect();
        log::warn!("Output columns with no data: {}", names.join(", "));
    }

    println!(
        "{}",
        serde_json::to_string_pretty(&report).context("serializing run report")?
    );
    Ok(())
}
