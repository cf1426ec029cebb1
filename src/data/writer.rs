use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;

use super::model::{CanonicalField, CanonicalTable};

/// Suffix inserted before the extension of the output file.
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_transformed";

/// `<dir>/<stem><suffix>.<ext>` for an input `<dir>/<stem>.<ext>`.
pub fn output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default();
    let mut name = OsString::from(stem);
    name.push(suffix);
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }
    input.with_file_name(name)
}

/// Write the table to `path` as CSV with the canonical header.
pub fn write_table(table: &CanonicalTable, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_to(table, file)?;
    log::info!("Wrote {} rows to {}", table.len(), path.display());
    Ok(())
}

/// Serialize the table: header row, then one record per row with missing
/// cells left empty.
pub fn write_to<W: Write>(table: &CanonicalTable, sink: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(sink);
    writer.write_record(CanonicalField::ALL.iter().map(|f| f.name()))?;
    for row in &table.rows {
        writer.write_record(row.iter().map(|cell| match cell {
            Some(v) => v.to_string(),
            None => String::new(),
        }))?;
    }
    writer.flush()?;
    Ok(())
}
