use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{NormalizeError, Result};

use super::model::{InputTable, RawValue};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a sensor log from a delimited file. The delimiter is picked by
/// extension:
/// * `.tsv` / `.tab` – tab separated
/// * anything else   – comma separated
pub fn load_file(path: &Path) -> Result<InputTable> {
    if !path.is_file() {
        return Err(NormalizeError::InputNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path).map_err(|_| NormalizeError::InputNotFound {
        path: path.to_path_buf(),
    })?;

    let table = load_delimited(file, delimiter_for(path))?;
    log::info!(
        "Loaded {} rows x {} columns from {}",
        table.row_count(),
        table.column_names().len(),
        path.display()
    );
    Ok(table)
}

/// Delimiter byte for `path`'s extension.
pub fn delimiter_for(path: &Path) -> u8 {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "tsv" | "tab" => b'\t',
        _ => b',',
    }
}

// ---------------------------------------------------------------------------
// Delimited reader
// ---------------------------------------------------------------------------

/// First record is the header. Header names and cells are trimmed; short
/// rows are padded with empty cells and surplus cells are dropped.
pub fn load_delimited<R: Read>(reader: R, delimiter: u8) -> Result<InputTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut columns: Vec<Vec<RawValue>> = vec![Vec::new(); headers.len()];
    for (row_no, result) in reader.records().enumerate() {
        let record = result?;
        if record.len() > headers.len() {
            log::warn!(
                "Row {}: {} cells for {} columns; extra cells ignored",
                row_no + 1,
                record.len(),
                headers.len()
            );
        }
        for (col_idx, column) in columns.iter_mut().enumerate() {
            column.push(RawValue::parse(record.get(col_idx).unwrap_or("")));
        }
    }

    Ok(InputTable::from_columns(headers.into_iter().zip(columns)))
}
