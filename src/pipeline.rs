use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::NormalizeOptions;
use crate::data::catalog::AliasCatalog;
use crate::data::filter::filter_window;
use crate::data::interpolate::interpolate;
use crate::data::loader::load_file;
use crate::data::model::{CanonicalField, CanonicalTable, ColumnMapping, InputTable};
use crate::data::projector::project;
use crate::data::resolver::resolve;
use crate::data::writer::{output_path, write_table};
use crate::error::{NormalizeError, Result};

// ---------------------------------------------------------------------------
// In-memory pipeline
// ---------------------------------------------------------------------------

/// Result of normalizing one table.
#[derive(Debug, Clone)]
pub struct Normalized {
    pub table: CanonicalTable,
    pub mapping: ColumnMapping,
    /// Fields with no value in any output row.
    pub empty_fields: Vec<CanonicalField>,
    /// Rows removed by the time window.
    pub dropped_rows: usize,
}

/// Resolve, project, interpolate and window `input`.
pub fn normalize(
    input: &InputTable,
    catalog: &AliasCatalog,
    options: &NormalizeOptions,
) -> Result<Normalized> {
    let mapping = resolve(input.column_names().iter().map(String::as_str), catalog);

    if mapping.get(CanonicalField::Time).is_none() {
        return Err(NormalizeError::UnresolvedTimeField {
            tried: catalog.candidates(CanonicalField::Time).len(),
        });
    }
    for field in mapping.unresolved() {
        log::warn!("No source column for '{field}'; it will be written empty");
    }

    let mut table = project(input, &mapping)?;

    // Time is the interpolation-free axis: a hole in it is a data error.
    if let Some(row) = table
        .column(CanonicalField::Time)
        .iter()
        .position(Option::is_none)
    {
        return Err(NormalizeError::MissingTimeValue { row: row + 1 });
    }

    interpolate(&mut table);

    let dropped_rows = filter_window(&mut table, options.threshold_ms)?;
    log::info!(
        "Dropped {dropped_rows} rows with time <= {} ms; {} remain",
        options.threshold_ms,
        table.len()
    );

    let empty_fields = table.all_missing_fields();
    for field in &empty_fields {
        if let Some(source) = mapping.get(*field) {
            log::warn!("'{field}' resolved to '{source}' but has no values in the output");
        }
    }

    Ok(Normalized {
        table,
        mapping,
        empty_fields,
        dropped_rows,
    })
}

// ---------------------------------------------------------------------------
// File pipeline
// ---------------------------------------------------------------------------

/// Summary of one file run, printed by the CLI.
#[derive(Debug, Clone, Serialize)]
pub struct NormalizeReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub mapping: ColumnMapping,
    pub unresolved: Vec<CanonicalField>,
    /// Output columns holding only the missing marker; all of them when no
    /// row survives the window. Callers decide whether such a log is usable.
    pub empty_columns: Vec<CanonicalField>,
    pub input_rows: usize,
    pub dropped_rows: usize,
    pub output_rows: usize,
}

/// Load `input`, normalize it and write the result next to it.
pub fn normalize_file(
    input: &Path,
    catalog: &AliasCatalog,
    options: &NormalizeOptions,
) -> Result<NormalizeReport> {
    let source = load_file(input)?;
    let normalized = normalize(&source, catalog, options)?;

    let output = output_path(input, &options.output_suffix);
    write_table(&normalized.table, &output)?;

    Ok(NormalizeReport {
        input: input.to_path_buf(),
        output,
        unresolved: normalized.mapping.unresolved(),
        mapping: normalized.mapping,
        empty_columns: normalized.empty_fields,
        input_rows: source.row_count(),
        dropped_rows: normalized.dropped_rows,
        output_rows: normalized.table.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_delimited;
    use crate::data::model::RawValue;

    fn numbers(values: &[f64]) -> Vec<RawValue> {
        values.iter().map(|&v| RawValue::Number(v)).collect()
    }

    #[test]
    fn test_unresolved_time_is_fatal() {
        let input = InputTable::from_columns(vec![("altitude".to_string(), numbers(&[1.0]))]);
        let err = normalize(&input, &AliasCatalog::builtin(), &NormalizeOptions::default())
            .unwrap_err();
        assert!(matches!(err, NormalizeError::UnresolvedTimeField { tried: 5 }));
    }

    #[test]
    fn test_time_gap_is_fatal() {
        let input = InputTable::from_columns(vec![(
            "time".to_string(),
            vec![RawValue::Number(11_000.0), RawValue::Empty, RawValue::Number(13_000.0)],
        )]);
        let err = normalize(&input, &AliasCatalog::builtin(), &NormalizeOptions::default())
            .unwrap_err();
        assert!(matches!(err, NormalizeError::MissingTimeValue { row: 2 }));
    }

    #[test]
    fn test_interpolates_before_windowing() {
        // The only altitude sample sits inside the dropped window; it still
        // fills the surviving rows.
        let input = InputTable::from_columns(vec![
            ("time".to_string(), numbers(&[9_000.0, 11_000.0, 12_000.0])),
            (
                "altitude".to_string(),
                vec![RawValue::Number(42.0), RawValue::Empty, RawValue::Empty],
            ),
        ]);
        let out = normalize(&input, &AliasCatalog::builtin(), &NormalizeOptions::default())
            .unwrap();
        assert_eq!(out.dropped_rows, 1);
        assert_eq!(
            out.table.column(CanonicalField::Altitude),
            vec![Some(42.0), Some(42.0)]
        );
        assert!(out.empty_fields.contains(&CanonicalField::Pressure));
        assert!(!out.empty_fields.contains(&CanonicalField::Altitude));
    }

    #[test]
    fn test_every_column_empty_when_window_drops_all_rows() {
        let input = InputTable::from_columns(vec![
            ("time".to_string(), numbers(&[1_000.0, 10_000.0])),
            ("altitude".to_string(), numbers(&[5.0, 6.0])),
        ]);
        let out = normalize(&input, &AliasCatalog::builtin(), &NormalizeOptions::default())
            .unwrap();
        assert!(out.table.is_empty());
        assert_eq!(out.dropped_rows, 2);
        assert_eq!(out.empty_fields, CanonicalField::ALL);
    }

    #[test]
    fn test_pandas_na_tokens_are_interpolated_across() {
        for token in ["None", "n/a", "#N/A", "-nan", "<NA>", "-NaN", "#NA"] {
            let data = format!("time,altitude\n11000,1\n12000,{token}\n13000,3\n");
            let input = load_delimited(data.as_bytes(), b',').unwrap();
            let out = normalize(&input, &AliasCatalog::builtin(), &NormalizeOptions::default())
                .unwrap_or_else(|e| panic!("token {token}: {e}"));
            assert_eq!(
                out.table.column(CanonicalField::Altitude),
                vec![Some(1.0), Some(2.0), Some(3.0)],
                "token {token}"
            );
        }
    }
}
