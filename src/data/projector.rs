use crate::error::{NormalizeError, Result};

use super::model::{
    CanonicalField, CanonicalRow, CanonicalTable, ColumnMapping, InputTable, RawValue, FIELD_COUNT,
};

/// Build the fixed-schema table from the source columns chosen in `mapping`.
///
/// Row count and order follow the input. Unresolved fields, and empty cells
/// of resolved ones, become the missing marker. Text in a resolved column is
/// a [`NormalizeError::MalformedNumericValue`]; nothing is coerced.
pub fn project(input: &InputTable, mapping: &ColumnMapping) -> Result<CanonicalTable> {
    let mut rows: Vec<CanonicalRow> = vec![[None; FIELD_COUNT]; input.row_count()];

    for field in CanonicalField::ALL {
        let Some(source) = mapping.get(field) else {
            continue;
        };
        // A mapping built from another table may name a column this one lacks.
        let Some(values) = input.column(source) else {
            log::warn!("{field}: mapped column '{source}' is not in the input; leaving it empty");
            continue;
        };

        for (row_idx, (row, value)) in rows.iter_mut().zip(values).enumerate() {
            row[field.index()] = match value {
                RawValue::Number(v) => Some(*v),
                RawValue::Empty => None,
                RawValue::Text(token) => {
                    return Err(NormalizeError::MalformedNumericValue {
                        column: source.to_string(),
                        row: row_idx + 1,
                        value: token.clone(),
                    })
                }
            };
        }
    }

    Ok(CanonicalTable::new(rows))
}
