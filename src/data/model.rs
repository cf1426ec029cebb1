use std::collections::BTreeMap;
use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

// ---------------------------------------------------------------------------
// CanonicalField – the fixed output schema
// ---------------------------------------------------------------------------

/// One of the 13 columns every normalized log carries, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CanonicalField {
    /// Milliseconds.
    Time,
    /// m/s^2
    AccelX,
    AccelY,
    AccelZ,
    /// rad/s
    GyroX,
    GyroY,
    GyroZ,
    /// uT
    MagX,
    MagY,
    MagZ,
    /// Metres.
    Altitude,
    /// hPa
    Pressure,
    /// Degrees Celsius.
    Temp,
}

/// Number of canonical columns.
pub const FIELD_COUNT: usize = 13;

impl CanonicalField {
    /// All fields in output order.
    pub const ALL: [CanonicalField; FIELD_COUNT] = [
        CanonicalField::Time,
        CanonicalField::AccelX,
        CanonicalField::AccelY,
        CanonicalField::AccelZ,
        CanonicalField::GyroX,
        CanonicalField::GyroY,
        CanonicalField::GyroZ,
        CanonicalField::MagX,
        CanonicalField::MagY,
        CanonicalField::MagZ,
        CanonicalField::Altitude,
        CanonicalField::Pressure,
        CanonicalField::Temp,
    ];

    /// Header name written to the output file.
    pub fn name(self) -> &'static str {
        match self {
            CanonicalField::Time => "time",
            CanonicalField::AccelX => "accelx",
            CanonicalField::AccelY => "accely",
            CanonicalField::AccelZ => "accelz",
            CanonicalField::GyroX => "gyrox",
            CanonicalField::GyroY => "gyroy",
            CanonicalField::GyroZ => "gyroz",
            CanonicalField::MagX => "magx",
            CanonicalField::MagY => "magy",
            CanonicalField::MagZ => "magz",
            CanonicalField::Altitude => "altitude",
            CanonicalField::Pressure => "pressure",
            CanonicalField::Temp => "temp",
        }
    }

    /// Position of this field within a canonical row.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// RawValue – a single cell of the source file
// ---------------------------------------------------------------------------

/// A source cell, typed on load the same way for every column.
///
/// Text is kept rather than rejected: only columns that resolve to a
/// canonical field are required to be numeric.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Number(f64),
    Empty,
    Text(String),
}

impl RawValue {
    /// Tokens treated as "no value" besides the empty string: the default NA
    /// set of pandas' `read_csv`.
    pub const MISSING_TOKENS: [&'static str; 18] = [
        "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
        "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
    ];

    /// Classify a (trimmed) source token.
    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        if token.is_empty() || Self::MISSING_TOKENS.iter().any(|m| *m == token) {
            return RawValue::Empty;
        }
        match token.parse::<f64>() {
            Ok(v) if v.is_finite() => RawValue::Number(v),
            _ => RawValue::Text(token.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// InputTable – the loaded source file
// ---------------------------------------------------------------------------

/// Column-oriented view of a source log, exactly as loaded.
#[derive(Debug, Clone, Default)]
pub struct InputTable {
    /// Column names in file order, first occurrence only.
    column_names: Vec<String>,
    /// column name → values, one per data row.
    columns: BTreeMap<String, Vec<RawValue>>,
    row_count: usize,
}

impl InputTable {
    /// Build a table from named columns. All columns must share a length;
    /// shorter ones are padded with [`RawValue::Empty`]. Later duplicates of a
    /// name are ignored.
    pub fn from_columns<I>(columns: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<RawValue>)>,
    {
        let mut table = InputTable::default();
        for (name, values) in columns {
            if table.columns.contains_key(&name) {
                log::warn!("Duplicate column '{name}' ignored; keeping the first occurrence");
                continue;
            }
            table.row_count = table.row_count.max(values.len());
            table.column_names.push(name.clone());
            table.columns.insert(name, values);
        }
        let rows = table.row_count;
        for values in table.columns.values_mut() {
            values.resize(rows, RawValue::Empty);
        }
        table
    }

    /// Column names in file order.
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// Values of one column, if present.
    pub fn column(&self, name: &str) -> Option<&[RawValue]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.row_count
    }
}

// ---------------------------------------------------------------------------
// ColumnMapping – the resolver's answer
// ---------------------------------------------------------------------------

/// Source column chosen for each canonical field, `None` when unresolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMapping {
    sources: [Option<String>; FIELD_COUNT],
}

impl ColumnMapping {
    pub fn new(sources: [Option<String>; FIELD_COUNT]) -> Self {
        Self { sources }
    }

    /// Source column for `field`.
    pub fn get(&self, field: CanonicalField) -> Option<&str> {
        self.sources[field.index()].as_deref()
    }

    /// `(field, source)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (CanonicalField, Option<&str>)> + '_ {
        CanonicalField::ALL
            .iter()
            .map(move |&field| (field, self.get(field)))
    }

    /// Fields no candidate matched.
    pub fn unresolved(&self) -> Vec<CanonicalField> {
        self.iter()
            .filter(|(_, source)| source.is_none())
            .map(|(field, _)| field)
            .collect()
    }
}

/// Serialized as a map in canonical order, `null` for unresolved fields.
impl Serialize for ColumnMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FIELD_COUNT))?;
        for (field, source) in self.iter() {
            map.serialize_entry(field.name(), &source)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// CanonicalTable – fixed-schema rows
// ---------------------------------------------------------------------------

/// One normalized record; `None` is the missing marker.
pub type CanonicalRow = [Option<f64>; FIELD_COUNT];

/// Rows in the fixed canonical column order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanonicalTable {
    pub rows: Vec<CanonicalRow>,
}

impl CanonicalTable {
    pub fn new(rows: Vec<CanonicalRow>) -> Self {
        Self { rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Copy of one column, top to bottom.
    pub fn column(&self, field: CanonicalField) -> Vec<Option<f64>> {
        self.rows.iter().map(|row| row[field.index()]).collect()
    }

    /// Overwrite one column. `values` must have one entry per row.
    pub fn set_column(&mut self, field: CanonicalField, values: &[Option<f64>]) {
        debug_assert_eq!(values.len(), self.rows.len());
        for (row, value) in self.rows.iter_mut().zip(values) {
            row[field.index()] = *value;
        }
    }

    /// Fields whose every cell is missing. An empty table has no data in any
    /// column and reports all of them.
    pub fn all_missing_fields(&self) -> Vec<CanonicalField> {
        CanonicalField::ALL
            .iter()
            .copied()
            .filter(|field| self.rows.iter().all(|row| row[field.index()].is_none()))
            .collect()
    }
}
