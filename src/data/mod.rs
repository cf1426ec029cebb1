/// Data layer: source loading, schema normalization, and output.
///
/// Architecture:
/// ```text
///  .csv / .tsv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → InputTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ resolver  │  header names × AliasCatalog → ColumnMapping
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ projector  │  InputTable × ColumnMapping → CanonicalTable
///   └───────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ interpolate  │  fill gaps per column, in place
///   └─────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  drop rows at or before the time threshold
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  writer   │  canonical header + rows → <input>_transformed.<ext>
///   └──────────┘
/// ```

pub mod catalog;
pub mod filter;
pub mod interpolate;
pub mod loader;
pub mod model;
pub mod projector;
pub mod resolver;
pub mod writer;
