//! Normalizes sensor logs from assorted data loggers into one fixed
//! 13-column schema (`time`, accelerometer, gyroscope, magnetometer,
//! `altitude`, `pressure`, `temp`) for downstream flight analysis.

pub mod config;
pub mod data;
pub mod error;
pub mod pipeline;

pub use config::NormalizeOptions;
pub use data::catalog::AliasCatalog;
pub use data::model::{CanonicalField, CanonicalTable, ColumnMapping, InputTable};
pub use error::{NormalizeError, Result};
pub use pipeline::{normalize, normalize_file, NormalizeReport, Normalized};
