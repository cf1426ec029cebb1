use serde::{Deserialize, Serialize};

use crate::data::filter::DEFAULT_THRESHOLD_MS;
use crate::data::writer::DEFAULT_OUTPUT_SUFFIX;

/// Tunables for a normalization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeOptions {
    /// Rows with `time` at or below this many milliseconds are dropped.
    pub threshold_ms: f64,
    /// Inserted between the input's stem and extension to name the output.
    pub output_suffix: String,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            threshold_ms: DEFAULT_THRESHOLD_MS,
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
        }
    }
}
