use crate::error::{NormalizeError, Result};

use super::model::{CanonicalField, CanonicalTable};

/// Default cut-off: the first 10 s of a log are pre-launch settling.
pub const DEFAULT_THRESHOLD_MS: f64 = 10_000.0;

/// Return indices of rows whose `time` is strictly above `threshold_ms`.
///
/// Every row must carry a time value; the first that does not is reported as
/// [`NormalizeError::MissingTimeValue`].
pub fn window_indices(table: &CanonicalTable, threshold_ms: f64) -> Result<Vec<usize>> {
    let time = CanonicalField::Time.index();
    let mut kept = Vec::with_capacity(table.len());
    for (i, row) in table.rows.iter().enumerate() {
        let t = row[time].ok_or(NormalizeError::MissingTimeValue { row: i + 1 })?;
        if t > threshold_ms {
            kept.push(i);
        }
    }
    Ok(kept)
}

/// Drop rows with `time <= threshold_ms` in place. Returns how many were dropped.
pub fn filter_window(table: &mut CanonicalTable, threshold_ms: f64) -> Result<usize> {
    let kept = window_indices(table, threshold_ms)?;
    let dropped = table.len() - kept.len();
    if dropped > 0 {
        let mut keep = kept.into_iter().peekable();
        let mut idx = 0;
        table.rows.retain(|_| {
            let retain = keep.next_if_eq(&idx).is_some();
            idx += 1;
            retain
        });
    }
    Ok(dropped)
}
