use super::model::{CanonicalField, CanonicalTable};

/// Fill missing cells in every canonical column, each column on its own.
///
/// The axis is row position, not the `time` value. Columns with no known
/// value stay entirely missing.
pub fn interpolate(table: &mut CanonicalTable) {
    for field in CanonicalField::ALL {
        let mut values = table.column(field);
        if fill_gaps(&mut values) > 0 {
            table.set_column(field, &values);
        }
    }
}

/// Fill `None` entries in place and return how many were filled.
///
/// Interior gaps are linearly interpolated between their bracketing known
/// values. Leading gaps take the first known value and trailing gaps the last.
pub fn fill_gaps(values: &mut [Option<f64>]) -> usize {
    let Some(first) = values.iter().position(Option::is_some) else {
        return 0;
    };
    let mut filled = 0;

    if let Some(v) = values[first] {
        for cell in &mut values[..first] {
            *cell = Some(v);
            filled += 1;
        }
    }

    // Walk known values pairwise; `left` is always the last known index.
    let mut left = first;
    for right in first + 1..values.len() {
        let Some(hi) = values[right] else {
            continue;
        };
        if right - left > 1 {
            if let Some(lo) = values[left] {
                let span = (right - left) as f64;
                for i in left + 1..right {
                    let t = (i - left) as f64 / span;
                    values[i] = Some(lo + (hi - lo) * t);
                    filled += 1;
                }
            }
        }
        left = right;
    }

    if let Some(v) = values[left] {
        for cell in &mut values[left + 1..] {
            *cell = Some(v);
            filled += 1;
        }
    }

    filled
}
