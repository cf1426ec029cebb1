use super::model::{CanonicalField, FIELD_COUNT};

// ---------------------------------------------------------------------------
// Casing variants
// ---------------------------------------------------------------------------

/// Case transformation applied to a candidate spelling before lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CasingVariant {
    AsGiven,
    Upper,
    Lower,
    /// First character upper-cased, the rest lower-cased.
    Capitalized,
}

impl CasingVariant {
    /// Lookup priority, highest first.
    pub const PRIORITY: [CasingVariant; 4] = [
        CasingVariant::AsGiven,
        CasingVariant::Upper,
        CasingVariant::Lower,
        CasingVariant::Capitalized,
    ];

    pub fn apply(self, candidate: &str) -> String {
        match self {
            CasingVariant::AsGiven => candidate.to_string(),
            CasingVariant::Upper => candidate.to_uppercase(),
            CasingVariant::Lower => candidate.to_lowercase(),
            CasingVariant::Capitalized => {
                let mut chars = candidate.chars();
                match chars.next() {
                    Some(first) => first
                        .to_uppercase()
                        .chain(chars.flat_map(char::to_lowercase))
                        .collect(),
                    None => String::new(),
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// One spelling to try: a candidate under a casing variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spelling {
    pub candidate: String,
    pub variant: CasingVariant,
    /// The string compared against source column names.
    pub text: String,
}

/// Ordered candidate spellings per canonical field.
#[derive(Debug, Clone)]
pub struct AliasCatalog {
    candidates: [Vec<String>; FIELD_COUNT],
}

impl AliasCatalog {
    /// Build a catalog from `(field, candidates)` entries. Fields without an
    /// entry have no candidates and never resolve; a repeated field appends.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (CanonicalField, Vec<S>)>,
        S: Into<String>,
    {
        let mut candidates: [Vec<String>; FIELD_COUNT] = Default::default();
        for (field, names) in entries {
            candidates[field.index()].extend(names.into_iter().map(Into::into));
        }
        Self { candidates }
    }

    /// Spellings produced by the common logging tools seen in the field.
    pub fn builtin() -> Self {
        use CanonicalField::*;
        Self::new([
            (Time, string_vec(&["time", "timestamp", "Time", "Time (ms)", "Time (s)"])),
            (AccelX, accel_candidates('x')),
            (AccelY, accel_candidates('y')),
            (AccelZ, accel_candidates('z')),
            (GyroX, gyro_candidates('x')),
            (GyroY, gyro_candidates('y')),
            (GyroZ, gyro_candidates('z')),
            (MagX, mag_candidates('x')),
            (MagY, mag_candidates('y')),
            (MagZ, mag_candidates('z')),
            (
                Altitude,
                string_vec(&["altitude", "altitude (m)", "altitude (meters)", "elevation", "height"]),
            ),
            (
                Pressure,
                string_vec(&["pressure", "pressure (hPa)", "barometric_pressure", "air_pressure"]),
            ),
            (
                Temp,
                string_vec(&[
                    "temp",
                    "temperature",
                    "temperature (C)",
                    "temperature (degrees Celsius)",
                    "temp (C)",
                    "temp (degrees Celsius)",
                ]),
            ),
        ])
    }

    /// Candidates for `field`, in precedence order.
    pub fn candidates(&self, field: CanonicalField) -> &[String] {
        &self.candidates[field.index()]
    }

    /// Every spelling for `field` in lookup order: candidates outer,
    /// casing variants inner.
    pub fn spellings(&self, field: CanonicalField) -> impl Iterator<Item = Spelling> + '_ {
        self.candidates(field).iter().flat_map(|candidate| {
            CasingVariant::PRIORITY.iter().map(move |&variant| Spelling {
                candidate: candidate.clone(),
                variant,
                text: variant.apply(candidate),
            })
        })
    }
}

impl Default for AliasCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn string_vec(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn accel_candidates(axis: char) -> Vec<String> {
    let upper = axis.to_ascii_uppercase();
    vec![
        format!("accel{axis}"),
        format!("accel_{axis}"),
        format!("accel_{axis} (m/s^2)"),
        format!("acceleration_{axis}"),
        format!("accelerometer_{axis}"),
        format!("Accel_{upper}"),
        format!("Acceleration_{upper}"),
    ]
}

fn gyro_candidates(axis: char) -> Vec<String> {
    let upper = axis.to_ascii_uppercase();
    vec![
        format!("gyro{axis}"),
        format!("gyro_{axis}"),
        format!("gyro_{axis} (rad/s)"),
        format!("gyroscope_{axis}"),
        format!("Gyro_{upper}"),
    ]
}

fn mag_candidates(axis: char) -> Vec<String> {
    let upper = axis.to_ascii_uppercase();
    vec![
        format!("mag{axis}"),
        format!("mag_{axis}"),
        format!("mag_{axis} (uT)"),
        format!("magnetometer_{axis}"),
        format!("Mag_{upper}"),
    ]
}
