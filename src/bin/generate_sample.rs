//! Writes a synthetic flight log in the style of a third-party logger:
//! mixed-case and unit-annotated headers, a slower barometer, sparse
//! temperature readings and a free-text status column.

use std::path::PathBuf;

use anyhow::{Context, Result};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

const HEADERS: [&str; 12] = [
    "Timestamp",
    "Acceleration_X",
    "ACCEL_Y",
    "accel_z (m/s^2)",
    "Gyroscope_x",
    "GYRO_Y",
    "gyro_z (rad/s)",
    "Mag_X",
    "Altitude (m)",
    "Pressure",
    "temperature",
    "status",
];

const SAMPLE_PERIOD_MS: u64 = 20;
const DURATION_MS: u64 = 30_000;
const IGNITION_MS: u64 = 12_000;
const BURNOUT_MS: u64 = 14_000;
const THRUST_ACCEL: f64 = 60.0;
const GRAVITY: f64 = 9.81;
/// Barometer and thermometer report every Nth sample.
const BARO_EVERY: u64 = 5;
const TEMP_EVERY: u64 = 25;

fn pressure_hpa(altitude_m: f64) -> f64 {
    1013.25 * (1.0 - 2.25577e-5 * altitude_m).powf(5.25588)
}

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("sample_flight_log.csv"));

    let mut rng = SimpleRng::new(42);
    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;
    writer.write_record(HEADERS)?;

    let dt = SAMPLE_PERIOD_MS as f64 / 1000.0;
    let mut altitude = 0.0_f64;
    let mut velocity = 0.0_f64;
    let mut rows = 0u64;

    for (i, t_ms) in (0..=DURATION_MS).step_by(SAMPLE_PERIOD_MS as usize).enumerate() {
        let i = i as u64;
        let (accel, status) = if t_ms < IGNITION_MS {
            (0.0, "PAD")
        } else if t_ms < BURNOUT_MS {
            (THRUST_ACCEL, "BOOST")
        } else if altitude > 0.0 {
            (-GRAVITY, "COAST")
        } else {
            (0.0, "LANDED")
        };

        velocity += accel * dt;
        altitude = (altitude + velocity * dt).max(0.0);
        if altitude == 0.0 {
            velocity = velocity.max(0.0);
        }

        let sensed_z = accel + GRAVITY;
        let altitude_cell = if i % BARO_EVERY == 0 {
            format!("{:.2}", altitude + rng.gauss(0.0, 0.5))
        } else {
            String::new()
        };
        let pressure_cell = if i % BARO_EVERY == 0 {
            format!("{:.2}", pressure_hpa(altitude) + rng.gauss(0.0, 0.05))
        } else {
            String::new()
        };
        let temp_cell = if i % TEMP_EVERY == 0 {
            format!("{:.1}", 21.0 - 0.0065 * altitude + rng.gauss(0.0, 0.1))
        } else {
            "NaN".to_string()
        };

        writer.write_record([
            t_ms.to_string(),
            format!("{:.3}", rng.gauss(0.0, 0.05)),
            format!("{:.3}", rng.gauss(0.0, 0.05)),
            format!("{:.3}", sensed_z + rng.gauss(0.0, 0.1)),
            format!("{:.4}", rng.gauss(0.0, 0.01)),
            format!("{:.4}", rng.gauss(0.0, 0.01)),
            format!("{:.4}", rng.gauss(0.0, 0.01)),
            format!("{:.2}", 22.0 + rng.gauss(0.0, 0.3)),
            altitude_cell,
            pressure_cell,
            temp_cell,
            status.to_string(),
        ])?;
        rows += 1;
    }
    writer.flush()?;

    println!(
        "Wrote {rows} samples ({} ms period) to {}",
        SAMPLE_PERIOD_MS,
        output_path.display()
    );
    Ok(())
}
