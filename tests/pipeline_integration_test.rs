// tests/pipeline_integration_test.rs

use std::fs;
use std::path::Path;

use sensor_normalize::{
    normalize_file, AliasCatalog, CanonicalField, NormalizeError, NormalizeOptions,
};
use tempfile::TempDir;

const CANONICAL_HEADER: &str =
    "time,accelx,accely,accelz,gyrox,gyroy,gyroz,magx,magy,magz,altitude,pressure,temp";

fn write_input(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn read_output(path: &Path) -> Vec<Vec<String>> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| line.split(',').map(str::to_string).collect())
        .collect()
}

fn run(path: &Path) -> sensor_normalize::Result<sensor_normalize::NormalizeReport> {
    normalize_file(path, &AliasCatalog::builtin(), &NormalizeOptions::default())
}

#[test]
fn test_heterogeneous_headers_end_to_end() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "launch.csv",
        "Timestamp,Acceleration_X,Altitude (m)\n5000,1.0,100\n15000,2.0,110\n",
    );

    let report = run(&input).unwrap();

    assert_eq!(report.output, dir.path().join("launch_transformed.csv"));
    assert_eq!(report.mapping.get(CanonicalField::Time), Some("Timestamp"));
    assert_eq!(report.mapping.get(CanonicalField::AccelX), Some("Acceleration_X"));
    assert_eq!(report.mapping.get(CanonicalField::Altitude), Some("Altitude (m)"));
    assert_eq!(report.unresolved.len(), 10);
    assert_eq!(report.empty_columns.len(), 10);
    assert_eq!(report.input_rows, 2);
    assert_eq!(report.dropped_rows, 1);
    assert_eq!(report.output_rows, 1);

    let rows = read_output(&report.output);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].join(","), CANONICAL_HEADER);
    assert_eq!(rows[1].len(), 13);
    assert_eq!(rows[1][0], "15000");
    assert_eq!(rows[1][1], "2");
    assert_eq!(rows[1][10], "110");
    for (i, cell) in rows[1].iter().enumerate() {
        if ![0, 1, 10].contains(&i) {
            assert!(cell.is_empty(), "column {i} should be empty, got {cell}");
        }
    }
}

#[test]
fn test_missing_pressure_column_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "nopressure.csv",
        "time,accelz,temp\n11000,9,20\n12000,,\n13000,11,22\n",
    );

    let report = run(&input).unwrap();
    assert!(report.unresolved.contains(&CanonicalField::Pressure));
    assert!(report.empty_columns.contains(&CanonicalField::Pressure));

    let rows = read_output(&report.output);
    assert_eq!(rows.len(), 4);
    for row in &rows[1..] {
        assert_eq!(row.len(), 13);
        assert!(row[CanonicalField::Pressure.index()].is_empty());
    }
    // Interior gaps are filled.
    assert_eq!(rows[2][CanonicalField::AccelZ.index()], "10");
    assert_eq!(rows[2][CanonicalField::Temp.index()], "21");
}

#[test]
fn test_output_always_has_canonical_header() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "full.csv",
        "TIME,ACCELX,ACCELY,ACCELZ,GYROX,GYROY,GYROZ,MAGX,MAGY,MAGZ,ALTITUDE,PRESSURE,TEMP,extra\n\
         20000,1,2,3,4,5,6,7,8,9,10,1000,25,x\n",
    );
    let report = run(&input).unwrap();
    assert!(report.unresolved.is_empty());

    let rows = read_output(&report.output);
    assert_eq!(rows[0].join(","), CANONICAL_HEADER);
    assert_eq!(rows[1].join(","), "20000,1,2,3,4,5,6,7,8,9,10,1000,25");
}

#[test]
fn test_tab_separated_input_keeps_extension() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "flight.tsv", "time\tpressure\n10500\t1001.5\n");
    let report = run(&input).unwrap();
    assert_eq!(report.output, dir.path().join("flight_transformed.tsv"));
    assert_eq!(report.output_rows, 1);
}

#[test]
fn test_input_not_found() {
    let dir = TempDir::new().unwrap();
    let err = run(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, NormalizeError::InputNotFound { .. }));
}

#[test]
fn test_unresolved_time_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "notime.csv", "clock,altitude\n1,2\n");
    let err = run(&input).unwrap_err();
    assert!(matches!(err, NormalizeError::UnresolvedTimeField { .. }));
    assert!(!dir.path().join("notime_transformed.csv").exists());
}

#[test]
fn test_malformed_value_in_resolved_column() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "bad.csv",
        "time,altitude,state\n11000,12.5,PAD\n12000,oops,BOOST\n",
    );
    let err = run(&input).unwrap_err();
    match err {
        NormalizeError::MalformedNumericValue { column, row, value } => {
            assert_eq!(column, "altitude");
            assert_eq!(row, 2);
            assert_eq!(value, "oops");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_custom_options() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "short.csv", "time\n100\n200\n300\n");
    let options = NormalizeOptions {
        threshold_ms: 150.0,
        output_suffix: "_canonical".to_string(),
    };
    let report = normalize_file(&input, &AliasCatalog::builtin(), &options).unwrap();
    assert_eq!(report.output, dir.path().join("short_canonical.csv"));
    assert_eq!(report.output_rows, 2);
}

#[test]
fn test_report_serializes_mapping_by_canonical_name() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "r.csv", "Timestamp,Height\n12000,3\n");
    let report = run(&input).unwrap();
    let json: serde_json::Value = serde_json::to_value(&report).unwrap();
    assert_eq!(json["mapping"]["time"], "Timestamp");
    assert_eq!(json["mapping"]["altitude"], "Height");
    assert!(json["mapping"]["pressure"].is_null());
    assert_eq!(json["unresolved"][0], "accelx");
}
