//! File-backed reads and writes.

use std::fs;

use chrono::NaiveDate;
use tempfile::TempDir;

use csv_record::{
    Error, Reader, ReaderOptions, Writer, WriterOptions, csv_record, read_csv, write_csv,
};

#[derive(Debug, Clone, PartialEq)]
struct Visit {
    subject: String,
    day: NaiveDate,
    weight: Option<f64>,
}

csv_record!(Visit {
    subject as "SUBJECT",
    day as "DAY": "%Y-%m-%d",
    weight as "WEIGHT",
});

fn visits() -> Vec<Visit> {
    vec![
        Visit {
            subject: "S-001".to_string(),
            day: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            weight: Some(72.5),
        },
        Visit {
            subject: "S-002".to_string(),
            day: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            weight: None,
        },
    ]
}

#[test]
fn write_then_read_with_header() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("visits.csv");

    write_csv(&path, &visits(), &WriterOptions::new().with_header()).unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "SUBJECT,DAY,WEIGHT\nS-001,2024-01-15,72.5\nS-002,2024-02-01,\n"
    );

    let back: Vec<Visit> = read_csv(&path, &ReaderOptions::new().with_header()).unwrap();
    assert_eq!(back, visits());
}

#[test]
fn write_then_read_without_header() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("visits.csv");

    write_csv(&path, &visits(), &WriterOptions::default()).unwrap();
    let back: Vec<Visit> = read_csv(&path, &ReaderOptions::default()).unwrap();
    assert_eq!(back, visits());
}

#[test]
fn semicolon_delimited_crlf_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("visits.csv");

    let options = WriterOptions::new().with_delimiter(b';').crlf();
    write_csv(&path, &visits(), &options).unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "S-001;2024-01-15;72.5\r\nS-002;2024-02-01;\r\n"
    );

    let back: Vec<Visit> = read_csv(&path, &ReaderOptions::new().with_delimiter(b';')).unwrap();
    assert_eq!(back, visits());
}

#[test]
fn open_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.csv");

    match Reader::open(&path) {
        Err(Error::FileNotFound { path: reported }) => assert_eq!(reported, path),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("opened a missing file"),
    }
    assert!(matches!(
        read_csv::<Visit>(&path, &ReaderOptions::default()),
        Err(Error::FileNotFound { .. })
    ));
}

#[test]
fn create_and_stream_records() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("visits.csv");

    let mut writer = Writer::create(&path).unwrap();
    writer.marshal(&visits()).unwrap();
    drop(writer);

    let mut reader = Reader::open(&path).unwrap();
    let subjects: Vec<String> = reader
        .records::<Visit>()
        .map(|visit| visit.unwrap().subject)
        .collect();
    assert_eq!(subjects, ["S-001", "S-002"]);
}
