//! Library-level tests for the import pipeline: file on disk in, people out,
//! session stored and reloaded.

use nameparse::config::{Config, IngestConfig, OnError};
use nameparse::engine::{NameStrategy, Result as EngineResult, SingleNameStrategy};
use nameparse::ingest::import_path;
use nameparse::progress::NoProgress;
use nameparse::store::{load_session, save_session, Session};
use nameparse::{NameParser, ParseError, PersonRecord, Title};
use std::fs;
use tempfile::TempDir;

fn write_csv(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_import_file_then_store_round_trip() {
    let tmp = TempDir::new().unwrap();
    let csv = write_csv(
        &tmp,
        "homeowners.csv",
        "homeowner\nMr & Mrs Joe Bloggs\nProf Alex Brogan\n\"Mr Tom Staff and Mr John Doe\"\n",
    );

    let cfg = Config::minimal();
    let report = import_path(&csv, &cfg.ingest, &NameParser::with_defaults(), &NoProgress).unwrap();

    assert_eq!(report.rows_read, 3);
    assert!(report.failures.is_empty());
    assert_eq!(
        report.people,
        vec![
            PersonRecord::new(Title::Mr, Some("Joe".to_string()), None, "Bloggs"),
            PersonRecord::titled(Title::Mrs, "Bloggs"),
            PersonRecord::new(Title::Prof, Some("Alex".to_string()), None, "Brogan"),
            PersonRecord::new(Title::Mr, Some("Tom".to_string()), None, "Staff"),
            PersonRecord::new(Title::Mr, Some("John".to_string()), None, "Doe"),
        ]
    );

    let store_path = tmp.path().join("data/session.json");
    let session = Session::new(Some("homeowners.csv".to_string()), report.people.clone());
    save_session(&store_path, &session).unwrap();

    let loaded = load_session(&store_path).unwrap();
    assert_eq!(loaded.id, session.id);
    assert_eq!(loaded.people, report.people);
}

#[test]
fn test_import_uses_injected_parser() {
    let tmp = TempDir::new().unwrap();
    let csv = write_csv(&tmp, "owners.csv", "homeowner\nMr Smith\nMr and Mrs Smith\n");
    let cfg = IngestConfig {
        on_error: OnError::Skip,
        ..IngestConfig::default()
    };

    // Without the multiple-name strategy the second row has no taker.
    let parser = NameParser::with_strategies(vec![Box::new(SingleNameStrategy)]);
    let report = import_path(&csv, &cfg, &parser, &NoProgress).unwrap();

    assert_eq!(report.people, vec![PersonRecord::titled(Title::Mr, "Smith")]);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(
        report.failures[0].error,
        ParseError::invalid_format("Mr and Mrs Smith")
    );
}

/// Accepts only names ending in "Estate" and yields no people.
struct EstateStrategy;

impl NameStrategy for EstateStrategy {
    fn name(&self) -> &str {
        "estate"
    }

    fn can_parse(&self, input: &str) -> EngineResult<bool> {
        Ok(input.ends_with("Estate"))
    }

    fn parse(&self, _input: &str) -> EngineResult<Vec<PersonRecord>> {
        Ok(Vec::new())
    }
}

#[test]
fn test_import_with_registered_strategy() {
    let tmp = TempDir::new().unwrap();
    let csv = write_csv(&tmp, "owners.csv", "homeowner\nThe Smith Estate\nMs Lee\n");

    let mut parser = NameParser::with_defaults();
    parser.register(Box::new(EstateStrategy));

    let report = import_path(&csv, &IngestConfig::default(), &parser, &NoProgress).unwrap();
    assert!(report.failures.is_empty());
    assert_eq!(report.people, vec![PersonRecord::titled(Title::Ms, "Lee")]);
}

#[test]
fn test_import_rejects_wrong_extension() {
    let tmp = TempDir::new().unwrap();
    let path = write_csv(&tmp, "owners.tsv", "homeowner\nMr Smith\n");

    let err = import_path(
        &path,
        &IngestConfig::default(),
        &NameParser::with_defaults(),
        &NoProgress,
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "Invalid file type. Please upload a CSV file.");
}

#[test]
fn test_import_missing_file() {
    let tmp = TempDir::new().unwrap();
    let err = import_path(
        &tmp.path().join("absent.csv"),
        &IngestConfig::default(),
        &NameParser::with_defaults(),
        &NoProgress,
    )
    .unwrap_err();
    assert!(err.to_string().contains("Failed to open CSV file"));
}
