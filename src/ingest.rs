//! CSV ingestion.
//!
//! Feeds one name per CSV row into the engine and flattens the results in
//! row order:
//!
//! 1. Reject files whose extension is not in `ingest.extensions`.
//! 2. Skip the header row when `ingest.has_headers` is set.
//! 3. Take the `ingest.column` field of each row (missing = empty) and trim it.
//! 4. Skip empty values without calling the engine.
//! 5. Parse the value and append every returned record to one list.
//!
//! A row that fails to parse either aborts the import or is recorded in
//! [`ImportReport::failures`], depending on `ingest.on_error`.

use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

use nameparse_core::{NameParser, ParseError, PersonRecord};

use crate::config::{Config, IngestConfig, OnError, OutputFormat};
use crate::progress::{ImportProgressEvent, ImportProgressReporter, ProgressMode, REPORT_EVERY_ROWS};
use crate::render;
use crate::store::{self, Session};

/// A row the engine could not parse.
#[derive(Debug, Clone)]
pub struct RowFailure {
    /// 1-based line number in the source file.
    pub line: u64,
    pub input: String,
    pub error: ParseError,
}

/// Outcome of one import.
#[derive(Debug, Default)]
pub struct ImportReport {
    /// Data rows read (header excluded).
    pub rows_read: u64,
    /// Rows whose name field was empty after trimming.
    pub rows_skipped: u64,
    pub failures: Vec<RowFailure>,
    /// Every parsed person, flattened in row order.
    pub people: Vec<PersonRecord>,
}

/// Import a CSV file from disk.
pub fn import_path(
    path: &Path,
    cfg: &IngestConfig,
    parser: &NameParser,
    progress: &dyn ImportProgressReporter,
) -> Result<ImportReport> {
    check_extension(path, &cfg.extensions)?;

    let file =
        File::open(path).with_context(|| format!("Failed to open CSV file: {}", path.display()))?;
    let source = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    import_reader(file, &source, cfg, parser, progress)
}

/// Import CSV data from any reader. `source` labels progress and errors.
pub fn import_reader<R: Read>(
    reader: R,
    source: &str,
    cfg: &IngestConfig,
    parser: &NameParser,
    progress: &dyn ImportProgressReporter,
) -> Result<ImportReport> {
    progress.report(ImportProgressEvent::Reading {
        source: source.to_string(),
    });

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(cfg.has_headers)
        .delimiter(cfg.delimiter_byte())
        .flexible(true)
        .from_reader(reader);

    let mut report = ImportReport::default();

    for record in csv_reader.records() {
        let record = record.with_context(|| format!("Failed to read CSV record from {}", source))?;
        report.rows_read += 1;

        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(report.rows_read);
        let name = record.get(cfg.column).unwrap_or("").trim();

        if name.is_empty() {
            report.rows_skipped += 1;
        } else {
            match parser.parse(name) {
                Ok(people) => report.people.extend(people),
                Err(error) => match cfg.on_error {
                    OnError::Abort => {
                        return Err(anyhow::Error::new(error)
                            .context(format!("{} line {}: could not parse '{}'", source, line, name)));
                    }
                    OnError::Skip => {
                        warn!(source, line, input = name, code = error.code().as_u8(), %error, "skipping row");
                        report.failures.push(RowFailure {
                            line,
                            input: name.to_string(),
                            error,
                        });
                    }
                },
            }
        }

        if report.rows_read % REPORT_EVERY_ROWS == 0 {
            progress.report(ImportProgressEvent::Parsing {
                source: source.to_string(),
                rows: report.rows_read,
                people: report.people.len() as u64,
            });
        }
    }

    progress.report(ImportProgressEvent::Finished {
        source: source.to_string(),
        rows: report.rows_read,
        people: report.people.len() as u64,
        failed: report.failures.len() as u64,
    });
    info!(
        source,
        rows = report.rows_read,
        skipped = report.rows_skipped,
        failed = report.failures.len(),
        people = report.people.len(),
        "import finished"
    );

    Ok(report)
}

fn check_extension(path: &Path, allowed: &[String]) -> Result<()> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    if !allowed.iter().any(|a| a.eq_ignore_ascii_case(&ext)) {
        bail!("Invalid file type. Please upload a CSV file.");
    }
    Ok(())
}

/// `nameparse import`: parse a file, print the people, optionally store them.
pub fn run_import(
    config: &Config,
    path: &Path,
    format: Option<OutputFormat>,
    skip_errors: bool,
    save: bool,
    progress: ProgressMode,
) -> Result<()> {
    let mut ingest_cfg = config.ingest.clone();
    if skip_errors {
        ingest_cfg.on_error = OnError::Skip;
    }

    let parser = NameParser::with_defaults();
    let reporter = progress.reporter();
    let report = import_path(path, &ingest_cfg, &parser, reporter.as_ref())?;

    let format = format.unwrap_or(config.output.format);
    println!("{}", render::render(&report.people, format)?);

    for failure in &report.failures {
        eprintln!(
            "skipped line {}: {} ({})",
            failure.line,
            failure.error,
            failure.input
        );
    }
    eprintln!(
        "rows: {}  people: {}  empty: {}  failed: {}",
        report.rows_read,
        report.people.len(),
        report.rows_skipped,
        report.failures.len()
    );

    if save && config.store.save_on_import {
        let source = path.file_name().map(|n| n.to_string_lossy().to_string());
        let session = Session::new(source, report.people);
        store::save_session(&config.store.path, &session)?;
        eprintln!("session saved to {}", config.store.path.display());
    }

    Ok(())
}
