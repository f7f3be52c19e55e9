//! Import progress reporting.
//!
//! Reports observable progress during `nameparse import` so users see how
//! many rows have been read and how many people have been extracted so far.
//! Progress is emitted on **stderr** so stdout remains parseable for scripts.

use std::io::Write;

/// Rows between two `Parsing` events.
pub const REPORT_EVERY_ROWS: u64 = 100;

/// A single progress event for an import.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImportProgressEvent {
    /// The file has been opened; nothing parsed yet.
    Reading { source: String },
    /// `rows` data rows read so far, producing `people` records.
    Parsing {
        source: String,
        rows: u64,
        people: u64,
    },
    /// Import complete.
    Finished {
        source: String,
        rows: u64,
        people: u64,
        failed: u64,
    },
}

/// Reports import progress. Implementations write to stderr (human or JSON).
pub trait ImportProgressReporter: Send + Sync {
    /// Emit a progress event. Called from the ingest loop.
    fn report(&self, event: ImportProgressEvent);
}

/// Human-friendly progress on stderr: "import owners.csv  parsing  1,200 rows  1,350 people".
pub struct StderrProgress;

impl ImportProgressReporter for StderrProgress {
    fn report(&self, event: ImportProgressEvent) {
        let line = match &event {
            ImportProgressEvent::Reading { source } => {
                format!("import {}  reading...\n", source)
            }
            ImportProgressEvent::Parsing {
                source,
                rows,
                people,
            } => format!(
                "import {}  parsing  {} rows  {} people\n",
                source,
                format_number(*rows),
                format_number(*people)
            ),
            ImportProgressEvent::Finished {
                source,
                rows,
                people,
                failed,
            } => format!(
                "import {}  done  {} rows  {} people  {} failed\n",
                source,
                format_number(*rows),
                format_number(*people),
                format_number(*failed)
            ),
        };
        let _ = std::io::stderr().lock().write_all(line.as_bytes());
        let _ = std::io::stderr().lock().flush();
    }
}

/// Machine-readable progress: one JSON object per line on stderr.
pub struct JsonProgress;

impl ImportProgressReporter for JsonProgress {
    fn report(&self, event: ImportProgressEvent) {
        let obj = match &event {
            ImportProgressEvent::Reading { source } => serde_json::json!({
                "event": "progress",
                "source": source,
                "phase": "reading"
            }),
            ImportProgressEvent::Parsing {
                source,
                rows,
                people,
            } => serde_json::json!({
                "event": "progress",
                "source": source,
                "phase": "parsing",
                "rows": rows,
                "people": people
            }),
            ImportProgressEvent::Finished {
                source,
                rows,
                people,
                failed,
            } => serde_json::json!({
                "event": "progress",
                "source": source,
                "phase": "finished",
                "rows": rows,
                "people": people,
                "failed": failed
            }),
        };
        if let Ok(line) = serde_json::to_string(&obj) {
            let _ = writeln!(std::io::stderr().lock(), "{}", line);
            let _ = std::io::stderr().lock().flush();
        }
    }
}

/// No-op reporter when progress is disabled.
pub struct NoProgress;

impl ImportProgressReporter for NoProgress {
    fn report(&self, _event: ImportProgressEvent) {}
}

fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + (s.len() - 1) / 3);
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Progress mode for the CLI: off, human (stderr), or JSON (stderr).
#[derive(Clone, Copy, Debug, Eq, PartialEq, clap::ValueEnum)]
pub enum ProgressMode {
    Off,
    Human,
    Json,
}

impl ProgressMode {
    /// Default: human progress when stderr is a TTY, otherwise off.
    pub fn default_for_tty() -> Self {
        if atty::is(atty::Stream::Stderr) {
            ProgressMode::Human
        } else {
            ProgressMode::Off
        }
    }

    /// Build a reporter for this mode. Caller can pass it to ingest.
    pub fn reporter(&self) -> Box<dyn ImportProgressReporter> {
        match self {
            ProgressMode::Off => Box::new(NoProgress),
            ProgressMode::Human => Box::new(StderrProgress),
            ProgressMode::Json => Box::new(JsonProgress),
        }
    }
}
