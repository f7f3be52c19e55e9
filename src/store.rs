//! Session store for the most recent import.
//!
//! The flattened list of people from one import is kept as a single JSON
//! document so a later `nameparse show` can render it again. On load every
//! entry is checked with [`validate_value`] before it is trusted: the file
//! lives on disk and may have been edited by hand.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;
use uuid::Uuid;

use nameparse_core::validate::validate_value;
use nameparse_core::PersonRecord;

use crate::config::{Config, OutputFormat};
use crate::render;

/// One stored import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    /// File name the people were imported from, if any.
    pub source: Option<String>,
    pub people: Vec<PersonRecord>,
}

impl Session {
    pub fn new(source: Option<String>, people: Vec<PersonRecord>) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            source,
            people,
        }
    }
}

/// Write `session` to `path`, creating parent directories.
pub fn save_session(path: &Path, session: &Session) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create store directory: {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(session)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write session: {}", path.display()))?;
    info!(id = %session.id, people = session.people.len(), path = %path.display(), "session saved");
    Ok(())
}

/// Read and validate the session at `path`.
pub fn load_session(path: &Path) -> Result<Session> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read session: {}", path.display()))?;
    let mut doc: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse session: {}", path.display()))?;

    let entries = doc
        .get_mut("people")
        .and_then(|p| p.as_array_mut())
        .ok_or_else(|| anyhow::anyhow!("Session has no 'people' list: {}", path.display()))?;

    let people = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            validate_value(entry).with_context(|| format!("Session entry {} is invalid", i))
        })
        .collect::<Result<Vec<_>>>()?;
    entries.clear();

    let mut session: Session = serde_json::from_value(doc)
        .with_context(|| format!("Failed to parse session: {}", path.display()))?;
    session.people = people;
    Ok(session)
}

/// Delete the session at `path`. Returns whether one existed.
pub fn clear_session(path: &Path) -> Result<bool> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => {
            Err(e).with_context(|| format!("Failed to remove session: {}", path.display()))
        }
    }
}

/// `nameparse show`: render the stored session.
pub fn run_show(config: &Config, format: Option<OutputFormat>) -> Result<()> {
    let path = &config.store.path;
    if !path.exists() {
        println!("No stored session at {}.", path.display());
        return Ok(());
    }

    let session = load_session(path)?;
    let format = format.unwrap_or(config.output.format);
    println!("{}", render::render(&session.people, format)?);
    eprintln!(
        "session {}  imported {}  from {}",
        session.id,
        session.created_at.format("%Y-%m-%d %H:%M:%S UTC"),
        session.source.as_deref().unwrap_or("-")
    );
    Ok(())
}

/// `nameparse clear`: delete the stored session.
pub fn run_clear(config: &Config) -> Result<()> {
    if clear_session(&config.store.path)? {
        println!("Session cleared.");
    } else {
        println!("No stored session.");
    }
    Ok(())
}
