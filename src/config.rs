use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub ingest: IngestConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct IngestConfig {
    #[serde(default = "default_has_headers")]
    pub has_headers: bool,
    #[serde(default)]
    pub column: usize,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default)]
    pub on_error: OnError,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            has_headers: true,
            column: 0,
            delimiter: ",".to_string(),
            on_error: OnError::Abort,
            extensions: default_extensions(),
        }
    }
}

fn default_has_headers() -> bool {
    true
}
fn default_delimiter() -> String {
    ",".to_string()
}
fn default_extensions() -> Vec<String> {
    vec!["csv".to_string()]
}

impl IngestConfig {
    /// The delimiter as the single byte the CSV reader expects.
    ///
    /// Only meaningful after [`load_config`] has validated it.
    pub fn delimiter_byte(&self) -> u8 {
        self.delimiter.bytes().next().unwrap_or(b',')
    }
}

/// What to do when a row fails to parse.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OnError {
    /// The whole import fails on the first bad row.
    #[default]
    Abort,
    /// The row is reported and skipped.
    Skip,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
    #[serde(default = "default_save_on_import")]
    pub save_on_import: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
            save_on_import: true,
        }
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from("./data/session.json")
}
fn default_save_on_import() -> bool {
    true
}

impl Config {
    /// All defaults; used when no config file exists.
    pub fn minimal() -> Self {
        Self::default()
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    // Validate ingest
    if config.ingest.delimiter.len() != 1 || !config.ingest.delimiter.is_ascii() {
        anyhow::bail!(
            "ingest.delimiter must be a single ASCII character, got '{}'",
            config.ingest.delimiter
        );
    }

    if config.ingest.extensions.is_empty() {
        anyhow::bail!("ingest.extensions must list at least one extension");
    }

    // Validate store
    if config.store.path.as_os_str().is_empty() {
        anyhow::bail!("store.path must not be empty");
    }

    Ok(config)
}

/// Load `path` if it exists, otherwise fall back to [`Config::minimal`].
///
/// A file that exists but does not parse or validate is still an error.
pub fn load_or_default(path: &Path) -> Result<Config> {
    if path.exists() {
        load_config(path)
    } else {
        Ok(Config::minimal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("nameparse.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let cfg = load_config(&write_config(&tmp, "")).unwrap();
        assert!(cfg.ingest.has_headers);
        assert_eq!(cfg.ingest.column, 0);
        assert_eq!(cfg.ingest.delimiter_byte(), b',');
        assert_eq!(cfg.ingest.on_error, OnError::Abort);
        assert_eq!(cfg.output.format, OutputFormat::Table);
        assert!(cfg.store.save_on_import);
    }

    #[test]
    fn test_full_config() {
        let tmp = TempDir::new().unwrap();
        let cfg = load_config(&write_config(
            &tmp,
            r#"
[ingest]
has_headers = false
column = 2
delimiter = ";"
on_error = "skip"
extensions = ["csv", "txt"]

[output]
format = "json"

[store]
path = "/tmp/people.json"
save_on_import = false
"#,
        ))
        .unwrap();
        assert!(!cfg.ingest.has_headers);
        assert_eq!(cfg.ingest.column, 2);
        assert_eq!(cfg.ingest.delimiter_byte(), b';');
        assert_eq!(cfg.ingest.on_error, OnError::Skip);
        assert_eq!(cfg.ingest.extensions, ["csv", "txt"]);
        assert_eq!(cfg.output.format, OutputFormat::Json);
        assert_eq!(cfg.store.path, PathBuf::from("/tmp/people.json"));
        assert!(!cfg.store.save_on_import);
    }

    #[test]
    fn test_rejects_multi_char_delimiter() {
        let tmp = TempDir::new().unwrap();
        let err = load_config(&write_config(&tmp, "[ingest]\ndelimiter = \"::\"\n")).unwrap_err();
        assert!(err.to_string().contains("ingest.delimiter"));
    }

    #[test]
    fn test_rejects_unknown_policy() {
        let tmp = TempDir::new().unwrap();
        assert!(load_config(&write_config(&tmp, "[ingest]\non_error = \"retry\"\n")).is_err());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let tmp = TempDir::new().unwrap();
        let cfg = load_or_default(&tmp.path().join("absent.toml")).unwrap();
        assert_eq!(cfg.ingest.extensions, ["csv"]);
    }
}
