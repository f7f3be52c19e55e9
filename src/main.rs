//! # nameparse CLI
//!
//! The `nameparse` binary splits homeowner name strings into person records,
//! either from the command line or from a CSV file.
//!
//! ## Usage
//!
//! ```bash
//! nameparse --config ./config/nameparse.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `nameparse parse <NAME>...` | Parse names given as arguments |
//! | `nameparse import <FILE>` | Parse every row of a CSV file and store the result |
//! | `nameparse show` | Render the stored session |
//! | `nameparse clear` | Delete the stored session |
//! | `nameparse titles` | List canonical titles and accepted aliases |
//!
//! ## Examples
//!
//! ```bash
//! nameparse parse "Mr John Smith" "Dr & Mrs Joe Bloggs"
//! nameparse import owners.csv --format json --skip-errors
//! RUST_LOG=nameparse_core=trace nameparse parse "Mr J. and Mrs K. Smith"
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use nameparse::config::{self, OutputFormat};
use nameparse::engine::titles::{self, Title};
use nameparse::progress::ProgressMode;
use nameparse::{ingest, render, store};

/// nameparse: split free-text homeowner names into structured records.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file. See `config/nameparse.example.toml` for a full example.
#[derive(Parser)]
#[command(
    name = "nameparse",
    about = "Split homeowner name strings into title, first name, initials and last name",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./config/nameparse.toml`. When the file does not exist
    /// the built-in defaults are used.
    #[arg(long, global = true, default_value = "./config/nameparse.toml")]
    config: PathBuf,

    /// Log debug output to stderr (overridden by RUST_LOG).
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse one or more names given on the command line.
    ///
    /// Stops at the first name that cannot be parsed, printing
    /// `error[<code>]: <message>` and exiting non-zero.
    Parse {
        /// Names to parse, e.g. "Mr & Mrs Smith".
        #[arg(required = true)]
        names: Vec<String>,

        /// Output format (defaults to `[output].format`).
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Parse the name column of a CSV file.
    ///
    /// The rendered list goes to stdout, the summary to stderr. Unless
    /// `--no-save` is given the people are stored as the current session.
    Import {
        /// CSV file to read.
        file: PathBuf,

        /// Output format (defaults to `[output].format`).
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Report unparseable rows and continue instead of aborting.
        #[arg(long)]
        skip_errors: bool,

        /// Do not overwrite the stored session.
        #[arg(long)]
        no_save: bool,

        /// Progress on stderr. Defaults to `human` on a TTY, otherwise `off`.
        #[arg(long, value_enum)]
        progress: Option<ProgressMode>,
    },

    /// Render the stored session.
    Show {
        /// Output format (defaults to `[output].format`).
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Delete the stored session.
    Clear,

    /// List canonical titles and the spellings normalized to them.
    Titles,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cfg = config::load_or_default(&cli.config)?;

    match cli.command {
        Commands::Parse { names, format } => {
            let format = format.unwrap_or(cfg.output.format);
            let mut people = Vec::new();
            for name in &names {
                match nameparse::parse(name) {
                    Ok(parsed) => people.extend(parsed),
                    Err(e) => {
                        eprintln!("error[{}]: {}", e.code().as_u8(), e);
                        std::process::exit(1);
                    }
                }
            }
            println!("{}", render::render(&people, format)?);
        }
        Commands::Import {
            file,
            format,
            skip_errors,
            no_save,
            progress,
        } => {
            let progress = progress.unwrap_or_else(ProgressMode::default_for_tty);
            ingest::run_import(&cfg, &file, format, skip_errors, !no_save, progress)?;
        }
        Commands::Show { format } => {
            store::run_show(&cfg, format)?;
        }
        Commands::Clear => {
            store::run_clear(&cfg)?;
        }
        Commands::Titles => {
            print_titles();
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn print_titles() {
    for title in Title::ALL {
        let mut aliases = vec![format!("{}.", title)];
        if title == Title::Mr {
            aliases.extend(titles::MR_ALIASES.iter().map(|a| a.to_string()));
        }
        println!("{:<6}{}", title.as_str(), aliases.join(", "));
    }
}
