//! # nameparse
//!
//! Splits free-text homeowner names into structured person records.
//!
//! The parsing engine lives in [`nameparse_core`] (re-exported here as
//! [`engine`]); this crate wraps it with the pieces a batch tool needs:
//! CSV ingestion, rendering, a session store, and configuration.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐   ┌──────────────┐   ┌──────────────────┐
//! │ CSV rows │──▶│    ingest    │──▶│ nameparse-core   │
//! │  (file)  │   │ trim / skip  │   │ single ▸ multiple│
//! └──────────┘   └──────┬───────┘   └──────────────────┘
//!                       │ Vec<PersonRecord>
//!              ┌────────┴─────────┐
//!              ▼                  ▼
//!         ┌────────────┐   ┌───────────┐
//!         │   render   │   │   store   │
//!         │ table/json │   │ (session) │
//!         └────────────┘   └───────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! nameparse parse "Dr & Mrs Joe Bloggs"
//! nameparse import owners.csv --format json
//! nameparse show
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`ingest`] | CSV ingestion |
//! | [`render`] | Table and JSON output |
//! | [`store`] | Session persistence |
//! | [`progress`] | Import progress on stderr |

pub mod config;
pub mod ingest;
pub mod progress;
pub mod render;
pub mod store;

pub use nameparse_core as engine;
pub use nameparse_core::{parse, NameParser, ParseError, PersonRecord, Title};
