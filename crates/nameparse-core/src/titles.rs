//! Title vocabulary and normalizer.
//!
//! The one place that knows which honorifics are recognized and how
//! spelling variants collapse onto them. Both strategies call into this
//! module; nothing else keeps its own list.
//!
//! # Normalization
//!
//! 1. Strip trailing periods (`"Dr."` → `"Dr"`).
//! 2. Map the aliases `Mister` and `Master` to `Mr`.
//! 3. Everything else passes through unchanged and is then checked
//!    against the canonical set.
//!
//! ```rust
//! use nameparse_core::titles::{self, Title};
//!
//! assert_eq!(titles::standardize("Mister"), "Mr");
//! assert_eq!(titles::validate("Prof.").unwrap(), Title::Prof);
//! assert!(titles::validate("Captain").is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ParseError, Result};

/// Spellings that normalize to [`Title::Mr`].
pub const MR_ALIASES: [&str; 2] = ["Mister", "Master"];

/// A canonical honorific.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Title {
    Mr,
    Mrs,
    Ms,
    Dr,
    Prof,
    Sir,
}

impl Title {
    /// Every canonical title, in display order.
    pub const ALL: [Title; 6] = [
        Title::Mr,
        Title::Mrs,
        Title::Ms,
        Title::Dr,
        Title::Prof,
        Title::Sir,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Title::Mr => "Mr",
            Title::Mrs => "Mrs",
            Title::Ms => "Ms",
            Title::Dr => "Dr",
            Title::Prof => "Prof",
            Title::Sir => "Sir",
        }
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Title {
    type Err = ParseError;

    /// Exact match against the canonical spelling. Use [`validate`] to
    /// accept aliases and trailing periods.
    fn from_str(s: &str) -> Result<Self> {
        Title::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseError::invalid_title(s))
    }
}

/// Normalize a raw title spelling.
///
/// Idempotent: `standardize(&standardize(x)) == standardize(x)`.
pub fn standardize(raw: &str) -> String {
    let clean = raw.trim_end_matches('.');
    if MR_ALIASES.contains(&clean) {
        Title::Mr.as_str().to_string()
    } else {
        clean.to_string()
    }
}

/// Whether an already-standardized string is a canonical title.
pub fn is_valid(title: &str) -> bool {
    title.parse::<Title>().is_ok()
}

/// Standardize `raw` and resolve it to a canonical [`Title`].
///
/// Fails with [`ParseError::InvalidTitle`] carrying the standardized form.
pub fn validate(raw: &str) -> Result<Title> {
    standardize(raw).parse()
}

/// Whether `segment` consists of exactly one token that is a title.
pub fn is_title_only(segment: &str) -> bool {
    let mut tokens = segment.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(only), None) => validate(only).is_ok(),
        _ => false,
    }
}
