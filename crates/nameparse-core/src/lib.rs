//! # nameparse core
//!
//! Pure name-decomposition engine: turns a free-text string describing one
//! or two people (`"Mr J. Smith"`, `"Mr and Mrs Smith"`,
//! `"Dr & Mrs Joe Bloggs"`) into structured [`PersonRecord`]s.
//!
//! This crate does no filesystem or network I/O and holds no mutable
//! state. The only shared data is the static title vocabulary, so [`parse`]
//! is safe to call from any number of threads at once.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`titles`] | Canonical title set and normalization |
//! | [`tokens`] | Token classification for one name segment |
//! | [`strategy`] | `NameStrategy` trait, single and multiple strategies |
//! | [`parser`] | Ordered strategy dispatcher with fallback |
//! | [`validate`] | Structural checks on results |
//! | [`models`] | `PersonRecord` |
//! | [`error`] | `ParseError` and error codes |
//!
//! ## Example
//!
//! ```rust
//! let people = nameparse_core::parse("Prof. John F. Smith and Dr. Jane A. B. Doe").unwrap();
//! assert_eq!(people[0].initials.as_deref(), Some("F"));
//! assert_eq!(people[1].initials.as_deref(), Some("A, B"));
//! assert_eq!(people[1].last_name, "Doe");
//! ```

pub mod error;
pub mod models;
pub mod parser;
pub mod strategy;
pub mod titles;
pub mod tokens;
pub mod validate;

use std::sync::LazyLock;

pub use error::{ErrorCode, ParseError, Result};
pub use models::PersonRecord;
pub use parser::NameParser;
pub use strategy::{MultipleNameStrategy, NameStrategy, SingleNameStrategy};
pub use titles::Title;

static DEFAULT_PARSER: LazyLock<NameParser> = LazyLock::new(NameParser::with_defaults);

/// Parse a raw name string with the default strategies.
pub fn parse(raw: &str) -> Result<Vec<PersonRecord>> {
    DEFAULT_PARSER.parse(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(title: Title, first: Option<&str>, initials: Option<&str>, last: &str) -> PersonRecord {
        PersonRecord::new(
            title,
            first.map(str::to_string),
            initials.map(str::to_string),
            last,
        )
    }

    #[test]
    fn test_documented_examples() {
        assert_eq!(
            parse("Mr and Mrs Smith").unwrap(),
            vec![
                person(Title::Mr, None, None, "Smith"),
                person(Title::Mrs, None, None, "Smith"),
            ]
        );
        assert_eq!(
            parse("Dr & Mrs Joe Bloggs").unwrap(),
            vec![
                person(Title::Dr, Some("Joe"), None, "Bloggs"),
                person(Title::Mrs, None, None, "Bloggs"),
            ]
        );
        assert_eq!(
            parse("Prof. John F. Smith and Dr. Jane A. B. Doe").unwrap(),
            vec![
                person(Title::Prof, Some("John"), Some("F"), "Smith"),
                person(Title::Dr, Some("Jane"), Some("A, B"), "Doe"),
            ]
        );
        assert_eq!(
            parse("Mrs Jane McMaster").unwrap(),
            vec![person(Title::Mrs, Some("Jane"), None, "McMaster")]
        );
    }

    #[test]
    fn test_documented_failures() {
        assert_eq!(parse("").unwrap_err(), ParseError::EmptyInput);
        assert_eq!(parse("   ").unwrap_err(), ParseError::EmptyInput);
        assert_eq!(
            parse("random text without titles or names").unwrap_err(),
            ParseError::invalid_title("random")
        );
        assert_eq!(
            parse("Mr and Mrs").unwrap_err(),
            ParseError::missing_last_name("Mr and Mrs")
        );
        assert_eq!(parse("Mr").unwrap_err(), ParseError::missing_last_name("Mr"));
        assert_eq!(
            parse("Mr and and Mrs").unwrap_err(),
            ParseError::invalid_format("Mr and and Mrs")
        );
    }

    #[test]
    fn test_parse_is_thread_safe() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| parse("Mr J. R. R. Smith").unwrap()))
            .collect();
        for handle in handles {
            let people = handle.join().unwrap();
            assert_eq!(people[0].initials.as_deref(), Some("J, R, R"));
        }
    }
}
