//! Strategy dispatcher.
//!
//! [`NameParser`] holds an ordered list of [`NameStrategy`] trait objects and
//! tries them in turn:
//!
//! ```text
//! raw ──▶ empty? ──▶ strategy 1 ──▶ strategy 2 ──▶ … ──▶ error
//!           │         can_parse?      can_parse?
//!           │         parse ok? ─┐    parse ok? ─┐
//!           ▼                    ▼               ▼
//!       EmptyInput          validate ──▶ Vec<PersonRecord>
//! ```
//!
//! - Empty (after trim) input is rejected once, up front, with
//!   [`ParseError::EmptyInput`].
//! - A strategy whose applicability check fails or errors is skipped.
//! - A strategy that accepts the input but then fails to parse it is
//!   recovered locally: the next strategy gets a chance.
//! - When every strategy has had its turn, the failure of the first
//!   strategy that accepted the input is returned. If none accepted it, the
//!   result is [`ParseError::InvalidFormat`].
//! - [`ParseError::ValidationError`] is never recovered.

use tracing::debug;

use crate::error::{ParseError, Result};
use crate::models::PersonRecord;
use crate::strategy::{MultipleNameStrategy, NameStrategy, SingleNameStrategy};
use crate::validate::validate_records;

/// Ordered, injectable list of strategies with trial-and-fallback dispatch.
///
/// # Example
///
/// ```rust
/// use nameparse_core::parser::NameParser;
///
/// let parser = NameParser::with_defaults();
/// let people = parser.parse("Dr & Mrs Joe Bloggs").unwrap();
/// assert_eq!(people.len(), 2);
/// assert_eq!(people[1].last_name, "Bloggs");
/// ```
pub struct NameParser {
    strategies: Vec<Box<dyn NameStrategy>>,
}

impl NameParser {
    /// Create a parser with no strategies. Every non-empty input fails with
    /// [`ParseError::InvalidFormat`] until strategies are registered.
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    /// Create a parser with the built-in strategies: single, then multiple.
    pub fn with_defaults() -> Self {
        Self::with_strategies(vec![
            Box::new(SingleNameStrategy),
            Box::new(MultipleNameStrategy),
        ])
    }

    /// Create a parser with a custom ordered strategy list.
    pub fn with_strategies(strategies: Vec<Box<dyn NameStrategy>>) -> Self {
        Self { strategies }
    }

    /// Append a strategy; it is tried after all existing ones.
    pub fn register(&mut self, strategy: Box<dyn NameStrategy>) {
        self.strategies.push(strategy);
    }

    /// Get all registered strategies, in trial order.
    pub fn strategies(&self) -> &[Box<dyn NameStrategy>] {
        &self.strategies
    }

    /// Check if the parser has no strategies.
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Return the count of registered strategies.
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Parse a raw name string into one or more person records.
    pub fn parse(&self, raw: &str) -> Result<Vec<PersonRecord>> {
        if raw.trim().is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let mut first_failure: Option<ParseError> = None;

        for strategy in &self.strategies {
            match strategy.can_parse(raw) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(err) => {
                    debug!(strategy = strategy.name(), error = %err, "applicability check failed");
                    continue;
                }
            }

            match strategy.parse(raw) {
                Ok(people) => {
                    validate_records(&people)?;
                    debug!(strategy = strategy.name(), count = people.len(), "parsed");
                    return Ok(people);
                }
                Err(err) if err.is_recoverable() => {
                    debug!(strategy = strategy.name(), error = %err, "falling back to next strategy");
                    if first_failure.is_none() {
                        first_failure = Some(err);
                    }
                }
                Err(err) => return Err(err),
            }
        }

        Err(first_failure.unwrap_or_else(|| ParseError::invalid_format(raw)))
    }
}

impl Default for NameParser {
    /// Same as [`NameParser::with_defaults`].
    fn default() -> Self {
        Self::with_defaults()
    }
}
