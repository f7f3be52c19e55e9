//! Name-parsing strategies.
//!
//! The [`NameStrategy`] trait is the seam between the dispatcher
//! ([`NameParser`](crate::parser::NameParser)) and the code that actually
//! understands a particular shape of input. Two strategies ship with the
//! crate:
//!
//! | Strategy | Accepts |
//! |----------|---------|
//! | [`SingleNameStrategy`] | strings without a whitespace-bounded `and` / `&` |
//! | [`MultipleNameStrategy`] | strings with a whitespace-bounded `and` / `&` |
//!
//! Custom strategies can be registered on a parser alongside or instead of
//! the built-ins.
//!
//! # Example
//!
//! ```rust
//! use nameparse_core::strategy::NameStrategy;
//! use nameparse_core::{PersonRecord, Result, Title};
//!
//! /// Accepts bare surnames and files them under "Mr".
//! struct SurnameOnly;
//!
//! impl NameStrategy for SurnameOnly {
//!     fn name(&self) -> &str { "surname-only" }
//!
//!     fn can_parse(&self, input: &str) -> Result<bool> {
//!         Ok(input.split_whitespace().count() == 1)
//!     }
//!
//!     fn parse(&self, input: &str) -> Result<Vec<PersonRecord>> {
//!         Ok(vec![PersonRecord::titled(Title::Mr, input.trim())])
//!     }
//! }
//! ```

pub mod multiple;
pub mod single;

pub use multiple::MultipleNameStrategy;
pub use single::SingleNameStrategy;

use crate::error::{ParseError, Result};
use crate::models::PersonRecord;

/// A way of turning one raw name string into person records.
///
/// # Contract
///
/// - [`can_parse`](NameStrategy::can_parse) is a cheap pre-test. It may
///   reject empty input with [`ParseError::EmptyInput`]; the dispatcher
///   treats any error here the same as `Ok(false)`.
/// - [`parse`](NameStrategy::parse) may still fail after `can_parse`
///   accepted the input. Recoverable failures send the dispatcher on to the
///   next strategy.
/// - Successful results must pass
///   [`validate_records`](crate::validate::validate_records).
pub trait NameStrategy: Send + Sync {
    /// Short identifier used in logs (e.g. `"single"`).
    fn name(&self) -> &str;

    /// Whether this strategy should attempt `input`.
    fn can_parse(&self, input: &str) -> Result<bool>;

    /// Parse `input` into one or more records, in input order.
    fn parse(&self, input: &str) -> Result<Vec<PersonRecord>>;
}

/// Shared applicability guard: rejects input that is empty after trimming.
pub(crate) fn ensure_not_empty(input: &str) -> Result<()> {
    if input.trim().is_empty() {
        Err(ParseError::EmptyInput)
    } else {
        Ok(())
    }
}
