//! Strategy for strings that describe exactly one person.

use tracing::trace;

use crate::error::Result;
use crate::models::PersonRecord;
use crate::strategy::multiple::has_connector;
use crate::strategy::{ensure_not_empty, NameStrategy};
use crate::tokens::assemble_person;
use crate::validate::validate_records;

/// Parses `"<Title> [FirstName] [Initials...] <LastName>"`.
///
/// Applies to any non-empty string without a whitespace-bounded `and` or
/// `&` connector.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleNameStrategy;

impl NameStrategy for SingleNameStrategy {
    fn name(&self) -> &str {
        "single"
    }

    fn can_parse(&self, input: &str) -> Result<bool> {
        ensure_not_empty(input)?;
        Ok(!has_connector(input))
    }

    fn parse(&self, input: &str) -> Result<Vec<PersonRecord>> {
        ensure_not_empty(input)?;
        let person = assemble_person(input, None)?;
        trace!(input, ?person, "single name parsed");

        let people = vec![person];
        validate_records(&people)?;
        Ok(people)
    }
}
