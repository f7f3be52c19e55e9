//! Token classification for a single name segment.
//!
//! A segment is split on whitespace and read left to right:
//!
//! ```text
//! Title  [FirstName]  [Initial ...]  LastName
//! "Dr"   "Jane"       "A." "B."      "Doe"
//! ```
//!
//! - The first token is the title.
//! - A lone token after the title is the last name.
//! - Otherwise a token longer than one character with no period is a first
//!   name. `"J"` and `"J."` never are: they are initials.
//! - Initial-shaped tokens (one letter, optionally with a trailing period)
//!   are collected in order with the period stripped. Case is preserved.
//! - The last remaining token is the last name; anything between the
//!   initials and the last name is dropped.
//!
//! When a fallback last name is supplied (the shared surname of a
//! two-person string) the segment may run out of tokens without naming a
//! surname of its own, in which case the fallback is used.

use std::collections::VecDeque;

use crate::error::{ParseError, Result};
use crate::models::PersonRecord;
use crate::titles;

/// Separator between collected initials.
pub const INITIALS_SEPARATOR: &str = ", ";

/// One letter, optionally followed by a period.
pub fn is_initial_shaped(token: &str) -> bool {
    let mut chars = token.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(c), None, None) => c.is_alphabetic(),
        (Some(c), Some('.'), None) => c.is_alphabetic(),
        _ => false,
    }
}

/// Longer than one character and free of periods.
pub fn is_first_name_shaped(token: &str) -> bool {
    token.chars().count() > 1 && !token.contains('.')
}

/// Assemble a person from one segment.
///
/// `fallback_last_name` is only consulted when the segment's own tokens are
/// exhausted; a trailing token in the segment always wins over it.
pub fn assemble_person(segment: &str, fallback_last_name: Option<&str>) -> Result<PersonRecord> {
    let mut tokens: VecDeque<&str> = segment.split_whitespace().collect();
    let raw_title = tokens.pop_front().ok_or(ParseError::EmptyInput)?;
    let title = titles::validate(raw_title)?;

    let mut first_name = None;
    let mut initials: Vec<&str> = Vec::new();
    let last_name;

    let lone_surname = tokens.len() == 1
        && (fallback_last_name.is_none() || !is_initial_shaped(tokens[0]));

    if lone_surname {
        last_name = tokens.pop_front();
    } else {
        if tokens.front().is_some_and(|t| is_first_name_shaped(t)) {
            first_name = tokens.pop_front();
        }

        // Without a fallback one token stays behind for the surname.
        let reserve = usize::from(fallback_last_name.is_none());
        while tokens.len() > reserve && tokens.front().is_some_and(|t| is_initial_shaped(t)) {
            if let Some(token) = tokens.pop_front() {
                initials.push(token.strip_suffix('.').unwrap_or(token));
            }
        }

        last_name = tokens.pop_back().or(fallback_last_name);
    }

    let last_name = last_name.ok_or_else(|| ParseError::missing_last_name(segment))?;

    Ok(PersonRecord::new(
        title,
        first_name.map(str::to_string),
        (!initials.is_empty()).then(|| initials.join(INITIALS_SEPARATOR)),
        last_name,
    ))
}
