//! Strategy for strings that describe two people joined by a connector.
//!
//! The string is split on a whitespace-bounded `and` or `&` into exactly two
//! segments. Two shapes are handled:
//!
//! 1. **Shared title pair**: the first segment is a bare title:
//!    - `"Mr and Mrs Smith"` → both records get surname `Smith`.
//!    - `"Dr & Mrs Joe Bloggs"` → the first name goes to the first title,
//!      both records get surname `Bloggs`.
//! 2. **General**: each segment is parsed like a single name. The last
//!    token of the last multi-token segment is the *common last name*, and
//!    a segment that runs out of tokens before naming a surname borrows it.
//!    A segment's own surname always takes priority over the common one.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::error::{ParseError, Result};
use crate::models::PersonRecord;
use crate::strategy::{ensure_not_empty, NameStrategy};
use crate::titles;
use crate::tokens::assemble_person;
use crate::validate::validate_records;

/// Connector words that join two people.
pub const CONNECTORS: [&str; 2] = ["and", "&"];

static CONNECTOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+(?:and|&)\s+").expect("connector pattern is valid"));

/// Whether `input` contains a whitespace-bounded connector.
pub fn has_connector(input: &str) -> bool {
    CONNECTOR_RE.is_match(input)
}

/// Parses two-person strings such as `"Mr and Mrs Smith"` or
/// `"Dr John A. Smith & Prof Jane B. Doe"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultipleNameStrategy;

impl NameStrategy for MultipleNameStrategy {
    fn name(&self) -> &str {
        "multiple"
    }

    fn can_parse(&self, input: &str) -> Result<bool> {
        ensure_not_empty(input)?;
        Ok(has_connector(input))
    }

    fn parse(&self, input: &str) -> Result<Vec<PersonRecord>> {
        ensure_not_empty(input)?;

        let segments: Vec<&str> = CONNECTOR_RE.split(input).map(str::trim).collect();
        if segments.len() != 2 || segments.iter().any(|s| is_malformed(s)) {
            return Err(ParseError::invalid_format(input));
        }
        let (first, second) = (segments[0], segments[1]);

        let people = if titles::is_title_only(first) {
            parse_shared_title(input, first, second)?
        } else {
            let common = common_last_name(&segments)
                .ok_or_else(|| ParseError::missing_last_name(input))?;
            trace!(input, common, "common last name");
            segments
                .iter()
                .map(|segment| assemble_person(segment, Some(common)))
                .collect::<Result<Vec<_>>>()?
        };

        validate_records(&people)?;
        Ok(people)
    }
}

/// Empty, or starts/ends with a stray connector (`"Mr and and Mrs"`).
fn is_malformed(segment: &str) -> bool {
    let mut tokens = segment.split_whitespace();
    let first = tokens.next();
    let last = tokens.next_back().or(first);
    match (first, last) {
        (Some(first), Some(last)) => CONNECTORS.contains(&first) || CONNECTORS.contains(&last),
        _ => true,
    }
}

/// `"Title1 and Title2 LastName"` or `"Title1 and Title2 FirstName LastName"`.
fn parse_shared_title(input: &str, first: &str, second: &str) -> Result<Vec<PersonRecord>> {
    let title1 = titles::validate(first)?;
    let words: Vec<&str> = second.split_whitespace().collect();
    let Some((raw_title2, rest)) = words.split_first() else {
        return Err(ParseError::invalid_format(input));
    };
    let title2 = titles::validate(raw_title2)?;

    match rest {
        [last_name] => Ok(vec![
            PersonRecord::titled(title1, *last_name),
            PersonRecord::titled(title2, *last_name),
        ]),
        [first_name, .., last_name] => Ok(vec![
            PersonRecord::new(title1, Some(first_name.to_string()), None, *last_name),
            PersonRecord::titled(title2, *last_name),
        ]),
        [] => Err(ParseError::missing_last_name(input)),
    }
}

/// Final token of the last segment that has more than one token.
fn common_last_name<'a>(segments: &[&'a str]) -> Option<&'a str> {
    if segments.iter().all(|s| titles::is_title_only(s)) {
        return None;
    }
    segments.iter().rev().copied().find_map(|segment| {
        let tokens: Vec<&'a str> = segment.split_whitespace().collect();
        if tokens.len() > 1 {
            tokens.last().copied()
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::titles::Title;

    fn person(title: Title, first: Option<&str>, initials: Option<&str>, last: &str) -> PersonRecord {
        PersonRecord::new(
            title,
            first.map(str::to_string),
            initials.map(str::to_string),
            last,
        )
    }

    #[test]
    fn test_can_parse() {
        let strategy = MultipleNameStrategy;
        assert!(strategy.can_parse("Mr and Mrs Smith").unwrap());
        assert!(strategy.can_parse("Mr & Mrs Smith").unwrap());
        assert!(!strategy.can_parse("Mr Smith").unwrap());
        assert!(!strategy.can_parse("Mr John Smith").unwrap());
        assert!(!strategy.can_parse("Mr&Mrs Smith").unwrap());
        assert_eq!(strategy.can_parse("").unwrap_err(), ParseError::EmptyInput);
    }

    #[test]
    fn test_title_pair_shared_surname() {
        let expected = vec![
            person(Title::Mr, None, None, "Smith"),
            person(Title::Mrs, None, None, "Smith"),
        ];
        assert_eq!(MultipleNameStrategy.parse("Mr and Mrs Smith").unwrap(), expected);
        assert_eq!(MultipleNameStrategy.parse("Mr. & Mrs. Smith").unwrap(), expected);
    }

    #[test]
    fn test_title_pair_with_first_name() {
        assert_eq!(
            MultipleNameStrategy.parse("Mr & Mrs John Smith").unwrap(),
            vec![
                person(Title::Mr, Some("John"), None, "Smith"),
                person(Title::Mrs, None, None, "Smith"),
            ]
        );
        assert_eq!(
            MultipleNameStrategy.parse("Dr & Mrs Joe Bloggs").unwrap(),
            vec![
                person(Title::Dr, Some("Joe"), None, "Bloggs"),
                person(Title::Mrs, None, None, "Bloggs"),
            ]
        );
    }

    #[test]
    fn test_title_pair_second_title_checked() {
        assert_eq!(
            MultipleNameStrategy.parse("Mr & Captain Hook").unwrap_err(),
            ParseError::invalid_title("Captain")
        );
        assert_eq!(
            MultipleNameStrategy.parse("Mr & Captain James Hook").unwrap_err(),
            ParseError::invalid_title("Captain")
        );
        assert_eq!(
            MultipleNameStrategy.parse("Mr & Mister Smith").unwrap(),
            vec![
                person(Title::Mr, None, None, "Smith"),
                person(Title::Mr, None, None, "Smith"),
            ]
        );
    }

    #[test]
    fn test_independent_segments() {
        assert_eq!(
            MultipleNameStrategy
                .parse("Prof. John F. Smith and Dr. Jane A. B. Doe")
                .unwrap(),
            vec![
                person(Title::Prof, Some("John"), Some("F"), "Smith"),
                person(Title::Dr, Some("Jane"), Some("A, B"), "Doe"),
            ]
        );
        assert_eq!(
            MultipleNameStrategy
                .parse("Dr John A. Smith and Prof Jane B. Smith")
                .unwrap(),
            vec![
                person(Title::Dr, Some("John"), Some("A"), "Smith"),
                person(Title::Prof, Some("Jane"), Some("B"), "Smith"),
            ]
        );
    }

    #[test]
    fn test_segment_borrows_common_surname() {
        assert_eq!(
            MultipleNameStrategy.parse("Mr J. and Mrs K. Smith").unwrap(),
            vec![
                person(Title::Mr, None, Some("J"), "Smith"),
                person(Title::Mrs, None, Some("K"), "Smith"),
            ]
        );
        assert_eq!(
            MultipleNameStrategy.parse("Mr John Smith & Mrs Smith").unwrap(),
            vec![
                person(Title::Mr, Some("John"), None, "Smith"),
                person(Title::Mrs, None, None, "Smith"),
            ]
        );
    }

    #[test]
    fn test_missing_last_name() {
        assert_eq!(
            MultipleNameStrategy.parse("Mr and Mrs").unwrap_err(),
            ParseError::missing_last_name("Mr and Mrs")
        );
        assert_eq!(
            MultipleNameStrategy.parse("Smith and Jones").unwrap_err(),
            ParseError::missing_last_name("Smith and Jones")
        );
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(
            MultipleNameStrategy.parse("Mr and and Mrs").unwrap_err(),
            ParseError::invalid_format("Mr and and Mrs")
        );
        assert_eq!(
            MultipleNameStrategy
                .parse("Mr Smith and Mrs Jones and Dr Who")
                .unwrap_err()
                .code(),
            crate::ErrorCode::InvalidFormat
        );
        assert_eq!(
            MultipleNameStrategy.parse("Mr and  ").unwrap_err().code(),
            crate::ErrorCode::InvalidFormat
        );
    }

    #[test]
    fn test_invalid_titles() {
        assert_eq!(
            MultipleNameStrategy.parse("Invalid and Mrs Smith").unwrap_err(),
            ParseError::invalid_title("Invalid")
        );
        assert_eq!(
            MultipleNameStrategy.parse("Mr Smith and Invalid Jones").unwrap_err(),
            ParseError::invalid_title("Invalid")
        );
        assert_eq!(
            MultipleNameStrategy.parse("Mr and John Smith").unwrap_err(),
            ParseError::invalid_title("John")
        );
    }

    #[test]
    fn test_is_malformed() {
        assert!(is_malformed(""));
        assert!(is_malformed("and Mrs"));
        assert!(is_malformed("Mr &"));
        assert!(!is_malformed("Mr Anderson"));
    }
}
