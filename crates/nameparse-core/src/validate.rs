//! Structural checks on person records.
//!
//! This is the last gate before a result leaves the engine: strategies run
//! it on what they assemble and the dispatcher runs it again on whatever a
//! strategy hands back. [`validate_value`] applies the same rules to a
//! record arriving as a JSON mapping (for example one reloaded from a
//! session store), where the shape itself is not guaranteed by the type
//! system.

use serde_json::Value;

use crate::error::{ParseError, Result};
use crate::models::PersonRecord;
use crate::titles::Title;

/// Keys every serialized record carries, in output order.
pub const RECORD_KEYS: [&str; 4] = ["title", "firstName", "initials", "lastName"];

/// Check one record's invariants.
pub fn validate_record(person: &PersonRecord) -> Result<()> {
    if person.last_name.trim().is_empty() {
        return Err(ParseError::validation(
            "Last name must be a non-empty string",
        ));
    }

    if matches!(&person.first_name, Some(name) if name.trim().is_empty()) {
        return Err(ParseError::validation(
            "First name must be null or a non-empty string",
        ));
    }

    if let Some(initials) = &person.initials {
        let well_formed = !initials.is_empty()
            && initials
                .split(", ")
                .all(|initial| {
                    let mut chars = initial.chars();
                    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic())
                });
        if !well_formed {
            return Err(ParseError::validation(format!(
                "Initials must be single letters joined by \", \", got {:?}",
                initials
            )));
        }
    }

    Ok(())
}

/// Check every record in order; the first violation wins.
///
/// An empty list is structurally valid.
pub fn validate_records(people: &[PersonRecord]) -> Result<()> {
    people.iter().try_for_each(validate_record)
}

/// Check a JSON mapping against the record schema and convert it.
///
/// Requires exactly the four record keys, string-typed `title` and
/// `lastName`, and `firstName`/`initials` that are either `null` or
/// strings.
pub fn validate_value(value: &Value) -> Result<PersonRecord> {
    let obj = value
        .as_object()
        .ok_or_else(|| ParseError::validation("Each result must be a mapping"))?;

    for key in RECORD_KEYS {
        if !obj.contains_key(key) {
            return Err(ParseError::validation(format!("Missing required key: {}", key)));
        }
    }
    if let Some(extra) = obj.keys().find(|k| !RECORD_KEYS.contains(&k.as_str())) {
        return Err(ParseError::validation(format!("Unexpected key: {}", extra)));
    }

    let title = match &obj["title"] {
        Value::String(s) if !s.is_empty() => s
            .parse::<Title>()
            .map_err(|_| ParseError::validation(format!("Title is not recognized: {}", s)))?,
        _ => return Err(ParseError::validation("Title must be a non-empty string")),
    };

    let last_name = match &obj["lastName"] {
        Value::String(s) if !s.is_empty() => s.clone(),
        _ => {
            return Err(ParseError::validation(
                "Last name must be a non-empty string",
            ))
        }
    };

    let first_name = optional_string(obj, "firstName", "First name")?;
    let initials = optional_string(obj, "initials", "Initials")?;

    let person = PersonRecord::new(title, first_name, initials, last_name);
    validate_record(&person)?;
    Ok(person)
}

fn optional_string(
    obj: &serde_json::Map<String, Value>,
    key: &str,
    label: &str,
) -> Result<Option<String>> {
    match &obj[key] {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        _ => Err(ParseError::validation(format!(
            "{} must be null or string",
            label
        ))),
    }
}
