//! Person records produced by the engine.

use serde::{Deserialize, Deserializer, Serialize};

use crate::titles::Title;

/// One parsed person.
///
/// Serializes to a mapping with exactly the keys `title`, `firstName`,
/// `initials`, and `lastName`. Absent optional fields are written as
/// `null`, never omitted, and all four keys are required when reading one
/// back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PersonRecord {
    pub title: Title,
    #[serde(deserialize_with = "required_nullable")]
    pub first_name: Option<String>,
    /// Comma-and-space joined initials in input order, e.g. `"A, B"`.
    #[serde(deserialize_with = "required_nullable")]
    pub initials: Option<String>,
    pub last_name: String,
}

impl PersonRecord {
    pub fn new(
        title: Title,
        first_name: Option<String>,
        initials: Option<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            title,
            first_name,
            initials,
            last_name: last_name.into(),
        }
    }

    /// A record carrying only a title and a surname.
    pub fn titled(title: Title, last_name: impl Into<String>) -> Self {
        Self::new(title, None, None, last_name)
    }

    /// The record as a JSON mapping.
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::json!({
            "title": self.title.as_str(),
            "firstName": self.first_name,
            "initials": self.initials,
            "lastName": self.last_name,
        })
    }
}

/// A nullable field whose key must still be present.
fn required_nullable<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
}
