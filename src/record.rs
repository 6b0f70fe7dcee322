use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

pub const FALLBACK_YEAR: i64 = 2012;
pub const FALLBACK_TITLE: &str = "The Amazing Spider-Man 2";

/// A movie record as persisted to the movies table.
///
/// `id` is the table's partition key. `year` serializes as a DynamoDB number
/// attribute, `title` and `id` as string attributes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    #[serde(deserialize_with = "year_from_json")]
    pub year: i64,
    pub title: String,
    pub id: String,
}

impl MovieRecord {
    /// Record written when a request carries no payload. Each call generates
    /// a fresh id.
    pub fn fallback() -> Self {
        Self {
            year: FALLBACK_YEAR,
            title: FALLBACK_TITLE.to_string(),
            id: Uuid::new_v4().to_string(),
        }
    }
}

/// Accept `year` as a JSON number or a string holding an integer.
fn year_from_json<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Year {
        Number(i64),
        Text(String),
    }

    match Year::deserialize(deserializer)? {
        Year::Number(year) => Ok(year),
        Year::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}
