use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// A repository record from `GET /users/{username}/repos`.
///
/// Only the fields the portfolio page consumes are kept; everything else in
/// the payload is ignored by serde.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Repository {
    pub name: String,
    pub description: Option<String>,
    pub homepage: Option<String>,
    pub language: Option<String>,
    pub stargazers_count: u64,
    pub updated_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub topics: Vec<String>,
    pub html_url: String,
}

impl Repository {
    /// Description, with the API's empty string treated as missing.
    pub fn description(&self) -> Option<&str> {
        non_empty(self.description.as_deref())
    }

    pub fn homepage(&self) -> Option<&str> {
        non_empty(self.homepage.as_deref())
    }

    pub fn language(&self) -> Option<&str> {
        non_empty(self.language.as_deref())
    }

    pub fn has_topic(&self, topic: &str) -> bool {
        self.topics.iter().any(|t| t == topic)
    }
}

/// The API may send `"topics": null`; that is the same as no topics.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
