//! Dataset records shared by the client and the terminal front end
//!
//! Records are owned by the backend. They are replaced wholesale on every
//! fetch and never edited locally.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Dataset identifier as issued by the backend
///
/// The backend may hand out either string or numeric ids; both are kept
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DatasetId {
    Text(String),
    Number(i64),
}

impl fmt::Display for DatasetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetId::Text(id) => write!(f, "{}", id),
            DatasetId::Number(id) => write!(f, "{}", id),
        }
    }
}

impl From<&str> for DatasetId {
    fn from(id: &str) -> Self {
        DatasetId::Text(id.to_string())
    }
}

impl From<i64> for DatasetId {
    fn from(id: i64) -> Self {
        DatasetId::Number(id)
    }
}

/// A discoverable dataset in the SyftBox ecosystem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub id: DatasetId,

    /// Display name
    pub name: String,

    /// Owner email, also used as the filter key
    pub email: String,

    /// Resource locator, copied verbatim and never parsed
    pub syft_url: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    /// ISO-8601 creation time
    #[serde(default)]
    pub created_at: Option<String>,

    /// ISO-8601 last update time
    #[serde(default)]
    pub updated_at: Option<String>,

    /// Human readable size, already formatted by the backend
    #[serde(default, deserialize_with = "null_as_default")]
    pub size: String,

    /// Short format tag such as `csv` or `dataset`
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

/// Optional backend fields arrive either missing or as `null`
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Dataset {
    /// Format tag as shown to users
    pub fn kind_label(&self) -> String {
        self.kind.to_uppercase()
    }

    /// Whether `key` names this dataset, by id or by name
    pub fn matches(&self, key: &str) -> bool {
        self.name == key || self.id.to_string() == key
    }
}
