use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// One word found by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultItem {
    pub word: String,
    /// Missing or null definitions are animated as empty text
    #[serde(default, deserialize_with = "null_as_default")]
    pub definition: String,
    #[serde(default)]
    pub points: i64,
}

impl ResultItem {
    pub fn new(word: impl Into<String>, definition: impl Into<String>, points: i64) -> Self {
        Self {
            word: word.into(),
            definition: definition.into(),
            points,
        }
    }
}

/// Aggregate statistics over a result set.
///
/// Every field is optional: the service may answer with an empty object,
/// which means "no data yet" rather than zeroes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stats {
    pub total_words: Option<u32>,
    pub max_points: Option<i64>,
    pub min_points: Option<i64>,
    pub average_length: Option<f64>,
    pub average_points: Option<f64>,
    /// Word length -> number of words with that length
    #[serde(deserialize_with = "null_as_default")]
    pub length_distribution: BTreeMap<u32, u32>,
}

impl Stats {
    pub fn is_empty(&self) -> bool {
        self.total_words.is_none()
            && self.max_points.is_none()
            && self.min_points.is_none()
            && self.average_length.is_none()
            && self.average_points.is_none()
            && self.length_distribution.is_empty()
    }
}

/// Full response of one successful search, in service order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    #[serde(default, deserialize_with = "null_as_default")]
    pub words: Vec<ResultItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stats: Stats,
}

impl ResultSet {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Request body of the find-words endpoint
#[derive(Debug, Clone, Serialize)]
pub struct FindWordsRequest<'a> {
    pub letters: &'a str,
}

/// Treat an explicit JSON null like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
