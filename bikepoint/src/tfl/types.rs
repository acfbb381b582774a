//! Wire types for TfL `Place` responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A docking station as returned by the remote API.
///
/// Only `id` is required; everything else falls back to its default so a
/// sparse record still decodes. Explicit `null`s decode as the default too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    #[serde(rename = "$type", default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub common_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub place_type: String,

    /// Named key/value properties, in the order the API sent them.
    #[serde(default, deserialize_with = "null_as_default")]
    pub additional_properties: Vec<AdditionalProperty>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub children: Vec<serde_json::Value>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub children_urls: Vec<serde_json::Value>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub lat: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub lon: f64,
}

/// One named property on a station (e.g. `NbBikes = "7"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalProperty {
    #[serde(rename = "$type", default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,

    #[serde(deserialize_with = "null_as_default")]
    pub key: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub source_system_key: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,

    #[serde(default)]
    pub modified: Option<DateTime<Utc>>,
}

impl AdditionalProperty {
    /// Build a property with only a key and value set.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            type_name: None,
            category: "Description".to_string(),
            key: key.into(),
            source_system_key: "BikePoints".to_string(),
            value: value.into(),
            modified: None,
        }
    }
}

/// Decode `null` as the type's default instead of failing.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
