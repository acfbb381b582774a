//! Index record type.

use serde::{Deserialize, Serialize};

use crate::tfl::Station;

/// Minimal projection of a [`Station`] used for name lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexEntry {
    pub common_name: String,
    pub id: String,
    pub url: String,
    pub lat: f64,
    pub lon: f64,
}

impl From<&Station> for IndexEntry {
    fn from(station: &Station) -> Self {
        Self {
            common_name: station.common_name.clone(),
            id: station.id.clone(),
            url: station.url.clone(),
            lat: station.lat,
            lon: station.lon,
        }
    }
}
