//! Point-in-time occupancy summary for one docking station.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::tfl::Station;

/// Occupancy and status of a docking station at a moment in time.
///
/// Serialized with camelCase keys; empty strings, `false`, zero counts and
/// absent dates are left out. `updatedAt` is always present.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub common_name: String,

    pub updated_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub terminal_name: String,

    #[serde(skip_serializing_if = "is_false")]
    pub installed: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub locked: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_date: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub removal_date: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "is_false")]
    pub temporary: bool,

    #[serde(skip_serializing_if = "is_zero")]
    pub bikes: i64,

    #[serde(skip_serializing_if = "is_zero")]
    pub empty_docks: i64,

    #[serde(skip_serializing_if = "is_zero")]
    pub docks: i64,
}

impl Snapshot {
    /// Summarize `station` as seen at `captured_at`.
    ///
    /// Properties are applied in order, so a key that appears twice takes
    /// its last value. Counts that don't parse as integers become zero.
    pub fn from_station(station: &Station, captured_at: DateTime<Utc>) -> Self {
        let mut snap = Snapshot {
            common_name: station.common_name.clone(),
            updated_at: captured_at,
            terminal_name: String::new(),
            installed: false,
            locked: false,
            install_date: None,
            removal_date: None,
            temporary: false,
            bikes: 0,
            empty_docks: 0,
            docks: 0,
        };

        for prop in &station.additional_properties {
            let value = prop.value.as_str();
            match prop.key.as_str() {
                "NbBikes" => snap.bikes = parse_count(value),
                "NbDocks" => snap.docks = parse_count(value),
                "NbEmptyDocks" => snap.empty_docks = parse_count(value),
                "TerminalName" => snap.terminal_name = value.to_string(),
                "Installed" => snap.installed = parse_flag(value),
                "Locked" => snap.locked = parse_flag(value),
                "Temporary" => snap.temporary = parse_flag(value),
                "InstallDate" => snap.install_date = parse_epoch_millis(value),
                "RemovalDate" => snap.removal_date = parse_epoch_millis(value),
                _ => {}
            }
        }

        snap
    }
}

fn parse_count(value: &str) -> i64 {
    value.parse().unwrap_or(0)
}

fn parse_flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value == "1"
}

// TfL sends dates as milliseconds since the epoch; removal date is often "".
fn parse_epoch_millis(value: &str) -> Option<DateTime<Utc>> {
    value
        .parse::<i64>()
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
}

fn is_false(value: &bool) -> bool {
    !*value
}

fn is_zero(value: &i64) -> bool {
    *value == 0
}
