//! TfL BikePoint HTTP client.

use std::time::Duration;

use tracing::debug;

use super::error::ApiError;
use super::types::Station;

/// Default base URL for the TfL Unified API.
pub const DEFAULT_BASE_URL: &str = "https://api.tfl.gov.uk";

/// Prefix TfL puts in front of numeric docking station ids.
const DEFAULT_STATION_PREFIX: &str = "BikePoints";

/// How much of a bad response body to keep for error reporting.
const BODY_PREVIEW_CHARS: usize = 500;

/// Configuration for the BikePoint client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Id prefix used when addressing a single station
    pub station_prefix: String,
}

impl ClientConfig {
    /// Create a config pointing at the public TfL API with a 3 second timeout.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 3,
            station_prefix: DEFAULT_STATION_PREFIX.to_string(),
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the TfL BikePoint endpoints.
#[derive(Debug, Clone)]
pub struct BikePointClient {
    http: reqwest::Client,
    base_url: String,
    station_prefix: String,
}

impl BikePointClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(ApiError::Request)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            station_prefix: config.station_prefix,
        })
    }

    /// Fetch every docking station.
    ///
    /// A body that is not a JSON array of stations is reported as
    /// [`ApiError::Decode`] rather than treated as an empty list.
    pub async fn list_stations(&self) -> Result<Vec<Station>, ApiError> {
        let url = format!("{}/bikepoint", self.base_url);
        let request = self.http.get(&url).build().map_err(ApiError::Request)?;

        debug!(%url, "listing stations");
        let response = self
            .http
            .execute(request)
            .await
            .map_err(ApiError::Transport)?;
        let status = response.status();
        debug!(%url, status = status.as_u16(), "list response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: preview(&body),
            });
        }

        let body = response.text().await.map_err(ApiError::Transport)?;
        let stations: Vec<Station> = decode(&body)?;

        debug!(count = stations.len(), "decoded stations");
        Ok(stations)
    }

    /// Fetch a single docking station.
    ///
    /// `id` may be the bare number (`"123"`) or the full identifier
    /// (`"BikePoints_123"`). Any status of 400 or above is reported as
    /// [`ApiError::NotFound`] without looking at the body.
    pub async fn get_station(&self, id: &str) -> Result<Station, ApiError> {
        let url = format!("{}/Place/{}", self.base_url, self.place_id(id));
        let request = self.http.get(&url).build().map_err(ApiError::Request)?;

        debug!(%url, "fetching station");
        let response = self
            .http
            .execute(request)
            .await
            .map_err(ApiError::Transport)?;
        let status = response.status();
        debug!(%url, status = status.as_u16(), "station response");

        if status.as_u16() >= 400 {
            return Err(ApiError::NotFound { id: id.to_string() });
        }

        let body = response.text().await.map_err(ApiError::Transport)?;
        decode(&body)
    }

    /// The `Place` id for a station, adding the prefix unless already present.
    fn place_id(&self, id: &str) -> String {
        let prefix = format!("{}_", self.station_prefix);
        if id.starts_with(&prefix) {
            id.to_string()
        } else {
            format!("{prefix}{id}")
        }
    }
}

fn decode<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode {
        message: e.to_string(),
        body: preview(body),
    })
}

fn preview(body: &str) -> String {
    body.chars().take(BODY_PREVIEW_CHARS).collect()
}
