//! Local stand-in for the TfL API, served by axum on an ephemeral port.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Json, Router};
use axum::response::{IntoResponse, Response};
use axum::routing::get;

use super::types::Station;

/// What `GET /bikepoint` answers with.
#[derive(Debug, Clone)]
enum ListResponse {
    Stations,
    Raw(String),
    Status(u16),
}

#[derive(Clone)]
struct MockState {
    stations: Arc<Vec<Station>>,
    list: ListResponse,
    place_status: StatusCode,
}

/// Builder for a mock TfL server.
pub(crate) struct MockTfl {
    stations: Vec<Station>,
    list: ListResponse,
    place_status: u16,
}

/// A spawned mock server.
pub(crate) struct RunningMock {
    pub base_url: String,
}

impl MockTfl {
    /// Serve `stations` from both the list and the single-place endpoints.
    pub fn with_stations(stations: Vec<Station>) -> Self {
        Self {
            stations,
            list: ListResponse::Stations,
            place_status: 200,
        }
    }

    /// Answer the list endpoint with a verbatim body.
    pub fn with_raw_list(body: impl Into<String>) -> Self {
        Self {
            stations: Vec::new(),
            list: ListResponse::Raw(body.into()),
            place_status: 200,
        }
    }

    /// Answer the list endpoint with an error status.
    pub fn failing_list(status: u16) -> Self {
        Self {
            stations: Vec::new(),
            list: ListResponse::Status(status),
            place_status: 200,
        }
    }

    /// Answer known stations on the single-place endpoint with `status`,
    /// still sending the station as the body.
    pub fn with_place_status(mut self, status: u16) -> Self {
        self.place_status = status;
        self
    }

    pub async fn spawn(self) -> RunningMock {
        let state = MockState {
            stations: Arc::new(self.stations),
            list: self.list,
            place_status: StatusCode::from_u16(self.place_status).unwrap(),
        };
        let app = Router::new()
            .route("/bikepoint", get(list))
            .route("/Place/:place_id", get(place))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        RunningMock {
            base_url: format!("http://{addr}"),
        }
    }
}

async fn list(State(state): State<MockState>) -> Response {
    match state.list {
        ListResponse::Stations => Json(state.stations.as_ref().clone()).into_response(),
        ListResponse::Raw(body) => body.into_response(),
        ListResponse::Status(code) => {
            let status = StatusCode::from_u16(code).unwrap();
            (status, "unavailable").into_response()
        }
    }
}

async fn place(State(state): State<MockState>, Path(place_id): Path<String>) -> Response {
    match state.stations.iter().find(|s| s.id == place_id) {
        Some(station) => (state.place_status, Json(station.clone())).into_response(),
        None => (StatusCode::NOT_FOUND, "not found").into_response(),
    }
}

/// A station with the given numeric id and name and no properties.
pub(crate) fn station(number: &str, name: &str) -> Station {
    Station {
        type_name: None,
        id: format!("BikePoints_{number}"),
        url: format!("/Place/BikePoints_{number}"),
        common_name: name.to_string(),
        place_type: "BikePoint".to_string(),
        additional_properties: Vec::new(),
        children: Vec::new(),
        children_urls: Vec::new(),
        lat: 51.5,
        lon: -0.1,
    }
}
