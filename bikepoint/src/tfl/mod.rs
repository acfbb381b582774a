//! TfL Unified API client for cycle hire docking stations.
//!
//! Two endpoints are used:
//! - `GET {base}/bikepoint` lists every docking station with its properties
//! - `GET {base}/Place/{prefix}_{id}` fetches a single station
//!
//! Each call is a single attempt bounded by the configured timeout.

mod client;
mod error;
#[cfg(test)]
pub(crate) mod mock;
mod types;

pub use client::{BikePointClient, ClientConfig, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use types::{AdditionalProperty, Station};
