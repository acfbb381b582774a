//! London cycle hire docking station lookup.
//!
//! Builds a local index of TfL BikePoint stations, searches it by name,
//! and prints live occupancy for a single station.

pub mod cli;
pub mod commands;
pub mod index;
pub mod snapshot;
pub mod tfl;
