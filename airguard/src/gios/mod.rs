//! GIOŚ air-quality API transport.
//!
//! This module provides an HTTP client for the public GIOŚ monitoring API
//! plus the `AirQualitySource` trait the rest of the crate depends on.
//!
//! Endpoints consumed:
//! - `/station/findAll` - every station
//! - `/aqindex/getIndex/{stationId}` - index summary
//! - `/station/sensors/{stationId}` - sensors of a station
//! - `/data/getData/{sensorId}` - measurement series of a sensor

mod client;
mod convert;
mod error;
#[cfg(test)]
pub mod mock;
mod source;
mod types;

pub use client::{GiosClient, GiosConfig};
pub use error::FetchError;
pub use source::AirQualitySource;
