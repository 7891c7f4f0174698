//! In-memory data source for testing without API access.
//!
//! Serves fixtures registered up front, records every request in the order
//! it was issued, and can slow down or hold back individual sensor fetches
//! to exercise concurrent code paths.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::Notify;

use crate::domain::{IndexSummary, MeasurementSeries, Sensor, SensorId, Station, StationId};

use super::error::FetchError;
use super::source::AirQualitySource;

/// A request the mock has received.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    Stations,
    Index(StationId),
    Sensors(StationId),
    Measurements(SensorId),
}

/// Mock source that serves registered fixtures.
///
/// Anything not registered answers with a 404 `FetchError::Status`.
#[derive(Default)]
pub struct MockSource {
    /// `None` makes the station list fail.
    stations: Mutex<Option<Vec<Station>>>,
    indexes: HashMap<StationId, IndexSummary>,
    sensors: HashMap<StationId, Vec<Sensor>>,
    series: HashMap<SensorId, MeasurementSeries>,
    delays: HashMap<SensorId, Duration>,
    gates: HashMap<SensorId, Arc<Notify>>,
    log: Mutex<Vec<Request>>,
}

impl MockSource {
    /// Create an empty mock where every request fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `stations` from the station list endpoint.
    pub fn with_stations(self, stations: Vec<Station>) -> Self {
        self.set_stations(Some(stations));
        self
    }

    /// Serve `summary` as the index of `station`.
    pub fn with_index(mut self, station: StationId, summary: IndexSummary) -> Self {
        self.indexes.insert(station, summary);
        self
    }

    /// Serve `sensors` as the sensor list of `station`.
    pub fn with_sensors(mut self, station: StationId, sensors: Vec<Sensor>) -> Self {
        self.sensors.insert(station, sensors);
        self
    }

    /// Serve `series` as the measurements of `sensor`.
    pub fn with_series(mut self, sensor: SensorId, series: MeasurementSeries) -> Self {
        self.series.insert(sensor, series);
        self
    }

    /// Sleep for `delay` before answering for `sensor`.
    pub fn with_delay(mut self, sensor: SensorId, delay: Duration) -> Self {
        self.delays.insert(sensor, delay);
        self
    }

    /// Hold the answer for `sensor` until `gate` is notified.
    pub fn with_gate(mut self, sensor: SensorId, gate: Arc<Notify>) -> Self {
        self.gates.insert(sensor, gate);
        self
    }

    /// Replace the station list; `None` makes the endpoint fail.
    pub fn set_stations(&self, stations: Option<Vec<Station>>) {
        *self.stations.lock().unwrap_or_else(|e| e.into_inner()) = stations;
    }

    /// Requests received so far, in issue order.
    pub fn requests(&self) -> Vec<Request> {
        self.log.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Number of measurement requests received so far.
    pub fn measurement_requests(&self) -> usize {
        self.requests()
            .iter()
            .filter(|r| matches!(r, Request::Measurements(_)))
            .count()
    }

    fn record(&self, request: Request) {
        self.log
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(request);
    }
}

fn not_found(what: String) -> FetchError {
    FetchError::Status {
        status: 404,
        message: format!("No mock data for {what}"),
    }
}

impl AirQualitySource for MockSource {
    async fn stations(&self) -> Result<Vec<Station>, FetchError> {
        self.record(Request::Stations);
        let stations = self
            .stations
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone();
        stations.ok_or_else(|| FetchError::Status {
            status: 503,
            message: "station list unavailable".to_string(),
        })
    }

    async fn index(&self, station: StationId) -> Result<IndexSummary, FetchError> {
        self.record(Request::Index(station));
        self.indexes
            .get(&station)
            .cloned()
            .ok_or_else(|| not_found(format!("index of station {station}")))
    }

    async fn sensors(&self, station: StationId) -> Result<Vec<Sensor>, FetchError> {
        self.record(Request::Sensors(station));
        self.sensors
            .get(&station)
            .cloned()
            .ok_or_else(|| not_found(format!("sensors of station {station}")))
    }

    async fn measurements(&self, sensor: SensorId) -> Result<MeasurementSeries, FetchError> {
        self.record(Request::Measurements(sensor));
        if let Some(gate) = self.gates.get(&sensor) {
            gate.notified().await;
        }
        if let Some(delay) = self.delays.get(&sensor) {
            tokio::time::sleep(*delay).await;
        }
        self.series
            .get(&sensor)
            .cloned()
            .ok_or_else(|| not_found(format!("sensor {sensor}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unregistered_requests_fail() {
        let mock = MockSource::new();

        assert!(mock.stations().await.is_err());
        assert!(matches!(
            mock.index(StationId(1)).await,
            Err(FetchError::Status { status: 404, .. })
        ));
        assert!(mock.sensors(StationId(1)).await.is_err());
        assert!(mock.measurements(SensorId(1)).await.is_err());
    }

    #[tokio::test]
    async fn records_requests_in_order() {
        let mock = MockSource::new().with_index(StationId(7), IndexSummary::default());

        let _ = mock.index(StationId(7)).await;
        let _ = mock.sensors(StationId(7)).await;
        let _ = mock.measurements(SensorId(70)).await;

        assert_eq!(
            mock.requests(),
            vec![
                Request::Index(StationId(7)),
                Request::Sensors(StationId(7)),
                Request::Measurements(SensorId(70)),
            ]
        );
        assert_eq!(mock.measurement_requests(), 1);
    }

    #[tokio::test]
    async fn station_list_can_be_switched_off() {
        let mock = MockSource::new().with_stations(vec![]);
        assert!(mock.stations().await.unwrap().is_empty());

        mock.set_stations(None);
        assert!(mock.stations().await.is_err());
    }
}
