//! The data-source seam the aggregation core is written against.

use std::future::Future;

use crate::domain::{IndexSummary, MeasurementSeries, Sensor, SensorId, Station, StationId};

use super::client::GiosClient;
use super::error::FetchError;
use super::types::{IndexResponseDto, SensorDataDto, SensorDto, StationDto};

/// Trait for providing air-quality data.
///
/// This abstraction lets the registry and pipelines run against the live
/// API or an in-memory source in tests.
pub trait AirQualitySource: Send + Sync {
    /// Every known station, without enrichment.
    fn stations(&self) -> impl Future<Output = Result<Vec<Station>, FetchError>> + Send;

    /// Current index summary for a station.
    fn index(
        &self,
        station: StationId,
    ) -> impl Future<Output = Result<IndexSummary, FetchError>> + Send;

    /// Sensors attached to a station.
    fn sensors(
        &self,
        station: StationId,
    ) -> impl Future<Output = Result<Vec<Sensor>, FetchError>> + Send;

    /// Measurement series for a sensor, in source order.
    fn measurements(
        &self,
        sensor: SensorId,
    ) -> impl Future<Output = Result<MeasurementSeries, FetchError>> + Send;
}

impl AirQualitySource for GiosClient {
    async fn stations(&self) -> Result<Vec<Station>, FetchError> {
        let dtos: Vec<StationDto> = self.fetch_json("/station/findAll").await?;
        Ok(dtos.into_iter().map(Station::from).collect())
    }

    async fn index(&self, station: StationId) -> Result<IndexSummary, FetchError> {
        let dto: IndexResponseDto = self
            .fetch_json(&format!("/aqindex/getIndex/{station}"))
            .await?;
        Ok(dto.into())
    }

    async fn sensors(&self, station: StationId) -> Result<Vec<Sensor>, FetchError> {
        let dtos: Vec<SensorDto> = self
            .fetch_json(&format!("/station/sensors/{station}"))
            .await?;
        Ok(dtos.into_iter().map(Sensor::from).collect())
    }

    async fn measurements(&self, sensor: SensorId) -> Result<MeasurementSeries, FetchError> {
        let dto: SensorDataDto = self.fetch_json(&format!("/data/getData/{sensor}")).await?;
        Ok(dto.into())
    }
}
