//! Full measurement history for plotting.
//!
//! Unlike the details pipeline, nothing here is reduced to a single value:
//! callers get every reading in source order, gaps included.

use std::sync::Arc;

use futures::future::OptionFuture;
use tracing::debug;

use crate::domain::{Pollutant, Reading, SensorId, StationId, select_sensor};
use crate::gios::{AirQualitySource, FetchError};

/// PM histories of one station.
///
/// A side is `None` when the station has no such sensor or its fetch failed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationHistory {
    pub pm10: Option<Vec<Reading>>,
    pub pm25: Option<Vec<Reading>>,
}

/// Fetches complete sensor time series.
pub struct HistoryFetcher<S> {
    source: Arc<S>,
}

impl<S> Clone for HistoryFetcher<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl<S: AirQualitySource> HistoryFetcher<S> {
    /// Create a fetcher over `source`.
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Every reading of `sensor`, in source order.
    pub async fn fetch_history(&self, sensor: SensorId) -> Result<Vec<Reading>, FetchError> {
        let series = self.source.measurements(sensor).await?;
        Ok(series.values)
    }

    /// PM10 and PM2.5 histories of a station, fetched concurrently.
    ///
    /// Fails only if the station's sensor list can't be fetched.
    pub async fn fetch_station_history(
        &self,
        station: StationId,
    ) -> Result<StationHistory, FetchError> {
        let sensors = self.source.sensors(station).await?;

        let pm10: OptionFuture<_> = select_sensor(&sensors, Pollutant::Pm10)
            .map(|s| self.history_or_none(s.id))
            .into();
        let pm25: OptionFuture<_> = select_sensor(&sensors, Pollutant::Pm25)
            .map(|s| self.history_or_none(s.id))
            .into();

        let (pm10, pm25) = tokio::join!(pm10, pm25);
        Ok(StationHistory {
            pm10: pm10.flatten(),
            pm25: pm25.flatten(),
        })
    }

    async fn history_or_none(&self, sensor: SensorId) -> Option<Vec<Reading>> {
        match self.fetch_history(sensor).await {
            Ok(readings) => Some(readings),
            Err(e) => {
                debug!(%sensor, error = %e, "Failed to fetch history");
                None
            }
        }
    }
}
