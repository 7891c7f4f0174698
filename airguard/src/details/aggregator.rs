//! The fetch-and-merge pipeline for one station.
//!
//! Steps, in order:
//! 1. index summary (a failure just means no index data),
//! 2. sensor list (a failure means no readings are fetched),
//! 3. latest PM10 and PM2.5 readings, fetched concurrently,
//! 4. merge into the registry, skipped if the station has gone.
//!
//! No step fails the pipeline: every error degrades to "field unchanged".
//! Two pipelines for the same station may run at once; whichever merges
//! last wins.

use std::sync::Arc;

use futures::future::{OptionFuture, join_all};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::domain::{
    EnrichmentUpdate, IndexSummary, Pollutant, Sensor, SensorId, StationId, select_sensor,
};
use crate::gios::AirQualitySource;
use crate::registry::StationRegistry;

use super::config::DetailConfig;

/// How a details pipeline ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Sensors were listed and everything obtained was merged.
    Merged,
    /// The sensor list could not be fetched; only index data was merged.
    SensorsUnavailable,
    /// The station left the registry before the merge; nothing was written.
    StationGone,
}

/// Result of one details pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailOutcome {
    pub station: StationId,
    pub completion: Completion,
    /// The data the pipeline obtained (written unless the station was gone).
    pub obtained: EnrichmentUpdate,
}

/// Enriches registry stations with index and PM data.
pub struct DetailAggregator<S> {
    source: Arc<S>,
    registry: StationRegistry,
    config: DetailConfig,
}

impl<S> Clone for DetailAggregator<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            registry: self.registry.clone(),
            config: self.config.clone(),
        }
    }
}

impl<S: AirQualitySource + 'static> DetailAggregator<S> {
    /// Create an aggregator writing into `registry`.
    pub fn new(source: Arc<S>, registry: StationRegistry) -> Self {
        Self {
            source,
            registry,
            config: DetailConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: DetailConfig) -> Self {
        self.config = config;
        self
    }

    /// The registry enrichment is written into.
    pub fn registry(&self) -> &StationRegistry {
        &self.registry
    }

    /// Run the full pipeline for one station.
    ///
    /// Always completes; the outcome says how far it got.
    pub async fn fetch_details(&self, station: StationId) -> DetailOutcome {
        let index = self.fetch_index(station).await;
        let sensors = self.fetch_sensors(station).await;

        let mut obtained = EnrichmentUpdate::default();
        if let Some(index) = index {
            obtained.overall_index = index.overall;
            obtained.pm10_index = index.pm10;
            obtained.pm25_index = index.pm25;
        }

        let completion = match sensors {
            Some(sensors) => {
                let (pm10, pm25) = self.latest_pm(&sensors).await;
                obtained.pm10 = pm10;
                obtained.pm25 = pm25;
                Completion::Merged
            }
            None => Completion::SensorsUnavailable,
        };

        let completion = if self.registry.apply(station, &obtained).await {
            completion
        } else {
            debug!(%station, "Station no longer in registry, dropping details");
            Completion::StationGone
        };

        DetailOutcome {
            station,
            completion,
            obtained,
        }
    }

    /// Run the pipeline in the background.
    ///
    /// The handle resolves once with the outcome. Dropping it does not stop
    /// the pipeline; `JoinHandle::abort` does.
    pub fn spawn_fetch_details(&self, station: StationId) -> JoinHandle<DetailOutcome> {
        let this = self.clone();
        tokio::spawn(async move { this.fetch_details(station).await })
    }

    /// Run the pipeline in the background and call `on_done` when finished.
    pub fn fetch_details_with<F>(&self, station: StationId, on_done: F)
    where
        F: FnOnce(DetailOutcome) + Send + 'static,
    {
        let this = self.clone();
        tokio::spawn(async move {
            let outcome = this.fetch_details(station).await;
            on_done(outcome);
        });
    }

    /// Enrich several stations, `batch_size` at a time.
    ///
    /// Outcomes are returned in the order of `stations`.
    pub async fn fetch_details_many(&self, stations: &[StationId]) -> Vec<DetailOutcome> {
        let mut outcomes = Vec::with_capacity(stations.len());

        for batch in stations.chunks(self.config.batch_size.max(1)) {
            let futures: Vec<_> = batch.iter().map(|id| self.fetch_details(*id)).collect();
            outcomes.extend(join_all(futures).await);
        }

        outcomes
    }

    async fn fetch_index(&self, station: StationId) -> Option<IndexSummary> {
        match self.source.index(station).await {
            Ok(index) => Some(index),
            Err(e) => {
                debug!(%station, error = %e, "No index summary");
                None
            }
        }
    }

    async fn fetch_sensors(&self, station: StationId) -> Option<Vec<Sensor>> {
        match self.source.sensors(station).await {
            Ok(sensors) => Some(sensors),
            Err(e) => {
                debug!(%station, error = %e, "Failed to fetch sensors, skipping readings");
                None
            }
        }
    }

    /// Latest PM10 and PM2.5 values; both fetches finish before this returns.
    async fn latest_pm(&self, sensors: &[Sensor]) -> (Option<f64>, Option<f64>) {
        let pm10: OptionFuture<_> = select_sensor(sensors, Pollutant::Pm10)
            .map(|s| self.latest_reading(s.id))
            .into();
        let pm25: OptionFuture<_> = select_sensor(sensors, Pollutant::Pm25)
            .map(|s| self.latest_reading(s.id))
            .into();

        let (pm10, pm25) = tokio::join!(pm10, pm25);
        (pm10.flatten(), pm25.flatten())
    }

    async fn latest_reading(&self, sensor: SensorId) -> Option<f64> {
        match self.source.measurements(sensor).await {
            Ok(series) => series.latest_value(),
            Err(e) => {
                debug!(%sensor, error = %e, "Failed to fetch readings");
                None
            }
        }
    }
}
