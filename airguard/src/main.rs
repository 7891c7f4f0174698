use std::sync::Arc;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use airguard::details::{Completion, DetailAggregator};
use airguard::domain::Coordinates;
use airguard::gios::{GiosClient, GiosConfig};
use airguard::history::HistoryFetcher;
use airguard::registry::StationRegistry;

/// Default location: central Warsaw.
const DEFAULT_LAT: f64 = 52.2297;
const DEFAULT_LON: f64 = 21.0122;

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, "Ignoring unparsable environment variable");
            default
        }),
        Err(_) => default,
    }
}

/// How many stations to show; asking for none still shows the nearest.
fn at_least_one(count: usize) -> usize {
    if count == 0 {
        warn!("AIRGUARD_NEAREST is 0, showing the nearest station anyway");
    }
    count.max(1)
}

fn format_value(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.1}"))
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let location = Coordinates::new(
        env_or("AIRGUARD_LAT", DEFAULT_LAT),
        env_or("AIRGUARD_LON", DEFAULT_LON),
    );
    let nearest_count = at_least_one(env_or("AIRGUARD_NEAREST", 1));

    let client = match GiosClient::new(GiosConfig::from_env()) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            error!(error = %e, "Failed to create GIOŚ client");
            std::process::exit(1);
        }
    };
    info!(base_url = client.base_url(), "Using GIOŚ API");

    let registry = StationRegistry::new();
    if registry.load_all(client.as_ref()).await.is_err() {
        error!("No station list, nothing to show");
        std::process::exit(1);
    }

    let nearest = registry.nearest_n(location, nearest_count).await;
    if nearest.is_empty() {
        error!("No station with usable coordinates");
        std::process::exit(1);
    }

    let aggregator = DetailAggregator::new(Arc::clone(&client), registry.clone());
    let ids: Vec<_> = nearest.iter().map(|s| s.id).collect();
    let outcomes = aggregator.fetch_details_many(&ids).await;

    for outcome in &outcomes {
        let Some(station) = registry.get(outcome.station).await else {
            continue;
        };
        let distance = station
            .coordinates()
            .map(|c| c.distance_km(&location))
            .unwrap_or_default();
        let e = &station.enrichment;

        println!("{} ({}, {:.1} km)", station.name, station.city.name, distance);
        println!(
            "  index: {}  PM10: {} ({})  PM2.5: {} ({})",
            e.overall_index.as_deref().unwrap_or("-"),
            format_value(e.pm10),
            e.pm10_index.as_deref().unwrap_or("-"),
            format_value(e.pm25),
            e.pm25_index.as_deref().unwrap_or("-"),
        );
        if outcome.completion == Completion::SensorsUnavailable {
            println!("  (sensor list unavailable)");
        }
    }

    let history = HistoryFetcher::new(client);
    match history.fetch_station_history(ids[0]).await {
        Ok(h) => {
            let count = |r: &Option<Vec<_>>| r.as_ref().map_or(0, Vec::len);
            println!(
                "History: {} PM10 readings, {} PM2.5 readings",
                count(&h.pm10),
                count(&h.pm25)
            );
        }
        Err(e) => warn!(error = %e, "Failed to fetch history"),
    }
}
