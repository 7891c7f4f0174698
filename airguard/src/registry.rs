//! Station registry.
//!
//! Holds every known station in one arena keyed by id. The list view is an
//! ordering of ids into that arena, so the list and the lookup can never
//! disagree about a station's enrichment fields.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{RwLock, watch};
use tracing::{debug, info, warn};

use crate::domain::{Coordinates, EnrichmentUpdate, Station, StationId};
use crate::gios::{AirQualitySource, FetchError};

#[derive(Debug, Default)]
struct Arena {
    /// Station ids in upstream list order.
    order: Vec<StationId>,
    by_id: HashMap<StationId, Station>,
}

impl Arena {
    fn build(stations: Vec<Station>) -> Self {
        let mut arena = Arena {
            order: Vec::with_capacity(stations.len()),
            by_id: HashMap::with_capacity(stations.len()),
        };
        for station in stations {
            if arena.by_id.contains_key(&station.id) {
                warn!(station = %station.id, "Duplicate station id in list, keeping first");
                continue;
            }
            arena.order.push(station.id);
            arena.by_id.insert(station.id, station);
        }
        arena
    }
}

/// Thread-safe station registry.
///
/// Cloning is cheap and every clone shares the same stations. Enrichment
/// is written only through [`StationRegistry::apply`], which takes the write
/// lock, so there is a single writer at a time.
#[derive(Clone)]
pub struct StationRegistry {
    inner: Arc<RwLock<Arena>>,
    revision: Arc<watch::Sender<u64>>,
}

impl StationRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            inner: Arc::new(RwLock::new(Arena::default())),
            revision: Arc::new(revision),
        }
    }

    /// Fetch the full station list and replace the registry contents.
    ///
    /// On failure the current contents are kept and the error is returned.
    pub async fn load_all<S: AirQualitySource>(&self, source: &S) -> Result<usize, FetchError> {
        match source.stations().await {
            Ok(stations) => {
                let count = self.replace(stations).await;
                info!(count, "Loaded station list");
                Ok(count)
            }
            Err(e) => {
                warn!(error = %e, "Failed to load station list, keeping previous stations");
                Err(e)
            }
        }
    }

    /// Atomically replace both the list and the lookup.
    ///
    /// Returns the number of stations now held.
    pub async fn replace(&self, stations: Vec<Station>) -> usize {
        let arena = Arena::build(stations);
        let count = arena.order.len();

        let mut guard = self.inner.write().await;
        *guard = arena;
        drop(guard);

        self.bump();
        count
    }

    /// Look up a station by id.
    pub async fn get(&self, id: StationId) -> Option<Station> {
        let guard = self.inner.read().await;
        guard.by_id.get(&id).cloned()
    }

    /// All stations in upstream order.
    pub async fn stations(&self) -> Vec<Station> {
        let guard = self.inner.read().await;
        guard
            .order
            .iter()
            .filter_map(|id| guard.by_id.get(id).cloned())
            .collect()
    }

    /// Get the number of stations in the registry.
    pub async fn len(&self) -> usize {
        let guard = self.inner.read().await;
        guard.order.len()
    }

    /// Check if the registry is empty.
    pub async fn is_empty(&self) -> bool {
        let guard = self.inner.read().await;
        guard.order.is_empty()
    }

    /// Write enrichment fields of one station.
    ///
    /// Returns `false` if the station is not (or no longer) in the registry.
    /// An empty update changes nothing and doesn't signal subscribers.
    pub async fn apply(&self, id: StationId, update: &EnrichmentUpdate) -> bool {
        let mut guard = self.inner.write().await;
        let Some(station) = guard.by_id.get_mut(&id) else {
            return false;
        };
        if update.is_empty() {
            return true;
        }
        station.enrichment.apply(update);
        drop(guard);

        debug!(station = %id, ?update, "Applied enrichment");
        self.bump();
        true
    }

    /// Remove a station from both views.
    pub async fn remove(&self, id: StationId) -> Option<Station> {
        let mut guard = self.inner.write().await;
        let removed = guard.by_id.remove(&id)?;
        guard.order.retain(|s| *s != id);
        drop(guard);

        self.bump();
        Some(removed)
    }

    /// Station nearest to `point`.
    ///
    /// Stations whose coordinates don't parse are never chosen.
    pub async fn nearest(&self, point: Coordinates) -> Option<Station> {
        self.nearest_n(point, 1).await.into_iter().next()
    }

    /// Up to `n` stations ordered by distance to `point`, nearest first.
    pub async fn nearest_n(&self, point: Coordinates, n: usize) -> Vec<Station> {
        let guard = self.inner.read().await;
        let mut ranked: Vec<(f64, &Station)> = guard
            .order
            .iter()
            .filter_map(|id| guard.by_id.get(id))
            .filter_map(|s| s.coordinates().map(|c| (c.distance_km(&point), s)))
            .collect();
        ranked.sort_by(|a, b| a.0.total_cmp(&b.0));

        ranked
            .into_iter()
            .take(n)
            .map(|(_, s)| s.clone())
            .collect()
    }

    /// Subscribe to changes.
    ///
    /// The value is a revision counter that advances after every load,
    /// removal and applied enrichment.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    fn bump(&self) {
        self.revision.send_modify(|r| *r += 1);
    }
}

impl Default for StationRegistry {
    fn default() -> Self {
        Self::new()
    }
}
