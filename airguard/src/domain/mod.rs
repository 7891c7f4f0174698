//! Domain types for the air-quality core.
//!
//! These are the validated shapes the rest of the crate works with. Wire
//! formats live in `gios` and are converted into these types at the edge.

mod geo;
mod ids;
mod index;
mod measurement;
mod sensor;
mod station;

pub use geo::Coordinates;
pub use ids::{SensorId, StationId};
pub use index::IndexSummary;
pub use measurement::{MeasurementSeries, Reading};
pub use sensor::{Pollutant, Sensor, SensorParam, select_sensor};
pub use station::{City, Commune, Enrichment, EnrichmentUpdate, Station};
