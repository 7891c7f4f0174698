//! Station enrichment.
//!
//! Fetches the index summary, the sensor list and the current PM10/PM2.5
//! readings of one station and merges them into the registry's record.

mod aggregator;
mod config;


pub use aggregator::{Completion, DetailAggregator, DetailOutcome};
pub use config::DetailConfig;
