//! Configuration for the details pipeline.

/// Configuration parameters for station enrichment.
#[derive(Debug, Clone)]
pub struct DetailConfig {
    /// Maximum number of stations enriched in parallel by
    /// `fetch_details_many`.
    pub batch_size: usize,
}

impl DetailConfig {
    /// Create a new configuration with the given batch size.
    pub fn new(batch_size: usize) -> Self {
        Self { batch_size }
    }
}

impl Default for DetailConfig {
    fn default() -> Self {
        Self { batch_size: 8 }
    }
}
