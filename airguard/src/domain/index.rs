//! Air-quality index summary for a station.

/// Categorical index ratings computed upstream for one station.
///
/// Each label is absent when upstream has no current index for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexSummary {
    pub overall: Option<String>,
    pub pm10: Option<String>,
    pub pm25: Option<String>,
}
