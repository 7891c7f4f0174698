//! Upstream identifier types.

use std::fmt;

/// Identifier of a monitoring station, assigned by the upstream source.
///
/// # Examples
///
/// ```
/// use airguard::domain::StationId;
///
/// let id = StationId(400);
/// assert_eq!(id.to_string(), "400");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(pub i64);

/// Identifier of a single sensor attached to a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SensorId(pub i64);

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for SensorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
