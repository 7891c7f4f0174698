//! Measurement series returned for a single sensor.

use chrono::NaiveDateTime;

/// Timestamp format used by the upstream API, e.g. "2017-03-28 12:00:00".
const READING_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One point of a measurement series.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    /// Timestamp exactly as sent upstream.
    pub date: String,
    /// Measured value; `None` marks a gap in the sensor's data.
    pub value: Option<f64>,
}

impl Reading {
    /// Parse the reading's timestamp.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.date, READING_DATE_FORMAT).ok()
    }
}

/// Time-ordered readings for one sensor, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementSeries {
    /// Parameter key, e.g. "PM10".
    pub key: String,
    pub values: Vec<Reading>,
}

impl MeasurementSeries {
    /// The sensor's current value: the first present value in source order.
    ///
    /// Upstream lists the newest reading first, and the newest slots are
    /// often still empty, so this skips leading gaps.
    pub fn latest_value(&self) -> Option<f64> {
        self.values.iter().find_map(|r| r.value)
    }
}
