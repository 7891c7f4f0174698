//! Sensors and pollutant classification.

use std::fmt;

use super::ids::{SensorId, StationId};

/// Pollutants the details pipeline reads a current value for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pollutant {
    Pm10,
    Pm25,
}

impl Pollutant {
    /// The upstream parameter formula identifying this pollutant.
    pub fn formula(self) -> &'static str {
        match self {
            Pollutant::Pm10 => "PM10",
            Pollutant::Pm25 => "PM2.5",
        }
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.formula())
    }
}

/// What a sensor measures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorParam {
    /// Human-readable name, e.g. "pył zawieszony PM10".
    pub name: String,
    /// Formula code, e.g. "PM10", "PM2.5", "NO2".
    pub formula: String,
    pub code: String,
    pub id: i64,
}

/// A single instrument attached to a station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sensor {
    pub id: SensorId,
    pub station_id: StationId,
    pub param: SensorParam,
}

impl Sensor {
    /// Classify the sensor by exact formula match.
    pub fn pollutant(&self) -> Option<Pollutant> {
        [Pollutant::Pm10, Pollutant::Pm25]
            .into_iter()
            .find(|p| self.param.formula == p.formula())
    }
}

/// First sensor in `sensors` measuring `pollutant`, if any.
///
/// Duplicates are not expected upstream; if they occur the earliest wins.
pub fn select_sensor(sensors: &[Sensor], pollutant: Pollutant) -> Option<&Sensor> {
    sensors.iter().find(|s| s.pollutant() == Some(pollutant))
}
