//! Monitoring station records and their enrichment fields.

use super::geo::Coordinates;
use super::ids::StationId;

/// Administrative area a station sits in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commune {
    pub commune_name: String,
    pub district_name: String,
    pub province_name: String,
}

/// City a station belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    pub id: i64,
    pub name: String,
    pub commune: Commune,
}

/// Air-quality data attached to a station after the base list is loaded.
///
/// Every field starts unset and is filled in by a details fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Enrichment {
    /// Overall index label, e.g. "Dobry".
    pub overall_index: Option<String>,
    pub pm10_index: Option<String>,
    pub pm25_index: Option<String>,
    /// Latest PM10 concentration (µg/m³).
    pub pm10: Option<f64>,
    /// Latest PM2.5 concentration (µg/m³).
    pub pm25: Option<f64>,
}

/// The subset of enrichment fields obtained by one details fetch.
///
/// `None` means "no new data", not "clear the field".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrichmentUpdate {
    pub overall_index: Option<String>,
    pub pm10_index: Option<String>,
    pub pm25_index: Option<String>,
    pub pm10: Option<f64>,
    pub pm25: Option<f64>,
}

impl EnrichmentUpdate {
    /// True if the update carries no data at all.
    pub fn is_empty(&self) -> bool {
        self.overall_index.is_none()
            && self.pm10_index.is_none()
            && self.pm25_index.is_none()
            && self.pm10.is_none()
            && self.pm25.is_none()
    }
}

impl Enrichment {
    /// Write the fields present in `update`, keeping the others.
    pub fn apply(&mut self, update: &EnrichmentUpdate) {
        if let Some(label) = &update.overall_index {
            self.overall_index = Some(label.clone());
        }
        if let Some(label) = &update.pm10_index {
            self.pm10_index = Some(label.clone());
        }
        if let Some(label) = &update.pm25_index {
            self.pm25_index = Some(label.clone());
        }
        if let Some(value) = update.pm10 {
            self.pm10 = Some(value);
        }
        if let Some(value) = update.pm25 {
            self.pm25 = Some(value);
        }
    }
}

/// A fixed air-quality monitoring location.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    /// Latitude as the decimal string sent upstream.
    pub latitude: String,
    /// Longitude as the decimal string sent upstream.
    pub longitude: String,
    pub address: Option<String>,
    pub city: City,
    pub enrichment: Enrichment,
}

impl Station {
    /// Parsed coordinates, or `None` if upstream sent something unparsable.
    pub fn coordinates(&self) -> Option<Coordinates> {
        Coordinates::parse(&self.latitude, &self.longitude)
    }
}
