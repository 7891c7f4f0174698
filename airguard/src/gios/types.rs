//! GIOŚ API response DTOs.
//!
//! These types map directly to the JSON the API returns. Fields upstream
//! sends as `null` are `Option`; unknown fields are ignored.

use serde::Deserialize;

/// Entry of `/station/findAll`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationDto {
    pub id: i64,
    pub station_name: String,
    pub gegr_lat: String,
    pub gegr_lon: String,
    pub city: CityDto,
    #[serde(default)]
    pub address_street: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CityDto {
    pub id: i64,
    pub name: String,
    pub commune: CommuneDto,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommuneDto {
    pub commune_name: String,
    pub district_name: String,
    pub province_name: String,
}

/// Response of `/aqindex/getIndex/{stationId}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexResponseDto {
    pub id: Option<i64>,
    /// Overall station index.
    pub st_index_level: Option<IndexLevelDto>,
    /// Pollutant that determined the overall index.
    pub st_index_cr_param: Option<String>,
    pub pm10_index_level: Option<IndexLevelDto>,
    pub pm25_index_level: Option<IndexLevelDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexLevelDto {
    pub id: i64,
    pub index_level_name: String,
}

/// Entry of `/station/sensors/{stationId}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorDto {
    pub id: i64,
    pub station_id: i64,
    pub param: SensorParamDto,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorParamDto {
    pub param_name: String,
    pub param_formula: String,
    pub param_code: String,
    pub id_param: i64,
}

/// Response of `/data/getData/{sensorId}`.
#[derive(Debug, Clone, Deserialize)]
pub struct SensorDataDto {
    pub key: String,
    pub values: Vec<ValueDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValueDto {
    pub date: String,
    #[serde(default)]
    pub value: Option<f64>,
}
