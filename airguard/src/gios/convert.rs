//! Conversion from GIOŚ DTOs to domain types.

use crate::domain::{
    City, Commune, Enrichment, IndexSummary, MeasurementSeries, Reading, Sensor, SensorId,
    SensorParam, Station, StationId,
};

use super::types::{IndexResponseDto, SensorDataDto, SensorDto, StationDto};

impl From<StationDto> for Station {
    fn from(dto: StationDto) -> Self {
        Station {
            id: StationId(dto.id),
            name: dto.station_name,
            latitude: dto.gegr_lat,
            longitude: dto.gegr_lon,
            address: dto.address_street,
            city: City {
                id: dto.city.id,
                name: dto.city.name,
                commune: Commune {
                    commune_name: dto.city.commune.commune_name,
                    district_name: dto.city.commune.district_name,
                    province_name: dto.city.commune.province_name,
                },
            },
            enrichment: Enrichment::default(),
        }
    }
}

impl From<IndexResponseDto> for IndexSummary {
    fn from(dto: IndexResponseDto) -> Self {
        IndexSummary {
            overall: dto.st_index_level.map(|l| l.index_level_name),
            pm10: dto.pm10_index_level.map(|l| l.index_level_name),
            pm25: dto.pm25_index_level.map(|l| l.index_level_name),
        }
    }
}

impl From<SensorDto> for Sensor {
    fn from(dto: SensorDto) -> Self {
        Sensor {
            id: SensorId(dto.id),
            station_id: StationId(dto.station_id),
            param: SensorParam {
                name: dto.param.param_name,
                formula: dto.param.param_formula,
                code: dto.param.param_code,
                id: dto.param.id_param,
            },
        }
    }
}

impl From<SensorDataDto> for MeasurementSeries {
    fn from(dto: SensorDataDto) -> Self {
        MeasurementSeries {
            key: dto.key,
            values: dto
                .values
                .into_iter()
                .map(|v| Reading {
                    date: v.date,
                    value: v.value,
                })
                .collect(),
        }
    }
}
