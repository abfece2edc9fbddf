//! Conversion from maxikarta DTOs to domain types.
//!
//! This module validates raw API responses and assembles the per-route
//! output record, running the geometry pipeline along the way.

use crate::domain::{Fragment, Point, RouteRecord, Station};
use crate::geometry::{self, GeometryError, dedup_adjacent};

use super::types::{GeometryDto, RouteSummaryDto, StationDto};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// A record is missing a required field
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The route geometry could not be assembled
    #[error("invalid route geometry: {0}")]
    Geometry(#[from] GeometryError),
}

/// Validate raw station records into the deduplicated station list.
///
/// Input order is preserved; adjacent records with the same position
/// *and* name collapse to one. A record missing any field fails the
/// whole conversion — this layer does not attempt partial recovery.
pub fn extract_stations(raw: &[StationDto]) -> Result<Vec<Station>, ConvertError> {
    let stations = raw
        .iter()
        .map(|dto| {
            let lat = dto.lat.ok_or(ConvertError::MissingField("lat"))?;
            let lon = dto.lon.ok_or(ConvertError::MissingField("lon"))?;
            let name = dto
                .name
                .as_deref()
                .ok_or(ConvertError::MissingField("name"))?;
            Ok(Station::new(lat, lon, name))
        })
        .collect::<Result<Vec<_>, ConvertError>>()?;

    Ok(dedup_adjacent(stations))
}

/// Build fragments from the raw geometry payload.
///
/// Zero-point segments are dropped: they carry no coordinates, and the
/// `Fragment` type requires at least one point.
pub fn fragments_from_geometry(geom: &GeometryDto) -> Vec<Fragment> {
    geom.coordinates
        .iter()
        .filter_map(|points| Fragment::new(points.clone()).ok())
        .collect()
}

/// Assemble the output record for one route.
///
/// Runs the geometry pipeline over the route's fragments and pairs the
/// resulting closed loop with the deduplicated station list and the
/// catalogue metadata.
pub fn build_route_record(
    summary: &RouteSummaryDto,
    geom: &GeometryDto,
    raw_stations: &[StationDto],
) -> Result<RouteRecord, ConvertError> {
    let station_start_name = summary
        .station_start_name
        .clone()
        .ok_or(ConvertError::MissingField("station_start_name"))?;
    let station_stop_name = summary
        .station_stop_name
        .clone()
        .ok_or(ConvertError::MissingField("station_stop_name"))?;

    let coordinates = geometry::assemble(fragments_from_geometry(geom))?;
    let stations = extract_stations(raw_stations)?;

    Ok(RouteRecord {
        name: summary.name.clone(),
        station_start_name,
        station_stop_name,
        coordinates,
        stations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station_dto(lat: f64, lon: f64, name: &str) -> StationDto {
        StationDto {
            lat: Some(lat),
            lon: Some(lon),
            name: Some(name.to_string()),
        }
    }

    fn summary() -> RouteSummaryDto {
        RouteSummaryDto {
            route_id: 42,
            type_code: 1,
            name: "205".to_string(),
            station_start_name: Some("Park Pobedy".to_string()),
            station_stop_name: Some("Kievsky Vokzal".to_string()),
        }
    }

    fn geom(segments: &[&[(f64, f64)]]) -> GeometryDto {
        GeometryDto {
            coordinates: segments
                .iter()
                .map(|seg| seg.iter().map(|&(x, y)| Point::new(x, y)).collect())
                .collect(),
        }
    }

    #[test]
    fn extract_stations_preserves_order_and_dedups() {
        let raw = vec![
            station_dto(55.7, 37.5, "A"),
            station_dto(55.7, 37.5, "A"),
            station_dto(55.8, 37.6, "B"),
            station_dto(55.7, 37.5, "A"),
        ];

        let stations = extract_stations(&raw).unwrap();
        assert_eq!(
            stations,
            vec![
                Station::new(55.7, 37.5, "A"),
                Station::new(55.8, 37.6, "B"),
                Station::new(55.7, 37.5, "A"),
            ]
        );
    }

    #[test]
    fn extract_stations_keeps_same_position_different_name() {
        let raw = vec![station_dto(55.7, 37.5, "A"), station_dto(55.7, 37.5, "B")];
        assert_eq!(extract_stations(&raw).unwrap().len(), 2);
    }

    #[test]
    fn extract_stations_missing_field_fails() {
        let mut missing_lon = station_dto(55.7, 37.5, "A");
        missing_lon.lon = None;

        let result = extract_stations(&[station_dto(55.8, 37.6, "B"), missing_lon]);
        assert_eq!(result, Err(ConvertError::MissingField("lon")));

        let result = extract_stations(&[StationDto::default()]);
        assert_eq!(result, Err(ConvertError::MissingField("lat")));
    }

    #[test]
    fn extract_stations_empty_input() {
        assert_eq!(extract_stations(&[]).unwrap(), Vec::new());
    }

    #[test]
    fn fragments_drop_empty_segments() {
        let g = geom(&[&[(1.0, 1.0), (0.0, 0.0)], &[], &[(2.0, 3.0), (1.0, 1.0)]]);
        let fragments = fragments_from_geometry(&g);
        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[0].first(), Point::new(1.0, 1.0));
    }

    #[test]
    fn build_record_assembles_loop_and_stations() {
        let g = geom(&[
            &[(1.0, 1.0), (0.0, 0.0)],
            &[(2.0, 3.0), (1.0, 1.0)],
            &[(4.0, 4.0), (2.0, 3.0)],
            &[(3.0, 1.0), (4.0, 4.0)],
            &[(0.0, 0.0), (3.0, 1.0)],
        ]);
        let raw_stations = vec![station_dto(0.0, 0.0, "Start"), station_dto(4.0, 4.0, "Mid")];

        let record = build_route_record(&summary(), &g, &raw_stations).unwrap();
        assert_eq!(record.name, "205");
        assert_eq!(record.station_start_name, "Park Pobedy");
        assert_eq!(record.station_stop_name, "Kievsky Vokzal");
        assert_eq!(record.coordinates.first(), record.coordinates.last());
        assert_eq!(record.coordinates.len(), 6);
        assert_eq!(record.stations.len(), 2);
    }

    #[test]
    fn build_record_empty_geometry_fails() {
        let result = build_route_record(&summary(), &geom(&[]), &[]);
        assert_eq!(
            result,
            Err(ConvertError::Geometry(GeometryError::EmptyRoute))
        );
    }

    #[test]
    fn build_record_missing_endpoint_names_fails() {
        let mut s = summary();
        s.station_stop_name = None;
        let g = geom(&[&[(1.0, 1.0), (0.0, 0.0)]]);

        let result = build_route_record(&s, &g, &[]);
        assert_eq!(
            result,
            Err(ConvertError::MissingField("station_stop_name"))
        );
    }
}
