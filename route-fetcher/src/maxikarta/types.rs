//! Raw maxikarta API response types.
//!
//! These mirror the upstream JSON as closely as possible. Fields the
//! upstream sometimes omits are `Option`; validation into domain types
//! happens in [`super::convert`].

use serde::Deserialize;

use crate::domain::Point;

/// Response of the `routes` endpoint: the route catalogue.
#[derive(Debug, Deserialize)]
pub struct RoutesResponse {
    pub routes: Vec<RouteSummaryDto>,
}

/// One catalogue entry.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteSummaryDto {
    pub route_id: u64,
    /// Numeric route-type code; see `domain::RouteType`.
    #[serde(rename = "type")]
    pub type_code: u32,
    pub name: String,
    pub station_start_name: Option<String>,
    pub station_stop_name: Option<String>,
}

/// Response of the `route-geom` endpoint.
#[derive(Debug, Deserialize)]
pub struct RouteGeometryResponse {
    pub geom: GeometryDto,
}

/// The geometry payload: unordered polyline fragments, each a list of
/// `[lon, lat]` pairs.
#[derive(Debug, Deserialize)]
pub struct GeometryDto {
    pub coordinates: Vec<Vec<Point>>,
}

/// Response of the `stations` endpoint.
#[derive(Debug, Deserialize)]
pub struct StationsResponse {
    pub stations: Vec<StationDto>,
}

/// One raw station record. All fields are optional because malformed
/// records do occur; conversion rejects them explicitly.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StationDto {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub name: Option<String>,
}
