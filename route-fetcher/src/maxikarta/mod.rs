//! Maxikarta transit API client.
//!
//! This module provides an HTTP client for the maxikarta public-transit
//! query API and the conversion of its raw responses into domain types.
//!
//! Key characteristics of the upstream:
//! - Route geometry arrives as *unordered* polyline fragments in
//!   (longitude, latitude) order; reassembly is the geometry pipeline's
//!   job.
//! - Station records are flat `{lat, lon, name}` objects; any field may
//!   be absent on malformed records.
//! - There is no authentication; the API only expects polite request
//!   pacing (handled by the binary's inter-route sleep).

mod client;
mod convert;
mod error;
mod types;

pub use client::{MaxikartaClient, MaxikartaConfig};
pub use convert::{ConvertError, build_route_record, extract_stations, fragments_from_geometry};
pub use error::FetchError;
pub use types::{
    GeometryDto, RouteGeometryResponse, RouteSummaryDto, RoutesResponse, StationDto,
    StationsResponse,
};
