//! Per-route output record.

use serde::Serialize;

use super::point::Point;
use super::station::Station;

/// The final per-route record, serialized directly to JSON.
///
/// `coordinates` is a closed loop in (latitude, longitude) order: the
/// first and last points are equal and no two adjacent points are equal.
/// `stations` is the route's station list with adjacent duplicates
/// collapsed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteRecord {
    pub name: String,
    pub station_start_name: String,
    pub station_stop_name: String,
    pub coordinates: Vec<Point>,
    pub stations: Vec<Station>,
}
