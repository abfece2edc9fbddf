//! Geometry normalization.

use crate::domain::{Fragment, Point};

/// Flatten chained fragments into one point sequence in canonical
/// traversal order and (latitude, longitude) axis convention.
///
/// Each fragment's points are walked in reverse with their coordinates
/// swapped — one pass fixes both the fragment's internal direction and
/// the upstream's (lon, lat) axis order. The flattened sequence is then
/// reversed as a whole: chaining attaches fragments backwards
/// (`first(A) == last(B)`), so the concatenation comes out in reverse
/// traversal order.
///
/// Adjacent duplicates at fragment boundaries are expected here and
/// left in place; deduplication happens after loop closure.
pub fn normalize(chained: &[Fragment]) -> Vec<Point> {
    let mut points: Vec<Point> = chained
        .iter()
        .flat_map(|fragment| fragment.points().iter().rev().map(|p| p.swapped()))
        .collect();
    points.reverse();
    points
}
