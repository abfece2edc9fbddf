//! Route geometry pipeline.
//!
//! Reassembles a route's unordered polyline fragments into one closed,
//! deduplicated coordinate loop:
//!
//! fragments -> [`chain::chain_fragments`] -> [`normalize::normalize`]
//! -> [`dedup::close`] -> [`dedup::dedup_adjacent`]
//!
//! All stages are pure, synchronous, and allocate only their outputs;
//! independent routes can be processed in parallel without coordination.

pub mod chain;
pub mod dedup;
pub mod error;
pub mod normalize;

pub use chain::{chain_fragments, chains};
pub use dedup::{close, dedup_adjacent};
pub use error::GeometryError;
pub use normalize::normalize;

use crate::domain::{Fragment, Point};

/// Run the full geometry pipeline over one route's fragments.
///
/// The result is a closed loop in (latitude, longitude) order: the
/// first and last points are equal and no two adjacent points are
/// equal.
///
/// The chaining stage assumes the fragments encode a single loop; an
/// input holding several disjoint loops is silently flattened into one
/// (a known limitation inherited from the upstream data contract —
/// see [`chain_fragments`]).
///
/// # Errors
///
/// Returns [`GeometryError::EmptyRoute`] when no points survive
/// normalization (i.e. the fragment set is empty).
pub fn assemble(fragments: Vec<Fragment>) -> Result<Vec<Point>, GeometryError> {
    let chained = chain_fragments(fragments);
    let points = normalize(&chained);
    let closed = close(points)?;
    Ok(dedup_adjacent(closed))
}
