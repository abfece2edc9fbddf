//! Transit route geometry fetcher.
//!
//! Downloads public-transit routes from the maxikarta API, reassembles
//! each route's unordered polyline fragments into a single closed loop,
//! and writes one JSON record per route.

pub mod domain;
pub mod geometry;
pub mod maxikarta;
pub mod output;
