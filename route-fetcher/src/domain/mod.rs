//! Domain types for route processing.
//!
//! This module contains the core domain model: geometry primitives,
//! validated route fragments, the route-type table, and the output
//! record. Types enforce their invariants at construction time, so code
//! that receives these types can trust their validity.

mod fragment;
mod point;
mod record;
mod route_type;
mod station;

pub use fragment::{EmptyFragment, Fragment};
pub use point::Point;
pub use record::RouteRecord;
pub use route_type::{FETCHED_ROUTE_TYPES, RouteType};
pub use station::Station;
