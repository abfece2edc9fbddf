//! Geometry point type.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// A 2-D coordinate pair.
///
/// The upstream geometry source delivers points as `[x, y]` arrays in
/// (longitude, latitude) order; the output record stores them swapped,
/// as (latitude, longitude). `Point` itself is convention-agnostic —
/// [`Point::swapped`] performs the flip.
///
/// Equality is exact `f64` value equality. This is deliberate: it
/// drives both fragment endpoint matching and adjacent-duplicate
/// collapsing, and the upstream serves identical coordinate values at
/// shared endpoints, so no epsilon is involved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the point with its coordinates exchanged.
    pub const fn swapped(self) -> Self {
        Self {
            x: self.y,
            y: self.x,
        }
    }
}

impl Serialize for Point {
    /// Serializes as a 2-element array, matching the upstream wire format.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.x, self.y).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Point {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (x, y) = <(f64, f64)>::deserialize(deserializer)?;
        Ok(Self { x, y })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_exact() {
        assert_eq!(Point::new(1.0, 2.0), Point::new(1.0, 2.0));
        assert_ne!(Point::new(1.0, 2.0), Point::new(1.0, 2.0 + 1e-12));
    }

    #[test]
    fn swapped_exchanges_coordinates() {
        let p = Point::new(37.6, 55.7);
        assert_eq!(p.swapped(), Point::new(55.7, 37.6));
        assert_eq!(p.swapped().swapped(), p);
    }

    #[test]
    fn serializes_as_array() {
        let json = serde_json::to_string(&Point::new(37.6, 55.7)).unwrap();
        assert_eq!(json, "[37.6,55.7]");
    }

    #[test]
    fn deserializes_from_array() {
        let p: Point = serde_json::from_str("[37.6, 55.7]").unwrap();
        assert_eq!(p, Point::new(37.6, 55.7));
    }

    #[test]
    fn rejects_wrong_arity() {
        assert!(serde_json::from_str::<Point>("[1.0]").is_err());
        assert!(serde_json::from_str::<Point>("[1.0, 2.0, 3.0]").is_err());
    }
}
