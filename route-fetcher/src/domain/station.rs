//! Station type.

use serde::ser::{Serialize, Serializer};

/// A station on a route: a position and a display name.
///
/// Equality covers the whole (position, name) pair — two stations at the
/// same coordinates but with different names are distinct, and the
/// adjacent-duplicate collapse in station extraction keys on this full
/// equality.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub lat: f64,
    pub lon: f64,
    pub name: String,
}

impl Station {
    /// Create a new station.
    pub fn new(lat: f64, lon: f64, name: impl Into<String>) -> Self {
        Self {
            lat,
            lon,
            name: name.into(),
        }
    }
}

impl Serialize for Station {
    /// Serializes as `[[lat, lon], name]`, the pair layout of the
    /// output record's station list.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ((self.lat, self.lon), &self.name).serialize(serializer)
    }
}
