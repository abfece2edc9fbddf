//! Route type table.

use std::fmt;

/// Transit mode of a route, as encoded by the upstream catalogue.
///
/// The upstream identifies modes by numeric codes; routes with codes
/// outside this table are not fetchable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteType {
    Bus,
    Trolleybus,
    MinibusTaxi,
    Tram,
}

/// Route types the fetcher actually downloads.
pub const FETCHED_ROUTE_TYPES: &[RouteType] = &[RouteType::Bus];

impl RouteType {
    /// Look up a route type by its upstream numeric code.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Self::Bus),
            2 => Some(Self::Trolleybus),
            3 => Some(Self::MinibusTaxi),
            10 => Some(Self::Tram),
            _ => None,
        }
    }

    /// The upstream numeric code for this route type.
    pub fn code(self) -> u32 {
        match self {
            Self::Bus => 1,
            Self::Trolleybus => 2,
            Self::MinibusTaxi => 3,
            Self::Tram => 10,
        }
    }

    /// The output directory name for routes of this type.
    pub fn dir_name(self) -> &'static str {
        match self {
            Self::Bus => "bus",
            Self::Trolleybus => "trolleybus",
            Self::MinibusTaxi => "minibus_taxi",
            Self::Tram => "tram",
        }
    }

    /// Whether routes of this type are fetched.
    pub fn is_fetched(self) -> bool {
        FETCHED_ROUTE_TYPES.contains(&self)
    }
}

impl fmt::Display for RouteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}
