use serde::{Deserialize, Serialize};

/// One row of `airports.dat` after cleaning and coordinate coercion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportRecord {
    pub airport_id: String,
    pub airport_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl AirportRecord {
    pub fn new(
        airport_id: impl Into<String>,
        airport_name: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            airport_id: airport_id.into(),
            airport_name: airport_name.into(),
            latitude,
            longitude,
        }
    }
}

/// One row of `routes.dat`. Both ends are raw airport identifiers and may not
/// resolve to any airport.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouteRecord {
    pub from: String,
    pub to: String,
}

impl RouteRecord {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}
