pub const AIRPORT_ID: &str = "airport-id";
pub const AIRPORT_NAME: &str = "airport-name";
pub const LATITUDE: &str = "latitude";
pub const LONGITUDE: &str = "longitude";

pub const ROUTE_FROM: &str = "from";
pub const ROUTE_TO: &str = "to";

pub const AIRPORT_COLUMNS: [&str; 4] = [AIRPORT_ID, AIRPORT_NAME, LATITUDE, LONGITUDE];
pub const ROUTE_COLUMNS: [&str; 2] = [ROUTE_FROM, ROUTE_TO];
