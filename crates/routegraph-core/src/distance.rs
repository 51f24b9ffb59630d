/// Earth radius used for every distance the pipeline emits, in statute miles.
pub const EARTH_RADIUS_MILES: f64 = 3956.0;

/// Great-circle distance between two points given in degrees, in miles.
pub fn haversine_miles(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1 = lat1.to_radians();
    let lon1 = lon1.to_radians();
    let lat2 = lat2.to_radians();
    let lon2 = lon2.to_radians();

    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}

/// Rounds half to even, then drops the fraction.
pub fn round_distance(miles: f64) -> i64 {
    miles.round_ties_even() as i64
}

/// Whole-mile distance between two points, as written to `edges.txt`.
pub fn distance_miles(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> i64 {
    round_distance(haversine_miles(lat1, lon1, lat2, lon2))
}
