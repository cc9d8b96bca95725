//! Coordinate conversion and great-circle distances.

/// Equatorial earth radius in meters, used as the radius of the sphere.
pub const EARTH_RADIUS: f64 = 6378137.0;

/// Converts an NMEA coordinate in `(d)ddmm.mmmm` encoding to decimal degrees.
#[inline]
pub fn to_decimal_degrees(raw: f64) -> f64 {
    let degrees = (raw / 100.0).floor();
    degrees + (raw - degrees * 100.0) / 60.0
}

/// Converts an NMEA coordinate to signed decimal degrees. The result is
/// negative if `hemisphere` equals `negative`, e.g. `"S"` for latitudes.
#[inline]
pub fn signed_degrees(raw: f64, hemisphere: &str, negative: &str) -> f64 {
    let degrees = to_decimal_degrees(raw);
    if hemisphere == negative {
        -degrees
    } else {
        degrees
    }
}

/// Distance in meters between two points given in decimal degrees, along
/// a great circle of a sphere with radius `EARTH_RADIUS`.
pub fn distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let lat1 = lat1.to_radians();
    let lng1 = lng1.to_radians();
    let lat2 = lat2.to_radians();
    let lng2 = lng2.to_radians();

    let half_dlat = (lat1 - lat2) / 2.0;
    let half_dlng = (lng1 - lng2) / 2.0;

    let h = half_dlat.sin().powi(2) + lat1.cos() * lat2.cos() * half_dlng.sin().powi(2);
    // rounding can push h slightly above 1 for antipodal points
    EARTH_RADIUS * 2.0 * h.sqrt().min(1.0).asin()
}
