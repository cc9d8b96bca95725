//! Records combining the latest values of several sentences.
//!
//! Records are built from the state of a [Gnss](../gnss/struct.Gnss.html)
//! session when asked for and are not updated afterwards. Fields whose
//! sentence has not been seen yet are `None`.

/// Position fix, mostly from GGA.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PositionFix {
    /// UTC time of day as `hhmmss.sss`.
    pub utc: Option<f64>,
    /// Latitude in decimal degrees.
    /// A positive value indicates that the coordinate is in the northern hemisphere.
    /// A negative value indicates that the coordinate is in the southern hemisphere.
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees.
    /// A positive value indicates that the coordinate is in the eastern hemisphere.
    /// A negative value indicates that the coordinate is in the western hemisphere.
    pub longitude: Option<f64>,
    /// Horizontal dilution of precision.
    pub hdr: Option<f64>,
    /// Number of satellites in use.
    pub satellite_count: Option<i64>,
}

/// Course and speed over ground, from VTG.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Velocity {
    /// Track made good, degrees true.
    pub ttmg: Option<f64>,
    /// Track made good, degrees magnetic.
    pub mtmg: Option<f64>,
    /// Ground speed in knots.
    pub gsk: Option<f64>,
    /// Ground speed in km/h.
    pub gskph: Option<f64>,
}

/// Recommended minimum data, mostly from RMC.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecommendedMinimum {
    pub utc: Option<f64>,
    /// `A` if the data is valid, `V` otherwise.
    pub status: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Ground speed in knots.
    pub gsk: Option<f64>,
    /// Track made good, degrees true.
    pub ttmg: Option<f64>,
    /// Date as `ddmmyy`.
    pub date: Option<i64>,
}

/// Time, date and local zone from ZDA, as plain numbers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimeAndDate {
    pub utc: Option<f64>,
    pub day: Option<i64>,
    pub month: Option<i64>,
    pub year: Option<i64>,
    pub tzone_h: Option<i64>,
    pub tzone_m: Option<i64>,
}
