//! A GNSS session: decodes NMEA lines and keeps the latest value of every
//! decoded field.

use err::ConfigError;
use fields::{Fields, Key, Satellite};
use geo;
use parser::{SentenceParser, SentenceType, TypeFilter};
use records::{PositionFix, RecommendedMinimum, TimeAndDate, Velocity};

/// Decodes NMEA lines and collects their values.
///
/// Every decoded sentence overwrites the values it carries, values of other
/// sentences are kept. A device driver owns one `Gnss` per receiver:
///
/// ```
/// use gnss_nmea::Gnss;
///
/// struct Receiver {
///     gnss: Gnss,
/// }
///
/// let mut receiver = Receiver { gnss: Gnss::new() };
/// receiver.gnss.parse(
///     "$GPGGA,085120.307,3541.1493,N,13945.3994,E,1,08,1.0,6.9,M,35.9,M,,0000*5E\n\
///      $GPVTG,240.3,T,,M,000.0,N,000.0,K,A*08\n",
/// );
/// let fix = receiver.gnss.position_fix();
/// assert_eq!(fix.satellite_count, Some(8));
/// assert_eq!(receiver.gnss.velocity().ttmg, Some(240.3));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Gnss {
    parser: SentenceParser,
    state: Fields,
}

impl Gnss {
    /// Create a session decoding all supported sentence types.
    pub fn new() -> Self {
        Gnss::default()
    }

    /// Create a session decoding only `types`.
    pub fn with_types<I>(types: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = SentenceType>,
    {
        Ok(Gnss::with_filter(TypeFilter::new(types)?))
    }

    pub fn with_filter(filter: TypeFilter) -> Self {
        Gnss {
            parser: SentenceParser::new(filter),
            state: Fields::new(),
        }
    }

    #[inline]
    pub fn filter(&self) -> &TypeFilter {
        self.parser.filter()
    }

    /// Decode one line without touching the collected state.
    ///
    /// See [SentenceParser::parse_line](../parser/struct.SentenceParser.html#method.parse_line).
    #[inline]
    pub fn parse_line(&self, line: &str) -> Option<(SentenceType, Option<Fields>)> {
        self.parser.parse_line(line)
    }

    /// Decode every line of `lines` and merge the results into the state.
    /// Returns the state after the last line.
    pub fn parse(&mut self, lines: &str) -> &Fields {
        for line in lines.lines() {
            if let Some((_, Some(fields))) = self.parser.parse_line(line) {
                self.state.merge(fields);
            }
        }
        &self.state
    }

    /// The latest value of every field decoded so far.
    #[inline]
    pub fn state(&self) -> &Fields {
        &self.state
    }

    #[inline]
    pub fn state_mut(&mut self) -> &mut Fields {
        &mut self.state
    }

    /// Forget all collected values.
    pub fn reset(&mut self) {
        self.state.clear();
    }

    /// Latitude in decimal degrees, negative in the southern hemisphere.
    pub fn latitude(&self) -> Option<f64> {
        self.coordinate(Key::LatRaw, Key::Ns, "S")
    }

    /// Longitude in decimal degrees, negative in the western hemisphere.
    pub fn longitude(&self) -> Option<f64> {
        self.coordinate(Key::LngRaw, Key::Ew, "W")
    }

    fn coordinate(&self, raw: Key, hemisphere: Key, negative: &str) -> Option<f64> {
        let raw = self.state.float(raw)?;
        let hemisphere = self.state.text(hemisphere).unwrap_or("");
        Some(geo::signed_degrees(raw, hemisphere, negative))
    }

    pub fn position_fix(&self) -> PositionFix {
        PositionFix {
            utc: self.state.float(Key::Utc),
            latitude: self.latitude(),
            longitude: self.longitude(),
            hdr: self.state.float(Key::Hdr),
            satellite_count: self.state.int(Key::SatCnt),
        }
    }

    pub fn velocity(&self) -> Velocity {
        Velocity {
            ttmg: self.state.float(Key::Ttmg),
            mtmg: self.state.float(Key::Mtmg),
            gsk: self.state.float(Key::Gsk),
            gskph: self.state.float(Key::Gskph),
        }
    }

    pub fn recommended_minimum(&self) -> RecommendedMinimum {
        RecommendedMinimum {
            utc: self.state.float(Key::Utc),
            status: self.state.text(Key::Status).map(str::to_owned),
            latitude: self.latitude(),
            longitude: self.longitude(),
            gsk: self.state.float(Key::Gsk),
            ttmg: self.state.float(Key::Ttmg),
            date: self.state.int(Key::Date),
        }
    }

    pub fn time_and_date(&self) -> TimeAndDate {
        TimeAndDate {
            utc: self.state.float(Key::Utc),
            day: self.state.int(Key::Day),
            month: self.state.int(Key::Month),
            year: self.state.int(Key::Year),
            tzone_h: self.state.int(Key::TzoneH),
            tzone_m: self.state.int(Key::TzoneM),
        }
    }

    /// Satellites of the latest GSV sentence.
    pub fn satellites(&self) -> &[Satellite] {
        self.state.satellites().unwrap_or(&[])
    }

    /// Ids of the satellites used for the fix, from the latest GSA sentence.
    pub fn active_satellite_ids(&self) -> &[i64] {
        self.state.sat_ids().unwrap_or(&[])
    }
}
