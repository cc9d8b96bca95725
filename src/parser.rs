//! This module provides the decoders for the *GGA*, *GSA*, *GSV*, *RMC*,
//! *VTG* and *ZDA* sentences of the *NMEA 0183* protocol.
//!
//! Decoding never fails: lines that are not NMEA sentences are skipped,
//! missing or garbled numbers read as zero.

use arrayvec::ArrayString;
use std::fmt;
use std::str::FromStr;

use err::ConfigError;
use fields::{FieldDescriptor, Fields, Key, SatIds, Satellite, Value, ValueKind, GSA_SLOTS};
use lexer::{self, Tokens, MIN_LINE_LENGTH};

field_table! {
    pub GGA_FIELDS = [
        Utc => 1, Float;
        LatRaw => 2, Float;
        Ns => 3, Raw;
        LngRaw => 4, Float;
        Ew => 5, Raw;
        SatCnt => 7, Int;
        Hdr => 8, Float;
    ]
}

field_table! {
    pub VTG_FIELDS = [
        Ttmg => 1, Float;
        Mtmg => 3, Float;
        Gsk => 5, Float;
        Gskph => 7, Float;
    ]
}

field_table! {
    pub RMC_FIELDS = [
        Utc => 1, Float;
        Status => 2, Raw;
        LatRaw => 3, Float;
        Ns => 4, Raw;
        LngRaw => 5, Float;
        Ew => 6, Raw;
        Gsk => 7, Float;
        Ttmg => 8, Float;
        Date => 9, Int;
    ]
}

// Fields that are left out of the result when empty.
field_table! {
    pub ZDA_FIELDS = [
        Utc => 1, Float;
        Day => 2, Int;
        Month => 3, Int;
        Year => 4, Int;
        TzoneH => 5, Int;
        TzoneM => 6, Int;
    ]
}

/// First field of a GSA sentence holding a satellite id.
const GSA_FIRST_SLOT: usize = 3;
/// First field of a GSV sentence holding satellite data.
const GSV_FIRST_SAT: usize = 4;
/// Fields per satellite in a GSV sentence.
const GSV_SAT_FIELDS: usize = 4;
/// Satellites carried by every GSV sentence but the last of a message.
const GSV_MAX_SATS: i64 = 4;

/// Capacity of an unknown sentence code: three characters of up to 4 bytes.
pub type Code = ArrayString<[u8; 12]>;

/// The type of a sentence, taken from the 3 characters after the talker id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SentenceType {
    /// Global positioning system fix data.
    Gga,
    /// Active satellites and dilution of precision.
    Gsa,
    /// Satellites in view.
    Gsv,
    /// Recommended minimum specific GNSS data.
    Rmc,
    /// Track made good and ground speed.
    Vtg,
    /// Time and date.
    Zda,
    /// Any other code. There is no decoder for these.
    Other(Code),
}

impl SentenceType {
    /// All types that can be decoded, in their canonical order.
    pub const SUPPORTED: [SentenceType; 6] = [
        SentenceType::Gga,
        SentenceType::Gsa,
        SentenceType::Gsv,
        SentenceType::Rmc,
        SentenceType::Vtg,
        SentenceType::Zda,
    ];

    /// Maps a sentence code to its type. Only the first 3 characters of
    /// `code` are looked at.
    pub fn from_code(code: &str) -> Self {
        let code = match code.char_indices().nth(3) {
            Some((end, _)) => &code[..end],
            None => code,
        };
        match code {
            "GGA" => SentenceType::Gga,
            "GSA" => SentenceType::Gsa,
            "GSV" => SentenceType::Gsv,
            "RMC" => SentenceType::Rmc,
            "VTG" => SentenceType::Vtg,
            "ZDA" => SentenceType::Zda,
            other => {
                let mut code = Code::new();
                for c in other.chars() {
                    if code.try_push(c).is_err() {
                        break;
                    }
                }
                SentenceType::Other(code)
            }
        }
    }

    pub fn code(&self) -> &str {
        match *self {
            SentenceType::Gga => "GGA",
            SentenceType::Gsa => "GSA",
            SentenceType::Gsv => "GSV",
            SentenceType::Rmc => "RMC",
            SentenceType::Vtg => "VTG",
            SentenceType::Zda => "ZDA",
            SentenceType::Other(ref code) => &**code,
        }
    }

    #[inline]
    pub fn is_supported(&self) -> bool {
        self.slot().is_some()
    }

    /// Position inside `SUPPORTED`.
    #[inline]
    fn slot(&self) -> Option<usize> {
        match *self {
            SentenceType::Gga => Some(0),
            SentenceType::Gsa => Some(1),
            SentenceType::Gsv => Some(2),
            SentenceType::Rmc => Some(3),
            SentenceType::Vtg => Some(4),
            SentenceType::Zda => Some(5),
            SentenceType::Other(_) => None,
        }
    }
}

impl fmt::Display for SentenceType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for SentenceType {
    type Err = ConfigError;

    /// Parses the exact name of a supported type, e.g. `"GGA"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match SentenceType::from_code(s) {
            ref t if t.is_supported() && t.code() == s => Ok(t.clone()),
            _ => Err(ConfigError::InvalidConfiguration(vec![s.to_owned()])),
        }
    }
}

/// The set of sentence types a parser decodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypeFilter {
    enabled: [bool; 6],
}

impl TypeFilter {
    /// Create a filter enabling `types`, which may be a single type
    /// (`Some(t)`, `[t]`) or many.
    ///
    /// Returns `ConfigError::InvalidConfiguration` naming every unsupported
    /// type if any was requested.
    pub fn new<I>(types: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = SentenceType>,
    {
        let mut enabled = [false; 6];
        let mut invalid = Vec::new();
        for t in types {
            match t.slot() {
                Some(slot) => enabled[slot] = true,
                None => invalid.push(t.code().to_owned()),
            }
        }
        if !invalid.is_empty() {
            return Err(ConfigError::InvalidConfiguration(invalid));
        }
        Ok(TypeFilter { enabled })
    }

    /// Create a filter from type names such as `"GGA"`.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, ConfigError> {
        let mut types = Vec::with_capacity(names.len());
        let mut invalid = Vec::new();
        for name in names {
            let name = name.as_ref().trim();
            match name.parse::<SentenceType>() {
                Ok(t) => types.push(t),
                Err(_) => invalid.push(name.to_owned()),
            }
        }
        if !invalid.is_empty() {
            return Err(ConfigError::InvalidConfiguration(invalid));
        }
        TypeFilter::new(types)
    }

    #[inline]
    pub fn is_enabled(&self, t: &SentenceType) -> bool {
        match t.slot() {
            Some(slot) => self.enabled[slot],
            None => false,
        }
    }

    /// The enabled types in canonical order.
    pub fn types(&self) -> Vec<SentenceType> {
        SentenceType::SUPPORTED
            .iter()
            .filter(|t| self.is_enabled(t))
            .cloned()
            .collect()
    }
}

impl Default for TypeFilter {
    fn default() -> Self {
        TypeFilter { enabled: [true; 6] }
    }
}

impl FromStr for TypeFilter {
    type Err = ConfigError;

    /// Parses a comma separated list of type names, e.g. `"GGA, VTG"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let names: Vec<&str> = s.split(',').collect();
        TypeFilter::from_names(&names[..])
    }
}

/// Decodes single lines, skipping sentence types that are not enabled.
#[derive(Clone, Debug, Default)]
pub struct SentenceParser {
    filter: TypeFilter,
}

impl SentenceParser {
    pub fn new(filter: TypeFilter) -> Self {
        SentenceParser { filter }
    }

    #[inline]
    pub fn filter(&self) -> &TypeFilter {
        &self.filter
    }

    /// Decode one line.
    ///
    /// Returns `None` if `line` is not an NMEA sentence at all. Otherwise
    /// the sentence type is returned together with the decoded fields, which
    /// are `None` for unknown or disabled types.
    pub fn parse_line(&self, line: &str) -> Option<(SentenceType, Option<Fields>)> {
        if line.chars().nth(MIN_LINE_LENGTH - 1).is_none() {
            return None;
        }
        debug!("{}", line.trim_end());

        let tokens = Tokens::new(line);
        let sen_type = SentenceType::from_code(tokens.sentence_code()?);
        let fields = match sen_type {
            SentenceType::Gga => self.parse_gga(&tokens),
            SentenceType::Gsa => self.parse_gsa(&tokens),
            SentenceType::Gsv => self.parse_gsv(&tokens),
            SentenceType::Rmc => self.parse_rmc(&tokens),
            SentenceType::Vtg => self.parse_vtg(&tokens),
            SentenceType::Zda => self.parse_zda(&tokens),
            SentenceType::Other(ref code) => {
                trace!("no decoder for {:?} sentences", &**code);
                None
            }
        };
        Some((sen_type, fields))
    }

    /// Returns `true` if `t` should be decoded.
    fn accept(&self, t: SentenceType) -> bool {
        let enabled = self.filter.is_enabled(&t);
        if !enabled {
            trace!("skipping disabled {} sentence", t);
        }
        enabled
    }

    fn parse_gga(&self, tokens: &Tokens) -> Option<Fields> {
        if !self.accept(SentenceType::Gga) {
            return None;
        }
        Some(parse_table(tokens, GGA_FIELDS))
    }

    /// Parse a GSA sentence. Unused satellite slots are dropped.
    fn parse_gsa(&self, tokens: &Tokens) -> Option<Fields> {
        if !self.accept(SentenceType::Gsa) {
            return None;
        }
        let sat_ids: SatIds = (GSA_FIRST_SLOT..GSA_FIRST_SLOT + GSA_SLOTS)
            .map(|i| tokens.int(i))
            .filter(|&id| id != 0)
            .collect();

        let mut fields = Fields::new();
        fields.insert(Key::Mode, Value::Text(tokens.get(1).to_owned()));
        fields.insert(Key::SatIds, Value::SatIds(sat_ids));
        Some(fields)
    }

    /// Parse one GSV sentence.
    ///
    /// Only the satellites of this very sentence are returned, the other
    /// sentences of a multi-part message are not taken into account.
    fn parse_gsv(&self, tokens: &Tokens) -> Option<Fields> {
        if !self.accept(SentenceType::Gsv) {
            return None;
        }
        let msg_count = tokens.int(1);
        let msg_index = tokens.int(2);
        let sat_count = tokens.int(3);

        // Every sentence but the last carries 4 satellites.
        let count = if msg_index < msg_count {
            GSV_MAX_SATS
        } else {
            sat_count.saturating_sub(msg_index.saturating_sub(1).saturating_mul(GSV_MAX_SATS))
        };
        // A line never yields more satellites than it has room for, short
        // lines are padded with empty satellites up to the usual 4.
        let room = (tokens.len().saturating_sub(GSV_FIRST_SAT) + GSV_SAT_FIELDS - 1) / GSV_SAT_FIELDS;
        let limit = room.max(GSV_MAX_SATS as usize) as i64;
        let count = count.max(0).min(limit) as usize;

        let sats = (0..count)
            .map(|n| {
                let base = GSV_FIRST_SAT + n * GSV_SAT_FIELDS;
                Satellite {
                    id: tokens.int(base),
                    elevation: tokens.int(base + 1),
                    azimuth: tokens.int(base + 2),
                    snr: tokens.int(base + 3),
                }
            })
            .collect();

        let mut fields = Fields::new();
        fields.insert(Key::Sat, Value::Satellites(sats));
        Some(fields)
    }

    fn parse_rmc(&self, tokens: &Tokens) -> Option<Fields> {
        if !self.accept(SentenceType::Rmc) {
            return None;
        }
        Some(parse_table(tokens, RMC_FIELDS))
    }

    fn parse_vtg(&self, tokens: &Tokens) -> Option<Fields> {
        if !self.accept(SentenceType::Vtg) {
            return None;
        }
        Some(parse_table(tokens, VTG_FIELDS))
    }

    /// Parse a ZDA sentence. Unlike the other sentences, empty fields are
    /// left out instead of reading as zero.
    fn parse_zda(&self, tokens: &Tokens) -> Option<Fields> {
        if !self.accept(SentenceType::Zda) {
            return None;
        }
        let mut fields = Fields::new();
        for desc in ZDA_FIELDS {
            let field = tokens.get(desc.index);
            if !field.is_empty() {
                fields.insert(desc.key, field_value(field, desc.kind));
            }
        }
        Some(fields)
    }
}

/// Reads every field in `table`. Missing fields read as zero, or as empty
/// text for raw fields.
fn parse_table(tokens: &Tokens, table: &[FieldDescriptor]) -> Fields {
    let mut fields = Fields::new();
    for desc in table {
        fields.insert(desc.key, field_value(tokens.get(desc.index), desc.kind));
    }
    fields
}

#[inline]
fn field_value(field: &str, kind: ValueKind) -> Value {
    match kind {
        ValueKind::Float => Value::Float(lexer::to_float(field)),
        ValueKind::Int => Value::Int(lexer::to_int(field)),
        ValueKind::Raw => Value::Text(field.to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GGA: &str = "$GPGGA,085120.307,3541.1493,N,13945.3994,E,1,08,1.0,6.9,M,35.9,M,,0000*5E";
    const GSA: &str = "$GPGSA,A,3,29,26,05,10,02,27,08,15,,,,,1.8,1.0,1.5*3E";
    const GSV: &str = "$GPGSV,3,1,12,26,72,352,28,05,65,066,37,15,50,268,35,27,33,189,37*7F";
    const RMC: &str = "$GPRMC,085120.307,A,3541.1493,N,13945.3994,E,000.0,240.3,181211,,,A*6A";
    const VTG: &str = "$GPVTG,240.3,T,,M,000.0,N,000.0,K,A*08";
    const ZDA: &str = "$GPZDA,085120.307,13,06,2019,09,00*10";
    const GLL: &str = "$GPGLL,2446.79006,N,12059.72083,E,123923.00,A,A*6C";

    fn decode(line: &str) -> (SentenceType, Fields) {
        match SentenceParser::default().parse_line(line) {
            Some((t, Some(fields))) => (t, fields),
            other => panic!("could not decode {:?}: {:?}", line, other),
        }
    }

    #[test]
    fn gga() {
        let (t, v) = decode(GGA);
        assert_eq!(t, SentenceType::Gga);
        assert_eq!(v.len(), 7);
        assert_eq!(v.float(Key::Utc), Some(85120.307));
        assert_eq!(v.float(Key::LatRaw), Some(3541.1493));
        assert_eq!(v.text(Key::Ns), Some("N"));
        assert_eq!(v.float(Key::LngRaw), Some(13945.3994));
        assert_eq!(v.text(Key::Ew), Some("E"));
        assert_eq!(v.int(Key::SatCnt), Some(8));
        assert_eq!(v.float(Key::Hdr), Some(1.0));
    }

    #[test]
    fn gga_without_fix() {
        let (_, v) = decode("$GPGGA,085120.307,,,,,0,00,,,M,,M,,*5E");
        assert_eq!(v.len(), 7);
        assert_eq!(v.float(Key::LatRaw), Some(0.0));
        assert_eq!(v.text(Key::Ns), Some(""));
        assert_eq!(v.int(Key::SatCnt), Some(0));
        assert_eq!(v.float(Key::Hdr), Some(0.0));
    }

    #[test]
    fn gga_truncated() {
        let (t, v) = decode("$GPGGA,085120.307,3541.1493");
        assert_eq!(t, SentenceType::Gga);
        assert_eq!(v.len(), 7);
        assert_eq!(v.float(Key::LatRaw), Some(3541.1493));
        assert_eq!(v.text(Key::Ew), Some(""));
        assert_eq!(v.float(Key::Hdr), Some(0.0));
    }

    #[test]
    fn gsa() {
        let (t, v) = decode(GSA);
        assert_eq!(t, SentenceType::Gsa);
        assert_eq!(v.len(), 2);
        assert_eq!(v.text(Key::Mode), Some("A"));
        assert_eq!(v.sat_ids(), Some(&[29, 26, 5, 10, 2, 27, 8, 15][..]));
    }

    #[test]
    fn gsa_keeps_order_around_empty_slots() {
        let (_, v) = decode("$GPGSA,M,3,,04,,00,17,,,,,,,09,1.8,1.0,1.5*3E");
        assert_eq!(v.text(Key::Mode), Some("M"));
        assert_eq!(v.sat_ids(), Some(&[4, 17, 9][..]));
    }

    #[test]
    fn gsv() {
        let (t, v) = decode(GSV);
        assert_eq!(t, SentenceType::Gsv);
        let sats = v.satellites().unwrap();
        assert_eq!(sats.len(), 4);
        assert_eq!(
            sats[0],
            Satellite { id: 26, elevation: 72, azimuth: 352, snr: 28 }
        );
        assert_eq!(
            sats[1],
            Satellite { id: 5, elevation: 65, azimuth: 66, snr: 37 }
        );
        assert_eq!(
            sats[2],
            Satellite { id: 15, elevation: 50, azimuth: 268, snr: 35 }
        );
        assert_eq!(
            sats[3],
            Satellite { id: 27, elevation: 33, azimuth: 189, snr: 37 }
        );
    }

    #[test]
    fn gsv_last_message_carries_the_rest() {
        let (_, v) = decode("$GPGSV,3,3,10,12,05,001,,31,04,300,20*7A");
        let sats = v.satellites().unwrap();
        assert_eq!(sats.len(), 2);
        assert_eq!(sats[0], Satellite { id: 12, elevation: 5, azimuth: 1, snr: 0 });
        assert_eq!(sats[1], Satellite { id: 31, elevation: 4, azimuth: 300, snr: 20 });
    }

    #[test]
    fn gsv_last_message_with_five_satellites() {
        let (_, v) = decode(
            "$GPGSV,1,1,05,01,10,100,20,02,11,110,21,03,12,120,22,04,13,130,23,05,14,140,24*00",
        );
        let sats = v.satellites().unwrap();
        assert_eq!(sats.len(), 5);
        assert_eq!(sats[4], Satellite { id: 5, elevation: 14, azimuth: 140, snr: 24 });

        let (_, v) = decode("$GPGSV,2,2,09,01,10,100,20,02,11,110,21,03,12,120,22,04,13,130,23,05,14,140,24*00");
        assert_eq!(v.satellites().map(|s| s.len()), Some(5));
    }

    #[test]
    fn gsv_count_is_bounded_by_the_line() {
        let (_, v) = decode("$GPGSV,1,1,9999,01,10,100,20,02,11,110,21,03,12,120,22,04,13,130,23,05,14,140,24*00");
        let sats = v.satellites().unwrap();
        // 21 fields after the header fit 6 satellites, the checksum included
        assert_eq!(sats.len(), 6);
        assert_eq!(sats[5], Satellite::default());
    }

    #[test]
    fn gsv_counts_are_clamped() {
        let (_, v) = decode("$GPGSV,1,1,00*79");
        assert_eq!(v.satellites(), Some(&[][..]));

        let (_, v) = decode("$GPGSV,1,1,9999,01,02,03,04*79");
        let sats = v.satellites().unwrap();
        assert_eq!(sats.len(), 4);
        assert_eq!(sats[0], Satellite { id: 1, elevation: 2, azimuth: 3, snr: 4 });
        assert_eq!(sats[3], Satellite::default());

        let (_, v) = decode("$GPGSV,2,5,03*79");
        assert_eq!(v.satellites(), Some(&[][..]));

        let (_, v) = decode("$GPGSV,-9223372036854775808,9223372036854775807,1*00");
        assert_eq!(v.satellites(), Some(&[][..]));
    }

    #[test]
    fn rmc() {
        let (t, v) = decode(RMC);
        assert_eq!(t, SentenceType::Rmc);
        assert_eq!(v.len(), 9);
        assert_eq!(v.float(Key::Utc), Some(85120.307));
        assert_eq!(v.text(Key::Status), Some("A"));
        assert_eq!(v.float(Key::LatRaw), Some(3541.1493));
        assert_eq!(v.text(Key::Ns), Some("N"));
        assert_eq!(v.float(Key::LngRaw), Some(13945.3994));
        assert_eq!(v.text(Key::Ew), Some("E"));
        assert_eq!(v.float(Key::Gsk), Some(0.0));
        assert_eq!(v.float(Key::Ttmg), Some(240.3));
        assert_eq!(v.int(Key::Date), Some(181211));
    }

    #[test]
    fn vtg() {
        let (t, v) = decode(VTG);
        assert_eq!(t, SentenceType::Vtg);
        assert_eq!(v.len(), 4);
        assert_eq!(v.float(Key::Ttmg), Some(240.3));
        assert_eq!(v.float(Key::Mtmg), Some(0.0));
        assert_eq!(v.float(Key::Gsk), Some(0.0));
        assert_eq!(v.float(Key::Gskph), Some(0.0));
    }

    #[test]
    fn zda() {
        let (t, v) = decode(ZDA);
        assert_eq!(t, SentenceType::Zda);
        assert_eq!(v.len(), 6);
        assert_eq!(v.float(Key::Utc), Some(85120.307));
        assert_eq!(v.int(Key::Day), Some(13));
        assert_eq!(v.int(Key::Month), Some(6));
        assert_eq!(v.int(Key::Year), Some(2019));
        assert_eq!(v.int(Key::TzoneH), Some(9));
        assert_eq!(v.int(Key::TzoneM), Some(0));
    }

    #[test]
    fn zda_leaves_out_empty_fields() {
        let (_, v) = decode("$GPZDA,,13,,2019,,*10");
        assert_eq!(v.len(), 2);
        assert!(!v.contains(Key::Utc));
        assert_eq!(v.int(Key::Day), Some(13));
        assert!(!v.contains(Key::Month));
        assert_eq!(v.int(Key::Year), Some(2019));
        assert!(!v.contains(Key::TzoneH));
    }

    #[test]
    fn unknown_type() {
        let parser = SentenceParser::default();
        let (t, v) = parser.parse_line(GLL).unwrap();
        assert_eq!(t.code(), "GLL");
        assert_matches!(t, SentenceType::Other(_));
        assert_eq!(v, None);
    }

    #[test]
    fn not_a_sentence() {
        let parser = SentenceParser::default();
        assert_eq!(parser.parse_line(""), None);
        assert_eq!(parser.parse_line("$GPGG"), None);
        assert_eq!(parser.parse_line("GPGGA,085120.307,3541.1493"), None);
        assert_eq!(parser.parse_line(",$GPGGA,085120.307"), None);
        assert_eq!(parser.parse_line("\n\n\n\n\n\n"), None);
        assert_eq!(parser.parse_line("$GPäö"), None);
    }

    #[test]
    fn length_counts_characters() {
        let parser = SentenceParser::default();
        let (t, v) = parser.parse_line("$GPäöü").unwrap();
        assert_eq!(t.code(), "äöü");
        assert_eq!(v, None);
    }

    #[test]
    fn short_header_is_unknown() {
        let parser = SentenceParser::default();
        let (t, v) = parser.parse_line("$GP,1,2,3").unwrap();
        assert_eq!(t.code(), "");
        assert_eq!(v, None);
    }

    #[test]
    fn line_ending_is_dropped() {
        let (_, v) = decode("$GPZDA,085120.307,13,06,2019,09,00\r\n");
        assert_eq!(v.int(Key::TzoneM), Some(0));
    }

    #[test]
    fn disabled_types_are_detected_but_not_decoded() {
        let parser = SentenceParser::new(TypeFilter::new(Some(SentenceType::Gga)).unwrap());
        assert_matches!(parser.parse_line(GGA), Some((SentenceType::Gga, Some(_))));
        for line in &[GSA, GSV, RMC, VTG, ZDA] {
            assert_matches!(parser.parse_line(line), Some((_, None)));
        }
    }

    #[test]
    fn filter_from_types() {
        let filter = TypeFilter::new(vec![SentenceType::Vtg, SentenceType::Gga]).unwrap();
        assert_eq!(filter.types(), [SentenceType::Gga, SentenceType::Vtg]);
        assert!(filter.is_enabled(&SentenceType::Vtg));
        assert!(!filter.is_enabled(&SentenceType::Zda));
        assert!(!filter.is_enabled(&SentenceType::from_code("GLL")));

        assert_eq!(TypeFilter::default().types(), SentenceType::SUPPORTED);
    }

    #[test]
    fn filter_rejects_unsupported_types() {
        let err = TypeFilter::new(vec![
            SentenceType::Gga,
            SentenceType::from_code("ZZZ"),
            SentenceType::Vtg,
            SentenceType::from_code("GLL"),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidConfiguration(vec!["ZZZ".into(), "GLL".into()])
        );
    }

    #[test]
    fn filter_from_names() {
        let filter: TypeFilter = "GGA, VTG".parse().unwrap();
        assert_eq!(filter.types(), [SentenceType::Gga, SentenceType::Vtg]);

        let filter = TypeFilter::from_names(&["ZDA"]).unwrap();
        assert_eq!(filter.types(), [SentenceType::Zda]);

        assert_matches!(
            "GGA,XXX,gsa".parse::<TypeFilter>(),
            Err(ConfigError::InvalidConfiguration(ref names)) if names == &["XXX", "gsa"]
        );
        assert_matches!(
            TypeFilter::from_names(&["GGAX"]),
            Err(ConfigError::InvalidConfiguration(ref names)) if names == &["GGAX"]
        );
    }

    #[test]
    fn sentence_type_names() {
        for t in SentenceType::SUPPORTED.iter() {
            assert_eq!(&t.code().parse::<SentenceType>().unwrap(), t);
            assert!(t.is_supported());
        }
        assert_eq!(SentenceType::Rmc.to_string(), "RMC");
        assert_eq!(SentenceType::from_code("GLLX").code(), "GLL");
        assert_eq!(SentenceType::from_code("GGAX"), SentenceType::Gga);
        assert_eq!(SentenceType::from_code("ZDA,"), SentenceType::Zda);
        assert_eq!(SentenceType::from_code("GG").code(), "GG");
        assert!(!SentenceType::from_code("GLL").is_supported());
    }
}
