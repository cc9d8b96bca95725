//! Decoded values and the map that collects them.

use arrayvec::ArrayVec;
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

/// Number of satellite id slots in a GSA sentence.
pub const GSA_SLOTS: usize = 12;

/// Ids of the satellites used for a fix, in the order the receiver reports them.
pub type SatIds = ArrayVec<[i64; GSA_SLOTS]>;

/// Symbolic name of a decoded value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    /// UTC time of day as `hhmmss.sss`, read as a plain number.
    Utc,
    /// Latitude in `ddmm.mmmm` encoding.
    LatRaw,
    /// Latitude hemisphere, `N` or `S`.
    Ns,
    /// Longitude in `dddmm.mmmm` encoding.
    LngRaw,
    /// Longitude hemisphere, `E` or `W`.
    Ew,
    /// Number of satellites in use (GGA).
    SatCnt,
    /// Horizontal dilution of precision.
    Hdr,
    /// Track made good, degrees true.
    Ttmg,
    /// Track made good, degrees magnetic.
    Mtmg,
    /// Ground speed in knots.
    Gsk,
    /// Ground speed in km/h.
    Gskph,
    /// RMC status, `A` (valid) or `V` (warning).
    Status,
    /// RMC date as `ddmmyy`, read as a plain number.
    Date,
    /// GSA selection mode, `A` (automatic) or `M` (manual).
    Mode,
    /// GSA satellite ids.
    SatIds,
    /// GSV satellites.
    Sat,
    Day,
    Month,
    Year,
    /// Local zone hours.
    TzoneH,
    /// Local zone minutes.
    TzoneM,
}

impl Key {
    pub fn name(&self) -> &'static str {
        match *self {
            Key::Utc => "utc",
            Key::LatRaw => "lat_raw",
            Key::Ns => "ns",
            Key::LngRaw => "lng_raw",
            Key::Ew => "ew",
            Key::SatCnt => "sat_cnt",
            Key::Hdr => "hdr",
            Key::Ttmg => "ttmg",
            Key::Mtmg => "mtmg",
            Key::Gsk => "gsk",
            Key::Gskph => "gskph",
            Key::Status => "status",
            Key::Date => "date",
            Key::Mode => "mode",
            Key::SatIds => "sat_ids",
            Key::Sat => "sat",
            Key::Day => "day",
            Key::Month => "month",
            Key::Year => "year",
            Key::TzoneH => "tzone_h",
            Key::TzoneM => "tzone_m",
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a field of a sentence is converted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Float,
    Int,
    /// The field is kept as it is, empty or not.
    Raw,
}

/// Position and kind of one field inside a sentence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub key: Key,
    pub index: usize,
    pub kind: ValueKind,
}

/// A satellite in view, as reported by GSV.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Satellite {
    /// Satellite PRN number.
    pub id: i64,
    /// Elevation in degrees.
    pub elevation: i64,
    /// Azimuth in degrees true.
    pub azimuth: i64,
    /// Signal to noise ratio in dB-Hz.
    pub snr: i64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Float(f64),
    Int(i64),
    Text(String),
    SatIds(SatIds),
    Satellites(Vec<Satellite>),
}

impl Value {
    pub fn as_float(&self) -> Option<f64> {
        match *self {
            Value::Float(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match *self {
            Value::Int(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match *self {
            Value::Text(ref s) => Some(s.as_str()),
            _ => None,
        }
    }
}

/// Decoded values by key.
///
/// Used both for the result of decoding a single line and for the state a
/// [Gnss](../gnss/struct.Gnss.html) session accumulates over many lines.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Fields {
    values: BTreeMap<Key, Value>,
}

impl Fields {
    pub fn new() -> Self {
        Fields::default()
    }

    #[inline]
    pub fn get(&self, key: Key) -> Option<&Value> {
        self.values.get(&key)
    }

    #[inline]
    pub fn contains(&self, key: Key) -> bool {
        self.values.contains_key(&key)
    }

    /// Sets `key` and returns the value it replaced.
    #[inline]
    pub fn insert(&mut self, key: Key, value: Value) -> Option<Value> {
        self.values.insert(key, value)
    }

    #[inline]
    pub fn remove(&mut self, key: Key) -> Option<Value> {
        self.values.remove(&key)
    }

    /// Copies every value of `other` into `self`. Keys present in both take
    /// the value of `other`, all other keys of `self` stay untouched.
    pub fn merge(&mut self, other: Fields) {
        self.values.extend(other.values);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Iterates over all values, ordered by key.
    pub fn iter(&self) -> btree_map::Iter<Key, Value> {
        self.values.iter()
    }

    pub fn float(&self, key: Key) -> Option<f64> {
        self.get(key).and_then(Value::as_float)
    }

    pub fn int(&self, key: Key) -> Option<i64> {
        self.get(key).and_then(Value::as_int)
    }

    pub fn text(&self, key: Key) -> Option<&str> {
        self.get(key).and_then(Value::as_text)
    }

    pub fn sat_ids(&self) -> Option<&[i64]> {
        match self.get(Key::SatIds) {
            Some(&Value::SatIds(ref ids)) => Some(&ids[..]),
            _ => None,
        }
    }

    pub fn satellites(&self) -> Option<&[Satellite]> {
        match self.get(Key::Sat) {
            Some(&Value::Satellites(ref sats)) => Some(&sats[..]),
            _ => None,
        }
    }
}

impl<'a> IntoIterator for &'a Fields {
    type Item = (&'a Key, &'a Value);
    type IntoIter = btree_map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
