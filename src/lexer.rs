//! Splits a raw NMEA line into its comma separated fields and converts
//! single fields into numbers.

use std::str::FromStr;

pub const START_MARKER: char = '$';
pub const FIELD_SEPARATOR: char = ',';
pub const CHECKSUM_DELIMITER: char = '*';

/// Lines shorter than this cannot hold `$`, a talker id and a sentence type.
pub const MIN_LINE_LENGTH: usize = 6;

/// The fields of one NMEA line.
///
/// The checksum delimiter counts as a field separator, so the checksum ends
/// up as the last field. Reading a field past the end yields an empty field.
#[derive(Debug)]
pub struct Tokens<'a> {
    fields: Vec<&'a str>,
}

impl<'a> Tokens<'a> {
    /// Tokenize `line`. A trailing `\n` or `\r\n` is dropped first.
    pub fn new(line: &'a str) -> Self {
        let line = line.trim_end_matches(|c| c == '\n' || c == '\r');
        Tokens {
            fields: line
                .split(|c| c == FIELD_SEPARATOR || c == CHECKSUM_DELIMITER)
                .collect(),
        }
    }

    /// Number of fields, the checksum included.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// The field at `index`, or `""` if the line is too short.
    #[inline]
    pub fn get(&self, index: usize) -> &'a str {
        self.fields.get(index).cloned().unwrap_or("")
    }

    #[inline]
    pub fn int(&self, index: usize) -> i64 {
        to_int(self.get(index))
    }

    /// Returns the 3 character sentence type of the header field, skipping
    /// the start marker and the 2 character talker id.
    ///
    /// Returns `None` if the first field does not start with `$`.
    pub fn sentence_code(&self) -> Option<&'a str> {
        let header = self.get(0);
        if !header.starts_with(START_MARKER) {
            return None;
        }
        let mut offsets = header.char_indices().map(|(i, _)| i).skip(3);
        let start = offsets.next().unwrap_or_else(|| header.len());
        let end = offsets.nth(2).unwrap_or_else(|| header.len());
        Some(&header[start..end])
    }
}

/// Length of the leading run of ASCII digits in `s`.
fn digits(s: &[u8]) -> usize {
    s.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Length of an optional leading sign.
fn sign(s: &[u8]) -> usize {
    match s.first() {
        Some(b'+') | Some(b'-') => 1,
        _ => 0,
    }
}

/// Returns the longest prefix of `s` that reads as an integer.
fn int_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let sign = sign(bytes);
    let len = digits(&bytes[sign..]);
    if len == 0 {
        return "";
    }
    &s[..sign + len]
}

/// Returns the longest prefix of `s` that reads as a decimal number,
/// optionally with a fraction and an exponent.
fn float_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = sign(bytes);
    let whole = digits(&bytes[end..]);
    end += whole;

    let mut frac = 0;
    if bytes.get(end) == Some(&b'.') {
        frac = digits(&bytes[end + 1..]);
        if frac > 0 {
            end += 1 + frac;
        }
    }
    if whole == 0 && frac == 0 {
        return "";
    }

    if let Some(b'e') | Some(b'E') = bytes.get(end) {
        let exp_sign = sign(&bytes[end + 1..]);
        let exp = digits(&bytes[end + 1 + exp_sign..]);
        if exp > 0 {
            end += 1 + exp_sign + exp;
        }
    }
    &s[..end]
}

/// Converts a field to a float, reading as much of it as forms a number.
/// Fields without a leading number yield `0.0`.
pub fn to_float(field: &str) -> f64 {
    f64::from_str(float_prefix(field.trim_start())).unwrap_or(0.0)
}

/// Converts a field to an integer, reading as much of it as forms a number.
/// Fields without a leading number, or numbers out of range, yield `0`.
pub fn to_int(field: &str) -> i64 {
    i64::from_str(int_prefix(field.trim_start())).unwrap_or(0)
}
