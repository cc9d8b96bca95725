//! Decoder for the *GGA*, *GSA*, *GSV*, *RMC*, *VTG* and *ZDA* sentences of
//! the *NMEA 0183* protocol, plus great-circle distances between positions.
//!
//! A [Gnss](gnss/struct.Gnss.html) session decodes lines and keeps the
//! latest value of every field, from which position, velocity and time
//! records are built.

#[cfg(test)]
#[macro_use]
extern crate approx;
#[cfg(test)]
#[macro_use]
extern crate assert_matches;
extern crate arrayvec;
#[macro_use]
extern crate log;
#[macro_use]
extern crate quick_error;

pub mod err;
#[macro_use]
mod macros;
pub mod fields;
pub mod geo;
pub mod gnss;
mod lexer;
pub mod parser;
pub mod records;

pub use err::ConfigError;
pub use fields::{Fields, Key, Satellite, Value};
pub use geo::{distance, to_decimal_degrees};
pub use gnss::Gnss;
pub use parser::{SentenceParser, SentenceType, TypeFilter};
pub use records::{PositionFix, RecommendedMinimum, TimeAndDate, Velocity};
