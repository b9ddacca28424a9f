//! This library carries compiled-in timezone definitions generated from the IANA time zone database:
//! for each zone, the ordered list of its UTC offset transitions and the offsets they switch to.
//!
//! The default feature is ```std```. With ```default-features = false```, the crate is ```no_std``` and uses ```alloc```.
//! The core API is the same in both cases:
//!
//!```text
//! // no_std
//! [dependencies]
//! libtzdef = { version = "0.1.0", default-features = false }
//! ```
//!
//!```rust
//! use libtzdef::definitions;
//! let tz = definitions::get("Asia/Khandyga").unwrap();
//! println!("{:?}", tz.offset_at(1315832400));
//!```
//!
//!```text
//! TimezoneOffset { utc_offset: 36000, std_offset: 0, abbreviation: "YAKT" }
//! ```
//!
//! Transition instants are exact fractions of seconds since the Unix epoch, so the
//! historical local mean time changes (recorded as fractions of a day) lose no precision.
//! Instants before the first transition resolve to the zone's initial offset (its local mean time).
//!
//! A table can be written to and read from the TZif binary format of the system zoneinfo files
//! (<http://man7.org/linux/man-pages/man5/tzfile.5.html>), see the [`tzif`] module.
//!
//! For higher level parsing, you can enable the **parse** or **json** features.
//! For instance, to display 2011 transitions in Khandyga, you can use the transition_times method:
//!
//! ```text
//! use libtzdef::definitions::ASIA_KHANDYGA;
//! println!("{:?}", ASIA_KHANDYGA.transition_times(Some(2011)).unwrap());
//! ```
//!
//! ```text
//! [TransitionTime { time: 2011-03-26T16:00:00Z, utc_offset: 39600, isdst: false, abbreviation: "VLAT" }, TransitionTime { time: 2011-09-12T13:00:00Z, utc_offset: 36000, isdst: false, abbreviation: "YAKT" }]
//! ```
//!
//! If you want more complete information about the timezone, you can use the zoneinfo method, which returns a more complete structure
//! (serializable to json with the json feature):
//!
//!```text
//! {"timezone":"Asia/Khandyga","utc_datetime":"2024-09-05T16:41:44.279502100Z","datetime":"2024-09-06T01:41:44.279502100+09:00","dst_from":null,"dst_until":null,"dst_period":false,"raw_offset":32400,"dst_offset":32400,"utc_offset":"+09:00","abbreviation":"YAKT","week_number":36}
//!```
//!
//! The tests (`cargo test`, ```cargo test --no-default-features``` or ```cargo test --features parse|json```) don't need a system timezone database.

// Support using libtzdef without the standard library
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
#[cfg(test)]
mod tests;
#[cfg(not(feature = "std"))]
#[cfg(test)]
mod tests_nostd;

pub mod definitions;
mod instant;
#[cfg(feature = "json")]
mod json;
mod offset;
#[cfg(feature = "parse")]
mod parse;
mod period;
mod table;
pub mod tzif;

pub use instant::TransitionInstant;
pub use offset::TimezoneOffset;
#[cfg(feature = "parse")]
pub use parse::{TransitionTime, Tzinfo};
pub use period::TimezonePeriod;
pub use table::{Transition, TransitionTable, Transitions};

use core::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TzError {
    // Unknown timezone
    InvalidTimezone,
    // Invalid TZif file.
    InvalidMagic,
    // Bad utf8 string
    BadUtf8String,
    // Only V2+ TZif format is supported
    UnsupportedFormat,
    // No data matched the request
    NoData,
    // Parsing Error
    ParseError,
    // Json conversion error
    JsonError,
    // Table without transitions
    EmptyTable,
    // Table without offsets
    NoOffsets,
    // Transition at this index is not after the previous one
    UnsortedTransitions(usize),
    // Transition at this index refers to an unknown offset
    InvalidOffsetIndex(usize),
    // Instant can't be written as whole seconds
    FractionalInstant,
    // Local time skipped by a transition
    PeriodNotFound,
    // Local time repeated by a transition
    AmbiguousTime,
    // Converted time doesn't fit in seconds since the epoch
    OutOfRange,
}

impl fmt::Display for TzError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Timezone error : ")?;
        match self {
            TzError::InvalidTimezone => f.write_str("Invalid timezone"),
            TzError::InvalidMagic => f.write_str("Invalid TZfile"),
            TzError::BadUtf8String => f.write_str("Bad utf8 string"),
            TzError::UnsupportedFormat => f.write_str("Only V2 format and above are supported"),
            TzError::NoData => f.write_str("No data matched the request"),
            TzError::ParseError => f.write_str("Parsing error"),
            TzError::JsonError => f.write_str("Could not convert to json"),
            TzError::EmptyTable => f.write_str("No transition"),
            TzError::NoOffsets => f.write_str("No offset"),
            TzError::UnsortedTransitions(i) => {
                write!(f, "Transition {} is not in ascending order", i)
            }
            TzError::InvalidOffsetIndex(i) => {
                write!(f, "Transition {} refers to an unknown offset", i)
            }
            TzError::FractionalInstant => f.write_str("Transition is not a whole second"),
            TzError::PeriodNotFound => f.write_str("Local time does not exist"),
            TzError::AmbiguousTime => f.write_str("Local time is ambiguous"),
            TzError::OutOfRange => f.write_str("Time out of range"),
        }
    }
}

impl From<core::str::Utf8Error> for TzError {
    fn from(_e: core::str::Utf8Error) -> TzError {
        TzError::BadUtf8String
    }
}

impl From<core::num::ParseIntError> for TzError {
    fn from(_e: core::num::ParseIntError) -> TzError {
        TzError::ParseError
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for TzError {
    fn from(_e: std::io::Error) -> TzError {
        TzError::InvalidTimezone
    }
}

#[cfg(feature = "std")]
impl From<TzError> for std::io::Error {
    fn from(e: TzError) -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::Other, e)
    }
}

#[cfg(feature = "json")]
impl From<serde_json::error::Error> for TzError {
    fn from(_e: serde_json::error::Error) -> TzError {
        TzError::JsonError
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TzError {}
