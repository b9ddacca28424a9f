use alloc::borrow::Cow;

#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

/// One of the (standard offset, DST delta, abbreviation) triples a zone switches between.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct TimezoneOffset {
    /// Base offset to UTC, in seconds
    pub utc_offset: i32,
    /// Additional daylight saving offset, in seconds (0 outside DST)
    pub std_offset: i32,
    /// Abbreviation, ie. "YAKT"
    pub abbreviation: Cow<'static, str>,
}

impl TimezoneOffset {
    pub const fn new(
        utc_offset: i32,
        std_offset: i32,
        abbreviation: &'static str,
    ) -> TimezoneOffset {
        TimezoneOffset {
            utc_offset,
            std_offset,
            abbreviation: Cow::Borrowed(abbreviation),
        }
    }

    /// Offset to UTC actually observed, DST included
    pub const fn utc_total_offset(&self) -> i32 {
        self.utc_offset + self.std_offset
    }

    pub const fn is_dst(&self) -> bool {
        self.std_offset != 0
    }
}
