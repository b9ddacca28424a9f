//! Higher level views over a table, based on chrono (parse and json features).

use chrono::{DateTime, Datelike, FixedOffset, TimeZone, Utc};
#[cfg(feature = "json")]
use serde::Serialize;

use crate::{TransitionInstant, TransitionTable, TzError};

#[cfg(feature = "json")]
mod offset_serializer {
    use serde::Serialize;
    fn offset_to_json(t: chrono::FixedOffset) -> String {
        format!("{:?}", t)
    }

    pub fn serialize<S: serde::Serializer>(
        time: &chrono::FixedOffset,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        offset_to_json(*time).serialize(serializer)
    }
}

const NANOS: i128 = 1_000_000_000;

/// The TransitionTime struct contains one transition time.
#[derive(Debug, PartialEq)]
pub struct TransitionTime {
    /// The UTC time and date of the transition time, BEFORE new parameters apply
    pub time: DateTime<Utc>,
    /// The UPCOMING offset to UTC
    pub utc_offset: i32,
    /// Is upcoming change dst ?
    pub isdst: bool,
    /// TZ abbreviation of upcoming change
    pub abbreviation: String,
}

/// Convenient and human-readable informations about a timezone.
/// With the json feature enabled, the Tzinfo struct implements the Serialize trait.
///
/// Some explanations about the offset fields:
/// - raw_offset : the "normal" offset to utc, in seconds
/// - dst_offset : the offset to utc during daylight saving time, in seconds
/// - utc_offset : the current offset to utc, taking into account daylight saving time or not (according to dst_from and dst_until), in +/- HH:MM
#[derive(Debug)]
#[cfg_attr(feature = "json", derive(Serialize))]
pub struct Tzinfo {
    /// Timezone name
    pub timezone: String,
    /// UTC time
    pub utc_datetime: DateTime<Utc>,
    /// Local time
    pub datetime: DateTime<FixedOffset>,
    /// Start of DST period
    pub dst_from: Option<DateTime<Utc>>,
    /// End of DST period
    pub dst_until: Option<DateTime<Utc>>,
    /// Are we in DST period ?
    pub dst_period: bool,
    /// Normal offset to UTC, in seconds
    pub raw_offset: i32,
    /// DST offset to UTC, in seconds
    pub dst_offset: i32,
    /// current offset to UTC, in +/-HH:MM
    #[cfg_attr(feature = "json", serde(with = "offset_serializer"))]
    pub utc_offset: FixedOffset,
    /// Timezone abbreviation
    pub abbreviation: String,
    /// Week number
    pub week_number: i32,
}

#[cfg(feature = "json")]
impl Tzinfo {
    /// Transforms the Tzinfo struct to a JSON string
    ///
    ///```rust
    /// use libtzdef::{definitions, TzError};
    /// let tz = definitions::get("Asia/Khandyga")?
    ///     .zoneinfo()?
    ///     .to_json()?;
    /// println!("{}", tz);
    /// # Ok::<(), TzError>(())
    ///```
    ///
    ///```text
    /// {"timezone":"Asia/Khandyga","utc_datetime":"2024-09-05T16:41:44.279502100Z","datetime":"2024-09-06T01:41:44.279502100+09:00","dst_from":null,"dst_until":null,"dst_period":false,"raw_offset":32400,"dst_offset":32400,"utc_offset":"+09:00","abbreviation":"YAKT","week_number":36}
    ///```
    pub fn to_json(&self) -> Result<String, serde_json::error::Error> {
        serde_json::to_string(self)
    }
}

impl TransitionInstant {
    /// The instant as a chrono UTC datetime, `None` if out of chrono's range.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        let den = self.denominator() as i64;
        let nanos = self.numerator().rem_euclid(den) as i128 * NANOS / den as i128;
        Utc.timestamp_opt(self.timestamp_floor(), nanos as u32).single()
    }

    /// Exact instant of a chrono datetime.
    pub fn from_datetime(d: &DateTime<Utc>) -> TransitionInstant {
        let n = d.timestamp() as i128 * NANOS + d.timestamp_subsec_nanos() as i128;
        // Nanosecond precision overflows for far away dates, whole seconds don't
        TransitionInstant::from_ratio(n, NANOS)
            .unwrap_or_else(|| TransitionInstant::from_timestamp(d.timestamp()))
    }
}

fn year_bounds(year: i32) -> Result<(i64, i64), TzError> {
    let beg = Utc
        .with_ymd_and_hms(year, 1, 1, 0, 0, 0)
        .single()
        .ok_or(TzError::ParseError)?;
    let end = Utc
        .with_ymd_and_hms(year.checked_add(1).ok_or(TzError::ParseError)?, 1, 1, 0, 0, 0)
        .single()
        .ok_or(TzError::ParseError)?;
    Ok((beg.timestamp(), end.timestamp()))
}

impl TransitionTable {
    fn transition_time(&self, t: &crate::Transition) -> Option<TransitionTime> {
        let offset = self.offset(t);
        Some(TransitionTime {
            time: t.at.to_datetime()?,
            utc_offset: offset.utc_total_offset(),
            isdst: offset.is_dst(),
            abbreviation: offset.abbreviation.to_string(),
        })
    }

    /// Returns year's transition times for a timezone.
    /// If year is Some(0), returns current year's transition times.
    /// If there's no transition time for selected year, returns the last occured transition time (zone's current parameters).
    /// If no year (None) is specified, returns all transition times recorded in the table.
    ///
    /// ```rust
    /// use libtzdef::definitions::ASIA_KHANDYGA;
    /// println!("{:?}", ASIA_KHANDYGA.transition_times(Some(2011)).unwrap());
    /// ```
    ///
    /// ```text
    /// [TransitionTime { time: 2011-03-26T16:00:00Z, utc_offset: 39600, isdst: false, abbreviation: "VLAT" }, TransitionTime { time: 2011-09-12T13:00:00Z, utc_offset: 36000, isdst: false, abbreviation: "YAKT" }]
    /// ```
    pub fn transition_times(&self, year: Option<i32>) -> Result<Vec<TransitionTime>, TzError> {
        let timechanges: Vec<TransitionTime> = match year {
            None => self
                .transitions()
                .iter()
                .filter_map(|t| self.transition_time(t))
                .collect(),
            Some(y) => {
                let y = if y == 0 { Utc::now().year() } else { y };
                let (yearbeg, yearend) = year_bounds(y)?;
                let in_year: Vec<TransitionTime> = self
                    .transitions_between(yearbeg, yearend)
                    .filter_map(|t| self.transition_time(t))
                    .collect();
                if in_year.is_empty() {
                    // Latest time change before the requested year
                    self.transition_at_or_before(yearbeg - 1)
                        .and_then(|t| self.transition_time(t))
                        .into_iter()
                        .collect()
                } else {
                    in_year
                }
            }
        };
        if timechanges.is_empty() {
            return Err(TzError::NoData);
        }
        Ok(timechanges)
    }

    /// Offset to UTC (DST included) at a given time.
    pub fn offset_at_datetime(&self, d: &DateTime<Utc>) -> Result<FixedOffset, TzError> {
        let offset = self.offset_at_instant(&TransitionInstant::from_datetime(d));
        FixedOffset::east_opt(offset.utc_total_offset()).ok_or(TzError::ParseError)
    }

    /// Returns convenient data about a timezone for current date and time.
    /// ```rust
    /// use libtzdef::definitions::ASIA_KHANDYGA;
    /// println!("{:?}", ASIA_KHANDYGA.zoneinfo().unwrap());
    /// ```
    pub fn zoneinfo(&self) -> Result<Tzinfo, TzError> {
        self.zoneinfo_at(Utc::now())
    }

    /// Same as [`zoneinfo`](Self::zoneinfo), at a given time.
    pub fn zoneinfo_at(&self, d: DateTime<Utc>) -> Result<Tzinfo, TzError> {
        let period = self.period_for_instant(&TransitionInstant::from_datetime(&d));
        let (yearbeg, yearend) = year_bounds(d.year())?;
        // DST period of the year, when we're not in it
        let year_dst = self
            .transitions_between(yearbeg, yearend)
            .find(|t| self.offset(t).is_dst())
            .map(|t| self.period_for_instant(&t.at));

        let dst_period = period.is_dst();
        let (dst_from, dst_until, dst_offset) = match (dst_period, year_dst) {
            (true, _) => (
                period.utc_start(),
                period.utc_end(),
                period.offset.utc_total_offset(),
            ),
            (false, Some(p)) => (p.utc_start(), p.utc_end(), p.offset.utc_total_offset()),
            (false, None) => (None, None, period.offset.utc_total_offset()),
        };

        let utc_offset =
            FixedOffset::east_opt(period.offset.utc_total_offset()).ok_or(TzError::ParseError)?;
        let datetime = d.with_timezone(&utc_offset);
        Ok(Tzinfo {
            timezone: self.identifier().to_string(),
            week_number: datetime.iso_week().week() as i32,
            utc_datetime: d,
            datetime,
            dst_from: dst_from.and_then(|t| t.to_datetime()),
            dst_until: dst_until.and_then(|t| t.to_datetime()),
            dst_period,
            raw_offset: period.offset.utc_offset,
            dst_offset,
            utc_offset,
            abbreviation: period.offset.abbreviation.to_string(),
        })
    }
}
