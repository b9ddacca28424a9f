use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::{TimezoneOffset, Transition, TransitionInstant, TransitionTable, TzError};

/// The span of time between two consecutive transitions, with the offset observed during it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimezonePeriod<'a> {
    /// Transition that opened the period, `None` for the zone's initial period
    pub start: Option<&'a Transition>,
    /// Transition that closes the period, `None` for the last one
    pub end: Option<&'a Transition>,
    pub offset: &'a TimezoneOffset,
}

impl TimezonePeriod<'_> {
    pub fn utc_start(&self) -> Option<TransitionInstant> {
        self.start.map(|t| t.at)
    }

    pub fn utc_end(&self) -> Option<TransitionInstant> {
        self.end.map(|t| t.at)
    }

    fn shift(&self) -> i64 {
        self.offset.utc_total_offset() as i64
    }

    /// Start of the period on the local wall clock, `None` for the initial period
    /// or when it can't be represented
    pub fn local_start(&self) -> Option<TransitionInstant> {
        self.utc_start()?.checked_add_seconds(self.shift())
    }

    /// End (exclusive) of the period on the local wall clock, `None` for the last period
    /// or when it can't be represented
    pub fn local_end(&self) -> Option<TransitionInstant> {
        self.utc_end()?.checked_add_seconds(self.shift())
    }

    pub fn is_dst(&self) -> bool {
        self.offset.is_dst()
    }

    pub fn contains_utc(&self, t: i64) -> bool {
        within(self.start, self.end, 0, t)
    }

    pub fn contains_local(&self, local: i64) -> bool {
        within(self.start, self.end, self.shift(), local)
    }
}

fn within(start: Option<&Transition>, end: Option<&Transition>, shift: i64, t: i64) -> bool {
    start.map_or(true, |s| s.at.cmp_shifted(shift, t) != Ordering::Greater)
        && end.map_or(true, |e| e.at.cmp_shifted(shift, t) == Ordering::Greater)
}

impl TransitionTable {
    fn period(&self, index: usize) -> TimezonePeriod<'_> {
        // index is the number of transitions already passed
        let transitions = self.transitions();
        let start = index.checked_sub(1).map(|i| &transitions[i]);
        TimezonePeriod {
            start,
            end: transitions.get(index),
            offset: start.map_or(self.initial_offset(), |t| self.offset(t)),
        }
    }

    /// The period containing the UTC instant `t`.
    pub fn period_for_utc(&self, t: i64) -> TimezonePeriod<'_> {
        self.period(self.upper_bound(t))
    }

    /// The period containing an exact instant.
    pub fn period_for_instant(&self, t: &TransitionInstant) -> TimezonePeriod<'_> {
        self.period(self.upper_bound_instant(t))
    }

    /// Converts a UTC timestamp to local wall clock seconds.
    /// Fails with `OutOfRange` when the local time doesn't fit an `i64`.
    pub fn utc_to_local(&self, t: i64) -> Result<i64, TzError> {
        t.checked_add(self.offset_at(t).utc_total_offset() as i64)
            .ok_or(TzError::OutOfRange)
    }

    /// Every period in which the local wall clock shows `local`, in ascending order.
    /// Empty when `local` falls in a gap, two periods when it is repeated.
    pub fn periods_for_local(&self, local: i64) -> Vec<TimezonePeriod<'_>> {
        // Candidates are within the largest offset of `local` read as UTC
        let window = self
            .offsets()
            .iter()
            .map(|o| (o.utc_total_offset() as i64).abs())
            .max()
            .unwrap_or(0);
        let from = self.upper_bound(local.saturating_sub(window));
        let to = self.upper_bound(local.saturating_add(window));
        (from..=to)
            .map(|i| self.period(i))
            .filter(|p| p.contains_local(local))
            .collect()
    }

    /// Converts local wall clock seconds to a UTC timestamp.
    ///
    /// In a repeated hour, `dst` picks the period with that DST flag; without it the
    /// conversion fails with `AmbiguousTime`. Skipped local times fail with `PeriodNotFound`,
    /// and local times whose UTC counterpart doesn't fit an `i64` with `OutOfRange`.
    ///
    ///```rust
    /// use libtzdef::{definitions::ASIA_KHANDYGA, TzError};
    /// // 1981-04-01 00:30 local, skipped when clocks moved forward to YAKST
    /// let skipped = 354898800 + 32400 + 1800;
    /// assert_eq!(ASIA_KHANDYGA.local_to_utc(skipped, None), Err(TzError::PeriodNotFound));
    ///```
    pub fn local_to_utc(&self, local: i64, dst: Option<bool>) -> Result<i64, TzError> {
        let periods = self.periods_for_local(local);
        let period = match (periods.as_slice(), dst) {
            ([], _) => return Err(TzError::PeriodNotFound),
            ([p], _) => *p,
            (many, Some(dst)) => {
                let mut matching = many.iter().filter(|p| p.is_dst() == dst);
                match (matching.next(), matching.next()) {
                    (Some(p), None) => *p,
                    _ => return Err(TzError::AmbiguousTime),
                }
            }
            (_, None) => return Err(TzError::AmbiguousTime),
        };
        local
            .checked_sub(period.shift())
            .ok_or(TzError::OutOfRange)
    }
}
