use alloc::borrow::Cow;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::iter::FusedIterator;
use core::slice;

#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

use crate::{TimezoneOffset, TransitionInstant, TzError};

/// A change of offset: from `at` on, `offset` (an index in the table's offsets) applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct Transition {
    pub at: TransitionInstant,
    pub offset: usize,
}

impl Transition {
    pub const fn new(at: TransitionInstant, offset: usize) -> Transition {
        Transition { at, offset }
    }
}

/// The transition table of one zone.
///
/// Offset 0 is the zone's initial offset (usually local mean time) and governs
/// every instant before the first transition.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(Serialize))]
pub struct TransitionTable {
    identifier: Cow<'static, str>,
    offsets: Cow<'static, [TimezoneOffset]>,
    transitions: Cow<'static, [Transition]>,
}

const fn check(offsets: &[TimezoneOffset], transitions: &[Transition]) -> Result<(), TzError> {
    if offsets.is_empty() {
        return Err(TzError::NoOffsets);
    }
    if transitions.is_empty() {
        return Err(TzError::EmptyTable);
    }
    let mut i = 0;
    while i < transitions.len() {
        if transitions[i].offset >= offsets.len() {
            return Err(TzError::InvalidOffsetIndex(i));
        }
        if i > 0 && !matches!(transitions[i - 1].at.const_cmp(&transitions[i].at), Ordering::Less) {
            return Err(TzError::UnsortedTransitions(i));
        }
        i += 1;
    }
    Ok(())
}

impl TransitionTable {
    /// Builds a table from compiled-in data. An invalid table panics, which a
    /// `static` initializer turns into a build failure.
    pub const fn from_static(
        identifier: &'static str,
        offsets: &'static [TimezoneOffset],
        transitions: &'static [Transition],
    ) -> TransitionTable {
        match check(offsets, transitions) {
            Ok(()) => {}
            Err(TzError::NoOffsets) => panic!("timezone table without offsets"),
            Err(TzError::EmptyTable) => panic!("timezone table without transitions"),
            Err(TzError::InvalidOffsetIndex(_)) => panic!("transition refers to an unknown offset"),
            Err(_) => panic!("transitions are not strictly ascending"),
        }
        TransitionTable {
            identifier: Cow::Borrowed(identifier),
            offsets: Cow::Borrowed(offsets),
            transitions: Cow::Borrowed(transitions),
        }
    }

    /// Builds and validates a table at runtime.
    ///
    ///```rust
    /// use libtzdef::{TimezoneOffset, Transition, TransitionInstant, TransitionTable, TzError};
    /// let offsets = vec![TimezoneOffset::new(3600, 0, "CET")];
    /// let transitions = vec![
    ///     Transition::new(TransitionInstant::from_timestamp(10), 0),
    ///     Transition::new(TransitionInstant::from_timestamp(10), 0),
    /// ];
    /// assert_eq!(
    ///     TransitionTable::new("Test/Zone", offsets, transitions),
    ///     Err(TzError::UnsortedTransitions(1))
    /// );
    ///```
    pub fn new(
        identifier: impl Into<Cow<'static, str>>,
        offsets: Vec<TimezoneOffset>,
        transitions: Vec<Transition>,
    ) -> Result<TransitionTable, TzError> {
        let identifier = identifier.into();
        if let Err(e) = check(&offsets, &transitions) {
            log::debug!("rejecting table for {}: {}", identifier, e);
            return Err(e);
        }
        Ok(TransitionTable {
            identifier,
            offsets: Cow::Owned(offsets),
            transitions: Cow::Owned(transitions),
        })
    }

    /// Zone identifier, ie. "Asia/Khandyga"
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn offsets(&self) -> &[TimezoneOffset] {
        &self.offsets
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// The offset a transition switches to.
    pub fn offset(&self, transition: &Transition) -> &TimezoneOffset {
        &self.offsets[transition.offset]
    }

    /// The offset in place before the first transition.
    pub fn initial_offset(&self) -> &TimezoneOffset {
        &self.offsets[0]
    }

    /// Index of the first transition strictly after `t`.
    pub(crate) fn upper_bound(&self, t: i64) -> usize {
        self.upper_bound_instant(&TransitionInstant::from_timestamp(t))
    }

    pub(crate) fn upper_bound_instant(&self, t: &TransitionInstant) -> usize {
        self.transitions.partition_point(|tr| tr.at <= *t)
    }

    /// Index of the first transition at or after `t`.
    fn lower_bound(&self, t: i64) -> usize {
        self.transitions.partition_point(|tr| tr.at.cmp_seconds(t) == Ordering::Less)
    }

    /// The latest transition at or before `t`, if any.
    pub fn transition_at_or_before(&self, t: i64) -> Option<&Transition> {
        match self.upper_bound(t) {
            0 => None,
            i => Some(&self.transitions[i - 1]),
        }
    }

    /// Offset in effect at `t` (seconds since the Unix epoch).
    /// Instants before the first transition get the initial offset.
    ///
    ///```rust
    /// use libtzdef::definitions::ASIA_KHANDYGA;
    /// let o = ASIA_KHANDYGA.offset_at(354898800);
    /// assert_eq!((o.utc_offset, o.std_offset, &*o.abbreviation), (32400, 3600, "YAKST"));
    ///```
    pub fn offset_at(&self, t: i64) -> &TimezoneOffset {
        match self.transition_at_or_before(t) {
            Some(tr) => self.offset(tr),
            None => self.initial_offset(),
        }
    }

    /// Same as [`offset_at`](Self::offset_at), for an exact (possibly fractional) instant.
    pub fn offset_at_instant(&self, t: &TransitionInstant) -> &TimezoneOffset {
        match self.upper_bound_instant(t) {
            0 => self.initial_offset(),
            i => self.offset(&self.transitions[i - 1]),
        }
    }

    /// Transitions in `[from, to)`, in ascending order.
    pub fn transitions_between(&self, from: i64, to: i64) -> Transitions<'_> {
        let start = self.lower_bound(from);
        let end = self.lower_bound(to).max(start);
        Transitions {
            iter: self.transitions[start..end].iter(),
        }
    }
}

/// Iterator over a range of a table's transitions, see [`TransitionTable::transitions_between`].
/// Cloning it restarts from the current position.
#[derive(Debug, Clone)]
pub struct Transitions<'a> {
    iter: slice::Iter<'a, Transition>,
}

impl<'a> Iterator for Transitions<'a> {
    type Item = &'a Transition;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl DoubleEndedIterator for Transitions<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back()
    }
}

impl ExactSizeIterator for Transitions<'_> {}

impl FusedIterator for Transitions<'_> {}
