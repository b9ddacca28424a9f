use core::cmp::Ordering;
use core::fmt;

#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

/// Seconds in a day
const DAY: i128 = 86_400;
/// Astronomical Julian day of 1970-01-01T00:00:00Z, doubled (2440587.5 * 2)
const UNIX_EPOCH_JD_X2: i128 = 4_881_175;

/// An exact point in time: `numerator / denominator` seconds since 1970-01-01T00:00:00Z.
///
/// Historical local mean time transitions are recorded as fractions of a day,
/// so they are kept as a reduced fraction instead of a float.
/// ```rust
/// use libtzdef::TransitionInstant;
/// let t = TransitionInstant::from_julian(14556889, 6);
/// assert_eq!(t, TransitionInstant::from_timestamp(-1247558400));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "json", serde(try_from = "RawInstant"))]
pub struct TransitionInstant {
    numerator: i64,
    denominator: u32,
}

#[cfg(feature = "json")]
#[derive(Deserialize)]
struct RawInstant {
    numerator: i64,
    denominator: u32,
}

#[cfg(feature = "json")]
impl TryFrom<RawInstant> for TransitionInstant {
    type Error = crate::TzError;

    fn try_from(raw: RawInstant) -> Result<Self, Self::Error> {
        TransitionInstant::from_ratio(raw.numerator as i128, raw.denominator as i128)
            .ok_or(crate::TzError::ParseError)
    }
}

const fn gcd(mut a: i128, mut b: i128) -> i128 {
    if a < 0 {
        a = -a;
    }
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

impl TransitionInstant {
    /// Instant at a whole number of seconds since the Unix epoch.
    pub const fn from_timestamp(seconds: i64) -> TransitionInstant {
        TransitionInstant {
            numerator: seconds,
            denominator: 1,
        }
    }

    /// Instant at the astronomical Julian day `numerator / denominator`.
    ///
    /// Panics if `denominator` is zero or the instant does not fit; in a `static`
    /// initializer this is a compile error.
    pub const fn from_julian(numerator: i64, denominator: u32) -> TransitionInstant {
        assert!(denominator != 0, "zero denominator");
        let d = denominator as i128;
        // seconds = (n / d - 2440587.5) * 86400
        let n = numerator as i128 * DAY * 2 - UNIX_EPOCH_JD_X2 * DAY * d;
        match TransitionInstant::from_ratio(n, d * 2) {
            Some(t) => t,
            None => panic!("julian day out of range"),
        }
    }

    /// Builds a reduced instant, `None` when the denominator is not positive or
    /// the reduced fraction overflows.
    pub const fn from_ratio(numerator: i128, denominator: i128) -> Option<TransitionInstant> {
        if denominator <= 0 {
            return None;
        }
        let g = gcd(numerator, denominator);
        let n = numerator / g;
        let d = denominator / g;
        if n < i64::MIN as i128 || n > i64::MAX as i128 || d > u32::MAX as i128 {
            return None;
        }
        Some(TransitionInstant {
            numerator: n as i64,
            denominator: d as u32,
        })
    }

    pub const fn numerator(&self) -> i64 {
        self.numerator
    }

    pub const fn denominator(&self) -> u32 {
        self.denominator
    }

    /// True when the instant falls on a whole second.
    pub const fn is_integral(&self) -> bool {
        self.denominator == 1
    }

    /// Greatest whole second not after this instant.
    pub const fn timestamp_floor(&self) -> i64 {
        self.numerator.div_euclid(self.denominator as i64)
    }

    /// Shifts the instant by whole seconds, `None` on overflow.
    pub const fn checked_add_seconds(&self, seconds: i64) -> Option<TransitionInstant> {
        match seconds.checked_mul(self.denominator as i64) {
            Some(shift) => match self.numerator.checked_add(shift) {
                Some(numerator) => Some(TransitionInstant {
                    numerator,
                    denominator: self.denominator,
                }),
                None => None,
            },
            None => None,
        }
    }

    /// Compares this instant shifted by `shift` seconds with `seconds`, without overflow.
    pub const fn cmp_shifted(&self, shift: i64, seconds: i64) -> Ordering {
        let den = self.denominator as i128;
        let l = self.numerator as i128 + shift as i128 * den;
        let r = seconds as i128 * den;
        if l < r {
            Ordering::Less
        } else if l > r {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// Exact ordering, usable in const context.
    pub const fn const_cmp(&self, other: &TransitionInstant) -> Ordering {
        let l = self.numerator as i128 * other.denominator as i128;
        let r = other.numerator as i128 * self.denominator as i128;
        if l < r {
            Ordering::Less
        } else if l > r {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// Compares this instant with a whole number of seconds.
    pub const fn cmp_seconds(&self, seconds: i64) -> Ordering {
        self.const_cmp(&TransitionInstant::from_timestamp(seconds))
    }
}

impl Ord for TransitionInstant {
    fn cmp(&self, other: &Self) -> Ordering {
        self.const_cmp(other)
    }
}

impl PartialOrd for TransitionInstant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<i64> for TransitionInstant {
    fn from(seconds: i64) -> Self {
        TransitionInstant::from_timestamp(seconds)
    }
}

impl fmt::Display for TransitionInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integral() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}
