//! Compiled-in zone definitions.
//!
//!```rust
//! use libtzdef::definitions;
//! let tz = definitions::get("Asia/Khandyga").unwrap();
//! assert_eq!(tz.offset_at(1315832400).abbreviation, "YAKT");
//!```

pub mod asia;

pub use asia::khandyga::ASIA_KHANDYGA;

use crate::{TransitionTable, TzError};

static ZONES: [&TransitionTable; 1] = [&ASIA_KHANDYGA];

/// Looks a zone up by its identifier, ie. "Asia/Khandyga".
pub fn get(identifier: &str) -> Result<&'static TransitionTable, TzError> {
    ZONES
        .iter()
        .copied()
        .find(|tz| tz.identifier() == identifier)
        .ok_or(TzError::InvalidTimezone)
}

/// Identifiers of every compiled-in zone.
pub fn all_identifiers() -> impl Iterator<Item = &'static str> {
    ZONES.iter().map(|tz| tz.identifier())
}
