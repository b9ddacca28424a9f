//! Lossless JSON form of a transition table (json feature).

use serde::Deserialize;

use crate::{TimezoneOffset, Transition, TransitionTable, TzError};

#[derive(Deserialize)]
struct RawTable {
    identifier: String,
    offsets: Vec<TimezoneOffset>,
    transitions: Vec<Transition>,
}

impl TransitionTable {
    /// Serializes the whole table. Instants keep their numerator and denominator.
    ///
    ///```rust
    /// use libtzdef::{definitions::ASIA_KHANDYGA, TransitionTable};
    /// let json = ASIA_KHANDYGA.to_json().unwrap();
    /// assert_eq!(TransitionTable::from_json(&json).unwrap(), ASIA_KHANDYGA);
    ///```
    pub fn to_json(&self) -> Result<String, TzError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Reads a table written by [`to_json`](Self::to_json), validating it like [`TransitionTable::new`].
    pub fn from_json(json: &str) -> Result<TransitionTable, TzError> {
        let raw: RawTable = serde_json::from_str(json)?;
        TransitionTable::new(raw.identifier, raw.offsets, raw.transitions)
    }
}
