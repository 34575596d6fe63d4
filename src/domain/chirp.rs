//! Chirp records and the persisted database layout

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// A stored text entry with a unique, sequential id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chirp {
    pub id: u64,
    pub body: String,
}

impl Chirp {
    pub fn new(id: u64, body: impl Into<String>) -> Self {
        Chirp {
            id,
            body: body.into(),
        }
    }
}

/// Full contents of the database file.
///
/// Keys are written as JSON strings and parsed back to integers on load.
/// A missing or `null` `chirps` field reads as an empty map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStructure {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub chirps: BTreeMap<u64, Chirp>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<BTreeMap<u64, Chirp>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<BTreeMap<u64, Chirp>>::deserialize(deserializer)?.unwrap_or_default())
}

impl DbStructure {
    /// Id the next inserted chirp will receive.
    ///
    /// Derived from the record count, so it stays dense only while chirps
    /// are never removed.
    pub fn next_id(&self) -> u64 {
        self.chirps.len() as u64 + 1
    }

    /// Append a chirp with the next id and return a copy of it
    pub fn insert(&mut self, body: impl Into<String>) -> Chirp {
        let chirp = Chirp::new(self.next_id(), body);
        self.chirps.insert(chirp.id, chirp.clone());
        chirp
    }

    /// All chirps, ascending by id
    pub fn into_sorted(self) -> Vec<Chirp> {
        let mut chirps: Vec<Chirp> = self.chirps.into_values().collect();
        chirps.sort_by_key(|chirp| chirp.id);
        chirps
    }

    pub fn len(&self) -> usize {
        self.chirps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chirps.is_empty()
    }
}
