//! Opaque identities for people and movies.
//!
//! Newtypes over the CSV `id` columns. The search core never looks inside
//! them; equality, ordering, and hashing are all it needs. `Ord` matters
//! beyond map keys: neighbor sets are emitted in sorted order so paths are
//! deterministic among equal-length alternatives.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a person, as recorded in `people.csv`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(pub String);

/// Identity of a movie, as recorded in `movies.csv`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub String);

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PersonId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for MovieId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}
