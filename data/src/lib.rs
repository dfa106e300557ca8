//! Degrees Data: the CSV-backed person–movie graph.
//!
//! Loads `people.csv`, `movies.csv`, and `stars.csv` from a data directory
//! into an in-memory [`Dataset`], resolves human-entered names to person
//! identities (including ambiguity among people sharing a name), and
//! implements the search core's `GraphProvider` contract via co-star
//! expansion.
//!
//! The dataset is an explicit value passed to whoever needs it — there is
//! no process-wide graph state, so independent datasets can coexist in one
//! test run.

#![forbid(unsafe_code)]

pub mod dataset;
pub mod error;
pub mod ident;
pub mod records;

pub use dataset::{Dataset, NameResolution, PersonSummary};
pub use error::DataError;
pub use ident::{MovieId, PersonId};
