//! CSV row shapes for the three input files.

use serde::Deserialize;

use crate::ident::{MovieId, PersonId};

/// One row of `people.csv`: `id,name,birth`.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonRecord {
    pub id: PersonId,
    pub name: String,
    pub birth: String,
}

/// One row of `movies.csv`: `id,title,year`.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieRecord {
    pub id: MovieId,
    pub title: String,
    pub year: String,
}

/// One row of `stars.csv`: `person_id,movie_id`.
#[derive(Debug, Clone, Deserialize)]
pub struct StarRecord {
    pub person_id: PersonId,
    pub movie_id: MovieId,
}
