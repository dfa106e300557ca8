//! In-memory person–movie graph loaded from CSV files.

use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::path::Path;

use serde::de::DeserializeOwned;

use degrees_search::contract::GraphProvider;
use degrees_search::error::SearchError;
use degrees_search::node::Action;

use crate::error::DataError;
use crate::ident::{MovieId, PersonId};
use crate::records::{MovieRecord, PersonRecord, StarRecord};

/// A person and the movies they starred in.
#[derive(Debug, Clone)]
pub struct Person {
    pub name: String,
    pub birth: String,
    pub movies: BTreeSet<MovieId>,
}

/// A movie and the people who starred in it.
#[derive(Debug, Clone)]
pub struct Movie {
    pub title: String,
    pub year: String,
    pub stars: BTreeSet<PersonId>,
}

/// Result of resolving a human-entered name to a person identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameResolution {
    /// No person with that name.
    NotFound,
    /// Exactly one person with that name.
    Unique(PersonId),
    /// Several people share the name; the caller picks one of these.
    Ambiguous(Vec<PersonSummary>),
}

/// Enough about one person to disambiguate a shared name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonSummary {
    pub id: PersonId,
    pub name: String,
    pub birth: String,
}

/// The loaded bipartite graph: people, movies, and a name index.
///
/// An explicit value with no global state; independent datasets can be
/// loaded side by side. Implements the search core's [`GraphProvider`] by
/// co-star expansion.
#[derive(Debug, Default)]
pub struct Dataset {
    people: HashMap<PersonId, Person>,
    movies: HashMap<MovieId, Movie>,
    names: HashMap<String, BTreeSet<PersonId>>,
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DataError> {
    let file = File::open(path).map_err(|source| DataError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row.map_err(|source| DataError::Csv {
            path: path.to_path_buf(),
            source,
        })?);
    }
    Ok(rows)
}

impl Dataset {
    /// Load `people.csv`, `movies.csv`, and `stars.csv` from `dir`.
    ///
    /// Star rows naming a person or movie absent from the other two files
    /// are skipped whole, so the loaded graph never holds a dangling
    /// identity (the published datasets contain such rows).
    ///
    /// # Errors
    ///
    /// Returns [`DataError`] if any of the three files cannot be opened or
    /// contains a malformed row.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, DataError> {
        let dir = dir.as_ref();
        let mut dataset = Self::default();

        for record in read_rows::<PersonRecord>(&dir.join("people.csv"))? {
            dataset
                .names
                .entry(record.name.to_lowercase())
                .or_default()
                .insert(record.id.clone());
            dataset.people.insert(
                record.id,
                Person {
                    name: record.name,
                    birth: record.birth,
                    movies: BTreeSet::new(),
                },
            );
        }

        for record in read_rows::<MovieRecord>(&dir.join("movies.csv"))? {
            dataset.movies.insert(
                record.id,
                Movie {
                    title: record.title,
                    year: record.year,
                    stars: BTreeSet::new(),
                },
            );
        }

        for record in read_rows::<StarRecord>(&dir.join("stars.csv"))? {
            if !dataset.people.contains_key(&record.person_id)
                || !dataset.movies.contains_key(&record.movie_id)
            {
                continue;
            }
            if let Some(person) = dataset.people.get_mut(&record.person_id) {
                person.movies.insert(record.movie_id.clone());
            }
            if let Some(movie) = dataset.movies.get_mut(&record.movie_id) {
                movie.stars.insert(record.person_id.clone());
            }
        }

        Ok(dataset)
    }

    /// Look up a person by identity.
    #[must_use]
    pub fn person(&self, id: &PersonId) -> Option<&Person> {
        self.people.get(id)
    }

    /// Look up a movie by identity.
    #[must_use]
    pub fn movie(&self, id: &MovieId) -> Option<&Movie> {
        self.movies.get(id)
    }

    /// Number of loaded people.
    #[must_use]
    pub fn people_count(&self) -> usize {
        self.people.len()
    }

    /// Number of loaded movies.
    #[must_use]
    pub fn movies_count(&self) -> usize {
        self.movies.len()
    }

    /// Resolve a name (case-insensitively) to a person identity.
    ///
    /// Several people may share one name; the ambiguity is returned as
    /// data for the caller to settle, not settled here.
    #[must_use]
    pub fn resolve_name(&self, name: &str) -> NameResolution {
        let Some(ids) = self.names.get(&name.to_lowercase()) else {
            return NameResolution::NotFound;
        };
        if ids.len() == 1 {
            if let Some(id) = ids.iter().next() {
                return NameResolution::Unique(id.clone());
            }
        }
        let candidates = ids
            .iter()
            .filter_map(|id| {
                self.people.get(id).map(|person| PersonSummary {
                    id: id.clone(),
                    name: person.name.clone(),
                    birth: person.birth.clone(),
                })
            })
            .collect();
        NameResolution::Ambiguous(candidates)
    }
}

impl GraphProvider<PersonId, MovieId> for Dataset {
    /// Co-star expansion: every (movie, star) pair over the person's
    /// movies, the person themself included (the engine suppresses it).
    /// Pairs are emitted in sorted order so equal-length paths resolve
    /// deterministically.
    fn neighbors(&self, state: &PersonId) -> Result<Vec<Action<PersonId, MovieId>>, SearchError> {
        let person = self
            .people
            .get(state)
            .ok_or_else(|| SearchError::UnknownState {
                detail: format!("person {state} is not in the dataset"),
            })?;

        let mut pairs: BTreeSet<(MovieId, PersonId)> = BTreeSet::new();
        for movie_id in &person.movies {
            if let Some(movie) = self.movies.get(movie_id) {
                for star in &movie.stars {
                    pairs.insert((movie_id.clone(), star.clone()));
                }
            }
        }

        Ok(pairs
            .into_iter()
            .map(|(edge, state)| Action { edge, state })
            .collect())
    }
}
