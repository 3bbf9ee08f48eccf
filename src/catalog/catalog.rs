use super::record::MovieRecord;
use std::collections::BTreeSet;

/// The denormalized, merged, filtered record set.
///
/// Built once by [`load_and_merge`](super::load_and_merge) and immutable
/// afterwards; any number of readers can share it without locking.
#[derive(Debug)]
pub struct Catalog {
    records: Vec<MovieRecord>,
}

impl Catalog {
    pub(crate) fn new(records: Vec<MovieRecord>) -> Catalog {
        Catalog { records }
    }

    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every distinct release year in the catalog, ascending.
    ///
    /// The distractor universes are sorted so a seeded rng produces the same
    /// question on every run.
    pub fn distinct_years(&self) -> Vec<i32> {
        self.records
            .iter()
            .map(|r| r.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Every distinct genre token across all rows, sorted.
    pub fn distinct_genres(&self) -> Vec<String> {
        self.records
            .iter()
            .flat_map(|r| r.genres.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Every distinct credited actor name, sorted.
    pub fn distinct_actors(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.actor.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
