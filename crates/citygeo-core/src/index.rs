// crates/citygeo-core/src/index.rs
use crate::error::Result;
use crate::model::{City, DbStats};
use crate::rank::rank;
use std::collections::HashSet;

/// Immutable, ordered list of reference cities.
///
/// Iteration order is the stored order of the dataset and never changes after
/// construction, which is what makes ranking ties deterministic. Cities live
/// in a `Vec`, not a hash-based set, for that reason.
#[derive(Clone, Debug)]
pub struct StaticIndex {
    cities: Vec<City>,
}

impl StaticIndex {
    /// Build an index from an already validated list.
    ///
    /// Use [`StaticIndex::from_cities`] for data of unknown quality.
    pub(crate) fn new_unchecked(cities: Vec<City>) -> Self {
        Self { cities }
    }

    /// Build an index, rejecting records that would break the `City` invariants.
    pub fn from_cities(cities: Vec<City>) -> Result<Self> {
        crate::loader::validate(&cities)?;
        Ok(Self::new_unchecked(cities))
    }

    /// The raw dataset, unfiltered, in stored order.
    pub fn all_cities(&self) -> &[City] {
        &self.cities
    }

    /// Ranked search over the whole dataset.
    ///
    /// See [`crate::rank`] for the ordering rules. Never fails; an empty query
    /// returns every city ordered by population.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use citygeo_core::StaticIndex;
    ///
    /// let index = StaticIndex::bundled().unwrap();
    /// for city in index.search_cities("new", Some(5)) {
    ///     println!("{} ({}) {}", city.name, city.country, city.timezone);
    /// }
    /// ```
    pub fn search_cities(&self, query: &str, limit: Option<usize>) -> Vec<City> {
        rank(query, &self.cities, limit)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Find a city by its id. Ids are unique within an index.
    pub fn find_by_id(&self, id: &str) -> Option<&City> {
        self.cities.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Aggregate statistics for the index.
    pub fn stats(&self) -> DbStats {
        let countries: HashSet<&str> = self.cities.iter().map(|c| c.country.as_str()).collect();
        DbStats {
            cities: self.cities.len(),
            countries: countries.len(),
        }
    }
}
