// crates/citygeo-core/src/rank.rs

//! # Ranking Engine
//!
//! Orders candidate cities for a query string. Pure computation over a
//! borrowed slice: no I/O, no failure modes, safe to call concurrently.
//!
//! # Ordering (each key only breaks ties in the previous one)
//!
//! 1. [`MatchTier`]: exact name, then name prefix, then any substring of
//!    name or country.
//! 2. Population, descending. Missing population counts as zero.
//! 3. Position in the dataset (the sort is stable).
//!
//! An empty (or whitespace-only) query matches everything and is ordered by
//! population alone.

use crate::model::City;
use crate::text::normalize_query;
use crate::traits::NameMatch;
use std::cmp::Reverse;

/// Priority class of a match. Lower sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchTier {
    /// Lowercased name equals the query.
    Exact,
    /// Lowercased name starts with the query.
    Prefix,
    /// Query found anywhere in the name or the country.
    Contains,
}

/// Rank `dataset` against `query`, returning at most `limit` entries.
///
/// `limit = None` means unbounded. A `limit` larger than the match count is
/// not an error; `Some(0)` yields an empty list.
pub fn rank<'a>(query: &str, dataset: &'a [City], limit: Option<usize>) -> Vec<&'a City> {
    let q = normalize_query(query);
    let cap = limit.unwrap_or(usize::MAX);

    if q.is_empty() {
        let mut all: Vec<&City> = dataset.iter().collect();
        all.sort_by_key(|c| Reverse(c.rank_population()));
        all.truncate(cap);
        return all;
    }

    let mut hits: Vec<(MatchTier, &City)> = dataset
        .iter()
        .filter_map(|city| city.match_tier(&q).map(|tier| (tier, city)))
        .collect();

    hits.sort_by_key(|(tier, city)| (*tier, Reverse(city.rank_population())));

    hits.into_iter().take(cap).map(|(_, city)| city).collect()
}
