// crates/citygeo-core/src/traits.rs
use crate::model::City;
use crate::rank::MatchTier;

/// Name-based matching helpers for records that expose a display name and a
/// country.
///
/// Implementors provide `&str` views of their name and country; the default
/// methods do the case-insensitive comparisons the ranking engine relies on.
/// Queries passed in are expected to be normalized already (see
/// [`crate::text::normalize_query`]).
///
/// # Examples
/// ```rust
/// use citygeo_core::traits::NameMatch;
/// use citygeo_core::MatchTier;
///
/// struct Place(&'static str, &'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
///     fn country_str(&self) -> &str { self.1 }
/// }
///
/// let p = Place("Newcastle upon Tyne", "United Kingdom");
/// assert_eq!(p.match_tier("newcastle upon tyne"), Some(MatchTier::Exact));
/// assert_eq!(p.match_tier("new"), Some(MatchTier::Prefix));
/// assert_eq!(p.match_tier("kingdom"), Some(MatchTier::Contains));
/// assert_eq!(p.match_tier("paris"), None);
/// ```
pub trait NameMatch {
    /// Returns the display name used for matching.
    fn name_str(&self) -> &str;

    /// Returns the full country name used for matching.
    fn country_str(&self) -> &str;

    /// Case-insensitive name equality against a normalized query.
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        self.name_str().to_lowercase() == q
    }

    /// Classify how this record matches a normalized, non-empty query.
    ///
    /// Returns `None` when neither the name nor the country contains `q`.
    fn match_tier(&self, q: &str) -> Option<MatchTier> {
        if self.is_named(q) {
            return Some(MatchTier::Exact);
        }
        let name = self.name_str().to_lowercase();
        if name.starts_with(q) {
            Some(MatchTier::Prefix)
        } else if name.contains(q) || self.country_str().to_lowercase().contains(q) {
            Some(MatchTier::Contains)
        } else {
            None
        }
    }
}

impl NameMatch for City {
    #[inline]
    fn name_str(&self) -> &str {
        self.name()
    }

    #[inline]
    fn country_str(&self) -> &str {
        self.country()
    }
}
