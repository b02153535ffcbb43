// crates/citygeo-core/src/model.rs
use serde::{Deserialize, Serialize};

/// A resolved location, the common output of both search strategies.
///
/// Every `City` handed to a caller has a non-empty `name`, `country` and
/// `timezone`, and finite coordinates. `population` is only filled in by the
/// static index and exists for ranking.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    /// Unique within one resolver's namespace. Remote ids carry a `photon-` prefix.
    pub id: String,
    pub name: String,
    pub country: String,
    /// Two-letter code, empty when unknown.
    #[serde(default)]
    pub country_code: String,
    pub latitude: f64,
    pub longitude: f64,
    /// IANA zone name, or a synthesized `Etc/GMT±N` zone.
    pub timezone: String,
    #[serde(default)]
    pub population: Option<u64>,
}

impl City {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    /// Population used for ordering; missing counts as zero.
    #[inline]
    pub fn rank_population(&self) -> u64 {
        self.population.unwrap_or(0)
    }

    /// True when the timezone was synthesized from longitude rather than looked up.
    pub fn has_approximate_timezone(&self) -> bool {
        self.timezone.starts_with("Etc/GMT")
    }
}

/// Simple aggregate statistics for a static index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub cities: usize,
    pub countries: usize,
}
