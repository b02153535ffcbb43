// crates/citygeo-core/src/service.rs
use crate::index::StaticIndex;
use crate::model::City;
use crate::remote::RemoteResolver;

/// Both resolution strategies behind one handle.
///
/// The caller picks a strategy per query; results from the two are never
/// merged or de-duplicated against each other.
#[derive(Debug)]
pub struct LocationService<'a> {
    index: &'a StaticIndex,
    remote: RemoteResolver,
}

impl<'a> LocationService<'a> {
    pub fn new(index: &'a StaticIndex, remote: RemoteResolver) -> Self {
        Self { index, remote }
    }

    /// Offline ranked search. Synchronous, never fails.
    pub fn search_cities(&self, query: &str, limit: Option<usize>) -> Vec<City> {
        self.index.search_cities(query, limit)
    }

    /// Online search through the cache. Never fails; errors become `[]`.
    pub async fn search_online(&self, query: &str, limit: Option<usize>) -> Vec<City> {
        self.remote.search_online(query, limit).await
    }

    pub fn get_all_cities(&self) -> &[City] {
        self.index.all_cities()
    }

    pub fn clear_cache(&self) {
        self.remote.clear_cache();
    }

    pub fn index(&self) -> &StaticIndex {
        self.index
    }

    pub fn remote(&self) -> &RemoteResolver {
        &self.remote
    }
}

#[cfg(feature = "http")]
impl LocationService<'static> {
    /// Bundled dataset plus the default HTTP provider.
    pub fn with_defaults() -> crate::Result<Self> {
        let index = StaticIndex::bundled()?;
        let remote = RemoteResolver::http(crate::remote::RemoteConfig::default())?;
        Ok(Self::new(index, remote))
    }
}
