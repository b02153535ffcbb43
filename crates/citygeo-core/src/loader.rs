// crates/citygeo-core/src/loader.rs

//! # Data Loader
//!
//! Handles the physical layer (files, decompression, snapshots) for the
//! static index and validates every record before it becomes searchable.
//!
//! Supported inputs, chosen by file name:
//! - `*.bin`     bincode snapshot written by [`StaticIndex::save_as`]
//! - `*.json.gz` gzip-compressed JSON array (`compact` feature)
//! - anything else: plain JSON array of cities

use crate::error::{GeoError, Result};
use crate::index::StaticIndex;
use crate::model::City;
use once_cell::sync::OnceCell;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// The dataset shipped with the crate.
static BUNDLED_JSON: &str = include_str!("../data/cities.json");

// Single in-process instance so the bundled dataset is parsed once per process.
static BUNDLED_INDEX: OnceCell<StaticIndex> = OnceCell::new();

impl StaticIndex {
    /// The bundled reference dataset, parsed and validated on first use.
    ///
    /// An error here means the shipped data file is broken, which is a build
    /// problem rather than something a caller can recover from.
    pub fn bundled() -> Result<&'static StaticIndex> {
        BUNDLED_INDEX.get_or_try_init(|| Self::from_json_str(BUNDLED_JSON))
    }

    /// Parse a JSON array of cities.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let cities: Vec<City> = serde_json::from_str(json)?;
        Self::from_cities(cities)
    }

    /// Load a dataset from disk. The format is picked from the file name.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        let reader = open_stream(path, name.ends_with(".gz"))?;

        let cities: Vec<City> = if name.ends_with(".bin") {
            bincode::deserialize_from(reader)?
        } else {
            serde_json::from_reader(reader)?
        };

        tracing::debug!(path = %path.display(), cities = cities.len(), "loaded dataset");
        Self::from_cities(cities)
    }

    /// Write the index as a bincode snapshot.
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        bincode::serialize_into(&mut writer, self.all_cities())?;
        writer.flush()?;
        Ok(())
    }
}

/// Opens a file, buffers it, and optionally wraps it in a Gzip decoder.
fn open_stream(path: &Path, gzip: bool) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        GeoError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if !gzip {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        use flate2::read::GzDecoder;
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(GeoError::InvalidData(format!(
            "{} is gzip-compressed but the 'compact' feature is disabled",
            path.display()
        )))
    }
}

/// Check every record against the `City` invariants.
pub(crate) fn validate(cities: &[City]) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(cities.len());

    for (pos, c) in cities.iter().enumerate() {
        let problem = if c.id.trim().is_empty() {
            Some("empty id")
        } else if c.name.trim().is_empty() {
            Some("empty name")
        } else if c.country.trim().is_empty() {
            Some("empty country")
        } else if c.timezone.trim().is_empty() {
            Some("empty timezone")
        } else if !c.latitude.is_finite() || !(-90.0..=90.0).contains(&c.latitude) {
            Some("latitude out of range")
        } else if !c.longitude.is_finite() || !(-180.0..=180.0).contains(&c.longitude) {
            Some("longitude out of range")
        } else if !seen.insert(c.id.as_str()) {
            Some("duplicate id")
        } else {
            None
        };

        if let Some(problem) = problem {
            return Err(GeoError::InvalidData(format!(
                "city #{pos} ({:?}): {problem}",
                c.id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("citygeo-{}-{name}", std::process::id()))
    }

    #[test]
    fn bundled_dataset_is_valid_and_ordered() {
        let index = StaticIndex::bundled().unwrap();
        assert!(index.len() > 100);
        assert_eq!(index.all_cities()[0].name, "Mecca");
    }

    #[test]
    fn bundled_is_shared() {
        let a = StaticIndex::bundled().unwrap() as *const StaticIndex;
        let b = StaticIndex::bundled().unwrap() as *const StaticIndex;
        assert_eq!(a, b);
    }

    #[test]
    fn snapshot_round_trip_preserves_order() {
        let index = StaticIndex::bundled().unwrap();
        let path = temp_path("snapshot.bin");
        index.save_as(&path).unwrap();

        let loaded = StaticIndex::load_from_path(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.all_cities(), index.all_cities());
    }

    #[test]
    fn plain_json_file_loads() {
        let path = temp_path("small.json");
        std::fs::write(
            &path,
            r#"[{"id":"x-1","name":"Xanadu","country":"Nowhere","latitude":1.5,"longitude":-2.5,"timezone":"UTC"}]"#,
        )
        .unwrap();

        let loaded = StaticIndex::load_from_path(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let c = &loaded.all_cities()[0];
        assert_eq!(c.country_code, "");
        assert_eq!(c.population, None);
    }

    #[cfg(feature = "compact")]
    #[test]
    fn gzip_json_file_loads() {
        use flate2::{write::GzEncoder, Compression};

        let path = temp_path("small.json.gz");
        let mut enc = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        enc.write_all(br#"[{"id":"y","name":"Yonder","country":"Far","latitude":0,"longitude":0,"timezone":"UTC","population":7}]"#)
            .unwrap();
        enc.finish().unwrap();

        let loaded = StaticIndex::load_from_path(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.all_cities()[0].population, Some(7));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = StaticIndex::load_from_path(temp_path("missing.json")).unwrap_err();
        assert!(matches!(err, GeoError::NotFound(_)));
    }

    #[test]
    fn out_of_range_coordinates_are_rejected() {
        let json = r#"[{"id":"z","name":"Z","country":"C","latitude":91,"longitude":0,"timezone":"UTC"}]"#;
        let err = StaticIndex::from_json_str(json).unwrap_err();
        assert!(matches!(err, GeoError::InvalidData(_)));
    }
}
