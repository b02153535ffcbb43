// crates/citygeo-core/src/remote/raw.rs

//! Raw provider payload and its conversion into [`City`].
//!
//! The provider schema is loosely specified, so every field here is optional
//! and each feature is decoded on its own: one bad record is dropped, the rest
//! of the response survives.
//!
//! NOTE: These types mirror the external GeoJSON response and are not part of
//! the public API surface.

use super::timezone::infer_timezone;
use crate::error::{GeoError, Result};
use crate::model::City;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;

/// Provider place classifications that count as a settlement.
pub const PLACE_TYPES: &[&str] = &[
    "city",
    "town",
    "village",
    "municipality",
    "locality",
    "hamlet",
    "suburb",
    "district",
];

/// Prefix that namespaces remote ids away from static ones.
pub const REMOTE_ID_PREFIX: &str = "photon-";

/// Country placeholder used when the provider omits it.
pub const UNKNOWN_COUNTRY: &str = "Unknown";

/// Top-level response. Features stay untyped until [`FeatureRaw`] decoding.
#[derive(Debug, Deserialize)]
pub struct ResponseRaw {
    pub features: Option<Vec<Value>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FeatureRaw {
    #[serde(default)]
    pub properties: PropertiesRaw,
    #[serde(default)]
    pub geometry: Option<GeometryRaw>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PropertiesRaw {
    #[serde(default)]
    pub r#type: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub town: Option<String>,
    #[serde(default)]
    pub village: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub countrycode: Option<String>,
    /// Numeric in practice, but tolerated as any JSON scalar.
    #[serde(default)]
    pub osm_id: Option<Value>,
    #[serde(default)]
    pub osm_type: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GeometryRaw {
    /// `[longitude, latitude]`
    #[serde(default)]
    pub coordinates: Vec<Value>,
}

/// Parse a provider body into raw features.
///
/// Fails only when the body is not JSON or has no `features` array; broken
/// individual features are skipped.
pub fn parse_features(body: &str) -> Result<Vec<FeatureRaw>> {
    let response: ResponseRaw = serde_json::from_str(body)
        .map_err(|e| GeoError::MalformedResponse(format!("body is not valid JSON: {e}")))?;

    let features = response
        .features
        .ok_or_else(|| GeoError::MalformedResponse("missing `features` array".into()))?;

    Ok(features
        .into_iter()
        .filter_map(|v| match serde_json::from_value::<FeatureRaw>(v) {
            Ok(f) => Some(f),
            Err(e) => {
                tracing::debug!(err = e.to_string(), "dropping undecodable feature");
                None
            }
        })
        .collect())
}

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl PropertiesRaw {
    pub fn is_place(&self) -> bool {
        non_empty(&self.r#type).is_some_and(|t| PLACE_TYPES.contains(&t.to_lowercase().as_str()))
    }

    /// name → city → town → village
    pub fn display_name(&self) -> Option<&str> {
        non_empty(&self.name)
            .or_else(|| non_empty(&self.city))
            .or_else(|| non_empty(&self.town))
            .or_else(|| non_empty(&self.village))
    }

    fn native_id(&self) -> Option<String> {
        let id = match self.osm_id.as_ref()? {
            Value::Number(n) => n.to_string(),
            Value::String(s) if !s.trim().is_empty() => s.trim().to_string(),
            _ => return None,
        };
        let kind = non_empty(&self.osm_type).unwrap_or("");
        Some(format!("{kind}{id}"))
    }
}

impl FeatureRaw {
    /// `(longitude, latitude)` as the provider orders them.
    pub fn lon_lat(&self) -> Option<(f64, f64)> {
        let coords = &self.geometry.as_ref()?.coordinates;
        let lon = coords.first()?.as_f64()?;
        let lat = coords.get(1)?.as_f64()?;
        let valid = lon.is_finite()
            && lat.is_finite()
            && (-180.0..=180.0).contains(&lon)
            && (-90.0..=90.0).contains(&lat);
        valid.then_some((lon, lat))
    }

    /// Validate and convert into a [`City`], or `None` if a required piece is
    /// missing. Does not look at the place type.
    pub fn into_city(self) -> Option<City> {
        let (longitude, latitude) = self.lon_lat()?;
        let p = &self.properties;
        let name = p.display_name()?.to_string();

        let country = non_empty(&p.country)
            .unwrap_or(UNKNOWN_COUNTRY)
            .to_string();
        let country_code = non_empty(&p.countrycode)
            .map(str::to_ascii_uppercase)
            .unwrap_or_default();

        let id = match p.native_id() {
            Some(native) => format!("{REMOTE_ID_PREFIX}{native}"),
            None => format!("{REMOTE_ID_PREFIX}{latitude},{longitude}"),
        };

        let timezone = infer_timezone(&country_code, longitude);

        Some(City {
            id,
            name,
            country,
            country_code,
            latitude,
            longitude,
            timezone,
            population: None,
        })
    }
}

/// Filter by place type, convert, and drop repeated ids (first one wins).
pub fn features_to_cities(features: Vec<FeatureRaw>) -> Vec<City> {
    let mut seen: HashSet<String> = HashSet::new();
    features
        .into_iter()
        .filter(|f| f.properties.is_place())
        .filter_map(|f| {
            let city = f.into_city();
            if city.is_none() {
                tracing::debug!("dropping feature without a name or coordinates");
            }
            city
        })
        .filter(|c| seen.insert(c.id.clone()))
        .collect()
}
