// crates/citygeo-core/src/lib.rs

//! City lookup for seeding prayer-time calculations.
//!
//! Two strategies share the [`City`] output shape:
//! - [`StaticIndex`]: ranked offline search over a bundled dataset;
//! - [`RemoteResolver`]: cached online autocomplete against a geocoding
//!   provider, with timezone inference.
//!
//! [`LocationService`] bundles both.

pub mod cache;
pub mod error;
pub mod index;
pub mod loader;
pub mod model;
pub mod rank;
pub mod remote;
pub mod service;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::cache::{QueryCache, TtlCache};
pub use crate::error::{GeoError, Result};
pub use crate::index::StaticIndex;
pub use crate::model::{City, DbStats};
pub use crate::rank::{rank, MatchTier};
#[cfg(feature = "http")]
pub use crate::remote::HttpTransport;
pub use crate::remote::{GeocodeRequest, GeocodeTransport, RemoteConfig, RemoteResolver};
pub use crate::service::LocationService;
