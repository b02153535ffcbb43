//! Workspace umbrella crate. Re-exports [`citygeo_core`] so the demos under
//! `demos/` can be run from the repository root.
pub use citygeo_core::*;
