//! citygeo-cli
//! ===========
//!
//! Command-line interface for the `citygeo-core` city lookup.
//!
//! This crate primarily provides a binary (`citygeo`). The library target
//! exists so that docs render an overview page.
//!
//! Quick start
//! -----------
//!
//! ```text
//! citygeo search london
//! citygeo search new --limit 5
//! citygeo online "Tetouan"
//! citygeo show gb-london
//! citygeo stats
//! citygeo build --input cities.json --output cities.bin
//! ```
//!
//! For programmatic access use the [`citygeo-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
