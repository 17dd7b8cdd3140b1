//! Infrastructure layer for Bundleboard.
//!
//! Contains the implementation of the `BundleStore` trait defined in
//! `bundleboard-core` (a JSON file adapter) plus data-directory resolution
//! and the `config.toml` loader.

pub mod config;
pub mod storage;
