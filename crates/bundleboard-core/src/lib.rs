//! Business logic and store trait definition for Bundleboard.
//!
//! This crate defines the `BundleStore` port that the infrastructure layer
//! implements, and the `BundleService` that runs the read-transform and
//! load-mutate-save pipelines. It depends only on `bundleboard-types` --
//! never on `bundleboard-infra` or any IO crate.

pub mod service;
pub mod store;
