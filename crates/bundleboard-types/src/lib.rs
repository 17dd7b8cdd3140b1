//! Shared domain types for Bundleboard.
//!
//! This crate contains the persisted document model (Bundle, Recipe, Prompt),
//! the composite prompt index, the client-facing response shapes, and their
//! associated error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod bundle;
pub mod config;
pub mod error;
