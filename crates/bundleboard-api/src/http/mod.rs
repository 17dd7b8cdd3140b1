//! HTTP/REST API layer for Bundleboard.
//!
//! Axum-based API with permissive CORS for browser clients.

pub mod error;
pub mod handlers;
pub mod router;
