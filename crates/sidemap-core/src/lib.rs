//! Sidemap Core — shared errors and doc-id utilities.
//!
//! This crate provides the foundational types used across the Sidemap
//! workspace. It has no internal Sidemap dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`slug`]: Doc-id (slug) well-formedness and normalization

pub mod error;
pub mod slug;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use slug::{is_valid_slug, normalize_slug, slug_segments};
