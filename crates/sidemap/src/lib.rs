//! Sidemap — typed model, validation, and traversal for sidebar manifests.
//!
//! A sidebar manifest is the navigation-tree configuration a documentation
//! site generator consumes to render its sidebar: an ordered mapping from
//! sidebar name to a nested sequence of navigation nodes, where each node is
//! a doc reference (a slug string), a category (a labelled grouping of more
//! nodes), or an external link.
//!
//! # Modules
//!
//! - [`model`]: Navigation node types and their wire format
//! - [`manifest`]: The [`Manifest`] container and its query surface
//! - [`validate`]: Schema validation with path-bearing diagnostics
//! - [`loader`]: JSON loading and serialization
//! - [`walk`]: Depth-first traversal
//!
//! # Example
//!
//! ```rust
//! use sidemap::Manifest;
//!
//! let json = r#"{
//!     "docs": [
//!         "intro",
//!         {
//!             "type": "category",
//!             "label": "Guides",
//!             "items": [
//!                 "guides/setup",
//!                 { "type": "link", "label": "API", "href": "https://example.com/api" }
//!             ]
//!         }
//!     ]
//! }"#;
//!
//! let manifest = Manifest::from_json_str(json).unwrap();
//! let ids: Vec<&str> = manifest.doc_ids().map(|d| d.as_str()).collect();
//! assert_eq!(ids, vec!["intro", "guides/setup"]);
//! ```

pub mod loader;
pub mod manifest;
pub mod model;
pub mod validate;
pub mod walk;

// Re-export key types at crate root for convenience
pub use manifest::{Manifest, ManifestStats};
pub use model::{Category, DocRef, Link, NavNode};
pub use validate::{has_errors, validate, Diagnostic, Severity};
pub use walk::walk;

// Re-export the shared error types
pub use sidemap_core::{Error, Result};
