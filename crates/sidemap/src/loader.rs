//! Loading and serializing manifests.
//!
//! Loading is two-phase: the JSON tree is schema-validated first (so
//! failures carry tree paths), then deserialized into the typed
//! [`Manifest`]. Validation errors reject the manifest; warnings are
//! either logged ([`Manifest::from_json_str`]) or handed back to the
//! caller ([`Manifest::from_json_str_with_diagnostics`]).

use std::path::Path;

use serde_json::Value;
use sidemap_core::{Error, Result};

use crate::manifest::Manifest;
use crate::validate::{validate, Diagnostic};

impl Manifest {
    /// Parse a manifest from a JSON string, logging any warnings.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sidemap::Manifest;
    ///
    /// let manifest = Manifest::from_json_str(r#"{ "docs": ["intro"] }"#).unwrap();
    /// assert_eq!(manifest.len(), 1);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let (manifest, diagnostics) = Self::from_json_str_with_diagnostics(json)?;
        for diagnostic in &diagnostics {
            log::warn!("{diagnostic}");
        }
        Ok(manifest)
    }

    /// Parse a manifest from a JSON string, returning warnings to the caller.
    ///
    /// Returns `Err` if the JSON is malformed or any validation error is
    /// found; the error message lists every failed check with its tree
    /// path. The returned diagnostics are warnings only.
    pub fn from_json_str_with_diagnostics(json: &str) -> Result<(Self, Vec<Diagnostic>)> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| Error::parse(format!("Malformed manifest JSON: {e}")))?;

        let diagnostics = validate(&value);
        let (errors, warnings): (Vec<Diagnostic>, Vec<Diagnostic>) =
            diagnostics.into_iter().partition(|d| d.is_error());

        if !errors.is_empty() {
            let summary = errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<String>>()
                .join("; ");
            return Err(Error::validation(summary));
        }

        let manifest: Manifest = serde_json::from_value(value)
            .map_err(|e| Error::parse(format!("Failed to deserialize manifest: {e}")))?;

        Ok((manifest, warnings))
    }

    /// Load a manifest from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        Self::from_json_str(&json)
    }

    /// Serialize the manifest to pretty-printed JSON.
    ///
    /// Output reproduces the load order of sidebars and nodes, so
    /// load → save is shape-stable.
    pub fn to_json_string_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// ============================================================================
// Tests
// ============================================================================
