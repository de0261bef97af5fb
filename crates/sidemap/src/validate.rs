//! Schema validation for sidebar manifests.
//!
//! Validation runs over the raw JSON tree *before* typed deserialization,
//! so every diagnostic can carry the exact tree path that produced it
//! (e.g. `docs[2].items[0]`) instead of serde's opaque untagged-enum
//! errors. [`crate::loader`] runs validation first and only deserializes
//! manifests whose diagnostics contain no errors.
//!
//! Errors reject the manifest:
//!
//! - top level not an object, or a sidebar not an array
//! - a node that is neither a string nor an object
//! - an object node with a missing, non-string, or unknown `type` tag
//! - a `category` without a string `label` or a non-empty `items` array
//! - a `link` without string `label` and `href`, or with an `href` that is
//!   neither a valid absolute URL nor a site-relative path
//! - a malformed doc slug, or an unknown field on any object node
//!
//! Warnings are reported but do not reject:
//!
//! - `collapsed` set on a category that sets `collapsible: false`
//! - the same doc id appearing twice within one sidebar

use std::collections::HashSet;
use std::fmt;

use serde_json::{Map, Value};
use sidemap_core::slug::is_valid_slug;
use url::Url;

// ============================================================================
// Diagnostic types
// ============================================================================

/// How serious a diagnostic is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    /// The manifest cannot be used.
    Error,
    /// The manifest is usable but something is almost certainly a mistake.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("error"),
            Severity::Warning => f.write_str("warning"),
        }
    }
}

/// A single validation finding, tied to a path in the manifest tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Error or warning.
    pub severity: Severity,
    /// Tree path, e.g. `docs[2].items[0]`.
    pub path: String,
    /// Human-readable description.
    pub message: String,
}

impl Diagnostic {
    /// Creates an error diagnostic.
    pub fn error(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a warning diagnostic.
    pub fn warning(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            path: path.into(),
            message: message.into(),
        }
    }

    /// Whether this diagnostic is an error.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}: {}", self.severity, self.path, self.message)
    }
}

/// Whether any diagnostic in the slice is an error.
pub fn has_errors(diagnostics: &[Diagnostic]) -> bool {
    diagnostics.iter().any(Diagnostic::is_error)
}

// ============================================================================
// Validation entry point
// ============================================================================

/// Fields a `category` node may carry.
const CATEGORY_FIELDS: &[&str] = &["type", "label", "collapsible", "collapsed", "items"];

/// Fields a `link` node may carry.
const LINK_FIELDS: &[&str] = &["type", "label", "href"];

/// Validate a raw manifest tree, returning every finding.
///
/// An empty result means the manifest is clean; use [`has_errors`] to
/// distinguish rejection from warnings-only.
///
/// # Example
///
/// ```rust
/// use sidemap::validate::{has_errors, validate};
///
/// let value = serde_json::json!({
///     "docs": [{ "type": "widget", "label": "Nope" }]
/// });
/// let diagnostics = validate(&value);
///
/// assert!(has_errors(&diagnostics));
/// assert_eq!(diagnostics[0].path, "docs[0]");
/// ```
pub fn validate(value: &Value) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    let Some(sidebars) = value.as_object() else {
        diagnostics.push(Diagnostic::error(
            "$",
            "manifest must be an object mapping sidebar names to node arrays",
        ));
        return diagnostics;
    };

    for (name, sidebar) in sidebars {
        let Some(nodes) = sidebar.as_array() else {
            diagnostics.push(Diagnostic::error(
                name.clone(),
                "sidebar must be an array of navigation nodes",
            ));
            continue;
        };

        // Duplicate doc ids are tracked per sidebar; the same doc may
        // legitimately appear in several sidebars.
        let mut seen_docs: HashSet<&str> = HashSet::new();

        for (index, node) in nodes.iter().enumerate() {
            let path = format!("{name}[{index}]");
            check_node(&path, node, &mut seen_docs, &mut diagnostics);
        }
    }

    diagnostics
}

// ============================================================================
// Node checks
// ============================================================================

fn check_node<'a>(
    path: &str,
    node: &'a Value,
    seen_docs: &mut HashSet<&'a str>,
    diagnostics: &mut Vec<Diagnostic>,
) {
    match node {
        Value::String(slug) => check_doc(path, slug, seen_docs, diagnostics),
        Value::Object(fields) => check_object(path, fields, seen_docs, diagnostics),
        _ => diagnostics.push(Diagnostic::error(
            path,
            "node must be a string (doc id) or a `type`-tagged object",
        )),
    }
}

fn check_doc<'a>(
    path: &str,
    slug: &'a str,
    seen_docs: &mut HashSet<&'a str>,
    diagnostics: &mut Vec<Diagnostic>,
) {
    if !is_valid_slug(slug) {
        diagnostics.push(Diagnostic::error(
            path,
            format!("malformed doc id {slug:?}"),
        ));
        return;
    }
    if !seen_docs.insert(slug) {
        diagnostics.push(Diagnostic::warning(
            path,
            format!("doc id {slug:?} appears more than once in this sidebar"),
        ));
    }
}

fn check_object<'a>(
    path: &str,
    fields: &'a Map<String, Value>,
    seen_docs: &mut HashSet<&'a str>,
    diagnostics: &mut Vec<Diagnostic>,
) {
    match fields.get("type") {
        Some(Value::String(tag)) if tag == "category" => {
            check_category(path, fields, seen_docs, diagnostics);
        }
        Some(Value::String(tag)) if tag == "link" => {
            check_link(path, fields, diagnostics);
        }
        Some(Value::String(tag)) => diagnostics.push(Diagnostic::error(
            path,
            format!("unknown node type {tag:?} (expected \"category\" or \"link\")"),
        )),
        Some(_) => diagnostics.push(Diagnostic::error(path, "`type` must be a string")),
        None => diagnostics.push(Diagnostic::error(
            path,
            "object node is missing its `type` field",
        )),
    }
}

fn check_category<'a>(
    path: &str,
    fields: &'a Map<String, Value>,
    seen_docs: &mut HashSet<&'a str>,
    diagnostics: &mut Vec<Diagnostic>,
) {
    check_known_fields(path, fields, CATEGORY_FIELDS, diagnostics);
    check_label(path, fields, diagnostics);

    for flag in ["collapsible", "collapsed"] {
        if let Some(value) = fields.get(flag) {
            if !value.is_boolean() {
                diagnostics.push(Diagnostic::error(path, format!("`{flag}` must be a boolean")));
            }
        }
    }

    // `collapsed` is ignored by the generator when the category cannot
    // collapse, so setting both is almost certainly a mistake.
    if fields.get("collapsible") == Some(&Value::Bool(false)) && fields.contains_key("collapsed") {
        diagnostics.push(Diagnostic::warning(
            path,
            "`collapsed` has no effect on a non-collapsible category",
        ));
    }

    match fields.get("items") {
        Some(Value::Array(items)) if items.is_empty() => {
            diagnostics.push(Diagnostic::error(
                path,
                "category has no items (the generator cannot render an empty category)",
            ));
        }
        Some(Value::Array(items)) => {
            for (index, item) in items.iter().enumerate() {
                let child_path = format!("{path}.items[{index}]");
                check_node(&child_path, item, seen_docs, diagnostics);
            }
        }
        Some(_) => diagnostics.push(Diagnostic::error(path, "`items` must be an array")),
        None => diagnostics.push(Diagnostic::error(path, "category is missing `items`")),
    }
}

fn check_link(path: &str, fields: &Map<String, Value>, diagnostics: &mut Vec<Diagnostic>) {
    check_known_fields(path, fields, LINK_FIELDS, diagnostics);
    check_label(path, fields, diagnostics);

    match fields.get("href") {
        Some(Value::String(href)) => {
            if !is_valid_href(href) {
                diagnostics.push(Diagnostic::error(
                    path,
                    format!("href {href:?} is not a valid URL or site-relative path"),
                ));
            }
        }
        Some(_) => diagnostics.push(Diagnostic::error(path, "`href` must be a string")),
        None => diagnostics.push(Diagnostic::error(path, "link is missing `href`")),
    }
}

fn check_known_fields(
    path: &str,
    fields: &Map<String, Value>,
    known: &[&str],
    diagnostics: &mut Vec<Diagnostic>,
) {
    for field in fields.keys() {
        if !known.contains(&field.as_str()) {
            diagnostics.push(Diagnostic::error(path, format!("unknown field `{field}`")));
        }
    }
}

fn check_label(path: &str, fields: &Map<String, Value>, diagnostics: &mut Vec<Diagnostic>) {
    match fields.get("label") {
        Some(Value::String(_)) => {}
        Some(_) => diagnostics.push(Diagnostic::error(path, "`label` must be a string")),
        None => diagnostics.push(Diagnostic::error(path, "node is missing `label`")),
    }
}

/// An href is valid if it parses as an absolute URL or is site-relative.
fn is_valid_href(href: &str) -> bool {
    if href.starts_with('/') {
        // Site-relative path; resolved against the site root at render time.
        return href.len() > 1 || href == "/";
    }
    Url::parse(href).is_ok()
}

// ============================================================================
// Tests
// ============================================================================
