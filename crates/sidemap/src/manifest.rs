//! The [`Manifest`] container: named sidebars and their query surface.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use sidemap_core::{Error, Result};

use crate::model::{DocRef, Link, NavNode};
use crate::walk::walk;

// ============================================================================
// Manifest
// ============================================================================

/// A sidebar manifest: an ordered mapping from sidebar name to a sequence
/// of navigation nodes.
///
/// Both the sidebar ordering and every node sequence are order-significant
/// (they determine render order), so the map preserves insertion order.
/// The manifest is loaded once and read-only thereafter from the
/// generator's perspective; the mutation surface here exists for
/// programmatic construction and tests.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    sidebars: IndexMap<String, Vec<NavNode>>,
}

impl Manifest {
    /// Creates an empty manifest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sidebars.
    pub fn len(&self) -> usize {
        self.sidebars.len()
    }

    /// Whether the manifest has no sidebars.
    pub fn is_empty(&self) -> bool {
        self.sidebars.is_empty()
    }

    /// Looks up a sidebar's nodes by name.
    pub fn get(&self, name: &str) -> Option<&[NavNode]> {
        self.sidebars.get(name).map(Vec::as_slice)
    }

    /// Looks up a sidebar's nodes by name, erroring if absent.
    pub fn sidebar(&self, name: &str) -> Result<&[NavNode]> {
        self.get(name).ok_or_else(|| Error::SidebarNotFound {
            name: name.to_string(),
        })
    }

    /// Iterates over sidebar names in insertion order.
    pub fn sidebar_names(&self) -> impl Iterator<Item = &str> {
        self.sidebars.keys().map(String::as_str)
    }

    /// Iterates over `(name, nodes)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[NavNode])> {
        self.sidebars
            .iter()
            .map(|(name, nodes)| (name.as_str(), nodes.as_slice()))
    }

    /// Adds or replaces a sidebar.
    pub fn insert(&mut self, name: impl Into<String>, nodes: Vec<NavNode>) {
        self.sidebars.insert(name.into(), nodes);
    }

    // ========================================================================
    // Tree queries
    // ========================================================================

    /// Every doc reference in every sidebar, in render order.
    pub fn doc_ids(&self) -> impl Iterator<Item = &DocRef> {
        self.sidebars
            .values()
            .flat_map(|nodes| walk(nodes))
            .filter_map(|(node, _)| node.as_doc())
    }

    /// Every link in every sidebar, in render order.
    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.sidebars
            .values()
            .flat_map(|nodes| walk(nodes))
            .filter_map(|(node, _)| node.as_link())
    }

    /// Counts and depth statistics over the whole manifest.
    pub fn stats(&self) -> ManifestStats {
        let mut stats = ManifestStats {
            sidebars: self.sidebars.len(),
            ..ManifestStats::default()
        };

        for nodes in self.sidebars.values() {
            for (node, _) in walk(nodes) {
                match node {
                    NavNode::Doc(_) => stats.docs += 1,
                    NavNode::Category(_) => stats.categories += 1,
                    NavNode::Link(_) => stats.links += 1,
                }
            }
            let depth = nodes.iter().map(NavNode::max_depth).max().unwrap_or(0);
            stats.max_depth = stats.max_depth.max(depth);
        }

        stats
    }
}

// ============================================================================
// ManifestStats
// ============================================================================

/// Summary statistics for a manifest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestStats {
    /// Number of sidebars.
    pub sidebars: usize,
    /// Number of doc references across all sidebars.
    pub docs: usize,
    /// Number of categories across all sidebars.
    pub categories: usize,
    /// Number of links across all sidebars.
    pub links: usize,
    /// Deepest nesting across all sidebars (1 = flat).
    pub max_depth: usize,
}

// ============================================================================
// Tests
// ============================================================================
