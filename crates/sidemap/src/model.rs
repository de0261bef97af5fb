//! Navigation node types for sidebar manifests.
//!
//! A navigation node is one of three shapes:
//!
//! - [`DocRef`]: a plain string naming a content document by slug.
//! - [`Category`]: a labelled grouping of further nodes, optionally
//!   collapsible in the rendered sidebar.
//! - [`Link`]: a labelled hyperlink, usually external.
//!
//! On the wire a node is either a bare JSON string (doc reference) or an
//! object tagged by a `type` field equal to `"category"` or `"link"`.
//! Ordering of every `items` sequence is significant — it is the order the
//! generator renders — and is preserved through load and save.

use serde::{Deserialize, Serialize};

// ============================================================================
// DocRef
// ============================================================================

/// A reference to a content document by slug.
///
/// The slug is resolved to an actual document by the site generator's
/// content store; this crate only checks that it is well-formed
/// (see [`sidemap_core::slug::is_valid_slug`]).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocRef(String);

impl DocRef {
    /// Creates a doc reference from a slug.
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// Returns the slug as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterates over the slug's `/`-separated segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        sidemap_core::slug::slug_segments(&self.0)
    }
}

impl std::fmt::Display for DocRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocRef {
    fn from(slug: &str) -> Self {
        Self(slug.to_string())
    }
}

impl From<String> for DocRef {
    fn from(slug: String) -> Self {
        Self(slug)
    }
}

// ============================================================================
// Category
// ============================================================================

/// A labelled grouping of navigation nodes.
///
/// `collapsible` and `collapsed` are stored as written so that
/// serialization is shape-stable; the generator's defaults (both `true`)
/// are applied by [`Category::is_collapsible`] and [`Category::is_collapsed`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Category {
    /// Label shown in the rendered sidebar. Need not be unique.
    pub label: String,
    /// Whether the category can be collapsed. Unset means collapsible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsible: Option<bool>,
    /// Whether the category starts collapsed. Unset means collapsed.
    /// Only meaningful when the category is collapsible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    /// Child nodes, in render order. Must be non-empty in a valid manifest.
    pub items: Vec<NavNode>,
}

impl Category {
    /// Creates an empty category with the given label.
    ///
    /// An empty category fails validation; add items with
    /// [`Category::with_item`] or [`Category::with_items`].
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            collapsible: None,
            collapsed: None,
            items: Vec::new(),
        }
    }

    /// Appends a child node.
    pub fn with_item(mut self, item: impl Into<NavNode>) -> Self {
        self.items.push(item.into());
        self
    }

    /// Appends several child nodes.
    pub fn with_items(mut self, items: impl IntoIterator<Item = NavNode>) -> Self {
        self.items.extend(items);
        self
    }

    /// Sets whether the category can be collapsed.
    pub fn with_collapsible(mut self, collapsible: bool) -> Self {
        self.collapsible = Some(collapsible);
        self
    }

    /// Sets whether the category starts collapsed.
    pub fn with_collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = Some(collapsed);
        self
    }

    /// Whether the rendered category can be collapsed (generator default: `true`).
    pub fn is_collapsible(&self) -> bool {
        self.collapsible.unwrap_or(true)
    }

    /// Whether the rendered category starts collapsed (generator default: `true`).
    ///
    /// A non-collapsible category is never collapsed, whatever `collapsed` says.
    pub fn is_collapsed(&self) -> bool {
        self.is_collapsible() && self.collapsed.unwrap_or(true)
    }
}

// ============================================================================
// Link
// ============================================================================

/// A labelled hyperlink, usually to a page outside the docs site.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Link {
    /// Label shown in the rendered sidebar.
    pub label: String,
    /// Link target. Either an absolute URL or a site-relative path.
    pub href: String,
}

impl Link {
    /// Creates a link.
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

// ============================================================================
// NavNode
// ============================================================================

/// A node in the navigation tree.
///
/// # Wire format
///
/// ```rust
/// use sidemap::NavNode;
///
/// // A bare string is a doc reference
/// let doc: NavNode = serde_json::from_str(r#""essentials/faq""#).unwrap();
/// assert!(doc.is_doc());
///
/// // Objects are tagged by "type"
/// let link: NavNode = serde_json::from_str(
///     r#"{ "type": "link", "label": "API", "href": "https://example.com" }"#,
/// )
/// .unwrap();
/// assert!(link.is_link());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawNode", into = "RawNode")]
pub enum NavNode {
    /// Reference to a content document.
    Doc(DocRef),
    /// Labelled grouping of further nodes.
    Category(Category),
    /// Labelled hyperlink.
    Link(Link),
}

impl NavNode {
    /// Creates a doc-reference node.
    pub fn doc(slug: impl Into<String>) -> Self {
        Self::Doc(DocRef::new(slug))
    }

    /// Whether this node is a doc reference.
    pub fn is_doc(&self) -> bool {
        matches!(self, Self::Doc(_))
    }

    /// Whether this node is a category.
    pub fn is_category(&self) -> bool {
        matches!(self, Self::Category(_))
    }

    /// Whether this node is a link.
    pub fn is_link(&self) -> bool {
        matches!(self, Self::Link(_))
    }

    /// Returns the doc reference, if this node is one.
    pub fn as_doc(&self) -> Option<&DocRef> {
        match self {
            Self::Doc(doc) => Some(doc),
            _ => None,
        }
    }

    /// Returns the category, if this node is one.
    pub fn as_category(&self) -> Option<&Category> {
        match self {
            Self::Category(category) => Some(category),
            _ => None,
        }
    }

    /// Returns the link, if this node is one.
    pub fn as_link(&self) -> Option<&Link> {
        match self {
            Self::Link(link) => Some(link),
            _ => None,
        }
    }

    /// Nesting depth of the subtree rooted at this node.
    ///
    /// A doc reference or link has depth 1; a category is one deeper than
    /// its deepest child.
    pub fn max_depth(&self) -> usize {
        match self {
            Self::Doc(_) | Self::Link(_) => 1,
            Self::Category(category) => {
                1 + category
                    .items
                    .iter()
                    .map(NavNode::max_depth)
                    .max()
                    .unwrap_or(0)
            }
        }
    }
}

impl From<DocRef> for NavNode {
    fn from(doc: DocRef) -> Self {
        Self::Doc(doc)
    }
}

impl From<Category> for NavNode {
    fn from(category: Category) -> Self {
        Self::Category(category)
    }
}

impl From<Link> for NavNode {
    fn from(link: Link) -> Self {
        Self::Link(link)
    }
}

// ============================================================================
// Wire-format helpers
// ============================================================================

/// Wire shape of a node: a bare string or a `type`-tagged object.
#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawNode {
    Doc(DocRef),
    Tagged(TaggedNode),
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum TaggedNode {
    Category(Category),
    Link(Link),
}

impl From<RawNode> for NavNode {
    fn from(raw: RawNode) -> Self {
        match raw {
            RawNode::Doc(doc) => Self::Doc(doc),
            RawNode::Tagged(TaggedNode::Category(category)) => Self::Category(category),
            RawNode::Tagged(TaggedNode::Link(link)) => Self::Link(link),
        }
    }
}

impl From<NavNode> for RawNode {
    fn from(node: NavNode) -> Self {
        match node {
            NavNode::Doc(doc) => Self::Doc(doc),
            NavNode::Category(category) => Self::Tagged(TaggedNode::Category(category)),
            NavNode::Link(link) => Self::Tagged(TaggedNode::Link(link)),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
