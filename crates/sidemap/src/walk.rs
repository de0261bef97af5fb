//! Depth-first traversal of navigation trees.
//!
//! [`walk`] visits every node of a node sequence in render order
//! (pre-order: a category is yielded before its children), carrying the
//! nesting depth of each node. Top-level nodes have depth 0.

use crate::model::NavNode;

/// Iterator over a navigation tree in depth-first pre-order.
///
/// Created by [`walk`]. Yields `(node, depth)` pairs; siblings are visited
/// in their stored order.
pub struct Walk<'a> {
    stack: Vec<(&'a NavNode, usize)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (&'a NavNode, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.stack.pop()?;
        if let NavNode::Category(category) = node {
            // Push children in reverse so they pop in render order.
            for child in category.items.iter().rev() {
                self.stack.push((child, depth + 1));
            }
        }
        Some((node, depth))
    }
}

/// Walk a node sequence depth-first, in render order.
///
/// # Example
///
/// ```rust
/// use sidemap::model::{Category, NavNode};
/// use sidemap::walk;
///
/// let nodes = vec![
///     NavNode::doc("intro"),
///     Category::new("Guides")
///         .with_item(NavNode::doc("guides/setup"))
///         .into(),
/// ];
///
/// let depths: Vec<usize> = walk(&nodes).map(|(_, depth)| depth).collect();
/// assert_eq!(depths, vec![0, 0, 1]);
/// ```
pub fn walk(nodes: &[NavNode]) -> Walk<'_> {
    Walk {
        stack: nodes.iter().rev().map(|node| (node, 0)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, DocRef, Link};

    fn sample_tree() -> Vec<NavNode> {
        vec![
            NavNode::doc("intro"),
            Category::new("Essentials")
                .with_item(NavNode::doc("essentials/first"))
                .with_item(
                    Category::new("Advanced")
                        .with_item(NavNode::doc("advanced/select"))
                        .with_item(Link::new("API", "https://example.com/api")),
                )
                .with_item(NavNode::doc("essentials/faq"))
                .into(),
            NavNode::doc("outro"),
        ]
    }

    #[test]
    fn test_walk_empty() {
        assert_eq!(walk(&[]).count(), 0);
    }

    #[test]
    fn test_walk_visits_all_nodes() {
        let nodes = sample_tree();
        // intro, Essentials, first, Advanced, select, link, faq, outro
        assert_eq!(walk(&nodes).count(), 8);
    }

    #[test]
    fn test_walk_pre_order() {
        let nodes = sample_tree();
        let labels: Vec<String> = walk(&nodes)
            .map(|(node, _)| match node {
                NavNode::Doc(doc) => doc.to_string(),
                NavNode::Category(category) => category.label.clone(),
                NavNode::Link(link) => link.label.clone(),
            })
            .collect();

        assert_eq!(
            labels,
            vec![
                "intro",
                "Essentials",
                "essentials/first",
                "Advanced",
                "advanced/select",
                "API",
                "essentials/faq",
                "outro",
            ]
        );
    }

    #[test]
    fn test_walk_depths() {
        let nodes = sample_tree();
        let depths: Vec<usize> = walk(&nodes).map(|(_, depth)| depth).collect();
        assert_eq!(depths, vec![0, 0, 1, 1, 2, 2, 1, 0]);
    }

    #[test]
    fn test_walk_filter_docs_in_order() {
        let nodes = sample_tree();
        let ids: Vec<&str> = walk(&nodes)
            .filter_map(|(node, _)| node.as_doc().map(DocRef::as_str))
            .collect();
        assert_eq!(
            ids,
            vec![
                "intro",
                "essentials/first",
                "advanced/select",
                "essentials/faq",
                "outro",
            ]
        );
    }
}
