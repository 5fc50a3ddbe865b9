//! Tag-style builder: a root element with nested `<tag>` children.

use std::fmt;

use tracing::trace;

use crate::domain::arena::{ElementArena, ElementData, ElementNode, NodeId, TreeIterator};
use crate::domain::error::DomainResult;
use crate::domain::render::{IndentUnit, Render};

/// Incrementally builds an element tree and renders it as indented markup.
///
/// The builder owns its root exclusively; callers only see the tree through rendering,
/// the outline view and read-only traversal.
///
/// ```
/// use rsbuilder::domain::{HtmlBuilder, Render};
///
/// let mut builder = HtmlBuilder::new("ul");
/// builder.add_child("li", "hello").add_child("li", "world");
/// assert!(builder.to_text().starts_with("<ul>\n  <li>\n    hello"));
/// ```
#[derive(Debug, Clone)]
pub struct HtmlBuilder {
    tree: ElementArena,
    indent: IndentUnit,
}

impl HtmlBuilder {
    pub fn new(root_name: impl Into<String>) -> Self {
        Self::with_indent(root_name, IndentUnit::TAG)
    }

    pub fn with_indent(root_name: impl Into<String>, indent: IndentUnit) -> Self {
        Self {
            tree: ElementArena::new(ElementData::new(root_name, "")),
            indent,
        }
    }

    pub fn root_name(&self) -> &str {
        self.tree
            .get_node(self.tree.root())
            .map(|node| node.data.name.as_str())
            .unwrap_or_default()
    }

    pub fn indent(&self) -> IndentUnit {
        self.indent
    }

    /// Handle of the root element, for use with [`HtmlBuilder::add_child_to`].
    pub fn root(&self) -> NodeId {
        self.tree.root()
    }

    /// Append a child to the root; chainable.
    pub fn add_child(&mut self, name: impl Into<String>, text: impl Into<String>) -> &mut Self {
        self.push_child(name, text);
        self
    }

    /// Owned variant of [`HtmlBuilder::add_child`] for building in one expression.
    pub fn with_child(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.push_child(name, text);
        self
    }

    /// Append a child to the root and return its handle.
    pub fn push_child(&mut self, name: impl Into<String>, text: impl Into<String>) -> NodeId {
        let data = ElementData::new(name, text);
        trace!("append to root {:?}: {}", self.root_name(), data);
        self.tree.push_root_child(data)
    }

    /// Append a child below any element previously added to this builder.
    pub fn add_child_to(
        &mut self,
        parent: NodeId,
        name: impl Into<String>,
        text: impl Into<String>,
    ) -> DomainResult<NodeId> {
        self.tree.insert_node(ElementData::new(name, text), parent)
    }

    /// Number of direct children of the root.
    pub fn len(&self) -> usize {
        self.tree
            .get_node(self.tree.root())
            .map_or(0, |node| node.children.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn depth(&self) -> usize {
        self.tree.depth()
    }

    /// Pre-order traversal as `(depth, node)` pairs, root first.
    pub fn iter(&self) -> TreeIterator<'_> {
        self.tree.iter()
    }

    pub fn get_node(&self, id: NodeId) -> Option<&ElementNode> {
        self.tree.get_node(id)
    }

    pub(crate) fn tree(&self) -> &ElementArena {
        &self.tree
    }
}

impl Render for HtmlBuilder {
    fn render(&self, depth: usize) -> Vec<String> {
        self.tree.render_node(self.tree.root(), depth, self.indent)
    }
}

impl fmt::Display for HtmlBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_builder_renders_open_close_pair() {
        let builder = HtmlBuilder::new("ul");
        assert_eq!(builder.to_text(), "<ul>\n</ul>");
        assert!(builder.is_empty());
    }

    #[test]
    fn test_add_child_chains() {
        let mut builder = HtmlBuilder::new("ul");
        builder
            .add_child("li", "chain")
            .add_child("li", "creation")
            .add_child("li", "test");
        assert_eq!(builder.len(), 3);
    }

    #[test]
    fn test_empty_text_is_skipped() {
        let builder = HtmlBuilder::new("div").with_child("br", "");
        assert_eq!(builder.to_text(), "<div>\n  <br>\n  </br>\n</div>");
    }

    #[test]
    fn test_create_from_element_data() {
        let builder = ElementData::create("ul").with_child("li", "HtmlElement");
        assert_eq!(builder.root_name(), "ul");
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn test_display_matches_to_text() {
        let builder = HtmlBuilder::new("p").with_child("span", "x");
        assert_eq!(format!("{builder}"), builder.to_text());
    }

    #[test]
    fn test_custom_indent() {
        let builder = HtmlBuilder::with_indent("ul", IndentUnit::new(4)).with_child("li", "x");
        assert_eq!(builder.to_text(), "<ul>\n    <li>\n        x\n    </li>\n</ul>");
    }
}
