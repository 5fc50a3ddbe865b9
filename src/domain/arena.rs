use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::html::HtmlBuilder;
use crate::domain::render::IndentUnit;

static NEXT_ARENA_ID: AtomicU64 = AtomicU64::new(0);

/// Handle to one element inside a specific [`ElementArena`].
///
/// Handles remember which arena issued them, so a handle from one builder is rejected
/// by another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    arena: u64,
    index: Index,
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (slot, generation) = self.index.into_raw_parts();
        write!(f, "{}:{}v{}", self.arena, slot, generation)
    }
}

/// Data payload for tree nodes: a tag name plus optional text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementData {
    /// Tag name, may be empty
    pub name: String,
    /// Text rendered on its own line below the opening tag, skipped when empty
    pub text: String,
}

impl ElementData {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Start building a tree rooted at an element called `root_name`.
    pub fn create(root_name: impl Into<String>) -> HtmlBuilder {
        HtmlBuilder::new(root_name)
    }
}

impl fmt::Display for ElementData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.text.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}: {:?}", self.name, self.text)
        }
    }
}

/// Tree node in the arena-based element hierarchy.
#[derive(Debug, Clone)]
pub struct ElementNode {
    /// Tag and text for this node
    pub data: ElementData,
    /// Parent handle, None for the root
    pub parent: Option<NodeId>,
    /// Child handles in insertion order
    pub children: Vec<NodeId>,
}

/// Arena-backed element tree with exactly one root.
///
/// Children are append-only: nodes are never removed, reordered or deduplicated.
#[derive(Debug, Clone)]
pub struct ElementArena {
    id: u64,
    arena: Arena<ElementNode>,
    root: NodeId,
}

impl ElementArena {
    pub fn new(root: ElementData) -> Self {
        let id = NEXT_ARENA_ID.fetch_add(1, Ordering::Relaxed);
        let mut arena = Arena::new();
        let index = arena.insert(ElementNode {
            data: root,
            parent: None,
            children: Vec::new(),
        });
        Self {
            id,
            arena,
            root: NodeId { arena: id, index },
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// True if `id` was issued by this arena and still resolves.
    pub fn contains(&self, id: NodeId) -> bool {
        id.arena == self.id && self.arena.contains(id.index)
    }

    pub fn get_node(&self, id: NodeId) -> Option<&ElementNode> {
        if id.arena != self.id {
            return None;
        }
        self.arena.get(id.index)
    }

    /// Append a new element under `parent`.
    #[instrument(level = "trace", skip(self))]
    pub fn insert_node(&mut self, data: ElementData, parent: NodeId) -> DomainResult<NodeId> {
        if !self.contains(parent) {
            return Err(DomainError::UnknownNode(parent));
        }
        Ok(self.link(data, parent))
    }

    /// Append a new element directly under the root.
    pub fn push_root_child(&mut self, data: ElementData) -> NodeId {
        self.link(data, self.root)
    }

    fn link(&mut self, data: ElementData, parent: NodeId) -> NodeId {
        let index = self.arena.insert(ElementNode {
            data,
            parent: Some(parent),
            children: Vec::new(),
        });
        let node_id = NodeId {
            arena: self.id,
            index,
        };

        if let Some(parent) = self.arena.get_mut(parent.index) {
            parent.children.push(node_id);
        }

        node_id
    }

    /// Total number of nodes, root included.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Always false: the root is created with the arena.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn iter(&self) -> TreeIterator<'_> {
        TreeIterator::new(self)
    }

    /// Height of the tree, a root without children counts as 1.
    pub fn depth(&self) -> usize {
        self.calculate_depth(self.root)
    }

    fn calculate_depth(&self, node_id: NodeId) -> usize {
        if let Some(node) = self.get_node(node_id) {
            1 + node
                .children
                .iter()
                .map(|&child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }

    /// Tag-style rendering of `node_id` and its subtree.
    ///
    /// `<name>` at `depth`, the text (if any) one level deeper, every child one level
    /// deeper in insertion order, then `</name>` at `depth`.
    pub fn render_node(&self, node_id: NodeId, depth: usize, unit: IndentUnit) -> Vec<String> {
        let Some(node) = self.get_node(node_id) else {
            return Vec::new();
        };

        let mut lines = vec![unit.line(depth, format!("<{}>", node.data.name))];
        if !node.data.text.is_empty() {
            lines.push(unit.line(depth + 1, &node.data.text));
        }
        for &child in &node.children {
            lines.extend(self.render_node(child, depth + 1, unit));
        }
        lines.push(unit.line(depth, format!("</{}>", node.data.name)));
        lines
    }
}

/// Pre-order traversal yielding each node with its nesting depth.
pub struct TreeIterator<'a> {
    arena: &'a ElementArena,
    stack: Vec<(NodeId, usize)>,
}

impl<'a> TreeIterator<'a> {
    fn new(arena: &'a ElementArena) -> Self {
        Self {
            arena,
            stack: vec![(arena.root(), 0)],
        }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (usize, &'a ElementNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_id, depth)) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_id) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push((child, depth + 1));
                }
                return Some((depth, node));
            }
        }
        None
    }
}
