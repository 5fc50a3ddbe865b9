/*
Structural outline of a builder's tree, printed with box-drawing characters.

Unlike `Render`, which produces the final document, the outline shows only the shape:
one entry per element, text inlined as `name: "text"`.
 */
use termtree::Tree;

use crate::domain::arena::{ElementArena, NodeId};
use crate::domain::code::{ClassDecl, CodeBuilder};
use crate::domain::html::HtmlBuilder;

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeNodeConvert for ElementArena {
    fn to_tree_string(&self) -> Tree<String> {
        fn build_tree(arena: &ElementArena, node_id: NodeId) -> Tree<String> {
            match arena.get_node(node_id) {
                Some(node) => {
                    let leaves: Vec<_> = node
                        .children
                        .iter()
                        .map(|&child| build_tree(arena, child))
                        .collect();
                    Tree::new(node.data.to_string()).with_leaves(leaves)
                }
                None => Tree::new(String::new()),
            }
        }

        build_tree(self, self.root())
    }
}

impl TreeNodeConvert for HtmlBuilder {
    fn to_tree_string(&self) -> Tree<String> {
        self.tree().to_tree_string()
    }
}

impl TreeNodeConvert for ClassDecl {
    fn to_tree_string(&self) -> Tree<String> {
        let leaves: Vec<_> = self
            .fields
            .iter()
            .map(|field| Tree::new(format!("{} = {}", field.name, field.value)))
            .collect();
        Tree::new(self.header()).with_leaves(leaves)
    }
}

impl TreeNodeConvert for CodeBuilder {
    fn to_tree_string(&self) -> Tree<String> {
        self.decl().to_tree_string()
    }
}
