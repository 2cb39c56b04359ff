//! Precomputed visiting orders for the layout passes.

use crate::tree::NodeTree;
use flexa_types::NodeId;
use std::collections::VecDeque;

/// Breadth-first order of every displayed node under (and including) `root`.
///
/// `display: none` nodes and their subtrees are skipped. Parents always precede their
/// children, so iterating forward is top-down and iterating in reverse is bottom-up.
pub fn level_order(tree: &NodeTree, root: NodeId) -> Vec<NodeId> {
    let mut order = Vec::new();
    if !tree.style(root).is_displayed() {
        return order;
    }

    let mut queue = VecDeque::from([root]);
    while let Some(id) = queue.pop_front() {
        order.push(id);
        queue.extend(tree.children(id).filter(|&c| tree.style(c).is_displayed()));
    }
    order
}

/// Every node of the subtree rooted at `root` that is hidden by `display: none`, including
/// the descendants of hidden nodes.
pub fn hidden_nodes(tree: &NodeTree, root: NodeId) -> Vec<NodeId> {
    let mut hidden = Vec::new();
    let mut stack = vec![(root, false)];
    while let Some((id, parent_hidden)) = stack.pop() {
        let is_hidden = parent_hidden || !tree.style(id).is_displayed();
        if is_hidden {
            hidden.push(id);
        }
        stack.extend(tree.children(id).map(|c| (c, is_hidden)));
    }
    hidden
}

/// Walks from the parent of `id` up to the tree root.
pub fn ancestors(tree: &NodeTree, id: NodeId) -> Ancestors<'_> {
    Ancestors {
        tree,
        next: tree.parent(id),
    }
}

pub struct Ancestors<'a> {
    tree: &'a NodeTree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.parent(current);
        Some(current)
    }
}
