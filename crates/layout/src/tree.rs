//! The retained node arena.
//!
//! Nodes live in a flat `Vec` and refer to each other through `NodeId` links, so every
//! structural edit is O(1) and siblings can be walked in either direction. Nodes are never
//! freed: a removed subtree stays allocated and can be re-attached later.

use crate::interface::NodeState;
use crate::node_kind::{NodeKind, TextContent};
use crate::style::ComputedStyle;
use flexa_style::ElementStyle;
use flexa_types::NodeId;

#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
    pub style: ComputedStyle,
    pub state: NodeState,
    pub(crate) parent: Option<NodeId>,
    pub(crate) first_child: Option<NodeId>,
    pub(crate) last_child: Option<NodeId>,
    pub(crate) next_sibling: Option<NodeId>,
    pub(crate) prev_sibling: Option<NodeId>,
}

impl Node {
    fn new(kind: NodeKind, style: &ElementStyle) -> Self {
        Self {
            kind,
            style: ComputedStyle::from_element(style),
            state: NodeState::default(),
            parent: None,
            first_child: None,
            last_child: None,
            next_sibling: None,
            prev_sibling: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NodeTree {
    nodes: Vec<Node>,
}

impl NodeTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn new_container(&mut self, style: ElementStyle) -> NodeId {
        self.push(Node::new(NodeKind::Container, &style))
    }

    pub fn new_text(&mut self, content: impl Into<String>, style: ElementStyle) -> NodeId {
        self.push(Node::new(NodeKind::Text(TextContent::new(content)), &style))
    }

    pub fn node(&self, id: NodeId) -> &Node {
        assert!(id.index() < self.nodes.len(), "node {} does not belong to this tree", id);
        &self.nodes[id.index()]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        assert!(id.index() < self.nodes.len(), "node {} does not belong to this tree", id);
        &mut self.nodes[id.index()]
    }

    pub fn style(&self, id: NodeId) -> &ComputedStyle {
        &self.node(id).style
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.node(id).kind
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Iterates the children of `id` in sibling order.
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.node(id).first_child,
            reverse: false,
        }
    }

    /// Iterates the children of `id` from last to first.
    pub fn children_rev(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.node(id).last_child,
            reverse: true,
        }
    }

    fn is_ancestor_or_self(&self, candidate: NodeId, of: NodeId) -> bool {
        let mut current = Some(of);
        while let Some(id) = current {
            if id == candidate {
                return true;
            }
            current = self.node(id).parent;
        }
        false
    }

    fn check_attachable(&self, parent: NodeId, child: NodeId) {
        assert!(
            !self.node(parent).kind.is_text(),
            "cannot add children to text node {}",
            parent
        );
        assert!(
            self.node(child).parent.is_none(),
            "node {} already has a parent",
            child
        );
        assert!(
            !self.is_ancestor_or_self(child, parent),
            "adding {} under {} would create a cycle",
            child,
            parent
        );
    }

    /// Appends `child` as the last child of `parent`.
    ///
    /// # Panics
    ///
    /// If `child` already has a parent, `parent` is a text leaf, the edit would create a
    /// cycle, or either id belongs to another tree.
    pub fn add(&mut self, parent: NodeId, child: NodeId) {
        self.check_attachable(parent, child);
        let last = self.node(parent).last_child;
        {
            let c = self.node_mut(child);
            c.parent = Some(parent);
            c.prev_sibling = last;
            c.next_sibling = None;
        }
        match last {
            Some(last) => self.node_mut(last).next_sibling = Some(child),
            None => self.node_mut(parent).first_child = Some(child),
        }
        self.node_mut(parent).last_child = Some(child);
    }

    /// Inserts `child` into `parent` directly before the existing child `before`.
    pub fn insert_before(&mut self, parent: NodeId, child: NodeId, before: NodeId) {
        self.check_attachable(parent, child);
        assert_eq!(
            self.node(before).parent,
            Some(parent),
            "{} is not a child of {}",
            before,
            parent
        );
        let prev = self.node(before).prev_sibling;
        {
            let c = self.node_mut(child);
            c.parent = Some(parent);
            c.prev_sibling = prev;
            c.next_sibling = Some(before);
        }
        self.node_mut(before).prev_sibling = Some(child);
        match prev {
            Some(prev) => self.node_mut(prev).next_sibling = Some(child),
            None => self.node_mut(parent).first_child = Some(child),
        }
    }

    /// Detaches `child` (and its subtree) from its parent. Does nothing for a detached node.
    pub fn remove(&mut self, child: NodeId) {
        let Some(parent) = self.node(child).parent else {
            return;
        };
        let (prev, next) = {
            let c = self.node(child);
            (c.prev_sibling, c.next_sibling)
        };
        match prev {
            Some(prev) => self.node_mut(prev).next_sibling = next,
            None => self.node_mut(parent).first_child = next,
        }
        match next {
            Some(next) => self.node_mut(next).prev_sibling = prev,
            None => self.node_mut(parent).last_child = prev,
        }
        let c = self.node_mut(child);
        c.parent = None;
        c.prev_sibling = None;
        c.next_sibling = None;
    }

    pub fn set_style(&mut self, id: NodeId, style: ElementStyle) {
        self.node_mut(id).style = ComputedStyle::from_element(&style);
    }

    /// Replaces the content of a text leaf.
    ///
    /// # Panics
    ///
    /// If `id` is a container.
    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) {
        match &mut self.node_mut(id).kind {
            NodeKind::Text(content) => content.text = text.into(),
            NodeKind::Container => panic!("node {} is not a text node", id),
        }
    }

    /// Sets the scroll offset. The next layout run clamps it into range.
    pub fn scroll_to(&mut self, id: NodeId, x: f32, y: f32) {
        let state = &mut self.node_mut(id).state;
        state.scroll_x = x;
        state.scroll_y = y;
    }

    pub fn scroll_by(&mut self, id: NodeId, dx: f32, dy: f32) {
        let state = &mut self.node_mut(id).state;
        state.scroll_x += dx;
        state.scroll_y += dy;
    }

    /// A copy of the geometry computed by the last layout run.
    pub fn geometry(&self, id: NodeId) -> NodeState {
        self.node(id).state
    }
}

/// Sibling iterator returned by [`NodeTree::children`] and [`NodeTree::children_rev`].
pub struct Children<'a> {
    tree: &'a NodeTree,
    next: Option<NodeId>,
    reverse: bool,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        let node = self.tree.node(current);
        self.next = if self.reverse {
            node.prev_sibling
        } else {
            node.next_sibling
        };
        Some(current)
    }
}
