//! Newtype wrapper for node handles.
//!
//! Nodes live in an arena and refer to each other by index. Wrapping the index keeps
//! node handles from being confused with counts, depths or other plain integers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A stable handle to a node inside a `NodeTree` arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(u32);

impl NodeId {
    /// Creates a handle from an arena slot index.
    pub fn new(index: usize) -> Self {
        assert!(index <= u32::MAX as usize, "node arena exceeded u32 capacity");
        Self(index as u32)
    }

    /// Returns the arena slot this handle points at.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<NodeId> for usize {
    fn from(id: NodeId) -> Self {
        id.index()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
