use std::sync::atomic::{AtomicUsize, Ordering};

/// Identifier of a node. Unique across every list in the process.
pub(crate) type NodeId = usize;

static NEXT_NODE_ID: AtomicUsize = AtomicUsize::new(0);

/// Hands out a fresh id. Ids are never reused, so a position naming a node
/// that was destroyed can never alias a newer node.
pub(crate) fn next_node_id() -> NodeId {
    NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed)
}

/// A position in a [`LinkedList`]: a node, the before-begin sentinel, or the end.
///
/// Positions are plain markers. They do not borrow the list, so they survive
/// insertions and removals of *other* nodes. Two positions are equal iff they
/// name the same node, or are both the end.
///
/// [`LinkedList`]: crate::LinkedList
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position(pub(crate) Option<NodeId>);

impl Position {
    /// The end position, shared by every list.
    pub const END: Position = Position(None);

    pub fn is_end(&self) -> bool {
        self.0.is_none()
    }

    /// Returns the raw node identifier for debugging or external maps.
    pub fn as_raw(&self) -> Option<usize> {
        self.0
    }

    pub(crate) fn at(id: NodeId) -> Self {
        Position(Some(id))
    }
}
