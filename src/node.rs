use crate::position::NodeId;

#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) next: Option<NodeId>,
    pub(crate) value: Option<T>,
}

impl<T> Node<T> {
    /// The before-begin node: links to the first element, never holds a value.
    pub(crate) fn sentinel() -> Self {
        Node {
            next: None,
            value: None,
        }
    }

    pub(crate) fn new(value: T, next: Option<NodeId>) -> Self {
        Node {
            next,
            value: Some(value),
        }
    }

    /// Is this node an element (not the sentinel)?
    pub(crate) fn is_live(&self) -> bool {
        self.value.is_some()
    }
}
