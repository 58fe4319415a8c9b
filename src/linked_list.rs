use crate::{
    errors::ListError,
    node::Node,
    position::{next_node_id, NodeId, Position},
};
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use std::collections::HashMap;
use tracing::{debug, trace};

/// A singly linked list with a before-begin sentinel and stable positions.
///
/// Nodes live in an arena keyed by process-unique ids. Each real node is
/// reachable from the sentinel through exactly one `next` link, so dropping
/// or clearing the list frees every element without recursion.
pub struct LinkedList<T> {
    nodes: HashMap<NodeId, Node<T>>,
    head: NodeId,
    len: usize,
}

/// Iterator over values in order.
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    cur: Option<NodeId>,
    remaining: usize,
}

/// Iterator over mutable values in order.
pub struct IterMut<'a, T> {
    // Each element's value split from its link, so that every `&mut T` handed
    // out is disjoint from the others.
    slots: HashMap<NodeId, (&'a mut T, Option<NodeId>)>,
    cur: Option<NodeId>,
}

/// Iterator over `(Position, &T)` in order.
pub struct Positions<'a, T> {
    inner: Iter<'a, T>,
}

/// Owning iterator, popping from the front.
pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    /// Create a new empty list holding only the sentinel.
    pub fn new() -> Self {
        let head = next_node_id();
        let mut nodes = HashMap::new();
        nodes.insert(head, Node::sentinel());
        Self {
            nodes,
            head,
            len: 0,
        }
    }

    /// Number of elements, O(1).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The sentinel position before the first element. Only meaningful as an
    /// anchor for [`insert_after`](Self::insert_after) and
    /// [`erase_after`](Self::erase_after); it never dereferences to a value.
    pub fn before_begin(&self) -> Position {
        Position::at(self.head)
    }

    /// Position of the first element, or the end if the list is empty.
    pub fn begin(&self) -> Position {
        Position(self.first())
    }

    pub fn end(&self) -> Position {
        Position::END
    }

    pub fn front(&self) -> Option<&T> {
        self.get(self.begin())
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        let first = self.begin();
        self.get_mut(first)
    }

    /// Does `pos` name a node of this list (the sentinel included) or the end?
    pub fn contains_position(&self, pos: Position) -> bool {
        pos.0.map_or(true, |id| self.nodes.contains_key(&id))
    }

    /// Get a reference by position. `None` for the end, the sentinel, or a
    /// position that names no node of this list.
    pub fn get(&self, pos: Position) -> Option<&T> {
        pos.0
            .and_then(|id| self.nodes.get(&id))
            .and_then(|n| n.value.as_ref())
    }

    /// Get a mutable reference by position.
    pub fn get_mut(&mut self, pos: Position) -> Option<&mut T> {
        pos.0
            .and_then(|id| self.nodes.get_mut(&id))
            .and_then(|n| n.value.as_mut())
    }

    /// The position following `pos`. Advancing from the end is an error.
    pub fn next_position(&self, pos: Position) -> Result<Position, ListError> {
        let id = self.require_anchor(pos)?;
        Ok(Position(self.nodes[&id].next))
    }

    /// Push a value to the front (after the sentinel), O(1).
    pub fn push_front(&mut self, value: T) -> Position {
        Position::at(self.link_after(self.head, value))
    }

    /// Remove the first element and return it, or `None` if the list is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.unlink_after(self.head).ok()
    }

    /// Insert a value **after** `pos` and return the new element's position.
    ///
    /// `pos` may be [`before_begin`](Self::before_begin), which makes this
    /// identical to [`push_front`](Self::push_front). Errors if `pos` is the
    /// end or names no node of this list; the list is then unchanged.
    pub fn insert_after(&mut self, pos: Position, value: T) -> Result<Position, ListError> {
        self.insert_after_with(pos, || value)
    }

    /// Like [`insert_after`](Self::insert_after), but the value is built by
    /// `make` once `pos` has been validated. Nothing is linked until `make`
    /// returns, so a panic inside it leaves the list as it was.
    pub fn insert_after_with<F>(&mut self, pos: Position, make: F) -> Result<Position, ListError>
    where
        F: FnOnce() -> T,
    {
        let anchor = self.require_anchor(pos)?;
        let value = make();
        Ok(Position::at(self.link_after(anchor, value)))
    }

    /// Remove the element **after** `pos` and return the position that now
    /// follows `pos` (possibly the end).
    ///
    /// Positions naming the removed element become invalid; all others stay valid.
    pub fn erase_after(&mut self, pos: Position) -> Result<Position, ListError> {
        let anchor = self.require_anchor(pos)?;
        self.unlink_after(anchor)?;
        Ok(Position(self.nodes[&anchor].next))
    }

    /// Remove the element after `pos`, returning its value.
    pub fn remove_after(&mut self, pos: Position) -> Result<T, ListError> {
        let anchor = self.require_anchor(pos)?;
        self.unlink_after(anchor)
    }

    /// Free every element from the front, one at a time, O(n).
    pub fn clear(&mut self) {
        trace!(len = self.len, "clearing list");
        let mut cur = self.sentinel_mut().next.take();
        while let Some(id) = cur {
            cur = self.nodes.remove(&id).and_then(|node| node.next);
        }
        self.len = 0;
        self.check_len();
    }

    /// Exchange the contents of two lists in O(1) without allocating.
    ///
    /// Positions travel with their elements: a position taken from `self`
    /// before the swap is valid for `other` afterwards.
    pub fn swap(&mut self, other: &mut Self) {
        trace!(left = self.len, right = other.len, "swapping lists");
        core::mem::swap(self, other);
    }

    /// Iterate values in order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cur: self.first(),
            remaining: self.len,
        }
    }

    /// Iterate mutable values in order.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let cur = self.first();
        let slots = self
            .nodes
            .iter_mut()
            .filter_map(|(id, node)| {
                let next = node.next;
                node.value.as_mut().map(|value| (*id, (value, next)))
            })
            .collect();
        IterMut { slots, cur }
    }

    /// Iterate `(Position, &T)` in order.
    pub fn positions(&self) -> Positions<'_, T> {
        Positions { inner: self.iter() }
    }

    fn first(&self) -> Option<NodeId> {
        self.nodes[&self.head].next
    }

    fn sentinel_mut(&mut self) -> &mut Node<T> {
        self.nodes
            .get_mut(&self.head)
            .expect("sentinel is always in the arena")
    }

    fn last_id(&self) -> NodeId {
        let mut id = self.head;
        while let Some(next) = self.nodes[&id].next {
            id = next;
        }
        id
    }

    /// Validate `pos` as an anchor for an "after" operation.
    fn require_anchor(&self, pos: Position) -> Result<NodeId, ListError> {
        match pos.0 {
            None => Err(reject(pos, ListError::EndPosition)),
            Some(id) if self.nodes.contains_key(&id) => Ok(id),
            Some(_) => Err(reject(pos, ListError::InvalidPosition)),
        }
    }

    /// Link a fully built node after `anchor`, which must be in the arena.
    fn link_after(&mut self, anchor: NodeId, value: T) -> NodeId {
        let id = next_node_id();
        let next = self.nodes[&anchor].next;
        self.nodes.insert(id, Node::new(value, next));
        self.nodes.get_mut(&anchor).expect("anchor was validated").next = Some(id);
        self.len += 1;
        self.check_len();
        id
    }

    /// Unlink the node after `anchor`, which must be in the arena.
    fn unlink_after(&mut self, anchor: NodeId) -> Result<T, ListError> {
        let Some(target) = self.nodes[&anchor].next else {
            return Err(reject(Position::at(anchor), ListError::NothingAfter));
        };
        let node = self.nodes.remove(&target).expect("linked node is in the arena");
        debug_assert!(node.is_live(), "sentinel can never follow another node");
        self.nodes.get_mut(&anchor).expect("anchor was validated").next = node.next;
        self.len -= 1;
        self.check_len();
        Ok(node.value.expect("linked node holds a value"))
    }

    fn check_len(&self) {
        debug_assert_eq!(
            self.nodes.len(),
            self.len + 1,
            "arena must hold every element plus the sentinel"
        );
    }
}

fn reject(pos: Position, err: ListError) -> ListError {
    debug!(position = ?pos.as_raw(), error = %err, "rejected position");
    err
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// Copy-and-swap: the replacement is built in full before `self` is
    /// touched, so a panicking `T::clone` leaves `self` unmodified.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        trace!(old = self.len, new = copy.len, "assigning list");
        self.swap(&mut copy);
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        let mut tail = list.head;
        for value in iter {
            tail = list.link_after(tail, value);
        }
        list
    }
}

/// Appends at the tail: one walk to find it, then O(1) per element.
impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = self.last_id();
        for value in iter {
            tail = self.link_after(tail, value);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> From<Vec<T>> for LinkedList<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: PartialOrd> PartialOrd for LinkedList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for LinkedList<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for value in self {
            value.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cur?;
        let node = &self.list.nodes[&id];
        self.cur = node.next;
        self.remaining -= 1;
        node.value.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            list: self.list,
            cur: self.cur,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cur?;
        let (value, next) = self.slots.remove(&id)?;
        self.cur = next;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.slots.len(), Some(self.slots.len()))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

impl<'a, T> Iterator for Positions<'a, T> {
    type Item = (Position, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let pos = Position(self.inner.cur);
        self.inner.next().map(|value| (pos, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Positions<'_, T> {}
impl<T> FusedIterator for Positions<'_, T> {}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
