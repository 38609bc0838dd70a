use std::fmt::{self, Debug, Formatter};
use std::ptr;

use derive_more::IsVariant;

use super::DoublyLinkedList;

/// A link to another node, as the index of the slot holding it.
pub(crate) type Link = Option<usize>;

pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Link,
    pub next: Link,
}

// NOTE: The list's slots are the only owner of its nodes. Both `next` and `prev` are plain slot
// indices, so there's no ownership cycle to break when a node is removed.
#[derive(IsVariant)]
pub(crate) enum Slot<T> {
    Occupied(Node<T>),
    Vacant,
}

/// A read-only handle to a single node of a [`DoublyLinkedList`], used to walk the list by hand
/// in either direction.
///
/// ```
/// use standard_collections::collections::linked::DoublyLinkedList;
///
/// let list = DoublyLinkedList::from_iter([1, 2, 3]);
///
/// let mut values = Vec::new();
/// let mut node = list.head();
/// while let Some(curr) = node {
///     values.push(*curr.value());
///     node = curr.next();
/// }
///
/// assert_eq!(values, [1, 2, 3]);
/// ```
pub struct NodeRef<'a, T> {
    pub(crate) list: &'a DoublyLinkedList<T>,
    pub(crate) slot: usize,
}

impl<'a, T> NodeRef<'a, T> {
    /// Returns the value stored in this node.
    pub fn value(&self) -> &'a T {
        &self.list.node(self.slot).value
    }

    /// Returns the following node, or [`None`] if this is the tail.
    pub fn next(&self) -> Option<NodeRef<'a, T>> {
        self.list.node_ref(self.list.node(self.slot).next)
    }

    /// Returns the preceding node, or [`None`] if this is the head.
    pub fn prev(&self) -> Option<NodeRef<'a, T>> {
        self.list.node_ref(self.list.node(self.slot).prev)
    }
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<T> PartialEq for NodeRef<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.list, other.list) && self.slot == other.slot
    }
}

impl<T> Eq for NodeRef<'_, T> {}

impl<T: Debug> Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeRef").field(self.value()).finish()
    }
}
