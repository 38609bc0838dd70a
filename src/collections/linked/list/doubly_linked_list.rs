use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::iter;
use std::mem;
use std::ops::{Index, IndexMut};

use tracing::trace;

use super::{Iter, Link, Node, NodeRef, Slot};
#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;
use crate::util::fmt::DebugRaw;
use crate::util::result::ResultExtension;

/// A list with links in both directions. See also: [`NodeRef`] for walking the list node by node.
///
/// Nodes are stored in slots of an arena owned by the list, and link to each other by slot index.
/// Slots freed by a removal are reused by the next insertion.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DoublyLinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front/back` | `O(1)` |
/// | `get` | `O(min(i, n-i))` |
/// | `insert` | `O(min(i, n-i))` |
/// | `remove` | `O(min(i, n-i))` |
/// | `contains` | `O(n)` |
/// | `index_of/last_index_of` | `O(n)` |
///
/// # Threading
/// DoublyLinkedList has no internal synchronization, and relinking a node takes several writes.
/// Callers sharing one between threads must hold an external lock around every operation.
///
/// # Examples
/// ```
/// use standard_collections::collections::linked::DoublyLinkedList;
///
/// let mut list = DoublyLinkedList::new();
/// list.insert(0, 12);
/// list.push_front(11);
/// list.push_front(10);
/// list.push_back(15);
/// list.insert(3, 13);
/// list.insert(5, 16);
///
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [10, 11, 12, 13, 15, 16]);
/// assert!(list.try_get(6).is_err());
/// ```
pub struct DoublyLinkedList<T> {
    pub(crate) slots: Vec<Slot<T>>,
    pub(crate) free: Vec<usize>,
    pub(crate) head: Link,
    pub(crate) tail: Link,
    pub(crate) len: usize,
}

impl<T> DoublyLinkedList<T> {
    /// Creates a new DoublyLinkedList with no elements.
    pub const fn new() -> DoublyLinkedList<T> {
        DoublyLinkedList {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Returns the length of the DoublyLinkedList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the DoublyLinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every element from the list.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
        trace!("cleared doubly linked list");
    }

    /// Returns the first node of the list, if it exists.
    pub fn head(&self) -> Option<NodeRef<'_, T>> {
        self.node_ref(self.head)
    }

    /// Returns the last node of the list, if it exists.
    pub fn tail(&self) -> Option<NodeRef<'_, T>> {
        self.node_ref(self.tail)
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.head.map(|slot| &self.node(slot).value)
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let slot = self.head?;
        Some(&mut self.node_mut(slot).value)
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|slot| &self.node(slot).value)
    }

    /// Returns a mutable reference to the last element in the list, if it exists.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let slot = self.tail?;
        Some(&mut self.node_mut(slot).value)
    }

    /// Add the provided element to the front of the DoublyLinkedList.
    pub fn push_front(&mut self, value: T) {
        let slot = self.allocate(Node {
            value,
            prev: None,
            next: self.head,
        });

        match self.head {
            Some(head) => self.node_mut(head).prev = Some(slot),
            None => self.tail = Some(slot),
        }
        self.head = Some(slot);
        self.len += 1;
    }

    /// Add the provided element to the back of the DoublyLinkedList.
    pub fn push_back(&mut self, value: T) {
        let slot = self.allocate(Node {
            value,
            prev: self.tail,
            next: None,
        });

        match self.tail {
            Some(tail) => self.node_mut(tail).next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.len += 1;
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let slot = self.head?;
        Some(self.unlink(slot))
    }

    /// Removes the last element from the list and returns it, if the list isn't empty.
    pub fn pop_back(&mut self) -> Option<T> {
        let slot = self.tail?;
        Some(self.unlink(slot))
    }

    /// Inserts `value` so that it ends up at `index`, shifting every following element back by
    /// one.
    ///
    /// This never fails: an `index` at or past the end of the list appends to it.
    pub fn insert(&mut self, index: usize, value: T) {
        if index == 0 {
            self.push_front(value);
            return;
        }

        match self.seek(index) {
            Some(next) => {
                let prev = self.node(next).prev;
                let slot = self.allocate(Node {
                    value,
                    prev,
                    next: Some(next),
                });

                self.node_mut(next).prev = Some(slot);
                // A node past index 0 always has a predecessor.
                if let Some(prev) = prev {
                    self.node_mut(prev).next = Some(slot);
                }
                self.len += 1;
            },
            None => self.push_back(value),
        }
    }

    /// Removes and returns the element at the provided `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the DoublyLinkedList.
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes and returns the element at the provided `index`, returning an [`Err`] on a failure
    /// rather than panicking.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let slot = self.checked_seek(index)?;
        Ok(self.unlink(slot))
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the DoublyLinkedList.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        Ok(&self.node(self.checked_seek(index)?).value)
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the DoublyLinkedList.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`] on
    /// a failure rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let slot = self.checked_seek(index)?;
        Ok(&mut self.node_mut(slot).value)
    }

    /// Replaces the element at `index` with `new_value`, returning the old value.
    pub fn try_replace(&mut self, index: usize, new_value: T) -> Result<T, IndexOutOfBounds> {
        Ok(mem::replace(self.try_get_mut(index)?, new_value))
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: Clone + Default> DoublyLinkedList<T> {
    /// Returns a copy of the first element, or `T::default()` if the list is empty.
    pub fn get_first(&self) -> T {
        self.front().cloned().unwrap_or_default()
    }

    /// Returns a copy of the last element, or `T::default()` if the list is empty.
    pub fn get_last(&self) -> T {
        self.back().cloned().unwrap_or_default()
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    /// Returns the index of the first element equal to `item`, searching from the front.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }

    /// Returns the index of the last element equal to `item`, searching from the back.
    pub fn last_index_of(&self, item: &T) -> Option<usize> {
        self.iter().rposition(|element| element == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|element| element == item)
    }
}

impl<T> DoublyLinkedList<T> {
    pub(crate) fn node(&self, slot: usize) -> &Node<T> {
        match self.slots.get(slot) {
            Some(Slot::Occupied(node)) => node,
            _ => unreachable!("link to vacant slot {slot}"),
        }
    }

    pub(crate) fn node_mut(&mut self, slot: usize) -> &mut Node<T> {
        match self.slots.get_mut(slot) {
            Some(Slot::Occupied(node)) => node,
            _ => unreachable!("link to vacant slot {slot}"),
        }
    }

    pub(crate) fn node_ref(&self, link: Link) -> Option<NodeRef<'_, T>> {
        link.map(|slot| NodeRef { list: self, slot })
    }

    /// Returns the slot of the node at `index`, walking from whichever end is closer.
    pub(crate) fn seek(&self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }

        if index < self.len / 2 {
            iter::successors(self.head, |&slot| self.node(slot).next).nth(index)
        } else {
            iter::successors(self.tail, |&slot| self.node(slot).prev).nth(self.len - 1 - index)
        }
    }

    pub(crate) fn checked_seek(&self, index: usize) -> Result<usize, IndexOutOfBounds> {
        self.seek(index).ok_or_else(|| IndexOutOfBounds::new(index, self.len))
    }

    /// Places `node` in a free slot, growing the arena only when none are left.
    pub(crate) fn allocate(&mut self, node: Node<T>) -> usize {
        match self.free.pop() {
            Some(slot) => {
                debug_assert!(self.slots[slot].is_vacant());
                self.slots[slot] = Slot::Occupied(node);
                slot
            },
            None => {
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            },
        }
    }

    /// Unlinks the node in `slot`, joining its neighbours to each other, and returns its value.
    pub(crate) fn unlink(&mut self, slot: usize) -> T {
        let node = match mem::replace(&mut self.slots[slot], Slot::Vacant) {
            Slot::Occupied(node) => node,
            Slot::Vacant => unreachable!("unlinking vacant slot {slot}"),
        };
        self.free.push(slot);

        match node.prev {
            Some(prev) => self.node_mut(prev).next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.node_mut(next).prev = node.prev,
            None => self.tail = node.prev,
        }
        self.len -= 1;

        trace!(slot, len = self.len, "unlinked list node");
        node.value
    }

    /// Checks every structural invariant of the list, panicking on the first one broken.
    #[allow(clippy::unwrap_used)]
    pub(crate) fn verify_double_links(&self) {
        assert_eq!(
            self.slots.iter().filter(|slot| slot.is_occupied()).count(),
            self.len,
            "every occupied slot should be a node of the list"
        );
        assert_eq!(self.slots.len() - self.free.len(), self.len);

        match (self.head, self.tail) {
            (None, None) => assert_eq!(self.len, 0),
            (Some(head), Some(tail)) => {
                assert!(self.node(head).prev.is_none());
                assert!(self.node(tail).next.is_none());

                let mut curr = head;
                let mut steps = 0;
                while let Some(next) = self.node(curr).next {
                    // UNWRAP: This needs to panic if prev is None.
                    assert_eq!(self.node(next).prev.unwrap(), curr);
                    curr = next;
                    steps += 1;
                }
                assert_eq!(curr, tail);
                assert_eq!(steps, self.len - 1);
            },
            _ => panic!("head and tail should be set together"),
        }
    }
}

impl<T> Index<usize> for DoublyLinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for DoublyLinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        // Cloning in order also compacts the arena.
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: Hash> Hash for DoublyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for value in self.iter() {
            value.hash(state);
        }

        // Terminate variable length hashing sequence.
        0xFF.hash(state);
    }
}

impl<T: Debug> Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoublyLinkedList")
            .field("contents", &DebugRaw(format!("{:?}", self.iter().collect::<Vec<_>>())))
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Debug> Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({})",
            self.iter()
                .map(|i| format!("{i:?}"))
                .collect::<Vec<String>>()
                .join(") -> (")
        )
    }
}
