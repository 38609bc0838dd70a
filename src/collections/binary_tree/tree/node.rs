use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};

pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single node of a [`BinarySearchTree`](super::BinarySearchTree).
///
/// Every value in the left subtree of a node is less than the node's value, and every value in
/// the right subtree is greater. Inserting a value that is already present doesn't create a
/// second node, it increments [`occurrences`](Node::occurrences) instead.
///
/// Nodes can only be obtained through [`BinarySearchTree::root`](super::BinarySearchTree::root)
/// and are read-only, so the tree can be walked by hand without being able to break it.
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) occurrences: usize,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    pub(crate) const fn new(value: T) -> Node<T> {
        Node {
            value,
            occurrences: 1,
            left: None,
            right: None,
        }
    }

    /// Returns the value stored in this node.
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Returns the number of times this node's value has been inserted without being removed.
    /// This is always at least 1.
    pub const fn occurrences(&self) -> usize {
        self.occurrences
    }

    /// Returns the root of the left subtree, where all values are less than this one.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// Returns the root of the right subtree, where all values are greater than this one.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    pub const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl<T: Debug> Debug for Node<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("occurrences", &self.occurrences)
            .finish_non_exhaustive()
    }
}

/// Returns the slot holding the node equal to `value`, if there is one.
pub(crate) fn seek_mut<'a, T: Ord>(mut branch: &'a mut Link<T>, value: &T) -> Option<&'a mut Link<T>> {
    loop {
        // Only the descending arms may borrow the node mutably, the Equal arm returns the slot.
        branch = match value.cmp(&branch.as_ref()?.value) {
            Ordering::Less => &mut branch.as_mut()?.left,
            Ordering::Greater => &mut branch.as_mut()?.right,
            Ordering::Equal => return Some(branch),
        };
    }
}

/// Detaches the leftmost node of the subtree in `branch`, moving its right child into its place.
pub(crate) fn take_leftmost<T>(mut branch: &mut Link<T>) -> Option<Box<Node<T>>> {
    while branch.as_ref()?.left.is_some() {
        branch = &mut branch.as_mut()?.left;
    }

    let mut node = branch.take()?;
    *branch = node.right.take();
    Some(node)
}

/// Drops an entire subtree without recursing on its depth.
pub(crate) fn release<T>(link: Link<T>) {
    let mut stack: Vec<Box<Node<T>>> = link.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

/// Renders a subtree sideways, with left subtrees above their parent (prefixed by `┌`) and right
/// subtrees below it (prefixed by `└`). Missing children are drawn as `-`.
pub(crate) fn draw<T: Debug>(link: Option<&Node<T>>) -> String {
    enum Frame<'a, T> {
        Expand(Option<&'a Node<T>>, String),
        Emit(&'a Node<T>, String),
    }

    let mut lines = Vec::new();
    let mut stack = vec![Frame::Expand(link, String::new())];

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Expand(None, prefix) => lines.push(format!("{prefix}-")),
            Frame::Expand(Some(node), prefix) => {
                stack.push(Frame::Expand(node.right(), format!("{prefix}└    ")));
                stack.push(Frame::Emit(node, prefix.clone()));
                stack.push(Frame::Expand(node.left(), format!("{prefix}┌    ")));
            },
            Frame::Emit(node, prefix) => {
                lines.push(format!("{prefix}({:?} x{})", node.value, node.occurrences));
            },
        }
    }

    lines.join("\n")
}
