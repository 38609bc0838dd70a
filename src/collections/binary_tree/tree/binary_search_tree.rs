use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};

use tracing::trace;

use super::{InOrder, Link, Node, PostOrder, PostOrderNodes, PreOrder, draw, release, seek_mut, take_leftmost};
use crate::util::fmt::DebugRaw;

/// An unbalanced binary search tree which counts duplicates instead of storing them.
///
/// Each distinct value is stored in exactly one [`Node`], along with the number of times it has
/// been inserted. [`len`](BinarySearchTree::len) counts distinct values only, so inserting the
/// same value twice leaves it unchanged.
///
/// The tree is never rebalanced. Inserting already sorted values will produce a tree as deep as
/// it is large, which is why every traversal (and [`Drop`]) here works iteratively, with its own
/// stack, rather than recursing on the height of the tree.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of distinct values in the BinarySearchTree.
/// - `h`: The height of the tree, between `log2(n)` and `n`.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(h)` |
/// | `remove` | `O(h)` |
/// | `contains` | `O(h)` |
/// | `first/last` | `O(h)` |
/// | `pre_order/in_order/post_order` | `O(n)` |
///
/// # Threading
/// BinarySearchTree has no internal synchronization. Callers sharing one between threads must
/// hold an external lock around every operation.
///
/// # Examples
/// ```
/// use standard_collections::collections::binary_tree::BinarySearchTree;
///
/// let mut tree = BinarySearchTree::new();
/// for value in [40, 30, 25, 35, 50, 45, 60, 40] {
///     tree.insert(value);
/// }
///
/// assert_eq!(tree.in_order(), [&25, &30, &35, &40, &45, &50, &60]);
///
/// let root = tree.root().unwrap();
/// assert_eq!((root.value(), root.occurrences()), (&40, 2));
/// ```
pub struct BinarySearchTree<T> {
    pub(crate) root: Link<T>,
    pub(crate) len: usize,
}

impl<T> BinarySearchTree<T> {
    /// Creates a new BinarySearchTree with no elements.
    pub const fn new() -> BinarySearchTree<T> {
        BinarySearchTree {
            root: None,
            len: 0,
        }
    }

    /// Returns the number of distinct values in the tree.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the root node of the tree, if there is one. The tree can be walked from here with
    /// [`Node::left`] and [`Node::right`].
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Removes every element from the tree.
    pub fn clear(&mut self) {
        release(self.root.take());
        self.len = 0;
        trace!("cleared binary search tree");
    }

    /// Returns the values of the tree in pre-order: each node before its left subtree, followed
    /// by its right subtree.
    pub fn pre_order(&self) -> Vec<&T> {
        self.iter_pre_order().collect()
    }

    /// Returns the values of the tree in-order, which is ascending.
    pub fn in_order(&self) -> Vec<&T> {
        self.iter().collect()
    }

    /// Returns the values of the tree in post-order: each node after both of its subtrees.
    pub fn post_order(&self) -> Vec<&T> {
        self.iter_post_order().collect()
    }

    /// Returns a lazy pre-order iterator over the values of the tree.
    pub fn iter_pre_order(&self) -> PreOrder<'_, T> {
        PreOrder::new(self.root(), self.len)
    }

    /// Returns a lazy in-order (ascending) iterator over the values of the tree.
    pub fn iter(&self) -> InOrder<'_, T> {
        self.into_iter()
    }

    /// Returns a lazy post-order iterator over the values of the tree.
    pub fn iter_post_order(&self) -> PostOrder<'_, T> {
        PostOrder::new(self.root(), self.len)
    }

    /// Returns the smallest value in the tree, if it isn't empty.
    pub fn first(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(&node.value)
    }

    /// Returns the largest value in the tree, if it isn't empty.
    pub fn last(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(&node.value)
    }
}

impl<T: Ord> BinarySearchTree<T> {
    /// Inserts `value` into the tree.
    ///
    /// If an equal value is already present, its node's occurrence count is incremented instead
    /// and the length of the tree is unchanged. Returns true if a new node was created.
    pub fn insert(&mut self, value: T) -> bool {
        let mut branch = &mut self.root;

        while let Some(node) = branch {
            match value.cmp(&node.value) {
                Ordering::Less => branch = &mut node.left,
                Ordering::Greater => branch = &mut node.right,
                Ordering::Equal => {
                    node.occurrences += 1;
                    return false;
                },
            }
        }

        *branch = Some(Box::new(Node::new(value)));
        self.len += 1;
        true
    }

    /// Removes `value` from the tree, returning true if it was present.
    ///
    /// Unless `force_full` is set, a value inserted more than once only has its occurrence count
    /// decremented. Otherwise (or once the count reaches 1) its node is removed entirely, taking
    /// every occurrence with it.
    pub fn remove(&mut self, value: &T, force_full: bool) -> bool {
        let Some(branch) = seek_mut(&mut self.root, value) else {
            return false;
        };
        let Some(node) = branch.as_mut() else {
            return false;
        };

        if !force_full && node.occurrences > 1 {
            node.occurrences -= 1;
            return true;
        }

        if node.left.is_some() && node.right.is_some() {
            // The in-order successor has no left child, so it can be unlinked directly once its
            // contents have been moved up into this node.
            if let Some(successor) = take_leftmost(&mut node.right) {
                node.value = successor.value;
                node.occurrences = successor.occurrences;
            }
            trace!(len = self.len - 1, "replaced removed node with its in-order successor");
        } else {
            let child = node.left.take().or_else(|| node.right.take());
            trace!(len = self.len - 1, has_child = child.is_some(), "spliced node out of tree");
            *branch = child;
        }

        self.len -= 1;
        true
    }

    /// Returns true if the tree contains a value equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Returns the number of times `value` is currently held by the tree, or 0 if it isn't.
    pub fn occurrences(&self, value: &T) -> usize {
        self.find(value).map_or(0, Node::occurrences)
    }

    /// Returns the node holding `value`, if there is one.
    pub fn find(&self, value: &T) -> Option<&Node<T>> {
        let mut curr = self.root();

        while let Some(node) = curr {
            curr = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(node),
            };
        }

        None
    }
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        release(self.root.take());
    }
}

impl<T: Clone> Clone for BinarySearchTree<T> {
    fn clone(&self) -> Self {
        // Post-order guarantees both subtrees of a node are built before the node itself, with
        // the right one on top of the stack.
        let mut built: Vec<Box<Node<T>>> = Vec::new();

        for node in PostOrderNodes::new(self.root()) {
            let right = if node.right.is_some() { built.pop() } else { None };
            let left = if node.left.is_some() { built.pop() } else { None };

            built.push(Box::new(Node {
                value: node.value.clone(),
                occurrences: node.occurrences,
                left,
                right,
            }));
        }

        BinarySearchTree {
            root: built.pop(),
            len: self.len,
        }
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BinarySearchTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Debug> Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinarySearchTree")
            .field("nodes", &DebugRaw(format!("\n{}\n", draw(self.root()))))
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Debug> Display for BinarySearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
