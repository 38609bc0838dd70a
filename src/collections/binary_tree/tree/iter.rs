use std::iter::FusedIterator;
use std::mem;

use super::{BinarySearchTree, Link, Node, release};

// All traversals here keep their own stack of pending nodes, bounded by the height of the tree,
// instead of recursing.

/// A pre-order iterator over a [`BinarySearchTree`]: each node, then its left subtree, then its
/// right subtree.
pub struct PreOrder<'a, T> {
    pub(crate) stack: Vec<&'a Node<T>>,
    pub(crate) remaining: usize,
}

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> PreOrder<'a, T> {
        PreOrder {
            stack: root.into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes in first so that left comes out first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> FusedIterator for PreOrder<'a, T> {}

impl<'a, T> ExactSizeIterator for PreOrder<'a, T> {}

/// An in-order iterator over a [`BinarySearchTree`], yielding each distinct value once in
/// ascending order.
pub struct InOrder<'a, T> {
    pub(crate) stack: Vec<&'a Node<T>>,
    pub(crate) remaining: usize,
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> InOrder<'a, T> {
        let mut iter = InOrder {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut curr: Option<&'a Node<T>>) {
        while let Some(node) = curr {
            self.stack.push(node);
            curr = node.left();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> FusedIterator for InOrder<'a, T> {}

impl<'a, T> ExactSizeIterator for InOrder<'a, T> {}

/// A post-order iterator over the nodes of a tree: both subtrees, then the node itself.
pub(crate) struct PostOrderNodes<'a, T> {
    // The flag is set once a node's children have been scheduled.
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> PostOrderNodes<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> PostOrderNodes<'a, T> {
        PostOrderNodes {
            stack: root.map(|node| (node, false)).into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PostOrderNodes<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(node);
            }

            self.stack.push((node, true));
            self.stack.extend(node.right().map(|right| (right, false)));
            self.stack.extend(node.left().map(|left| (left, false)));
        }
    }
}

impl<'a, T> FusedIterator for PostOrderNodes<'a, T> {}

/// A post-order iterator over a [`BinarySearchTree`]: the left subtree, then the right subtree,
/// then the node itself.
pub struct PostOrder<'a, T> {
    pub(crate) nodes: PostOrderNodes<'a, T>,
    pub(crate) remaining: usize,
}

impl<'a, T> PostOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> PostOrder<'a, T> {
        PostOrder {
            nodes: PostOrderNodes::new(root),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.next()?;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> FusedIterator for PostOrder<'a, T> {}

impl<'a, T> ExactSizeIterator for PostOrder<'a, T> {}

impl<'a, T> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;

    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        InOrder::new(self.root.as_deref(), self.len)
    }
}

impl<T> IntoIterator for BinarySearchTree<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let mut iter = IntoIter {
            stack: Vec::new(),
            remaining: mem::take(&mut self.len),
        };
        iter.push_left_spine(self.root.take());
        iter
    }
}

/// An owning in-order iterator over a [`BinarySearchTree`]. Each distinct value is yielded once,
/// regardless of how many times it was inserted.
pub struct IntoIter<T> {
    pub(crate) stack: Vec<Box<Node<T>>>,
    pub(crate) remaining: usize,
}

impl<T> IntoIter<T> {
    fn push_left_spine(&mut self, mut link: Link<T>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.stack.pop()?;
        self.push_left_spine(node.right.take());
        self.remaining -= 1;
        Some(node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // Pending nodes still own their right subtrees.
        for node in self.stack.drain(..) {
            release(Some(node));
        }
    }
}
