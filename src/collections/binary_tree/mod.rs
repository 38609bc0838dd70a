//! Binary tree collection types. Currently this is just [`BinarySearchTree`], an unbalanced tree
//! which counts duplicate values on a single [`Node`] rather than storing them twice.

pub mod tree;

#[doc(inline)]
pub use tree::{BinarySearchTree, Node};
