//! General-purpose collection types.
//!
//! # Purpose
//! I wrote these types to learn about the data structures themselves, but also about ownership:
//! who owns a node, who only points at it, and how to relink them without ever leaving a dangling
//! reference behind.

#[cfg(feature = "binary_tree")]
pub mod binary_tree;
#[cfg(feature = "linked")]
pub mod linked;
