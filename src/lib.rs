//! This crate is a small collections library: an unbalanced binary search tree and a doubly linked
//! list, written as a learning exercise in how these structures keep their links consistent.
//!
//! # Purpose
//! This repo / crate is a project for learning, with no expectation for it to be used in
//! production. Both structures are deliberately simple: the tree never rebalances and the list
//! walks node by node. What they do try to get right are the invariants, so each operation is
//! written to leave the structure valid no matter what was done to it before.
//!
//! # Method
//! Neither structure uses `unsafe`. The tree owns its children through boxes, so every node has
//! exactly one owner. The list keeps its nodes in an arena (a [`Vec`] of slots) and links them by
//! slot index, which avoids the reference cycle a pair of `next` / `prev` pointers would otherwise
//! create.
//!
//! Traversals and deletion are iterative. An unbalanced tree can degrade into a list, so
//! recursing on its depth would mean recursing on its size.
//!
//! # Error Handling
//! Most "failures" in these collections aren't really errors: looking for a value that isn't
//! there returns `false` or [`None`]. The one exception is positional access into the list, which
//! returns an [`IndexOutOfBounds`](collections::linked::IndexOutOfBounds) through a [`Result`].
//! The error is an enum so that an empty list can be reported as such, rather than with a range
//! that ends before it starts. Panicking variants of those methods exist for when the index is
//! already known to be valid.
//!
//! # Threading
//! Nothing here is synchronized. The collections are [`Send`] and [`Sync`] whenever their
//! elements are, but relinking a node takes several steps, so any shared use across threads needs
//! an external lock (such as a [`Mutex`](std::sync::Mutex)) held around every operation.
//!
//! # Logging
//! Structural changes (node splices, clears) are reported through [`tracing`] at the `trace`
//! level. The crate never installs a subscriber.
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
