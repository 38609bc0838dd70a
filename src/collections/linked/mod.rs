//! Linked collection types. Primarily revolves around [`DoublyLinkedList`] and its accompanying
//! [`NodeRef`] type for walking it by hand.

pub mod list;

#[doc(inline)]
pub use list::{DoublyLinkedList, IndexOutOfBounds, NodeRef};
