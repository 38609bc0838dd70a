mod doubly_linked_list;
mod iter;
mod node;

pub use doubly_linked_list::*;
pub use iter::*;
pub use node::NodeRef;
pub(crate) use node::{Link, Node, Slot};
