mod binary_search_tree;
mod iter;
mod node;

pub use binary_search_tree::*;
pub use iter::*;
pub use node::Node;
pub(crate) use node::{Link, draw, release, seek_mut, take_leftmost};
