#![cfg(feature = "binary_tree")]
//! Property tests checking BinarySearchTree against a sorted map of value counts.

use std::collections::BTreeMap;

use proptest::prelude::*;
use standard_collections::collections::binary_tree::{BinarySearchTree, Node};

/// An operation to apply to both the tree and the model.
#[derive(Debug, Clone)]
enum Op {
    Insert(i8),
    Remove(i8, bool),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        2 => any::<i8>().prop_map(Op::Insert),
        1 => (any::<i8>(), any::<bool>()).prop_map(|(value, force)| Op::Remove(value, force)),
    ]
}

/// Applies `ops` to a tree and to a map from each value to its occurrence count.
fn run(ops: &[Op]) -> (BinarySearchTree<i8>, BTreeMap<i8, usize>) {
    let mut tree = BinarySearchTree::new();
    let mut model = BTreeMap::new();

    for op in ops {
        match *op {
            Op::Insert(value) => {
                tree.insert(value);
                *model.entry(value).or_insert(0) += 1;
            },
            Op::Remove(value, force) => {
                tree.remove(&value, force);
                let count = model.get(&value).copied().unwrap_or(0);
                if !force && count > 1 {
                    model.insert(value, count - 1);
                } else {
                    model.remove(&value);
                }
            },
        }
    }

    (tree, model)
}

/// Checks the ordering invariant of every node, walking the tree with an explicit stack.
fn assert_ordered(tree: &BinarySearchTree<i8>) -> Result<(), TestCaseError> {
    let mut stack: Vec<(&Node<i8>, Option<i8>, Option<i8>)> =
        tree.root().map(|root| (root, None, None)).into_iter().collect();

    while let Some((node, low, high)) = stack.pop() {
        let value = *node.value();
        prop_assert!(low.is_none_or(|low| low < value), "{} should be above {:?}", value, low);
        prop_assert!(high.is_none_or(|high| value < high), "{} should be below {:?}", value, high);
        prop_assert!(node.occurrences() >= 1);

        stack.extend(node.left().map(|left| (left, low, Some(value))));
        stack.extend(node.right().map(|right| (right, Some(value), high)));
    }

    Ok(())
}

proptest! {
    /// In-order traversal is the sorted list of distinct inserted values.
    #[test]
    fn prop_in_order_is_sorted_distinct(values in prop::collection::vec(any::<i16>(), 0..200)) {
        let tree: BinarySearchTree<i16> = values.iter().copied().collect();

        let mut expected = values.clone();
        expected.sort_unstable();
        expected.dedup();

        prop_assert_eq!(tree.iter().copied().collect::<Vec<_>>(), expected);
    }

    /// Every traversal visits each distinct value exactly once.
    #[test]
    fn prop_traversals_share_values(values in prop::collection::vec(any::<i16>(), 0..200)) {
        let tree: BinarySearchTree<i16> = values.iter().copied().collect();

        let mut pre = tree.pre_order();
        let mut post = tree.post_order();
        let in_order = tree.in_order();

        prop_assert_eq!(pre.len(), tree.len());
        prop_assert_eq!(post.len(), tree.len());
        prop_assert_eq!(in_order.len(), tree.len());

        pre.sort_unstable();
        post.sort_unstable();
        prop_assert_eq!(&pre, &in_order);
        prop_assert_eq!(&post, &in_order);
    }

    /// Pre-order starts at the root and post-order ends at it.
    #[test]
    fn prop_traversal_endpoints(values in prop::collection::vec(any::<i16>(), 1..100)) {
        let tree: BinarySearchTree<i16> = values.iter().copied().collect();
        let root = tree.root().map(Node::value);

        prop_assert_eq!(tree.pre_order().first().copied(), root);
        prop_assert_eq!(tree.post_order().last().copied(), root);
        prop_assert_eq!(root, Some(&values[0]));
    }

    /// Inserting grows len only for new values and counts duplicates on the node.
    #[test]
    fn prop_insert_counts(values in prop::collection::vec(0..20_i8, 0..100), extra in 0..20_i8) {
        let mut tree: BinarySearchTree<i8> = values.iter().copied().collect();
        let before = tree.len();
        let occurrences = tree.occurrences(&extra);

        let created = tree.insert(extra);

        prop_assert_eq!(created, occurrences == 0);
        prop_assert_eq!(tree.len(), before + usize::from(created));
        prop_assert_eq!(tree.occurrences(&extra), occurrences + 1);
    }

    /// Any mix of inserts and removals matches the model and keeps the tree ordered.
    #[test]
    fn prop_matches_model(ops in prop::collection::vec(op(), 0..300)) {
        let (tree, model) = run(&ops);

        prop_assert_eq!(tree.len(), model.len());
        prop_assert_eq!(
            tree.iter().copied().collect::<Vec<_>>(),
            model.keys().copied().collect::<Vec<_>>()
        );
        for (value, count) in &model {
            prop_assert_eq!(tree.occurrences(value), *count);
        }
        assert_ordered(&tree)?;
    }

    /// A forced removal always takes the whole node.
    #[test]
    fn prop_forced_remove(values in prop::collection::vec(0..30_i8, 1..100), index in any::<prop::sample::Index>()) {
        let mut tree: BinarySearchTree<i8> = values.iter().copied().collect();
        let target = *index.get(&values);
        let before = tree.len();

        prop_assert!(tree.remove(&target, true));
        prop_assert_eq!(tree.len(), before - 1);
        prop_assert!(!tree.contains(&target));
        assert_ordered(&tree)?;
    }
}
