#![cfg(feature = "linked")]
//! Property tests checking DoublyLinkedList against a Vec, and the links against each other.

use proptest::prelude::*;
use standard_collections::collections::linked::{DoublyLinkedList, IndexOutOfBounds, NodeRef};

#[derive(Debug, Clone)]
enum Op {
    PushFront(i32),
    PushBack(i32),
    Insert(usize, i32),
    Remove(usize),
    PopFront,
    PopBack,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<i32>().prop_map(Op::PushFront),
        any::<i32>().prop_map(Op::PushBack),
        (0..40_usize, any::<i32>()).prop_map(|(index, value)| Op::Insert(index, value)),
        (0..40_usize).prop_map(Op::Remove),
        Just(Op::PopFront),
        Just(Op::PopBack),
    ]
}

/// Applies `ops` to a list and to a Vec, checking every fallible result along the way.
fn run(ops: &[Op]) -> Result<(DoublyLinkedList<i32>, Vec<i32>), TestCaseError> {
    let mut list = DoublyLinkedList::new();
    let mut model = Vec::new();

    for op in ops {
        match *op {
            Op::PushFront(value) => {
                list.push_front(value);
                model.insert(0, value);
            },
            Op::PushBack(value) => {
                list.push_back(value);
                model.push(value);
            },
            Op::Insert(index, value) => {
                list.insert(index, value);
                model.insert(index.min(model.len()), value);
            },
            Op::Remove(index) => {
                let expected = if index < model.len() {
                    Ok(model.remove(index))
                } else {
                    Err(expected_error(index, model.len()))
                };
                prop_assert_eq!(list.try_remove(index), expected);
            },
            Op::PopFront => {
                let expected = (!model.is_empty()).then(|| model.remove(0));
                prop_assert_eq!(list.pop_front(), expected);
            },
            Op::PopBack => {
                prop_assert_eq!(list.pop_back(), model.pop());
            },
        }
    }

    Ok((list, model))
}

/// Follows `step` from `start`, collecting the value of every node visited.
fn walk<'a>(
    start: Option<NodeRef<'a, i32>>,
    step: impl Fn(&NodeRef<'a, i32>) -> Option<NodeRef<'a, i32>>,
) -> Vec<i32> {
    let mut values = Vec::new();
    let mut node = start;
    while let Some(curr) = node {
        values.push(*curr.value());
        node = step(&curr);
    }
    values
}

/// The error a list of length `len` should report for `index`.
fn expected_error(index: usize, len: usize) -> IndexOutOfBounds {
    match len.checked_sub(1) {
        Some(last) => IndexOutOfBounds::Range { index, last },
        None => IndexOutOfBounds::Empty { index },
    }
}

proptest! {
    /// After any sequence of operations the list holds the same values as the model, and both
    /// directions of links agree with it.
    #[test]
    fn prop_matches_model(ops in prop::collection::vec(op(), 0..200)) {
        let (list, model) = run(&ops)?;

        prop_assert_eq!(list.len(), model.len());
        prop_assert_eq!(walk(list.head(), NodeRef::next), model.clone());

        let mut reversed = model.clone();
        reversed.reverse();
        prop_assert_eq!(walk(list.tail(), NodeRef::prev), reversed);

        prop_assert!(list.iter().eq(model.iter()));
        prop_assert_eq!(list.front(), model.first());
        prop_assert_eq!(list.back(), model.last());
    }

    /// Inserting at any index up to the length and reading it back gives the inserted value.
    #[test]
    fn prop_insert_then_get(
        values in prop::collection::vec(any::<i32>(), 0..50),
        index in 0..60_usize,
        value: i32
    ) {
        let mut list: DoublyLinkedList<i32> = values.iter().copied().collect();
        let index = index.min(list.len());

        list.insert(index, value);

        prop_assert_eq!(list.try_get(index), Ok(&value));
        prop_assert_eq!(list.len(), values.len() + 1);
    }

    /// Every index found by a search holds the searched value.
    #[test]
    fn prop_index_of_then_get(values in prop::collection::vec(0..10_i32, 0..50), needle in 0..10_i32) {
        let list: DoublyLinkedList<i32> = values.iter().copied().collect();

        prop_assert_eq!(list.index_of(&needle), values.iter().position(|v| *v == needle));
        prop_assert_eq!(list.last_index_of(&needle), values.iter().rposition(|v| *v == needle));
        prop_assert_eq!(list.contains(&needle), values.contains(&needle));

        if let Some(index) = list.index_of(&needle) {
            prop_assert_eq!(list.try_get(index), Ok(&needle));
        }
        if let Some(index) = list.last_index_of(&needle) {
            prop_assert_eq!(list.try_get(index), Ok(&needle));
        }
    }

    /// Out of bounds accesses report the valid range, or that there is none.
    #[test]
    fn prop_out_of_bounds(values in prop::collection::vec(any::<i32>(), 0..20), past in 0..20_usize) {
        let mut list: DoublyLinkedList<i32> = values.iter().copied().collect();
        let index = values.len() + past;

        let err = list.try_get(index).expect_err("index is past the end");
        prop_assert_eq!(err.index(), index);
        prop_assert_eq!(err.bounds(), values.len().checked_sub(1).map(|last| 0..=last));
        prop_assert_eq!(list.try_remove(index), Err(err));
        prop_assert_eq!(list.len(), values.len());
    }
}
