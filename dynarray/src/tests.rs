//! Behaviour checks against `std::vec::Vec` and property tests.

use crate::{dynarray, DynamicArray, DynamicArrayError, GrowthPolicy};
use itertools::Itertools;
use rstest::{fixture, rstest};
use std::collections::{BTreeSet, VecDeque};
use utils::map::HashSet;
use utils::sequence::sequence_hash;

const VALID: &str = "Test";

struct Pair {
    array: DynamicArray<String>,
    vec: Vec<String>,
}

#[fixture]
fn pair() -> Pair {
    let items = [VALID.to_string(), VALID.repeat(2), VALID.to_string()];
    Pair {
        array: items.iter().cloned().collect(),
        vec: items.to_vec(),
    }
}

fn valid_set() -> HashSet<String> {
    [VALID.to_string()].into_iter().collect()
}

#[rstest]
fn push_matches_vec(mut pair: Pair) {
    pair.array.push(VALID.to_string());
    pair.vec.push(VALID.to_string());
    assert_eq!(pair.array, pair.vec);
}

#[rstest]
fn insert_matches_vec(mut pair: Pair) {
    pair.array.insert(1, VALID.to_string()).unwrap();
    pair.vec.insert(1, VALID.to_string());
    assert_eq!(pair.array, pair.vec);
}

#[rstest]
fn add_all_matches_vec(mut pair: Pair) {
    assert!(pair.array.add_all(pair.vec.clone()));
    pair.vec.extend(pair.vec.clone());
    assert_eq!(pair.array, pair.vec);
}

#[rstest]
fn clear_matches_vec(mut pair: Pair) {
    pair.array.clear();
    pair.vec.clear();
    assert_eq!(pair.array, pair.vec);
    assert_eq!(pair.array.len(), pair.vec.len());
}

#[rstest]
fn contains_matches_vec(pair: Pair) {
    assert_eq!(
        pair.array.contains(VALID),
        pair.vec.contains(&VALID.to_string())
    );
    assert!(!pair.array.contains("missing"));
}

#[rstest]
fn contains_all(pair: Pair) {
    assert!(pair.array.contains_all(&pair.vec));
    assert!(pair.array.contains_all(&[] as &[String]));
    assert!(!pair.array.contains_all(["missing".to_string()].iter()));
}

#[rstest]
fn equality_in_both_directions(pair: Pair) {
    assert_eq!(pair.array, pair.array.clone());
    assert_eq!(pair.array, pair.vec);
    assert_eq!(pair.vec, pair.array);
    assert!(pair.array.sequence_eq(&pair.vec));
    let deque: VecDeque<_> = pair.vec.iter().cloned().collect();
    assert!(pair.array.sequence_eq(&deque));
}

#[rstest]
fn get_matches_vec(pair: Pair) {
    assert_eq!(pair.array.get(2).unwrap(), &pair.vec[2]);
}

#[rstest]
fn structural_hash_is_stable(pair: Pair) {
    assert_eq!(pair.array.structural_hash(), pair.array.structural_hash());
    assert_eq!(pair.array.structural_hash(), sequence_hash(&pair.vec));
}

#[rstest]
fn index_of_matches_vec(pair: Pair) {
    assert_eq!(
        pair.array.index_of(VALID),
        pair.vec.iter().position(|s| s == VALID)
    );
    assert_eq!(
        pair.array.last_index_of(VALID),
        pair.vec.iter().rposition(|s| s == VALID)
    );
}

#[rstest]
fn is_empty(pair: Pair) {
    assert!(!pair.array.is_empty());
    assert!(DynamicArray::<String>::new().is_empty());
}

#[rstest]
fn remove_by_index_matches_vec(mut pair: Pair) {
    let removed = pair.array.remove(2).unwrap();
    assert_eq!(removed, pair.vec.remove(2));
    assert_eq!(removed, VALID);
    assert_eq!(pair.array, [VALID, "TestTest"]);
}

#[rstest]
fn remove_by_value(mut pair: Pair) {
    pair.array.remove(2).unwrap();
    assert!(pair.array.remove_item(VALID));
    assert_eq!(pair.array, ["TestTest"]);
    assert!(!pair.array.remove_item(VALID));
}

#[rstest]
fn remove_all_removes_members(mut pair: Pair) {
    assert!(pair.array.remove_all(&valid_set()));
    pair.vec.retain(|s| !valid_set().contains(s));
    assert_eq!(pair.array, pair.vec);
    assert_eq!(pair.array, ["TestTest"]);
}

#[rstest]
fn retain_all_keeps_members(mut pair: Pair) {
    assert!(pair.array.retain_all(&valid_set()));
    pair.vec.retain(|s| valid_set().contains(s));
    assert_eq!(pair.array, pair.vec);
    assert_eq!(pair.array, [VALID, VALID]);
}

#[rstest]
fn bulk_ops_report_success_without_changes(mut pair: Pair) {
    let before = pair.array.clone();
    assert!(pair.array.remove_all(&["missing".to_string()]));
    assert!(pair.array.retain_all(&pair.vec));
    assert_eq!(pair.array, before);
}

#[rstest]
fn remove_all_accepts_sequences(mut pair: Pair) {
    let values = vec![VALID.to_string()];
    pair.array.remove_all(values.as_slice());
    assert_eq!(pair.array, ["TestTest"]);
    pair.array.remove_all(&values);
    assert_eq!(pair.array, ["TestTest"]);
}

#[test]
fn remove_all_with_other_containers() {
    let mut array: DynamicArray<u32> = dynarray![1, 2, 3, 4, 5, 6];
    array.remove_all(&BTreeSet::from([2, 4]));
    assert_eq!(array, [1, 3, 5, 6]);
    array.retain_all(&smallvec::SmallVec::<[u32; 4]>::from_slice(&[1, 6]));
    assert_eq!(array, [1, 6]);
    let mut other = arrayvec::ArrayVec::<u32, 2>::new();
    other.push(6);
    array.remove_all(&other);
    assert_eq!(array, [1]);
    array.retain_all(&dynarray![1u32]);
    assert_eq!(array, [1]);
}

#[rstest]
fn set_matches_vec(mut pair: Pair) {
    let replacement = "Test new element".to_string();
    pair.array.set(2, replacement.clone()).unwrap();
    pair.vec[2] = replacement;
    assert_eq!(pair.array, pair.vec);
}

#[rstest]
fn len_matches_vec(pair: Pair) {
    assert_eq!(pair.array.len(), pair.vec.len());
}

#[rstest]
fn sub_list_matches_vec(pair: Pair) {
    assert_eq!(pair.array.sub_list(1, 2).unwrap(), pair.vec[1..2]);
}

#[rstest]
fn to_boxed_slice_matches_vec(pair: Pair) {
    assert_eq!(*pair.array.to_boxed_slice(), *pair.vec);
}

#[rstest]
fn copy_to_slice_matches_vec(pair: Pair) {
    let mut dest = vec![String::new(); pair.array.len()];
    pair.array.copy_to_slice(&mut dest).unwrap();
    assert_eq!(dest, pair.vec);
}

#[rstest]
fn to_string_matches_vec_debug_shape(pair: Pair) {
    assert_eq!(pair.array.to_string(), format!("[{}]", pair.vec.join(", ")));
}

#[rstest]
fn cursor_removal_at_offset(mut pair: Pair) {
    let mut cursor = pair.array.list_cursor_at(1).unwrap();
    cursor.next().unwrap();
    cursor.remove_current().unwrap();
    assert_eq!(cursor.previous_index(), Some(0));
    assert_eq!(pair.array, [VALID, VALID]);
}

#[test]
fn macro_forms() {
    let empty: DynamicArray<u32> = dynarray![];
    assert!(empty.is_empty());
    assert_eq!(dynarray![0u8; 3], [0, 0, 0]);
    assert_eq!(dynarray![1, 2,], [1, 2]);
}

#[test]
fn negative_capacity() {
    assert!(matches!(
        DynamicArray::<String>::try_with_capacity(-5),
        Err(DynamicArrayError::InvalidArgument(_))
    ));
}

#[test]
fn growth_is_traced() {
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let mut array = DynamicArray::new();
        array.push(1);
    });

    let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("grew buffer"), "{output}");
    assert!(output.contains("new_capacity=16"), "{output}");
}

mod proptests {
    use super::*;
    use proptest::prelude::*;
    use utils::vec_utils::VecOperation;

    fn operation() -> impl Strategy<Value = VecOperation<u8>> {
        prop_oneof![
            any::<usize>().prop_map(VecOperation::ShiftRemove),
            any::<usize>().prop_map(VecOperation::SwapRemove),
            any::<u8>().prop_map(VecOperation::Push),
            Just(VecOperation::Pop),
            (any::<usize>(), any::<u8>()).prop_map(|(idx, v)| VecOperation::Insert(idx, v)),
            (any::<usize>(), any::<u8>()).prop_map(|(idx, v)| VecOperation::Replace(idx, v)),
            (any::<usize>(), any::<usize>()).prop_map(|(a, b)| VecOperation::Move(a, b)),
            (any::<usize>(), any::<usize>()).prop_map(|(a, b)| VecOperation::Swap(a, b)),
        ]
    }

    proptest! {
        #[test]
        fn pushes_are_indexable(values in proptest::collection::vec(any::<u32>(), 0..200)) {
            let mut array = DynamicArray::new();
            for &value in &values {
                array.push(value);
            }
            prop_assert_eq!(array.len(), values.len());
            for (i, value) in values.iter().enumerate() {
                prop_assert_eq!(array.get(i), Ok(value));
            }
        }

        #[test]
        fn insert_then_remove_restores(
            values in proptest::collection::vec(any::<u8>(), 0..50),
            index in any::<usize>(),
            value in any::<u8>(),
        ) {
            let original: DynamicArray<u8> = values.into();
            let index = index % (original.len() + 1);
            let mut array = original.clone();
            array.insert(index, value).unwrap();
            prop_assert_eq!(array.remove(index), Ok(value));
            prop_assert_eq!(array, original);
        }

        #[test]
        fn push_then_remove_item_keeps_len(
            values in proptest::collection::vec(0u8..8, 0..50),
            value in 0u8..8,
        ) {
            let mut array: DynamicArray<u8> = values.clone().into();
            array.push(value);
            prop_assert!(array.remove_item(&value));
            prop_assert_eq!(array.len(), values.len());
            // the first occurrence goes, which is not necessarily the pushed one
            let mut expected = values;
            expected.push(value);
            let first = expected.iter().position(|v| *v == value).unwrap();
            expected.remove(first);
            prop_assert_eq!(array, expected);
        }

        #[test]
        fn snapshot_matches_iteration(values in proptest::collection::vec(any::<i64>(), 0..100)) {
            let array: DynamicArray<i64> = values.into();
            let snapshot = array.to_boxed_slice();
            prop_assert_eq!(snapshot.len(), array.len());
            prop_assert!(snapshot.iter().eq(array.iter()));
        }

        #[test]
        fn equality_consistent_with_hash(
            a in proptest::collection::vec(0u8..4, 0..6),
            b in proptest::collection::vec(0u8..4, 0..6),
        ) {
            let left: DynamicArray<u8> = a.clone().into();
            let right: DynamicArray<u8> = b.clone().into();
            prop_assert_eq!(left == right, a == b);
            prop_assert_eq!(left == right, right == left);
            prop_assert_eq!(&left, &left);
            if left == right {
                prop_assert_eq!(left.structural_hash(), right.structural_hash());
            }
            prop_assert_eq!(left.structural_hash(), sequence_hash(&a));
        }

        #[test]
        fn capacity_follows_policy(count in 1usize..500) {
            let policy = GrowthPolicy::default();
            let mut array = DynamicArray::with_capacity(0);
            let mut expected = 0;
            for i in 0..count {
                if i == expected {
                    expected = policy.next_capacity(expected);
                }
                array.push(i);
                prop_assert_eq!(array.capacity(), expected);
            }
        }

        #[test]
        fn scripted_edits_match_vec(ops in proptest::collection::vec(operation(), 0..100)) {
            let mut vec: Vec<u8> = vec![];
            let mut array: DynamicArray<u8> = DynamicArray::new();
            for op in ops {
                if let Some(op) = op.fit_to(vec.len()) {
                    op.apply(&mut vec);
                    op.apply(&mut array);
                }
                prop_assert_eq!(&array, &vec);
            }
        }

        #[test]
        fn retain_and_remove_partition(
            values in proptest::collection::vec(0u8..10, 0..60),
            members in proptest::collection::vec(0u8..10, 0..5),
        ) {
            let mut kept: DynamicArray<u8> = values.clone().into();
            let mut removed: DynamicArray<u8> = values.clone().into();
            kept.retain_all(&members);
            removed.remove_all(&members);
            let expected_kept = values.iter().copied().filter(|v| members.contains(v)).collect_vec();
            let expected_removed = values.iter().copied().filter(|v| !members.contains(v)).collect_vec();
            prop_assert_eq!(kept, expected_kept);
            prop_assert_eq!(removed, expected_removed);
        }

        #[test]
        fn insert_all_matches_splice(
            values in proptest::collection::vec(any::<u8>(), 0..30),
            inserted in proptest::collection::vec(any::<u8>(), 0..30),
            index in any::<usize>(),
        ) {
            let index = index % (values.len() + 1);
            let mut array: DynamicArray<u8> = values.clone().into();
            array.insert_all(index, inserted.iter().copied()).unwrap();
            let mut expected = values;
            expected.splice(index..index, inserted);
            prop_assert_eq!(array, expected);
        }
    }
}
