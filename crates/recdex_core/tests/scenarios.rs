//! End-to-end engine scenarios.

use proptest::prelude::*;
use recdex_core::{BasicRecord, Position, StorageEngine};
use std::collections::BTreeMap;

fn keys(records: &[&BasicRecord]) -> Vec<i64> {
    records.iter().map(|r| r.key).collect()
}

fn load(rows: &[(i64, &str)]) -> StorageEngine<BasicRecord> {
    let mut engine = StorageEngine::new();
    for &(key, name) in rows {
        engine.insert_record(BasicRecord::new(key, name));
    }
    engine
}

#[test]
fn exact_and_range_lookup() {
    let engine = load(&[(3, "Lee"), (1, "Lee"), (2, "Kim")]);

    let hit = engine.find_by_key(&2);
    assert_eq!(hit.value, Some(&BasicRecord::new(2, "Kim")));

    let range = engine.range_by_key(&1, &2);
    assert_eq!(keys(&range.value), vec![1, 2]);
    assert!(range.comparisons > 0);

    let lee = engine.prefix_by_secondary("LEE");
    assert_eq!(keys(&lee.value), vec![3, 1]);
}

#[test]
fn prefix_lookup_mixed_case() {
    let engine = load(&[(5, "Smith"), (6, "smith"), (7, "Smythe")]);

    assert_eq!(keys(&engine.prefix_by_secondary("sm").value), vec![5, 6, 7]);
    assert_eq!(keys(&engine.prefix_by_secondary("smi").value), vec![5, 6]);
    assert_eq!(
        engine.prefix_by_secondary("SmI").value,
        engine.prefix_by_secondary("sMi").value
    );
}

#[test]
fn delete_is_final() {
    let mut engine = load(&[(10, "X")]);

    assert!(engine.delete_by_id(&10));
    assert!(!engine.delete_by_id(&10));
    assert_eq!(engine.find_by_key(&10).value, None);
    assert!(engine.prefix_by_secondary("x").value.is_empty());
    assert!(engine.range_by_key(&0, &100).value.is_empty());

    // The slot is still there, just tombstoned.
    assert_eq!(engine.len(), 1);
    assert_eq!(engine.is_deleted(Position::new(0)), Some(true));
    assert_eq!(engine.get(Position::new(0)), None);
}

#[test]
fn sorted_inserts_degrade_to_linear_cost() {
    let sorted = load(&(1..=64).map(|k| (k, "n")).collect::<Vec<_>>());
    assert_eq!(sorted.unique_index().height(), 64);
    assert_eq!(sorted.find_by_key(&64).comparisons, 64);
    sorted.find_by_key(&1);
    assert_eq!(sorted.stats().mean_comparisons(), 32.5);

    // Midpoint-first order keeps the tree shallow.
    let mut order = Vec::new();
    let mut spans = vec![(1i64, 64i64)];
    while let Some((lo, hi)) = spans.pop() {
        if lo > hi {
            continue;
        }
        let mid = (lo + hi) / 2;
        order.push((mid, "n"));
        spans.push((lo, mid - 1));
        spans.push((mid + 1, hi));
    }
    let balanced = load(&order);
    assert_eq!(balanced.unique_index().height(), 7);
    assert!(balanced.find_by_key(&64).comparisons <= 7);
    balanced.find_by_key(&1);
    assert!(balanced.stats().mean_comparisons() <= 7.0);
}

#[derive(Debug, Clone)]
enum Op {
    Insert(i64, String),
    Delete(i64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0i64..40, "[A-Ca-c]{1,3}").prop_map(|(k, n)| Op::Insert(k, n)),
        1 => (0i64..40).prop_map(Op::Delete),
    ]
}

proptest! {
    #[test]
    fn deleted_keys_never_resurface(ops in prop::collection::vec(op_strategy(), 1..120)) {
        let mut engine = StorageEngine::new();
        // key -> name of the record the unique index currently resolves to
        let mut live: BTreeMap<i64, String> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(k, n) => {
                    engine.insert_record(BasicRecord::new(k, n.clone()));
                    live.insert(k, n);
                }
                Op::Delete(k) => {
                    prop_assert_eq!(engine.delete_by_id(&k), live.remove(&k).is_some());
                    prop_assert!(engine.find_by_key(&k).value.is_none());
                }
            }
        }

        let ranged: Vec<(i64, String)> = engine
            .range_by_key(&0, &40)
            .value
            .into_iter()
            .map(|r| (r.key, r.name.clone()))
            .collect();
        let expected: Vec<(i64, String)> = live.into_iter().collect();
        prop_assert_eq!(ranged, expected);

        engine.verify().map_err(|e| TestCaseError::fail(e.to_string()))?;
    }
}
