#![cfg(feature = "chrono")]
//! Property-based tests for the chrono collection laws.
//!
//! The deltas of a chrono collection must always describe exactly the
//! difference between its checkpoint and its live contents.

use std::collections::{HashMap, HashSet};

use ledger_collections::chrono::{ChronoCollection, ChronoList, ChronoMap, ChronoSet};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Change {
    Insert(u8),
    Remove(u8),
}

fn change() -> impl Strategy<Value = Change> {
    prop_oneof![
        (0u8..16).prop_map(Change::Insert),
        (0u8..16).prop_map(Change::Remove),
    ]
}

// =============================================================================
// Set Difference Law
// Description: added == live - checkpoint and removed == checkpoint - live
// =============================================================================

proptest! {
    #[test]
    fn prop_set_deltas_are_the_difference(
        initial in prop::collection::hash_set(0u8..16, 0..10),
        changes in prop::collection::vec(change(), 0..60)
    ) {
        let mut set: ChronoSet<u8> = initial.iter().copied().collect();
        for change in changes {
            match change {
                Change::Insert(value) => { set.insert(value); }
                Change::Remove(value) => { set.remove(&value); }
            }
        }

        let live = set.live().clone();
        let expected_added: HashSet<u8> = live.difference(&initial).copied().collect();
        let expected_removed: HashSet<u8> = initial.difference(&live).copied().collect();
        prop_assert_eq!(set.added(), &expected_added);
        prop_assert_eq!(set.removed(), &expected_removed);
    }
}

// =============================================================================
// Map Difference Law
// Description: deltas are the pairs present on one side only
// =============================================================================

proptest! {
    #[test]
    fn prop_map_deltas_are_the_pair_difference(
        initial in prop::collection::hash_map(0u8..8, 0u8..4, 0..6),
        changes in prop::collection::vec((0u8..8, prop::option::of(0u8..4)), 0..60)
    ) {
        let mut map: ChronoMap<u8, u8> = initial.iter().map(|(k, v)| (*k, *v)).collect();
        for (key, value) in changes {
            match value {
                Some(value) => { map.insert(key, value); }
                None => { map.remove(&key); }
            }
        }

        let live = map.live().clone();
        let only_in = |left: &HashMap<u8, u8>, right: &HashMap<u8, u8>| -> HashMap<u8, u8> {
            left.iter()
                .filter(|(key, value)| right.get(*key) != Some(*value))
                .map(|(key, value)| (*key, *value))
                .collect()
        };
        prop_assert_eq!(map.added(), &only_in(&live, &initial));
        prop_assert_eq!(map.removed(), &only_in(&initial, &live));
    }
}

// =============================================================================
// Delta Cancellation Law
// Description: add(e) then remove(e) leaves the deltas as they were
// =============================================================================

proptest! {
    #[test]
    fn prop_list_add_remove_cancels(
        initial in prop::collection::vec(0u8..16, 0..20),
        element in 0u8..16
    ) {
        let mut list: ChronoList<u8> = initial.into_iter().collect();
        list.push(element);
        prop_assert!(list.remove(&element));
        prop_assert!(!list.has_changes());
    }

    #[test]
    fn prop_set_remove_add_cancels(
        initial in prop::collection::hash_set(0u8..16, 1..10),
        index in any::<prop::sample::Index>()
    ) {
        let elements: Vec<u8> = initial.iter().copied().collect();
        let element = elements[index.index(elements.len())];

        let mut set: ChronoSet<u8> = initial.into_iter().collect();
        set.remove(&element);
        set.insert(element);
        prop_assert!(!set.has_changes());
    }
}

// =============================================================================
// Reset Idempotence Law
// Description: reset empties both deltas and a second reset changes nothing
// =============================================================================

proptest! {
    #[test]
    fn prop_reset_idempotence(
        initial in prop::collection::vec(0u8..16, 0..20),
        changes in prop::collection::vec(change(), 0..30)
    ) {
        let mut list: ChronoList<u8> = initial.into_iter().collect();
        for change in changes {
            match change {
                Change::Insert(value) => list.push(value),
                Change::Remove(value) => { list.remove(&value); }
            }
        }
        let live = list.as_slice().to_vec();

        list.reset();
        prop_assert!(list.added().is_empty() && list.removed().is_empty());
        list.reset();
        prop_assert!(!list.has_changes());
        prop_assert_eq!(list.as_slice(), live.as_slice());
    }
}
