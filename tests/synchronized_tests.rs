//! Integration tests for the Synchronized wrapper.

#![cfg(feature = "sync")]

use std::sync::Arc;
use std::thread;

use ledger_collections::CollectionError;
use ledger_collections::sequence::{OrderedUniqueSequence, SequenceMut, SequenceView, Unmodifiable};
use ledger_collections::sync::Synchronized;
use rstest::rstest;

#[rstest]
fn test_concurrent_adds_keep_uniqueness() {
    let shared = Arc::new(Synchronized::new(OrderedUniqueSequence::new()));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                for value in 0..100_u32 {
                    shared.add(value);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let snapshot = shared.snapshot();
    assert_eq!(snapshot.len(), 100);
    let mut sorted = snapshot;
    sorted.sort_unstable();
    assert_eq!(sorted, (0..100).collect::<Vec<_>>());
}

#[rstest]
fn test_inherent_helpers() {
    let shared = Synchronized::new(OrderedUniqueSequence::from(['a', 'b']));
    assert_eq!(shared.insert(1, 'x'), Ok(true));
    assert_eq!(shared.set(0, 'z'), Ok('a'));
    assert!(shared.remove(&'b'));
    assert_eq!(shared.element_at(1), Ok('x'));
    assert_eq!(shared.remove_at(5), Err(CollectionError::IndexOutOfBounds { index: 5, len: 2 }));
    assert!(shared.contains(&'z'));
    assert_eq!(shared.len(), 2);
    assert!(!shared.is_empty());
    assert_eq!(shared.into_inner().as_slice(), &['z', 'x']);
}

#[rstest]
fn test_lock_guard_gives_multi_step_access() {
    let shared = Synchronized::new(OrderedUniqueSequence::from([1, 2, 3]));
    {
        let mut guard = shared.lock();
        let mut cursor = guard.cursor_front();
        while let Some(element) = cursor.next() {
            if *element == 2 {
                cursor.set(20).unwrap();
            }
        }
    }
    assert_eq!(shared.snapshot(), vec![1, 20, 3]);
}

#[rstest]
fn test_decorators_compose() {
    let mut read_only = Unmodifiable::new(Synchronized::new(OrderedUniqueSequence::from([5, 6])));
    assert_eq!(read_only.snapshot(), vec![5, 6]);
    assert_eq!(read_only.position_of(&6), Some(1));
    assert!(matches!(
        read_only.add(7),
        Err(CollectionError::Unsupported { operation: "add" })
    ));
    assert_eq!(read_only.into_inner().into_inner().len(), 2);
}
