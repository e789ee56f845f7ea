//! Unit tests for SequenceCursor.
//!
//! These tests exercise movement in both directions and every mutation
//! made through the cursor, including the state errors.

#![cfg(feature = "sequence")]

use ledger_collections::sequence::OrderedUniqueSequence;
use ledger_collections::{CollectionError, IteratorStateError};
use rstest::rstest;

const NO_CURRENT: CollectionError =
    CollectionError::IteratorState(IteratorStateError::NoCurrentElement);
const ALREADY_REMOVED: CollectionError =
    CollectionError::IteratorState(IteratorStateError::AlreadyRemoved);

#[rstest]
fn test_forward_then_backward() {
    let mut sequence = OrderedUniqueSequence::from([1, 2, 3]);
    let mut cursor = sequence.cursor_front();

    assert!(!cursor.has_previous());
    assert_eq!(cursor.previous_index(), None);
    assert_eq!(cursor.next(), Some(&1));
    assert_eq!(cursor.next(), Some(&2));
    assert_eq!(cursor.next(), Some(&3));
    assert_eq!(cursor.next(), None);
    assert!(!cursor.has_next());

    assert_eq!(cursor.previous(), Some(&3));
    assert_eq!(cursor.previous(), Some(&2));
    assert_eq!(cursor.previous_index(), Some(0));
    assert_eq!(cursor.next_index(), 1);
}

#[rstest]
#[case(0, Some(&'a'))]
#[case(2, Some(&'c'))]
#[case(3, None)]
fn test_cursor_at_index(#[case] index: usize, #[case] expected: Option<&char>) {
    let mut sequence = OrderedUniqueSequence::from(['a', 'b', 'c']);
    let mut cursor = sequence.cursor(index).unwrap();
    assert_eq!(cursor.next(), expected);
}

#[rstest]
fn test_cursor_beyond_len_is_rejected() {
    let mut sequence = OrderedUniqueSequence::from(['a']);
    assert!(matches!(
        sequence.cursor(2),
        Err(CollectionError::IndexOutOfBounds { index: 2, len: 1 })
    ));
}

#[rstest]
fn test_mutation_before_advance_fails() {
    let mut sequence = OrderedUniqueSequence::from([1, 2]);
    let mut cursor = sequence.cursor_front();
    assert_eq!(cursor.remove(), Err(NO_CURRENT));
    assert_eq!(cursor.set(5), Err(NO_CURRENT));
    assert_eq!(sequence.as_slice(), &[1, 2]);
}

#[rstest]
fn test_second_remove_fails_until_advance() {
    let mut sequence = OrderedUniqueSequence::from([1, 2, 3]);
    let mut cursor = sequence.cursor_front();
    cursor.next();
    assert_eq!(cursor.remove(), Ok(1));
    assert_eq!(cursor.remove(), Err(ALREADY_REMOVED));
    assert_eq!(cursor.set(9), Err(ALREADY_REMOVED));
    assert_eq!(cursor.current(), None);

    assert_eq!(cursor.next(), Some(&2));
    assert_eq!(cursor.remove(), Ok(2));
    assert_eq!(sequence.as_slice(), &[3]);
}

#[rstest]
fn test_remove_through_cursor_updates_membership() {
    let mut sequence = OrderedUniqueSequence::from(["x", "y"]);
    let mut cursor = sequence.cursor_back();
    cursor.previous();
    assert_eq!(cursor.remove(), Ok("y"));
    assert!(cursor.add("y"));
    assert_eq!(sequence.as_slice(), &["x", "y"]);
    assert_eq!(sequence.index_of("y"), Some(1));
}

#[rstest]
fn test_set_new_element() {
    let mut sequence = OrderedUniqueSequence::from([1, 2, 3]);
    let mut cursor = sequence.cursor_front();
    cursor.next();
    cursor.next();
    assert_eq!(cursor.set(20), Ok(2));
    assert_eq!(cursor.current(), Some(&20));
    assert_eq!(cursor.next(), Some(&3));
    assert!(sequence.contains(&20));
    assert!(!sequence.contains(&2));
}

#[rstest]
fn test_set_to_later_duplicate_keeps_cursor() {
    let mut sequence = OrderedUniqueSequence::from([1, 2, 3, 4]);
    let mut cursor = sequence.cursor_front();
    cursor.next();
    assert_eq!(cursor.set(3), Ok(1));
    assert_eq!(cursor.next(), Some(&2));
    assert_eq!(cursor.next(), Some(&4));
    assert_eq!(sequence.as_slice(), &[3, 2, 4]);
}

#[rstest]
fn test_add_at_back_appends_in_order() {
    let mut sequence = OrderedUniqueSequence::from([1]);
    let mut cursor = sequence.cursor_back();
    assert!(cursor.add(2));
    assert!(cursor.add(3));
    assert!(!cursor.add(1));
    assert_eq!(cursor.next_index(), 3);
    assert_eq!(cursor.previous(), Some(&3));
    assert_eq!(sequence.as_slice(), &[1, 2, 3]);
}

#[rstest]
fn test_replace_all_uses_cursor_semantics() {
    let mut sequence = OrderedUniqueSequence::from(["a", "b", "c"]);
    sequence.replace_all(|element| if *element == "a" { "c" } else { *element });
    assert_eq!(sequence.as_slice(), &["c", "b"]);
}
