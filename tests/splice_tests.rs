//! Integration tests for the splice helpers.

use ledger_collections::CollectionError;
use ledger_collections::splice::{insert, insert_range, remove_at, remove_range};
use rstest::rstest;

const SOURCE: [char; 4] = ['a', 'b', 'c', 'd'];

#[rstest]
#[case(0, 0, "abcd")]
#[case(0, 4, "")]
#[case(1, 3, "ad")]
#[case(3, 4, "abc")]
fn test_remove_range(#[case] begin: usize, #[case] end: usize, #[case] expected: &str) {
    let result: String = remove_range(&SOURCE, begin, end).unwrap().into_iter().collect();
    assert_eq!(result, expected);
}

#[rstest]
#[case(5, 5, CollectionError::IndexOutOfBounds { index: 5, len: 4 })]
#[case(0, 5, CollectionError::IndexOutOfBounds { index: 5, len: 4 })]
#[case(3, 2, CollectionError::InvalidRange { begin: 3, end: 2 })]
fn test_remove_range_errors(
    #[case] begin: usize,
    #[case] end: usize,
    #[case] expected: CollectionError,
) {
    assert_eq!(remove_range(&SOURCE, begin, end), Err(expected));
}

#[rstest]
fn test_remove_at() {
    assert_eq!(remove_at(&SOURCE, 3), Ok(vec!['a', 'b', 'c']));
    assert!(remove_at(&SOURCE, 4).unwrap_err().is_bounds_error());
}

#[rstest]
#[case(0, "xyabcd")]
#[case(2, "abxycd")]
#[case(4, "abcdxy")]
fn test_insert_range_positions(#[case] at: usize, #[case] expected: &str) {
    let values = ['w', 'x', 'y', 'z'];
    let result: String = insert_range(&SOURCE, at, &values, 1, 3)
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(result, expected);
}

#[rstest]
fn test_insert_range_inverted() {
    assert_eq!(
        insert_range(&SOURCE, 0, &['x', 'y'], 2, 1),
        Err(CollectionError::InvalidRange { begin: 2, end: 1 })
    );
}

#[rstest]
fn test_insert_leaves_source_untouched() {
    let source = vec![1, 2];
    assert_eq!(insert(&source, 1, 9), Ok(vec![1, 9, 2]));
    assert_eq!(source, vec![1, 2]);
    assert_eq!(insert(&source, 3, 9), Err(CollectionError::IndexOutOfBounds { index: 3, len: 2 }));
}
