#![cfg(feature = "serde")]

//! Integration tests for the serde encoding of OrderedUniqueSequence.
//!
//! The encoding records the backing capacity, the element count and the
//! elements in order; decoding re-adds the elements one by one.

use ledger_collections::sequence::OrderedUniqueSequence;
use rstest::rstest;

#[rstest]
fn test_sequence_json_roundtrip() {
    let sequence: OrderedUniqueSequence<i32> = (1..=100).rev().collect();
    let json = serde_json::to_string(&sequence).unwrap();
    let restored: OrderedUniqueSequence<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(sequence, restored);
    assert_eq!(restored.index_of(&1), Some(99));
}

#[rstest]
fn test_encoding_layout() {
    let sequence = OrderedUniqueSequence::from(["b", "a"]);
    let value = serde_json::to_value(&sequence).unwrap();
    assert_eq!(value["len"], 2);
    assert_eq!(value["elements"], serde_json::json!(["b", "a"]));
    assert_eq!(value["capacity"], sequence.capacity());
}

#[rstest]
fn test_recorded_capacity_is_restored() {
    let json = r#"{"capacity":40,"len":2,"elements":[7,8]}"#;
    let restored: OrderedUniqueSequence<u8> = serde_json::from_str(json).unwrap();
    assert_eq!(restored.as_slice(), &[7, 8]);
    assert!(restored.capacity() >= 40);
}

#[rstest]
fn test_forged_capacity_is_bounded() {
    let json = r#"{"capacity":18446744073709551615,"len":1,"elements":[7]}"#;
    let restored: OrderedUniqueSequence<u8> = serde_json::from_str(json).unwrap();
    assert_eq!(restored.len(), 1);
    assert!(restored.capacity() < 1000);
}

#[rstest]
#[case(r#"{"capacity":10,"len":3,"elements":[1,2]}"#)]
#[case(r#"{"capacity":10,"len":0,"elements":[1]}"#)]
fn test_len_mismatch_is_rejected(#[case] json: &str) {
    let result: Result<OrderedUniqueSequence<i32>, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[rstest]
fn test_duplicate_elements_collapse_on_decode() {
    let json = r#"{"capacity":10,"len":3,"elements":[1,2,1]}"#;
    let restored: OrderedUniqueSequence<i32> = serde_json::from_str(json).unwrap();
    assert_eq!(restored.as_slice(), &[1, 2]);
}
