#![cfg(feature = "serde")]
//! Serialization tests for the plain data types.

use kindred::control::{Either, Maybe, Validated};
use kindred::effect::{StateTuple, Writer};
use kindred::typeclass::Identity;
use rstest::rstest;
use serde_json::json;

#[rstest]
fn maybe_serializes_as_a_tagged_enum() {
    let just = serde_json::to_value(Maybe::Just(3)).unwrap();
    assert_eq!(just, json!({ "Just": 3 }));
    let nothing = serde_json::to_value(Maybe::<i32>::Nothing).unwrap();
    assert_eq!(nothing, json!("Nothing"));
}

#[rstest]
fn either_round_trips() {
    let original: Either<String, Vec<u8>> = Either::Right(vec![1, 2]);
    let text = serde_json::to_string(&original).unwrap();
    let decoded: Either<String, Vec<u8>> = serde_json::from_str(&text).unwrap();
    assert_eq!(decoded, original);
}

#[rstest]
fn validated_reads_external_input() {
    let decoded: Validated<Vec<String>, u32> =
        serde_json::from_value(json!({ "Invalid": ["missing id"] })).unwrap();
    assert_eq!(decoded, Validated::invalid(vec!["missing id".to_string()]));
}

#[rstest]
fn state_tuple_and_writer_use_field_names() {
    let tuple = serde_json::to_value(StateTuple::new(1, "a")).unwrap();
    assert_eq!(tuple, json!({ "state": 1, "value": "a" }));

    let writer = serde_json::to_value(Writer::new(2, vec!["log"])).unwrap();
    assert_eq!(writer, json!({ "value": 2, "log": ["log"] }));
}

#[rstest]
fn identity_is_transparent_as_a_newtype() {
    let value = serde_json::to_value(Identity(5)).unwrap();
    assert_eq!(value, json!(5));
}
