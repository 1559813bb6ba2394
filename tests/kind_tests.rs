//! Tests for the witness encoding and the erased `AnyKind` holder.

use kindred::control::{Either, EitherWitness, ListWitness, Maybe, MaybeWitness, OptionWitness};
use kindred::effect::{Reader, ReaderWitness};
use kindred::kind::{AnyKind, Kind, KindError, Witness};
use kindred::transformer::{EitherT, EitherTWitness};
use kindred::typeclass::Functor;
use proptest::prelude::*;
use rstest::rstest;

fn widen_doubled<F: Functor>(kind: Kind<F, i32>) -> AnyKind {
    AnyKind::widen::<F, i32>(F::map::<i32, i32, _>(kind, |n| n.wrapping_mul(2)))
}

// =============================================================================
// Static Encoding Tests
// =============================================================================

#[rstest]
fn kind_normalizes_to_the_native_type() {
    let list: Kind<ListWitness, u8> = vec![1, 2];
    let option: Kind<OptionWitness, u8> = Some(1);
    let either: Kind<EitherWitness<String>, u8> = Either::Right(1);
    let nested: Kind<EitherTWitness<OptionWitness, String>, u8> = EitherT::from_kind(Some(Either::Right(1)));

    assert_eq!(list, vec![1, 2]);
    assert_eq!(option, Some(1));
    assert_eq!(either, Either::Right(1));
    assert_eq!(nested.value(), Some(Either::Right(1)));
}

#[rstest]
fn witness_of_applies_the_constructor() {
    fn name_of<F: Witness>() -> &'static str {
        std::any::type_name::<F::Of<bool>>()
    }
    assert!(name_of::<ListWitness>().starts_with("alloc::vec::Vec<bool"));
    assert!(name_of::<OptionWitness>().starts_with("core::option::Option<bool"));
}

// =============================================================================
// AnyKind Tests
// =============================================================================

#[rstest]
fn heterogeneous_kinds_share_one_slot() {
    let slots = vec![
        widen_doubled::<ListWitness>(vec![1, 2]),
        widen_doubled::<OptionWitness>(Some(5)),
        widen_doubled::<MaybeWitness>(Maybe::Just(7)),
    ];

    let mut slots = slots.into_iter();
    let list = slots.next().map(AnyKind::narrow::<ListWitness, i32>);
    let option = slots.next().map(AnyKind::narrow::<OptionWitness, i32>);
    let maybe = slots.next().map(AnyKind::narrow::<MaybeWitness, i32>);

    assert_eq!(list, Some(Ok(vec![2, 4])));
    assert_eq!(option, Some(Ok(Some(10))));
    assert_eq!(maybe, Some(Ok(Maybe::Just(14))));
}

#[rstest]
#[case::other_witness(AnyKind::widen::<OptionWitness, i32>(Some(1)))]
#[case::other_payload(AnyKind::widen::<ListWitness, i64>(vec![1]))]
#[case::other_fixed_parameter(AnyKind::widen::<EitherWitness<u8>, i32>(Either::Right(1)))]
fn wrong_pairings_are_mismatches(#[case] erased: AnyKind) {
    let result = erased.narrow::<ListWitness, i32>();
    assert!(matches!(result, Err(KindError::Mismatch { .. })));
}

#[rstest]
fn missing_kind_is_reported() {
    let error = AnyKind::narrow_from::<OptionWitness, i32>(None).unwrap_err();
    assert!(error.to_string().starts_with("cannot narrow a missing Kind"));
}

#[rstest]
fn function_kinds_survive_erasure() {
    let reader = Reader::new(|n: i32| n + 1);
    let erased = AnyKind::widen::<ReaderWitness<i32>, i32>(reader);
    let narrowed = erased.narrow::<ReaderWitness<i32>, i32>();
    assert_eq!(narrowed.map(|reader| reader.run(1)), Ok(2));
}

proptest! {
    #[test]
    fn prop_widen_then_narrow_is_identity(values in prop::collection::vec(any::<i32>(), 0..16)) {
        let erased = AnyKind::widen::<ListWitness, i32>(values.clone());
        prop_assert_eq!(erased.narrow::<ListWitness, i32>(), Ok(values));
    }

    #[test]
    fn prop_narrow_from_present_matches_narrow(value in any::<Option<u16>>()) {
        let erased = AnyKind::widen::<OptionWitness, u16>(value);
        prop_assert_eq!(AnyKind::narrow_from::<OptionWitness, u16>(Some(erased)), Ok(value));
    }
}
