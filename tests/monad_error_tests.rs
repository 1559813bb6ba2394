//! Tests for `MonadError` across witnesses.

use std::cell::Cell;
use std::rc::Rc;

use kindred::control::{
    Either, EitherWitness, Lazy, LazyWitness, Maybe, MaybeWitness, OptionWitness, ResultWitness,
    Try, TryError, TryWitness,
};
use kindred::kind::Kind;
use kindred::typeclass::{Functor, Monad, MonadError};
use rstest::rstest;

fn checked_division<F>(numerator: i32, denominator: i32, error: F::Error) -> Kind<F, i32>
where
    F: MonadError,
{
    let guarded = F::ensure::<i32, _, _>(F::pure(denominator), |d| *d != 0, move || error.clone());
    F::map::<i32, i32, _>(guarded, move |d| numerator / d)
}

// =============================================================================
// Raise and Handle Tests
// =============================================================================

#[rstest]
#[case(6, 3, Some(2))]
#[case(6, 0, None)]
fn option_ensure(#[case] numerator: i32, #[case] denominator: i32, #[case] expected: Option<i32>) {
    assert_eq!(checked_division::<OptionWitness>(numerator, denominator, ()), expected);
}

#[rstest]
#[case(6, 3, Ok(2))]
#[case(6, 0, Err("division by zero"))]
fn result_ensure(
    #[case] numerator: i32,
    #[case] denominator: i32,
    #[case] expected: Result<i32, &'static str>,
) {
    assert_eq!(
        checked_division::<ResultWitness<&'static str>>(numerator, denominator, "division by zero"),
        expected
    );
}

#[rstest]
fn maybe_raise_error_is_nothing() {
    assert_eq!(MaybeWitness::raise_error::<i32>(()), Maybe::Nothing);
    assert_eq!(MaybeWitness::handle_error(Maybe::Nothing, |()| 4), Maybe::Just(4));
}

#[rstest]
fn either_from_result_maps_err_to_left() {
    let converted = EitherWitness::<String>::from_result(Err::<i32, _>("bad".to_string()));
    assert_eq!(converted, Either::Left("bad".to_string()));
}

#[rstest]
fn handler_sees_the_raised_error() {
    let seen = Rc::new(Cell::new(0));
    let recorder = Rc::clone(&seen);
    let recovered = ResultWitness::<i32>::handle_error_with(Err(41), move |code| {
        recorder.set(code);
        Ok(code + 1)
    });
    assert_eq!(recovered, Ok(42));
    assert_eq!(seen.get(), 41);
}

// =============================================================================
// Try and Lazy Tests
// =============================================================================

#[rstest]
fn try_map_captures_panics_as_failures() {
    let failed = TryWitness::map(Try::success(0), |n: i32| {
        assert!(n != 0, "divide by zero");
        10 / n
    });
    assert!(matches!(failed, Try::Failure(TryError::Panicked(ref message)) if message == "divide by zero"));
}

#[rstest]
fn try_flat_map_does_not_run_after_a_failure() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let failed = TryWitness::raise_error::<i32>(TryError::message("unavailable"));
    let chained = TryWitness::flat_map(failed, move |n| {
        counter.set(counter.get() + 1);
        Try::success(n)
    });
    assert!(chained.is_failure());
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn try_handle_error_recovers_from_a_panic() {
    let panicked = Try::of(|| -> i32 { panic!("boom") });
    let recovered = TryWitness::handle_error(panicked, |error| error.to_string().len() as i32);
    assert_eq!(recovered, Try::success("panicked: boom".len() as i32));
}

#[rstest]
fn lazy_failure_is_cached_and_recoverable() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let lazy: Lazy<i32> = Lazy::defer(move || {
        counter.set(counter.get() + 1);
        panic!("not ready")
    });

    assert!(lazy.force().is_err());
    assert!(lazy.force().is_err());
    assert_eq!(calls.get(), 1);

    let recovered = LazyWitness::handle_error(lazy, |_| 7);
    assert_eq!(recovered.force(), Ok(7));
}
