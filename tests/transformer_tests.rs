//! Integration tests for the monad transformers.
//!
//! Each transformer is driven only through its witness's `Monad` and
//! `MonadError` implementations, with a concrete outer monad chosen here.

use std::cell::Cell;
use std::rc::Rc;

use kindred::control::{Either, EitherWitness, ListWitness, Maybe, OptionWitness};
use kindred::effect::{IO, IOWitness, State, StateTuple, StateWitness, Writer, WriterWitness};
use kindred::transformer::{
    EitherT, EitherTWitness, MaybeT, MaybeTWitness, OptionT, OptionTWitness, ReaderT,
    ReaderTWitness, StateT, StateTWitness,
};
use kindred::typeclass::{Applicative, Monad, MonadError};
use rstest::rstest;

fn call_counter() -> (Rc<Cell<u32>>, Rc<Cell<u32>>) {
    let calls = Rc::new(Cell::new(0));
    (Rc::clone(&calls), calls)
}

// =============================================================================
// Short-circuit Tests
// =============================================================================

#[rstest]
fn either_t_skips_the_step_after_a_left() {
    type Checked = EitherTWitness<OptionWitness, String>;
    let (counter, calls) = call_counter();

    let program = Checked::flat_map(EitherT::right(1), move |n| {
        let counter = Rc::clone(&counter);
        let failed = EitherT::<OptionWitness, String, i32>::left(format!("failed at {n}"));
        Checked::flat_map(failed, move |m| {
            counter.set(counter.get() + 1);
            EitherT::right(m + 1)
        })
    });

    assert_eq!(program.value(), Some(Either::Left("failed at 1".to_string())));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn maybe_t_skips_the_step_after_nothing() {
    type Absent = MaybeTWitness<IOWitness>;
    let (counter, calls) = call_counter();

    let program = Absent::flat_map(MaybeT::just(1), move |_| {
        let counter = Rc::clone(&counter);
        Absent::flat_map(MaybeT::<IOWitness, i32>::nothing(), move |m| {
            counter.set(counter.get() + 1);
            MaybeT::just(m)
        })
    });

    assert_eq!(program.value().run_unsafe(), Maybe::Nothing);
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn option_t_skips_the_step_after_none() {
    type Absent = OptionTWitness<ListWitness>;
    let (counter, calls) = call_counter();

    let program = Absent::flat_map(OptionT::some(1), move |n| {
        let counter = Rc::clone(&counter);
        Absent::flat_map(OptionT::<ListWitness, i32>::from_kind(vec![Some(n), None]), move |m: i32| {
            counter.set(counter.get() + 1);
            OptionT::some(m * 100)
        })
    });

    assert_eq!(program.value(), vec![Some(100), None]);
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn reader_t_skips_the_step_after_an_outer_failure() {
    type Configured = ReaderTWitness<EitherWitness<String>, u32>;
    let (counter, calls) = call_counter();

    let checked: ReaderT<EitherWitness<String>, u32, u32> = ReaderT::new(|requested: u32| {
        if requested > 5 {
            Either::Left(format!("{requested} exceeds 5"))
        } else {
            Either::Right(requested)
        }
    });
    let program = Configured::flat_map(checked, move |value| {
        counter.set(counter.get() + 1);
        ReaderT::reader(move |_| value * 2)
    });

    assert_eq!(program.run(3), Either::Right(6));
    assert_eq!(program.run(9), Either::Left("9 exceeds 5".to_string()));
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn state_t_failure_is_returned_untouched() {
    type Guarded = StateTWitness<EitherWitness<String>, i32>;
    let (counter, calls) = call_counter();

    let program = Guarded::flat_map(StateT::modify(|n: i32| n + 1), move |()| {
        let counter = Rc::clone(&counter);
        Guarded::flat_map(Guarded::raise_error::<i32>("halt".to_string()), move |n| {
            counter.set(counter.get() + 1);
            StateT::set(n)
        })
    });

    assert_eq!(program.run_state_t(0), Either::Left("halt".to_string()));
    assert_eq!(calls.get(), 0);
}

// =============================================================================
// State Threading Tests
// =============================================================================

type Stack = StateTWitness<OptionWitness, Vec<i32>>;

fn push(value: i32) -> StateT<OptionWitness, Vec<i32>, ()> {
    StateT::modify(move |mut stack: Vec<i32>| {
        stack.push(value);
        stack
    })
}

fn pop() -> StateT<OptionWitness, Vec<i32>, i32> {
    StateT::new(|mut stack: Vec<i32>| {
        let top = stack.pop()?;
        Some(StateTuple::new(stack, top))
    })
}

#[rstest]
fn push_push_pop_pop_sums_the_stack() {
    let program = Stack::flat_map(push(10), |()| {
        Stack::flat_map(push(20), |()| {
            Stack::flat_map(pop(), |first| {
                Stack::flat_map(pop(), move |second| Stack::pure(first + second))
            })
        })
    });

    assert_eq!(program.run_state_t(Vec::new()), Some(StateTuple::new(Vec::new(), 30)));
}

#[rstest]
fn pop_on_an_empty_stack_stops_the_chain() {
    let (counter, calls) = call_counter();
    let program = Stack::flat_map(pop(), move |top| {
        counter.set(counter.get() + 1);
        push(top)
    });

    assert_eq!(program.run_state_t(Vec::new()), None);
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn state_t_over_writer_keeps_both_channels() {
    type Audited = StateTWitness<WriterWitness<Vec<String>>, u32>;
    let deposit = |amount: u32| -> StateT<WriterWitness<Vec<String>>, u32, ()> {
        StateT::new(move |balance: u32| {
            Writer::new(StateTuple::new(balance + amount, ()), vec![format!("deposit {amount}")])
        })
    };

    let program = Audited::flat_map(deposit(5), move |()| deposit(7));
    let (tuple, log) = program.run_state_t(100).run();

    assert_eq!(tuple, StateTuple::new(112, ()));
    assert_eq!(log, vec!["deposit 5".to_string(), "deposit 7".to_string()]);
}

// =============================================================================
// Error Recovery Tests
// =============================================================================

#[rstest]
fn handler_result_equals_the_handler_run_alone() {
    type Checked = EitherTWitness<OptionWitness, String>;
    let handler = |error: String| EitherT::<OptionWitness, String, usize>::right(error.len());

    let recovered = Checked::handle_error_with(EitherT::left("broken".to_string()), handler);

    assert_eq!(recovered.value(), handler("broken".to_string()).value());
}

#[rstest]
fn handler_runs_once_on_failure_and_never_on_success() {
    type Absent = MaybeTWitness<OptionWitness>;
    let (counter, calls) = call_counter();
    let handler = move |()| {
        counter.set(counter.get() + 1);
        MaybeT::<OptionWitness, i32>::just(0)
    };
    let handler = Rc::new(handler);

    let on_failure = {
        let handler = Rc::clone(&handler);
        Absent::handle_error_with(MaybeT::nothing(), move |error| handler(error))
    };
    let on_success = {
        let handler = Rc::clone(&handler);
        Absent::handle_error_with(MaybeT::just(5), move |error| handler(error))
    };

    assert_eq!(on_failure.value(), Some(Maybe::Just(0)));
    assert_eq!(on_success.value(), Some(Maybe::Just(5)));
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn state_t_recovery_restarts_from_the_failed_steps_state() {
    type Guarded = StateTWitness<EitherWitness<String>, i32>;
    let failing = Guarded::flat_map(StateT::set(50), |()| Guarded::raise_error::<()>("no".to_string()));
    let recovered = Guarded::flat_map(StateT::modify(|n: i32| n + 1), move |()| {
        Guarded::handle_error_with(failing.clone(), |_| StateT::modify(|n: i32| n * 10))
    });

    assert_eq!(recovered.run_state_t(1), Either::Right(StateTuple::new(20, ())));
}

#[rstest]
fn ensure_fails_inside_a_transformer() {
    type Checked = EitherTWitness<ListWitness, &'static str>;
    let candidates: EitherT<ListWitness, &'static str, i32> = EitherT::lift_f(vec![2, 3]);
    let even = Checked::ensure(candidates, |n| n % 2 == 0, || "odd");

    assert_eq!(even.value(), vec![Either::Right(2), Either::Left("odd")]);
}

#[rstest]
fn lift_f_sequences_the_outer_effect() {
    type Absent = OptionTWitness<StateWitness<u32>>;
    let tick = || OptionT::<StateWitness<u32>, ()>::lift_f(State::modify(|n: u32| n + 1));

    let program = Absent::flat_map(tick(), move |()| tick());

    assert_eq!(program.value().run(0), StateTuple::new(2, Some(())));
}

#[rstest]
fn maybe_t_over_io_defers_its_effects() {
    let (counter, calls) = call_counter();
    let effect = MaybeT::<IOWitness, i32>::lift_f(IO::new(move || {
        counter.set(counter.get() + 1);
        3
    }));

    let doubled = MaybeTWitness::<IOWitness>::flat_map(effect, |n| MaybeT::just(n * 2));
    assert_eq!(calls.get(), 0);

    assert_eq!(doubled.value().run_unsafe(), Maybe::Just(6));
    assert_eq!(calls.get(), 1);
}
