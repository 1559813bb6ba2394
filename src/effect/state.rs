//! State Monad - computations that thread a state value.
//!
//! `State<S, A>` wraps a transition `S -> StateTuple<S, A>`. Composed
//! computations pass the state produced by each step to the next one, so
//! state can be modelled without mutation.
//!
//! # Examples
//!
//! ```rust
//! use kindred::effect::{State, StateWitness};
//! use kindred::mdo;
//!
//! let counter = mdo! {
//!     StateWitness<i32>;
//!     current <= State::get();
//!     _ <= State::set(current + 1);
//!     State::pure(current)
//! };
//!
//! let outcome = counter.run(10);
//! assert_eq!(outcome.value, 10);
//! assert_eq!(outcome.state, 11);
//! ```

use std::convert::Infallible;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::kind::{Kind, Value, Witness};
use crate::typeclass::{Applicative, Functor, Monad};

/// The pair produced by one state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateTuple<S, A> {
    /// The state after the transition.
    pub state: S,
    /// The value computed by the transition.
    pub value: A,
}

impl<S, A> StateTuple<S, A> {
    /// Pairs a state with a value.
    #[inline]
    pub const fn new(state: S, value: A) -> Self {
        Self { state, value }
    }

    /// Transforms the value, keeping the state.
    #[inline]
    pub fn map_value<B, F>(self, function: F) -> StateTuple<S, B>
    where
        F: FnOnce(A) -> B,
    {
        StateTuple::new(self.state, function(self.value))
    }
}

/// A stateful computation over state `S` yielding `A`.
pub struct State<S, A> {
    run_function: Rc<dyn Fn(S) -> StateTuple<S, A>>,
}

impl<S, A> State<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Creates a new State from a transition function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::{State, StateTuple};
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| StateTuple::new(s + 1, s * 2));
    /// assert_eq!(state.run(10), StateTuple::new(11, 20));
    /// ```
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(S) -> StateTuple<S, A> + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the computation from `initial_state`.
    pub fn run(&self, initial_state: S) -> StateTuple<S, A> {
        (self.run_function)(initial_state)
    }

    /// Runs the computation and keeps only the value.
    pub fn eval(&self, initial_state: S) -> A {
        self.run(initial_state).value
    }

    /// Runs the computation and keeps only the final state.
    pub fn exec(&self, initial_state: S) -> S {
        self.run(initial_state).state
    }

    /// A computation that leaves the state unchanged.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |state| StateTuple::new(state, value.clone()))
    }

    /// Reads a value derived from the current state.
    pub fn inspect<F>(projection: F) -> Self
    where
        S: Clone,
        F: Fn(S) -> A + 'static,
    {
        Self::new(move |state: S| StateTuple::new(state.clone(), projection(state)))
    }
}

impl<S: Clone + 'static> State<S, S> {
    /// Returns the current state as the value.
    pub fn get() -> Self {
        Self::new(|state: S| StateTuple::new(state.clone(), state))
    }
}

impl<S: 'static> State<S, ()> {
    /// Replaces the state.
    pub fn set(new_state: S) -> Self
    where
        S: Clone,
    {
        Self::new(move |_| StateTuple::new(new_state.clone(), ()))
    }

    /// Applies `modifier` to the state.
    pub fn modify<F>(modifier: F) -> Self
    where
        F: Fn(S) -> S + 'static,
    {
        Self::new(move |state| StateTuple::new(modifier(state), ()))
    }
}

impl<S, A> Clone for State<S, A> {
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<S, A> std::fmt::Debug for State<S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("State(<function>)")
    }
}

/// Witness for `State<S, _>`.
pub struct StateWitness<S>(Infallible, PhantomData<S>);

impl<S: 'static> Witness for StateWitness<S> {
    type Of<A: 'static> = State<S, A>;
}

impl<S: Value> Functor for StateWitness<S> {
    fn map<A, B, Func>(fa: Kind<Self, A>, function: Func) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> B + 'static,
    {
        State::new(move |state| fa.run(state).map_value(&function))
    }
}

impl<S: Value> Applicative for StateWitness<S> {
    fn pure<A>(value: A) -> Kind<Self, A>
    where
        A: Value,
    {
        State::pure(value)
    }

    fn ap<A, B, Func>(ff: Kind<Self, Func>, fa: Kind<Self, A>) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> B + Clone + 'static,
    {
        State::new(move |state| {
            let StateTuple { state, value: function } = ff.run(state);
            fa.run(state).map_value(function)
        })
    }
}

impl<S: Value> Monad for StateWitness<S> {
    fn flat_map<A, B, Func>(ma: Kind<Self, A>, function: Func) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> Kind<Self, B> + 'static,
    {
        State::new(move |state| {
            let StateTuple { state, value } = ma.run(state);
            function(value).run(state)
        })
    }
}
