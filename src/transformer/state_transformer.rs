//! `StateT` - State Monad Transformer.
//!
//! `StateT<F, S, A>` encapsulates a function `S -> Kind<F, StateTuple<S, A>>`:
//! a state transition whose result lives in the outer monad `F`. Binding
//! runs the first step, then hands the state it produced to the
//! continuation, all inside `F::flat_map`, so a failing outer monad stops
//! the chain.
//!
//! # Examples
//!
//! ```rust
//! use kindred::control::OptionWitness;
//! use kindred::effect::StateTuple;
//! use kindred::transformer::{StateT, StateTWitness};
//! use kindred::typeclass::Monad;
//!
//! type Stack = StateTWitness<OptionWitness, Vec<i32>>;
//!
//! fn pop() -> StateT<OptionWitness, Vec<i32>, i32> {
//!     StateT::new(|mut stack: Vec<i32>| {
//!         let top = stack.pop()?;
//!         Some(StateTuple::new(stack, top))
//!     })
//! }
//!
//! let both = Stack::flat_map(pop(), |a| Stack::flat_map(pop(), move |b| StateT::state(move |s| StateTuple::new(s, a + b))));
//!
//! assert_eq!(both.run_state_t(vec![1, 2]), Some(StateTuple::new(vec![], 3)));
//! assert_eq!(both.run_state_t(vec![1]), None);
//! ```

use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::effect::StateTuple;
use crate::kind::{Kind, Value, Witness};
use crate::typeclass::{Applicative, Functor, Monad, MonadError};

/// A monad transformer that threads state `S` through the outer monad `F`.
pub struct StateT<F, S, A>
where
    F: Witness,
    S: 'static,
    A: 'static,
{
    run_function: Rc<dyn Fn(S) -> Kind<F, StateTuple<S, A>>>,
}

impl<F, S, A> StateT<F, S, A>
where
    F: Witness,
    S: 'static,
    A: 'static,
{
    /// Creates a new `StateT` from a state transition function.
    pub fn new<Func>(transition: Func) -> Self
    where
        Func: Fn(S) -> Kind<F, StateTuple<S, A>> + 'static,
    {
        Self {
            run_function: Rc::new(transition),
        }
    }

    /// Runs the computation from `initial_state`.
    pub fn run_state_t(&self, initial_state: S) -> Kind<F, StateTuple<S, A>> {
        (self.run_function)(initial_state)
    }
}

impl<F, S, A> StateT<F, S, A>
where
    F: Functor,
    S: Value,
    A: Value,
{
    /// Runs the computation and keeps only the value.
    pub fn eval_state_t(&self, initial_state: S) -> Kind<F, A> {
        F::map::<StateTuple<S, A>, A, _>(self.run_state_t(initial_state), |tuple| tuple.value)
    }

    /// Runs the computation and keeps only the final state.
    pub fn exec_state_t(&self, initial_state: S) -> Kind<F, S> {
        F::map::<StateTuple<S, A>, S, _>(self.run_state_t(initial_state), |tuple| tuple.state)
    }
}

impl<F, S, A> StateT<F, S, A>
where
    F: Applicative,
    S: Value,
    A: Value,
{
    /// Lifts a pure state transition.
    pub fn state<Func>(transition: Func) -> Self
    where
        Func: Fn(S) -> StateTuple<S, A> + 'static,
    {
        Self::new(move |state| F::pure(transition(state)))
    }

    /// Reads a value derived from the current state.
    pub fn inspect<Func>(projection: Func) -> Self
    where
        Func: Fn(S) -> A + 'static,
    {
        Self::state(move |state: S| StateTuple::new(state.clone(), projection(state)))
    }

    /// Runs `fa` without touching the state.
    pub fn lift_f(fa: Kind<F, A>) -> Self
    where
        Kind<F, A>: Clone,
    {
        Self::new(move |state: S| {
            F::map::<A, StateTuple<S, A>, _>(fa.clone(), move |value| {
                StateTuple::new(state.clone(), value)
            })
        })
    }
}

impl<F, S> StateT<F, S, S>
where
    F: Applicative,
    S: Value,
{
    /// Returns the current state as the value.
    pub fn get() -> Self {
        Self::state(|state: S| StateTuple::new(state.clone(), state))
    }
}

impl<F, S> StateT<F, S, ()>
where
    F: Applicative,
    S: Value,
{
    /// Replaces the state.
    pub fn set(new_state: S) -> Self {
        Self::state(move |_| StateTuple::new(new_state.clone(), ()))
    }

    /// Applies `modifier` to the state.
    pub fn modify<Func>(modifier: Func) -> Self
    where
        Func: Fn(S) -> S + 'static,
    {
        Self::state(move |state| StateTuple::new(modifier(state), ()))
    }
}

impl<F, S, A> Clone for StateT<F, S, A>
where
    F: Witness,
    S: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<F, S, A> fmt::Debug for StateT<F, S, A>
where
    F: Witness,
    S: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("StateT(<function>)")
    }
}

/// Witness for `StateT<F, S, _>`.
pub struct StateTWitness<F, S>(Infallible, PhantomData<(F, S)>);

impl<F: Witness, S: 'static> Witness for StateTWitness<F, S> {
    type Of<A: 'static> = StateT<F, S, A>;
}

impl<F: Functor, S: Value> Functor for StateTWitness<F, S> {
    fn map<A, B, Func>(fa: Kind<Self, A>, function: Func) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> B + 'static,
    {
        let function = Rc::new(function);
        StateT::new(move |state| {
            let function = Rc::clone(&function);
            F::map::<StateTuple<S, A>, StateTuple<S, B>, _>(fa.run_state_t(state), move |tuple| {
                tuple.map_value(&*function)
            })
        })
    }
}

// `ap` is sequential: the function step's state feeds the value step.
impl<F: Monad, S: Value> Applicative for StateTWitness<F, S> {
    fn pure<A>(value: A) -> Kind<Self, A>
    where
        A: Value,
    {
        StateT::state(move |state| StateTuple::new(state, value.clone()))
    }

    fn ap<A, B, Func>(ff: Kind<Self, Func>, fa: Kind<Self, A>) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> B + Clone + 'static,
    {
        StateT::new(move |state| {
            let fa = fa.clone();
            F::flat_map::<StateTuple<S, Func>, StateTuple<S, B>, _>(
                ff.run_state_t(state),
                move |StateTuple { state, value: function }| {
                    F::map::<StateTuple<S, A>, StateTuple<S, B>, _>(
                        fa.run_state_t(state),
                        move |tuple| tuple.map_value(&function),
                    )
                },
            )
        })
    }
}

impl<F: Monad, S: Value> Monad for StateTWitness<F, S> {
    fn flat_map<A, B, Func>(ma: Kind<Self, A>, function: Func) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> Kind<Self, B> + 'static,
    {
        let function = Rc::new(function);
        StateT::new(move |state| {
            let function = Rc::clone(&function);
            F::flat_map::<StateTuple<S, A>, StateTuple<S, B>, _>(
                ma.run_state_t(state),
                move |StateTuple { state, value }| function(value).run_state_t(state),
            )
        })
    }
}

// Recovery restarts the handler's computation from the state the failed
// step received.
impl<F: MonadError, S: Value> MonadError for StateTWitness<F, S> {
    type Error = F::Error;

    fn raise_error<A>(error: F::Error) -> Kind<Self, A>
    where
        A: Value,
    {
        StateT::new(move |_| F::raise_error::<StateTuple<S, A>>(error.clone()))
    }

    fn handle_error_with<A, Func>(ma: Kind<Self, A>, handler: Func) -> Kind<Self, A>
    where
        A: Value,
        Func: Fn(F::Error) -> Kind<Self, A> + 'static,
    {
        let handler = Rc::new(handler);
        StateT::new(move |state: S| {
            let handler = Rc::clone(&handler);
            let restart = state.clone();
            F::handle_error_with::<StateTuple<S, A>, _>(ma.run_state_t(state), move |error| {
                handler(error).run_state_t(restart.clone())
            })
        })
    }
}
