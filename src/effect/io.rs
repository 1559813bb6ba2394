//! IO Monad - Deferred side effect handling.
//!
//! The `IO` type represents a computation that may perform side effects.
//! Side effects are not executed until `run_unsafe` is called, so building,
//! mapping and binding `IO` values never runs anything.
//!
//! # Examples
//!
//! ```rust
//! use kindred::effect::IO;
//!
//! let io = IO::pure(10)
//!     .map(|x| x * 2)
//!     .flat_map(|x| IO::pure(x + 1));
//! assert_eq!(io.run_unsafe(), 21);
//! ```
//!
//! # Side Effect Deferral
//!
//! ```rust
//! use kindred::effect::IO;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let executed = Rc::new(Cell::new(false));
//! let flag = Rc::clone(&executed);
//!
//! let io = IO::new(move || {
//!     flag.set(true);
//!     42
//! });
//! assert!(!executed.get());
//!
//! assert_eq!(io.run_unsafe(), 42);
//! assert!(executed.get());
//! ```

use crate::kind::{Kind, Value, Witness};
use crate::typeclass::{Applicative, Functor, Monad};

/// A monad representing deferred side effects.
///
/// # Monad Laws
///
/// 1. **Left Identity**: `IO::pure(a).flat_map(f) == f(a)`
/// 2. **Right Identity**: `m.flat_map(IO::pure) == m`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
///
/// Equality here means equal results from `run_unsafe`.
pub struct IO<A> {
    run_io: Box<dyn FnOnce() -> A>,
}

impl<A: 'static> IO<A> {
    /// Creates a new IO action from a closure.
    ///
    /// The closure will not be executed until `run_unsafe` is called.
    pub fn new<F>(action: F) -> Self
    where
        F: FnOnce() -> A + 'static,
    {
        Self {
            run_io: Box::new(action),
        }
    }

    /// Wraps a pure value in an IO action.
    pub fn pure(value: A) -> Self {
        Self::new(move || value)
    }

    /// Executes the IO action and returns the result.
    ///
    /// This is the only way to extract a value from an IO action and should
    /// be called at the program's edge.
    pub fn run_unsafe(self) -> A {
        tracing::trace!(output = std::any::type_name::<A>(), "running IO");
        (self.run_io)()
    }

    /// Transforms the result of an IO action using a function.
    pub fn map<B, F>(self, function: F) -> IO<B>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        IO::new(move || function((self.run_io)()))
    }

    /// Chains IO actions, passing the result of the first to a function
    /// that produces the second.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::IO;
    ///
    /// let io = IO::pure(10).flat_map(|x| IO::pure(x * 2));
    /// assert_eq!(io.run_unsafe(), 20);
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> IO<B>
    where
        F: FnOnce(A) -> IO<B> + 'static,
        B: 'static,
    {
        IO::new(move || (function((self.run_io)()).run_io)())
    }

    /// Sequences two IO actions, discarding the result of the first.
    pub fn then<B: 'static>(self, next: IO<B>) -> IO<B> {
        self.flat_map(move |_| next)
    }
}

impl<A> std::fmt::Debug for IO<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("IO(<deferred>)")
    }
}

/// Witness for [`IO`].
pub enum IOWitness {}

impl Witness for IOWitness {
    type Of<A: 'static> = IO<A>;
}

impl Functor for IOWitness {
    fn map<A, B, Func>(fa: Kind<Self, A>, function: Func) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> B + 'static,
    {
        fa.map(function)
    }
}

impl Applicative for IOWitness {
    fn pure<A>(value: A) -> Kind<Self, A>
    where
        A: Value,
    {
        IO::pure(value)
    }

    fn ap<A, B, Func>(ff: Kind<Self, Func>, fa: Kind<Self, A>) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> B + Clone + 'static,
    {
        IO::new(move || {
            let function = (ff.run_io)();
            let value = (fa.run_io)();
            function(value)
        })
    }
}

impl Monad for IOWitness {
    fn flat_map<A, B, Func>(ma: Kind<Self, A>, function: Func) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> Kind<Self, B> + 'static,
    {
        ma.flat_map(function)
    }
}
