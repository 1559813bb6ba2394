//! Reader Monad - computations that read from a shared environment.
//!
//! `Reader<R, A>` wraps a function `R -> A`. Every step of a composed
//! computation receives the same environment, which makes `Reader` a
//! lightweight form of dependency injection.
//!
//! # Examples
//!
//! ```rust
//! use kindred::effect::{Reader, ReaderWitness};
//! use kindred::typeclass::Monad;
//!
//! #[derive(Clone)]
//! struct Config {
//!     port: u16,
//!     host: String,
//! }
//!
//! let address = ReaderWitness::<Config>::flat_map(
//!     Reader::asks(|config: Config| config.host),
//!     |host| Reader::asks(move |config: Config| format!("{host}:{}", config.port)),
//! );
//!
//! let config = Config { port: 8080, host: "localhost".to_string() };
//! assert_eq!(address.run(config), "localhost:8080");
//! ```

use std::convert::Infallible;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::kind::{Kind, Value, Witness};
use crate::typeclass::{Applicative, Functor, Monad};

/// A computation that depends on an environment of type `R`.
pub struct Reader<R, A> {
    run_function: Rc<dyn Fn(R) -> A>,
}

impl<R, A> Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    /// Creates a new Reader from a function.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the computation with the given environment.
    ///
    /// A Reader can be run any number of times.
    pub fn run(&self, environment: R) -> A {
        (self.run_function)(environment)
    }

    /// A Reader that ignores the environment.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |_| value.clone())
    }

    /// Projects a value out of the environment.
    pub fn asks<F>(projection: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self::new(projection)
    }

    /// Runs `computation` with an environment transformed by `modifier`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::Reader;
    ///
    /// let doubled: Reader<i32, i32> = Reader::local(|n| n * 2, Reader::ask());
    /// assert_eq!(doubled.run(21), 42);
    /// ```
    pub fn local<F>(modifier: F, computation: Self) -> Self
    where
        F: Fn(R) -> R + 'static,
    {
        Self::new(move |environment| computation.run(modifier(environment)))
    }
}

impl<R: 'static> Reader<R, R> {
    /// A Reader that returns the environment itself.
    pub fn ask() -> Self {
        Self::new(|environment| environment)
    }
}

impl<R, A> Clone for Reader<R, A> {
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<R, A> std::fmt::Debug for Reader<R, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("Reader(<function>)")
    }
}

/// Witness for `Reader<R, _>`.
pub struct ReaderWitness<R>(Infallible, PhantomData<R>);

impl<R: 'static> Witness for ReaderWitness<R> {
    type Of<A: 'static> = Reader<R, A>;
}

impl<R: Value> Functor for ReaderWitness<R> {
    fn map<A, B, Func>(fa: Kind<Self, A>, function: Func) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> B + 'static,
    {
        Reader::new(move |environment| function(fa.run(environment)))
    }
}

impl<R: Value> Applicative for ReaderWitness<R> {
    fn pure<A>(value: A) -> Kind<Self, A>
    where
        A: Value,
    {
        Reader::pure(value)
    }

    fn ap<A, B, Func>(ff: Kind<Self, Func>, fa: Kind<Self, A>) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> B + Clone + 'static,
    {
        Reader::new(move |environment: R| {
            let function = ff.run(environment.clone());
            function(fa.run(environment))
        })
    }
}

impl<R: Value> Monad for ReaderWitness<R> {
    fn flat_map<A, B, Func>(ma: Kind<Self, A>, function: Func) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> Kind<Self, B> + 'static,
    {
        Reader::new(move |environment: R| function(ma.run(environment.clone())).run(environment))
    }
}
