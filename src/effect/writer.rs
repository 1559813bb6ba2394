//! Writer Monad - computations that accumulate a log.
//!
//! `Writer<W, A>` pairs a value with output of a [`Monoid`] type. Binding
//! combines the outputs left to right, so a computation can record
//! what it did without side effects.
//!
//! # Examples
//!
//! ```rust
//! use kindred::effect::{Writer, WriterWitness};
//! use kindred::typeclass::Monad;
//!
//! type Logged = WriterWitness<Vec<String>>;
//!
//! let computation = Logged::flat_map(Writer::tell(vec!["start".to_string()]), |()| {
//!     Writer::new(42, vec!["computed".to_string()])
//! });
//!
//! assert_eq!(computation.run(), (42, vec!["start".to_string(), "computed".to_string()]));
//! ```

use std::convert::Infallible;
use std::marker::PhantomData;

use crate::kind::{Kind, Value, Witness};
use crate::typeclass::{Applicative, Functor, Monad, Monoid};

/// A value paired with accumulated output.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Writer<W, A> {
    value: A,
    log: W,
}

impl<W, A> Writer<W, A> {
    /// Creates a Writer with the given value and output.
    pub const fn new(value: A, log: W) -> Self {
        Self { value, log }
    }

    /// Returns the value and the output.
    pub fn run(self) -> (A, W) {
        (self.value, self.log)
    }

    /// The value.
    pub const fn value(&self) -> &A {
        &self.value
    }

    /// The accumulated output.
    pub const fn log(&self) -> &W {
        &self.log
    }
}

impl<W: Monoid, A> Writer<W, A> {
    /// A value with empty output.
    pub fn pure(value: A) -> Self {
        Self::new(value, W::empty())
    }

    /// Exposes the output of `computation` alongside its value.
    pub fn listen(computation: Self) -> Writer<W, (A, W)>
    where
        W: Clone,
    {
        let Self { value, log } = computation;
        Writer::new((value, log.clone()), log)
    }

    /// Rewrites the output of `computation`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::Writer;
    ///
    /// let noisy = Writer::new(1, vec!["a", "b", "c"]);
    /// let quiet = Writer::censor(|log: Vec<&str>| log.into_iter().take(1).collect(), noisy);
    /// assert_eq!(quiet.run(), (1, vec!["a"]));
    /// ```
    pub fn censor<F>(modifier: F, computation: Self) -> Self
    where
        F: FnOnce(W) -> W,
    {
        let Self { value, log } = computation;
        Self::new(value, modifier(log))
    }
}

impl<W> Writer<W, ()> {
    /// Records `output` with no value.
    pub const fn tell(output: W) -> Self {
        Self::new((), output)
    }
}

/// Witness for `Writer<W, _>`.
pub struct WriterWitness<W>(Infallible, PhantomData<W>);

impl<W: 'static> Witness for WriterWitness<W> {
    type Of<A: 'static> = Writer<W, A>;
}

impl<W: Monoid + Value> Functor for WriterWitness<W> {
    fn map<A, B, Func>(fa: Kind<Self, A>, function: Func) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> B + 'static,
    {
        let Writer { value, log } = fa;
        Writer::new(function(value), log)
    }
}

impl<W: Monoid + Value> Applicative for WriterWitness<W> {
    fn pure<A>(value: A) -> Kind<Self, A>
    where
        A: Value,
    {
        Writer::pure(value)
    }

    fn ap<A, B, Func>(ff: Kind<Self, Func>, fa: Kind<Self, A>) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> B + Clone + 'static,
    {
        Writer::new((ff.value)(fa.value), ff.log.combine(fa.log))
    }
}

impl<W: Monoid + Value> Monad for WriterWitness<W> {
    fn flat_map<A, B, Func>(ma: Kind<Self, A>, function: Func) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> Kind<Self, B> + 'static,
    {
        let Writer { value, log } = ma;
        let next = function(value);
        Writer::new(next.value, log.combine(next.log))
    }
}
