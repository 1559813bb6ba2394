//! `MaybeT` - Maybe Monad Transformer.
//!
//! `MaybeT<F, A>` wraps `Kind<F, Maybe<A>>`, adding absence to the outer
//! monad `F`. `Nothing` short-circuits binding; its error channel is `()`.
//!
//! # Examples
//!
//! ```rust
//! use kindred::control::Maybe;
//! use kindred::effect::IOWitness;
//! use kindred::transformer::{MaybeT, MaybeTWitness};
//! use kindred::typeclass::Monad;
//!
//! let lookup = |key: &'static str| -> MaybeT<IOWitness, i32> {
//!     MaybeT::from_maybe(if key == "answer" { Maybe::Just(42) } else { Maybe::Nothing })
//! };
//!
//! let found = MaybeTWitness::<IOWitness>::flat_map(MaybeT::just("answer"), lookup);
//! assert_eq!(found.value().run_unsafe(), Maybe::Just(42));
//! ```

use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;

use crate::control::{Maybe, MaybeWitness};
use crate::kind::{Kind, Value, Witness};
use crate::typeclass::{Applicative, Functor, Monad, MonadError};

/// A monad transformer that adds absence to the outer monad `F`.
pub struct MaybeT<F, A>
where
    F: Witness,
    A: 'static,
{
    value: Kind<F, Maybe<A>>,
}

impl<F, A> MaybeT<F, A>
where
    F: Witness,
    A: 'static,
{
    /// Wraps an outer Kind that already holds a `Maybe`.
    pub const fn from_kind(value: Kind<F, Maybe<A>>) -> Self {
        Self { value }
    }

    /// Unwraps the outer Kind.
    pub fn value(self) -> Kind<F, Maybe<A>> {
        self.value
    }
}

impl<F, A> MaybeT<F, A>
where
    F: Applicative,
    A: Value,
{
    /// Lifts a plain `Maybe` with [`Applicative::pure`].
    pub fn from_maybe(maybe: Maybe<A>) -> Self {
        Self::from_kind(F::pure(maybe))
    }

    /// A present value.
    pub fn just(value: A) -> Self {
        Self::from_maybe(Maybe::Just(value))
    }

    /// An absent value.
    pub fn nothing() -> Self {
        Self::from_maybe(Maybe::Nothing)
    }

    /// Runs an outer computation and treats its result as present.
    pub fn lift_f(fa: Kind<F, A>) -> Self {
        Self::from_kind(F::map::<A, Maybe<A>, _>(fa, Maybe::Just))
    }
}

impl<F, A> Clone for MaybeT<F, A>
where
    F: Witness,
    A: 'static,
    Kind<F, Maybe<A>>: Clone,
{
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
        }
    }
}

impl<F, A> fmt::Debug for MaybeT<F, A>
where
    F: Witness,
    A: 'static,
    Kind<F, Maybe<A>>: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("MaybeT").field(&self.value).finish()
    }
}

impl<F, A> PartialEq for MaybeT<F, A>
where
    F: Witness,
    A: 'static,
    Kind<F, Maybe<A>>: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

/// Witness for `MaybeT<F, _>`.
pub struct MaybeTWitness<F>(Infallible, PhantomData<F>);

impl<F: Witness> Witness for MaybeTWitness<F> {
    type Of<A: 'static> = MaybeT<F, A>;
}

impl<F: Functor> Functor for MaybeTWitness<F> {
    fn map<A, B, Func>(fa: Kind<Self, A>, function: Func) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> B + 'static,
    {
        MaybeT::from_kind(F::map::<Maybe<A>, Maybe<B>, _>(fa.value, move |inner| {
            inner.map(&function)
        }))
    }
}

impl<F: Applicative> Applicative for MaybeTWitness<F> {
    fn pure<A>(value: A) -> Kind<Self, A>
    where
        A: Value,
    {
        MaybeT::just(value)
    }

    fn ap<A, B, Func>(ff: Kind<Self, Func>, fa: Kind<Self, A>) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> B + Clone + 'static,
    {
        MaybeT::from_kind(F::map2::<Maybe<Func>, Maybe<A>, Maybe<B>, _>(
            ff.value,
            fa.value,
            MaybeWitness::ap::<A, B, Func>,
        ))
    }
}

impl<F: Monad> Monad for MaybeTWitness<F> {
    fn flat_map<A, B, Func>(ma: Kind<Self, A>, function: Func) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> Kind<Self, B> + 'static,
    {
        MaybeT::from_kind(F::flat_map::<Maybe<A>, Maybe<B>, _>(ma.value, move |inner| {
            match inner {
                Maybe::Just(value) => function(value).value,
                Maybe::Nothing => F::pure::<Maybe<B>>(Maybe::Nothing),
            }
        }))
    }
}

impl<F: Monad> MonadError for MaybeTWitness<F> {
    type Error = ();

    fn raise_error<A>((): ()) -> Kind<Self, A>
    where
        A: Value,
    {
        MaybeT::nothing()
    }

    fn handle_error_with<A, Func>(ma: Kind<Self, A>, handler: Func) -> Kind<Self, A>
    where
        A: Value,
        Func: Fn(()) -> Kind<Self, A> + 'static,
    {
        MaybeT::from_kind(F::flat_map::<Maybe<A>, Maybe<A>, _>(ma.value, move |inner| {
            match inner {
                Maybe::Nothing => handler(()).value,
                just @ Maybe::Just(_) => F::pure(just),
            }
        }))
    }
}
