//! `OptionT` - Option Monad Transformer.
//!
//! `OptionT<F, A>` wraps `Kind<F, Option<A>>`. It behaves like
//! [`MaybeT`](super::MaybeT) over the standard `Option`.

use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;

use crate::control::OptionWitness;
use crate::kind::{Kind, Value, Witness};
use crate::typeclass::{Applicative, Functor, Monad, MonadError};

/// A monad transformer that adds `Option` absence to the outer monad `F`.
///
/// # Examples
///
/// ```rust
/// use kindred::control::ListWitness;
/// use kindred::transformer::{OptionT, OptionTWitness};
/// use kindred::typeclass::Monad;
///
/// let candidates: OptionT<ListWitness, i32> = OptionT::from_kind(vec![Some(4), None, Some(9)]);
/// let halved = OptionTWitness::<ListWitness>::flat_map(candidates, |n| {
///     OptionT::from_option(if n % 2 == 0 { Some(n / 2) } else { None })
/// });
/// assert_eq!(halved.value(), vec![Some(2), None, None]);
/// ```
pub struct OptionT<F, A>
where
    F: Witness,
    A: 'static,
{
    value: Kind<F, Option<A>>,
}

impl<F, A> OptionT<F, A>
where
    F: Witness,
    A: 'static,
{
    /// Wraps an outer Kind that already holds an `Option`.
    pub const fn from_kind(value: Kind<F, Option<A>>) -> Self {
        Self { value }
    }

    /// Unwraps the outer Kind.
    pub fn value(self) -> Kind<F, Option<A>> {
        self.value
    }
}

impl<F, A> OptionT<F, A>
where
    F: Applicative,
    A: Value,
{
    /// Lifts a plain `Option` with [`Applicative::pure`].
    pub fn from_option(option: Option<A>) -> Self {
        Self::from_kind(F::pure(option))
    }

    /// A present value.
    pub fn some(value: A) -> Self {
        Self::from_option(Some(value))
    }

    /// An absent value.
    pub fn none() -> Self {
        Self::from_option(None)
    }

    /// Runs an outer computation and treats its result as present.
    pub fn lift_f(fa: Kind<F, A>) -> Self {
        Self::from_kind(F::map::<A, Option<A>, _>(fa, Some))
    }
}

impl<F, A> Clone for OptionT<F, A>
where
    F: Witness,
    A: 'static,
    Kind<F, Option<A>>: Clone,
{
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
        }
    }
}

impl<F, A> fmt::Debug for OptionT<F, A>
where
    F: Witness,
    A: 'static,
    Kind<F, Option<A>>: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("OptionT").field(&self.value).finish()
    }
}

impl<F, A> PartialEq for OptionT<F, A>
where
    F: Witness,
    A: 'static,
    Kind<F, Option<A>>: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

/// Witness for `OptionT<F, _>`.
pub struct OptionTWitness<F>(Infallible, PhantomData<F>);

impl<F: Witness> Witness for OptionTWitness<F> {
    type Of<A: 'static> = OptionT<F, A>;
}

impl<F: Functor> Functor for OptionTWitness<F> {
    fn map<A, B, Func>(fa: Kind<Self, A>, function: Func) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> B + 'static,
    {
        OptionT::from_kind(F::map::<Option<A>, Option<B>, _>(fa.value, move |inner| {
            inner.map(&function)
        }))
    }
}

impl<F: Applicative> Applicative for OptionTWitness<F> {
    fn pure<A>(value: A) -> Kind<Self, A>
    where
        A: Value,
    {
        OptionT::some(value)
    }

    fn ap<A, B, Func>(ff: Kind<Self, Func>, fa: Kind<Self, A>) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> B + Clone + 'static,
    {
        OptionT::from_kind(F::map2::<Option<Func>, Option<A>, Option<B>, _>(
            ff.value,
            fa.value,
            OptionWitness::ap::<A, B, Func>,
        ))
    }
}

impl<F: Monad> Monad for OptionTWitness<F> {
    fn flat_map<A, B, Func>(ma: Kind<Self, A>, function: Func) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> Kind<Self, B> + 'static,
    {
        OptionT::from_kind(F::flat_map::<Option<A>, Option<B>, _>(ma.value, move |inner| {
            match inner {
                Some(value) => function(value).value,
                None => F::pure::<Option<B>>(None),
            }
        }))
    }
}

impl<F: Monad> MonadError for OptionTWitness<F> {
    type Error = ();

    fn raise_error<A>((): ()) -> Kind<Self, A>
    where
        A: Value,
    {
        OptionT::none()
    }

    fn handle_error_with<A, Func>(ma: Kind<Self, A>, handler: Func) -> Kind<Self, A>
    where
        A: Value,
        Func: Fn(()) -> Kind<Self, A> + 'static,
    {
        OptionT::from_kind(F::flat_map::<Option<A>, Option<A>, _>(ma.value, move |inner| {
            match inner {
                None => handler(()).value,
                some @ Some(_) => F::pure(some),
            }
        }))
    }
}
