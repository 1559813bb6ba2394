//! `EitherT` - Either Monad Transformer.
//!
//! `EitherT<F, L, A>` wraps `Kind<F, Either<L, A>>`: a computation in the
//! outer monad `F` whose result may be a failure of type `L`. Binding
//! short-circuits on `Left` without running the continuation, while still
//! sequencing `F`'s own effects.
//!
//! # Examples
//!
//! ```rust
//! use kindred::control::{Either, OptionWitness};
//! use kindred::transformer::{EitherT, EitherTWitness};
//! use kindred::typeclass::Monad;
//!
//! type Checked = EitherTWitness<OptionWitness, String>;
//!
//! let positive = |n: i32| -> EitherT<OptionWitness, String, i32> {
//!     if n > 0 { EitherT::right(n) } else { EitherT::left(format!("{n} <= 0")) }
//! };
//!
//! let result = Checked::flat_map(EitherT::right(5), positive);
//! assert_eq!(result.value(), Some(Either::Right(5)));
//!
//! let result = Checked::flat_map(EitherT::right(-5), positive);
//! assert_eq!(result.value(), Some(Either::Left("-5 <= 0".to_string())));
//! ```

use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;

use crate::control::{Either, EitherWitness};
use crate::kind::{Kind, Value, Witness};
use crate::typeclass::{Applicative, Functor, Monad, MonadError};

/// A monad transformer that adds a typed failure to the outer monad `F`.
pub struct EitherT<F, L, A>
where
    F: Witness,
    L: 'static,
    A: 'static,
{
    value: Kind<F, Either<L, A>>,
}

impl<F, L, A> EitherT<F, L, A>
where
    F: Witness,
    L: 'static,
    A: 'static,
{
    /// Wraps an outer Kind that already holds an `Either`.
    pub const fn from_kind(value: Kind<F, Either<L, A>>) -> Self {
        Self { value }
    }

    /// Unwraps the outer Kind.
    pub fn value(self) -> Kind<F, Either<L, A>> {
        self.value
    }
}

impl<F, L, A> EitherT<F, L, A>
where
    F: Applicative,
    L: Value,
    A: Value,
{
    /// Lifts a plain `Either` with [`Applicative::pure`].
    pub fn from_either(either: Either<L, A>) -> Self {
        Self::from_kind(F::pure(either))
    }

    /// A successful computation.
    pub fn right(value: A) -> Self {
        Self::from_either(Either::Right(value))
    }

    /// A failed computation.
    pub fn left(error: L) -> Self {
        Self::from_either(Either::Left(error))
    }

    /// Runs an outer computation and treats its result as a success.
    pub fn lift_f(fa: Kind<F, A>) -> Self {
        Self::from_kind(F::map::<A, Either<L, A>, _>(fa, Either::Right))
    }
}

impl<F, L, A> Clone for EitherT<F, L, A>
where
    F: Witness,
    L: 'static,
    A: 'static,
    Kind<F, Either<L, A>>: Clone,
{
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
        }
    }
}

impl<F, L, A> fmt::Debug for EitherT<F, L, A>
where
    F: Witness,
    L: 'static,
    A: 'static,
    Kind<F, Either<L, A>>: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("EitherT").field(&self.value).finish()
    }
}

impl<F, L, A> PartialEq for EitherT<F, L, A>
where
    F: Witness,
    L: 'static,
    A: 'static,
    Kind<F, Either<L, A>>: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

/// Witness for `EitherT<F, L, _>`.
pub struct EitherTWitness<F, L>(Infallible, PhantomData<(F, L)>);

impl<F: Witness, L: 'static> Witness for EitherTWitness<F, L> {
    type Of<A: 'static> = EitherT<F, L, A>;
}

impl<F: Functor, L: Value> Functor for EitherTWitness<F, L> {
    fn map<A, B, Func>(fa: Kind<Self, A>, function: Func) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> B + 'static,
    {
        EitherT::from_kind(F::map::<Either<L, A>, Either<L, B>, _>(
            fa.value,
            move |inner| inner.map_right(&function),
        ))
    }
}

impl<F: Applicative, L: Value> Applicative for EitherTWitness<F, L> {
    fn pure<A>(value: A) -> Kind<Self, A>
    where
        A: Value,
    {
        EitherT::right(value)
    }

    fn ap<A, B, Func>(ff: Kind<Self, Func>, fa: Kind<Self, A>) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> B + Clone + 'static,
    {
        EitherT::from_kind(F::map2::<Either<L, Func>, Either<L, A>, Either<L, B>, _>(
            ff.value,
            fa.value,
            EitherWitness::<L>::ap::<A, B, Func>,
        ))
    }
}

impl<F: Monad, L: Value> Monad for EitherTWitness<F, L> {
    fn flat_map<A, B, Func>(ma: Kind<Self, A>, function: Func) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> Kind<Self, B> + 'static,
    {
        EitherT::from_kind(F::flat_map::<Either<L, A>, Either<L, B>, _>(
            ma.value,
            move |inner| match inner {
                Either::Right(value) => function(value).value,
                Either::Left(error) => F::pure::<Either<L, B>>(Either::Left(error)),
            },
        ))
    }
}

impl<F: Monad, L: Value> MonadError for EitherTWitness<F, L> {
    type Error = L;

    fn raise_error<A>(error: L) -> Kind<Self, A>
    where
        A: Value,
    {
        EitherT::left(error)
    }

    fn handle_error_with<A, Func>(ma: Kind<Self, A>, handler: Func) -> Kind<Self, A>
    where
        A: Value,
        Func: Fn(L) -> Kind<Self, A> + 'static,
    {
        EitherT::from_kind(F::flat_map::<Either<L, A>, Either<L, A>, _>(
            ma.value,
            move |inner| match inner {
                Either::Left(error) => handler(error).value,
                right @ Either::Right(_) => F::pure(right),
            },
        ))
    }
}
