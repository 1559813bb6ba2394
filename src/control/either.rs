//! Either type - a value that can be one of two types.
//!
//! `Either<L, R>` is either a `Left(L)` or a `Right(R)`. As a Kind, the left
//! type is pinned by the witness [`EitherWitness<L>`] and `Left` is the
//! failure state:
//!
//! - `flat_map` short-circuits on `Left`
//! - `ap` reports the first `Left`, checking the function side first
//! - `MonadError::Error` is `L`
//!
//! # Examples
//!
//! ```rust
//! use kindred::control::{Either, EitherWitness};
//! use kindred::typeclass::Monad;
//!
//! let checked = |n: i32| -> Either<String, i32> {
//!     if n > 0 { Either::Right(n) } else { Either::Left(format!("{n} is not positive")) }
//! };
//!
//! let result = EitherWitness::<String>::flat_map(Either::Right(3), checked);
//! assert_eq!(result, Either::Right(3));
//!
//! let result = EitherWitness::<String>::flat_map(Either::Right(-1), checked);
//! assert_eq!(result, Either::Left("-1 is not positive".to_string()));
//! ```

use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;

use crate::kind::{Kind, Value, Witness};
use crate::typeclass::{Applicative, Functor, Monad, MonadError};

/// A value that can be one of two types.
///
/// By convention `Left` represents failure and `Right` success.
///
/// # Examples
///
/// ```rust
/// use kindred::control::Either;
///
/// let success: Either<String, i32> = Either::Right(42);
/// assert_eq!(success.map_right(|x| x * 2), Either::Right(84));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant, conventionally representing failure.
    Left(L),
    /// The right variant, conventionally representing success.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Converts into an `Option<L>`, discarding a right value.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts into an `Option<R>`, discarding a left value.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Transforms the left value.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Transforms the right value.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Chains a computation on the right value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::control::Either;
    ///
    /// let right: Either<&str, i32> = Either::Right(2);
    /// assert_eq!(right.and_then(|n| Either::Right(n * 5)), Either::Right(10));
    /// ```
    #[inline]
    pub fn and_then<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Collapses both cases into a single value.
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Swaps the variants.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

/// Witness for `Either<L, _>` with the left type fixed.
pub struct EitherWitness<L>(Infallible, PhantomData<L>);

impl<L: 'static> Witness for EitherWitness<L> {
    type Of<A: 'static> = Either<L, A>;
}

impl<L: Value> Functor for EitherWitness<L> {
    fn map<A, B, Func>(fa: Kind<Self, A>, function: Func) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> B + 'static,
    {
        fa.map_right(function)
    }
}

impl<L: Value> Applicative for EitherWitness<L> {
    fn pure<A>(value: A) -> Kind<Self, A>
    where
        A: Value,
    {
        Either::Right(value)
    }

    fn ap<A, B, Func>(ff: Kind<Self, Func>, fa: Kind<Self, A>) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> B + Clone + 'static,
    {
        match (ff, fa) {
            (Either::Left(error), _) | (Either::Right(_), Either::Left(error)) => Either::Left(error),
            (Either::Right(function), Either::Right(value)) => Either::Right(function(value)),
        }
    }
}

impl<L: Value> Monad for EitherWitness<L> {
    fn flat_map<A, B, Func>(ma: Kind<Self, A>, function: Func) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> Kind<Self, B> + 'static,
    {
        ma.and_then(function)
    }
}

impl<L: Value> MonadError for EitherWitness<L> {
    type Error = L;

    fn raise_error<A>(error: L) -> Kind<Self, A>
    where
        A: Value,
    {
        Either::Left(error)
    }

    fn handle_error_with<A, Func>(ma: Kind<Self, A>, handler: Func) -> Kind<Self, A>
    where
        A: Value,
        Func: Fn(L) -> Kind<Self, A> + 'static,
    {
        match ma {
            Either::Left(error) => handler(error),
            right @ Either::Right(_) => right,
        }
    }
}
