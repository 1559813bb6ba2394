//! `MonadError` type class - raising and recovering from domain failures.
//!
//! A `MonadError` treats the natural failure state of its Kind (absence,
//! `Left`, a captured panic, a failed future) as an error channel of type
//! [`MonadError::Error`]. Absence-only Kinds use `()`.
//!
//! Failures raised this way are ordinary values: they short-circuit
//! `flat_map` chains and are recovered only through the handlers below.
//!
//! # Laws
//!
//! ```text
//! F::flat_map(F::raise_error(e), f)            == F::raise_error(e)
//! F::handle_error_with(F::raise_error(e), h)   == h(e)
//! F::handle_error_with(F::pure(a), h)          == F::pure(a)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::control::{Either, EitherWitness};
//! use kindred::typeclass::MonadError;
//!
//! let failing = EitherWitness::<String>::raise_error::<i32>("boom".to_string());
//! let recovered = EitherWitness::<String>::handle_error(failing, |error| error.len() as i32);
//! assert_eq!(recovered, Either::Right(4));
//! ```

use super::monad::Monad;
use crate::kind::{Kind, Value};

/// A type class for monads with a recoverable error channel.
pub trait MonadError: Monad {
    /// The error carried by the failure state.
    type Error: Value;

    /// Constructs the failure state.
    fn raise_error<A>(error: Self::Error) -> Kind<Self, A>
    where
        A: Value;

    /// Recovers from a failure by running `handler` on the error.
    ///
    /// Successful values pass through and the handler is never invoked.
    fn handle_error_with<A, Func>(ma: Kind<Self, A>, handler: Func) -> Kind<Self, A>
    where
        A: Value,
        Func: Fn(Self::Error) -> Kind<Self, A> + 'static;

    /// Recovers from a failure with a pure value.
    #[inline]
    fn handle_error<A, Func>(ma: Kind<Self, A>, handler: Func) -> Kind<Self, A>
    where
        A: Value,
        Func: Fn(Self::Error) -> A + 'static,
    {
        Self::handle_error_with(ma, move |error| Self::pure(handler(error)))
    }

    /// Replaces a failure with `fallback`.
    #[inline]
    fn recover_with<A>(ma: Kind<Self, A>, fallback: Kind<Self, A>) -> Kind<Self, A>
    where
        A: Value,
        Kind<Self, A>: Clone,
    {
        Self::handle_error_with(ma, move |_| fallback.clone())
    }

    /// Lifts a `Result` into the Kind, mapping `Err` to the failure state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::control::OptionWitness;
    /// use kindred::typeclass::MonadError;
    ///
    /// assert_eq!(OptionWitness::from_result(Ok::<i32, ()>(1)), Some(1));
    /// assert_eq!(OptionWitness::from_result(Err::<i32, ()>(())), None);
    /// ```
    #[inline]
    fn from_result<A>(result: Result<A, Self::Error>) -> Kind<Self, A>
    where
        A: Value,
    {
        match result {
            Ok(value) => Self::pure(value),
            Err(error) => Self::raise_error(error),
        }
    }

    /// Fails with `error()` unless `predicate` holds for the payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::control::{Either, EitherWitness};
    /// use kindred::typeclass::MonadError;
    ///
    /// let positive = |value: Either<&'static str, i32>| {
    ///     EitherWitness::<&'static str>::ensure(value, |n| *n > 0, || "not positive")
    /// };
    /// assert_eq!(positive(Either::Right(3)), Either::Right(3));
    /// assert_eq!(positive(Either::Right(-3)), Either::Left("not positive"));
    /// ```
    fn ensure<A, Predicate, OnFail>(
        ma: Kind<Self, A>,
        predicate: Predicate,
        error: OnFail,
    ) -> Kind<Self, A>
    where
        A: Value,
        Predicate: Fn(&A) -> bool + 'static,
        OnFail: Fn() -> Self::Error + 'static,
    {
        Self::flat_map(ma, move |value| {
            if predicate(&value) {
                Self::pure(value)
            } else {
                Self::raise_error(error())
            }
        })
    }
}
