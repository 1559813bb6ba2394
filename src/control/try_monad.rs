//! Try type - a computation that may have failed or panicked.
//!
//! [`Try`] turns panics into values. [`Try::of`] runs a thunk under
//! [`std::panic::catch_unwind`] and keeps the panic message as
//! [`TryError::Panicked`]. Functions passed to [`TryWitness::map`] and
//! [`TryWitness::flat_map`] are guarded the same way.
//!
//! # Examples
//!
//! ```rust
//! use kindred::control::{Try, TryError};
//!
//! let parsed = Try::of(|| "12".parse::<i32>().map(|n| n * 2));
//! assert_eq!(parsed.map(|r| r.unwrap_or(0)).get_or_else(0), 24);
//!
//! let exploded: Try<i32> = Try::of(|| panic!("index out of range"));
//! assert_eq!(exploded.into_result(), Err(TryError::Panicked("index out of range".to_string())));
//! ```

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

use crate::kind::{Kind, Value, Witness};
use crate::typeclass::{Applicative, Functor, Monad, MonadError};

/// The failure carried by [`Try::Failure`].
#[derive(Clone, thiserror::Error)]
pub enum TryError {
    /// A panic captured while running a thunk or function.
    #[error("panicked: {0}")]
    Panicked(String),
    /// An error value raised into the computation.
    #[error("{0}")]
    Raised(Rc<dyn Error>),
    /// A plain failure message.
    #[error("{0}")]
    Message(String),
}

impl TryError {
    /// Wraps an error value.
    pub fn raised<E: Error + 'static>(error: E) -> Self {
        Self::Raised(Rc::new(error))
    }

    /// A failure described by `message`.
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }
}

impl fmt::Debug for TryError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Panicked(message) => formatter.debug_tuple("Panicked").field(message).finish(),
            Self::Raised(error) => formatter.debug_tuple("Raised").field(&error.to_string()).finish(),
            Self::Message(message) => formatter.debug_tuple("Message").field(message).finish(),
        }
    }
}

// Raised errors compare by their rendered message.
impl PartialEq for TryError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Panicked(left), Self::Panicked(right))
            | (Self::Message(left), Self::Message(right)) => left == right,
            (Self::Raised(left), Self::Raised(right)) => left.to_string() == right.to_string(),
            _ => false,
        }
    }
}

/// Extracts the message of a panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// Runs `thunk`, converting a panic into [`TryError::Panicked`].
pub(crate) fn catch<A>(thunk: impl FnOnce() -> A) -> Result<A, TryError> {
    panic::catch_unwind(AssertUnwindSafe(thunk)).map_err(|payload| {
        let message = panic_message(payload.as_ref());
        tracing::debug!(panic = %message, "captured panic");
        TryError::Panicked(message)
    })
}

/// The outcome of a computation that may fail.
#[derive(Debug, Clone, PartialEq)]
pub enum Try<A> {
    /// The computation produced a value.
    Success(A),
    /// The computation failed.
    Failure(TryError),
}

impl<A> Try<A> {
    /// Runs `thunk`, capturing a panic as a failure.
    pub fn of<F>(thunk: F) -> Self
    where
        F: FnOnce() -> A,
    {
        catch(thunk).into()
    }

    /// A successful value.
    #[inline]
    pub const fn success(value: A) -> Self {
        Self::Success(value)
    }

    /// A failed value.
    #[inline]
    pub const fn failure(error: TryError) -> Self {
        Self::Failure(error)
    }

    /// Lifts a `Result`, raising its error as [`TryError::Raised`].
    pub fn from_result<E: Error + 'static>(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(TryError::raised(error)),
        }
    }

    /// Returns `true` for [`Try::Success`].
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for [`Try::Failure`].
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Transforms a success. A panic in `function` becomes a failure.
    pub fn map<B, F>(self, function: F) -> Try<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Success(value) => Try::of(|| function(value)),
            Self::Failure(error) => Try::Failure(error),
        }
    }

    /// Chains a fallible computation. A panic in `function` becomes a failure.
    pub fn and_then<B, F>(self, function: F) -> Try<B>
    where
        F: FnOnce(A) -> Try<B>,
    {
        match self {
            Self::Success(value) => match catch(|| function(value)) {
                Ok(next) => next,
                Err(error) => Try::Failure(error),
            },
            Self::Failure(error) => Try::Failure(error),
        }
    }

    /// Returns the value or `default` on failure.
    pub fn get_or_else(self, default: A) -> A {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Replaces a failure with the value computed from its error.
    pub fn recover<F>(self, function: F) -> Self
    where
        F: FnOnce(TryError) -> A,
    {
        match self {
            success @ Self::Success(_) => success,
            Self::Failure(error) => Self::Success(function(error)),
        }
    }

    /// Collapses both outcomes into a single value.
    pub fn fold<T, F, G>(self, on_failure: F, on_success: G) -> T
    where
        F: FnOnce(TryError) -> T,
        G: FnOnce(A) -> T,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Converts into a `Result`.
    pub fn into_result(self) -> Result<A, TryError> {
        self.into()
    }
}

impl<A> From<Result<A, TryError>> for Try<A> {
    fn from(result: Result<A, TryError>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<A> From<Try<A>> for Result<A, TryError> {
    fn from(attempt: Try<A>) -> Self {
        match attempt {
            Try::Success(value) => Ok(value),
            Try::Failure(error) => Err(error),
        }
    }
}

/// Witness for [`Try`].
pub enum TryWitness {}

impl Witness for TryWitness {
    type Of<A: 'static> = Try<A>;
}

impl Functor for TryWitness {
    fn map<A, B, Func>(fa: Kind<Self, A>, function: Func) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> B + 'static,
    {
        fa.map(function)
    }
}

impl Applicative for TryWitness {
    fn pure<A>(value: A) -> Kind<Self, A>
    where
        A: Value,
    {
        Try::Success(value)
    }

    fn ap<A, B, Func>(ff: Kind<Self, Func>, fa: Kind<Self, A>) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> B + Clone + 'static,
    {
        match ff {
            Try::Success(function) => fa.map(function),
            Try::Failure(error) => Try::Failure(error),
        }
    }
}

impl Monad for TryWitness {
    fn flat_map<A, B, Func>(ma: Kind<Self, A>, function: Func) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> Kind<Self, B> + 'static,
    {
        ma.and_then(function)
    }
}

impl MonadError for TryWitness {
    type Error = TryError;

    fn raise_error<A>(error: TryError) -> Kind<Self, A>
    where
        A: Value,
    {
        Try::Failure(error)
    }

    fn handle_error_with<A, Func>(ma: Kind<Self, A>, handler: Func) -> Kind<Self, A>
    where
        A: Value,
        Func: Fn(TryError) -> Kind<Self, A> + 'static,
    {
        match ma {
            success @ Try::Success(_) => success,
            Try::Failure(error) => handler(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn of_captures_string_panics() {
        let index = 7;
        let attempt: Try<i32> = Try::of(|| panic!("bad index {index}"));
        assert_eq!(attempt, Try::Failure(TryError::Panicked("bad index 7".to_string())));
    }

    #[rstest]
    fn map_captures_panics_in_the_function() {
        let attempt = TryWitness::map(Try::Success(0), |n: i32| {
            assert!(n != 0, "zero");
            n
        });
        assert!(attempt.is_failure());
    }

    #[rstest]
    fn flat_map_captures_panics_in_the_continuation() {
        let attempt = TryWitness::flat_map(Try::Success(1), |_: i32| -> Try<i32> {
            panic!("continuation")
        });
        assert_eq!(attempt, Try::Failure(TryError::Panicked("continuation".to_string())));
    }

    #[rstest]
    fn from_result_raises_the_error() {
        let attempt = Try::from_result("x".parse::<i32>());
        let error = attempt.into_result().unwrap_err();
        assert!(matches!(error, TryError::Raised(_)));
        assert_eq!(error.to_string(), "invalid digit found in string");
    }

    #[rstest]
    #[case(TryError::message("gone"), "gone")]
    #[case(TryError::Panicked("boom".to_string()), "panicked: boom")]
    fn error_messages(#[case] error: TryError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    fn recover_and_fold() {
        let failed: Try<usize> = Try::failure(TryError::message("four"));
        assert_eq!(failed.clone().recover(|e| e.to_string().len()), Try::Success(4));
        assert_eq!(failed.fold(|_| 0, |n| n + 1), 0);
    }
}
