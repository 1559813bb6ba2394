//! Task - an asynchronous computation that may fail.
//!
//! `Task<A, E>` wraps a boxed local future resolving to `Result<A, E>`. It
//! is lazy like every future: nothing runs until the task is awaited (it
//! implements [`IntoFuture`]) or blocked on with [`Task::join`].
//!
//! As a Kind, `Err` is the failure state of [`TaskWitness<E>`]. `ap` polls
//! both futures concurrently with `try_join` and fails as soon as either
//! fails.
//!
//! # Examples
//!
//! ```rust
//! use kindred::effect::{Task, TaskWitness};
//! use kindred::typeclass::Monad;
//!
//! let fetched = TaskWitness::<String>::flat_map(Task::ready(20), |n| {
//!     Task::from_future(async move { Ok(n + 1) })
//! });
//! assert_eq!(fetched.join(), Ok(21));
//! ```

use std::convert::Infallible;
use std::future::{Future, IntoFuture};
use std::marker::PhantomData;

use futures::future::{self, LocalBoxFuture};
use futures::{FutureExt, TryFutureExt};
use tokio::task::{JoinError, JoinHandle};

use crate::kind::{Kind, Value, Witness};
use crate::typeclass::{Applicative, Functor, Monad, MonadError};

/// A deferred asynchronous computation producing `Result<A, E>`.
pub struct Task<A, E> {
    future: LocalBoxFuture<'static, Result<A, E>>,
}

impl<A: 'static, E: 'static> Task<A, E> {
    /// A task that succeeds with `value`.
    pub fn ready(value: A) -> Self {
        Self::from_future(future::ready(Ok(value)))
    }

    /// A task that fails with `error`.
    pub fn failed(error: E) -> Self {
        Self::from_future(future::ready(Err(error)))
    }

    /// Wraps any future resolving to a `Result`.
    pub fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Result<A, E>> + 'static,
    {
        Self {
            future: future.boxed_local(),
        }
    }

    /// Adopts a spawned tokio task.
    ///
    /// A panicked or cancelled task surfaces as `E::from(JoinError)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::Task;
    /// use tokio::task::JoinError;
    ///
    /// #[derive(Debug, PartialEq)]
    /// enum FetchError {
    ///     Join(String),
    /// }
    ///
    /// impl From<JoinError> for FetchError {
    ///     fn from(error: JoinError) -> Self {
    ///         Self::Join(error.to_string())
    ///     }
    /// }
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let handle = tokio::spawn(async { Ok::<_, FetchError>(7) });
    /// assert_eq!(Task::from_join_handle(handle).await, Ok(7));
    /// # }
    /// ```
    pub fn from_join_handle(handle: JoinHandle<Result<A, E>>) -> Self
    where
        E: From<JoinError>,
    {
        Self::from_future(handle.map(|joined| joined.map_err(E::from).and_then(|result| result)))
    }

    /// Blocks the current thread until the task completes.
    ///
    /// Must not be called from inside an async runtime.
    ///
    /// # Errors
    ///
    /// Returns the task's failure.
    pub fn join(self) -> Result<A, E> {
        tracing::trace!(output = std::any::type_name::<A>(), "joining task");
        futures::executor::block_on(self.future)
    }
}

impl<A, E> IntoFuture for Task<A, E> {
    type Output = Result<A, E>;
    type IntoFuture = LocalBoxFuture<'static, Result<A, E>>;

    fn into_future(self) -> Self::IntoFuture {
        self.future
    }
}

impl<A, E> std::fmt::Debug for Task<A, E> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("Task(<future>)")
    }
}

/// Witness for `Task<_, E>`.
pub struct TaskWitness<E>(Infallible, PhantomData<E>);

impl<E: 'static> Witness for TaskWitness<E> {
    type Of<A: 'static> = Task<A, E>;
}

impl<E: Value> Functor for TaskWitness<E> {
    fn map<A, B, Func>(fa: Kind<Self, A>, function: Func) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> B + 'static,
    {
        Task::from_future(fa.future.map_ok(function))
    }
}

impl<E: Value> Applicative for TaskWitness<E> {
    fn pure<A>(value: A) -> Kind<Self, A>
    where
        A: Value,
    {
        Task::ready(value)
    }

    fn ap<A, B, Func>(ff: Kind<Self, Func>, fa: Kind<Self, A>) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> B + Clone + 'static,
    {
        Task::from_future(
            future::try_join(ff.future, fa.future).map_ok(|(function, value)| function(value)),
        )
    }
}

impl<E: Value> Monad for TaskWitness<E> {
    fn flat_map<A, B, Func>(ma: Kind<Self, A>, function: Func) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> Kind<Self, B> + 'static,
    {
        Task::from_future(ma.future.and_then(move |value| function(value).future))
    }
}

impl<E: Value> MonadError for TaskWitness<E> {
    type Error = E;

    fn raise_error<A>(error: E) -> Kind<Self, A>
    where
        A: Value,
    {
        Task::failed(error)
    }

    fn handle_error_with<A, Func>(ma: Kind<Self, A>, handler: Func) -> Kind<Self, A>
    where
        A: Value,
        Func: Fn(E) -> Kind<Self, A> + 'static,
    {
        Task::from_future(ma.future.or_else(move |error| handler(error).future))
    }
}
