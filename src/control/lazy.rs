//! Lazy evaluation with memoization.
//!
//! A [`Lazy`] defers its computation until [`Lazy::force`] is first called,
//! then caches the outcome. Clones share the cache, so a thunk runs at most
//! once no matter how many handles force it. A panic inside the thunk is
//! captured and cached as a [`TryError`], which is also the error channel of
//! [`LazyWitness`].
//!
//! # Examples
//!
//! ```rust
//! use kindred::control::{Lazy, LazyWitness};
//! use kindred::typeclass::Functor;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let calls = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&calls);
//! let lazy = Lazy::defer(move || {
//!     counter.set(counter.get() + 1);
//!     21
//! });
//!
//! let doubled = LazyWitness::map(lazy.clone(), |n| n * 2);
//! assert_eq!(calls.get(), 0);
//!
//! assert_eq!(doubled.force(), Ok(42));
//! assert_eq!(lazy.force(), Ok(21));
//! assert_eq!(calls.get(), 1);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::try_monad::{TryError, catch};
use crate::kind::{Kind, Value, Witness};
use crate::typeclass::{Applicative, Functor, Monad, MonadError};

type Thunk<A> = Box<dyn FnOnce() -> Result<A, TryError>>;

/// The internal state of a `Lazy` value.
enum LazyState<A> {
    /// Not forced yet. Holds the computation.
    Uninit(Thunk<A>),
    /// The computation is running.
    Evaluating,
    /// Forced successfully.
    Init(A),
    /// Forced and failed.
    Failed(TryError),
}

/// A lazily evaluated, memoized value.
///
/// Not thread-safe; the cache lives in an `Rc<RefCell<_>>`.
pub struct Lazy<A> {
    state: Rc<RefCell<LazyState<A>>>,
}

impl<A: 'static> Lazy<A> {
    /// Defers `thunk` until the value is forced.
    pub fn defer<F>(thunk: F) -> Self
    where
        F: FnOnce() -> A + 'static,
    {
        Self::from_thunk(move || catch(thunk))
    }

    /// An already evaluated value.
    pub fn now(value: A) -> Self {
        Self::with_state(LazyState::Init(value))
    }

    /// An already failed value.
    pub fn failed(error: TryError) -> Self {
        Self::with_state(LazyState::Failed(error))
    }

    fn from_thunk<F>(thunk: F) -> Self
    where
        F: FnOnce() -> Result<A, TryError> + 'static,
    {
        Self::with_state(LazyState::Uninit(Box::new(thunk)))
    }

    fn with_state(state: LazyState<A>) -> Self {
        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }

    /// Returns `true` once the value has been forced, successfully or not.
    pub fn is_evaluated(&self) -> bool {
        matches!(
            &*self.state.borrow(),
            LazyState::Init(_) | LazyState::Failed(_)
        )
    }
}

impl<A: Clone + 'static> Lazy<A> {
    /// Runs the computation on first call and returns the cached outcome.
    ///
    /// Forcing a value from inside its own thunk fails with
    /// [`TryError::Message`] instead of recursing.
    ///
    /// # Errors
    ///
    /// Returns the captured panic, or the failure this `Lazy` was built with.
    pub fn force(&self) -> Result<A, TryError> {
        let pending = {
            let mut state = self.state.borrow_mut();
            match &*state {
                LazyState::Init(value) => return Ok(value.clone()),
                LazyState::Failed(error) => return Err(error.clone()),
                LazyState::Evaluating => {
                    return Err(TryError::message("lazy value forced during its own evaluation"));
                }
                LazyState::Uninit(_) => {}
            }
            std::mem::replace(&mut *state, LazyState::Evaluating)
        };

        let LazyState::Uninit(thunk) = pending else {
            return Err(TryError::message("lazy value in an unexpected state"));
        };

        tracing::trace!("forcing lazy value");
        let outcome = thunk();
        *self.state.borrow_mut() = match &outcome {
            Ok(value) => LazyState::Init(value.clone()),
            Err(error) => LazyState::Failed(error.clone()),
        };
        outcome
    }
}

impl<A> Clone for Lazy<A> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<A: fmt::Debug> fmt::Debug for Lazy<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.state.borrow() {
            LazyState::Init(value) => formatter.debug_tuple("Lazy").field(value).finish(),
            LazyState::Failed(error) => formatter.debug_tuple("Lazy").field(error).finish(),
            LazyState::Uninit(_) | LazyState::Evaluating => formatter.write_str("Lazy(<pending>)"),
        }
    }
}

/// Witness for [`Lazy`].
pub enum LazyWitness {}

impl Witness for LazyWitness {
    type Of<A: 'static> = Lazy<A>;
}

impl Functor for LazyWitness {
    fn map<A, B, Func>(fa: Kind<Self, A>, function: Func) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> B + 'static,
    {
        Lazy::from_thunk(move || {
            let value = fa.force()?;
            catch(|| function(value))
        })
    }
}

impl Applicative for LazyWitness {
    fn pure<A>(value: A) -> Kind<Self, A>
    where
        A: Value,
    {
        Lazy::now(value)
    }

    fn ap<A, B, Func>(ff: Kind<Self, Func>, fa: Kind<Self, A>) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> B + Clone + 'static,
    {
        Lazy::from_thunk(move || {
            let function = ff.force()?;
            let value = fa.force()?;
            catch(|| function(value))
        })
    }
}

impl Monad for LazyWitness {
    fn flat_map<A, B, Func>(ma: Kind<Self, A>, function: Func) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> Kind<Self, B> + 'static,
    {
        Lazy::from_thunk(move || {
            let value = ma.force()?;
            catch(|| function(value))?.force()
        })
    }
}

impl MonadError for LazyWitness {
    type Error = TryError;

    fn raise_error<A>(error: TryError) -> Kind<Self, A>
    where
        A: Value,
    {
        Lazy::failed(error)
    }

    fn handle_error_with<A, Func>(ma: Kind<Self, A>, handler: Func) -> Kind<Self, A>
    where
        A: Value,
        Func: Fn(TryError) -> Kind<Self, A> + 'static,
    {
        Lazy::from_thunk(move || match ma.force() {
            Ok(value) => Ok(value),
            Err(error) => catch(|| handler(error))?.force(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn force_runs_the_thunk_once() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let lazy = Lazy::defer(move || {
            counter.set(counter.get() + 1);
            "value".to_string()
        });
        assert!(!lazy.is_evaluated());
        assert_eq!(lazy.force(), Ok("value".to_string()));
        assert_eq!(lazy.force(), Ok("value".to_string()));
        assert!(lazy.is_evaluated());
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn panics_are_cached_as_failures() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let lazy: Lazy<i32> = Lazy::defer(move || {
            counter.set(counter.get() + 1);
            panic!("thunk failed")
        });
        let expected = Err(TryError::Panicked("thunk failed".to_string()));
        assert_eq!(lazy.force(), expected);
        assert_eq!(lazy.force(), expected);
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn flat_map_forces_the_continuation() {
        let chained = LazyWitness::flat_map(Lazy::now(3), |n| Lazy::defer(move || n * 10));
        assert_eq!(chained.force(), Ok(30));
    }

    #[rstest]
    fn handle_error_with_recovers_a_failed_value() {
        let failed = LazyWitness::raise_error::<usize>(TryError::message("nope"));
        let recovered = LazyWitness::handle_error(failed, |error| error.to_string().len());
        assert_eq!(recovered.force(), Ok(4));
    }

    #[rstest]
    fn panicking_handler_is_cached_as_a_failure() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let failed = LazyWitness::raise_error::<i32>(TryError::message("nope"));
        let recovered = LazyWitness::handle_error_with(failed, move |_| -> Lazy<i32> {
            counter.set(counter.get() + 1);
            panic!("handler failed")
        });
        let expected = Err(TryError::Panicked("handler failed".to_string()));
        assert_eq!(recovered.force(), expected);
        assert_eq!(recovered.force(), expected);
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn recursive_force_is_reported() {
        let slot: Rc<RefCell<Option<Lazy<i32>>>> = Rc::new(RefCell::new(None));
        let inner = Rc::clone(&slot);
        let lazy = Lazy::from_thunk(move || match inner.borrow().as_ref() {
            Some(this) => this.force(),
            None => Ok(0),
        });
        *slot.borrow_mut() = Some(lazy.clone());
        assert!(matches!(lazy.force(), Err(TryError::Message(_))));
    }
}
