//! Concrete data types and their witnesses.
//!
//! Each type here is paired with an uninhabited witness that implements the
//! type classes:
//!
//! - [`ListWitness`]: `Vec`, non-deterministic choice
//! - [`OptionWitness`] and [`MaybeWitness`]: optional values
//! - [`EitherWitness`] and [`ResultWitness`]: failures with a fixed error type
//! - [`TryWitness`]: failures that include captured panics
//! - [`LazyWitness`]: deferred, memoized values
//! - [`ValidatedWitness`]: error accumulation (applicative only)
//!
//! # Examples
//!
//! ```rust
//! use kindred::control::{Maybe, MaybeWitness, Try, TryWitness};
//! use kindred::typeclass::{Applicative, Functor};
//!
//! assert_eq!(MaybeWitness::pure(1), Maybe::Just(1));
//!
//! let failed = TryWitness::map(Try::success(0), |n: i32| 10 / n);
//! assert!(failed.is_failure());
//! ```

mod either;
mod lazy;
mod list;
mod maybe;
mod optional;
mod result;
mod try_monad;
mod validated;

pub use either::{Either, EitherWitness};
pub use lazy::{Lazy, LazyWitness};
pub use list::ListWitness;
pub use maybe::{Maybe, MaybeWitness};
pub use optional::OptionWitness;
pub use result::ResultWitness;
pub use try_monad::{Try, TryError, TryWitness};
pub use validated::{Validated, ValidatedWitness};

static_assertions::assert_eq_size!(ListWitness, ());
static_assertions::assert_eq_size!(EitherWitness<String>, ());
static_assertions::assert_not_impl_any!(OptionWitness: Clone, Default);
static_assertions::assert_not_impl_any!(Lazy<i32>: Send, Sync);
