//! Type class traits over witnesses.
//!
//! This module provides the type class hierarchy, implemented once per
//! witness:
//!
//! - [`Functor`]: Mapping over Kind values
//! - [`Applicative`]: Lifting values and combining independent effects
//! - [`Monad`]: Sequencing dependent computations
//! - [`MonadError`]: Raising and recovering from domain failures
//!
//! The witness type *is* the instance: methods are associated functions, so
//! generic code is written as `F::map(fa, f)` for `F: Functor`, and a monad
//! transformer receives its outer monad as the type parameter `F: Monad`.
//!
//! ## Algebraic Structures
//!
//! - [`Semigroup`]: Types with an associative binary operation (`combine`)
//! - [`Monoid`]: Semigroups with an identity element (`empty`)
//!
//! ## Generic Algorithms
//!
//! - [`sequence`], [`traverse`]: written once for every [`Applicative`]
//! - [`mdo!`](crate::mdo): do-notation for every [`Monad`]
//!
//! # Examples
//!
//! ```rust
//! use kindred::control::{ListWitness, OptionWitness};
//! use kindred::kind::Kind;
//! use kindred::typeclass::{Applicative, Monad};
//!
//! fn add_one<F: Monad>(kind: Kind<F, i32>) -> Kind<F, i32> {
//!     F::flat_map::<i32, i32, _>(kind, |n| F::pure(n + 1))
//! }
//!
//! assert_eq!(add_one::<OptionWitness>(Some(1)), Some(2));
//! assert_eq!(add_one::<ListWitness>(vec![1, 2]), vec![2, 3]);
//! ```

mod applicative;
mod functor;
mod identity;
mod mdo_macro;
mod monad;
mod monad_error;
mod monoid;
mod ops;
mod semigroup;

pub use applicative::Applicative;
pub use functor::Functor;
pub use identity::{Identity, IdentityWitness};
pub use monad::Monad;
pub use monad_error::MonadError;
pub use monoid::Monoid;
pub use ops::{sequence, traverse};
pub use semigroup::Semigroup;
