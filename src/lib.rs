//! # kindred
//!
//! Higher-kinded types for Rust through witness types, with a typeclass
//! hierarchy and monad transformers built on top of them.
//!
//! ## Overview
//!
//! Rust generics cannot abstract over a type constructor such as `Vec<_>` or
//! `Option<_>`. This library names each constructor with an uninhabited
//! *witness* type and applies it to a payload through a generic associated
//! type, so generic code can be written once for every constructor:
//!
//! - **Kinds**: [`Witness`](kind::Witness), [`Kind`](kind::Kind) and the
//!   erased [`AnyKind`](kind::AnyKind) holder
//! - **Type Classes**: Functor, Applicative, Monad, `MonadError`, plus
//!   Semigroup and Monoid
//! - **Control Structures**: list, Option, Maybe, Either, Result, Try, Lazy,
//!   Validated
//! - **Effects**: IO, Reader, State, Writer and the async Task
//! - **Transformers**: `EitherT`, `MaybeT`, `OptionT`, `ReaderT`, `StateT`
//!
//! ## Feature Flags
//!
//! - `async` (default): `Task` and its witness
//! - `serde`: `Serialize`/`Deserialize` for the plain data types
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use kindred::prelude::*;
//!
//! fn double_all<F: Functor>(kind: Kind<F, i32>) -> Kind<F, i32> {
//!     F::map::<i32, i32, _>(kind, |n| n * 2)
//! }
//!
//! assert_eq!(double_all::<ListWitness>(vec![1, 2]), vec![2, 4]);
//! assert_eq!(double_all::<OptionWitness>(Some(5)), Some(10));
//! assert_eq!(double_all::<MaybeWitness>(Maybe::Nothing), Maybe::Nothing);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use kindred::prelude::*;
/// ```
pub mod prelude {
    pub use crate::control::*;
    pub use crate::effect::*;
    pub use crate::kind::*;
    pub use crate::mdo;
    pub use crate::transformer::*;
    pub use crate::typeclass::*;
}

pub mod kind;

pub mod typeclass;

pub mod control;

pub mod effect;

pub mod transformer;
