//! Higher-Kinded Type emulation through witness types.
//!
//! Rust does not natively support Higher-Kinded Types: we cannot write a
//! trait that abstracts over `Option<_>` or `Vec<_>` as type constructors.
//! This module works around the limitation with *witnesses*: uninhabited
//! marker types that name a type constructor, and a Generic Associated Type
//! that applies the constructor to a payload.
//!
//! ```text
//! Kind<ListWitness, i32>          == Vec<i32>
//! Kind<EitherWitness<String>, u8> == Either<String, u8>
//! ```
//!
//! Because `Kind<F, A>` normalizes to the native type, widening a native
//! value into its Kind and narrowing it back are both the identity, and the
//! pairing is checked by the compiler. A value produced for one witness
//! cannot be narrowed as another:
//!
//! ```compile_fail
//! use kindred::control::{ListWitness, OptionWitness};
//! use kindred::kind::Kind;
//!
//! fn first<A>(kind: Kind<ListWitness, A>) -> Option<A> {
//!     kind.into_iter().next()
//! }
//!
//! let optional: Kind<OptionWitness, i32> = Some(1);
//! first(optional);
//! ```
//!
//! When the witness itself must be forgotten (for example to store Kinds of
//! different constructors side by side) use [`AnyKind`], whose `narrow`
//! performs the pairing check at runtime and reports a [`KindError`].
//!
//! # Examples
//!
//! ```rust
//! use kindred::control::OptionWitness;
//! use kindred::kind::Kind;
//! use kindred::typeclass::Functor;
//!
//! let kind: Kind<OptionWitness, i32> = Some(20);
//! let doubled = OptionWitness::map(kind, |n| n * 2);
//! assert_eq!(doubled, Some(40));
//! ```

mod any_kind;

pub use any_kind::{AnyKind, KindError};

/// A marker type identifying a type constructor.
///
/// Implementors are never instantiated. They exist so that generic code can
/// be written over `F: Witness` and apply `F` to any payload type through
/// [`Witness::Of`].
///
/// # Implementing this trait
///
/// Use an uninhabited type. Constructors with a fixed parameter carry it as a
/// type parameter of the witness:
///
/// ```rust
/// use kindred::kind::Witness;
/// use std::convert::Infallible;
/// use std::marker::PhantomData;
///
/// pub struct PairWitness<L>(Infallible, PhantomData<L>);
///
/// impl<L: 'static> Witness for PairWitness<L> {
///     type Of<A: 'static> = (L, A);
/// }
/// ```
pub trait Witness: 'static {
    /// The type constructor applied to `A`.
    type Of<A: 'static>: 'static;
}

/// The encoded application of witness `F` to payload `A`.
pub type Kind<F, A> = <F as Witness>::Of<A>;

/// Payload types that can be carried through a Kind.
///
/// Reader and state style effects re-run their functions, so a payload may be
/// handed out more than once.
pub trait Value: Clone + 'static {}

impl<T: Clone + 'static> Value for T {}
