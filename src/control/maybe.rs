//! Maybe type - an optional value with its own Kind.
//!
//! [`Maybe`] mirrors [`Option`] but is a distinct constructor, so it has its
//! own witness, [`MaybeWitness`], and its own transformer
//! ([`MaybeT`](crate::transformer::MaybeT)). Conversions to and from `Option`
//! are lossless.
//!
//! # Examples
//!
//! ```rust
//! use kindred::control::{Maybe, MaybeWitness};
//! use kindred::typeclass::Monad;
//!
//! let halve = |n: i32| if n % 2 == 0 { Maybe::Just(n / 2) } else { Maybe::Nothing };
//!
//! assert_eq!(MaybeWitness::flat_map(Maybe::Just(8), halve), Maybe::Just(4));
//! assert_eq!(MaybeWitness::flat_map(Maybe::Just(3), halve), Maybe::Nothing);
//! ```

use crate::kind::{Kind, Value, Witness};
use crate::typeclass::{Applicative, Functor, Monad, MonadError};

/// A value that may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<A> {
    /// A present value.
    Just(A),
    /// No value.
    #[default]
    Nothing,
}

impl<A> Maybe<A> {
    /// Wraps a present value.
    #[inline]
    pub const fn just(value: A) -> Self {
        Self::Just(value)
    }

    /// The absent value.
    #[inline]
    pub const fn nothing() -> Self {
        Self::Nothing
    }

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Transforms a present value.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Chains a computation that may itself be absent.
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Returns the present value or `default`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::control::Maybe;
    ///
    /// assert_eq!(Maybe::Just(1).get_or_else(0), 1);
    /// assert_eq!(Maybe::Nothing.get_or_else(0), 0);
    /// ```
    #[inline]
    pub fn get_or_else(self, default: A) -> A {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default,
        }
    }

    /// Returns `self` if present, otherwise the result of `alternative`.
    #[inline]
    pub fn or_else<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            just @ Self::Just(_) => just,
            Self::Nothing => alternative(),
        }
    }

    /// Converts into the standard `Option`.
    #[inline]
    pub fn to_option(self) -> Option<A> {
        self.into()
    }
}

impl<A> From<Option<A>> for Maybe<A> {
    #[inline]
    fn from(option: Option<A>) -> Self {
        option.map_or(Self::Nothing, Self::Just)
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    #[inline]
    fn from(maybe: Maybe<A>) -> Self {
        match maybe {
            Maybe::Just(value) => Some(value),
            Maybe::Nothing => None,
        }
    }
}

/// Witness for [`Maybe`].
pub enum MaybeWitness {}

impl Witness for MaybeWitness {
    type Of<A: 'static> = Maybe<A>;
}

impl Functor for MaybeWitness {
    fn map<A, B, Func>(fa: Kind<Self, A>, function: Func) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> B + 'static,
    {
        fa.map(function)
    }
}

impl Applicative for MaybeWitness {
    fn pure<A>(value: A) -> Kind<Self, A>
    where
        A: Value,
    {
        Maybe::Just(value)
    }

    fn ap<A, B, Func>(ff: Kind<Self, Func>, fa: Kind<Self, A>) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> B + Clone + 'static,
    {
        match (ff, fa) {
            (Maybe::Just(function), Maybe::Just(value)) => Maybe::Just(function(value)),
            _ => Maybe::Nothing,
        }
    }
}

impl Monad for MaybeWitness {
    fn flat_map<A, B, Func>(ma: Kind<Self, A>, function: Func) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> Kind<Self, B> + 'static,
    {
        ma.and_then(function)
    }
}

impl MonadError for MaybeWitness {
    type Error = ();

    fn raise_error<A>((): ()) -> Kind<Self, A>
    where
        A: Value,
    {
        Maybe::Nothing
    }

    fn handle_error_with<A, Func>(ma: Kind<Self, A>, handler: Func) -> Kind<Self, A>
    where
        A: Value,
        Func: Fn(()) -> Kind<Self, A> + 'static,
    {
        ma.or_else(|| handler(()))
    }
}
