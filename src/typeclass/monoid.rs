//! Monoid type class - semigroups with an identity element.
//!
//! `Writer::pure` starts from `Monoid::empty`, so the empty log must be a
//! neutral element for `combine`.
//!
//! # Laws
//!
//! ```text
//! Monoid::empty().combine(a) == a
//! a.combine(Monoid::empty()) == a
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::{Monoid, Semigroup};
//!
//! let value = String::from("hello");
//! assert_eq!(String::empty().combine(value.clone()), value);
//! assert_eq!(Vec::combine_all(vec![vec![1], vec![2, 3]]), vec![1, 2, 3]);
//! ```

use super::semigroup::Semigroup;

/// A semigroup with an identity element.
pub trait Monoid: Semigroup + Sized {
    /// The identity element.
    fn empty() -> Self;

    /// Combines every element of `items` from left to right.
    fn combine_all<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        items.into_iter().fold(Self::empty(), Self::combine)
    }
}

impl Monoid for String {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }
}

impl Monoid for () {
    #[inline]
    fn empty() -> Self {}
}
