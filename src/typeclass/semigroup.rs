//! Semigroup type class - types with an associative binary operation.
//!
//! `Writer` combines its logs with `combine`, and `Validated` accumulates
//! errors with it, so the operation must be associative and must preserve
//! the order of its operands.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::Semigroup;
//!
//! let hello = String::from("Hello, ");
//! let world = String::from("World!");
//! assert_eq!(hello.combine(world), "Hello, World!");
//!
//! assert_eq!(vec![1, 2].combine(vec![3, 4]), vec![1, 2, 3, 4]);
//! ```

/// A type with an associative binary operation.
pub trait Semigroup {
    /// Combines two values, `self` first.
    #[must_use]
    fn combine(self, other: Self) -> Self;
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

impl Semigroup for () {
    #[inline]
    fn combine(self, (): Self) -> Self {}
}
