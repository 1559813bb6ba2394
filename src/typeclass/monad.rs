//! Monad type class - sequencing dependent computations.
//!
//! `Monad` extends [`Applicative`] with `flat_map`, which feeds the payload of
//! one Kind into a function producing the next Kind. Where `ap` combines
//! independent effects, `flat_map` lets the second computation depend on the
//! result of the first.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! F::flat_map(F::pure(a), f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! F::flat_map(m, F::pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! F::flat_map(F::flat_map(m, f), g) == F::flat_map(m, |x| F::flat_map(f(x), g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::control::OptionWitness;
//! use kindred::typeclass::Monad;
//!
//! let halve = |n: i32| if n % 2 == 0 { Some(n / 2) } else { None };
//!
//! assert_eq!(OptionWitness::flat_map(Some(8), halve), Some(4));
//! assert_eq!(OptionWitness::flat_map(Some(3), halve), None);
//! ```

use super::applicative::Applicative;
use crate::kind::{Kind, Value};

/// A type class for applicatives that can sequence dependent computations.
pub trait Monad: Applicative {
    /// Sequences `function` after `ma`.
    ///
    /// Witnesses with a failure or absence state short-circuit: when `ma` is
    /// in that state `function` is not invoked.
    fn flat_map<A, B, Func>(ma: Kind<Self, A>, function: Func) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> Kind<Self, B> + 'static;

    /// Removes one layer of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::control::ListWitness;
    /// use kindred::typeclass::Monad;
    ///
    /// assert_eq!(ListWitness::flatten(vec![vec![1], vec![2, 3]]), vec![1, 2, 3]);
    /// ```
    #[inline]
    fn flatten<A>(mma: Kind<Self, Kind<Self, A>>) -> Kind<Self, A>
    where
        A: Value,
        Kind<Self, A>: Clone,
    {
        Self::flat_map(mma, |ma| ma)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{ListWitness, OptionWitness};
    use rstest::rstest;

    #[rstest]
    fn list_flat_map_flattens_every_result() {
        let expanded = ListWitness::flat_map(vec![1, 2, 3], |n| vec![n, n * 10]);
        assert_eq!(expanded, vec![1, 10, 2, 20, 3, 30]);
    }

    #[rstest]
    fn option_flatten() {
        assert_eq!(OptionWitness::flatten(Some(Some(1))), Some(1));
        assert_eq!(OptionWitness::flatten(Some(None::<i32>)), None);
    }
}
