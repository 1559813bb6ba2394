//! Applicative type class - lifting values and applying wrapped functions.
//!
//! `Applicative` extends [`Functor`] with the ability to:
//!
//! - Lift a pure value into a Kind (`pure`, the `of` operation)
//! - Apply a function inside a Kind to a value inside a Kind (`ap`)
//!
//! `ap` combines two *independent* effects; each witness decides how (a
//! Cartesian product for lists, first failure for `Either`, both futures
//! joined for `Task`, and so on).
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! F::ap(F::pure(|x| x), v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! F::ap(F::pure(f), F::pure(x)) == F::pure(f(x))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::control::OptionWitness;
//! use kindred::typeclass::Applicative;
//!
//! let x: Option<i32> = OptionWitness::pure(42);
//! assert_eq!(x, Some(42));
//!
//! let sum = OptionWitness::map2(Some(1), Some(2), |a, b| a + b);
//! assert_eq!(sum, Some(3));
//! ```

use super::functor::Functor;
use crate::kind::{Kind, Value};

/// A type class for functors that can lift values and combine effects.
pub trait Applicative: Functor {
    /// Lifts a pure value into the Kind with no additional effect.
    fn pure<A>(value: A) -> Kind<Self, A>
    where
        A: Value;

    /// Applies the function held by `ff` to the value held by `fa`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::control::ListWitness;
    /// use kindred::typeclass::Applicative;
    ///
    /// let functions: Vec<fn(i32) -> i32> = vec![|n| n + 1, |n| n * 10];
    /// let applied = ListWitness::ap(functions, vec![1, 2]);
    /// assert_eq!(applied, vec![2, 3, 10, 20]);
    /// ```
    fn ap<A, B, Func>(ff: Kind<Self, Func>, fa: Kind<Self, A>) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> B + Clone + 'static;

    /// Combines two Kinds with a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::control::OptionWitness;
    /// use kindred::typeclass::Applicative;
    ///
    /// assert_eq!(OptionWitness::map2(Some(2), Some(3), |a, b| a * b), Some(6));
    /// assert_eq!(OptionWitness::map2(Some(2), None, |a: i32, b: i32| a * b), None);
    /// ```
    fn map2<A, B, C, Func>(fa: Kind<Self, A>, fb: Kind<Self, B>, function: Func) -> Kind<Self, C>
    where
        A: Value,
        B: Value,
        C: Value,
        Func: Fn(A, B) -> C + Clone + 'static,
    {
        let curried = Self::map::<A, _, _>(fa, move |a: A| {
            let function = function.clone();
            move |b: B| function(a.clone(), b)
        });
        Self::ap::<B, C, _>(curried, fb)
    }

    /// Pairs the payloads of two Kinds.
    #[inline]
    fn product<A, B>(fa: Kind<Self, A>, fb: Kind<Self, B>) -> Kind<Self, (A, B)>
    where
        A: Value,
        B: Value,
    {
        Self::map2(fa, fb, |a, b| (a, b))
    }
}
