//! Functor type class - mapping over Kind values.
//!
//! A `Functor` is a witness whose Kinds can have a function applied to
//! their payload while preserving the structure around it.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! ```text
//! F::map(fa, |x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! F::map(F::map(fa, f), g) == F::map(fa, |x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::control::OptionWitness;
//! use kindred::typeclass::Functor;
//!
//! let transformed = OptionWitness::map(Some(5), |n: i32| n.to_string());
//! assert_eq!(transformed, Some("5".to_string()));
//!
//! // None is preserved, the function is never called
//! let transformed = OptionWitness::map(None, |n: i32| n.to_string());
//! assert_eq!(transformed, None);
//! ```

use crate::kind::{Kind, Value, Witness};

/// A type class for witnesses whose Kinds can be mapped over.
///
/// The function is `Fn` rather than `FnOnce`: list-like Kinds apply it to
/// every element, and re-runnable Kinds (readers, state) apply it on every
/// run.
///
/// # Examples
///
/// ```rust
/// use kindred::control::ListWitness;
/// use kindred::typeclass::Functor;
///
/// let doubled = ListWitness::map(vec![1, 2, 3], |n| n * 2);
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub trait Functor: Witness {
    /// Applies `function` to the payload of `fa`.
    fn map<A, B, Func>(fa: Kind<Self, A>, function: Func) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> B + 'static;

    /// Replaces the payload with a constant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::control::OptionWitness;
    /// use kindred::typeclass::Functor;
    ///
    /// assert_eq!(OptionWitness::replace(Some(5), "replaced"), Some("replaced"));
    /// assert_eq!(OptionWitness::replace(None::<i32>, "replaced"), None);
    /// ```
    #[inline]
    fn replace<A, B>(fa: Kind<Self, A>, value: B) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
    {
        Self::map(fa, move |_| value.clone())
    }

    /// Discards the payload, keeping only the structure.
    #[inline]
    fn void<A>(fa: Kind<Self, A>) -> Kind<Self, ()>
    where
        A: Value,
    {
        Self::replace(fa, ())
    }
}
