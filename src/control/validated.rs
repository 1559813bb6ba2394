//! Validated type - error accumulation.
//!
//! `Validated<E, A>` is shaped like `Either`, but its [`Applicative`]
//! instance keeps going after a failure and combines every error with
//! [`Semigroup::combine`]. It has no `Monad` instance. Sequencing that
//! depends on a previous value uses [`Validated::and_then`], which
//! short-circuits.
//!
//! # Examples
//!
//! ```rust
//! use kindred::control::{Validated, ValidatedWitness};
//! use kindred::typeclass::Applicative;
//!
//! let name: Validated<Vec<String>, String> = Validated::invalid(vec!["name is empty".to_string()]);
//! let age: Validated<Vec<String>, u32> = Validated::invalid(vec!["age is negative".to_string()]);
//!
//! let person = ValidatedWitness::<Vec<String>>::map2(name, age, |name, age| (name, age));
//! assert_eq!(
//!     person,
//!     Validated::Invalid(vec!["name is empty".to_string(), "age is negative".to_string()])
//! );
//! ```

use std::convert::Infallible;
use std::marker::PhantomData;

use crate::kind::{Kind, Value, Witness};
use crate::typeclass::{Applicative, Functor, Semigroup};

/// A value, or the accumulated errors that prevented it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Validated<E, A> {
    /// A value that passed validation.
    Valid(A),
    /// The errors collected so far.
    Invalid(E),
}

impl<E, A> Validated<E, A> {
    /// A valid value.
    #[inline]
    pub const fn valid(value: A) -> Self {
        Self::Valid(value)
    }

    /// A validation failure.
    #[inline]
    pub const fn invalid(error: E) -> Self {
        Self::Invalid(error)
    }

    /// Returns `true` for [`Validated::Valid`].
    #[inline]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Chains a dependent validation, stopping at the first error.
    pub fn and_then<B, F>(self, function: F) -> Validated<E, B>
    where
        F: FnOnce(A) -> Validated<E, B>,
    {
        match self {
            Self::Valid(value) => function(value),
            Self::Invalid(error) => Validated::Invalid(error),
        }
    }

    /// Converts into a `Result`.
    pub fn into_result(self) -> Result<A, E> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(error) => Err(error),
        }
    }
}

impl<E, A> From<Result<A, E>> for Validated<E, A> {
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Valid(value),
            Err(error) => Self::Invalid(error),
        }
    }
}

/// Witness for `Validated<E, _>`.
pub struct ValidatedWitness<E>(Infallible, PhantomData<E>);

impl<E: 'static> Witness for ValidatedWitness<E> {
    type Of<A: 'static> = Validated<E, A>;
}

impl<E: Semigroup + Value> Functor for ValidatedWitness<E> {
    fn map<A, B, Func>(fa: Kind<Self, A>, function: Func) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> B + 'static,
    {
        match fa {
            Validated::Valid(value) => Validated::Valid(function(value)),
            Validated::Invalid(error) => Validated::Invalid(error),
        }
    }
}

impl<E: Semigroup + Value> Applicative for ValidatedWitness<E> {
    fn pure<A>(value: A) -> Kind<Self, A>
    where
        A: Value,
    {
        Validated::Valid(value)
    }

    fn ap<A, B, Func>(ff: Kind<Self, Func>, fa: Kind<Self, A>) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> B + Clone + 'static,
    {
        match (ff, fa) {
            (Validated::Valid(function), Validated::Valid(value)) => {
                Validated::Valid(function(value))
            }
            (Validated::Invalid(left), Validated::Invalid(right)) => {
                Validated::Invalid(left.combine(right))
            }
            (Validated::Invalid(error), Validated::Valid(_))
            | (Validated::Valid(_), Validated::Invalid(error)) => Validated::Invalid(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::sequence;
    use rstest::rstest;

    type Checked = ValidatedWitness<String>;

    fn positive(n: i32) -> Validated<String, i32> {
        if n > 0 {
            Validated::valid(n)
        } else {
            Validated::invalid(format!("[{n}]"))
        }
    }

    #[rstest]
    fn sequence_collects_every_error() {
        let checked = sequence::<Checked, _>(vec![positive(1), positive(-2), positive(3), positive(0)]);
        assert_eq!(checked, Validated::Invalid("[-2][0]".to_string()));
    }

    #[rstest]
    fn sequence_of_valid_values() {
        let checked = sequence::<Checked, _>(vec![positive(1), positive(2)]);
        assert_eq!(checked.into_result(), Ok(vec![1, 2]));
    }

    #[rstest]
    fn and_then_short_circuits() {
        let chained = positive(-1).and_then(|n| positive(n + 1));
        assert_eq!(chained, Validated::Invalid("[-1]".to_string()));
    }
}
