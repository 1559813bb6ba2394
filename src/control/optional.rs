//! Instances for the standard [`Option`].

use crate::kind::{Kind, Value, Witness};
use crate::typeclass::{Applicative, Functor, Monad, MonadError};

/// Witness for [`Option`].
///
/// # Examples
///
/// ```rust
/// use kindred::control::OptionWitness;
/// use kindred::typeclass::MonadError;
///
/// let value = OptionWitness::ensure(Some(4), |n| n % 2 == 0, || ());
/// assert_eq!(value, Some(4));
/// assert_eq!(OptionWitness::ensure(Some(5), |n| n % 2 == 0, || ()), None);
/// ```
pub enum OptionWitness {}

impl Witness for OptionWitness {
    type Of<A: 'static> = Option<A>;
}

impl Functor for OptionWitness {
    fn map<A, B, Func>(fa: Kind<Self, A>, function: Func) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> B + 'static,
    {
        fa.map(function)
    }
}

impl Applicative for OptionWitness {
    fn pure<A>(value: A) -> Kind<Self, A>
    where
        A: Value,
    {
        Some(value)
    }

    fn ap<A, B, Func>(ff: Kind<Self, Func>, fa: Kind<Self, A>) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> B + Clone + 'static,
    {
        ff.zip(fa).map(|(function, value)| function(value))
    }
}

impl Monad for OptionWitness {
    fn flat_map<A, B, Func>(ma: Kind<Self, A>, function: Func) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> Kind<Self, B> + 'static,
    {
        ma.and_then(function)
    }
}

impl MonadError for OptionWitness {
    type Error = ();

    fn raise_error<A>((): ()) -> Kind<Self, A>
    where
        A: Value,
    {
        None
    }

    fn handle_error_with<A, Func>(ma: Kind<Self, A>, handler: Func) -> Kind<Self, A>
    where
        A: Value,
        Func: Fn(()) -> Kind<Self, A> + 'static,
    {
        ma.or_else(|| handler(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(2), Some(3), Some(6))]
    #[case(None, Some(3), None)]
    #[case(Some(2), None, None)]
    fn ap_requires_both_sides(
        #[case] multiplier: Option<i32>,
        #[case] value: Option<i32>,
        #[case] expected: Option<i32>,
    ) {
        let function = multiplier.map(|m| move |n: i32| n * m);
        assert_eq!(OptionWitness::ap(function, value), expected);
    }

    #[rstest]
    fn recover_with_replaces_none() {
        assert_eq!(OptionWitness::recover_with(None, Some(9)), Some(9));
        assert_eq!(OptionWitness::recover_with(Some(1), Some(9)), Some(1));
    }
}
