//! Instances for the standard [`Result`] with the error type fixed.

use std::convert::Infallible;
use std::marker::PhantomData;

use crate::kind::{Kind, Value, Witness};
use crate::typeclass::{Applicative, Functor, Monad, MonadError};

/// Witness for `Result<_, E>`.
///
/// Behaves like [`EitherWitness<E>`](super::EitherWitness) with `Err` as the
/// failure state.
pub struct ResultWitness<E>(Infallible, PhantomData<E>);

impl<E: 'static> Witness for ResultWitness<E> {
    type Of<A: 'static> = Result<A, E>;
}

impl<E: Value> Functor for ResultWitness<E> {
    fn map<A, B, Func>(fa: Kind<Self, A>, function: Func) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> B + 'static,
    {
        fa.map(function)
    }
}

impl<E: Value> Applicative for ResultWitness<E> {
    fn pure<A>(value: A) -> Kind<Self, A>
    where
        A: Value,
    {
        Ok(value)
    }

    fn ap<A, B, Func>(ff: Kind<Self, Func>, fa: Kind<Self, A>) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> B + Clone + 'static,
    {
        let function = ff?;
        fa.map(function)
    }
}

impl<E: Value> Monad for ResultWitness<E> {
    fn flat_map<A, B, Func>(ma: Kind<Self, A>, function: Func) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> Kind<Self, B> + 'static,
    {
        ma.and_then(function)
    }
}

impl<E: Value> MonadError for ResultWitness<E> {
    type Error = E;

    fn raise_error<A>(error: E) -> Kind<Self, A>
    where
        A: Value,
    {
        Err(error)
    }

    fn handle_error_with<A, Func>(ma: Kind<Self, A>, handler: Func) -> Kind<Self, A>
    where
        A: Value,
        Func: Fn(E) -> Kind<Self, A> + 'static,
    {
        ma.or_else(handler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    type Parsed = ResultWitness<String>;

    #[rstest]
    fn ap_reports_the_function_error_first() {
        let function: Result<fn(i32) -> i32, String> = Err("function".to_string());
        let value: Result<i32, String> = Err("value".to_string());
        assert_eq!(Parsed::ap(function, value), Err("function".to_string()));
    }

    #[rstest]
    fn handle_error_with_sees_the_error() {
        let failed: Result<usize, String> = Err("four".to_string());
        assert_eq!(Parsed::handle_error_with(failed, |e| Ok(e.len())), Ok(4));
    }
}
