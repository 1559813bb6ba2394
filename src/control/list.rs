//! List instances over [`Vec`].
//!
//! Lists model non-determinism: `flat_map` concatenates the results of every
//! branch and `ap` applies every function to every value, functions in the
//! outer loop.

use crate::kind::{Kind, Value, Witness};
use crate::typeclass::{Applicative, Functor, Monad};

/// Witness for [`Vec`].
pub enum ListWitness {}

impl Witness for ListWitness {
    type Of<A: 'static> = Vec<A>;
}

impl Functor for ListWitness {
    fn map<A, B, Func>(fa: Kind<Self, A>, function: Func) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> B + 'static,
    {
        fa.into_iter().map(function).collect()
    }
}

impl Applicative for ListWitness {
    fn pure<A>(value: A) -> Kind<Self, A>
    where
        A: Value,
    {
        vec![value]
    }

    fn ap<A, B, Func>(ff: Kind<Self, Func>, fa: Kind<Self, A>) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> B + Clone + 'static,
    {
        let mut results = Vec::with_capacity(ff.len() * fa.len());
        for function in &ff {
            results.extend(fa.iter().cloned().map(function));
        }
        results
    }
}

impl Monad for ListWitness {
    fn flat_map<A, B, Func>(ma: Kind<Self, A>, function: Func) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> Kind<Self, B> + 'static,
    {
        ma.into_iter().flat_map(function).collect()
    }
}
