//! `ReaderT` - Reader Monad Transformer.
//!
//! `ReaderT<F, R, A>` encapsulates a function `R -> Kind<F, A>`: a
//! computation that reads an environment and then runs in the outer monad
//! `F`. Every step of a composed computation receives the same environment.
//!
//! # Examples
//!
//! ```rust
//! use kindred::control::OptionWitness;
//! use kindred::transformer::{ReaderT, ReaderTWitness};
//! use kindred::typeclass::Monad;
//!
//! #[derive(Clone)]
//! struct Config {
//!     port: u16,
//! }
//!
//! let privileged = ReaderTWitness::<OptionWitness, Config>::flat_map(
//!     ReaderT::asks(|config: Config| config.port),
//!     |port| ReaderT::new(move |_| if port < 1024 { Some(true) } else { None }),
//! );
//!
//! assert_eq!(privileged.run(Config { port: 80 }), Some(true));
//! assert_eq!(privileged.run(Config { port: 8080 }), None);
//! ```

use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::kind::{Kind, Value, Witness};
use crate::typeclass::{Applicative, Functor, Monad, MonadError};

/// A monad transformer that adds environment reading to the outer monad `F`.
pub struct ReaderT<F, R, A>
where
    F: Witness,
    A: 'static,
{
    run_function: Rc<dyn Fn(R) -> Kind<F, A>>,
}

impl<F, R, A> ReaderT<F, R, A>
where
    F: Witness,
    R: 'static,
    A: 'static,
{
    /// Creates a new `ReaderT` from a function.
    pub fn new<Func>(function: Func) -> Self
    where
        Func: Fn(R) -> Kind<F, A> + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the computation with the given environment.
    pub fn run(&self, environment: R) -> Kind<F, A> {
        (self.run_function)(environment)
    }

    /// Runs `computation` with an environment transformed by `modifier`.
    pub fn local<Modifier>(modifier: Modifier, computation: Self) -> Self
    where
        Modifier: Fn(R) -> R + 'static,
    {
        Self::new(move |environment| computation.run(modifier(environment)))
    }
}

impl<F, R, A> ReaderT<F, R, A>
where
    F: Applicative,
    R: 'static,
    A: Value,
{
    /// Lifts a pure function of the environment.
    pub fn reader<Func>(function: Func) -> Self
    where
        Func: Fn(R) -> A + 'static,
    {
        Self::new(move |environment| F::pure(function(environment)))
    }

    /// Projects a value out of the environment.
    pub fn asks<Func>(projection: Func) -> Self
    where
        Func: Fn(R) -> A + 'static,
    {
        Self::reader(projection)
    }

    /// Ignores the environment and reruns `fa`.
    pub fn lift_f(fa: Kind<F, A>) -> Self
    where
        Kind<F, A>: Clone,
    {
        Self::new(move |_| fa.clone())
    }
}

impl<F, R> ReaderT<F, R, R>
where
    F: Applicative,
    R: Value,
{
    /// Returns the environment itself.
    pub fn ask() -> Self {
        Self::reader(|environment| environment)
    }
}

impl<F, R, A> Clone for ReaderT<F, R, A>
where
    F: Witness,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<F, R, A> fmt::Debug for ReaderT<F, R, A>
where
    F: Witness,
    A: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("ReaderT(<function>)")
    }
}

/// Witness for `ReaderT<F, R, _>`.
pub struct ReaderTWitness<F, R>(Infallible, PhantomData<(F, R)>);

impl<F: Witness, R: 'static> Witness for ReaderTWitness<F, R> {
    type Of<A: 'static> = ReaderT<F, R, A>;
}

impl<F: Functor, R: Value> Functor for ReaderTWitness<F, R> {
    fn map<A, B, Func>(fa: Kind<Self, A>, function: Func) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> B + 'static,
    {
        let function = Rc::new(function);
        ReaderT::new(move |environment| {
            let function = Rc::clone(&function);
            F::map::<A, B, _>(fa.run(environment), move |value| function(value))
        })
    }
}

impl<F: Applicative, R: Value> Applicative for ReaderTWitness<F, R> {
    fn pure<A>(value: A) -> Kind<Self, A>
    where
        A: Value,
    {
        ReaderT::new(move |_| F::pure(value.clone()))
    }

    fn ap<A, B, Func>(ff: Kind<Self, Func>, fa: Kind<Self, A>) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> B + Clone + 'static,
    {
        ReaderT::new(move |environment: R| {
            F::ap::<A, B, Func>(ff.run(environment.clone()), fa.run(environment))
        })
    }
}

impl<F: Monad, R: Value> Monad for ReaderTWitness<F, R> {
    fn flat_map<A, B, Func>(ma: Kind<Self, A>, function: Func) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> Kind<Self, B> + 'static,
    {
        let function = Rc::new(function);
        ReaderT::new(move |environment: R| {
            let function = Rc::clone(&function);
            let shared = environment.clone();
            F::flat_map::<A, B, _>(ma.run(environment), move |value| {
                function(value).run(shared.clone())
            })
        })
    }
}

impl<F: MonadError, R: Value> MonadError for ReaderTWitness<F, R> {
    type Error = F::Error;

    fn raise_error<A>(error: F::Error) -> Kind<Self, A>
    where
        A: Value,
    {
        ReaderT::new(move |_| F::raise_error::<A>(error.clone()))
    }

    fn handle_error_with<A, Func>(ma: Kind<Self, A>, handler: Func) -> Kind<Self, A>
    where
        A: Value,
        Func: Fn(F::Error) -> Kind<Self, A> + 'static,
    {
        let handler = Rc::new(handler);
        ReaderT::new(move |environment: R| {
            let handler = Rc::clone(&handler);
            let shared = environment.clone();
            F::handle_error_with::<A, _>(ma.run(environment), move |error| {
                handler(error).run(shared.clone())
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{Either, EitherWitness};
    use rstest::rstest;

    type Outer = EitherWitness<String>;
    type Configured = ReaderTWitness<Outer, u32>;

    #[rstest]
    fn local_changes_only_the_inner_environment() {
        let doubled = ReaderT::<Outer, u32, u32>::local(|n| n * 2, ReaderT::ask());
        let both = Configured::map2(doubled, ReaderT::ask(), |inner, outer| (inner, outer));
        assert_eq!(both.run(5), Either::Right((10, 5)));
    }

    #[rstest]
    fn handler_runs_with_the_same_environment() {
        let failing = Configured::raise_error::<u32>("missing".to_string());
        let recovered = Configured::handle_error_with(failing, |error| {
            ReaderT::reader(move |limit: u32| limit + error.len() as u32)
        });
        assert_eq!(recovered.run(100), Either::Right(107));
    }

    #[rstest]
    fn lift_f_ignores_the_environment() {
        let lifted: ReaderT<Outer, u32, &str> = ReaderT::lift_f(Either::Right("fixed"));
        assert_eq!(lifted.run(1), Either::Right("fixed"));
        assert_eq!(lifted.run(2), Either::Right("fixed"));
    }
}
