//! Generic algorithms written once against the type classes.
//!
//! Every function here works for any witness that implements the required
//! type class, from `Option` to `StateT<TaskWitness<E>, S, _>`.

use super::Applicative;
use crate::kind::{Kind, Value};

/// Turns a list of Kinds into a Kind of a list.
///
/// Effects are combined left to right with [`Applicative::map2`], so the
/// first failure wins for short-circuiting witnesses.
///
/// # Examples
///
/// ```rust
/// use kindred::control::OptionWitness;
/// use kindred::typeclass::sequence;
///
/// assert_eq!(sequence::<OptionWitness, _>(vec![Some(1), Some(2)]), Some(vec![1, 2]));
/// assert_eq!(sequence::<OptionWitness, _>(vec![Some(1), None]), None);
/// ```
pub fn sequence<F, A>(kinds: Vec<Kind<F, A>>) -> Kind<F, Vec<A>>
where
    F: Applicative,
    A: Value,
{
    kinds.into_iter().fold(F::pure(Vec::new()), |accumulated, kind| {
        F::map2(accumulated, kind, |mut values: Vec<A>, value: A| {
            values.push(value);
            values
        })
    })
}

/// Maps every item to a Kind and sequences the results.
///
/// # Examples
///
/// ```rust
/// use kindred::control::{Either, EitherWitness};
/// use kindred::typeclass::traverse;
///
/// let parse = |text: &str| -> Either<String, i32> {
///     text.parse::<i32>().map_err(|_| format!("bad number: {text}")).into()
/// };
///
/// assert_eq!(
///     traverse::<EitherWitness<String>, _, _, _>(vec!["1", "2"], parse),
///     Either::Right(vec![1, 2])
/// );
/// assert_eq!(
///     traverse::<EitherWitness<String>, _, _, _>(vec!["1", "x"], parse),
///     Either::Left("bad number: x".to_string())
/// );
/// ```
pub fn traverse<F, T, B, Func>(items: Vec<T>, function: Func) -> Kind<F, Vec<B>>
where
    F: Applicative,
    B: Value,
    Func: Fn(T) -> Kind<F, B>,
{
    sequence::<F, B>(items.into_iter().map(function).collect())
}
