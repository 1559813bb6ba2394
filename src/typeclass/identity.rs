//! Identity wrapper type - the identity monad.
//!
//! `Identity` adds no behaviour to the value it wraps. It serves as:
//!
//! - The base case for monad transformer stacks (`StateT<IdentityWitness, S, A>`
//!   behaves like `State<S, A>`)
//! - A simple model for testing type class laws

use super::{Applicative, Functor, Monad};
use crate::kind::{Kind, Value, Witness};

/// The identity functor - wraps a value without adding any behavior.
///
/// # Examples
///
/// ```rust
/// use kindred::typeclass::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
///
/// let wrapped = Identity(42);
/// assert_eq!(wrapped.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

/// Witness for [`Identity`].
pub enum IdentityWitness {}

impl Witness for IdentityWitness {
    type Of<A: 'static> = Identity<A>;
}

impl Functor for IdentityWitness {
    fn map<A, B, Func>(fa: Kind<Self, A>, function: Func) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> B + 'static,
    {
        Identity(function(fa.0))
    }
}

impl Applicative for IdentityWitness {
    fn pure<A>(value: A) -> Kind<Self, A>
    where
        A: Value,
    {
        Identity(value)
    }

    fn ap<A, B, Func>(ff: Kind<Self, Func>, fa: Kind<Self, A>) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> B + Clone + 'static,
    {
        Identity((ff.0)(fa.0))
    }
}

impl Monad for IdentityWitness {
    fn flat_map<A, B, Func>(ma: Kind<Self, A>, function: Func) -> Kind<Self, B>
    where
        A: Value,
        B: Value,
        Func: Fn(A) -> Kind<Self, B> + 'static,
    {
        function(ma.0)
    }
}

static_assertions::assert_eq_size!(IdentityWitness, ());
static_assertions::assert_not_impl_any!(IdentityWitness: Clone, Default);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn flat_map_applies_directly() {
        let result = IdentityWitness::flat_map(Identity(4), |n| Identity(n * n));
        assert_eq!(result, Identity(16));
    }

    #[rstest]
    fn ap_applies_the_wrapped_function() {
        let result = IdentityWitness::ap(Identity(|s: &str| s.len()), Identity("four"));
        assert_eq!(result, Identity(4));
    }
}
