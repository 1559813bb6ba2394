//! Type-erased Kind holder with checked narrowing.
//!
//! [`AnyKind`] forgets the witness of a Kind so that values built from
//! different type constructors can travel through the same slot. Narrowing
//! back compares the witness and payload types recorded at widening time;
//! a wrong pairing is a [`KindError`], never a reinterpreted value.

use std::any::{Any, TypeId, type_name};
use std::fmt;

use super::{Kind, Witness};

/// A structural fault raised while narrowing an erased Kind.
///
/// These errors indicate a defect in the calling code. They are distinct from
/// every `MonadError::Error` type, so no error handler can recover from them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KindError {
    /// There was no Kind to narrow.
    #[error("cannot narrow a missing Kind for {expected}")]
    Missing {
        /// The Kind the caller asked for.
        expected: &'static str,
    },
    /// The Kind was widened from a different witness or payload type.
    #[error("Kind instance is not a {expected}: {found}")]
    Mismatch {
        /// The Kind the caller asked for.
        expected: &'static str,
        /// The Kind that was actually stored.
        found: &'static str,
    },
}

/// A Kind whose witness has been erased.
///
/// # Examples
///
/// ```rust
/// use kindred::control::{ListWitness, OptionWitness};
/// use kindred::kind::{AnyKind, KindError};
///
/// let erased = AnyKind::widen::<ListWitness, i32>(vec![1, 2]);
/// assert!(erased.is::<ListWitness, i32>());
///
/// let wrong = AnyKind::widen::<ListWitness, i32>(vec![1, 2]);
/// assert!(matches!(
///     wrong.narrow::<OptionWitness, i32>(),
///     Err(KindError::Mismatch { .. })
/// ));
///
/// assert_eq!(erased.narrow::<ListWitness, i32>(), Ok(vec![1, 2]));
/// ```
pub struct AnyKind {
    witness: TypeId,
    payload: TypeId,
    name: &'static str,
    witness_name: &'static str,
    value_name: &'static str,
    repr: Box<dyn Any>,
}

impl AnyKind {
    /// Erases the witness of `kind`.
    pub fn widen<F, A>(kind: Kind<F, A>) -> Self
    where
        F: Witness,
        A: 'static,
    {
        Self {
            witness: TypeId::of::<F>(),
            payload: TypeId::of::<A>(),
            name: type_name::<Kind<F, A>>(),
            witness_name: type_name::<F>(),
            value_name: type_name::<A>(),
            repr: Box::new(kind),
        }
    }

    /// Recovers the Kind, checking that it was widened as `Kind<F, A>`.
    ///
    /// # Errors
    ///
    /// Returns [`KindError::Mismatch`] if the holder was widened with a
    /// different witness or payload type.
    pub fn narrow<F, A>(self) -> Result<Kind<F, A>, KindError>
    where
        F: Witness,
        A: 'static,
    {
        let expected = type_name::<Kind<F, A>>();
        if !self.is::<F, A>() {
            tracing::debug!(expected, found = self.name, "rejected kind narrowing");
            return Err(KindError::Mismatch {
                expected,
                found: self.name,
            });
        }
        let found = self.name;
        self.repr
            .downcast::<Kind<F, A>>()
            .map(|kind| *kind)
            .map_err(|_| KindError::Mismatch { expected, found })
    }

    /// Narrows an optional holder.
    ///
    /// # Errors
    ///
    /// Returns [`KindError::Missing`] for `None`, otherwise behaves like
    /// [`AnyKind::narrow`].
    pub fn narrow_from<F, A>(kind: Option<Self>) -> Result<Kind<F, A>, KindError>
    where
        F: Witness,
        A: 'static,
    {
        match kind {
            Some(kind) => kind.narrow::<F, A>(),
            None => {
                let expected = type_name::<Kind<F, A>>();
                tracing::debug!(expected, "rejected narrowing of a missing kind");
                Err(KindError::Missing { expected })
            }
        }
    }

    /// Returns `true` if this holder was widened as `Kind<F, A>`.
    pub fn is<F, A>(&self) -> bool
    where
        F: Witness,
        A: 'static,
    {
        self.witness == TypeId::of::<F>() && self.payload == TypeId::of::<A>()
    }

    /// The type name of the stored Kind.
    pub const fn kind_name(&self) -> &'static str {
        self.name
    }

    /// The type name of the erased witness.
    pub const fn witness_name(&self) -> &'static str {
        self.witness_name
    }

    /// The type name of the payload.
    pub const fn value_name(&self) -> &'static str {
        self.value_name
    }
}

impl fmt::Debug for AnyKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("AnyKind")
            .field("witness", &self.witness_name)
            .field("value", &self.value_name)
            .finish_non_exhaustive()
    }
}
