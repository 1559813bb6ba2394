//! Do-notation over any [`Monad`](crate::typeclass::Monad) witness.
//!
//! `mdo!` rewrites a block of binds into nested `flat_map` calls on the named
//! witness, so one syntax covers `Option`, `Vec`, `State`, transformers and
//! every other instance.
//!
//! # Syntax
//!
//! ```text
//! mdo! {
//!     Witness;
//!     pattern <= monadic_expression;
//!     let pattern = pure_expression;
//!     _ <= monadic_expression;
//!     final_monadic_expression
//! }
//! ```
//!
//! Each bind becomes a `move` closure. Values bound earlier are moved into
//! the later closures, and since `flat_map` continuations are `Fn`, non-`Copy`
//! captures must be cloned where they are consumed.
//!
//! # Examples
//!
//! ```rust
//! use kindred::control::OptionWitness;
//! use kindred::mdo;
//! use kindred::typeclass::Applicative;
//!
//! let result = mdo! {
//!     OptionWitness;
//!     x <= Some(5);
//!     y <= Some(10);
//!     let z = x + y;
//!     OptionWitness::pure(z * 2)
//! };
//! assert_eq!(result, Some(30));
//! ```

/// Do-notation over a witness. See the [module documentation](self).
#[macro_export]
macro_rules! mdo {
    ($witness:ty; $pattern:ident <= $monad:expr ; $($rest:tt)+) => {
        <$witness as $crate::typeclass::Monad>::flat_map($monad, move |$pattern| {
            $crate::mdo!($witness; $($rest)+)
        })
    };

    ($witness:ty; ($($pattern:tt)*) <= $monad:expr ; $($rest:tt)+) => {
        <$witness as $crate::typeclass::Monad>::flat_map($monad, move |($($pattern)*)| {
            $crate::mdo!($witness; $($rest)+)
        })
    };

    ($witness:ty; _ <= $monad:expr ; $($rest:tt)+) => {
        <$witness as $crate::typeclass::Monad>::flat_map($monad, move |_| {
            $crate::mdo!($witness; $($rest)+)
        })
    };

    ($witness:ty; let $pattern:ident = $expr:expr ; $($rest:tt)+) => {
        {
            let $pattern = $expr;
            $crate::mdo!($witness; $($rest)+)
        }
    };

    ($witness:ty; let ($($pattern:tt)*) = $expr:expr ; $($rest:tt)+) => {
        {
            let ($($pattern)*) = $expr;
            $crate::mdo!($witness; $($rest)+)
        }
    };

    ($witness:ty; $result:expr) => {
        $result
    };
}
