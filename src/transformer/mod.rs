//! Monad transformers.
//!
//! Each transformer takes its outer monad as a witness type parameter and
//! stacks one more capability on top of it:
//!
//! - [`EitherT`]: a typed failure (`Kind<F, Either<L, A>>`)
//! - [`MaybeT`] and [`OptionT`]: absence (`Kind<F, Maybe<A>>`, `Kind<F, Option<A>>`)
//! - [`ReaderT`]: a read-only environment (`R -> Kind<F, A>`)
//! - [`StateT`]: threaded state (`S -> Kind<F, StateTuple<S, A>>`)
//!
//! Every transformer has its own witness, so a transformer stack is itself a
//! [`Monad`](crate::typeclass::Monad) and can be stacked again.
//!
//! # Examples
//!
//! ```rust
//! use kindred::control::{Either, OptionWitness};
//! use kindred::effect::StateTuple;
//! use kindred::transformer::{EitherT, EitherTWitness, StateT, StateTWitness};
//! use kindred::typeclass::{Monad, MonadError};
//!
//! type Inner = EitherTWitness<OptionWitness, String>;
//! type Stack = StateTWitness<Inner, u32>;
//!
//! let charge = |cost: u32| -> StateT<Inner, u32, ()> {
//!     StateT::new(move |balance: u32| match balance.checked_sub(cost) {
//!         Some(rest) => EitherT::right(StateTuple::new(rest, ())),
//!         None => EitherT::left(format!("cannot pay {cost}")),
//!     })
//! };
//!
//! let program = Stack::flat_map(charge(3), move |()| charge(4));
//! assert_eq!(program.run_state_t(10).value(), Some(Either::Right(StateTuple::new(3, ()))));
//!
//! let refused = Stack::handle_error(program, |_| ());
//! assert_eq!(refused.run_state_t(5).value(), Some(Either::Right(StateTuple::new(5, ()))));
//! ```

mod either_transformer;
mod maybe_transformer;
mod optional_transformer;
mod reader_transformer;
mod state_transformer;

pub use either_transformer::{EitherT, EitherTWitness};
pub use maybe_transformer::{MaybeT, MaybeTWitness};
pub use optional_transformer::{OptionT, OptionTWitness};
pub use reader_transformer::{ReaderT, ReaderTWitness};
pub use state_transformer::{StateT, StateTWitness};
