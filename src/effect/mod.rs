//! Effect types and their witnesses.
//!
//! # Base Monads
//!
//! - [`Reader`]: Computations that read from an environment
//! - [`State`]: Computations that thread a state value
//! - [`Writer`]: Computations that accumulate output
//! - [`IO`]: Computations with deferred side effects
//! - [`Task`]: Asynchronous computations that may fail (requires `async`)
//!
//! Each has a witness (`ReaderWitness<R>`, `StateWitness<S>`, ...) so that it
//! can be used wherever a [`Monad`](crate::typeclass::Monad) is expected,
//! including as the outer monad of a transformer.
//!
//! # IO Monad
//!
//! ```rust
//! use kindred::effect::IOWitness;
//! use kindred::typeclass::{Applicative, Functor};
//!
//! let io = IOWitness::map(IOWitness::pure(10), |x| x * 2);
//!
//! // Side effects don't occur until run_unsafe is called
//! assert_eq!(io.run_unsafe(), 20);
//! ```

// =============================================================================
// Base Monads
// =============================================================================

mod reader;
mod state;
mod writer;

pub use reader::{Reader, ReaderWitness};
pub use state::{State, StateTuple, StateWitness};
pub use writer::{Writer, WriterWitness};

// =============================================================================
// IO Monad
// =============================================================================

mod io;

pub use io::{IO, IOWitness};

// =============================================================================
// Task (requires async feature)
// =============================================================================

#[cfg(feature = "async")]
mod task;

#[cfg(feature = "async")]
pub use task::{Task, TaskWitness};
