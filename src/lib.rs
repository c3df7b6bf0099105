//! Composable, short-circuiting outcomes for fallible computations.
//!
//! [`Outcome<E, V>`](Outcome) is either a `Success` carrying a value or a `Failure` carrying an
//! error. Pipelines of fallible steps are built from its combinators; the first failure is
//! propagated through the rest of the chain untouched, while `map_error` and `and_then_error`
//! allow explicit recovery and error translation.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Building a Chain
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! enum Problem {
//!     Connection,
//!     Timeout,
//! }
//!
//! fn fetch(id: u32) -> Outcome<Problem, u32> {
//!     if id == 0 {
//!         Outcome::Failure(Problem::Connection)
//!     } else {
//!         Outcome::Success(id * 10)
//!     }
//! }
//!
//! let total = fetch(3)
//!     .map(|n| n + 1)
//!     .and_then(|n| fetch(n).map(|m| m + n))
//!     .inspect_error(|problem| eprintln!("fetch failed: {problem:?}"))
//!     .with_default(0);
//! assert_eq!(total, 341);
//!
//! let recovered = fetch(0)
//!     .and_then_error(|problem| match problem {
//!         Problem::Connection => Outcome::<Problem, u32>::Success(0),
//!         other => Outcome::Failure(other),
//!     });
//! assert_eq!(recovered, Outcome::Success(0));
//! ```
//!
//! ## Combining Outcomes
//!
//! ```
//! use outcome_rail::{combine, combine2, Outcome};
//!
//! let width: Outcome<&str, u32> = Outcome::Success(4);
//! let height: Outcome<&str, u32> = Outcome::Success(5);
//! assert_eq!(combine2(width, height, |w, h| w * h), Outcome::Success(20));
//!
//! let volume: Outcome<&str, u32> = combine!(
//!     w = width,
//!     h = height,
//!     d = Outcome::<&str, u32>::Failure("depth unknown")
//!     => w * h * d
//! );
//! assert_eq!(volume, Outcome::Failure("depth unknown"));
//! ```
//!
//! ## From Optional Values
//!
//! ```
//! use outcome_rail::{from_nullable, Outcome};
//!
//! let ports = [8080, 8443];
//! let first = from_nullable(ports.first()).map_error(|()| "no ports configured");
//! assert_eq!(first, Outcome::Success(&8080));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

/// Combination of several outcomes into one
pub mod combine;
/// Conversions between Option, Result, and Outcome
pub mod convert;
/// Macros for combining outcomes
pub mod macros;
/// The Outcome type and its combinators
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Traits connecting Outcome with standard library containers
pub mod traits;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use combine::*;
pub use convert::*;
pub use outcome::*;
pub use traits::*;
