//! The [`Outcome`] type and its combinators.
//!
//! # Key Components
//!
//! - [`Outcome`] - Either a `Success` value or a `Failure` error, never both
//! - Iterator adapters over the success value, and short-circuiting collection
//! - [`WithError`](crate::traits::WithError) support for generic error remapping
//!
//! # Examples
//!
//! ```
//! use outcome_rail::outcome::Outcome;
//!
//! let parsed: Outcome<&str, Vec<i32>> = ["1", "2", "x"]
//!     .iter()
//!     .map(|s| Outcome::from(s.parse::<i32>()).map_error(|_| "not a number"))
//!     .collect();
//! assert_eq!(parsed, Outcome::Failure("not a number"));
//! ```
pub mod core;
pub mod iter;
mod traits;

pub use self::core::*;
pub use self::iter::*;
