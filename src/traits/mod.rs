//! Traits that connect [`Outcome`](crate::Outcome) with the rest of the ecosystem.
//!
//! - [`IntoOutcome`]: Extension conversion from `Option` and `Result`
//! - [`WithError`]: Abstraction for types that carry remappable error variants
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{IntoOutcome, WithError};
//! use outcome_rail::Outcome;
//!
//! let missing: Option<u8> = None;
//! let outcome = missing.into_outcome().fmap_error(|()| "value was absent");
//! assert_eq!(outcome, Outcome::Failure("value was absent"));
//! ```

pub mod into_outcome;
pub mod with_error;

pub use into_outcome::IntoOutcome;
pub use with_error::WithError;
