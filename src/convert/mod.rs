//! Conversion helpers between `Option`, `Result`, and [`Outcome`].
//!
//! These adapters make it straightforward to adopt `Outcome` at the edges of existing code:
//! wrap whatever a legacy API returns, build the chain, and hand a plain `Result` back when the
//! caller wants to use `?`.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//! use outcome_rail::Outcome;
//!
//! let found = from_nullable(Some("alice"));
//! assert_eq!(found, Outcome::Success("alice"));
//!
//! let result: Result<i32, &str> = Err("failed");
//! let outcome = result_to_outcome(result);
//! assert_eq!(outcome_to_result(outcome), Err("failed"));
//! ```

use crate::outcome::Outcome;

/// Turns an optional value into an [`Outcome`].
///
/// # Returns
///
/// * `Outcome::Success(value)` if `value` is present
/// * `Outcome::Failure(())` if it is absent
///
/// The error carries nothing beyond "was absent"; use [`Outcome::map_error`] to attach a
/// meaningful error.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::from_nullable;
/// use outcome_rail::Outcome;
///
/// assert_eq!(from_nullable(Some(5)), Outcome::Success(5));
/// assert_eq!(from_nullable::<i32>(None), Outcome::Failure(()));
///
/// #[derive(Debug, PartialEq)]
/// enum LookupError { Missing }
///
/// let user = from_nullable::<&str>(None).map_error(|()| LookupError::Missing);
/// assert_eq!(user, Outcome::Failure(LookupError::Missing));
/// ```
#[inline]
pub fn from_nullable<T>(value: Option<T>) -> Outcome<(), T> {
    Outcome::from_nullable(value)
}

/// Converts a `Result` into an [`Outcome`].
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::result_to_outcome;
/// use outcome_rail::Outcome;
///
/// let ok: Result<i32, &str> = Ok(42);
/// assert_eq!(result_to_outcome(ok), Outcome::Success(42));
/// ```
#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<E, T> {
    result.into()
}

/// Converts an [`Outcome`] into a `Result`.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::outcome_to_result;
/// use outcome_rail::Outcome;
///
/// let failed: Outcome<&str, i32> = Outcome::Failure("boom");
/// assert_eq!(outcome_to_result(failed), Err("boom"));
/// ```
#[inline]
pub fn outcome_to_result<T, E>(outcome: Outcome<E, T>) -> Result<T, E> {
    outcome.into_result()
}
