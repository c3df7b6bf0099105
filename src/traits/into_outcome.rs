//! Conversion of standard library containers into [`Outcome`].
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::IntoOutcome;
//! use outcome_rail::Outcome;
//!
//! let present = Some(true).into_outcome();
//! assert_eq!(present, Outcome::Success(true));
//!
//! let parsed = "42".parse::<i32>().into_outcome();
//! assert_eq!(parsed.with_default(0), 42);
//! ```

use crate::Outcome;

/// Converts a value into an [`Outcome`].
///
/// For `Option<T>`, absence becomes `Failure(())`; callers that need a richer error attach one
/// with [`Outcome::map_error`]. For `Result<T, E>`, `Ok` and `Err` map onto `Success` and
/// `Failure`.
pub trait IntoOutcome {
    /// Error type of the produced outcome.
    type Error;
    /// Value type of the produced outcome.
    type Value;

    /// Performs the conversion.
    fn into_outcome(self) -> Outcome<Self::Error, Self::Value>;
}

impl<T> IntoOutcome for Option<T> {
    type Error = ();
    type Value = T;

    #[inline]
    fn into_outcome(self) -> Outcome<(), T> {
        Outcome::from_nullable(self)
    }
}

impl<T, E> IntoOutcome for Result<T, E> {
    type Error = E;
    type Value = T;

    #[inline]
    fn into_outcome(self) -> Outcome<E, T> {
        self.into()
    }
}
