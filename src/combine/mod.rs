//! Combination of several outcomes into one.
//!
//! Every helper here gives priority to the leftmost failure: when more than one input has
//! failed, the error of the first failed input (in argument order) is returned unchanged.
//! The helpers only short-circuit the *combination*; the arguments have already been evaluated
//! by the caller. Use [`combine!`](crate::combine!) when later inputs should not be computed at
//! all once an earlier one has failed.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::combine::{combine2, combine3};
//! use outcome_rail::Outcome;
//!
//! let sum = combine2(Outcome::<&str, i32>::Success(1), Outcome::Success(2), |l, r| l + r);
//! assert_eq!(sum, Outcome::Success(3));
//!
//! let first = combine3(
//!     Outcome::<&str, i32>::Success(1),
//!     Outcome::<&str, i32>::Failure("middle"),
//!     Outcome::<&str, i32>::Failure("right"),
//!     |l, m, r| l + m + r,
//! );
//! assert_eq!(first, Outcome::Failure("middle"));
//! ```

use crate::outcome::Outcome;

/// Combines two outcomes with `transform`.
///
/// # Returns
///
/// * `Failure(e)` of `left` if `left` failed
/// * otherwise `Failure(e)` of `right` if `right` failed
/// * otherwise `Success(transform(l, r))`
#[inline]
pub fn combine2<E, U, V, W, F>(
    left: Outcome<E, U>,
    right: Outcome<E, V>,
    transform: F,
) -> Outcome<E, W>
where
    F: FnOnce(U, V) -> W,
{
    left.and_then(|l| right.map(|r| transform(l, r)))
}

/// Combines three outcomes with `transform`.
///
/// A failure of `left` wins over `middle` and `right`; a failure of `middle` wins over `right`.
#[inline]
pub fn combine3<E, U, V, W, X, F>(
    left: Outcome<E, U>,
    middle: Outcome<E, V>,
    right: Outcome<E, W>,
    transform: F,
) -> Outcome<E, X>
where
    F: FnOnce(U, V, W) -> X,
{
    left.and_then(|l| combine2(middle, right, |m, r| transform(l, m, r)))
}
