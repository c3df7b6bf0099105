//! Macros for combining outcomes.
//!
//! - [`macro@crate::combine`] - Combines any number of outcomes with left-to-right failure
//!   priority, evaluating each operand only if all earlier ones succeeded.

/// Combines any number of outcomes into one.
///
/// Each `name = expr` binding evaluates `expr` to an [`Outcome`](crate::Outcome). Bindings are
/// processed left to right: the first failure is returned unchanged and the remaining operand
/// expressions are **not evaluated**. When every operand succeeds, the body after `=>` is
/// evaluated with all the names bound to their values and wrapped in `Success`.
///
/// All operands must share the same error type.
///
/// # Syntax
///
/// - `combine!(a = expr_a, b = expr_b, ... => body)`
///
/// # Examples
///
/// ```
/// use outcome_rail::{combine, Outcome};
///
/// let total: Outcome<&str, i32> = combine!(
///     a = Outcome::Success(1),
///     b = Outcome::Success(2),
///     c = Outcome::Success(3),
///     d = Outcome::Success(4)
///     => a + b + c + d
/// );
/// assert_eq!(total, Outcome::Success(10));
///
/// let mut evaluated = false;
/// let short: Outcome<&str, i32> = combine!(
///     a = Outcome::<&str, i32>::Failure("first"),
///     b = { evaluated = true; Outcome::Success(2) }
///     => a + b
/// );
/// assert_eq!(short, Outcome::Failure("first"));
/// assert!(!evaluated);
/// ```
#[macro_export]
macro_rules! combine {
    ($($name:ident = $outcome:expr),+ $(,)? => $body:expr) => {
        'combine: {
            $(
                let $name = match $outcome {
                    $crate::Outcome::Success(value) => value,
                    $crate::Outcome::Failure(error) => {
                        break 'combine $crate::Outcome::Failure(error)
                    }
                };
            )+
            $crate::Outcome::Success($body)
        }
    };
}
