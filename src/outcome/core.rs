use core::fmt;

/// The outcome of a computation that may fail.
///
/// `Outcome<E, V>` is either a [`Success`](Outcome::Success) holding a value of type `V`, or a
/// [`Failure`](Outcome::Failure) holding an error of type `E`. An outcome never accumulates
/// errors: the first failure in a chain is carried through every later step unchanged.
///
/// The enum can be matched on directly, but the idiomatic way to use it is to build up a chain
/// with the combinators below and unwrap once at the end.
///
/// # Type Parameters
///
/// * `E` - Distinguishes the kinds of failure that can occur
/// * `V` - The value of a successful computation
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let doubled = Outcome::<&str, i32>::Success(3)
///     .map(|n| n * 2)
///     .and_then(|n| {
///         if n > 5 {
///             Outcome::Success(n)
///         } else {
///             Outcome::Failure("too small")
///         }
///     })
///     .with_default(-1);
/// assert_eq!(doubled, 6);
/// ```
#[must_use]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Outcome<E, V> {
    /// A completed computation.
    Success(V),
    /// A failed computation.
    Failure(E),
}

use Outcome::{Failure, Success};

impl<E, V> Outcome<E, V> {
    /// Creates a successful outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<&str, i32>::success(37);
    /// assert_eq!(o, Outcome::Success(37));
    /// ```
    #[inline]
    pub fn success(value: V) -> Self {
        Success(value)
    }

    /// Creates a failed outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<&str, i32>::failure("timeout");
    /// assert!(o.is_failure());
    /// ```
    #[inline]
    pub fn failure(error: E) -> Self {
        Failure(error)
    }

    /// Returns `true` if the outcome holds a value.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Success(_))
    }

    /// Returns `true` if the outcome holds an error.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Borrows the value, if any.
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&V> {
        match self {
            Success(value) => Some(value),
            Failure(_) => None,
        }
    }

    /// Borrows the error, if any.
    #[must_use]
    #[inline]
    pub fn error(&self) -> Option<&E> {
        match self {
            Success(_) => None,
            Failure(error) => Some(error),
        }
    }

    /// Converts `&Outcome<E, V>` into `Outcome<&E, &V>`.
    ///
    /// Useful for running a chain over an outcome without giving it up.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&E, &V> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(error),
        }
    }

    /// Extracts the value, discarding any error.
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<V> {
        match self {
            Success(value) => Some(value),
            Failure(_) => None,
        }
    }

    /// Extracts the error, discarding any value.
    #[must_use]
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self {
            Success(_) => None,
            Failure(error) => Some(error),
        }
    }

    /// Unwraps the outcome by providing a default value.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<&str, i32>::Success(37).with_default(42), 37);
    /// assert_eq!(Outcome::<&str, i32>::Failure("lost").with_default(42), 42);
    /// ```
    #[must_use]
    #[inline]
    pub fn with_default(self, default: V) -> V {
        self.with_default_else(|_| default)
    }

    /// Unwraps the outcome by computing a default from the error.
    ///
    /// `producer` runs exactly once, and only for a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let failed: Outcome<i32, i32> = Outcome::Failure(21);
    /// assert_eq!(failed.with_default_else(|e| e * 2), 42);
    /// ```
    #[must_use]
    #[inline]
    pub fn with_default_else<F>(self, producer: F) -> V
    where
        F: FnOnce(E) -> V,
    {
        match self {
            Success(value) => value,
            Failure(error) => producer(error),
        }
    }

    /// Unwraps the outcome, panicking with a message derived from the error.
    ///
    /// This is the escalation point for terminal call sites that accept abort semantics. None of
    /// the combinators in this crate call it.
    ///
    /// # Panics
    ///
    /// Panics with the `Display` output of `producer(error)` if the outcome is a failure.
    ///
    /// # Examples
    ///
    /// ```should_panic
    /// use outcome_rail::Outcome;
    ///
    /// let failed: Outcome<&str, i32> = Outcome::Failure("overflow");
    /// failed.or_throw(|e| format!("problem occurred: {e}"));
    /// ```
    #[track_caller]
    #[inline]
    pub fn or_throw<X, F>(self, producer: F) -> V
    where
        F: FnOnce(E) -> X,
        X: fmt::Display,
    {
        match self {
            Success(value) => value,
            Failure(error) => panic!("{}", producer(error)),
        }
    }

    /// Unwraps the outcome, raising the produced value itself as the panic payload.
    ///
    /// A `catch_unwind` further up can downcast the payload back to `X`.
    ///
    /// # Panics
    ///
    /// Panics with `producer(error)` as payload if the outcome is a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct ProblemOccurred(&'static str);
    ///
    /// let caught = std::panic::catch_unwind(|| {
    ///     Outcome::<&str, i32>::Failure("overflow").or_throw_any(ProblemOccurred)
    /// })
    /// .unwrap_err();
    /// assert_eq!(caught.downcast_ref::<ProblemOccurred>(), Some(&ProblemOccurred("overflow")));
    /// ```
    #[cfg(feature = "std")]
    #[track_caller]
    #[inline]
    pub fn or_throw_any<X, F>(self, producer: F) -> V
    where
        F: FnOnce(E) -> X,
        X: core::any::Any + Send + 'static,
    {
        match self {
            Success(value) => value,
            Failure(error) => std::panic::panic_any(producer(error)),
        }
    }

    /// Chains a computation that may itself fail.
    ///
    /// `chain` only runs for a success. A failure is passed on with its error untouched, so once
    /// a failure enters a chain no later step runs.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn increment(n: i32) -> Outcome<&'static str, i32> {
    ///     Outcome::Success(n + 1)
    /// }
    ///
    /// assert_eq!(Outcome::Success(37).and_then(increment), Outcome::Success(38));
    /// assert_eq!(
    ///     Outcome::Failure("connection").and_then(increment),
    ///     Outcome::Failure("connection")
    /// );
    /// ```
    #[inline]
    pub fn and_then<T, F>(self, chain: F) -> Outcome<E, T>
    where
        F: FnOnce(V) -> Outcome<E, T>,
    {
        match self {
            Success(value) => chain(value),
            Failure(error) => Failure(error),
        }
    }

    /// Chains an error-recovery computation.
    ///
    /// `transform` only runs for a failure, and may recover with a success or translate the error
    /// into another failure (possibly of a different type).
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let recovered = Outcome::<&str, i32>::Failure("connection")
    ///     .and_then_error(|_| Outcome::<(), i32>::Success(51));
    /// assert_eq!(recovered, Outcome::Success(51));
    /// ```
    #[inline]
    pub fn and_then_error<T, F>(self, transform: F) -> Outcome<T, V>
    where
        F: FnOnce(E) -> Outcome<T, V>,
    {
        match self {
            Success(value) => Success(value),
            Failure(error) => transform(error),
        }
    }

    /// Transforms the value of a success.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<&str, i32>::Success(37);
    /// assert_eq!(o.map(|n| 2 * n), Outcome::Success(74));
    /// ```
    #[inline]
    pub fn map<T, F>(self, transform: F) -> Outcome<E, T>
    where
        F: FnOnce(V) -> T,
    {
        match self {
            Success(value) => Success(transform(value)),
            Failure(error) => Failure(error),
        }
    }

    /// Transforms the error of a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<u16, i32>::Failure(404);
    /// let described = o.map_error(|code| format!("HTTP {code}"));
    /// assert_eq!(described, Outcome::Failure("HTTP 404".to_string()));
    /// ```
    #[inline]
    pub fn map_error<T, F>(self, transform: F) -> Outcome<T, V>
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(transform(error)),
        }
    }

    /// Transforms whichever side is present.
    #[inline]
    pub fn bimap<T, G, OnValue, OnError>(
        self,
        on_value: OnValue,
        on_error: OnError,
    ) -> Outcome<G, T>
    where
        OnValue: FnOnce(V) -> T,
        OnError: FnOnce(E) -> G,
    {
        match self {
            Success(value) => Success(on_value(value)),
            Failure(error) => Failure(on_error(error)),
        }
    }

    /// Observes the value of a success without changing the outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let mut seen = None;
    /// let o = Outcome::<&str, i32>::Success(7).inspect(|n| seen = Some(*n));
    /// assert_eq!(o, Outcome::Success(7));
    /// assert_eq!(seen, Some(7));
    /// ```
    #[inline]
    pub fn inspect<F>(self, action: F) -> Self
    where
        F: FnOnce(&V),
    {
        if let Success(value) = &self {
            action(value);
        }
        self
    }

    /// Observes the error of a failure without changing the outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let mut seen = None;
    /// let o = Outcome::<&str, i32>::Failure("timeout").inspect_error(|e| seen = Some(*e));
    /// assert_eq!(o, Outcome::Failure("timeout"));
    /// assert_eq!(seen, Some("timeout"));
    /// ```
    #[inline]
    pub fn inspect_error<F>(self, action: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Failure(error) = &self {
            action(error);
        }
        self
    }

    /// Pairs two outcomes, keeping the leftmost failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let left = Outcome::<&str, i32>::Success(1);
    /// assert_eq!(left.zip(Outcome::Success("one")), Outcome::Success((1, "one")));
    ///
    /// let left = Outcome::<&str, i32>::Failure("left");
    /// assert_eq!(left.zip(Outcome::<&str, i32>::Failure("right")), Outcome::Failure("left"));
    /// ```
    #[inline]
    pub fn zip<U>(self, other: Outcome<E, U>) -> Outcome<E, (V, U)> {
        self.and_then(|value| other.map(|other| (value, other)))
    }

    /// Converts into a standard [`Result`] so terminal call sites can use `?`.
    #[inline]
    pub fn into_result(self) -> Result<V, E> {
        match self {
            Success(value) => Ok(value),
            Failure(error) => Err(error),
        }
    }
}

impl<E, V> Outcome<E, Outcome<E, V>> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let nested: Outcome<&str, Outcome<&str, i32>> = Outcome::Success(Outcome::Failure("inner"));
    /// assert_eq!(nested.flatten(), Outcome::Failure("inner"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Outcome<E, V> {
        self.and_then(|inner| inner)
    }
}

impl<V> Outcome<(), V> {
    /// Turns an optional value into an outcome whose failure only records absence.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::from_nullable(Some(5)), Outcome::Success(5));
    /// assert_eq!(Outcome::<(), i32>::from_nullable(None), Outcome::Failure(()));
    /// ```
    #[inline]
    pub fn from_nullable(value: Option<V>) -> Self {
        match value {
            Some(value) => Success(value),
            None => Failure(()),
        }
    }
}

impl<V> From<Option<V>> for Outcome<(), V> {
    #[inline]
    fn from(value: Option<V>) -> Self {
        Self::from_nullable(value)
    }
}

impl<E, V> From<Result<V, E>> for Outcome<E, V> {
    #[inline]
    fn from(result: Result<V, E>) -> Self {
        match result {
            Ok(value) => Success(value),
            Err(error) => Failure(error),
        }
    }
}

impl<E, V> From<Outcome<E, V>> for Result<V, E> {
    #[inline]
    fn from(outcome: Outcome<E, V>) -> Self {
        outcome.into_result()
    }
}

impl<E, V> fmt::Display for Outcome<E, V>
where
    E: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Success(value) => write!(f, "Success(data={})", value),
            Failure(error) => write!(f, "Failure(error={})", error),
        }
    }
}
