/// Abstraction over containers whose error side can be remapped.
///
/// Implemented for both [`Result`] and [`Outcome`](crate::Outcome), so generic code can
/// translate errors without caring which of the two it was handed.
///
/// # Type Parameters
///
/// * `E` - The current error type contained in the implementor
///
/// # Associated Types
///
/// * `Success` - The success value type when no error is present
/// * `ErrorOutput<G>` - The container type after mapping the error to type `G`
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::WithError;
///
/// let result: Result<i32, &str> = Err("original error");
/// let mapped = result.fmap_error(|e| format!("Error: {}", e));
/// assert_eq!(mapped, Err("Error: original error".to_string()));
/// ```
pub trait WithError<E> {
    type Success;

    type ErrorOutput<G>;

    /// Maps the error value using `f`, producing a new container with error type `G`.
    ///
    /// The success case is left untouched and `f` is not called for it.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::traits::WithError;
    /// use outcome_rail::Outcome;
    ///
    /// let outcome: Outcome<u32, i32> = Outcome::Failure(404);
    /// let mapped = outcome.fmap_error(|code| format!("HTTP {}", code));
    /// assert_eq!(mapped, Outcome::Failure("HTTP 404".to_string()));
    /// ```
    fn fmap_error<F, G>(self, f: F) -> Self::ErrorOutput<G>
    where
        F: FnOnce(E) -> G;

    /// Converts the container into a `Result`.
    ///
    /// For `Result` itself this is a no-op.
    fn to_result(self) -> Result<Self::Success, E>;
}

impl<T, E> WithError<E> for Result<T, E> {
    type Success = T;
    type ErrorOutput<G> = Result<T, G>;

    fn fmap_error<F, G>(self, f: F) -> Self::ErrorOutput<G>
    where
        F: FnOnce(E) -> G,
    {
        self.map_err(f)
    }

    fn to_result(self) -> Result<Self::Success, E> {
        self
    }
}
