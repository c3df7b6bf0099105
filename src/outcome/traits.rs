use crate::outcome::core::Outcome;
use crate::traits::WithError;

/// Lets generic error-remapping code accept an `Outcome` wherever it accepts a `Result`.
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::WithError;
/// use outcome_rail::Outcome;
///
/// fn tag<C: WithError<&'static str>>(container: C) -> C::ErrorOutput<String> {
///     container.fmap_error(|e| format!("[net] {e}"))
/// }
///
/// assert_eq!(
///     tag(Outcome::<_, i32>::Failure("timeout")),
///     Outcome::Failure("[net] timeout".to_string())
/// );
/// assert_eq!(tag(Err::<i32, _>("timeout")), Err("[net] timeout".to_string()));
/// ```
impl<E, V> WithError<E> for Outcome<E, V> {
    type Success = V;
    type ErrorOutput<G> = Outcome<G, V>;

    fn fmap_error<F, G>(self, f: F) -> Self::ErrorOutput<G>
    where
        F: FnOnce(E) -> G,
    {
        self.map_error(f)
    }

    fn to_result(self) -> Result<V, E> {
        self.into_result()
    }
}
