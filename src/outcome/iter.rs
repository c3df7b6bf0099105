use crate::outcome::core::Outcome;

/// Borrowing iterator over the value of a success.
///
/// Created by [`Outcome::iter`]. Yields at most one item.
#[derive(Debug, Clone)]
pub struct Iter<'a, V> {
    inner: Option<&'a V>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

/// Owning iterator over the value of a success.
#[derive(Debug, Clone)]
pub struct IntoIter<V> {
    inner: Option<V>,
}

impl<V> Iterator for IntoIter<V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {}

impl<E, V> IntoIterator for Outcome<E, V> {
    type Item = V;
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.into_value(),
        }
    }
}

impl<'a, E, V> IntoIterator for &'a Outcome<E, V> {
    type Item = &'a V;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E, V> Outcome<E, V> {
    /// Returns an iterator over the value of a success; empty for a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<&str, i32>::Success(4);
    /// assert_eq!(o.iter().copied().sum::<i32>(), 4);
    /// ```
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            inner: self.value(),
        }
    }
}

/// Collects an iterator of outcomes, stopping at the first failure.
///
/// Items after the first failure are never pulled from the source iterator.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let all: Outcome<&str, Vec<i32>> =
///     vec![Outcome::Success(1), Outcome::Success(2)].into_iter().collect();
/// assert_eq!(all, Outcome::Success(vec![1, 2]));
///
/// let outcomes = vec![Outcome::Success(1), Outcome::Failure("a"), Outcome::Failure("b")];
/// let first: Outcome<&str, Vec<i32>> = outcomes.into_iter().collect();
/// assert_eq!(first, Outcome::Failure("a"));
/// ```
impl<E, V, C> FromIterator<Outcome<E, V>> for Outcome<E, C>
where
    C: FromIterator<V>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Outcome<E, V>>,
    {
        let mut failure = None;
        let collected: C = iter
            .into_iter()
            .map_while(|outcome| match outcome {
                Outcome::Success(value) => Some(value),
                Outcome::Failure(error) => {
                    failure = Some(error);
                    None
                }
            })
            .collect();

        match failure {
            Some(error) => Outcome::Failure(error),
            None => Outcome::Success(collected),
        }
    }
}
