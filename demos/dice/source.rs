//! Sources of single random integers.

use std::collections::VecDeque;
use std::fmt;

use outcome_rail::{from_nullable, Outcome};

use crate::network::Network;

/// Produces one integer at a time.
pub trait Source {
    fn integer(&mut self) -> Outcome<SourceError, i64>;
}

impl<S: Source + ?Sized> Source for Box<S> {
    fn integer(&mut self) -> Outcome<SourceError, i64> {
        (**self).integer()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceError {
    Generic,
    Empty,
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => write!(f, "source failed"),
            Self::Empty => write!(f, "source ran out of integers"),
        }
    }
}

/// Hands out integers from a cached batch, refilling it from the network when it runs dry.
pub struct NetworkSource<N> {
    network: N,
    batch: VecDeque<i64>,
}

impl<N: Network> NetworkSource<N> {
    pub fn new(network: N) -> Self {
        Self::with_batch(network, [])
    }

    pub fn with_batch(network: N, initial: impl IntoIterator<Item = i64>) -> Self {
        Self {
            network,
            batch: initial.into_iter().collect(),
        }
    }
}

impl<N: Network> Source for NetworkSource<N> {
    fn integer(&mut self) -> Outcome<SourceError, i64> {
        if self.batch.is_empty() {
            let batch = &mut self.batch;
            let _ = self
                .network
                .fetch()
                .inspect(|fresh| {
                    tracing::info!(count = fresh.len(), "refilled batch");
                    batch.extend(fresh);
                })
                .inspect_error(|error| tracing::warn!(%error, "could not refill batch"));
        }

        from_nullable(self.batch.pop_front()).map_error(|()| SourceError::Empty)
    }
}

/// Doubles every integer of the wrapped source.
pub struct EvenSource<S> {
    source: S,
}

impl<S> EvenSource<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: Source> Source for EvenSource<S> {
    fn integer(&mut self) -> Outcome<SourceError, i64> {
        self.source.integer().map(|n| n.wrapping_mul(2))
    }
}
