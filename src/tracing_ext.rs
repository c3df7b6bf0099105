//! Tracing integration for outcome chains.
//!
//! This module provides logging-flavoured versions of [`Outcome::inspect`] and
//! [`Outcome::inspect_error`] that emit `tracing` events without interrupting a chain.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["tracing"] }
//! ```

use core::fmt::Debug;

use tracing::Span;

use crate::Outcome;

/// Extension trait that records outcomes as `tracing` events.
///
/// Every method returns the receiver unchanged, so it can sit anywhere in a chain.
///
/// # Example
///
/// ```rust,ignore
/// use outcome_rail::tracing_ext::OutcomeTraceExt;
///
/// let pips = parse_dice(input)
///     .trace_failure("parse")
///     .and_then(|mut dice| dice.roll())
///     .trace_outcome("roll");
/// ```
pub trait OutcomeTraceExt<E, V>: Sized {
    /// Emits a `WARN` event with the error if the outcome is a failure.
    fn trace_failure(self, label: &str) -> Self;

    /// Emits a `DEBUG` event for a success and a `WARN` event for a failure.
    fn trace_outcome(self, label: &str) -> Self
    where
        V: Debug;

    /// Emits a `WARN` event for a failure inside the given span.
    ///
    /// Unlike [`trace_failure`](OutcomeTraceExt::trace_failure), which records into whatever
    /// span is current, this enters `span` for the duration of the event.
    fn with_span(self, span: &Span) -> Self;
}

impl<E, V> OutcomeTraceExt<E, V> for Outcome<E, V>
where
    E: Debug,
{
    fn trace_failure(self, label: &str) -> Self {
        self.inspect_error(|error| tracing::warn!(label = label, ?error, "outcome failed"))
    }

    fn trace_outcome(self, label: &str) -> Self
    where
        V: Debug,
    {
        self.inspect(|value| tracing::debug!(label = label, ?value, "outcome succeeded"))
            .trace_failure(label)
    }

    fn with_span(self, span: &Span) -> Self {
        self.inspect_error(|error| {
            let _entered = span.enter();
            tracing::warn!(?error, "outcome failed");
        })
    }
}

/// Records the error of a failed outcome in the current span and returns it for further use.
///
/// Handy as the argument to [`Outcome::map_error`] at the point where a low-level error is
/// translated into a domain one.
///
/// # Example
///
/// ```rust,ignore
/// use outcome_rail::tracing_ext::record_error;
///
/// source.integer().map_error(record_error).map_error(DiceError::Source)
/// ```
pub fn record_error<E: Debug>(error: E) -> E {
    let span = Span::current();
    let name = span.metadata().map(|m| m.name()).unwrap_or("unknown");
    tracing::warn!(span = name, ?error, "error recorded");
    error
}
