//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick starts.
//! Import everything with:
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Types**: [`Outcome`] together with its `Success` and `Failure` variants
//! - **Functions**: [`combine2`], [`combine3`], [`from_nullable`]
//! - **Macros**: [`combine!`]
//! - **Traits**: [`IntoOutcome`], [`WithError`]
//!
//! # Examples
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn parse_port(raw: &str) -> Outcome<String, u16> {
//!     raw.parse::<u16>().into_outcome().map_error(|e| format!("bad port '{raw}': {e}"))
//! }
//!
//! assert_eq!(parse_port("8080"), Success(8080));
//! assert!(parse_port("http").is_failure());
//! ```

// Macros
pub use crate::combine;

// Core types
pub use crate::outcome::Outcome::{self, Failure, Success};

// Functions
pub use crate::combine::{combine2, combine3};
pub use crate::convert::from_nullable;

// Traits
pub use crate::traits::{IntoOutcome, WithError};

#[cfg(feature = "tracing")]
pub use crate::tracing_ext::OutcomeTraceExt;
