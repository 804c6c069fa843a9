//! Error types for the Penpal engine.
//!
//! The taxonomy is deliberately small: the only fallible operation in the
//! whole system is wiring the demo up. Runtime sampling and sequencing
//! degrade instead of failing (see the tracker and classification docs).

use thiserror::Error;

/// Errors that can occur while wiring the demo together.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    /// A required surface was not provided to the builder.
    ///
    /// Initialization aborts entirely — the page stays static rather than
    /// running a partially wired feature set.
    #[error("missing required surface: {0}")]
    MissingSurface(&'static str),
}
