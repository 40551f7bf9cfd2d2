//! Error types for Nereus operations.
//!
//! Errors are categorized into three types:
//!
//! - **`Error`**: Request-level errors that halt a symbol request (failed
//!   reference listing, bad configuration, unreadable snapshot)
//! - **`ResolutionError`**: Failures reported by the analysis engine for a
//!   single lookup
//! - **`DroppedReference`**: A reference abandoned because its resolution
//!   failed; collected but never fatal
//!
//! ## Error Philosophy
//!
//! Symbol resolution is best effort:
//! - One reference the engine cannot resolve shouldn't hide the rest
//! - Per-reference failures are logged and collected, not thrown
//! - Only a failed reference listing fails the whole request

use std::time::Duration;

use lsp_types::Range;
use thiserror::Error;

/// Result type for Nereus operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for Nereus operations.
///
/// These errors mean a request produced no result at all.
#[derive(Debug, Error)]
pub enum Error {
    /// The analysis engine could not list the document's references
    #[error("failed to list document references: {source}")]
    Listing {
        /// The engine failure.
        #[source]
        source: ResolutionError,
    },

    /// Invalid configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// File system operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An analysis snapshot could not be decoded
    #[error("invalid analysis snapshot: {0}")]
    Snapshot(#[source] serde_json::Error),

    /// A module path could not be turned into a document URI
    #[error("invalid path: {0}")]
    InvalidPath(String),
}

/// Failure reported by the analysis engine for a single lookup.
///
/// Returned by [`Reference::resolve_definitions`](crate::Reference::resolve_definitions),
/// [`Definition::parent_scope`](crate::Definition::parent_scope) and
/// [`Document::list_references`](crate::Document::list_references).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    /// The engine raised an error (malformed or partially parsed code, etc.)
    #[error("analysis engine error: {0}")]
    Engine(String),

    /// The engine gave up before producing an answer
    #[error("analysis timed out after {0:?}")]
    TimedOut(Duration),

    /// The engine handed out a definition id it does not know about
    #[error("unknown definition id {0}")]
    UnknownDefinition(usize),
}

impl ResolutionError {
    /// Create an engine error from any message.
    #[must_use]
    pub fn engine(message: impl Into<String>) -> Self {
        Self::Engine(message.into())
    }
}

/// A reference that was abandoned because its definitions could not be resolved.
///
/// These are collected during a symbol request but don't halt it. The
/// request continues with the remaining references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedReference {
    /// Name of the abandoned reference
    pub name: String,
    /// Where the reference is used (0-indexed)
    pub usage_range: Range,
    /// Why resolution failed
    pub error: ResolutionError,
}

impl std::fmt::Display for DroppedReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}:{}: {}",
            self.name, self.usage_range.start.line, self.usage_range.start.character, self.error
        )
    }
}

impl std::error::Error for DroppedReference {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl DroppedReference {
    /// Record a dropped reference.
    #[must_use]
    pub fn new(name: impl Into<String>, usage_range: Range, error: ResolutionError) -> Self {
        Self {
            name: name.into(),
            usage_range,
            error,
        }
    }
}
