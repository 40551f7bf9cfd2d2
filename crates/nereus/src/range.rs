//! Conversion from engine positions to editor ranges.
//!
//! The analysis engine reports 1-indexed lines and 0-indexed columns; editor
//! protocols want both 0-indexed. Only the line shifts.

use lsp_types::{Position, Range};

use crate::engine::{Definition, Reference};
use crate::types::{SourcePosition, SourceSpan};

/// Convert an engine position to a 0-indexed editor position.
///
/// A line of 0 (outside the engine's convention) clamps to the first line.
#[must_use]
pub fn to_position(position: SourcePosition) -> Position {
    Position::new(position.line.saturating_sub(1), position.column)
}

/// Convert an engine span to a 0-indexed editor range.
///
/// # Example
///
/// ```
/// use nereus::{SourcePosition, SourceSpan, to_range};
///
/// let span = SourceSpan::new(SourcePosition::new(5, 3), SourcePosition::new(5, 10))
///     .expect("end follows start");
/// let range = to_range(span);
/// assert_eq!((range.start.line, range.start.character), (4, 3));
/// assert_eq!((range.end.line, range.end.character), (4, 10));
/// ```
#[must_use]
pub fn to_range(span: SourceSpan) -> Range {
    Range::new(to_position(span.start), to_position(span.end))
}

/// Range of the reference occurrence itself.
#[must_use]
pub fn usage_range<R: Reference>(reference: &R) -> Range {
    to_range(reference.span())
}

/// Range of the full construct defining a symbol.
#[must_use]
pub fn definition_range<D: Definition>(definition: &D) -> Range {
    to_range(definition.span())
}

/// Whether `inner` lies within the lines of `outer`.
///
/// Containment is line-granular: a usage on the last line of a scope counts
/// as inside it regardless of column.
#[must_use]
pub fn lines_within(inner: &Range, outer: &Range) -> bool {
    inner.start.line >= outer.start.line && inner.end.line <= outer.end.line
}
