//! Domain types for Nereus symbol resolution.
//!
//! These types represent the core domain model:
//! - **Input positions**: `SourcePosition`, `SourceSpan` (engine conventions)
//! - **Output records**: `SymbolRecord`, `SymbolLocation`, `UsedCompletionItem`
//! - **Results**: `SymbolReport` (records plus per-request diagnostics)
//!
//! ## Design Decisions
//!
//! | Decision | Choice | Rationale |
//! |----------|--------|-----------|
//! | Output ranges | `lsp_types::Range` | Records go straight to an editor |
//! | Location | Always serialized | Consumers read `location.uri` unconditionally |
//! | Kind | Optional | Unmapped definition types still yield a record |

use lsp_types::{Range, Uri};
use serde::{Deserialize, Serialize};

use crate::error::DroppedReference;
use crate::kinds::{CompletionKind, SymbolKind};

// ============================================================================
// Input positions
// ============================================================================

/// A position as reported by the analysis engine.
///
/// Lines are 1-indexed (first line is 1); columns are 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SourcePosition {
    /// Line number (1-indexed)
    pub line: u32,
    /// Column offset (0-indexed)
    pub column: u32,
}

impl SourcePosition {
    /// Create a position from an engine line/column pair.
    #[must_use]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// A start/end position span in a document, in engine conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceSpan {
    /// Where the span starts
    pub start: SourcePosition,
    /// Where the span ends (exclusive column)
    pub end: SourcePosition,
}

impl SourceSpan {
    /// Create a new span with validation.
    ///
    /// Returns `None` if the end position is before the start position.
    #[must_use]
    pub fn new(start: SourcePosition, end: SourcePosition) -> Option<Self> {
        if end < start {
            return None;
        }
        Some(Self { start, end })
    }
}

/// Which references the analysis engine should list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScopeMode {
    /// References in every lexical scope of the document
    #[default]
    AllScopes,
    /// Only references occurring at module level
    TopLevel,
}

impl From<bool> for ScopeMode {
    fn from(all_scopes: bool) -> Self {
        if all_scopes {
            Self::AllScopes
        } else {
            Self::TopLevel
        }
    }
}

// ============================================================================
// Output records
// ============================================================================

/// Where a symbol is defined.
///
/// Both fields are `None` when no definition could be resolved. A resolved
/// builtin definition has a range but no URI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SymbolLocation {
    /// Document holding the definition
    pub uri: Option<Uri>,
    /// Span of the full defining construct (0-indexed)
    pub range: Option<Range>,
}

impl SymbolLocation {
    /// Returns `true` if a definition was resolved for this location.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.range.is_some()
    }
}

/// A symbol used in a document, resolved to its definition.
///
/// Built once per accepted reference and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolRecord {
    /// Definition name, or the reference's own name when unresolved
    pub name: String,
    /// Nearest enclosing named scope, never the module itself
    pub container_name: Option<String>,
    /// Where the symbol is defined
    pub location: SymbolLocation,
    /// Symbol kind, if the raw type maps to one
    pub kind: Option<SymbolKind>,
    /// Where the symbol is used (0-indexed)
    pub usage_range: Range,
    /// Module name of the definition
    pub module: Option<String>,
    /// Whether the definition lives in a builtin module
    pub builtin: bool,
}

/// A used symbol in the completion-item shape.
///
/// The payload older consumers expect: no resolution, just the reference
/// name and a coarse kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsedCompletionItem {
    /// Reference name
    pub label: String,
    /// Coarse kind
    pub kind: Option<CompletionKind>,
    /// Always `None`
    pub detail: Option<String>,
    /// Always `None`
    pub documentation: Option<String>,
    /// Always `None`
    pub sort_text: Option<String>,
    /// Always `None`
    pub insert_text: Option<String>,
}

impl UsedCompletionItem {
    /// Create an item with only a label and kind.
    #[must_use]
    pub fn new(label: impl Into<String>, kind: Option<CompletionKind>) -> Self {
        Self {
            label: label.into(),
            kind,
            detail: None,
            documentation: None,
            sort_text: None,
            insert_text: None,
        }
    }
}

// ============================================================================
// Operation Results
// ============================================================================

/// Outcome of a document symbol request.
///
/// Returned by [`document_symbols_report`](crate::document_symbols_report).
#[derive(Debug, Clone, Default)]
pub struct SymbolReport {
    /// Records for accepted references, in listing order
    pub symbols: Vec<SymbolRecord>,
    /// Number of references the engine listed
    pub references_seen: usize,
    /// Number of references rejected by the filter
    pub references_filtered: usize,
    /// References abandoned because resolution failed
    pub dropped: Vec<DroppedReference>,
}
