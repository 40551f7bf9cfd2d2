//! Analysis engine boundary.
//!
//! Nereus does not parse source code or resolve scopes itself. An external
//! analysis engine lists the name references of a document and resolves
//! each one to candidate definitions. These traits describe what that
//! engine must provide.
//!
//! Every lookup is fallible: the engine is best effort and may fail on
//! malformed or partially parsed code. Callers match on the returned
//! [`ResolutionError`] instead of unwinding.

use std::path::Path;

use crate::error::ResolutionError;
use crate::types::{ScopeMode, SourcePosition, SourceSpan};

/// A document whose references can be listed.
///
/// # Example
///
/// ```rust
/// use nereus::{Document, ResolutionError, ScopeMode};
/// use nereus::snapshot::SnapshotReference;
///
/// struct Unparsable;
///
/// impl Document for Unparsable {
///     type Reference<'a> = SnapshotReference<'a>;
///
///     fn list_references(
///         &self,
///         _scope: ScopeMode,
///     ) -> Result<Vec<Self::Reference<'_>>, ResolutionError> {
///         Err(ResolutionError::engine("syntax error"))
///     }
/// }
/// ```
pub trait Document {
    /// Reference handle produced by this document.
    type Reference<'a>: Reference
    where
        Self: 'a;

    /// List the name references of the document, in source order.
    ///
    /// The returned sequence is fresh for each call; an empty sequence is a
    /// valid answer for a document the engine could not parse.
    fn list_references(&self, scope: ScopeMode)
    -> Result<Vec<Self::Reference<'_>>, ResolutionError>;
}

/// A single occurrence of a name in a document.
pub trait Reference {
    /// Definition handle produced by resolution.
    type Definition: Definition;

    /// The identifier text.
    fn name(&self) -> &str;

    /// The engine's raw type tag (e.g. `"function"`, `"param"`).
    fn raw_type(&self) -> &str;

    /// Start of the identifier occurrence.
    fn start_position(&self) -> SourcePosition;

    /// End of the identifier occurrence.
    fn end_position(&self) -> SourcePosition;

    /// Span of the identifier occurrence.
    fn span(&self) -> SourceSpan {
        SourceSpan {
            start: self.start_position(),
            end: self.end_position(),
        }
    }

    /// Resolve the reference to candidate definitions.
    ///
    /// Candidates are returned in the engine's order, most likely first.
    fn resolve_definitions(&self) -> Result<Vec<Self::Definition>, ResolutionError>;
}

/// A definition the engine resolved a reference to.
///
/// Definitions are read-only views into the engine's scope tree.
pub trait Definition: Sized {
    /// The defined name.
    fn name(&self) -> &str;

    /// The engine's raw type tag.
    fn raw_type(&self) -> &str;

    /// Name of the module holding the definition.
    fn module_name(&self) -> Option<&str>;

    /// Path of the module holding the definition.
    ///
    /// `None` for builtin or synthetic definitions.
    fn module_path(&self) -> Option<&Path>;

    /// Whether the definition comes from a builtin module.
    fn in_builtin_module(&self) -> bool {
        self.module_path().is_none()
    }

    /// Start of the full defining construct (not just the name token).
    fn start_position(&self) -> SourcePosition;

    /// End of the full defining construct.
    fn end_position(&self) -> SourcePosition;

    /// Span of the full defining construct.
    fn span(&self) -> SourceSpan {
        SourceSpan {
            start: self.start_position(),
            end: self.end_position(),
        }
    }

    /// The lexically enclosing scope, if any.
    fn parent_scope(&self) -> Result<Option<Self>, ResolutionError>;
}
